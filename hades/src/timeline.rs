use crate::Vec2;

/// Interpolation state advanced once per frame.
///
/// The timeline is retargeted every frame: `target` follows the latest accumulated offset and
/// `initial` is reset to `current` after each step, so `duration` controls the convergence rate
/// rather than the length of a single animation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    pub start: f64,
    /// Milliseconds. Must be `> 0`.
    pub duration: f64,
    pub initial: Vec2,
    pub target: Vec2,
    pub current: Vec2,
}

impl Timeline {
    pub fn new(duration: f64) -> Self {
        Self {
            start: 0.0,
            duration,
            initial: Vec2::ZERO,
            target: Vec2::ZERO,
            current: Vec2::ZERO,
        }
    }

    /// Normalized time for `elapsed` milliseconds (not clamped).
    pub fn progress(&self, elapsed: f64) -> f64 {
        elapsed / self.duration
    }

    /// Interpolates `current` between `initial` and `target` by an eased `factor`.
    pub fn step(&mut self, factor: f64) -> Vec2 {
        self.current = Vec2 {
            x: self.initial.x + factor * (self.target.x - self.initial.x),
            y: self.initial.y + factor * (self.target.y - self.initial.y),
        };
        self.current
    }

    /// Makes the last interpolated value the source of the next step.
    pub fn retarget(&mut self) {
        self.initial = self.current;
    }
}
