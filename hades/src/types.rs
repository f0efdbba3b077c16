use core::fmt;

/// A pair of real numbers used for offsets, deltas and velocities.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A partial position for programmatic scrolling. Omitted axes keep their current value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPosition {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl ScrollPosition {
    pub fn x(x: f64) -> Self {
        Self {
            x: Some(x),
            y: None,
        }
    }

    pub fn y(y: f64) -> Self {
        Self {
            x: None,
            y: Some(y),
        }
    }

    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}

impl From<Vec2> for ScrollPosition {
    fn from(v: Vec2) -> Self {
        Self::xy(v.x, v.y)
    }
}

/// Measured size of a host element (or of the host window).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned clamp region for the accumulated scroll offset.
///
/// `min <= max` on both axes is expected but not enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundaries {
    pub min: Vec2,
    pub max: Vec2,
}

impl Boundaries {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            min: Vec2::new(x_min, y_min),
            max: Vec2::new(x_max, y_max),
        }
    }

    /// Boundaries that let a `container` scroll inside a `viewport`.
    ///
    /// The minimum is always the origin; the maximum never goes negative.
    pub fn from_sizes(container: Size, viewport: Size) -> Self {
        let max_x = if container.width < viewport.width {
            0.0
        } else {
            container.width - viewport.width
        };
        let max_y = if container.height < viewport.height {
            0.0
        } else {
            container.height - viewport.height
        };
        Self::new(0.0, max_x, 0.0, max_y)
    }

    pub fn clamp(&self, v: Vec2) -> Vec2 {
        Vec2 {
            x: v.x.max(self.min.x).min(self.max.x),
            y: v.y.max(self.min.y).min(self.max.y),
        }
    }

    pub fn contains(&self, v: Vec2) -> bool {
        v.x >= self.min.x && v.x <= self.max.x && v.y >= self.min.y && v.y <= self.max.y
    }

    /// Scrollable distance per axis (`max - min`).
    pub fn range(&self) -> Vec2 {
        Vec2 {
            x: self.max.x - self.min.x,
            y: self.max.y - self.min.y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// No input has been received yet.
    #[default]
    Initial,
    Up,
    Down,
}

impl Direction {
    /// Positive deltas scroll down; zero and negative deltas count as up.
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 { Self::Down } else { Self::Up }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionPair {
    pub x: Direction,
    pub y: Direction,
}

impl DirectionPair {
    pub fn from_delta(delta: Vec2) -> Self {
        Self {
            x: Direction::from_delta(delta.x),
            y: Direction::from_delta(delta.y),
        }
    }

    pub fn is_initial(&self) -> bool {
        self.x == Direction::Initial || self.y == Direction::Initial
    }
}

/// How the computed offset reaches the screen. Fixed at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Offsets are computed here and rendered as translations on the container.
    #[default]
    Virtual,
    /// Input is only observed; scrolling is left to the platform.
    Native,
    /// Offsets are computed but neither rendered nor delegated.
    Fake,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Track {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Jump to the target immediately.
    #[default]
    Instant,
    /// Let the platform animate the scroll.
    Smooth,
}

/// Translation applied to a render target.
///
/// `Display` renders the CSS transform value, e.g. `translate3d(0px, -120px, 0px)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

impl Translation {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Negative zero would print as "-0px".
        let x = if self.x == 0.0 { 0.0 } else { self.x };
        let y = if self.y == 0.0 { 0.0 } else { self.y };
        write!(f, "translate3d({x}px, {y}px, 0px)")
    }
}
