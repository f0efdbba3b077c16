use core::fmt;

/// Easing curves mapping normalized time `t ∈ [0, 1]` to an interpolation factor.
///
/// Every named curve maps `0 → 0` and `1 → 1`.
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    SmoothStep,
    /// A caller-supplied curve. Not serializable.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(fn(f64) -> f64),
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::QuadIn => t * t,
            Self::QuadOut => t * (2.0 - t),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::QuartIn => t.powi(4),
            Self::QuartOut => 1.0 - (t - 1.0).powi(4),
            Self::QuartInOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - 8.0 * (t - 1.0).powi(4)
                }
            }
            Self::QuintIn => t.powi(5),
            Self::QuintOut => 1.0 + (t - 1.0).powi(5),
            Self::QuintInOut => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 + 16.0 * (t - 1.0).powi(5)
                }
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::Custom(f) => f(t),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::QuadIn => "quad-in",
            Self::QuadOut => "quad-out",
            Self::QuadInOut => "quad-in-out",
            Self::CubicIn => "cubic-in",
            Self::CubicOut => "cubic-out",
            Self::CubicInOut => "cubic-in-out",
            Self::QuartIn => "quart-in",
            Self::QuartOut => "quart-out",
            Self::QuartInOut => "quart-in-out",
            Self::QuintIn => "quint-in",
            Self::QuintOut => "quint-out",
            Self::QuintInOut => "quint-in-out",
            Self::SmoothStep => "smooth-step",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(_) => f.write_str("Custom(..)"),
            other => f.write_str(other.name()),
        }
    }
}

/// The easing curve together with the convergence duration (milliseconds).
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EasingOptions {
    pub mode: Easing,
    /// Must be `> 0`.
    pub duration: f64,
}

impl EasingOptions {
    pub fn new(mode: Easing, duration: f64) -> Self {
        Self { mode, duration }
    }
}

impl Default for EasingOptions {
    fn default() -> Self {
        Self {
            mode: Easing::Linear,
            duration: 1000.0,
        }
    }
}
