use crate::Vec2;

/// Where a normalized input delta originated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputKind {
    #[default]
    Wheel,
    Touch,
    Pointer,
    Keyboard,
}

/// A normalized per-frame input delta, as produced by an input source.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputEvent {
    pub delta: Vec2,
    pub kind: InputKind,
}

impl InputEvent {
    pub fn new(delta: Vec2, kind: InputKind) -> Self {
        Self { delta, kind }
    }

    pub fn wheel(x: f64, y: f64) -> Self {
        Self::new(Vec2::new(x, y), InputKind::Wheel)
    }

    pub fn touch(x: f64, y: f64) -> Self {
        Self::new(Vec2::new(x, y), InputKind::Touch)
    }
}

/// Notifications delivered to subscribers of a [`crate::Hades`] controller.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HadesEvent {
    /// An input delta was accepted. Carries the scaled event.
    Scroll(InputEvent),
    /// The rendered offset started moving.
    Start,
    /// The rendered offset settled.
    Stop,
}

impl HadesEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scroll(_) => "hades-scroll",
            Self::Start => "hades-start",
            Self::Stop => "hades-stop",
        }
    }
}
