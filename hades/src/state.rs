use crate::{Boundaries, DirectionPair, Size, Vec2};

/// Whether the rendered offset changed during the last frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    #[default]
    Still,
    Moving,
}

/// A lightweight snapshot of the controller after a frame.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    /// Rendered offset (rounded when `render_by_pixel` is set).
    pub amount: Vec2,
    pub velocity: Vec2,
    pub direction: DirectionPair,
    pub still: bool,
}

/// Geometry handed to a scrollbar adapter together with the rendered offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollGeometry {
    pub boundaries: Boundaries,
    pub viewport: Size,
}
