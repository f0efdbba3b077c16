use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::{Boundaries, EasingOptions, Mode, Track};

/// Selector used when sections are enabled without an explicit selector.
pub const DEFAULT_SECTION_SELECTOR: &str = ".hades-section";

/// Per-section rendering configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sections {
    /// Translate the whole container.
    #[default]
    Disabled,
    /// Translate the sections matched by [`DEFAULT_SECTION_SELECTOR`].
    Enabled,
    /// Translate the sections matched by a custom selector.
    Selector(String),
}

impl Sections {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    pub fn selector(&self) -> Option<&str> {
        match self {
            Self::Disabled => None,
            Self::Enabled => Some(DEFAULT_SECTION_SELECTOR),
            Self::Selector(s) => Some(s.as_str()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollbarSettings {
    pub tracks: Vec<Track>,
}

impl Default for ScrollbarSettings {
    fn default() -> Self {
        Self {
            tracks: vec![Track::Y],
        }
    }
}

/// Plain-data controller configuration.
///
/// Every field has an explicit default. With `feature = "serde"`, partial documents are merged
/// over [`Settings::default`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    pub mode: Mode,
    pub easing: EasingOptions,
    /// Skip boundary clamping of the accumulated offset.
    pub infinite_scroll: bool,
    /// Notify subscribers of scroll/start/stop events.
    pub emit_global: bool,
    /// Round the rendered offset to whole pixels.
    pub render_by_pixel: bool,
    pub lock_x: bool,
    pub lock_y: bool,
    pub boundaries: Boundaries,
    /// Recompute `boundaries` from measured container/viewport sizes every frame.
    pub auto_boundaries: bool,
    pub sections: Sections,
    /// Start accepting input right after construction.
    pub autoplay: bool,
    /// Forwarded to the input source for touch deltas.
    pub touch_multiplier: f64,
    /// Accept input that reverses direction instead of discarding it for one event.
    pub smooth_direction_change: bool,
    /// Apply the container translation in virtual mode.
    pub render_scroll: bool,
    pub scrollbar: Option<ScrollbarSettings>,
    /// Multiplier applied to every input delta.
    pub scale: f64,
    /// Drive the x axis from whichever input axis is nonzero.
    pub unique_direction: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Virtual,
            easing: EasingOptions::default(),
            infinite_scroll: false,
            emit_global: true,
            render_by_pixel: true,
            lock_x: true,
            lock_y: false,
            boundaries: Boundaries::new(0.0, 0.0, 0.0, 0.0),
            auto_boundaries: true,
            sections: Sections::Disabled,
            autoplay: true,
            touch_multiplier: 1.5,
            smooth_direction_change: false,
            render_scroll: true,
            scrollbar: Some(ScrollbarSettings::default()),
            scale: 1.0,
            unique_direction: false,
        }
    }
}
