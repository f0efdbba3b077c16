//! A headless smooth/virtual scrolling controller.
//!
//! The controller intercepts normalized input deltas, accumulates a scroll offset, and eases the
//! rendered offset toward it once per frame. The result is applied as a translation on a render
//! target (virtual mode), delegated to the platform (native mode), or only computed (fake mode).
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - element measurement and translation (see [`Host`])
//! - normalized input deltas (`Hades::on_input`)
//! - a per-frame elapsed time (`Hades::on_tick`)
//!
//! For input/clock sources, session wiring and a headless scrollbar, see the `hades-adapter`
//! crate.
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod easing;
mod emitter;
mod error;
mod event;
mod hades;
mod host;
mod options;
mod settings;
mod state;
mod timeline;
mod types;

#[cfg(test)]
mod tests;

pub use easing::{Easing, EasingOptions};
pub use emitter::{Listener, SubscriptionId};
pub use error::HadesError;
pub use event::{HadesEvent, InputEvent, InputKind};
pub use hades::Hades;
pub use host::{Host, ScrollbarAdapter};
pub use options::{Callbacks, FrameCallback, HadesOptions, ScrollCallback};
pub use settings::{DEFAULT_SECTION_SELECTOR, ScrollbarSettings, Sections, Settings};
pub use state::{FrameState, Motion, ScrollGeometry};
pub use timeline::Timeline;
pub use types::{
    Boundaries, Direction, DirectionPair, Mode, ScrollBehavior, ScrollPosition, Size, Track,
    Translation, Vec2,
};
