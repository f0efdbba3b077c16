//! Adapter utilities for the `hades` crate.
//!
//! The `hades` controller is a push-driven state machine. This crate provides the framework-
//! neutral pieces an adapter needs around it:
//!
//! - Input sources ([`InputSource`], plus the adapter-fed [`DeltaEmitter`])
//! - Frame clocks ([`FrameClock`], plus the adapter-driven [`FrameLoop`])
//! - Session wiring of a controller to both ([`Session`])
//! - A headless scrollbar ([`Scrollbar`]) rendering through a [`TrackRenderer`]
//!
//! No DOM, winit or terminal bindings live here.
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod clock;
mod input;
mod scrollbar;
mod session;


pub use clock::{FrameClock, FrameHandler, FrameLoop, NOMINAL_FRAME_MS};
pub use input::{DeltaEmitter, DeltaHandler, InputConfig, InputSource};
pub use scrollbar::{Scrollbar, ThumbGeometry, TrackRenderer};
pub use session::{FRAME_KEY, Session, StandaloneSession};
