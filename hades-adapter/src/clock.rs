use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

/// A named per-frame callback. Receives the elapsed time in milliseconds.
pub type FrameHandler = Box<dyn FnMut(f64)>;

/// Elapsed time reported for the first frame after `start`.
pub const NOMINAL_FRAME_MS: f64 = 1000.0 / 60.0;

/// A source of display-frame ticks.
pub trait FrameClock {
    /// Registers `callback` under `key`. An existing callback with the same key is replaced.
    fn add(&mut self, key: &str, callback: FrameHandler);

    /// Returns `true` if a callback was registered under `key`.
    fn remove(&mut self, key: &str) -> bool;

    fn start(&mut self);

    fn stop(&mut self);
}

impl<T: FrameClock + ?Sized> FrameClock for Rc<RefCell<T>> {
    fn add(&mut self, key: &str, callback: FrameHandler) {
        self.borrow_mut().add(key, callback);
    }

    fn remove(&mut self, key: &str) -> bool {
        self.borrow_mut().remove(key)
    }

    fn start(&mut self) {
        self.borrow_mut().start();
    }

    fn stop(&mut self) {
        self.borrow_mut().stop();
    }
}

/// A frame clock driven by the adapter's own frame loop (e.g. `requestAnimationFrame`, a winit
/// redraw, a terminal timer).
///
/// Callbacks run in registration order. Frames are only dispatched while started.
pub struct FrameLoop {
    callbacks: Vec<(String, FrameHandler)>,
    running: bool,
    last_ms: Option<f64>,
    nominal_frame_ms: f64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
            running: false,
            last_ms: None,
            nominal_frame_ms: NOMINAL_FRAME_MS,
        }
    }

    pub fn with_nominal_frame_ms(mut self, nominal_frame_ms: f64) -> Self {
        self.nominal_frame_ms = nominal_frame_ms;
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.callbacks.iter().any(|(k, _)| k == key)
    }

    /// Dispatches one frame at the timestamp `now_ms`.
    ///
    /// Returns the elapsed time handed to the callbacks, or `None` while stopped.
    pub fn frame(&mut self, now_ms: f64) -> Option<f64> {
        if !self.running {
            return None;
        }
        let elapsed = match self.last_ms {
            Some(last) => now_ms - last,
            None => self.nominal_frame_ms,
        };
        self.last_ms = Some(now_ms);
        for (_, callback) in &mut self.callbacks {
            callback(elapsed);
        }
        Some(elapsed)
    }
}

impl FrameClock for FrameLoop {
    fn add(&mut self, key: &str, callback: FrameHandler) {
        if let Some(slot) = self.callbacks.iter_mut().find(|(k, _)| k == key) {
            slot.1 = callback;
            return;
        }
        self.callbacks.push((key.to_string(), callback));
    }

    fn remove(&mut self, key: &str) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(k, _)| k != key);
        self.callbacks.len() != before
    }

    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
        self.last_ms = None;
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrameLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let keys: Vec<&str> = self.callbacks.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("FrameLoop")
            .field("callbacks", &keys)
            .field("running", &self.running)
            .field("last_ms", &self.last_ms)
            .finish()
    }
}
