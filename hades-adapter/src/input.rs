use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use hades::{InputEvent, InputKind, Mode, Settings};

/// The single subscriber of an [`InputSource`].
pub type DeltaHandler = Box<dyn FnMut(InputEvent)>;

/// A source of normalized input deltas (wheel, touch, pointer, keyboard).
pub trait InputSource {
    /// Registers the subscriber, replacing any previous one.
    fn on(&mut self, handler: DeltaHandler);

    /// Detaches the subscriber. No events are delivered afterwards.
    fn destroy(&mut self);

    fn set_touch_multiplier(&mut self, _touch_multiplier: f64) {}
}

impl<T: InputSource + ?Sized> InputSource for Rc<RefCell<T>> {
    fn on(&mut self, handler: DeltaHandler) {
        self.borrow_mut().on(handler);
    }

    fn destroy(&mut self) {
        self.borrow_mut().destroy();
    }

    fn set_touch_multiplier(&mut self, touch_multiplier: f64) {
        self.borrow_mut().set_touch_multiplier(touch_multiplier);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputConfig {
    pub mode: Mode,
    pub touch_multiplier: f64,
}

impl InputConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            mode: settings.mode,
            touch_multiplier: settings.touch_multiplier,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// An [`InputSource`] fed by the adapter.
///
/// UI glue pushes already-normalized deltas with [`DeltaEmitter::emit`]; touch deltas are scaled
/// by the configured touch multiplier before delivery.
pub struct DeltaEmitter {
    config: InputConfig,
    handler: Option<DeltaHandler>,
    destroyed: bool,
}

impl DeltaEmitter {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            handler: None,
            destroyed: false,
        }
    }

    pub fn config(&self) -> InputConfig {
        self.config
    }

    pub fn has_subscriber(&self) -> bool {
        self.handler.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Delivers `event` to the subscriber.
    ///
    /// Returns `false` when nothing was delivered (no subscriber, or destroyed).
    pub fn emit(&mut self, event: InputEvent) -> bool {
        if self.destroyed {
            return false;
        }
        let mut event = event;
        if event.kind == InputKind::Touch {
            let m = self.config.touch_multiplier;
            event.delta = event.delta.map(|d| d * m);
        }
        let Some(handler) = self.handler.as_mut() else {
            return false;
        };
        handler(event);
        true
    }
}

impl InputSource for DeltaEmitter {
    fn on(&mut self, handler: DeltaHandler) {
        if self.destroyed {
            return;
        }
        self.handler = Some(handler);
    }

    fn destroy(&mut self) {
        self.handler = None;
        self.destroyed = true;
    }

    fn set_touch_multiplier(&mut self, touch_multiplier: f64) {
        self.config.touch_multiplier = touch_multiplier;
    }
}

impl Default for DeltaEmitter {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl core::fmt::Debug for DeltaEmitter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeltaEmitter")
            .field("config", &self.config)
            .field("has_subscriber", &self.handler.is_some())
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
