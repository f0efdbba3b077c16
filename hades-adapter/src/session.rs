use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use hades::{Hades, Host, InputEvent, ScrollPosition};

use crate::{DeltaEmitter, FrameClock, FrameLoop, InputConfig, InputSource};

/// Key under which a session registers its per-frame callback.
pub const FRAME_KEY: &str = "hades_frame";

/// A [`Session`] backed by the adapter-fed [`DeltaEmitter`] and [`FrameLoop`].
pub type StandaloneSession<H> = Session<H, Rc<RefCell<DeltaEmitter>>, Rc<RefCell<FrameLoop>>>;

/// Wires a [`Hades`] controller to an input source and a frame clock.
///
/// The controller is shared with the registered callbacks; they hold weak references, so a
/// dropped session never keeps the controller alive through its sources.
///
/// Adapters either bring their own sources ([`Session::attach`]) or feed the built-in ones
/// ([`Session::standalone`], then [`Session::emit`] / [`Session::frame`]).
pub struct Session<H: Host, I: InputSource, C: FrameClock> {
    hades: Rc<RefCell<Hades<H>>>,
    input: I,
    clock: C,
}

impl<H: Host + 'static, I: InputSource, C: FrameClock> Session<H, I, C> {
    /// Subscribes the controller to `input`, registers it on `clock` under [`FRAME_KEY`] and
    /// starts the clock.
    pub fn attach(hades: Hades<H>, mut input: I, mut clock: C) -> Self {
        let hades = Rc::new(RefCell::new(hades));

        let weak = Rc::downgrade(&hades);
        input.on(Box::new(move |event: InputEvent| {
            let Some(hades) = weak.upgrade() else {
                return;
            };
            let Ok(mut hades) = hades.try_borrow_mut() else {
                awarn!("input delivered while the controller is borrowed; dropped");
                return;
            };
            hades.on_input(event);
        }));

        let weak = Rc::downgrade(&hades);
        clock.add(
            FRAME_KEY,
            Box::new(move |elapsed: f64| {
                let Some(hades) = weak.upgrade() else {
                    return;
                };
                let Ok(mut hades) = hades.try_borrow_mut() else {
                    awarn!(elapsed, "frame delivered while the controller is borrowed; skipped");
                    return;
                };
                hades.on_tick(elapsed);
            }),
        );
        clock.start();

        adebug!(key = FRAME_KEY, "Session::attach");
        Self {
            hades,
            input,
            clock,
        }
    }
}

impl<H: Host, I: InputSource, C: FrameClock> Session<H, I, C> {
    /// Shared handle to the controller.
    pub fn controller(&self) -> Rc<RefCell<Hades<H>>> {
        Rc::clone(&self.hades)
    }

    /// Runs `f` with exclusive access to the controller.
    ///
    /// # Panics
    ///
    /// Panics if the controller is already borrowed (e.g. when called from inside a frame or
    /// scroll callback).
    pub fn with<R>(&self, f: impl FnOnce(&mut Hades<H>) -> R) -> R {
        f(&mut self.hades.borrow_mut())
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn scroll_to(&self, position: impl Into<ScrollPosition>, duration: f64) {
        self.with(|hades| hades.scroll_to(position, duration));
    }

    pub fn play(&self) {
        self.with(Hades::play);
    }

    pub fn pause(&self) {
        self.with(Hades::pause);
    }

    /// Updates the touch multiplier on both the controller settings and the input source.
    pub fn set_touch_multiplier(&mut self, touch_multiplier: f64) {
        self.with(|hades| hades.set_touch_multiplier(touch_multiplier));
        self.input.set_touch_multiplier(touch_multiplier);
    }

    /// Detaches from the input source, unregisters the frame callback and destroys the
    /// controller.
    ///
    /// A shared clock keeps running for its other callbacks.
    pub fn destroy(mut self) {
        self.input.destroy();
        self.clock.remove(FRAME_KEY);
        self.hades.borrow_mut().destroy();
        adebug!("Session::destroy");
    }
}

impl<H: Host + 'static> StandaloneSession<H> {
    /// Attaches `hades` to a fresh [`DeltaEmitter`] (configured from its settings) and a fresh
    /// [`FrameLoop`].
    pub fn standalone(hades: Hades<H>) -> Self {
        let config = InputConfig::from_settings(hades.settings());
        let input = Rc::new(RefCell::new(DeltaEmitter::new(config)));
        let clock = Rc::new(RefCell::new(FrameLoop::new()));
        Self::attach(hades, input, clock)
    }

    /// Pushes an input delta through the emitter.
    pub fn emit(&self, event: InputEvent) -> bool {
        self.input.borrow_mut().emit(event)
    }

    /// Dispatches one frame at `now_ms`. Returns the elapsed time, or `None` while stopped.
    pub fn frame(&self, now_ms: f64) -> Option<f64> {
        self.clock.borrow_mut().frame(now_ms)
    }
}

impl<H: Host, I: InputSource, C: FrameClock> core::fmt::Debug for Session<H, I, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.hades.try_borrow() {
            Ok(hades) => f.debug_struct("Session").field("hades", &*hades).finish(),
            Err(_) => f.debug_struct("Session").finish_non_exhaustive(),
        }
    }
}
