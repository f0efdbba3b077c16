use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::emitter::EventEmitter;
use crate::error::{HadesError, Result};
use crate::{
    Boundaries, Callbacks, DirectionPair, EasingOptions, FrameState, HadesEvent, HadesOptions,
    Host, InputEvent, Mode, Motion, ScrollBehavior, ScrollGeometry, ScrollPosition,
    ScrollbarAdapter, ScrollbarSettings, Settings, Size, SubscriptionId, Timeline, Translation,
    Vec2,
};

const VELOCITY_PRECISION: f64 = 10_000.0;

/// A headless smooth-scrolling controller.
///
/// The controller is driven from the outside:
/// - `on_input` for every normalized input delta
/// - `on_tick(elapsed_ms)` once per display frame
///
/// Input accumulates into a target offset (clamped to the boundaries unless infinite scrolling
/// is enabled). Every tick eases the rendered offset toward that target, applies it to the host
/// in virtual mode, derives the velocity and emits `Start`/`Stop` on stillness transitions.
///
/// For wiring the controller to an input source and a frame clock, see the `hades-adapter`
/// crate.
pub struct Hades<H: Host> {
    host: H,
    viewport: H::Element,
    container: H::Element,
    sections: Vec<H::Element>,
    settings: Settings,
    callbacks: Callbacks,
    emitter: EventEmitter,
    timeline: Timeline,

    target: Vec2, // accumulated, unrounded intent
    amount: Vec2, // rendered
    prev_amount: Vec2,
    velocity: Vec2,
    direction: DirectionPair,
    motion: Motion,

    running: bool,
    automatic_scrolling: bool,
    immediate_scrolling: bool,
    destroyed: bool,
    scrollbar: Option<Box<dyn ScrollbarAdapter>>,
}

impl<H: Host> Hades<H> {
    /// Creates a controller.
    ///
    /// Fails when the viewport or the container element is missing. In virtual mode with
    /// sections enabled, the sections are queried from the host once, here.
    pub fn new(options: HadesOptions<H::Element>, mut host: H) -> Result<Self> {
        let HadesOptions {
            settings,
            viewport,
            container,
            callbacks,
        } = options;
        let viewport = viewport.ok_or(HadesError::MissingViewport)?;
        let container = container.ok_or(HadesError::MissingContainer)?;

        let duration = settings.easing.duration;
        if duration.is_nan() || duration <= 0.0 {
            hwarn!(duration, "easing duration must be positive");
        }

        let sections = match settings.sections.selector() {
            Some(selector) if settings.mode == Mode::Virtual => host.query_sections(selector),
            _ => Vec::new(),
        };
        host.hide_backface(&container);

        hdebug!(
            mode = ?settings.mode,
            sections = sections.len(),
            autoplay = settings.autoplay,
            "Hades::new"
        );

        Ok(Self {
            host,
            viewport,
            container,
            sections,
            callbacks,
            emitter: EventEmitter::new(),
            timeline: Timeline::new(duration),
            target: Vec2::ZERO,
            amount: Vec2::ZERO,
            prev_amount: Vec2::ZERO,
            velocity: Vec2::ZERO,
            direction: DirectionPair::default(),
            motion: Motion::Still,
            running: settings.autoplay,
            automatic_scrolling: false,
            immediate_scrolling: false,
            destroyed: false,
            scrollbar: None,
            settings,
        })
    }

    /// Creates a controller and, in virtual mode with a scrollbar configured, builds the
    /// scrollbar adapter from its settings and the viewport element.
    pub fn with_scrollbar<S, F>(
        options: HadesOptions<H::Element>,
        host: H,
        factory: F,
    ) -> Result<Self>
    where
        S: ScrollbarAdapter + 'static,
        F: FnOnce(&ScrollbarSettings, &H::Element) -> S,
    {
        let mut hades = Self::new(options, host)?;
        if hades.is_virtual() {
            if let Some(settings) = &hades.settings.scrollbar {
                let scrollbar = factory(settings, &hades.viewport);
                hades.scrollbar = Some(Box::new(scrollbar));
            }
        }
        Ok(hades)
    }

    /// Attaches (or replaces) the scrollbar adapter.
    ///
    /// Returns `false` (and drops `scrollbar`) outside virtual mode or when no scrollbar is
    /// configured.
    pub fn attach_scrollbar(&mut self, scrollbar: impl ScrollbarAdapter + 'static) -> bool {
        if !self.is_virtual() || self.settings.scrollbar.is_none() || self.destroyed {
            hwarn!(mode = ?self.settings.mode, "scrollbar requires virtual mode and settings");
            return false;
        }
        if let Some(mut prev) = self.scrollbar.replace(Box::new(scrollbar)) {
            prev.destroy();
        }
        true
    }

    pub fn has_scrollbar(&self) -> bool {
        self.scrollbar.is_some()
    }

    /// Integrates an input delta into the target offset.
    ///
    /// Dropped while paused or after `destroy`.
    pub fn on_input(&mut self, event: InputEvent) {
        if self.destroyed || !self.running {
            return;
        }

        // Live input interrupts an eased `scroll_to`.
        if self.automatic_scrolling {
            self.timeline.duration = self.settings.easing.duration;
            self.amount = self.prev_amount;
            self.automatic_scrolling = false;
        }

        let mut event = event;
        let scale = self.settings.scale;
        let raw = event.delta;
        let x = if self.settings.unique_direction && (raw.x == 0.0 || raw.x.is_nan()) {
            raw.y
        } else {
            raw.x
        };
        event.delta = Vec2::new(x * scale, raw.y * scale);
        let delta = event.delta;

        if self.direction.is_initial() {
            self.direction = DirectionPair::from_delta(delta);
        }

        let tentative = Vec2::new(self.target.x + delta.x, self.target.y + delta.y);
        self.target = if self.settings.infinite_scroll {
            tentative
        } else {
            self.settings.boundaries.clamp(tentative)
        };

        let current = DirectionPair::from_delta(delta);
        if !self.settings.smooth_direction_change {
            if current.x != self.direction.x {
                self.target.x = self.amount.x;
            }
            if current.y != self.direction.y {
                self.target.y = self.amount.y;
            }
        }
        self.direction = current;

        htrace!(
            dx = delta.x,
            dy = delta.y,
            target_x = self.target.x,
            target_y = self.target.y,
            "Hades::on_input"
        );

        if self.settings.emit_global {
            self.emitter.emit(&HadesEvent::Scroll(event));
        }
        self.callbacks.scroll(&event);
    }

    /// Advances the animation by `elapsed` milliseconds.
    ///
    /// `elapsed` must be `> 0`: a zero-length frame divides by zero when deriving the velocity,
    /// which then never compares equal to zero and keeps the controller in `Moving`.
    pub fn on_tick(&mut self, elapsed: f64) {
        if self.destroyed {
            return;
        }

        let viewport = self.viewport_size();
        if self.settings.auto_boundaries {
            let container = self.host.size(&self.container);
            self.settings.boundaries = Boundaries::from_sizes(container, viewport);
        }

        self.timeline.target = self.target;

        let elapsed = elapsed.max(0.0).min(self.settings.easing.duration);
        let mut t = self.timeline.progress(elapsed);
        if self.immediate_scrolling {
            t = 1.0;
            self.immediate_scrolling = false;
        }
        let factor = self.settings.easing.mode.sample(t);
        let current = self.timeline.step(factor);

        self.amount = if self.settings.render_by_pixel {
            current.map(round_half_up)
        } else {
            current
        };

        if self.is_virtual() {
            if self.settings.sections.is_enabled() {
                self.render_sections();
            } else if self.settings.render_scroll {
                self.render_container();
            }
        }

        self.velocity = Vec2::new(
            round_velocity(((current.x - self.prev_amount.x) / elapsed).abs()),
            round_velocity(((current.y - self.prev_amount.y) / elapsed).abs()),
        );
        self.prev_amount = current;

        self.update_motion();

        if let Some(scrollbar) = self.scrollbar.as_mut() {
            let geometry = ScrollGeometry {
                boundaries: self.settings.boundaries,
                viewport,
            };
            scrollbar.listen(self.amount, &geometry);
        }

        self.timeline.retarget();

        let state = self.frame_state();
        self.callbacks.frame(&state);
    }

    /// Scrolls to `position` (omitted axes are left alone).
    ///
    /// The target is set as-is, without clamping. In virtual and fake modes a positive
    /// `duration` eases toward it over `duration` milliseconds (until live input interrupts),
    /// while `duration <= 0` renders it on the next tick. Native mode delegates to the host.
    pub fn scroll_to(&mut self, position: impl Into<ScrollPosition>, duration: f64) {
        let position = position.into();
        htrace!(x = ?position.x, y = ?position.y, duration, "Hades::scroll_to");

        if self.is_native() {
            let behavior = if duration == 0.0 {
                ScrollBehavior::Instant
            } else {
                ScrollBehavior::Smooth
            };
            self.host.native_scroll(position, behavior);
        } else if duration > 0.0 {
            self.automatic_scrolling = true;
            self.timeline.duration = duration;
        } else {
            self.immediate_scrolling = true;
        }

        if let Some(x) = position.x {
            self.target.x = x;
        }
        if let Some(y) = position.y {
            self.target.y = y;
        }
    }

    pub fn play(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Releases the scrollbar and drops every subscriber. Input and ticks are ignored afterwards.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        if let Some(mut scrollbar) = self.scrollbar.take() {
            scrollbar.destroy();
        }
        self.emitter.clear();
        self.running = false;
        self.destroyed = true;
        hdebug!("Hades::destroy");
    }

    pub fn subscribe(
        &mut self,
        listener: impl Fn(&HadesEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.emitter.subscribe(Arc::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.emitter.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.emitter.len()
    }

    pub fn create_boundaries(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Boundaries {
        Boundaries::new(x_min, x_max, y_min, y_max)
    }

    pub fn mode(&self) -> Mode {
        self.settings.mode
    }

    pub fn is_virtual(&self) -> bool {
        self.settings.mode == Mode::Virtual
    }

    pub fn is_native(&self) -> bool {
        self.settings.mode == Mode::Native
    }

    pub fn is_fake(&self) -> bool {
        self.settings.mode == Mode::Fake
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_still(&self) -> bool {
        self.motion == Motion::Still
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn direction(&self) -> DirectionPair {
        self.direction
    }

    pub fn boundaries(&self) -> Boundaries {
        self.settings.boundaries
    }

    /// The rendered offset of the last frame.
    pub fn amount(&self) -> Vec2 {
        self.amount
    }

    /// The accumulated offset the animation converges to.
    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            amount: self.amount,
            velocity: self.velocity,
            direction: self.direction,
            still: self.is_still(),
        }
    }

    /// Takes effect on the next tick. The timeline duration follows unless an eased
    /// `scroll_to` is in flight.
    pub fn set_easing(&mut self, easing: EasingOptions) {
        self.settings.easing = easing;
        if !self.automatic_scrolling {
            self.timeline.duration = easing.duration;
        }
    }

    pub fn set_infinite_scroll(&mut self, infinite_scroll: bool) {
        self.settings.infinite_scroll = infinite_scroll;
    }

    pub fn set_emit_global(&mut self, emit_global: bool) {
        self.settings.emit_global = emit_global;
    }

    /// Replaces the boundaries. A target outside the new region jumps back inside on the next
    /// tick.
    pub fn set_boundaries(&mut self, boundaries: Boundaries) {
        self.settings.boundaries = boundaries;
        if self.target.y > boundaries.max.y {
            self.scroll_to(ScrollPosition::y(boundaries.max.y), 0.0);
        } else if self.target.y < boundaries.min.y {
            self.scroll_to(ScrollPosition::y(boundaries.min.y), 0.0);
        }
        if self.target.x > boundaries.max.x {
            self.scroll_to(ScrollPosition::x(boundaries.max.x), 0.0);
        } else if self.target.x < boundaries.min.x {
            self.scroll_to(ScrollPosition::x(boundaries.min.x), 0.0);
        }
    }

    /// Stored for the input source; the controller itself does not scale touch input.
    pub fn set_touch_multiplier(&mut self, touch_multiplier: f64) {
        self.settings.touch_multiplier = touch_multiplier;
    }

    pub fn set_smooth_direction_change(&mut self, smooth_direction_change: bool) {
        self.settings.smooth_direction_change = smooth_direction_change;
    }

    pub fn set_render_scroll(&mut self, render_scroll: bool) {
        self.settings.render_scroll = render_scroll;
    }

    fn viewport_size(&self) -> Size {
        if self.is_virtual() {
            self.host.size(&self.viewport)
        } else {
            self.host.window_size()
        }
    }

    fn render_container(&mut self) {
        let x = if self.settings.lock_x { 0.0 } else { -self.amount.x };
        let y = if self.settings.lock_y { 0.0 } else { -self.amount.y };
        self.host.translate(&self.container, Translation::new(x, y));
    }

    // A section follows the scroll only while the previous frame's offset lies inside its span.
    fn render_sections(&mut self) {
        let window_height = self.host.window_size().height;
        let translation = Translation::new(0.0, -self.amount.y);
        let mut before = 0.0;
        for section in &self.sections {
            let height = self.host.size(section).height;
            if self.prev_amount.y > before - window_height
                && before + height - window_height > 0.0
            {
                self.host.translate(section, translation);
            }
            before += height;
        }
    }

    fn update_motion(&mut self) {
        let next = if self.velocity.x == 0.0 && self.velocity.y == 0.0 {
            Motion::Still
        } else {
            Motion::Moving
        };
        if next == self.motion {
            return;
        }
        self.motion = next;

        let event = match next {
            Motion::Moving => HadesEvent::Start,
            Motion::Still => HadesEvent::Stop,
        };
        hdebug!(
            event = event.name(),
            x = self.amount.x,
            y = self.amount.y,
            "Hades::update_motion"
        );
        if self.settings.emit_global {
            self.emitter.emit(&event);
        }
    }
}

impl<H: Host> core::fmt::Debug for Hades<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hades")
            .field("settings", &self.settings)
            .field("timeline", &self.timeline)
            .field("target", &self.target)
            .field("amount", &self.amount)
            .field("velocity", &self.velocity)
            .field("direction", &self.direction)
            .field("motion", &self.motion)
            .field("running", &self.running)
            .field("destroyed", &self.destroyed)
            .field("sections", &self.sections.len())
            .field("scrollbar", &self.scrollbar.is_some())
            .finish_non_exhaustive()
    }
}

/// Rounds half-way values toward positive infinity (`2.5 → 3`, `-2.5 → -2`).
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Keeps four decimal digits. Non-finite values pass through.
fn round_velocity(v: f64) -> f64 {
    (v * VELOCITY_PRECISION).round() / VELOCITY_PRECISION
}
