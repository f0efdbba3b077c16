use alloc::sync::Arc;

use crate::{
    Boundaries, EasingOptions, FrameState, InputEvent, Mode, ScrollbarSettings, Sections, Settings,
};

/// A callback fired at the end of every frame.
pub type FrameCallback = Arc<dyn Fn(&FrameState) + Send + Sync>;

/// A callback fired for every accepted input event (after scaling).
pub type ScrollCallback = Arc<dyn Fn(&InputEvent) + Send + Sync>;

/// User callbacks. Missing callbacks are no-ops.
#[derive(Clone, Default)]
pub struct Callbacks {
    pub frame: Option<FrameCallback>,
    pub scroll: Option<ScrollCallback>,
}

impl Callbacks {
    pub(crate) fn frame(&self, state: &FrameState) {
        if let Some(cb) = &self.frame {
            cb(state);
        }
    }

    pub(crate) fn scroll(&self, event: &InputEvent) {
        if let Some(cb) = &self.scroll {
            cb(event);
        }
    }
}

impl core::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callbacks")
            .field("frame", &self.frame.is_some())
            .field("scroll", &self.scroll.is_some())
            .finish()
    }
}

/// Configuration for [`crate::Hades`].
///
/// `E` is the host's element handle. `viewport` and `container` are required; their absence is
/// reported by [`crate::Hades::new`].
pub struct HadesOptions<E> {
    pub settings: Settings,
    pub viewport: Option<E>,
    pub container: Option<E>,
    pub callbacks: Callbacks,
}

impl<E: Clone> Clone for HadesOptions<E> {
    fn clone(&self) -> Self {
        Self {
            settings: self.settings.clone(),
            viewport: self.viewport.clone(),
            container: self.container.clone(),
            callbacks: self.callbacks.clone(),
        }
    }
}

impl<E> Default for HadesOptions<E> {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            viewport: None,
            container: None,
            callbacks: Callbacks::default(),
        }
    }
}

impl<E> HadesOptions<E> {
    /// Creates options with default settings for the given viewport and container.
    pub fn new(viewport: E, container: E) -> Self {
        Self {
            viewport: Some(viewport),
            container: Some(container),
            ..Self::default()
        }
    }

    /// Creates options from previously loaded settings.
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn with_viewport(mut self, viewport: E) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn with_container(mut self, container: E) -> Self {
        self.container = Some(container);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.settings.mode = mode;
        self
    }

    pub fn with_easing(mut self, easing: EasingOptions) -> Self {
        self.settings.easing = easing;
        self
    }

    pub fn with_infinite_scroll(mut self, infinite_scroll: bool) -> Self {
        self.settings.infinite_scroll = infinite_scroll;
        self
    }

    pub fn with_emit_global(mut self, emit_global: bool) -> Self {
        self.settings.emit_global = emit_global;
        self
    }

    pub fn with_render_by_pixel(mut self, render_by_pixel: bool) -> Self {
        self.settings.render_by_pixel = render_by_pixel;
        self
    }

    pub fn with_lock(mut self, lock_x: bool, lock_y: bool) -> Self {
        self.settings.lock_x = lock_x;
        self.settings.lock_y = lock_y;
        self
    }

    /// Sets fixed boundaries and turns off automatic boundaries.
    pub fn with_boundaries(mut self, boundaries: Boundaries) -> Self {
        self.settings.boundaries = boundaries;
        self.settings.auto_boundaries = false;
        self
    }

    pub fn with_auto_boundaries(mut self, auto_boundaries: bool) -> Self {
        self.settings.auto_boundaries = auto_boundaries;
        self
    }

    pub fn with_sections(mut self, sections: Sections) -> Self {
        self.settings.sections = sections;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.settings.autoplay = autoplay;
        self
    }

    pub fn with_touch_multiplier(mut self, touch_multiplier: f64) -> Self {
        self.settings.touch_multiplier = touch_multiplier;
        self
    }

    pub fn with_smooth_direction_change(mut self, smooth_direction_change: bool) -> Self {
        self.settings.smooth_direction_change = smooth_direction_change;
        self
    }

    pub fn with_render_scroll(mut self, render_scroll: bool) -> Self {
        self.settings.render_scroll = render_scroll;
        self
    }

    pub fn with_scrollbar(mut self, scrollbar: Option<ScrollbarSettings>) -> Self {
        self.settings.scrollbar = scrollbar;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.settings.scale = scale;
        self
    }

    pub fn with_unique_direction(mut self, unique_direction: bool) -> Self {
        self.settings.unique_direction = unique_direction;
        self
    }

    pub fn with_on_frame(
        mut self,
        on_frame: Option<impl Fn(&FrameState) + Send + Sync + 'static>,
    ) -> Self {
        self.callbacks.frame = on_frame.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(&InputEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.callbacks.scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }
}

impl<E: core::fmt::Debug> core::fmt::Debug for HadesOptions<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HadesOptions")
            .field("settings", &self.settings)
            .field("viewport", &self.viewport)
            .field("container", &self.container)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}
