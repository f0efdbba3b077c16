use alloc::vec::Vec;

use crate::{ScrollBehavior, ScrollGeometry, ScrollPosition, Size, Translation, Vec2};

/// The environment a controller renders into (typically a DOM document).
///
/// The controller never holds UI objects itself: it keeps `Element` handles and asks the host to
/// measure and style them.
pub trait Host {
    type Element;

    /// Current bounding size of `element`.
    fn size(&self, element: &Self::Element) -> Size;

    /// Size of the host window (the viewport in native mode).
    fn window_size(&self) -> Size;

    /// Elements matched by `selector`, in document order.
    fn query_sections(&self, selector: &str) -> Vec<Self::Element>;

    /// Applies one-time styling to the container before the first frame.
    fn hide_backface(&mut self, _container: &Self::Element) {}

    /// Sets the translation of `element`.
    fn translate(&mut self, element: &Self::Element, translation: Translation);

    /// Delegates to the platform scroll primitive (native mode only).
    fn native_scroll(&mut self, position: ScrollPosition, behavior: ScrollBehavior);
}

/// A scrollbar indicator driven by the controller.
///
/// `listen` is invoked once per frame with the rendered offset.
pub trait ScrollbarAdapter {
    fn listen(&mut self, offset: Vec2, geometry: &ScrollGeometry);

    fn destroy(&mut self);
}
