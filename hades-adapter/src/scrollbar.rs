use alloc::vec::Vec;

use hades::{ScrollGeometry, ScrollbarAdapter, ScrollbarSettings, Track, Vec2};

/// The rendering side of a [`Scrollbar`] (DOM nodes, a terminal gutter, an egui painter...).
pub trait TrackRenderer {
    fn mount(&mut self, track: Track);

    fn update(&mut self, thumb: &ThumbGeometry);

    fn unmount(&mut self, track: Track);
}

/// Thumb placement along one track, in the track's own units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbGeometry {
    pub track: Track,
    /// Length of the track (the viewport extent along this axis).
    pub track_size: f64,
    pub size: f64,
    /// Distance from the start of the track to the start of the thumb.
    pub offset: f64,
    /// `false` when there is nothing to scroll on this axis.
    pub visible: bool,
}

impl ThumbGeometry {
    /// Computes the thumb for `track` given the rendered `offset`.
    ///
    /// The thumb covers `viewport² / (viewport + range)` of the track, and its offset follows
    /// progress across the scroll range.
    pub fn compute(track: Track, offset: Vec2, geometry: &ScrollGeometry) -> Self {
        let b = geometry.boundaries;
        let (viewport, min, max, pos) = match track {
            Track::X => (geometry.viewport.width, b.min.x, b.max.x, offset.x),
            Track::Y => (geometry.viewport.height, b.min.y, b.max.y, offset.y),
        };
        let track_size = viewport.max(0.0);
        let range = (max - min).max(0.0);

        if track_size <= 0.0 || range <= 0.0 {
            return Self {
                track,
                track_size,
                size: track_size,
                offset: 0.0,
                visible: false,
            };
        }

        let size = track_size * track_size / (track_size + range);
        let progress = ((pos - min) / range).clamp(0.0, 1.0);
        Self {
            track,
            track_size,
            size,
            offset: progress * (track_size - size),
            visible: true,
        }
    }
}

/// A headless scrollbar implementing [`ScrollbarAdapter`].
///
/// The renderer only hears about a track when its thumb geometry changed since the last frame.
#[derive(Clone, Debug)]
pub struct Scrollbar<R: TrackRenderer> {
    tracks: Vec<Track>,
    renderer: R,
    last: Vec<Option<ThumbGeometry>>,
    destroyed: bool,
}

impl<R: TrackRenderer> Scrollbar<R> {
    /// Mounts one track per configured axis (duplicates are ignored).
    pub fn new(settings: &ScrollbarSettings, mut renderer: R) -> Self {
        let mut tracks = settings.tracks.clone();
        tracks.sort_unstable();
        tracks.dedup();
        for &track in &tracks {
            renderer.mount(track);
        }
        let last = alloc::vec![None; tracks.len()];
        Self {
            tracks,
            renderer,
            last,
            destroyed: false,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Last geometry pushed for `track`.
    pub fn thumb(&self, track: Track) -> Option<ThumbGeometry> {
        let i = self.tracks.iter().position(|&t| t == track)?;
        self.last[i]
    }
}

impl<R: TrackRenderer> ScrollbarAdapter for Scrollbar<R> {
    fn listen(&mut self, offset: Vec2, geometry: &ScrollGeometry) {
        if self.destroyed {
            return;
        }
        for (i, &track) in self.tracks.iter().enumerate() {
            let thumb = ThumbGeometry::compute(track, offset, geometry);
            if self.last[i] == Some(thumb) {
                continue;
            }
            atrace!(track = ?track, size = thumb.size, offset = thumb.offset, "Scrollbar::update");
            self.renderer.update(&thumb);
            self.last[i] = Some(thumb);
        }
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        for &track in &self.tracks {
            self.renderer.unmount(track);
        }
        self.destroyed = true;
    }
}
