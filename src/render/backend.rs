//! Surface trait for pluggable strip rendering.
//!
//! The engine produces plain numbers; a [`StripSurface`] turns them into
//! visible changes (CSS transforms and classes in the browser, a recorded list
//! in tests, nothing at all in the simulator).

use crate::engine::FrameOutput;

/// The visual side of a filmstrip: one main strip, one thumbnail strip.
pub trait StripSurface {
    /// Translate the main strip horizontally.
    fn translate_track(&mut self, offset_x: f32);

    /// Translate the thumbnail strip horizontally.
    fn translate_thumbnails(&mut self, offset_x: f32);

    /// Toggle the highlight on the item at `index` and on its thumbnail.
    /// Missing items are ignored.
    fn set_highlight(&mut self, index: usize, active: bool);
}

/// Apply one tick's output: strip translation, highlight swap, thumbnail
/// recentering, in that order.
pub fn apply_frame<S: StripSurface + ?Sized>(surface: &mut S, frame: &FrameOutput) {
    surface.translate_track(frame.track_translation);
    if let Some(change) = frame.focus {
        if let Some(previous) = change.previous {
            surface.set_highlight(previous, false);
        }
        surface.set_highlight(change.current, true);
    }
    if let Some(offset_x) = frame.thumb_translation {
        surface.translate_thumbnails(offset_x);
    }
}

/// Surface that discards everything, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl StripSurface for NullSurface {
    fn translate_track(&mut self, _offset_x: f32) {}

    fn translate_thumbnails(&mut self, _offset_x: f32) {}

    fn set_highlight(&mut self, _index: usize, _active: bool) {}
}
