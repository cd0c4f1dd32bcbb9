//! Viewport extents and the scroll range derived from them.

use super::StripLayout;
use crate::config::CenteringAdjustment;

/// Visible extents the engine measures against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Width of the area the main strip scrolls through (window `innerWidth`)
    pub extent: f32,
    /// Width of the element the thumbnail strip is centered within
    pub thumb_container_extent: f32,
}

impl Viewport {
    pub fn new(extent: f32, thumb_container_extent: f32) -> Self {
        Self {
            extent: sanitize_extent(extent),
            thumb_container_extent: sanitize_extent(thumb_container_extent),
        }
    }

    /// Horizontal midpoint of the viewport.
    pub fn center(&self) -> f32 {
        self.extent / 2.0
    }

    pub fn resize(&mut self, extent: f32) {
        self.extent = sanitize_extent(extent);
    }

    pub fn resize_thumb_container(&mut self, extent: f32) {
        self.thumb_container_extent = sanitize_extent(extent);
    }

    /// Scroll range for `layout` seen through this viewport.
    pub fn max_offset(&self, layout: &StripLayout, centering: CenteringAdjustment) -> f32 {
        max_offset(
            layout.content_extent(),
            self.extent,
            centering.amount(self.extent),
        )
    }
}

/// `max(0, content - viewport + adjustment)`; any non-finite input yields 0.
pub fn max_offset(content_extent: f32, viewport_extent: f32, adjustment: f32) -> f32 {
    let raw = content_extent - viewport_extent + adjustment;
    if raw.is_finite() {
        raw.max(0.0)
    } else {
        0.0
    }
}

fn sanitize_extent(extent: f32) -> f32 {
    if extent.is_finite() {
        extent.max(0.0)
    } else {
        0.0
    }
}
