//! Item positions along one horizontal strip.

use serde::{Deserialize, Serialize};

/// Position and width of one item, in strip coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemRect {
    /// Distance from the strip's leading edge (DOM `offsetLeft`)
    pub offset: f32,
    /// Item width (DOM `offsetWidth`)
    pub extent: f32,
}

impl ItemRect {
    pub fn new(offset: f32, extent: f32) -> Self {
        Self { offset, extent }
    }

    pub fn center(&self) -> f32 {
        self.offset + self.extent / 2.0
    }

    pub fn end(&self) -> f32 {
        self.offset + self.extent
    }
}

/// Measured layout of a strip: ordered items plus the total scrollable extent.
///
/// Items are indexed like the image sequence. A layout may hold fewer items than
/// the sequence while images are still decoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StripLayout {
    items: Vec<ItemRect>,
    content_extent: f32,
}

impl StripLayout {
    /// Layout whose content extent is the furthest item end.
    pub fn new(items: Vec<ItemRect>) -> Self {
        let content_extent = items.iter().map(ItemRect::end).fold(0.0_f32, f32::max);
        Self {
            items,
            content_extent,
        }
    }

    /// Layout with an explicitly measured content extent (DOM `scrollWidth`),
    /// which may include padding past the last item.
    pub fn with_content_extent(items: Vec<ItemRect>, content_extent: f32) -> Self {
        let natural = items.iter().map(ItemRect::end).fold(0.0_f32, f32::max);
        let content_extent = if content_extent.is_finite() {
            content_extent.max(natural)
        } else {
            natural
        };
        Self {
            items,
            content_extent,
        }
    }

    /// Lay items out back to back with `gap` between neighbours.
    pub fn from_extents(extents: &[f32], gap: f32) -> Self {
        let mut cursor = 0.0_f32;
        let mut items = Vec::with_capacity(extents.len());
        for (i, &extent) in extents.iter().enumerate() {
            if i > 0 {
                cursor += gap;
            }
            items.push(ItemRect::new(cursor, extent));
            cursor += extent;
        }
        Self {
            items,
            content_extent: cursor,
        }
    }

    /// `count` items of equal width.
    pub fn uniform(count: usize, extent: f32, gap: f32) -> Self {
        Self::from_extents(&vec![extent; count], gap)
    }

    pub fn items(&self) -> &[ItemRect] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<ItemRect> {
        self.items.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }
}
