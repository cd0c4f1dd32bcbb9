//! Focus tracking: which item sits nearest the viewport center.

use serde::Serialize;

use crate::layout::ItemRect;

/// Index of the item nearest `center_line`.
///
/// Ties go to the earliest index; items with a non-finite center are skipped.
pub fn nearest_to_center(items: &[ItemRect], center_line: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, item) in items.iter().enumerate() {
        let distance = (item.center() - center_line).abs();
        if !distance.is_finite() {
            continue;
        }
        match best {
            Some((_, min)) if distance >= min => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Translation that puts the center of `thumb` at the center of its container.
pub fn thumbnail_translation(thumb: ItemRect, container_extent: f32) -> f32 {
    -thumb.center() + container_extent / 2.0
}

/// A change of the focused item, reported once per change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusChange {
    /// Item losing the highlight, if any
    pub previous: Option<usize>,
    /// Item gaining the highlight
    pub current: usize,
}

/// Focus state for one open view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusState {
    active: Option<usize>,
}

impl FocusState {
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Re-scan `items` against `center_line`; report a change if the nearest
    /// item differs from the active one. An empty scan never clears focus.
    pub fn track(&mut self, items: &[ItemRect], center_line: f32) -> Option<FocusChange> {
        let nearest = nearest_to_center(items, center_line)?;
        if self.active == Some(nearest) {
            return None;
        }
        let change = FocusChange {
            previous: self.active,
            current: nearest,
        };
        self.active = Some(nearest);
        Some(change)
    }
}

/// Translation of the thumbnail strip, eased or assigned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbTrack {
    pub current: f32,
    pub target: f32,
}

impl ThumbTrack {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Jump to `translation`.
    pub fn assign(&mut self, translation: f32) {
        self.current = translation;
        self.target = translation;
    }

    /// Step toward the target. Returns the new translation while still moving.
    pub fn ease(&mut self, factor: f32) -> Option<f32> {
        let gap = self.target - self.current;
        if gap.abs() < THUMB_SETTLE_EPSILON {
            if gap.abs() > 0.0 {
                self.current = self.target;
                return Some(self.current);
            }
            return None;
        }
        self.current += gap * factor;
        Some(self.current)
    }
}

/// Below this gap the eased thumbnail track snaps onto its target.
const THUMB_SETTLE_EPSILON: f32 = 0.01;

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::layout::StripLayout;

    #[test]
    fn picks_exact_center() {
        let layout = StripLayout::uniform(4, 100.0, 0.0);
        assert_eq!(nearest_to_center(layout.items(), 150.0), Some(1));
    }

    #[test]
    fn tie_goes_to_first() {
        let layout = StripLayout::uniform(4, 100.0, 0.0);
        // 100 is equidistant from centers 50 and 150
        assert_eq!(nearest_to_center(layout.items(), 100.0), Some(0));
    }

    #[test]
    fn empty_items_no_focus() {
        let mut focus = FocusState::default();
        assert_eq!(focus.track(&[], 0.0), None);
        assert_eq!(focus.active(), None);
    }

    #[test]
    fn change_reported_once() {
        let layout = StripLayout::uniform(4, 100.0, 0.0);
        let mut focus = FocusState::default();
        let first = focus.track(layout.items(), 240.0).unwrap();
        assert_eq!(
            first,
            FocusChange {
                previous: None,
                current: 2
            }
        );
        assert_eq!(focus.track(layout.items(), 260.0), None);
        let next = focus.track(layout.items(), 330.0).unwrap();
        assert_eq!(next.previous, Some(2));
        assert_eq!(next.current, 3);
    }

    #[test]
    fn thumbnail_centered_in_container() {
        let thumb = ItemRect::new(300.0, 60.0);
        assert_eq!(thumbnail_translation(thumb, 400.0), -130.0);
    }

    #[test]
    fn eased_thumb_track_snaps_when_close() {
        let mut track = ThumbTrack {
            current: 0.0,
            target: 0.005,
        };
        assert_eq!(track.ease(0.5), Some(0.005));
        assert_eq!(track.ease(0.5), None);
    }
}
