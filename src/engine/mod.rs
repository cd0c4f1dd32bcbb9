//! The scroll-focus engine.
//!
//! [`ScrollFocusEngine`] owns everything one gallery view needs:
//! - the image sequence and the measured layouts of both strips
//! - scroll state (current, target and maximum offset)
//! - focus state (the active index) and the thumbnail track
//! - the frame loop handle that decides whether a tick may run
//!
//! It is platform-free; hosts feed it measurements and inputs and apply the
//! [`FrameOutput`] each tick returns.

mod focus;
mod frame_loop;
mod input;
mod scroll;

pub use focus::{nearest_to_center, thumbnail_translation, FocusChange, FocusState, ThumbTrack};
pub use frame_loop::{FrameLoop, LoopToken};
pub use input::{InputEvent, Intent, Strip};
pub use scroll::{elastic_bounds, ScrollState};

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::{EngineConfig, ThumbCentering, WheelPolicy};
use crate::gallery::ImageSequence;
use crate::layout::{StripLayout, Viewport};

/// Everything a host must apply after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutput {
    /// Translation for the main strip (`-current_offset`)
    pub track_translation: f32,
    /// Set when the focused item changed this tick
    pub focus: Option<FocusChange>,
    /// Set when the thumbnail strip must move this tick
    pub thumb_translation: Option<f32>,
}

/// Serializable snapshot for debugging and traces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshot {
    pub open: bool,
    pub scroll: ScrollState,
    /// `-1` when nothing is focused
    pub active_index: i64,
    pub viewport_extent: f32,
    pub thumb_translation: f32,
    pub item_count: usize,
}

/// Inertial scroll-and-focus engine for one gallery view at a time.
#[derive(Debug)]
pub struct ScrollFocusEngine {
    config: EngineConfig,
    images: ImageSequence,
    main: StripLayout,
    thumbs: StripLayout,
    viewport: Viewport,
    scroll: ScrollState,
    focus: FocusState,
    thumb_track: ThumbTrack,
    frames: FrameLoop,
}

impl Default for ScrollFocusEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ScrollFocusEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            images: ImageSequence::default(),
            main: StripLayout::default(),
            thumbs: StripLayout::default(),
            viewport: Viewport::default(),
            scroll: ScrollState::default(),
            focus: FocusState::default(),
            thumb_track: ThumbTrack::default(),
            frames: FrameLoop::new(),
        }
    }

    // ------------------------------------------------------------------
    // View lifecycle
    // ------------------------------------------------------------------

    /// Open (or reopen) the view with `images`.
    ///
    /// Resets offsets and focus and drops any previous measurements; the host
    /// reports new ones through [`set_layouts`](Self::set_layouts). Returns a
    /// token only when a new frame loop must be scheduled. Reopening an open
    /// view keeps the live loop.
    pub fn open_view(&mut self, images: ImageSequence) -> Option<LoopToken> {
        if images.is_empty() {
            warn!("opening gallery view with no images");
        } else {
            let category = images.iter().find_map(|image| image.category.as_deref());
            debug!(
                "opening gallery view with {} images (category {:?})",
                images.len(),
                category
            );
        }
        self.images = images;
        self.main = StripLayout::default();
        self.thumbs = StripLayout::default();
        self.scroll.reset();
        self.focus.reset();
        self.thumb_track.reset();
        self.recompute_dimensions();
        self.frames.start()
    }

    /// Close the view. Any tick scheduled before this call becomes a no-op.
    pub fn close_view(&mut self) {
        if !self.frames.is_running() {
            return;
        }
        info!("closing gallery view");
        self.frames.stop();
        self.focus.reset();
        self.thumb_track.reset();
        self.scroll.reset();
        self.images = ImageSequence::default();
        self.main = StripLayout::default();
        self.thumbs = StripLayout::default();
    }

    pub fn is_open(&self) -> bool {
        self.frames.is_running()
    }

    /// Token of the live frame loop.
    pub fn loop_token(&self) -> Option<LoopToken> {
        self.frames.current()
    }

    // ------------------------------------------------------------------
    // Measurements
    // ------------------------------------------------------------------

    /// Replace the measured layouts of both strips, e.g. after images decode.
    pub fn set_layouts(&mut self, main: StripLayout, thumbs: StripLayout) {
        if main.len() > self.images.len() {
            debug!(
                "layout reports {} items for {} images",
                main.len(),
                self.images.len()
            );
        }
        self.main = main;
        self.thumbs = thumbs;
        self.recompute_dimensions();
    }

    /// New viewport extent for the main strip.
    pub fn resize(&mut self, viewport_extent: f32) {
        self.viewport.resize(viewport_extent);
        self.recompute_dimensions();
    }

    pub fn set_thumb_container_extent(&mut self, extent: f32) {
        self.viewport.resize_thumb_container(extent);
    }

    /// Dimension calculator: derive `max_offset` from content and viewport.
    /// Safe with an empty or partial layout.
    pub fn recompute_dimensions(&mut self) {
        let max = self.viewport.max_offset(&self.main, self.config.centering);
        self.scroll.set_max_offset(max);
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Map a host event through the intent table and apply it.
    /// Returns whether any state changed.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        let intent = event.intent(&self.config);
        self.apply(intent)
    }

    /// Apply one intent. Offset-moving intents are ignored while closed.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Nudge(delta) => self.nudge(delta),
            Intent::CenterOn(index) => self.select_index(index),
            Intent::Remeasure { viewport_extent } => {
                self.resize(viewport_extent);
                true
            }
            Intent::ResizeThumbContainer { extent } => {
                self.set_thumb_container_extent(extent);
                true
            }
        }
    }

    /// Wheel input: move the target by `delta_y` scaled by the sensitivity.
    pub fn wheel(&mut self, delta_y: f32) -> bool {
        self.handle(InputEvent::Wheel { delta_y })
    }

    fn nudge(&mut self, delta: f32) -> bool {
        if !self.is_open() || !delta.is_finite() {
            return false;
        }
        self.scroll.nudge_target(delta);
        if self.config.wheel_policy == WheelPolicy::Clamped {
            self.recompute_dimensions();
            self.scroll.clamp_target_hard();
        }
        true
    }

    /// Direct selection: aim the target so item `index` sits at the viewport
    /// center. Out-of-range or unmeasured indices are a no-op.
    pub fn select_index(&mut self, index: usize) -> bool {
        if !self.is_open() || !self.images.contains_index(index) {
            debug!("ignoring selection of item {index}");
            return false;
        }
        let Some(item) = self.main.get(index) else {
            debug!("item {index} has not been measured yet");
            return false;
        };
        self.scroll.set_target(item.center() - self.viewport.center());
        if self.config.wheel_policy == WheelPolicy::Clamped {
            self.recompute_dimensions();
            self.scroll.clamp_target_hard();
        }
        true
    }

    // ------------------------------------------------------------------
    // Frame
    // ------------------------------------------------------------------

    /// Run one integrator tick for the loop identified by `token`.
    ///
    /// Returns `None` when the token is stale (view closed or reopened since it
    /// was issued); nothing must be applied in that case.
    pub fn tick(&mut self, token: LoopToken) -> Option<FrameOutput> {
        if !self.frames.is_current(token) {
            return None;
        }

        self.scroll.clamp_target_elastic(self.config.overshoot_margin);
        self.scroll.ease(self.config.easing_factor);

        let center_line = self.scroll.current_offset + self.viewport.center();
        // Only items backed by an image can take focus
        let items = self.main.items();
        let items = items.get(..self.images.len()).unwrap_or(items);
        let focus = self.focus.track(items, center_line);
        if let Some(change) = focus {
            if let Some(image) = self.images.get(change.current) {
                debug!("focus moved to {} ({})", change.current, image.display_name());
            }
        }

        let mut thumb_translation = None;
        if let Some(change) = focus {
            if let Some(thumb) = self.thumbs.get(change.current) {
                let translation =
                    thumbnail_translation(thumb, self.viewport.thumb_container_extent);
                match self.config.thumb_centering {
                    ThumbCentering::Instant => {
                        self.thumb_track.assign(translation);
                        thumb_translation = Some(translation);
                    }
                    ThumbCentering::Eased { .. } => self.thumb_track.target = translation,
                }
            }
        }
        if let ThumbCentering::Eased { factor } = self.config.thumb_centering {
            thumb_translation = self.thumb_track.ease(factor);
        }

        Some(FrameOutput {
            track_translation: -self.scroll.current_offset,
            focus,
            thumb_translation,
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn images(&self) -> &ImageSequence {
        &self.images
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn active_index(&self) -> Option<usize> {
        self.focus.active()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn main_layout(&self) -> &StripLayout {
        &self.main
    }

    pub fn thumb_layout(&self) -> &StripLayout {
        &self.thumbs
    }

    pub fn thumb_translation(&self) -> f32 {
        self.thumb_track.current
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            open: self.is_open(),
            scroll: self.scroll,
            active_index: self
                .focus
                .active()
                .and_then(|i| i64::try_from(i).ok())
                .unwrap_or(-1),
            viewport_extent: self.viewport.extent,
            thumb_translation: self.thumb_track.current,
            item_count: self.images.len(),
        }
    }
}
