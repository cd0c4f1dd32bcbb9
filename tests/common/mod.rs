//! Common test utilities and a recording surface.
//!
//! Helpers build engines over uniform strips and run ticks; `RecordingSurface`
//! captures every mutation a frame applies so tests can assert on them.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use filmstrip::{
    EngineConfig, GalleryController, ImageSequence, LoopToken, ScrollFocusEngine, StripLayout,
    StripSurface,
};

/// One mutation applied to a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceOp {
    Track(f32),
    Thumbnails(f32),
    Highlight { index: usize, active: bool },
}

/// Surface that records every call, plus the resulting highlight set.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
    pub highlighted: Vec<usize>,
}

impl RecordingSurface {
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn last_track(&self) -> Option<f32> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::Track(x) => Some(*x),
            _ => None,
        })
    }

    pub fn last_thumbnails(&self) -> Option<f32> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::Thumbnails(x) => Some(*x),
            _ => None,
        })
    }
}

impl StripSurface for RecordingSurface {
    fn translate_track(&mut self, offset_x: f32) {
        self.ops.push(SurfaceOp::Track(offset_x));
    }

    fn translate_thumbnails(&mut self, offset_x: f32) {
        self.ops.push(SurfaceOp::Thumbnails(offset_x));
    }

    fn set_highlight(&mut self, index: usize, active: bool) {
        self.ops.push(SurfaceOp::Highlight { index, active });
        if active {
            if !self.highlighted.contains(&index) {
                self.highlighted.push(index);
            }
        } else {
            self.highlighted.retain(|&i| i != index);
        }
    }
}

/// `count` image paths.
pub fn images(count: usize) -> ImageSequence {
    ImageSequence::from_paths((0..count).map(|i| format!("photos/img_{i}.jpg")))
}

/// Open an engine over `count` items of width `extent` with no gaps, thumbnails
/// `thumb_extent` wide, in a viewport of `viewport` units.
pub fn open_engine(
    config: EngineConfig,
    count: usize,
    extent: f32,
    thumb_extent: f32,
    viewport: f32,
) -> (ScrollFocusEngine, LoopToken) {
    let mut engine = ScrollFocusEngine::new(config);
    let token = engine.open_view(images(count)).expect("loop starts");
    engine.resize(viewport);
    engine.set_layouts(
        StripLayout::uniform(count, extent, 0.0),
        StripLayout::uniform(count, thumb_extent, 0.0),
    );
    (engine, token)
}

/// Same as [`open_engine`] but wrapped in a controller with a recording surface.
pub fn open_controller(
    config: EngineConfig,
    count: usize,
    extent: f32,
    thumb_extent: f32,
    viewport: f32,
) -> (GalleryController<RecordingSurface>, LoopToken) {
    let mut controller = GalleryController::new(config, RecordingSurface::default());
    let token = controller.open_view(images(count)).expect("loop starts");
    controller.engine_mut().resize(viewport);
    controller.set_layouts(
        StripLayout::uniform(count, extent, 0.0),
        StripLayout::uniform(count, thumb_extent, 0.0),
    );
    (controller, token)
}

/// Tick until settled within `epsilon`; returns the number of ticks taken.
pub fn ticks_to_settle(
    engine: &mut ScrollFocusEngine,
    token: LoopToken,
    epsilon: f32,
    limit: u32,
) -> Option<u32> {
    for n in 0..limit {
        if engine.scroll().is_settled(epsilon) {
            return Some(n);
        }
        engine.tick(token)?;
    }
    None
}

/// Run `n` ticks, panicking if the loop is stale.
pub fn run_ticks(engine: &mut ScrollFocusEngine, token: LoopToken, n: u32) {
    for _ in 0..n {
        engine.tick(token).expect("loop is live");
    }
}
