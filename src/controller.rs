//! Engine plus surface: the object a host drives.

use log::debug;

use crate::config::EngineConfig;
use crate::engine::{FrameOutput, InputEvent, LoopToken, ScrollFocusEngine};
use crate::gallery::ImageSequence;
use crate::layout::StripLayout;
use crate::render::{apply_frame, StripSurface};

/// One gallery view bound to one surface.
#[derive(Debug)]
pub struct GalleryController<S: StripSurface> {
    engine: ScrollFocusEngine,
    surface: S,
}

impl<S: StripSurface> GalleryController<S> {
    pub fn new(config: EngineConfig, surface: S) -> Self {
        Self {
            engine: ScrollFocusEngine::new(config),
            surface,
        }
    }

    /// Open the view, clearing any highlight left by the previous one.
    /// Returns a token when the host must start a frame loop.
    pub fn open_view(&mut self, images: ImageSequence) -> Option<LoopToken> {
        if let Some(previous) = self.engine.active_index() {
            self.surface.set_highlight(previous, false);
        }
        let token = self.engine.open_view(images);
        self.surface.translate_track(0.0);
        self.surface.translate_thumbnails(0.0);
        token
    }

    /// Close the view and clear the highlighted pair.
    pub fn close_view(&mut self) {
        if let Some(active) = self.engine.active_index() {
            self.surface.set_highlight(active, false);
        }
        self.engine.close_view();
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        self.engine.select_index(index)
    }

    pub fn handle(&mut self, event: InputEvent) -> bool {
        self.engine.handle(event)
    }

    pub fn set_layouts(&mut self, main: StripLayout, thumbs: StripLayout) {
        self.engine.set_layouts(main, thumbs);
    }

    /// Run one frame for `token` and apply it to the surface.
    ///
    /// Returns `false` when the token is stale; the host must stop scheduling
    /// frames for it.
    pub fn frame(&mut self, token: LoopToken) -> bool {
        match self.engine.tick(token) {
            Some(output) => {
                self.present(&output);
                true
            }
            None => {
                debug!("frame loop {} ended", token.generation());
                false
            }
        }
    }

    fn present(&mut self, output: &FrameOutput) {
        apply_frame(&mut self.surface, output);
    }

    pub fn engine(&self) -> &ScrollFocusEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ScrollFocusEngine {
        &mut self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
