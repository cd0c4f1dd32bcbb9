//! filmstrip - inertial scroll-and-focus engine for photo galleries
//!
//! Drives a horizontally scrolling image strip and its thumbnail strip:
//! - Wheel and click input become a target offset
//! - Every animation frame the strip eases toward the target
//! - The image nearest the viewport center is highlighted, and its thumbnail
//!   is centered in the thumbnail strip
//!
//! The engine is platform-free; on wasm32 the `Filmstrip` driver binds it to
//! DOM elements the page has already created.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { Filmstrip } from 'filmstrip';
//! await init();
//! const strip = new Filmstrip({ engine: { easingFactor: 0.08 } });
//! strip.openView(images);
//! strip.closeView();
//! ```

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod gallery;
pub mod layout;
pub mod logging;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use config::{CenteringAdjustment, EngineConfig, ThumbCentering, ViewerOptions, WheelPolicy};
pub use controller::GalleryController;
pub use engine::{FrameOutput, InputEvent, LoopToken, ScrollFocusEngine, ScrollState, Strip};
pub use error::{FilmstripError, Result};
pub use gallery::{ImageRef, ImageSequence};
pub use layout::{ItemRect, StripLayout, Viewport};
pub use render::StripSurface;

#[cfg(target_arch = "wasm32")]
pub use viewer::Filmstrip;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
