//! Rendering seam between the engine and whatever displays the strips.
//!
//! This module provides:
//! - The `StripSurface` trait and `apply_frame`
//! - A no-op surface for headless runs
//! - The DOM surface (wasm32 only)

pub mod backend;
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use backend::{apply_frame, NullSurface, StripSurface};
#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
