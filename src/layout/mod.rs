//! Strip geometry and the dimension calculator.
//!
//! This module handles:
//! - Item positions along a strip (measured by the host or built from extents)
//! - Viewport extents for the main strip and the thumbnail container
//! - The clamped scroll range derived from content and viewport extents

mod strip;
mod viewport;

pub use strip::{ItemRect, StripLayout};
pub use viewport::{max_offset, Viewport};
