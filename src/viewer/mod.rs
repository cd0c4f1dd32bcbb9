//! `Filmstrip` - the wasm-exported gallery driver.
//!
//! This module binds the scroll-focus engine to a page:
//! - Finding the main strip, thumbnail strip and thumbnail container
//! - Measuring item elements and feeding the layouts to the engine
//! - Running the `requestAnimationFrame` loop while the view is open
//! - Handling wheel, resize, click and image-load events
//!
//! The page owns the item elements; `openView` is called after it has
//! populated both strips for the chosen category.

mod events;
mod frame;

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::config::ViewerOptions;
use crate::controller::GalleryController;
use crate::error::FilmstripError;
use crate::gallery::{ImageRef, ImageSequence};
use crate::logging;
use crate::render::DomSurface;

use events::Listeners;

/// Shared state that can be accessed by event handlers
pub(crate) struct SharedState {
    pub(crate) controller: GalleryController<DomSurface>,
    pub(crate) frame_closure: Option<Closure<dyn FnMut(f64)>>,
    pub(crate) frame_request: Option<i32>,
}

/// Images may be passed as bare paths or as `{ path, category, name }` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum ImageInput {
    Path(String),
    Ref(ImageRef),
}

impl From<ImageInput> for ImageRef {
    fn from(input: ImageInput) -> Self {
        match input {
            ImageInput::Path(path) => ImageRef::new(path),
            ImageInput::Ref(image) => image,
        }
    }
}

/// The gallery driver exported to JavaScript
#[wasm_bindgen]
pub struct Filmstrip {
    state: Rc<RefCell<SharedState>>,
    listeners: Listeners,
}

#[wasm_bindgen]
impl Filmstrip {
    /// Bind to the strip elements named in `options` (or the defaults when
    /// `options` is `undefined`) and install event listeners.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Filmstrip, JsValue> {
        console_error_panic_hook::set_once();

        let options: ViewerOptions = if options.is_undefined() || options.is_null() {
            ViewerOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(FilmstripError::from)?
        };
        options.validate()?;
        logging::init(logging::parse_level(Some(&options.log_level)));

        let window = web_sys::window()
            .ok_or_else(|| FilmstripError::MissingElement("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| FilmstripError::MissingElement("document".into()))?;
        let surface = DomSurface::bind(&document, &options)?;

        let state = Rc::new(RefCell::new(SharedState {
            controller: GalleryController::new(options.engine, surface),
            frame_closure: None,
            frame_request: None,
        }));
        let listeners = Listeners::attach(&window, &state)?;

        Ok(Filmstrip { state, listeners })
    }

    /// Open the gallery view with the given images (array of paths or
    /// `{ path, category, name }` objects, in display order).
    #[wasm_bindgen(js_name = "openView")]
    pub fn open_view(&mut self, images: JsValue) -> Result<(), JsValue> {
        let inputs: Vec<ImageInput> = if images.is_undefined() || images.is_null() {
            Vec::new()
        } else if js_sys::Array::is_array(&images) {
            serde_wasm_bindgen::from_value(images).map_err(FilmstripError::from)?
        } else {
            return Err(FilmstripError::Options("openView expects an array of images".into()).into());
        };
        let sequence: ImageSequence = inputs.into_iter().map(ImageRef::from).collect();

        let token = self.state.borrow_mut().controller.open_view(sequence);
        Self::remeasure(&self.state);
        if let Some(token) = token {
            Self::start_frame_loop(&self.state, token);
        }
        Ok(())
    }

    /// Close the view; no further transforms or highlights are applied.
    #[wasm_bindgen(js_name = "closeView")]
    pub fn close_view(&mut self) {
        let mut s = self.state.borrow_mut();
        s.controller.close_view();
        Self::cancel_frame_request(&mut s);
    }

    /// Center the item at `index`. Returns `false` for out-of-range indices.
    #[wasm_bindgen(js_name = "selectIndex")]
    pub fn select_index(&mut self, index: usize) -> bool {
        self.state.borrow_mut().controller.select_index(index)
    }

    /// Re-measure both strips, e.g. after the page added or resized items.
    #[wasm_bindgen(js_name = "refreshLayout")]
    pub fn refresh_layout(&mut self) {
        Self::remeasure(&self.state);
    }

    /// Index of the focused image, or -1.
    #[wasm_bindgen(js_name = "activeIndex")]
    pub fn active_index(&self) -> i32 {
        self.state
            .borrow()
            .controller
            .engine()
            .active_index()
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(-1)
    }

    #[wasm_bindgen(js_name = "isOpen")]
    pub fn is_open(&self) -> bool {
        self.state.borrow().controller.engine().is_open()
    }

    /// Scroll and focus snapshot for debugging.
    #[wasm_bindgen(js_name = "debugState")]
    pub fn debug_state(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.state.borrow().controller.engine().snapshot();
        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

impl Filmstrip {
    /// Measure both strips and the viewport and hand the results to the engine.
    pub(crate) fn remeasure(state: &Rc<RefCell<SharedState>>) {
        let viewport_extent = viewport_width();
        let mut s = state.borrow_mut();
        let surface = s.controller.surface();
        let main = surface.measure_track();
        let thumbs = surface.measure_thumbnails();
        let container = surface.thumb_container_extent();

        let engine = s.controller.engine_mut();
        engine.resize(viewport_extent);
        engine.set_thumb_container_extent(container);
        engine.set_layouts(main, thumbs);
    }
}

impl Drop for Filmstrip {
    fn drop(&mut self) {
        self.listeners.detach();
        let mut s = self.state.borrow_mut();
        s.controller.close_view();
        Self::cancel_frame_request(&mut s);
    }
}

/// Window `innerWidth` in CSS pixels.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn viewport_width() -> f32 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map_or(0.0, |width| width as f32)
}
