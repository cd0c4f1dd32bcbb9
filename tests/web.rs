//! Browser tests for the wasm driver.
//!
//! Run with: wasm-pack test --headless --firefox
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use filmstrip::Filmstrip;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Build `#track` and `#thumb-track` with `count` items each.
fn mount(count: usize) -> Element {
    let document = document();
    let root = document.create_element("div").unwrap();
    let track = document.create_element("div").unwrap();
    track.set_id("track");
    let container = document.create_element("div").unwrap();
    container.set_class_name("thumbnails-container");
    let thumbs = document.create_element("div").unwrap();
    thumbs.set_id("thumb-track");
    for _ in 0..count {
        let item = document.create_element("div").unwrap();
        item.set_class_name("gallery-image");
        track.append_child(&item).unwrap();
        let thumb = document.create_element("div").unwrap();
        thumb.set_class_name("thumb-img");
        thumbs.append_child(&thumb).unwrap();
    }
    container.append_child(&thumbs).unwrap();
    root.append_child(&track).unwrap();
    root.append_child(&container).unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn paths(count: usize) -> JsValue {
    let paths: Vec<String> = (0..count).map(|i| format!("img_{i}.jpg")).collect();
    serde_wasm_bindgen::to_value(&paths).unwrap()
}

#[wasm_bindgen_test]
fn missing_track_is_an_error() {
    assert!(Filmstrip::new(JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn open_and_close() {
    let root = mount(3);
    let mut strip = Filmstrip::new(JsValue::UNDEFINED).unwrap();
    assert!(!strip.is_open());

    strip.open_view(paths(3)).unwrap();
    assert!(strip.is_open());
    assert!(!strip.select_index(7));

    strip.close_view();
    assert!(!strip.is_open());
    assert_eq!(strip.active_index(), -1);

    drop(strip);
    root.remove();
}

#[wasm_bindgen_test]
fn open_rejects_non_array() {
    let root = mount(1);
    let mut strip = Filmstrip::new(JsValue::UNDEFINED).unwrap();
    assert!(strip.open_view(JsValue::from_str("img_0.jpg")).is_err());
    drop(strip);
    root.remove();
}

#[wasm_bindgen_test]
fn invalid_options_rejected() {
    let root = mount(1);
    let options = js_sys::JSON::parse(r#"{"engine": {"easingFactor": 2}}"#).unwrap();
    assert!(Filmstrip::new(options).is_err());
    root.remove();
}

#[wasm_bindgen_test]
fn debug_state_reports_item_count() {
    let root = mount(2);
    let mut strip = Filmstrip::new(JsValue::UNDEFINED).unwrap();
    strip.open_view(paths(2)).unwrap();
    let state = strip.debug_state().unwrap();
    let count = js_sys::Reflect::get(&state, &JsValue::from_str("itemCount")).unwrap();
    assert_eq!(count.as_f64(), Some(2.0));
    drop(strip);
    root.remove();
}
