//! DOM surface: CSS transforms and class toggles on existing strip elements.
//!
//! The page creates the item elements; this surface only measures them and
//! decorates them. Items are looked up by class inside each strip, so their
//! order in the DOM is their index.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::ViewerOptions;
use crate::error::{FilmstripError, Result};
use crate::layout::{ItemRect, StripLayout};
use crate::render::backend::StripSurface;

/// Strip elements of one gallery page.
pub struct DomSurface {
    track: HtmlElement,
    thumb_track: HtmlElement,
    thumb_container: Option<HtmlElement>,
    item_class: String,
    thumb_class: String,
    active_class: String,
}

impl DomSurface {
    /// Find the strip elements named in `options`.
    ///
    /// The thumbnail container is optional; without it thumbnails center
    /// within a zero-width container.
    pub fn bind(document: &Document, options: &ViewerOptions) -> Result<Self> {
        let track = element_by_id(document, &options.track_id)?;
        let thumb_track = element_by_id(document, &options.thumb_track_id)?;
        let thumb_container = document
            .query_selector(&options.thumb_container_selector)
            .map_err(|_| {
                FilmstripError::Dom(format!(
                    "invalid selector {:?}",
                    options.thumb_container_selector
                ))
            })?
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        if thumb_container.is_none() {
            log::warn!(
                "thumbnail container {:?} not found",
                options.thumb_container_selector
            );
        }
        Ok(Self {
            track,
            thumb_track,
            thumb_container,
            item_class: options.item_class.clone(),
            thumb_class: options.thumb_class.clone(),
            active_class: options.active_class.clone(),
        })
    }

    pub fn track(&self) -> &HtmlElement {
        &self.track
    }

    pub fn thumb_track(&self) -> &HtmlElement {
        &self.thumb_track
    }

    /// Measure the main strip: item offsets/widths plus `scrollWidth`.
    pub fn measure_track(&self) -> StripLayout {
        let items = measure_items(&self.track, &self.item_class);
        StripLayout::with_content_extent(items, self.track.scroll_width() as f32)
    }

    /// Measure the thumbnail strip.
    pub fn measure_thumbnails(&self) -> StripLayout {
        StripLayout::new(measure_items(&self.thumb_track, &self.thumb_class))
    }

    pub fn thumb_container_extent(&self) -> f32 {
        self.thumb_container
            .as_ref()
            .map_or(0.0, |c| c.offset_width() as f32)
    }

    /// Index of the item element `target` belongs to in `strip`, if any.
    pub fn index_of(&self, strip: &HtmlElement, class: &str, target: &Element) -> Option<usize> {
        let item = target.closest(&format!(".{class}")).ok().flatten()?;
        let items = strip.get_elements_by_class_name(class);
        (0..items.length())
            .find(|&i| items.item(i).is_some_and(|candidate| candidate == item))
            .and_then(|i| usize::try_from(i).ok())
    }

    pub fn item_class(&self) -> &str {
        &self.item_class
    }

    pub fn thumb_class(&self) -> &str {
        &self.thumb_class
    }

    fn toggle(&self, strip: &HtmlElement, class: &str, index: usize, active: bool) {
        let Ok(index) = u32::try_from(index) else {
            return;
        };
        let Some(item) = strip.get_elements_by_class_name(class).item(index) else {
            return;
        };
        let classes = item.class_list();
        let _ = if active {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
    }
}

impl StripSurface for DomSurface {
    fn translate_track(&mut self, offset_x: f32) {
        set_translate(&self.track, offset_x);
    }

    fn translate_thumbnails(&mut self, offset_x: f32) {
        set_translate(&self.thumb_track, offset_x);
    }

    fn set_highlight(&mut self, index: usize, active: bool) {
        self.toggle(&self.track, &self.item_class, index, active);
        self.toggle(&self.thumb_track, &self.thumb_class, index, active);
    }
}

fn element_by_id(document: &Document, id: &str) -> Result<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| FilmstripError::MissingElement(format!("#{id}")))
}

fn measure_items(strip: &HtmlElement, class: &str) -> Vec<ItemRect> {
    let items = strip.get_elements_by_class_name(class);
    (0..items.length())
        .filter_map(|i| items.item(i))
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .map(|element| {
            ItemRect::new(element.offset_left() as f32, element.offset_width() as f32)
        })
        .collect()
}

fn set_translate(element: &HtmlElement, offset_x: f32) {
    let _ = element
        .style()
        .set_property("transform", &format!("translate3d({offset_x}px, 0, 0)"));
}
