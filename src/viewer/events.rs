//! Wheel, resize, click and image-load listeners for `Filmstrip`.
//!
//! Each DOM event is reduced to an `InputEvent` and routed through the
//! controller; listeners hold weak references so dropping the viewer frees the
//! shared state.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent, WheelEvent, Window};

use super::{viewport_width, Filmstrip, SharedState};
use crate::engine::{InputEvent, Strip};
use crate::error::{FilmstripError, Result};

/// Installed listeners, kept alive for the life of the viewer.
pub(crate) struct Listeners {
    window: Window,
    track: HtmlElement,
    thumb_track: HtmlElement,
    wheel: Closure<dyn FnMut(WheelEvent)>,
    resize: Closure<dyn FnMut(Event)>,
    track_click: Closure<dyn FnMut(MouseEvent)>,
    thumb_click: Closure<dyn FnMut(MouseEvent)>,
    image_load: Closure<dyn FnMut(Event)>,
}

impl Listeners {
    pub(crate) fn attach(window: &Window, state: &Rc<RefCell<SharedState>>) -> Result<Self> {
        let (track, thumb_track) = {
            let s = state.borrow();
            let surface = s.controller.surface();
            (surface.track().clone(), surface.thumb_track().clone())
        };

        // Wheel anywhere on the page scrolls the strip while the view is open
        let wheel = {
            let weak_state = Rc::downgrade(state);
            Closure::wrap(Box::new(move |event: WheelEvent| {
                #[allow(clippy::cast_possible_truncation)]
                let delta_y = event.delta_y() as f32;
                dispatch(&weak_state, InputEvent::Wheel { delta_y });
            }) as Box<dyn FnMut(WheelEvent)>)
        };
        window
            .add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref())
            .map_err(|_| FilmstripError::Dom("failed to add wheel listener".into()))?;

        // Resize recomputes the scroll range and the thumbnail container width
        let resize = {
            let weak_state = Rc::downgrade(state);
            Closure::wrap(Box::new(move |_event: Event| {
                let Some(state) = weak_state.upgrade() else {
                    return;
                };
                let mut s = state.borrow_mut();
                let container = s.controller.surface().thumb_container_extent();
                s.controller.handle(InputEvent::Resize {
                    viewport_extent: viewport_width(),
                });
                s.controller.handle(InputEvent::ThumbContainerResize { extent: container });
            }) as Box<dyn FnMut(Event)>)
        };
        window
            .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
            .map_err(|_| FilmstripError::Dom("failed to add resize listener".into()))?;

        let track_click = click_listener(state, Strip::Main);
        track
            .add_event_listener_with_callback("click", track_click.as_ref().unchecked_ref())
            .map_err(|_| FilmstripError::Dom("failed to add track click listener".into()))?;

        let thumb_click = click_listener(state, Strip::Thumbnails);
        thumb_track
            .add_event_listener_with_callback("click", thumb_click.as_ref().unchecked_ref())
            .map_err(|_| FilmstripError::Dom("failed to add thumbnail click listener".into()))?;

        // Natural image widths are unknown until decode; `load` does not bubble,
        // so listen in the capture phase on the strip.
        let image_load = {
            let weak_state = Rc::downgrade(state);
            Closure::wrap(Box::new(move |_event: Event| {
                if let Some(state) = weak_state.upgrade() {
                    Filmstrip::remeasure(&state);
                }
            }) as Box<dyn FnMut(Event)>)
        };
        track
            .add_event_listener_with_callback_and_bool(
                "load",
                image_load.as_ref().unchecked_ref(),
                true,
            )
            .map_err(|_| FilmstripError::Dom("failed to add load listener".into()))?;

        Ok(Self {
            window: window.clone(),
            track,
            thumb_track,
            wheel,
            resize,
            track_click,
            thumb_click,
            image_load,
        })
    }

    pub(crate) fn detach(&self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        let _ = self.track.remove_event_listener_with_callback(
            "click",
            self.track_click.as_ref().unchecked_ref(),
        );
        let _ = self.thumb_track.remove_event_listener_with_callback(
            "click",
            self.thumb_click.as_ref().unchecked_ref(),
        );
        let _ = self.track.remove_event_listener_with_callback_and_bool(
            "load",
            self.image_load.as_ref().unchecked_ref(),
            true,
        );
    }
}

/// Delegated click handler: resolve the clicked item's index within `strip`.
fn click_listener(
    state: &Rc<RefCell<SharedState>>,
    strip: Strip,
) -> Closure<dyn FnMut(MouseEvent)> {
    let weak_state = Rc::downgrade(state);
    Closure::wrap(Box::new(move |event: MouseEvent| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Some(state) = weak_state.upgrade() else {
            return;
        };
        let index = {
            let s = state.borrow();
            let surface = s.controller.surface();
            match strip {
                Strip::Main => surface.index_of(surface.track(), surface.item_class(), &target),
                Strip::Thumbnails => {
                    surface.index_of(surface.thumb_track(), surface.thumb_class(), &target)
                }
            }
        };
        if let Some(index) = index {
            state
                .borrow_mut()
                .controller
                .handle(InputEvent::Click { strip, index });
        }
    }) as Box<dyn FnMut(MouseEvent)>)
}

fn dispatch(weak_state: &Weak<RefCell<SharedState>>, event: InputEvent) {
    if let Some(state) = weak_state.upgrade() {
        state.borrow_mut().controller.handle(event);
    }
}
