//! `requestAnimationFrame` loop for `Filmstrip`.
//!
//! One closure per loop run, created with the run's token. A pending request is
//! always cancelled before its closure is replaced or the view closes.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::{Filmstrip, SharedState};
use crate::engine::LoopToken;

impl Filmstrip {
    pub(crate) fn start_frame_loop(state: &Rc<RefCell<SharedState>>, token: LoopToken) {
        let weak_state = Rc::downgrade(state);
        let closure = Closure::wrap(Box::new(move |_timestamp: f64| {
            if let Some(state) = weak_state.upgrade() {
                Filmstrip::run_frame(&state, token);
            }
        }) as Box<dyn FnMut(f64)>);

        let mut s = state.borrow_mut();
        Self::cancel_frame_request(&mut s);
        s.frame_closure = Some(closure);
        s.frame_request = Self::request_frame(&s);
    }

    fn run_frame(state: &Rc<RefCell<SharedState>>, token: LoopToken) {
        let mut s = state.borrow_mut();
        s.frame_request = None;
        // Stale tokens end the loop without touching the DOM.
        if !s.controller.frame(token) {
            return;
        }
        s.frame_request = Self::request_frame(&s);
    }

    fn request_frame(s: &SharedState) -> Option<i32> {
        let window = web_sys::window()?;
        let callback = s.frame_closure.as_ref()?;
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    }

    pub(crate) fn cancel_frame_request(s: &mut SharedState) {
        let Some(request) = s.frame_request.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(request);
        }
    }
}
