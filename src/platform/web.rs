//! Browser frame scheduling via `requestAnimationFrame`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::FrameScheduler;

/// Shared slot for the frame callback; filled once the game loop closure exists
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Re-queues the stored frame callback on every request
#[derive(Clone)]
pub struct AnimationFrameScheduler {
    callback: FrameCallback,
}

impl AnimationFrameScheduler {
    pub fn new(callback: FrameCallback) -> Self {
        Self { callback }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to schedule frames on");
            return;
        };
        if let Some(callback) = self.callback.borrow().as_ref() {
            if let Err(err) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {:?}", err);
            }
        }
    }
}
