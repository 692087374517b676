//! `requestAnimationFrame` loop with deterministic cancellation.
//!
//! The loop calls its tick once per frame for as long as the tick returns
//! `true`. A stopped loop can be restarted with [`FrameLoop::start`]; calling
//! `start` while a frame is already pending is a no-op, so input handlers can
//! call it freely. Dropping the last handle cancels the pending frame.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::error::FolioError;

type FrameCallback = Closure<dyn FnMut(f64)>;

struct LoopState {
    window: Window,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<FrameCallback>>,
}

impl LoopState {
    fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(err) => log::warn!("frame loop: requestAnimationFrame failed: {err:?}"),
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("frame loop: cancelAnimationFrame failed: {err:?}");
            }
        }
    }
}

impl Drop for LoopState {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Cloneable handle to one animation-frame loop.
#[derive(Clone)]
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    /// Build a stopped loop around `tick`, which receives the frame timestamp
    /// in milliseconds and returns whether another frame is wanted.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::NoWindow`] outside a browser.
    pub fn new(mut tick: impl FnMut(f64) -> bool + 'static) -> Result<Self, FolioError> {
        let window = web_sys::window().ok_or(FolioError::NoWindow)?;
        let state = Rc::new(LoopState { window, pending: Cell::new(None), callback: RefCell::new(None) });

        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let cb = Closure::wrap(Box::new(move |ts: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            if tick(ts) {
                state.request();
            }
        }) as Box<dyn FnMut(f64)>);
        *state.callback.borrow_mut() = Some(cb);

        Ok(Self { state })
    }

    /// Schedule the next frame unless one is already pending.
    pub fn start(&self) {
        self.state.request();
    }

    /// Cancel the pending frame, if any.
    pub fn stop(&self) {
        self.state.cancel();
    }
}
