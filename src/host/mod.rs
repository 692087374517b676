//! Browser hosts.
//!
//! Each host is a `wasm-bindgen` handle that owns DOM references, event
//! listeners, and an animation-frame loop, and forwards everything it observes
//! to a core type. Unmounting (or freeing the handle from JS) drops the
//! listeners and cancels every pending frame and timer.
//!
//! | Module | Role |
//! |--------|------|
//! | [`viewport`] | `InfiniteCanvas` and its `DragGate` handle |
//! | [`brain`] | `BrainCanvas` |
//! | [`frame_loop`] | Restartable `requestAnimationFrame` loop |
//! | [`listener`] | Self-removing event listener |

pub mod brain;
pub mod frame_loop;
pub mod listener;
pub mod viewport;

use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

use crate::error::FolioError;

pub use brain::BrainCanvas;
pub use viewport::{ClickGate, InfiniteCanvas};

fn window() -> Result<Window, FolioError> {
    web_sys::window().ok_or(FolioError::NoWindow)
}

fn document() -> Result<Document, FolioError> {
    window()?.document().ok_or(FolioError::NoDocument)
}

/// High-resolution time in milliseconds, on the same clock as frame timestamps.
fn now_ms() -> f64 {
    web_sys::window().and_then(|w| w.performance()).map_or_else(js_sys::Date::now, |p| p.now())
}

/// Decode a mount configuration. `undefined` and `null` give the defaults.
fn decode_config<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, FolioError> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("style: failed to set {property}: {err:?}");
    }
}
