//! Error type for host setup.
//!
//! The cores never fail. Only the hosts in [`crate::host`] touch the DOM, and
//! they decide per call site whether a failure is a caller bug (returned to JS)
//! or an expected transient state during mount (logged and skipped).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

/// Errors produced while mounting or wiring a host.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// No global `window` (e.g. running outside a browser).
    #[error("window is not available")]
    NoWindow,

    /// The window has no `document`.
    #[error("document is not available")]
    NoDocument,

    /// The canvas did not yield a 2D rendering context.
    #[error("2d rendering context is not available")]
    NoContext,

    /// Infinite scroll was requested without a usable grid period.
    #[error("infinite scroll needs positive gridWidth and gridHeight, got {width} x {height}")]
    InvalidGrid { width: f64, height: f64 },

    /// `setTheme` was given something other than `light` or `dark`.
    #[error("unknown theme `{0}`, expected `light` or `dark`")]
    UnknownTheme(String),

    /// The configuration object passed from JS could not be decoded.
    #[error("config decode failed: {0}")]
    ConfigDecode(String),

    /// A DOM call threw.
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for FolioError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}

impl From<serde_wasm_bindgen::Error> for FolioError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::ConfigDecode(err.to_string())
    }
}

impl From<FolioError> for JsValue {
    fn from(err: FolioError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
