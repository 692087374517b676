//! Pannable viewport and procedural brain canvas for the portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns two
//! independent pieces of the page: the infinite, momentum-driven viewport that
//! hosts the design tile grid, and the animated "brain" canvas on the home
//! section. Each piece is split into a browser-independent core (plain state
//! and math, driven by explicit timestamps) and a thin host in [`host`] that
//! owns the DOM handles, event listeners, and the animation-frame loop.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`viewport`] | Offset/velocity state, wrap-around, momentum and key physics |
//! | [`input`] | Wheel/key input types and the pan gesture state machine |
//! | [`drag_gate`] | Shared click-suppression flag for sibling tiles |
//! | [`brain`] | Silhouette geometry, scene generation, and per-frame animation |
//! | [`render`] | Canvas drawing and transform formatting |
//! | [`host`] | `wasm-bindgen` handles wiring the cores to the DOM |
//! | [`config`] | Mount-time configuration decoded from JS |
//! | [`geom`] | Points, sizes, and rectangles |
//! | [`error`] | Error type for host setup |
//! | [`consts`] | Tuning constants (friction, thresholds, timings) |

pub mod brain;
pub mod config;
pub mod consts;
pub mod drag_gate;
pub mod error;
pub mod geom;
pub mod host;
pub mod input;
pub mod render;
pub mod viewport;

use wasm_bindgen::prelude::*;

/// Install the panic hook and the console logger.
///
/// Runs automatically when the module is instantiated. Installing the logger a
/// second time (e.g. after a hot reload) is harmless.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        return;
    }
    log::debug!("folio: logger ready");
}
