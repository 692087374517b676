//! `InfiniteCanvas`: the pannable viewport mounted on a container element.
//!
//! The container receives wheel, mouse-down, and touch-start events; moves
//! and releases are tracked on the document so a drag keeps working when the
//! pointer leaves the container. Arrow keys are read from the document too.
//!
//! Every event handler updates the [`ViewportCore`] and writes the transform
//! immediately. The frame loop only runs while something is in motion
//! (a pointer is down, momentum is coasting, or a key is held) and stops
//! itself once the core is at rest.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, MouseEvent, TouchEvent, WheelEvent};

use super::frame_loop::FrameLoop;
use super::listener::Listener;
use super::{decode_config, document, now_ms, set_style};
use crate::config::ViewportConfig;
use crate::consts::{CENTER_ANCHOR_ATTR, SCROLL_IDLE_MS};
use crate::drag_gate::DragGate;
use crate::error::FolioError;
use crate::geom::{Point, Rect, Size};
use crate::input::{ArrowKey, WheelDelta};
use crate::render::transform_css;
use crate::viewport::ViewportCore;

/// State shared by the listeners, the frame loop, and the handle.
struct Shared {
    core: RefCell<ViewportCore>,
    container: HtmlElement,
    content: HtmlElement,
    scroll_idle: RefCell<Option<Timeout>>,
}

impl Shared {
    fn paint(&self) {
        let offset = self.core.borrow().offset();
        set_style(&self.content, "transform", &transform_css(offset));
    }

    /// One frame of physics. Returns whether another frame is needed.
    fn frame(&self) -> bool {
        let (report, pointer_down) = {
            let mut core = self.core.borrow_mut();
            (core.tick(), core.is_pointer_down())
        };
        if report.moved {
            self.paint();
        }
        report.coasting || report.key_motion || pointer_down
    }

    fn wheel(self: &Rc<Self>, event: &WheelEvent) {
        event.prevent_default();
        event.stop_propagation();

        let started = self.core.borrow_mut().on_wheel(WheelDelta { dx: event.delta_x(), dy: event.delta_y() });
        self.paint();
        if started {
            set_style(&self.content, "pointer-events", "none");
        }

        // Replacing the timeout drops (and so cancels) the previous one.
        let weak: Weak<Self> = Rc::downgrade(self);
        let idle = Timeout::new(SCROLL_IDLE_MS, move || {
            if let Some(shared) = weak.upgrade() {
                if shared.core.borrow_mut().end_scroll() {
                    set_style(&shared.content, "pointer-events", "auto");
                }
            }
        });
        *self.scroll_idle.borrow_mut() = Some(idle);
    }

    fn recenter(&self) {
        let container = Size::new(f64::from(self.container.client_width()), f64::from(self.container.client_height()));
        if container.is_empty() {
            log::warn!("infinite canvas: recentering in an empty container");
        }
        let content = Size::new(f64::from(self.content.scroll_width()), f64::from(self.content.scroll_height()));
        let anchor = self.anchor_rect();
        if anchor.is_none() {
            log::warn!("infinite canvas: no [{CENTER_ANCHOR_ATTR}] element, using default center");
        }

        let offset = self.core.borrow_mut().recenter(container, content, anchor);
        self.paint();
        set_style(&self.content, "opacity", "1");
        log::debug!("infinite canvas: recentered at ({:.2}, {:.2})", offset.x, offset.y);
    }

    /// Box of the marked center element, relative to the content's top-left.
    fn anchor_rect(&self) -> Option<Rect> {
        let selector = format!("[{CENTER_ANCHOR_ATTR}]");
        let tile = match self.content.query_selector(&selector) {
            Ok(tile) => tile?,
            Err(err) => {
                log::warn!("infinite canvas: anchor lookup failed: {err:?}");
                return None;
            }
        };
        let content_rect = self.content.get_bounding_client_rect();
        let tile_rect = tile.get_bounding_client_rect();
        Some(Rect::new(
            tile_rect.left() - content_rect.left(),
            tile_rect.top() - content_rect.top(),
            tile_rect.width(),
            tile_rect.height(),
        ))
    }
}

fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn touch_points(event: &TouchEvent) -> Vec<Point> {
    let list = event.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}

fn is_text_entry(event: &KeyboardEvent) -> bool {
    event
        .target()
        .is_some_and(|t| t.is_instance_of::<HtmlInputElement>() || t.is_instance_of::<HtmlTextAreaElement>())
}

/// Everything that exists only while mounted. Dropping it tears the viewport down.
struct Mounted {
    shared: Rc<Shared>,
    frame: FrameLoop,
    recenter: Option<FrameLoop>,
    listeners: Vec<Listener>,
}

impl Mounted {
    fn attach(
        container: HtmlElement,
        content: HtmlElement,
        config: &ViewportConfig,
        gate: DragGate,
    ) -> Result<Self, FolioError> {
        let document = document()?;
        let shared = Rc::new(Shared {
            core: RefCell::new(ViewportCore::with_gate(config, gate)),
            container,
            content,
            scroll_idle: RefCell::new(None),
        });

        let frame = {
            let shared = Rc::clone(&shared);
            FrameLoop::new(move |_ts| shared.frame())?
        };

        let container = shared.container.clone();
        let mut listeners = Vec::with_capacity(9);

        // --- Wheel ---
        {
            let shared = Rc::clone(&shared);
            listeners.push(Listener::with_passive(&container, "wheel", false, move |e: WheelEvent| {
                shared.wheel(&e);
            })?);
        }

        // --- Mouse ---
        {
            let shared = Rc::clone(&shared);
            let frame = frame.clone();
            listeners.push(Listener::new(&container, "mousedown", move |e: MouseEvent| {
                shared.core.borrow_mut().on_gesture_start(client_point(&e), now_ms());
                frame.start();
            })?);
        }
        {
            let shared = Rc::clone(&shared);
            listeners.push(Listener::new(&document, "mousemove", move |e: MouseEvent| {
                let moved = shared.core.borrow_mut().on_gesture_move(client_point(&e), now_ms());
                if moved {
                    shared.paint();
                }
            })?);
        }
        {
            let shared = Rc::clone(&shared);
            listeners.push(Listener::new(&document, "mouseup", move |_e: MouseEvent| {
                shared.core.borrow_mut().on_gesture_end(now_ms());
            })?);
        }

        // --- Touch ---
        {
            let shared = Rc::clone(&shared);
            let frame = frame.clone();
            listeners.push(Listener::with_passive(&container, "touchstart", true, move |e: TouchEvent| {
                let mut core = shared.core.borrow_mut();
                core.on_touch_start(&touch_points(&e), now_ms());
                if core.is_pointer_down() {
                    frame.start();
                }
            })?);
        }
        {
            let shared = Rc::clone(&shared);
            listeners.push(Listener::with_passive(&document, "touchmove", true, move |e: TouchEvent| {
                let moved = shared.core.borrow_mut().on_touch_move(&touch_points(&e), now_ms());
                if moved {
                    shared.paint();
                }
            })?);
        }
        {
            let shared = Rc::clone(&shared);
            listeners.push(Listener::new(&document, "touchend", move |_e: TouchEvent| {
                shared.core.borrow_mut().on_gesture_end(now_ms());
            })?);
        }

        // --- Keyboard ---
        {
            let shared = Rc::clone(&shared);
            let frame = frame.clone();
            listeners.push(Listener::new(&document, "keydown", move |e: KeyboardEvent| {
                let Some(key) = ArrowKey::from_key(&e.key()) else {
                    return;
                };
                if is_text_entry(&e) {
                    return;
                }
                e.prevent_default();
                shared.core.borrow_mut().on_key_hold(key);
                frame.start();
            })?);
        }
        {
            let shared = Rc::clone(&shared);
            listeners.push(Listener::new(&document, "keyup", move |e: KeyboardEvent| {
                if let Some(key) = ArrowKey::from_key(&e.key()) {
                    shared.core.borrow_mut().on_key_release(key);
                }
            })?);
        }

        let recenter = if config.center_on_mount {
            set_style(&shared.content, "opacity", "0");
            let shared = Rc::clone(&shared);
            let once = FrameLoop::new(move |_ts| {
                shared.recenter();
                false
            })?;
            once.start();
            Some(once)
        } else {
            None
        };

        shared.paint();
        Ok(Self { shared, frame, recenter, listeners })
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.frame.stop();
        if let Some(recenter) = &self.recenter {
            recenter.stop();
        }
        self.listeners.clear();
        self.shared.scroll_idle.borrow_mut().take();
        if self.shared.core.borrow_mut().end_scroll() {
            set_style(&self.shared.content, "pointer-events", "auto");
        }
        log::debug!("infinite canvas: unmounted");
    }
}

/// Pannable viewport handle.
#[wasm_bindgen]
pub struct InfiniteCanvas {
    gate: DragGate,
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl InfiniteCanvas {
    /// Mount on `container`, translating `content` inside it.
    ///
    /// `config` is an optional `{ centerOnMount, infiniteScroll, gridWidth, gridHeight }`
    /// object. An invalid configuration throws; a missing browser handle logs a
    /// warning and returns an inert handle.
    ///
    /// # Errors
    ///
    /// Returns the decode or validation error as a JS `Error`.
    pub fn mount(container: HtmlElement, content: HtmlElement, config: JsValue) -> Result<InfiniteCanvas, JsValue> {
        let config: ViewportConfig = decode_config(config)?;
        config.validate()?;

        let gate = DragGate::new();
        let mounted = match Mounted::attach(container, content, &config, gate.clone()) {
            Ok(mounted) => {
                log::debug!(
                    "infinite canvas: mounted (infinite={}, grid={}x{})",
                    config.infinite_scroll,
                    config.grid_width,
                    config.grid_height
                );
                Some(mounted)
            }
            Err(err) => {
                log::warn!("infinite canvas: mount skipped: {err}");
                None
            }
        };
        Ok(Self { gate, mounted })
    }

    /// Whether tile clicks should be ignored right now.
    #[wasm_bindgen(js_name = isDragging)]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gate.is_dragging_at(now_ms())
    }

    #[wasm_bindgen(js_name = offsetX)]
    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset().x
    }

    #[wasm_bindgen(js_name = offsetY)]
    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset().y
    }

    /// Replace the wrap period, turning infinite mode on, and renormalize the offset.
    ///
    /// # Errors
    ///
    /// Throws when either dimension is not a positive finite number.
    #[wasm_bindgen(js_name = setGridSize)]
    pub fn set_grid_size(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        let period = Size::new(width, height);
        if period.is_empty() {
            return Err(FolioError::InvalidGrid { width, height }.into());
        }
        if let Some(mounted) = &self.mounted {
            mounted.shared.core.borrow_mut().set_wrap_period(Some(period));
            mounted.shared.paint();
        }
        Ok(())
    }

    /// A handle tile click handlers can poll; it stays valid after unmount.
    #[wasm_bindgen(js_name = dragGate)]
    #[must_use]
    pub fn drag_gate(&self) -> ClickGate {
        ClickGate { gate: self.gate.clone() }
    }

    /// Remove every listener and cancel pending frames and timers. Idempotent.
    pub fn unmount(&mut self) {
        self.mounted.take();
    }
}

impl InfiniteCanvas {
    fn offset(&self) -> Point {
        self.mounted.as_ref().map_or(Point::ZERO, |m| m.shared.core.borrow().offset())
    }
}

/// Read-only view of the viewport's drag gate, exported to JS as `DragGate`.
#[wasm_bindgen(js_name = DragGate)]
#[derive(Clone)]
pub struct ClickGate {
    gate: DragGate,
}

#[wasm_bindgen(js_class = DragGate)]
impl ClickGate {
    #[wasm_bindgen(js_name = isDragging)]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gate.is_dragging_at(now_ms())
    }
}
