//! `BrainCanvas`: the animated silhouette on the home section.
//!
//! Sizes the canvas backing store to its parent (times the device pixel
//! ratio), regenerates the scene whenever the parent resizes, feeds pointer
//! positions to the animator for hover scaling, and paints every frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, ResizeObserver, ResizeObserverEntry, Window};

use super::frame_loop::FrameLoop;
use super::listener::Listener;
use super::{decode_config, window};
use crate::brain::Animator;
use crate::config::{BrainConfig, Theme};
use crate::consts::{FALLBACK_HEIGHT, FALLBACK_WIDTH};
use crate::error::FolioError;
use crate::geom::{Point, Size};
use crate::render::draw_brain;

type ResizeCallback = Closure<dyn FnMut(js_sys::Array, ResizeObserver)>;

#[derive(Debug, Clone, Copy, Default)]
struct Layout {
    size: Size,
    dpr: f64,
}

struct Shared {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    animator: RefCell<Animator>,
    layout: Cell<Layout>,
}

impl Shared {
    /// Resize the backing store and regenerate the scene. Empty sizes are skipped.
    fn resize(&self, size: Size) {
        if size.is_empty() {
            log::warn!("brain: ignoring empty size {}x{}", size.width, size.height);
            return;
        }
        let dpr = self.window.device_pixel_ratio();
        let dpr = if dpr > 0.0 { dpr } else { 1.0 };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.canvas.set_width((size.width * dpr) as u32);
            self.canvas.set_height((size.height * dpr) as u32);
        }
        self.layout.set(Layout { size, dpr });
        self.animator.borrow_mut().resize(size);
    }

    fn frame(&self, now_ms: f64) -> bool {
        self.animator.borrow_mut().advance(now_ms);
        let layout = self.layout.get();
        let animator = self.animator.borrow();
        match draw_brain(&self.ctx, &animator, layout.size, layout.dpr, now_ms) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("brain: draw failed, stopping: {err:?}");
                false
            }
        }
    }

    fn pointer_moved(&self, event: &MouseEvent) {
        let rect = self.canvas.get_bounding_client_rect();
        let p = Point::new(f64::from(event.client_x()) - rect.left(), f64::from(event.client_y()) - rect.top());
        self.animator.borrow_mut().pointer_moved(p);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, FolioError> {
    canvas
        .get_context("2d")?
        .ok_or(FolioError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| FolioError::NoContext)
}

fn random_seed() -> u64 {
    js_sys::Math::random().to_bits()
}

struct Mounted {
    shared: Rc<Shared>,
    frame: FrameLoop,
    observer: Option<(ResizeObserver, ResizeCallback)>,
    listeners: Vec<Listener>,
}

impl Mounted {
    fn attach(canvas: HtmlCanvasElement, config: &BrainConfig) -> Result<Self, FolioError> {
        let window = window()?;
        let ctx = context_2d(&canvas)?;
        let seed = config.seed.unwrap_or_else(random_seed);
        let shared = Rc::new(Shared {
            window,
            canvas,
            ctx,
            animator: RefCell::new(Animator::new(seed, config.theme)),
            layout: Cell::new(Layout::default()),
        });

        let parent = shared.canvas.parent_element();
        let initial = parent.as_ref().map_or_else(
            || {
                log::debug!("brain: canvas has no parent, using {FALLBACK_WIDTH}x{FALLBACK_HEIGHT}");
                Size::new(FALLBACK_WIDTH, FALLBACK_HEIGHT)
            },
            |p| {
                let rect = p.get_bounding_client_rect();
                Size::new(rect.width(), rect.height())
            },
        );
        shared.resize(initial);

        let observer = match parent {
            Some(parent) => {
                let shared = Rc::clone(&shared);
                let cb: ResizeCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: ResizeObserver| {
                    for entry in entries.iter() {
                        if let Ok(entry) = entry.dyn_into::<ResizeObserverEntry>() {
                            let rect = entry.content_rect();
                            shared.resize(Size::new(rect.width(), rect.height()));
                        }
                    }
                }) as Box<dyn FnMut(js_sys::Array, ResizeObserver)>);
                let observer = ResizeObserver::new(cb.as_ref().unchecked_ref())?;
                observer.observe(&parent);
                Some((observer, cb))
            }
            None => None,
        };

        let canvas = shared.canvas.clone();
        let mut listeners = Vec::with_capacity(2);
        {
            let shared = Rc::clone(&shared);
            listeners.push(Listener::new(&canvas, "mousemove", move |e: MouseEvent| shared.pointer_moved(&e))?);
        }
        {
            let shared = Rc::clone(&shared);
            listeners.push(Listener::new(&canvas, "mouseleave", move |_e: MouseEvent| {
                shared.animator.borrow_mut().pointer_left();
            })?);
        }

        let frame = {
            let shared = Rc::clone(&shared);
            FrameLoop::new(move |ts| shared.frame(ts))?
        };
        frame.start();

        log::debug!("brain: mounted with seed {seed}, theme {:?}", config.theme);
        Ok(Self { shared, frame, observer, listeners })
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.frame.stop();
        if let Some((observer, _)) = &self.observer {
            observer.disconnect();
        }
        self.listeners.clear();
        log::debug!("brain: unmounted");
    }
}

/// Animated brain canvas handle.
#[wasm_bindgen]
pub struct BrainCanvas {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl BrainCanvas {
    /// Start animating `canvas`. `config` is an optional `{ theme, seed }` object.
    ///
    /// A canvas without a 2D context logs a warning and yields an inert handle.
    ///
    /// # Errors
    ///
    /// Throws when `config` cannot be decoded.
    pub fn mount(canvas: HtmlCanvasElement, config: JsValue) -> Result<BrainCanvas, JsValue> {
        let config: BrainConfig = decode_config(config)?;
        let mounted = match Mounted::attach(canvas, &config) {
            Ok(mounted) => Some(mounted),
            Err(err) => {
                log::warn!("brain: mount skipped: {err}");
                None
            }
        };
        Ok(Self { mounted })
    }

    /// Switch between `"light"` and `"dark"`. Only colors change.
    ///
    /// # Errors
    ///
    /// Throws on any other theme name.
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, theme: &str) -> Result<(), JsValue> {
        let theme = Theme::from_name(theme).ok_or_else(|| FolioError::UnknownTheme(theme.to_owned()))?;
        if let Some(mounted) = &self.mounted {
            mounted.shared.animator.borrow_mut().set_theme(theme);
        }
        Ok(())
    }

    /// Stop the frame loop, disconnect the resize observer, and remove listeners. Idempotent.
    pub fn unmount(&mut self) {
        self.mounted.take();
    }
}
