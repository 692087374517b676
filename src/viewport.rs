//! Viewport core: offset, momentum, key motion, and wrap-around.
//!
//! `ViewportCore` holds everything the infinite canvas decides and nothing it
//! renders. The host feeds it input events and one [`ViewportCore::tick`] per
//! animation frame, then writes [`ViewportCore::offset`] to the content
//! transform. Every entry point takes the current time explicitly so the whole
//! state machine runs without a browser.
//!
//! Wrapping: with a grid period `(W, H)` configured, the offset is kept in
//! `[-2W, -W) x [-2H, -H)` after every mutation. The page lays out a 3x3 copy of
//! one grid period, so this window leaves a full period of content on every
//! side of the visible area.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::config::ViewportConfig;
use crate::consts::{
    DRAG_FRICTION, KEY_ACCELERATION, KEY_FRICTION, KEY_MAX_SPEED, KEY_MIN_VELOCITY, MIN_VELOCITY, SCROLL_SPEED,
    VELOCITY_FRAME_MS, VELOCITY_SMOOTHING,
};
use crate::drag_gate::DragGate;
use crate::geom::{Point, Rect, Size};
use crate::input::{ArrowKey, HeldKeys, InputState, WheelDelta};

/// Map `value` into `[-2 * period, -period)`.
#[must_use]
pub fn wrap_into_window(value: f64, period: f64) -> f64 {
    let mut phase = (value + 2.0 * period).rem_euclid(period);
    // rem_euclid can round up to exactly `period` for tiny negative inputs.
    if phase >= period {
        phase = 0.0;
    }
    -2.0 * period + phase
}

/// What a single [`ViewportCore::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// The offset changed and must be written to the transform.
    pub moved: bool,
    /// Momentum from a released drag is still coasting.
    pub coasting: bool,
    /// An arrow key is held or key velocity has not yet decayed.
    pub key_motion: bool,
}

/// Transient pointer tracking used to estimate release velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct PointerTrack {
    last: Point,
    last_ms: f64,
    sampled: bool,
}

/// Viewport state: all pan logic that doesn't depend on the DOM.
#[derive(Debug, Clone)]
pub struct ViewportCore {
    /// Translation applied to the content, in CSS pixels.
    pub offset: Point,
    /// Momentum carried after a drag, in px/frame.
    pub velocity: Point,
    /// Velocity from held arrow keys, in px/frame. Separate from `velocity`.
    pub key_velocity: Point,
    pub keys: HeldKeys,
    pub input: InputState,
    gate: DragGate,
    wrap: Option<Size>,
    track: PointerTrack,
    scrolling: bool,
}

impl ViewportCore {
    /// Create a core for the given configuration with its own drag gate.
    #[must_use]
    pub fn new(config: &ViewportConfig) -> Self {
        Self::with_gate(config, DragGate::new())
    }

    /// Create a core that raises `gate` on confirmed drags.
    #[must_use]
    pub fn with_gate(config: &ViewportConfig, gate: DragGate) -> Self {
        let mut core = Self {
            offset: Point::ZERO,
            velocity: Point::ZERO,
            key_velocity: Point::ZERO,
            keys: HeldKeys::default(),
            input: InputState::Idle,
            gate,
            wrap: config.wrap_period(),
            track: PointerTrack::default(),
            scrolling: false,
        };
        core.wrap_offset();
        core
    }

    // --- Queries ---

    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// The grid period the offset wraps in, if wrapping is on.
    #[must_use]
    pub fn wrap_period(&self) -> Option<Size> {
        self.wrap
    }

    /// The gate this core raises; hand clones of it to click handlers.
    #[must_use]
    pub fn gate(&self) -> &DragGate {
        &self.gate
    }

    /// True between gesture start and end, whether or not it became a drag.
    #[must_use]
    pub fn is_pointer_down(&self) -> bool {
        self.input.is_active()
    }

    // --- Configuration ---

    /// Replace the wrap period (e.g. after the tiles were re-measured) and renormalize.
    ///
    /// Passing `None` or an empty size turns wrapping off.
    pub fn set_wrap_period(&mut self, period: Option<Size>) {
        self.wrap = period.filter(|p| !p.is_empty());
        self.wrap_offset();
    }

    /// Compute and apply the initial offset.
    ///
    /// `anchor` is the marked center element's box relative to the content's
    /// top-left corner. Without an anchor, infinite mode centers the middle copy
    /// of the 3x3 layout and finite mode centers the whole content block.
    pub fn recenter(&mut self, container: Size, content: Size, anchor: Option<Rect>) -> Point {
        let target = match (anchor, self.wrap) {
            (Some(anchor), _) => container.center() - anchor.center(),
            (None, Some(period)) => container.center() - Point::new(period.width * 1.5, period.height * 1.5),
            (None, None) => Point::new(
                (container.width - content.width) * 0.5,
                (container.height - content.height) * 0.5,
            ),
        };
        self.offset = target;
        self.velocity = Point::ZERO;
        self.wrap_offset();
        self.offset
    }

    // --- Wheel ---

    /// Pan directly by a wheel delta. Drops any momentum.
    ///
    /// Returns `true` when this event started a new wheel burst, i.e. the host
    /// should disable content pointer events now.
    pub fn on_wheel(&mut self, delta: WheelDelta) -> bool {
        self.velocity = Point::ZERO;
        self.offset.x -= delta.dx * SCROLL_SPEED;
        self.offset.y -= delta.dy * SCROLL_SPEED;
        self.wrap_offset();
        let started = !self.scrolling;
        self.scrolling = true;
        started
    }

    /// The wheel went quiet. Returns `true` if a burst was in progress.
    pub fn end_scroll(&mut self) -> bool {
        std::mem::replace(&mut self.scrolling, false)
    }

    // --- Pointer gesture ---

    /// Pointer (or single touch) went down at `pointer`.
    pub fn on_gesture_start(&mut self, pointer: Point, now_ms: f64) {
        self.input = InputState::press(pointer, self.offset);
        self.velocity = Point::ZERO;
        self.track = PointerTrack { last: pointer, last_ms: now_ms, sampled: false };
        self.gate.reset();
    }

    /// Pointer moved. Returns `true` if the offset changed.
    pub fn on_gesture_move(&mut self, pointer: Point, now_ms: f64) -> bool {
        let Some(grab) = self.input.grab() else {
            return false;
        };
        let (next, promoted) = self.input.moved(pointer);
        self.input = next;
        if promoted {
            self.gate.confirm();
        }

        self.offset = pointer - grab;
        self.wrap_offset();
        self.sample_velocity(pointer, now_ms);
        true
    }

    /// Pointer released (or the last touch lifted).
    pub fn on_gesture_end(&mut self, now_ms: f64) {
        if !self.input.is_active() {
            return;
        }
        self.input = InputState::Idle;
        self.gate.release(now_ms);
    }

    /// Touch start. Only a single touch pans; more fingers are left to the browser.
    pub fn on_touch_start(&mut self, touches: &[Point], now_ms: f64) {
        if let [touch] = touches {
            self.on_gesture_start(*touch, now_ms);
        }
    }

    /// Touch move. Ignored unless exactly one finger is down.
    pub fn on_touch_move(&mut self, touches: &[Point], now_ms: f64) -> bool {
        match touches {
            [touch] => self.on_gesture_move(*touch, now_ms),
            _ => false,
        }
    }

    fn sample_velocity(&mut self, pointer: Point, now_ms: f64) {
        let dt = now_ms - self.track.last_ms;
        if dt <= 0.0 {
            return;
        }
        let sample = (pointer - self.track.last) * (VELOCITY_FRAME_MS / dt);
        self.velocity = if self.track.sampled {
            self.velocity * (1.0 - VELOCITY_SMOOTHING) + sample * VELOCITY_SMOOTHING
        } else {
            sample
        };
        self.track = PointerTrack { last: pointer, last_ms: now_ms, sampled: true };
    }

    // --- Keyboard ---

    pub fn on_key_hold(&mut self, key: ArrowKey) {
        self.keys.set(key, true);
    }

    pub fn on_key_release(&mut self, key: ArrowKey) {
        self.keys.set(key, false);
    }

    // --- Frame ---

    /// Advance physics by one animation frame.
    ///
    /// While a gesture is active the pointer owns the offset and nothing moves
    /// here. Otherwise drag momentum coasts and decays, held arrow keys
    /// accelerate, and the result is wrapped.
    pub fn tick(&mut self) -> FrameReport {
        if self.input.is_active() {
            return FrameReport::default();
        }

        let coasting = self.step_momentum();
        let key_motion = self.step_keys();
        let moved = coasting || key_motion;
        if moved {
            self.wrap_offset();
        }
        FrameReport { moved, coasting, key_motion: key_motion || self.keys.any() }
    }

    /// Nothing will move on the next tick without new input.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        !self.input.is_active() && self.velocity == Point::ZERO && self.key_velocity == Point::ZERO && !self.keys.any()
    }

    fn step_momentum(&mut self) -> bool {
        if self.velocity.x.abs() > MIN_VELOCITY || self.velocity.y.abs() > MIN_VELOCITY {
            self.offset += self.velocity;
            self.velocity = self.velocity * DRAG_FRICTION;
            true
        } else {
            self.velocity = Point::ZERO;
            false
        }
    }

    fn step_keys(&mut self) -> bool {
        let push = self.keys.push() * KEY_ACCELERATION;
        self.key_velocity = Point::new(
            (self.key_velocity.x + push.x).clamp(-KEY_MAX_SPEED, KEY_MAX_SPEED),
            (self.key_velocity.y + push.y).clamp(-KEY_MAX_SPEED, KEY_MAX_SPEED),
        );

        let moving = self.key_velocity.x.abs() > KEY_MIN_VELOCITY || self.key_velocity.y.abs() > KEY_MIN_VELOCITY;
        if moving {
            self.offset += self.key_velocity;
        }

        if !self.keys.horizontal() {
            self.key_velocity.x *= KEY_FRICTION;
        }
        if !self.keys.vertical() {
            self.key_velocity.y *= KEY_FRICTION;
        }
        if !moving && !self.keys.any() {
            self.key_velocity = Point::ZERO;
        }
        moving
    }

    fn wrap_offset(&mut self) {
        if let Some(period) = self.wrap {
            self.offset.x = wrap_into_window(self.offset.x, period.width);
            self.offset.y = wrap_into_window(self.offset.y, period.height);
        }
    }
}
