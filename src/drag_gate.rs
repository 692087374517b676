//! Click suppression shared between the viewport and the tiles it hosts.
//!
//! A drag that ends over a tile makes the browser fire a click on it. The
//! viewport raises the gate when a press turns into a confirmed drag and
//! lowers it a short grace period after release, so a click handler that
//! checks [`DragGate::is_dragging_at`] first can ignore that trailing click.
//!
//! The gate is a cheap cloneable handle; every clone observes the same flag.
//! Lowering is time-based rather than timer-based: the gate stores the release
//! time and readers compare against their own clock.

#[cfg(test)]
#[path = "drag_gate_test.rs"]
mod drag_gate_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::consts::DRAG_GRACE_MS;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Flag {
    confirmed: bool,
    released_at_ms: Option<f64>,
}

/// Shared "a drag is in progress" flag.
#[derive(Debug, Clone, Default)]
pub struct DragGate {
    flag: Rc<Cell<Flag>>,
}

impl DragGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A new press started; it is not a drag until confirmed.
    pub fn reset(&self) {
        self.flag.set(Flag::default());
    }

    /// The active press travelled past the drag threshold.
    pub fn confirm(&self) {
        self.flag.set(Flag { confirmed: true, released_at_ms: None });
    }

    /// The gesture ended at `now_ms`. Starts the grace window if a drag was confirmed.
    pub fn release(&self, now_ms: f64) {
        let flag = self.flag.get();
        if flag.confirmed && flag.released_at_ms.is_none() {
            self.flag.set(Flag { confirmed: true, released_at_ms: Some(now_ms) });
        }
    }

    /// Whether click handlers should treat a click at `now_ms` as the tail of a drag.
    #[must_use]
    pub fn is_dragging_at(&self, now_ms: f64) -> bool {
        let flag = self.flag.get();
        flag.confirmed && flag.released_at_ms.is_none_or(|released| now_ms - released < DRAG_GRACE_MS)
    }
}
