//! Input model: wheel deltas, arrow keys, and the pan gesture state machine.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. A press starts out as a potential click and is promoted to a
//! confirmed drag once the pointer has travelled far enough from where it went
//! down. Only confirmed drags raise the shared [`crate::drag_gate::DragGate`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::DRAG_THRESHOLD_PX;
use crate::geom::Point;

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// One of the four arrow keys that pan the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    /// Map a browser `KeyboardEvent.key` value to an arrow key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    /// Direction of the acceleration this key applies to the offset.
    ///
    /// Up and left move the content down and right (the view travels up/left),
    /// so they push the offset in the positive direction.
    #[must_use]
    pub fn push(self) -> Point {
        match self {
            Self::Up => Point::new(0.0, 1.0),
            Self::Down => Point::new(0.0, -1.0),
            Self::Left => Point::new(1.0, 0.0),
            Self::Right => Point::new(-1.0, 0.0),
        }
    }
}

/// Which arrow keys are currently held.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub fn set(&mut self, key: ArrowKey, held: bool) {
        match key {
            ArrowKey::Up => self.up = held,
            ArrowKey::Down => self.down = held,
            ArrowKey::Left => self.left = held,
            ArrowKey::Right => self.right = held,
        }
    }

    #[must_use]
    pub fn any(self) -> bool {
        self.horizontal() || self.vertical()
    }

    /// Either left or right is held.
    #[must_use]
    pub fn horizontal(self) -> bool {
        self.left || self.right
    }

    /// Either up or down is held.
    #[must_use]
    pub fn vertical(self) -> bool {
        self.up || self.down
    }

    /// Sum of the push directions of every held key.
    #[must_use]
    pub fn push(self) -> Point {
        [
            (self.up, ArrowKey::Up),
            (self.down, ArrowKey::Down),
            (self.left, ArrowKey::Left),
            (self.right, ArrowKey::Right),
        ]
        .into_iter()
        .filter(|(held, _)| *held)
        .fold(Point::ZERO, |acc, (_, key)| acc + key.push())
    }
}

/// Internal state for the pan gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Pointer is down but has not yet travelled past the drag threshold.
    /// Releasing now is a click.
    Pressed {
        /// Pointer position minus offset at press time; `offset = pointer - grab`.
        grab: Point,
        /// Pointer position at press time.
        start: Point,
    },
    /// Pointer travelled past the threshold; the release must not click.
    Dragging {
        /// Same grab point the press started with.
        grab: Point,
    },
}

impl InputState {
    /// Begin a press at `pointer` while the content sits at `offset`.
    #[must_use]
    pub fn press(pointer: Point, offset: Point) -> Self {
        Self::Pressed { grab: pointer - offset, start: pointer }
    }

    /// True between gesture start and gesture end, confirmed or not.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// The grab point of an active gesture.
    #[must_use]
    pub fn grab(self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Pressed { grab, .. } | Self::Dragging { grab } => Some(grab),
        }
    }

    /// Advance the machine for a pointer move.
    ///
    /// Returns the next state and whether this move promoted a press into a
    /// confirmed drag.
    #[must_use]
    pub fn moved(self, pointer: Point) -> (Self, bool) {
        match self {
            Self::Pressed { grab, start } if (pointer - start).length() >= DRAG_THRESHOLD_PX => {
                (Self::Dragging { grab }, true)
            }
            other => (other, false),
        }
    }
}
