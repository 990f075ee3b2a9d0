//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
///
/// Positions are in the same coordinate space as the bounds passed to
/// [`Widget::layout`](crate::Widget::layout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Pointer down
    PointerDown {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
        /// Is primary pointer
        is_primary: bool,
    },
    /// Pointer moved
    PointerMove {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
        /// Is primary pointer
        is_primary: bool,
    },
    /// Pointer up
    PointerUp {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
        /// Is primary pointer
        is_primary: bool,
    },
    /// Pointer cancelled (e.g. the gesture was taken over by a parent)
    PointerCancel {
        /// Pointer ID
        pointer_id: PointerId,
    },
}

impl Event {
    /// Primary touch pointer pressed at `position`.
    #[must_use]
    pub const fn touch_down(position: Point) -> Self {
        Self::PointerDown {
            pointer_id: PointerId(0),
            pointer_type: PointerType::Touch,
            position,
            is_primary: true,
        }
    }

    /// Primary touch pointer moved to `position`.
    #[must_use]
    pub const fn touch_move(position: Point) -> Self {
        Self::PointerMove {
            pointer_id: PointerId(0),
            pointer_type: PointerType::Touch,
            position,
            is_primary: true,
        }
    }

    /// Primary touch pointer released at `position`.
    #[must_use]
    pub const fn touch_up(position: Point) -> Self {
        Self::PointerUp {
            pointer_id: PointerId(0),
            pointer_type: PointerType::Touch,
            position,
            is_primary: true,
        }
    }
}

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Type of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch pointer
    Touch,
    /// Pen/stylus pointer
    Pen,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}
