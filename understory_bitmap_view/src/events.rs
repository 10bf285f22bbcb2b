// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events consumed by a [`GestureSurface`](crate::GestureSurface) and the
//! effects it reports back.

use kurbo::Point;
use understory_gesture_state::touch::PointerId;

/// A pointer event, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A pointer touched down.
    Down {
        /// Platform pointer identifier.
        pointer: PointerId,
        /// Pointer position.
        position: Point,
    },
    /// A pointer moved.
    Move {
        /// Platform pointer identifier.
        pointer: PointerId,
        /// Pointer position.
        position: Point,
    },
    /// A pointer lifted.
    Up {
        /// Platform pointer identifier.
        pointer: PointerId,
        /// Pointer position at lift-off.
        position: Point,
    },
    /// The platform abandoned the pointer stream.
    Cancel,
}

/// An event from a platform-managed drag session, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// A drag session started somewhere.
    Started(Point),
    /// The drag entered this surface.
    Entered(Point),
    /// The drag moved over this surface.
    Location(Point),
    /// The drag left this surface.
    Exited(Point),
    /// The content was dropped on this surface.
    Dropped(Point),
    /// The drag session ended.
    Ended(Point),
}

bitflags::bitflags! {
    /// Work the host should do after an event was handled.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Effects: u8 {
        /// The transform changed; redraw with [`GestureSurface::current_transform`](crate::GestureSurface::current_transform).
        const REDRAW     = 0b0000_0001;
        /// Start a platform drag session for the content.
        const BEGIN_DRAG = 0b0000_0010;
    }
}
