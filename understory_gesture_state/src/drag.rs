// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-session tracker: turn absolute drag locations into per-step deltas.
//!
//! A platform drag session reports where the dragged content currently is,
//! not how far it moved. [`DragTracker`] remembers the previous location so a
//! consumer can apply each step as an incremental translation.
//!
//! ## Usage
//!
//! 1) When the drag enters the surface, call [`DragTracker::enter`] with the entry location.
//! 2) On each location report, call [`DragTracker::location`] to get the delta since the previous report.
//! 3) On drop, call [`DragTracker::drop_at`], which yields a final delta and stops tracking.
//! 4) When the drag leaves or ends without a drop, call [`DragTracker::leave`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_gesture_state::drag::DragTracker;
//!
//! let mut drag = DragTracker::default();
//!
//! drag.enter(Point::new(10.0, 20.0));
//! assert!(drag.is_tracking());
//!
//! assert_eq!(drag.location(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.total_offset(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//!
//! assert_eq!(drag.drop_at(Point::new(16.0, 25.0)), Some(Vec2::new(1.0, 0.0)));
//! assert!(!drag.is_tracking());
//! ```

use kurbo::{Point, Vec2};

/// Tracks the previous location of an in-flight drag session.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    entry: Option<Point>,
    last: Option<Point>,
}

impl DragTracker {
    /// Begin tracking from the location where the drag entered the surface.
    ///
    /// Re-entering replaces any previous tracking state.
    pub fn enter(&mut self, pos: Point) {
        self.entry = Some(pos);
        self.last = Some(pos);
    }

    /// Record a new drag location, returning the delta since the previous one.
    ///
    /// Returns `None` when no drag has entered.
    pub fn location(&mut self, pos: Point) -> Option<Vec2> {
        self.entry?;
        let delta = self.last.map(|last| pos - last);
        self.last = Some(pos);
        delta
    }

    /// Record the drop location and stop tracking.
    ///
    /// The returned delta is the final step, as for [`DragTracker::location`].
    pub fn drop_at(&mut self, pos: Point) -> Option<Vec2> {
        let delta = self.location(pos);
        self.leave();
        delta
    }

    /// Total offset from the entry location to `current`.
    #[must_use]
    pub fn total_offset(&self, current: Point) -> Option<Vec2> {
        self.entry.map(|entry| current - entry)
    }

    /// Last recorded location, if tracking.
    #[must_use]
    pub fn last_location(&self) -> Option<Point> {
        self.last
    }

    /// Stop tracking. Safe to call when idle.
    pub fn leave(&mut self) {
        self.entry = None;
        self.last = None;
    }

    /// Returns `true` between [`DragTracker::enter`] and leave/drop.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.entry.is_some()
    }
}
