// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch session state machine: idle, single touch, and two-finger pinch.
//!
//! [`TouchState`] follows up to two pointers and reports what each pointer
//! event means for a direct-manipulation surface:
//!
//! - `Idle → SingleTouch` on the first pointer down; its position becomes the
//!   drag origin.
//! - `SingleTouch → Pinch` on a second pointer down; a fresh
//!   [`PinchBaseline`] is captured.
//! - Moves in `SingleTouch` report the offset from the drag origin; moves in
//!   `Pinch` report the current finger distance and angle.
//! - `Pinch → SingleTouch` when one finger lifts; the remaining finger's
//!   position becomes the new drag origin.
//! - Any phase → `Idle` when the last finger lifts or the sequence is cancelled.
//!
//! A third concurrent pointer is ignored, as are events for unknown pointers.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture_state::touch::{PointerId, TouchPhase, TouchState, TouchUpdate};
//!
//! let mut touch = TouchState::new();
//! touch.on_down(PointerId(0), Point::new(0.0, 0.0));
//! let started = touch.on_down(PointerId(1), Point::new(100.0, 0.0));
//! assert!(matches!(started, TouchUpdate::PinchStarted { .. }));
//! assert_eq!(touch.phase(), TouchPhase::Pinch);
//!
//! match touch.on_move(PointerId(1), Point::new(0.0, 150.0)) {
//!     TouchUpdate::Pinch { distance, angle, .. } => {
//!         assert!((distance - 150.0).abs() < 1e-9);
//!         assert!((angle - 90.0).abs() < 1e-9);
//!     }
//!     other => panic!("unexpected update: {other:?}"),
//! }
//! ```

use kurbo::{Point, Vec2};

use crate::pinch::{PinchBaseline, angle_degrees, finger_distance};

/// Platform pointer identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u32);

/// Coarse phase of a touch session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TouchPhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// Exactly one pointer is down.
    SingleTouch,
    /// Two pointers are down.
    Pinch,
}

/// What a pointer event meant for the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchUpdate {
    /// The event did not change anything of interest.
    None,
    /// A new session began with a single pointer.
    Began {
        /// Position of the first pointer.
        position: Point,
    },
    /// A second pointer landed and a fresh baseline was captured.
    PinchStarted {
        /// Distance and angle between the fingers at pinch start.
        baseline: PinchBaseline,
    },
    /// The single pointer moved.
    Moved {
        /// Current pointer position.
        position: Point,
        /// Offset from the drag origin.
        offset: Vec2,
    },
    /// One of the two pinch pointers moved.
    Pinch {
        /// Current distance between the fingers.
        distance: f64,
        /// Current normalized angle from the first finger to the second.
        angle: f64,
        /// Baseline captured at pinch start.
        baseline: PinchBaseline,
    },
    /// One pinch pointer lifted; the session continues with the other.
    PinchEnded {
        /// Position of the pointer that is still down.
        remaining: Point,
    },
    /// The session ended.
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Contact {
    id: PointerId,
    position: Point,
}

/// Per-session touch state.
///
/// Contacts are kept in landing order: slot 0 is the primary finger, slot 1
/// the pinch partner.
#[derive(Clone, Debug, Default)]
pub struct TouchState {
    contacts: [Option<Contact>; 2],
    origin: Option<Point>,
    baseline: Option<PinchBaseline>,
    drag_claimed: bool,
}

impl TouchState {
    /// Creates an idle touch state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase, derived from the number of tracked pointers.
    #[must_use]
    pub fn phase(&self) -> TouchPhase {
        match (self.contacts[0], self.contacts[1]) {
            (None, _) => TouchPhase::Idle,
            (Some(_), None) => TouchPhase::SingleTouch,
            (Some(_), Some(_)) => TouchPhase::Pinch,
        }
    }

    /// Drag origin of the current single-touch stretch, if any.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Baseline of the current pinch, if pinching.
    #[must_use]
    pub fn baseline(&self) -> Option<PinchBaseline> {
        self.baseline
    }

    /// Position of the primary pointer, if any.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        self.contacts[0].map(|c| c.position)
    }

    /// Handle a pointer landing.
    pub fn on_down(&mut self, id: PointerId, position: Point) -> TouchUpdate {
        if let Some(slot) = self.slot_of(id) {
            // Repeated down for a known pointer; treat as a position refresh.
            if let Some(contact) = self.contacts[slot].as_mut() {
                contact.position = position;
            }
            return TouchUpdate::None;
        }
        match self.contacts {
            [None, _] => {
                self.contacts = [Some(Contact { id, position }), None];
                self.origin = Some(position);
                self.baseline = None;
                self.drag_claimed = false;
                TouchUpdate::Began { position }
            }
            [Some(first), None] => {
                self.contacts[1] = Some(Contact { id, position });
                let baseline = PinchBaseline::capture(first.position, position);
                self.baseline = Some(baseline);
                TouchUpdate::PinchStarted { baseline }
            }
            [Some(_), Some(_)] => TouchUpdate::None,
        }
    }

    /// Handle a pointer moving.
    pub fn on_move(&mut self, id: PointerId, position: Point) -> TouchUpdate {
        let Some(slot) = self.slot_of(id) else {
            return TouchUpdate::None;
        };
        if let Some(contact) = self.contacts[slot].as_mut() {
            contact.position = position;
        }
        match (self.contacts, self.baseline) {
            ([Some(first), Some(second)], Some(baseline)) => TouchUpdate::Pinch {
                distance: finger_distance(first.position, second.position),
                angle: angle_degrees(first.position, second.position),
                baseline,
            },
            ([Some(first), None], _) => {
                let origin = self.origin.unwrap_or(first.position);
                TouchUpdate::Moved {
                    position,
                    offset: position - origin,
                }
            }
            _ => TouchUpdate::None,
        }
    }

    /// Handle a pointer lifting.
    pub fn on_up(&mut self, id: PointerId) -> TouchUpdate {
        let Some(slot) = self.slot_of(id) else {
            return TouchUpdate::None;
        };
        self.contacts[slot] = None;
        if slot == 0 {
            self.contacts = [self.contacts[1], None];
        }
        match self.contacts[0] {
            Some(remaining) => {
                self.baseline = None;
                self.origin = Some(remaining.position);
                TouchUpdate::PinchEnded {
                    remaining: remaining.position,
                }
            }
            None => {
                self.reset();
                TouchUpdate::Ended
            }
        }
    }

    /// Abandon the session, as when the platform cancels the pointer stream.
    pub fn cancel(&mut self) -> TouchUpdate {
        if self.phase() == TouchPhase::Idle {
            return TouchUpdate::None;
        }
        self.reset();
        TouchUpdate::Ended
    }

    /// Claim the one drag initiation allowed per touch session.
    ///
    /// Returns `true` the first time it is called during a single-touch
    /// stretch of a session and `false` afterwards until the session ends.
    pub fn claim_drag(&mut self) -> bool {
        if self.phase() != TouchPhase::SingleTouch || self.drag_claimed {
            return false;
        }
        self.drag_claimed = true;
        true
    }

    /// Returns `true` if this session already requested a drag.
    #[must_use]
    pub fn drag_claimed(&self) -> bool {
        self.drag_claimed
    }

    fn slot_of(&self, id: PointerId) -> Option<usize> {
        self.contacts
            .iter()
            .position(|c| c.is_some_and(|c| c.id == id))
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
