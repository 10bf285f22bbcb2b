// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Gesture State: session state for direct manipulation of a single object.
//!
//! This crate provides small state machines that turn raw pointer and
//! drag-session events into the quantities a placement controller needs:
//!
//! - [`touch`]: Idle / single-touch / pinch transitions for up to two pointers
//! - [`pinch`]: Finger distance, normalized angles, and the pinch baseline
//! - [`drag`]: Per-step deltas from a platform drag session's absolute locations
//!
//! ## Design Philosophy
//!
//! Like the other Understory event-state helpers, these types track just
//! enough state to compute transitions. They never decide whether a gesture
//! step is *allowed*; that is left to the consumer (for example
//! `understory_placement`), which receives plain numbers and points.
//!
//! ## Usage Patterns
//!
//! ### Pinch
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture_state::touch::{PointerId, TouchState, TouchUpdate};
//!
//! let mut touch = TouchState::new();
//! touch.on_down(PointerId(7), Point::new(10.0, 10.0));
//! touch.on_down(PointerId(9), Point::new(110.0, 10.0));
//!
//! if let TouchUpdate::Pinch { distance, baseline, .. } =
//!     touch.on_move(PointerId(9), Point::new(160.0, 10.0))
//! {
//!     assert_eq!(baseline.distance, 100.0);
//!     assert_eq!(distance, 150.0);
//! }
//! ```
//!
//! ### Drag sessions
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_gesture_state::drag::DragTracker;
//!
//! let mut drag = DragTracker::default();
//! drag.enter(Point::new(0.0, 0.0));
//! assert_eq!(drag.location(Point::new(3.0, 4.0)), Some(Vec2::new(3.0, 4.0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): Forward to Kurbo's `std` feature.
//! - `libm`: Use Kurbo's `libm` backend for `no_std` builds.
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod drag;
pub mod pinch;
pub mod touch;
