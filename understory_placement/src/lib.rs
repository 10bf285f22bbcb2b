// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Placement: bounded affine placement of a single object.
//!
//! This crate provides a small, headless controller that owns the transform
//! of one piece of content (typically a bitmap) inside a viewport. It
//! focuses on:
//! - Mapping the content rectangle into viewport space.
//! - Accepting or rejecting incremental translate / rotate / scale steps so
//!   the content stays inside the viewport.
//! - Recovering gracefully when the content is already outside the viewport,
//!   for example after the viewport shrank.
//!
//! It does **not** decode, draw, or receive input events. Callers are
//! expected to:
//! - Feed gesture quantities (deltas, finger distances, finger angles) from a
//!   gesture tracker such as `understory_gesture_state`.
//! - Read [`PlacementController::transform`] at render time.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Vec2};
//! use understory_placement::PlacementController;
//!
//! let content = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let viewport = Rect::new(0.0, 0.0, 200.0, 200.0);
//! let mut placement = PlacementController::new(content, viewport);
//!
//! assert!(placement.translate(Vec2::new(50.0, 50.0)));
//! assert_eq!(placement.mapped_bounds(), Rect::new(50.0, 50.0, 150.0, 150.0));
//!
//! // This step would push the right/bottom edges to 210; it is rejected.
//! assert!(!placement.translate(Vec2::new(60.0, 60.0)));
//! assert_eq!(placement.mapped_bounds(), Rect::new(50.0, 50.0, 150.0, 150.0));
//! ```
//!
//! ## Pinch example
//!
//! Scale and rotation are driven by absolute finger quantities. A
//! [`PinchProgress`] remembers what has already been applied during the
//! current pinch.
//!
//! ```rust
//! use kurbo::{Rect, Vec2};
//! use understory_placement::{PinchProgress, PlacementController};
//!
//! let mut placement = PlacementController::new(
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//!     Rect::new(0.0, 0.0, 400.0, 400.0),
//! );
//! placement.translate(Vec2::new(150.0, 150.0));
//!
//! // Fingers started 100 apart at 0°.
//! let mut progress = PinchProgress::new(0.0);
//! // Now they are 150 apart at 90°: scale first, then rotate.
//! assert!(placement.scale(&mut progress, 150.0, 100.0));
//! assert!(placement.rotate(&mut progress, 90.0));
//! assert!((placement.uniform_scale() - 1.5).abs() < 1e-9);
//! assert!((placement.rotation_degrees() - 90.0).abs() < 1e-9);
//! ```
//!
//! ## Containment rules
//!
//! - A placement fully inside the viewport never leaves it: candidates that
//!   would cross an edge are rejected.
//! - A placement already outside ("overboard") may always be translated or
//!   rotated, and may be scaled down, so it can be worked back in.
//! - Scaling down never takes the mapped content height below a floor
//!   ([`DEFAULT_MIN_CONTENT_HEIGHT`] by default).
//!
//! This crate is `no_std` (with `alloc` for [`DecisionRecorder`]).

#![no_std]

extern crate alloc;

mod controller;
mod policy;
pub mod trace;

pub use controller::{
    DEFAULT_MIN_CONTENT_HEIGHT, PinchProgress, PlacementController, PlacementDebugInfo,
};
pub use policy::{ContainPolicy, FitMode};
pub use trace::{Decision, DecisionRecorder, PlacementOp, PlacementTrace, RejectReason, Verdict};
