// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Bitmap View: a headless surface for dragging, pinch-scaling, and
//! pinch-rotating one bitmap inside a bounded viewport.
//!
//! ## Overview
//!
//! [`BitmapView`] composes two lower layers:
//!
//! - `understory_gesture_state` turns pointer and drag-session events into
//!   touch phases, finger distances and angles, and drag deltas.
//! - `understory_placement` owns the affine transform and decides which
//!   gesture steps keep the bitmap inside the viewport.
//!
//! It does not decode or draw the bitmap and does not receive events from the
//! platform itself. The host forwards events and reacts to the returned
//! [`Effects`]:
//!
//! - [`Effects::REDRAW`]: draw the bitmap with [`GestureSurface::current_transform`].
//! - [`Effects::BEGIN_DRAG`]: start a platform drag session; its events come
//!   back through [`GestureSurface::handle_drag`].
//!
//! ## Workflow
//!
//! 1) Create the view from the bitmap's pixel size and the view bounds.
//! 2) Forward pointer events to [`GestureSurface::handle_gesture`].
//! 3) Forward drag-session events to [`GestureSurface::handle_drag`].
//! 4) Call [`BitmapView::resize`] when the view is laid out again.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_bitmap_view::{BitmapView, DragEvent, Effects, GestureSurface, PointerEvent};
//! use understory_gesture_state::touch::PointerId;
//!
//! let mut view = BitmapView::for_image(100, 100, Rect::new(0.0, 0.0, 200.0, 200.0));
//!
//! // A touch on the bitmap that moves far enough asks for a drag session.
//! let finger = PointerId(0);
//! view.handle_gesture(PointerEvent::Down { pointer: finger, position: Point::new(50.0, 50.0) });
//! let fx = view.handle_gesture(PointerEvent::Move { pointer: finger, position: Point::new(70.0, 50.0) });
//! assert!(fx.contains(Effects::BEGIN_DRAG));
//!
//! // The drag session then moves the bitmap.
//! view.handle_drag(DragEvent::Entered(Point::new(70.0, 50.0)));
//! let fx = view.handle_drag(DragEvent::Location(Point::new(120.0, 100.0)));
//! assert_eq!(fx, Effects::REDRAW);
//! assert_eq!(view.placement().mapped_bounds(), Rect::new(50.0, 50.0, 150.0, 150.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod events;
mod view;

pub use events::{DragEvent, Effects, PointerEvent};
pub use view::{BitmapView, DEFAULT_DRAG_THRESHOLD, GestureSurface, ViewConfig};
