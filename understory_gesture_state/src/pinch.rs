// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger geometry: distances, normalized angles, and the pinch baseline.
//!
//! Angles are reported in degrees in the half-open range `[0, 360)`. The raw
//! `atan2` result lies in `(-180, 180]`; negative values are shifted by a
//! full turn and everything else is passed through untouched.
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture_state::pinch::{angle_degrees, normalize_degrees};
//!
//! assert_eq!(normalize_degrees(-30.0), 330.0);
//! assert_eq!(normalize_degrees(45.0), 45.0);
//!
//! let a = angle_degrees(Point::new(0.0, 0.0), Point::new(0.0, 10.0));
//! assert!((a - 90.0).abs() < 1e-9);
//! ```

use kurbo::Point;

/// Shift a degree value produced by `atan2` into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Angle of the vector `from → to`, in normalized degrees.
#[must_use]
pub fn angle_degrees(from: Point, to: Point) -> f64 {
    normalize_degrees((to - from).atan2().to_degrees())
}

/// Euclidean distance between two fingers.
#[must_use]
pub fn finger_distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Reference frame captured when a second pointer touches down.
///
/// Every incremental scale and rotation in a pinch is measured against the
/// most recent baseline; a fresh one is taken whenever a second finger lands
/// again after being lifted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchBaseline {
    /// Distance between the two fingers at pinch start.
    pub distance: f64,
    /// Normalized angle from the first finger to the second at pinch start.
    pub angle: f64,
}

impl PinchBaseline {
    /// Capture a baseline from the two finger positions.
    #[must_use]
    pub fn capture(first: Point, second: Point) -> Self {
        Self {
            distance: finger_distance(first, second),
            angle: angle_degrees(first, second),
        }
    }
}
