// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_placement` crate.
//!
//! These exercise the containment rules across sequences of mixed steps,
//! starting both from valid placements and from overboard ones.

use kurbo::{Affine, Rect, Vec2};
use understory_placement::{PinchProgress, PlacementController};

fn inside(b: Rect, view: Rect) -> bool {
    let slack = 1e-6;
    b.x0 >= view.x0 - slack
        && b.y0 >= view.y0 - slack
        && b.x1 <= view.x1 + slack
        && b.y1 <= view.y1 + slack
}

/// A cheap deterministic sequence so the walk covers many directions.
fn wobble(i: u32) -> f64 {
    (f64::from(i) * 0.618_033_988_75).fract() * 2.0 - 1.0
}

#[test]
fn valid_placement_stays_valid_under_mixed_steps() {
    let view = Rect::new(0.0, 0.0, 320.0, 240.0);
    let mut placement = PlacementController::new(Rect::new(0.0, 0.0, 80.0, 60.0), view);
    placement.translate(Vec2::new(120.0, 90.0));
    let mut progress = PinchProgress::new(0.0);
    let mut angle = 0.0;
    let mut distance = 100.0;

    for i in 0..500 {
        match i % 3 {
            0 => {
                placement.translate(Vec2::new(wobble(i) * 40.0, wobble(i + 7) * 40.0));
            }
            1 => {
                distance = (distance + wobble(i) * 20.0).max(1.0);
                placement.scale(&mut progress, distance, 100.0);
            }
            _ => {
                angle = (angle + wobble(i) * 30.0 + 360.0) % 360.0;
                placement.rotate(&mut progress, angle);
            }
        }
        assert!(
            inside(placement.mapped_bounds(), view),
            "step {i} left the viewport: {:?}",
            placement.mapped_bounds()
        );
    }
}

#[test]
fn overboard_translation_and_rotation_never_stick() {
    let view = Rect::new(0.0, 0.0, 200.0, 200.0);
    let mut placement = PlacementController::new(Rect::new(0.0, 0.0, 100.0, 100.0), view);
    placement.set_transform(Affine::translate((250.0, -40.0)));
    let mut progress = PinchProgress::new(0.0);

    for i in 1..=20 {
        let before = placement.transform();
        assert!(placement.translate(Vec2::new(3.0, 1.0)));
        assert_ne!(placement.transform(), before);

        let before = placement.transform();
        assert!(placement.rotate(&mut progress, f64::from(i) * 7.0));
        assert_ne!(placement.transform(), before);
    }
    assert!(placement.is_overboard());
}

#[test]
fn min_height_floor_holds_for_any_ratio() {
    let view = Rect::new(0.0, 0.0, 500.0, 500.0);
    let mut placement = PlacementController::new(Rect::new(0.0, 0.0, 100.0, 100.0), view);
    placement.translate(Vec2::new(200.0, 200.0));
    let mut progress = PinchProgress::new(0.0);

    for ratio in [0.9, 0.7, 0.5, 0.49, 0.3, 0.1, 0.01, 0.479] {
        placement.scale(&mut progress, ratio * 100.0, 100.0);
        assert!(placement.mapped_bounds().height() >= 48.0 - 1e-9);
    }
    assert!(placement.mapped_bounds().height() < 50.0);
}

#[test]
fn floor_uses_rotated_bounds() {
    let view = Rect::new(0.0, 0.0, 500.0, 500.0);
    let mut placement = PlacementController::new(Rect::new(0.0, 0.0, 200.0, 40.0), view);
    placement.translate(Vec2::new(150.0, 200.0));
    let mut progress = PinchProgress::new(0.0);

    // Standing the strip up makes its mapped height 200.
    assert!(placement.rotate(&mut progress, 90.0));
    assert!(placement.scale(&mut progress, 50.0, 100.0));
    assert!((placement.mapped_bounds().height() - 100.0).abs() < 1e-6);
}

#[test]
fn scale_with_unit_ratio_is_idempotent() {
    let view = Rect::new(0.0, 0.0, 500.0, 500.0);
    let mut placement = PlacementController::new(Rect::new(0.0, 0.0, 100.0, 100.0), view);
    placement.set_transform(Affine::translate((40.0, 70.0)) * Affine::rotate(0.3));
    let before = placement.transform();

    for d in [1.0, 42.0, 300.0] {
        let mut progress = PinchProgress::new(0.0);
        assert!(!placement.scale(&mut progress, d, d));
        assert_eq!(placement.transform(), before);
    }
}
