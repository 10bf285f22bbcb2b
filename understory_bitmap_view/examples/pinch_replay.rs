// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a short touch + drag session against a headless bitmap view and
//! prints what a host would do after each event.
//!
//! Run:
//! - `cargo run -p understory_bitmap_view --example pinch_replay`

use kurbo::{Affine, Point, Rect, Vec2};
use understory_bitmap_view::{BitmapView, DragEvent, Effects, GestureSurface, PointerEvent};
use understory_gesture_state::touch::PointerId;
use understory_placement::DecisionRecorder;

fn report(label: &str, view: &BitmapView, fx: Effects) {
    let p = view.placement();
    let Rect { x0, y0, x1, y1 } = p.mapped_bounds();
    let (scale, rot) = (p.uniform_scale(), p.rotation_degrees());
    println!(
        "{label:<14} {fx:?} ({x0:.1}, {y0:.1})-({x1:.1}, {y1:.1}) scale={scale:.3} rot={rot:.1}°"
    );
}

fn main() {
    // A 1000×500 bitmap in a 700×1050 view, opened at 40%.
    let mut view = BitmapView::for_image(1000, 500, Rect::new(0.0, 0.0, 700.0, 1050.0));
    view.placement_mut().set_transform(Affine::scale(0.4));
    report("open", &view, Effects::REDRAW);

    let a = PointerId(0);
    let b = PointerId(1);

    // Touch the bitmap and move far enough to hand off to a drag session.
    let touch = Point::new(100.0, 100.0);
    let moved = Point::new(130.0, 100.0);
    let fx = view.handle_gesture(PointerEvent::Down {
        pointer: a,
        position: touch,
    });
    report("down", &view, fx);
    let fx = view.handle_gesture(PointerEvent::Move {
        pointer: a,
        position: moved,
    });
    report("move", &view, fx);
    view.handle_gesture(PointerEvent::Up {
        pointer: a,
        position: moved,
    });

    if fx.contains(Effects::BEGIN_DRAG) {
        view.handle_drag(DragEvent::Started(moved));
        view.handle_drag(DragEvent::Entered(moved));
        for step in 1..=4 {
            let step = f64::from(step);
            let fx = view.handle_drag(DragEvent::Location(moved + Vec2::new(40.0, 90.0) * step));
            report("drag location", &view, fx);
        }
        let drop = Point::new(300.0, 480.0);
        let fx = view.handle_drag(DragEvent::Dropped(drop));
        report("drop", &view, fx);
        view.handle_drag(DragEvent::Ended(drop));
    }

    // Pinch out while twisting.
    let mut recorder = DecisionRecorder::new();
    let c = view.placement().center();
    view.handle_gesture(PointerEvent::Down {
        pointer: a,
        position: c - Vec2::new(60.0, 0.0),
    });
    view.handle_gesture(PointerEvent::Down {
        pointer: b,
        position: c + Vec2::new(60.0, 0.0),
    });
    for step in 1..=6 {
        let t = f64::from(step);
        let offset = Vec2::from_angle((10.0 * t).to_radians()) * (60.0 + 12.0 * t);
        view.handle_gesture(PointerEvent::Move {
            pointer: a,
            position: c - offset,
        });
        let fx = view.handle_gesture_with_trace(
            PointerEvent::Move {
                pointer: b,
                position: c + offset,
            },
            &mut recorder,
        );
        report("pinch", &view, fx);
    }
    view.handle_gesture(PointerEvent::Up {
        pointer: b,
        position: c,
    });
    view.handle_gesture(PointerEvent::Up {
        pointer: a,
        position: c,
    });

    for d in recorder.decisions() {
        println!("{:?} -> {:?}", d.op, d.verdict);
    }
}
