// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Vec2};
use understory_bitmap_view::{BitmapView, DragEvent, GestureSurface, PointerEvent};
use understory_gesture_state::touch::PointerId;

const F0: PointerId = PointerId(0);
const F1: PointerId = PointerId(1);

fn view() -> BitmapView {
    let mut view = BitmapView::for_image(1024, 768, Rect::new(0.0, 0.0, 1080.0, 1920.0));
    view.placement_mut().fit_content();
    view
}

/// A pinch that spreads and twists the fingers around the screen center.
fn pinch_stream(moves: usize) -> Vec<PointerEvent> {
    let center = Point::new(540.0, 960.0);
    let mut events = vec![
        PointerEvent::Down {
            pointer: F0,
            position: center - Vec2::new(100.0, 0.0),
        },
        PointerEvent::Down {
            pointer: F1,
            position: center + Vec2::new(100.0, 0.0),
        },
    ];
    for i in 0..moves {
        let t = i as f64 / moves as f64;
        let radius = 100.0 + 60.0 * (t * core::f64::consts::TAU).sin();
        let theta = t * core::f64::consts::PI;
        let offset = Vec2::from_angle(theta) * radius;
        events.push(PointerEvent::Move {
            pointer: F0,
            position: center - offset,
        });
        events.push(PointerEvent::Move {
            pointer: F1,
            position: center + offset,
        });
    }
    events.push(PointerEvent::Up {
        pointer: F1,
        position: center,
    });
    events.push(PointerEvent::Up {
        pointer: F0,
        position: center,
    });
    events
}

fn drag_stream(moves: usize) -> Vec<DragEvent> {
    let center = Point::new(540.0, 960.0);
    let mut events = vec![DragEvent::Started(Point::ZERO), DragEvent::Entered(center)];
    for i in 0..moves {
        let t = i as f64 / moves as f64 * core::f64::consts::TAU;
        let to = center + Vec2::new(400.0 * t.cos(), 700.0 * t.sin());
        events.push(DragEvent::Location(to));
    }
    events.push(DragEvent::Dropped(center));
    events.push(DragEvent::Ended(center));
    events
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitmap_view/replay");

    for moves in [64_usize, 1_024] {
        let pinch = pinch_stream(moves);
        group.throughput(Throughput::Elements(pinch.len() as u64));
        group.bench_with_input(BenchmarkId::new("pinch", moves), &pinch, |b, events| {
            b.iter_batched(
                view,
                |mut view| {
                    for e in events {
                        black_box(view.handle_gesture(*e));
                    }
                    view.current_transform()
                },
                BatchSize::SmallInput,
            );
        });

        let drag = drag_stream(moves);
        group.throughput(Throughput::Elements(drag.len() as u64));
        group.bench_with_input(BenchmarkId::new("drag", moves), &drag, |b, events| {
            b.iter_batched(
                view,
                |mut view| {
                    for e in events {
                        black_box(view.handle_drag(*e));
                    }
                    view.current_transform()
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_replay);
criterion_main!(benches);
