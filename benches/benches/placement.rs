// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Rect, Vec2};
use understory_placement::{DecisionRecorder, PinchProgress, PlacementController};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Uniform in `[-1, 1)`.
    fn next_signed(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX) * 2.0 - 1.0
    }
}

fn fresh() -> PlacementController {
    let mut placement = PlacementController::new(
        Rect::new(0.0, 0.0, 640.0, 480.0),
        Rect::new(0.0, 0.0, 1080.0, 1920.0),
    );
    placement.fit_content();
    let half = Affine::scale_about(0.5, placement.center());
    placement.set_transform(half * placement.transform());
    placement
}

fn bench_translate(c: &mut Criterion) {
    let mut rng = Lcg::new(7);
    let deltas: Vec<Vec2> = (0..4_096)
        .map(|_| Vec2::new(rng.next_signed() * 60.0, rng.next_signed() * 60.0))
        .collect();

    c.bench_function("placement/translate_4096", |b| {
        b.iter_batched(
            fresh,
            |mut placement| {
                for d in &deltas {
                    black_box(placement.translate(*d));
                }
                placement
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_pinch(c: &mut Criterion) {
    let mut rng = Lcg::new(11);
    let steps: Vec<(f64, f64)> = (0..4_096)
        .map(|_| {
            let distance = 100.0 + rng.next_signed() * 60.0;
            let angle = 180.0 + rng.next_signed() * 180.0;
            (distance, angle)
        })
        .collect();

    c.bench_function("placement/pinch_4096", |b| {
        b.iter_batched(
            fresh,
            |mut placement| {
                let mut progress = PinchProgress::new(180.0);
                for &(distance, angle) in &steps {
                    black_box(placement.scale(&mut progress, distance, 100.0));
                    black_box(placement.rotate(&mut progress, angle));
                }
                placement
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("placement/pinch_4096_traced", |b| {
        b.iter_batched(
            || (fresh(), DecisionRecorder::new()),
            |(mut placement, mut recorder)| {
                let mut progress = PinchProgress::new(180.0);
                for &(distance, angle) in &steps {
                    placement.scale_with_trace(&mut progress, distance, 100.0, &mut recorder);
                    placement.rotate_with_trace(&mut progress, angle, &mut recorder);
                }
                black_box(recorder.applied_count())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_translate, bench_pinch);
criterion_main!(benches);
