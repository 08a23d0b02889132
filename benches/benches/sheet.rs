// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use surf_sheet::{
    DragDirection, SheetConfig, SheetController, SheetFrame, SheetGesture, SheetHost,
    SheetMetrics, SheetState,
};

struct Sink(f64);

impl SheetHost for Sink {
    fn render(&mut self, frame: SheetFrame) {
        self.0 += frame.extent;
    }
}

fn presented() -> SheetController {
    let mut sheet =
        SheetController::new(SheetConfig::default(), SheetMetrics::new(844.0, 44.0)).unwrap();
    let mut sink = Sink(0.0);
    sheet.present(0, &mut sink);
    sheet.tick(300, &mut sink);
    sheet
}

fn bench_next_state(c: &mut Criterion) {
    let extents = SheetConfig::default()
        .extents(SheetMetrics::new(844.0, 44.0))
        .unwrap();
    c.bench_function("sheet/next_state_sweep", |b| {
        b.iter(|| {
            let mut hits = 0_u32;
            for state in SheetState::ALL {
                for step in 0..900 {
                    let live = f64::from(step);
                    for direction in [DragDirection::Up, DragDirection::Down] {
                        if extents.next_state(state, black_box(live), direction) != state {
                            hits += 1;
                        }
                    }
                }
            }
            black_box(hits)
        });
    });
}

fn bench_drag_and_settle(c: &mut Criterion) {
    let sheet = presented();
    c.bench_function("sheet/drag_120_moves_then_settle", |b| {
        b.iter_batched(
            || sheet.clone(),
            |mut sheet| {
                let mut sink = Sink(0.0);
                let mut now = 1_000;
                sheet.handle_gesture(SheetGesture::Began, now, &mut sink);
                for step in 1..=120 {
                    now += 4;
                    let translation_y = -f64::from(step) * 2.0;
                    sheet.handle_gesture(SheetGesture::Changed { translation_y }, now, &mut sink);
                }
                sheet.handle_gesture(
                    SheetGesture::Ended {
                        translation_y: -240.0,
                        direction: DragDirection::Up,
                    },
                    now,
                    &mut sink,
                );
                while sheet.tick(now, &mut sink) {
                    now += 16;
                }
                black_box(sink.0)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_next_state, bench_drag_and_settle);
criterion_main!(benches);
