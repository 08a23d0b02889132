// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use surf_loop_scroll::{
    Axis, LayoutKind, LoopIndex, LoopScrollConfig, LoopScrollEngine, LoopScrollHost,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// Measures every item as a chip whose width depends on its value.
struct Host;

impl LoopScrollHost<u32> for Host {
    type View = u32;

    fn measure_item(&mut self, _logical: usize, item: &u32) -> Option<f64> {
        Some(48.0 + f64::from(item % 7) * 8.0)
    }

    fn render_item(&mut self, _logical: usize, _padded: usize, item: &u32) -> u32 {
        *item
    }

    fn item_selected(&mut self, _logical: usize, _item: &u32) {}
}

fn per_viewport() -> LoopScrollConfig {
    LoopScrollConfig::new(LayoutKind::ItemsPerViewport(4.5), Axis::Horizontal)
}

fn bench_index_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("loop_scroll/to_logical");
    for len in [11_usize, 1_024] {
        let index = LoopIndex::new(len, 5).unwrap();
        group.throughput(Throughput::Elements(index.padded_len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &index, |b, index| {
            b.iter(|| {
                let mut sum = 0;
                for padded in 0..index.padded_len() {
                    sum += index.to_logical(black_box(padded));
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_scroll_notifications(c: &mut Criterion) {
    let items: Vec<u32> = (0..11).collect();
    let mut engine = LoopScrollEngine::new(items, per_viewport(), 390.0, &mut Host).unwrap();
    let content = engine.content_extent(&mut Host);
    let mut rng = Lcg(7);
    let offsets: Vec<f64> = (0..4_096)
        .map(|_| rng.next_f64() * (content + 200.0) - 100.0)
        .collect();

    let mut group = c.benchmark_group("loop_scroll/scroll_position_changed");
    group.throughput(Throughput::Elements(offsets.len() as u64));
    group.bench_function("random_offsets", |b| {
        b.iter(|| {
            let mut jumps = 0;
            for &offset in &offsets {
                let jump = engine.scroll_position_changed(black_box(offset), content, &mut Host);
                if jump.is_some() {
                    jumps += 1;
                }
            }
            black_box(jumps)
        });
    });
    group.finish();
}

fn bench_realize(c: &mut Criterion) {
    let mut group = c.benchmark_group("loop_scroll/realize");
    for len in [11_u32, 256] {
        let items: Vec<u32> = (0..len).collect();
        let mut engine = LoopScrollEngine::new(items, per_viewport(), 390.0, &mut Host).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| black_box(engine.realize(&mut Host).len()));
        });
    }
    group.finish();
}

fn bench_reload(c: &mut Criterion) {
    let mut group = c.benchmark_group("loop_scroll/reload");
    for len in [11_u32, 256] {
        let items: Vec<u32> = (0..len).collect();
        let engine =
            LoopScrollEngine::new(items.clone(), per_viewport(), 390.0, &mut Host).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter_batched(
                || (engine.clone(), items.clone()),
                |(mut engine, items)| black_box(engine.reload(items, &mut Host).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_index_mapping,
    bench_scroll_notifications,
    bench_realize,
    bench_reload
);
criterion_main!(benches);
