// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use surf_tags::{FlexibleArea, FlexibleAreaConfig, TagList};

fn sizes(n: usize) -> Vec<Size> {
    (0..n)
        .map(|i| Size::new(64.0 + (i % 5) as f64 * 16.0, 40.0))
        .collect()
}

fn bench_layouts(c: &mut Criterion) {
    let area = FlexibleArea::new(FlexibleAreaConfig::default(), TagList::default());
    let mut group = c.benchmark_group("tag_area/layout");
    for n in [11_usize, 512] {
        let sizes = sizes(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("wrapping", n), &sizes, |b, sizes| {
            b.iter(|| black_box(area.left_aligned_frames(sizes, 390.0)));
        });
        group.bench_with_input(BenchmarkId::new("rows", n), &sizes, |b, sizes| {
            b.iter(|| black_box(area.row_frames(sizes)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layouts);
criterion_main!(benches);
