// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use pipeline_overlap::{
    BoxFactory, BoxParams, IdCounter, Indexed, IntervalIndex, Matcher, Naive, PipeBox, SweepLine,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// `count` boxes scattered along `pipe_length` meters, each up to `max_length` long.
fn gen_boxes(seed: u64, prefix: &str, count: usize, pipe_length: f64, max_length: f64) -> Vec<PipeBox> {
    let counter = IdCounter::new();
    let factory = BoxFactory::with_counter(&counter);
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|i| {
            let params = BoxParams::new(
                rng.next_f64() * pipe_length,
                0.05 + rng.next_f64() * max_length,
                rng.next_f64() * 359.0,
                1.0 + rng.next_f64() * 60.0,
            );
            factory
                .build(params, Some(&format!("{prefix}{i}")))
                .expect("generated geometry is valid")
        })
        .collect()
}

fn bench_comparable_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparable_sizes");
    for &n in &[250usize, 1_000, 4_000] {
        // Keep density constant: about two boxes per meter.
        let pipe_length = n as f64 / 2.0;
        let old = gen_boxes(0xCAFE_F00D_DEAD_BEEF, "old", n, pipe_length, 2.0);
        let new = gen_boxes(0xBADC_F00D_1234_5678, "new", n, pipe_length, 2.0);
        group.throughput(Throughput::Elements((2 * n) as u64));
        group.bench_function(format!("sweep_line_n{}", n), |b| {
            b.iter(|| black_box(SweepLine.find_overlaps(&old, &new).len()))
        });
        group.bench_function(format!("indexed_n{}", n), |b| {
            b.iter(|| black_box(Indexed.find_overlaps(&old, &new).len()))
        });
        if n <= 1_000 {
            group.bench_function(format!("naive_n{}", n), |b| {
                b.iter(|| black_box(Naive.find_overlaps(&old, &new).len()))
            });
        }
    }
    group.finish();
}

fn bench_skewed_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("skewed_sizes");
    let old = gen_boxes(0xC1A5_7E55_9999_ABCD, "old", 10_000, 5_000.0, 3.0);
    let new = gen_boxes(0xFACE_FEED_CAFE_BABE, "new", 10, 5_000.0, 20.0);
    group.throughput(Throughput::Elements((old.len() + new.len()) as u64));
    group.bench_function("sweep_line_10000x10", |b| {
        b.iter(|| black_box(SweepLine.find_overlaps(&old, &new).len()))
    });
    group.bench_function("indexed_10000x10", |b| {
        b.iter(|| black_box(Indexed.find_overlaps(&old, &new).len()))
    });
    group.bench_function("naive_10000x10", |b| {
        b.iter(|| black_box(Naive.find_overlaps(&old, &new).len()))
    });
    // Index built once; only the per-query cost is measured.
    let index = IntervalIndex::new(&old);
    group.bench_function("prebuilt_index_query_10", |b| {
        b.iter(|| black_box(index.find_overlaps(&new).len()))
    });
    group.bench_function("index_build_10000", |b| {
        b.iter(|| black_box(IntervalIndex::new(&old).len()))
    });
    group.finish();
}

fn bench_long_boxes(c: &mut Criterion) {
    let mut group = c.benchmark_group("long_boxes");
    // Long boxes keep many candidates alive in the sweep window and in both index ranges.
    let old = gen_boxes(0x0123_4567_89AB_CDEF, "old", 2_000, 1_000.0, 200.0);
    let new = gen_boxes(0x0FED_CBA9_8765_4321, "new", 2_000, 1_000.0, 5.0);
    group.bench_function("sweep_line", |b| {
        b.iter(|| black_box(SweepLine.find_overlaps(&old, &new).len()))
    });
    group.bench_function("indexed", |b| {
        b.iter(|| black_box(Indexed.find_overlaps(&old, &new).len()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_comparable_sizes,
    bench_skewed_sizes,
    bench_long_boxes
);
criterion_main!(benches);
