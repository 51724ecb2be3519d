// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skewed inspections.
//!
//! A long history of old findings is indexed once and then queried by a few small
//! batches of new findings.
//!
//! Run:
//! - `cargo run -p pipeline_overlap_demos --example skewed_inspections`

use pipeline_overlap::{
    BoxFactory, BoxParams, IdCounter, IntervalIndex, Matcher, Naive, Strategy,
};

fn main() {
    // A fixed counter keeps generated names identical from run to run.
    let counter = IdCounter::starting_at(1);
    let factory = BoxFactory::with_counter(&counter);

    // 5,000 old findings, one every 0.8 m, rotating around the pipe.
    let old = factory
        .build_all((0..5_000).map(|i| {
            let i = f64::from(i);
            (
                BoxParams::new(i * 0.8, 1.2, (i * 47.0) % 360.0, 35.0),
                None,
            )
        }))
        .unwrap();

    let index = IntervalIndex::new(&old);
    println!("indexed {} old boxes", index.len());

    for batch in 0..3 {
        let start = 1_000.0 * f64::from(batch);
        let new = factory
            .build_all((0..8).map(|k| {
                let k = f64::from(k);
                (
                    BoxParams::new(start + k * 37.0, 3.0, (k * 90.0) % 360.0, 50.0),
                    None,
                )
            }))
            .unwrap();

        assert_eq!(
            Strategy::for_sizes(old.len(), new.len()),
            Strategy::Indexed
        );
        let pairs = index.find_overlaps(&new);
        assert_eq!(pairs, Naive.find_overlaps(&old, &new));
        println!("batch {batch}: {} overlapping pairs", pairs.len());
        for p in pairs.iter().take(4) {
            println!("  {} overlaps {}", p.old, p.new);
        }
    }
}
