// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface plot data.
//!
//! Collect the unrolled-surface rectangles of every overlapping pair, the way a renderer
//! would, and check that emitting them does not change the result.
//!
//! Run:
//! - `cargo run -p pipeline_overlap_demos --example surface_plot`

use kurbo::Rect;
use pipeline_overlap::{
    AnglePolicy, BoxFactory, BoxParams, IdCounter, Matcher, SurfacePlot, SweepLine,
};

fn main() {
    let counter = IdCounter::new();
    // Field data sometimes reports angles as negative offsets from the top.
    let factory = BoxFactory::with_counter(&counter).with_angle_policy(AnglePolicy::Normalize);

    let old = factory
        .build_all([
            (BoxParams::new(0.0, 6.0, -20.0, 40.0), Some("dent")),
            (BoxParams::new(8.0, 2.0, 90.0, 30.0), Some("gouge")),
        ])
        .unwrap();
    let new = factory
        .build_all([
            (BoxParams::new(4.0, 5.0, 350.0, 30.0), Some("dent-2")),
            (BoxParams::new(9.0, 1.0, 100.0, 5.0), Some("gouge-2")),
            (BoxParams::new(20.0, 1.0, 0.0, 360.0), Some("sleeve")),
        ])
        .unwrap();

    let mut plot = SurfacePlot::new();
    let pairs = SweepLine.find_overlaps_emitting(&old, &new, &mut plot);
    assert_eq!(pairs, SweepLine.find_overlaps(&old, &new));

    for o in plot.overlaps() {
        println!("{} x {}", o.old, o.new);
        for r in o.old_patches.iter().chain(&o.new_patches) {
            println!("  patch {r:?}");
        }
    }
    let bounds = plot.bounds().unwrap_or(Rect::ZERO);
    println!("plot bounds: {bounds:?}");
}
