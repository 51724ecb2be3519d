// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference scenario.
//!
//! Six boxes from two inspections, matched with every strategy.
//!
//! Run:
//! - `cargo run -p pipeline_overlap_demos --example reference_scenario`

use pipeline_overlap::{Matcher, PipeBox, Strategy};

fn main() {
    let re1 = PipeBox::new("re1", 0.0, 25.0, 5.0, 25.0).unwrap();
    let re2 = PipeBox::new("re2", 5.0, 20.0, 0.0, 10.0).unwrap();
    let re3 = PipeBox::new("re3", 10.0, 10.0, 30.0, 10.0).unwrap();
    let re4 = PipeBox::new("re4", 15.0, 9.0, 40.0, 20.0).unwrap();
    let re5 = PipeBox::new("re5", 20.0, 10.0, 340.0, 30.0).unwrap();
    let re6 = PipeBox::new("re6", 25.0, 9.0, 0.0, 10.0).unwrap();

    let old = [re5, re3, re1];
    let new = [re4, re6, re2];
    for b in old.iter().chain(&new) {
        println!("{b}");
    }

    for strategy in Strategy::ALL {
        let pairs = strategy.find_overlaps(&old, &new);
        let listed: Vec<_> = pairs
            .iter()
            .map(|p| format!("({}, {})", p.old, p.new))
            .collect();
        println!("{strategy:?}: {}", listed.join(" "));
        assert_eq!(pairs.len(), 3);
        assert!(pairs.contains("re1", "re2"));
        assert!(pairs.contains("re5", "re2"));
        assert!(pairs.contains("re5", "re6"));
    }

    // Touching is not overlap.
    assert!(!old[2].overlaps(&new[1]), "re1 ends where re6 starts");
}
