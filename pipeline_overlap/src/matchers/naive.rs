// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brute-force matcher. Quadratic; meant as a reference for the faster ones.

use crate::matcher::Matcher;
use crate::types::PipeBox;

/// Compares every old box with every new box.
#[derive(Copy, Clone, Debug, Default)]
pub struct Naive;

impl Matcher for Naive {
    fn for_each_overlap(
        &self,
        old: &[PipeBox],
        new: &[PipeBox],
        visit: &mut dyn FnMut(&PipeBox, &PipeBox),
    ) {
        for o in old {
            for n in new {
                if o.overlaps(n) {
                    visit(o, n);
                }
            }
        }
    }
}
