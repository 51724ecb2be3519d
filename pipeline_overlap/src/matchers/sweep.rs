// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sweep-line matcher.
//!
//! Old boxes are visited in ascending order of their left edge. New boxes wait on a stack,
//! also ordered by left edge, and move into a FIFO window once the sweep reaches them.
//! A new box leaves the window for good as soon as it lies left of the current old box,
//! because every later old box starts at or after the current one.
//!
//! Each new box is pushed and popped at most once, so after sorting the sweep is linear
//! in `n + m` plus the total window size seen by each old box.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::matcher::Matcher;
use crate::types::PipeBox;

/// Sorts both collections by left edge and sweeps along the pipe.
///
/// Best when boxes are short compared to the pipe and both collections have comparable size.
#[derive(Copy, Clone, Debug, Default)]
pub struct SweepLine;

fn by_left(a: &&PipeBox, b: &&PipeBox) -> core::cmp::Ordering {
    a.left().total_cmp(&b.left())
}

impl Matcher for SweepLine {
    fn for_each_overlap(
        &self,
        old: &[PipeBox],
        new: &[PipeBox],
        visit: &mut dyn FnMut(&PipeBox, &PipeBox),
    ) {
        if old.is_empty() || new.is_empty() {
            return;
        }

        let mut sweep: Vec<&PipeBox> = old.iter().collect();
        sweep.sort_by(by_left);

        // Descending, so `pop` yields the smallest remaining left edge.
        let mut pending: Vec<&PipeBox> = new.iter().collect();
        pending.sort_by(|a, b| by_left(b, a));

        let mut window: VecDeque<&PipeBox> = VecDeque::new();

        for o in sweep {
            while let Some(&next) = pending.last() {
                if next.is_right_of(o) {
                    // Everything still pending starts at or after `next`.
                    break;
                }
                let _ = pending.pop();
                if !next.is_left_of(o) {
                    window.push_back(next);
                }
            }

            // Eviction has to scan the whole window: a long box at the front can keep shorter,
            // already passed boxes behind it. A box admitted for a longer predecessor can also
            // lie right of a shorter `o`.
            window.retain(|c| {
                if c.is_left_of(o) {
                    return false;
                }
                if !c.is_right_of(o) && o.circumferential_overlap(c) {
                    visit(o, *c);
                }
                true
            });
        }
    }
}
