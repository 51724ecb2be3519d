// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dual sorted index over the old boxes.
//!
//! The old collection is sorted twice, once by left edge and once by right edge.
//! For a query box `q`:
//!
//! - the old boxes that are not right of `q` form a prefix of the left-edge order
//!   (`left < q.right`), found by binary search;
//! - the old boxes that are not left of `q` form a suffix of the right-edge order
//!   (`right > q.left`), found by binary search.
//!
//! Longitudinal candidates are the boxes in both ranges. Each box stores its rank in the
//! other order, so the intersection is computed by scanning whichever range is shorter.
//! Long boxes appear in many ranges; the cost per query is `O(log n)` plus the shorter range.

use alloc::vec;
use alloc::vec::Vec;

use crate::matcher::Matcher;
use crate::pairs::OverlapSet;
use crate::types::PipeBox;

/// Builds an [`IntervalIndex`] over the old boxes and queries it once per new box.
///
/// Best when the old collection is much larger than the new one. To amortize the index
/// over several new collections, build an [`IntervalIndex`] directly.
#[derive(Copy, Clone, Debug, Default)]
pub struct Indexed;

impl Matcher for Indexed {
    fn for_each_overlap(
        &self,
        old: &[PipeBox],
        new: &[PipeBox],
        visit: &mut dyn FnMut(&PipeBox, &PipeBox),
    ) {
        if old.is_empty() || new.is_empty() {
            return;
        }
        IntervalIndex::new(old).for_each_overlap(new, visit);
    }
}

/// Longitudinal index over a borrowed collection of boxes.
#[derive(Clone, Debug)]
pub struct IntervalIndex<'a> {
    boxes: &'a [PipeBox],
    /// Positions into `boxes`, ascending by left edge.
    by_left: Vec<usize>,
    left_keys: Vec<f64>,
    /// Positions into `boxes`, ascending by right edge.
    by_right: Vec<usize>,
    right_keys: Vec<f64>,
    /// `left_rank[i]` is the position of `boxes[i]` in `by_left`.
    left_rank: Vec<usize>,
    /// `right_rank[i]` is the position of `boxes[i]` in `by_right`.
    right_rank: Vec<usize>,
}

fn sorted_order(keys: &[f64]) -> (Vec<usize>, Vec<f64>, Vec<usize>) {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    // Stable, so equal keys keep input order.
    order.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));
    let sorted_keys = order.iter().map(|&i| keys[i]).collect();
    let mut rank = vec![0; keys.len()];
    for (pos, &i) in order.iter().enumerate() {
        rank[i] = pos;
    }
    (order, sorted_keys, rank)
}

impl<'a> IntervalIndex<'a> {
    /// Index `boxes` by both longitudinal edges. `O(n log n)`.
    pub fn new(boxes: &'a [PipeBox]) -> Self {
        let lefts: Vec<f64> = boxes.iter().map(PipeBox::left).collect();
        let rights: Vec<f64> = boxes.iter().map(PipeBox::right).collect();
        let (by_left, left_keys, left_rank) = sorted_order(&lefts);
        let (by_right, right_keys, right_rank) = sorted_order(&rights);
        log::trace!("interval index built over {} boxes", boxes.len());
        Self {
            boxes,
            by_left,
            left_keys,
            by_right,
            right_keys,
            left_rank,
            right_rank,
        }
    }

    /// Number of indexed boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// True if no boxes are indexed.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The indexed boxes, in input order.
    pub fn boxes(&self) -> &'a [PipeBox] {
        self.boxes
    }

    /// `(il, ir)`: `by_left[..il]` are not right of `query`, `by_right[ir..]` are not left of it.
    fn bounds(&self, query: &PipeBox) -> (usize, usize) {
        let il = self.left_keys.partition_point(|&l| l < query.right());
        let ir = self.right_keys.partition_point(|&r| r <= query.left());
        (il, ir)
    }

    /// Indexed boxes whose longitudinal interval intersects `query`'s, in index order.
    pub fn candidates(&self, query: &PipeBox) -> impl Iterator<Item = &'a PipeBox> + '_ {
        let (il, ir) = self.bounds(query);
        let n = self.boxes.len();
        // Scan the shorter range and test membership in the other through its rank.
        let (range, rank, lo, hi) = if il <= n - ir {
            (&self.by_left[..il], &self.right_rank, ir, n)
        } else {
            (&self.by_right[ir..], &self.left_rank, 0, il)
        };
        let boxes = self.boxes;
        range
            .iter()
            .filter(move |&&i| (lo..hi).contains(&rank[i]))
            .map(move |&i| &boxes[i])
    }

    /// Indexed boxes overlapping `query` on both axes.
    pub fn overlapping<'q>(
        &'q self,
        query: &'q PipeBox,
    ) -> impl Iterator<Item = &'a PipeBox> + 'q {
        self.candidates(query)
            .filter(move |c| c.circumferential_overlap(query))
    }

    /// Call `visit(indexed, new)` for every overlapping combination.
    pub fn for_each_overlap(&self, new: &[PipeBox], visit: &mut dyn FnMut(&PipeBox, &PipeBox)) {
        for n in new {
            for o in self.overlapping(n) {
                visit(o, n);
            }
        }
    }

    /// Names of overlapping `(indexed, new)` pairs.
    pub fn find_overlaps(&self, new: &[PipeBox]) -> OverlapSet {
        let mut set = OverlapSet::new();
        self.for_each_overlap(new, &mut |o, n| {
            let _ = set.insert(o, n);
        });
        set
    }
}
