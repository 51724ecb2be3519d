// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Matcher`] trait shared by all overlap algorithms, and [`Strategy`] for picking one.

use crate::matchers::{Indexed, Naive, SweepLine};
use crate::pairs::{OverlapSet, OverlapSink};
use crate::types::PipeBox;

/// An algorithm enumerating overlapping `(old, new)` box pairs.
///
/// Implementations only differ in how they find candidates; for the same inputs every
/// matcher reports the same pairs.
pub trait Matcher {
    /// Call `visit` with each `(old, new)` combination whose boxes overlap.
    ///
    /// Each combination is visited once. Visiting order is unspecified.
    fn for_each_overlap(
        &self,
        old: &[PipeBox],
        new: &[PipeBox],
        visit: &mut dyn FnMut(&PipeBox, &PipeBox),
    );

    /// Collect the names of all overlapping `(old, new)` pairs.
    fn find_overlaps(&self, old: &[PipeBox], new: &[PipeBox]) -> OverlapSet {
        let mut set = OverlapSet::new();
        self.for_each_overlap(old, new, &mut |o, n| {
            let _ = set.insert(o, n);
        });
        log::debug!(
            "{} old x {} new boxes: {} overlapping pairs",
            old.len(),
            new.len(),
            set.len()
        );
        set
    }

    /// Like [`find_overlaps`](Self::find_overlaps), also handing each new pair's geometry to `sink`.
    fn find_overlaps_emitting(
        &self,
        old: &[PipeBox],
        new: &[PipeBox],
        sink: &mut dyn OverlapSink,
    ) -> OverlapSet {
        let mut set = OverlapSet::new();
        self.for_each_overlap(old, new, &mut |o, n| {
            if set.insert(o, n) {
                sink.overlap(o, n);
            }
        });
        log::debug!(
            "{} old x {} new boxes: {} overlapping pairs emitted",
            old.len(),
            new.len(),
            set.len()
        );
        set
    }
}

/// Names one of the matchers in [`matchers`](crate::matchers).
///
/// `Strategy` is itself a [`Matcher`] that dispatches to the named algorithm.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Compare every pair. Reference oracle.
    Naive,
    /// Sort both collections and sweep along the pipe.
    #[default]
    SweepLine,
    /// Index the old collection by both edges and binary-search it per new box.
    Indexed,
}

impl Strategy {
    /// Minimum ratio of old to new boxes at which [`Strategy::for_sizes`] prefers [`Strategy::Indexed`].
    pub const SKEW_RATIO: usize = 16;

    /// All strategies, oracle first.
    pub const ALL: [Self; 3] = [Self::Naive, Self::SweepLine, Self::Indexed];

    /// Pick a strategy for collections of the given sizes.
    ///
    /// The sweep pays for sorting both sides. When the old side dwarfs the new one it is
    /// cheaper to sort only the old side and binary-search it once per new box.
    pub fn for_sizes(old_len: usize, new_len: usize) -> Self {
        if new_len.saturating_mul(Self::SKEW_RATIO) <= old_len {
            Self::Indexed
        } else {
            Self::SweepLine
        }
    }
}

impl Matcher for Strategy {
    fn for_each_overlap(
        &self,
        old: &[PipeBox],
        new: &[PipeBox],
        visit: &mut dyn FnMut(&PipeBox, &PipeBox),
    ) {
        match self {
            Self::Naive => Naive.for_each_overlap(old, new, visit),
            Self::SweepLine => SweepLine.for_each_overlap(old, new, visit),
            Self::Indexed => Indexed.for_each_overlap(old, new, visit),
        }
    }
}

/// Find overlapping pairs with the strategy [`Strategy::for_sizes`] picks for these inputs.
pub fn find_overlaps(old: &[PipeBox], new: &[PipeBox]) -> OverlapSet {
    Strategy::for_sizes(old.len(), new.len()).find_overlaps(old, new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn b(name: &str, left: f64, length: f64, bottom: f64, width: f64) -> PipeBox {
        PipeBox::new(name, left, length, bottom, width).unwrap()
    }

    #[test]
    fn skewed_sizes_pick_the_index() {
        assert_eq!(Strategy::for_sizes(10_000, 10), Strategy::Indexed);
        assert_eq!(Strategy::for_sizes(160, 10), Strategy::Indexed);
        assert_eq!(Strategy::for_sizes(159, 10), Strategy::SweepLine);
        assert_eq!(Strategy::for_sizes(100, 100), Strategy::SweepLine);
        assert_eq!(Strategy::for_sizes(10, 10_000), Strategy::SweepLine);
    }

    #[test]
    fn emission_does_not_change_the_result() {
        let old = vec![b("o1", 0.0, 10.0, 0.0, 90.0), b("o2", 5.0, 10.0, 180.0, 90.0)];
        let new = vec![b("n1", 2.0, 10.0, 45.0, 90.0), b("n2", 8.0, 1.0, 200.0, 10.0)];
        for strategy in Strategy::ALL {
            let mut seen: Vec<(alloc::string::String, alloc::string::String)> = Vec::new();
            let mut sink = |o: &PipeBox, n: &PipeBox| seen.push((o.name().into(), n.name().into()));
            let emitted = strategy.find_overlaps_emitting(&old, &new, &mut sink);
            assert_eq!(emitted, strategy.find_overlaps(&old, &new), "{strategy:?}");
            assert_eq!(seen.len(), emitted.len(), "{strategy:?}");
        }
    }

    #[test]
    fn duplicate_names_are_reported_once() {
        let old = vec![b("dup", 0.0, 10.0, 0.0, 90.0), b("dup", 1.0, 10.0, 0.0, 90.0)];
        let new = vec![b("n", 2.0, 10.0, 10.0, 20.0)];
        for strategy in Strategy::ALL {
            let mut count = 0;
            let set = strategy.find_overlaps_emitting(&old, &new, &mut |_: &PipeBox, _: &PipeBox| {
                count += 1;
            });
            assert_eq!(set.len(), 1, "{strategy:?}");
            assert_eq!(count, 1, "{strategy:?}");
        }
    }

    #[test]
    fn convenience_entry_point_matches_oracle() {
        let old: Vec<_> = (0..40)
            .map(|i| b("", f64::from(i), 1.5, f64::from(i * 37 % 360), 40.0))
            .collect();
        let new = vec![b("n", 10.2, 3.0, 100.0, 120.0)];
        assert_eq!(find_overlaps(&old, &new), Naive.find_overlaps(&old, &new));
    }
}
