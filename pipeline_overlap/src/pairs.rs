// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap results returned by [`Matcher::find_overlaps`](crate::Matcher::find_overlaps),
//! and the sink trait used to observe overlapping geometry as it is found.

use alloc::collections::BTreeSet;
use alloc::collections::btree_set;
use alloc::string::String;

use crate::types::PipeBox;

/// Names of one overlapping `(old, new)` pair.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlapPair {
    /// Name of the box from the old inspection.
    pub old: String,
    /// Name of the box from the new inspection.
    pub new: String,
}

impl OverlapPair {
    /// Create a pair from old and new names.
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// The same pair with the roles exchanged.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            old: self.new,
            new: self.old,
        }
    }
}

/// Deduplicated set of overlapping name pairs, ordered by old name then new name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlapSet {
    pairs: BTreeSet<OverlapPair>,
}

impl OverlapSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pair for two overlapping boxes. Returns `false` if it was already present.
    pub fn insert(&mut self, old: &PipeBox, new: &PipeBox) -> bool {
        self.pairs.insert(OverlapPair::new(old.name(), new.name()))
    }

    /// Whether `(old, new)` is in the set.
    pub fn contains(&self, old: &str, new: &str) -> bool {
        self.pairs.contains(&OverlapPair::new(old, new))
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if no overlaps were found.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in order.
    pub fn iter(&self) -> btree_set::Iter<'_, OverlapPair> {
        self.pairs.iter()
    }

    /// The set obtained by exchanging old and new in every pair.
    #[must_use]
    pub fn swapped(self) -> Self {
        self.pairs.into_iter().map(OverlapPair::swapped).collect()
    }
}

impl FromIterator<OverlapPair> for OverlapSet {
    fn from_iter<I: IntoIterator<Item = OverlapPair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for OverlapSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(old, new)| OverlapPair::new(old, new))
            .collect()
    }
}

impl IntoIterator for OverlapSet {
    type Item = OverlapPair;
    type IntoIter = btree_set::IntoIter<OverlapPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a OverlapSet {
    type Item = &'a OverlapPair;
    type IntoIter = btree_set::Iter<'a, OverlapPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Receives the geometry of each overlapping pair as a matcher records it.
///
/// Sinks exist for rendering collaborators and have no influence on the returned
/// [`OverlapSet`]. A pair is delivered once, the first time its names enter the set.
///
/// Any `FnMut(&PipeBox, &PipeBox)` closure is a sink.
pub trait OverlapSink {
    /// Called with the old and new box of a newly recorded pair.
    fn overlap(&mut self, old: &PipeBox, new: &PipeBox);
}

impl<F: FnMut(&PipeBox, &PipeBox)> OverlapSink for F {
    fn overlap(&mut self, old: &PipeBox, new: &PipeBox) {
        self(old, new);
    }
}
