// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pipeline Overlap: find overlapping inspection boxes on a pipe surface.
//!
//! Two inspections of the same pipeline each mark rectangular regions ("boxes") on its surface.
//! A box spans an interval along the pipe, in meters, and an arc around it, in degrees.
//! The circumferential axis wraps with period 360, so an arc may cross the 0/360 seam.
//! This crate reports which boxes of the old inspection overlap which boxes of the new one.
//!
//! - Build validated, immutable [`PipeBox`]es with a [`BoxFactory`] (or [`PipeBox::new`]).
//! - Pick a [`Matcher`]: [`SweepLine`], [`Indexed`], or the quadratic [`Naive`] oracle.
//! - Receive an [`OverlapSet`] of `(old, new)` name pairs.
//!
//! Two boxes overlap when they share a region of nonzero area. Boxes that only touch along an
//! edge, on either axis, do not overlap. All matchers report identical sets for identical inputs.
//!
//! # Example
//!
//! ```rust
//! use pipeline_overlap::{Matcher, PipeBox, SweepLine};
//!
//! let old = [
//!     PipeBox::new("re1", 0.0, 25.0, 5.0, 25.0).unwrap(),
//!     PipeBox::new("re5", 20.0, 10.0, 340.0, 30.0).unwrap(),
//! ];
//! let new = [
//!     PipeBox::new("re2", 5.0, 20.0, 0.0, 10.0).unwrap(),
//!     PipeBox::new("re6", 25.0, 9.0, 0.0, 10.0).unwrap(),
//! ];
//!
//! let pairs = SweepLine.find_overlaps(&old, &new);
//! assert!(pairs.contains("re1", "re2"));
//! assert!(pairs.contains("re5", "re2"));
//! assert!(pairs.contains("re5", "re6"));
//! assert_eq!(pairs.len(), 3);
//! ```
//!
//! ## Choosing a matcher
//!
//! - [`SweepLine`] (default [`Strategy`]): sorts both collections, `O(n log n + m log m)`.
//!   Good when boxes are short relative to the pipe and both sides are of similar size.
//! - [`Indexed`]: sorts only the old collection, twice, then binary-searches it per new box.
//!   Good when the old collection is much larger than the new one. Build an
//!   [`IntervalIndex`] yourself to reuse it across several new collections.
//! - [`Naive`]: compares every pair. Use it to check the others.
//!
//! [`find_overlaps`] picks between the first two with [`Strategy::for_sizes`].
//!
//! ## Angles out of range
//!
//! By default, construction rejects a bottom angle outside `[0, 360)` or a width outside
//! `(0, 360]`. [`AnglePolicy::Normalize`] wraps and clamps instead, logging a warning.
//!
//! ## Rendering
//!
//! Matchers accept an [`OverlapSink`] that sees both boxes of every pair as it is recorded.
//! [`SurfacePlot`] turns them into [`kurbo::Rect`]s on the unrolled pipe surface.
//!
//! ### Float semantics
//!
//! Geometry is validated to be finite at construction, so comparisons never meet a NaN.
//! Sorting uses [`f64::total_cmp`] and is stable, which keeps runs reproducible.

#![no_std]

extern crate alloc;

pub mod circular;
pub mod error;
pub mod factory;
pub mod matcher;
pub mod matchers;
pub mod pairs;
pub mod surface;
pub mod types;

pub use error::{Error, InvalidGeometry, Result};
pub use factory::{AnglePolicy, BoxFactory, IdCounter};
pub use matcher::{Matcher, Strategy, find_overlaps};
pub use matchers::{Indexed, IntervalIndex, Naive, SweepLine};
pub use pairs::{OverlapPair, OverlapSet, OverlapSink};
pub use surface::{PlottedOverlap, SurfacePlot};
pub use types::{BoxId, BoxParams, PipeBox};
