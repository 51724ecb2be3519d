// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap algorithms.
//!
//! - `naive`: every old box against every new box, O(n·m). Used as the oracle in tests.
//! - `sweep`: sort both collections by left edge and sweep the old boxes while a window of
//!   longitudinally overlapping new boxes slides along. O(n log n + m log m).
//! - `indexed`: sort the old boxes by left edge and by right edge, then binary-search both
//!   orders for each new box. O(n log n) to build, O(log n + candidates) per new box.
//!
//! Window note
//! -----------
//! Both fast matchers narrow candidates on the longitudinal axis only, then apply the
//! circumferential test. Boxes that merely touch along the pipe are never candidates,
//! so touching and overlapping agree across all three matchers.

pub mod indexed;
pub mod naive;
pub mod sweep;

pub use indexed::{Indexed, IntervalIndex};
pub use naive::Naive;
pub use sweep::SweepLine;
