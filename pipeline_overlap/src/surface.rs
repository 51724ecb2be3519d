// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unrolled-surface geometry for rendering collaborators.
//!
//! The pipe surface is cut along the 0/360 seam and laid flat: x is the longitudinal
//! position in meters, y the angle in degrees in `[0, 360]`.
//! A box whose circumferential extent crosses the seam becomes two rectangles.
//! Nothing here draws; [`SurfacePlot`] only records what a renderer would need.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::circular::FULL_TURN;
use crate::pairs::OverlapSink;
use crate::types::PipeBox;

impl PipeBox {
    /// The box laid out on the unrolled surface, as one rectangle or two split at the seam.
    pub fn surface_patches(&self) -> impl Iterator<Item = Rect> {
        let (x0, x1) = (self.left(), self.right());
        let y0 = self.bottom_angle();
        let y1 = y0 + self.angular_width();
        let (main, wrapped) = if y1 > FULL_TURN {
            (
                Rect::new(x0, y0, x1, FULL_TURN),
                Some(Rect::new(x0, 0.0, x1, y1 - FULL_TURN)),
            )
        } else {
            (Rect::new(x0, y0, x1, y1), None)
        };
        core::iter::once(main).chain(wrapped)
    }
}

/// Geometry of one overlapping pair on the unrolled surface.
#[derive(Clone, Debug, PartialEq)]
pub struct PlottedOverlap {
    /// Name of the old box.
    pub old: String,
    /// Name of the new box.
    pub new: String,
    /// Patches of the old box.
    pub old_patches: Vec<Rect>,
    /// Patches of the new box.
    pub new_patches: Vec<Rect>,
}

/// An [`OverlapSink`] that records surface patches for every overlapping pair.
///
/// ```
/// use pipeline_overlap::{Matcher, PipeBox, SurfacePlot, SweepLine};
///
/// let old = [PipeBox::new("seam", 0.0, 5.0, 350.0, 20.0).unwrap()];
/// let new = [PipeBox::new("near", 1.0, 1.0, 5.0, 10.0).unwrap()];
///
/// let mut plot = SurfacePlot::new();
/// let pairs = SweepLine.find_overlaps_emitting(&old, &new, &mut plot);
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(plot.overlaps()[0].old_patches.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SurfacePlot {
    overlaps: Vec<PlottedOverlap>,
}

impl SurfacePlot {
    /// Create an empty plot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded pairs in detection order.
    pub fn overlaps(&self) -> &[PlottedOverlap] {
        &self.overlaps
    }

    /// Consume the plot, returning the recorded pairs.
    pub fn into_overlaps(self) -> Vec<PlottedOverlap> {
        self.overlaps
    }

    /// Smallest rectangle on the unrolled surface containing every recorded patch.
    pub fn bounds(&self) -> Option<Rect> {
        self.overlaps
            .iter()
            .flat_map(|o| o.old_patches.iter().chain(&o.new_patches))
            .copied()
            .reduce(|acc, r| acc.union(r))
    }
}

impl OverlapSink for SurfacePlot {
    fn overlap(&mut self, old: &PipeBox, new: &PipeBox) {
        self.overlaps.push(PlottedOverlap {
            old: old.name().into(),
            new: new.name().into(),
            old_patches: old.surface_patches().collect(),
            new_patches: new.surface_patches().collect(),
        });
    }
}
