// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box geometry on the pipe surface and the three predicates every matcher uses.

use alloc::string::String;
use core::fmt;

use crate::circular::{self, FULL_TURN};
use crate::error::{InvalidGeometry, Result};
use crate::factory::{AnglePolicy, BoxFactory};

/// Identifier drawn from an [`IdCounter`](crate::IdCounter) when a box is built.
///
/// Ids order boxes by construction time within one counter.
/// They take no part in geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoxId(pub(crate) u64);

impl BoxId {
    /// Raw counter value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unvalidated geometry of a box, as read from an inspection record.
///
/// Turn it into a [`PipeBox`] with [`BoxFactory::build`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxParams {
    /// Longitudinal start in meters.
    pub left: f64,
    /// Longitudinal extent in meters.
    pub length: f64,
    /// Circumferential start in degrees.
    pub bottom_angle: f64,
    /// Circumferential extent in degrees.
    pub angular_width: f64,
}

impl BoxParams {
    /// Create box parameters from a start position and extents on both axes.
    pub const fn new(left: f64, length: f64, bottom_angle: f64, angular_width: f64) -> Self {
        Self {
            left,
            length,
            bottom_angle,
            angular_width,
        }
    }

    /// Check the parameters and bring the angles into canonical range according to `policy`.
    ///
    /// Returns `(right, bottom_angle, angular_width)` ready to store.
    pub(crate) fn validate(&self, policy: AnglePolicy) -> Result<(f64, f64, f64)> {
        if !self.left.is_finite() {
            return Err(InvalidGeometry::NonFiniteLeft(self.left).into());
        }
        // NaN fails `> 0.0`.
        if !(self.length > 0.0 && self.length.is_finite()) {
            return Err(InvalidGeometry::NonPositiveLength(self.length).into());
        }
        // A length below the spacing of floats at `left` rounds away, a huge one overflows.
        let right = self.left + self.length;
        if !(right.is_finite() && right > self.left) {
            return Err(InvalidGeometry::DegenerateExtent {
                left: self.left,
                length: self.length,
            }
            .into());
        }
        if !self.bottom_angle.is_finite() {
            return Err(InvalidGeometry::BottomAngleOutOfRange(self.bottom_angle).into());
        }
        if !(self.angular_width > 0.0 && self.angular_width.is_finite()) {
            return Err(InvalidGeometry::AngularWidthOutOfRange(self.angular_width).into());
        }

        let mut bottom = self.bottom_angle;
        if !(0.0..FULL_TURN).contains(&bottom) {
            match policy {
                AnglePolicy::Reject => {
                    return Err(InvalidGeometry::BottomAngleOutOfRange(bottom).into());
                }
                AnglePolicy::Normalize => {
                    bottom = circular::normalize_degrees(bottom);
                    log::warn!(
                        "bottom angle {} wrapped into [0, 360) as {}",
                        self.bottom_angle,
                        bottom
                    );
                }
            }
        }

        let mut width = self.angular_width;
        if width > FULL_TURN {
            match policy {
                AnglePolicy::Reject => {
                    return Err(InvalidGeometry::AngularWidthOutOfRange(width).into());
                }
                AnglePolicy::Normalize => {
                    width = FULL_TURN;
                    log::warn!(
                        "angular width {} exceeds a full turn, clamped to 360",
                        self.angular_width
                    );
                }
            }
        }

        Ok((right, bottom, width))
    }
}

/// A rectangular region on the pipe surface.
///
/// The longitudinal axis is linear and measured in meters.
/// The circumferential axis wraps with period 360 and is measured in degrees.
/// A box is immutable once built; all validation happened in [`BoxFactory::build`].
///
/// Two boxes overlap when both their longitudinal and their circumferential intervals
/// intersect with nonzero measure. Sharing only an edge is not overlap.
#[derive(Clone, Debug, PartialEq)]
pub struct PipeBox {
    id: BoxId,
    name: String,
    left: f64,
    right: f64,
    bottom_angle: f64,
    angular_width: f64,
    mid_angle: f64,
}

impl PipeBox {
    /// Build a named box with the process-wide counter and [`AnglePolicy::Reject`].
    ///
    /// An empty `name` is replaced by a generated one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`](crate::Error::InvalidGeometry) when a value is not
    /// finite, the length is not positive or vanishes next to `left`, or the angles fall
    /// outside their canonical ranges.
    pub fn new(
        name: &str,
        left: f64,
        length: f64,
        bottom_angle: f64,
        angular_width: f64,
    ) -> Result<Self> {
        BoxFactory::new().build(
            BoxParams::new(left, length, bottom_angle, angular_width),
            Some(name),
        )
    }

    /// Assemble a box from already validated parts.
    pub(crate) fn from_validated(
        id: BoxId,
        name: String,
        left: f64,
        right: f64,
        bottom_angle: f64,
        angular_width: f64,
    ) -> Self {
        let mid_angle = circular::normalize_degrees(bottom_angle + angular_width / 2.0);
        Self {
            id,
            name,
            left,
            right,
            bottom_angle,
            angular_width,
            mid_angle,
        }
    }

    /// Identifier assigned at construction.
    pub fn id(&self) -> BoxId {
        self.id
    }

    /// Name used in overlap pairs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Longitudinal start in meters.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Longitudinal end in meters.
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Longitudinal extent in meters.
    pub fn length(&self) -> f64 {
        self.right - self.left
    }

    /// Circumferential start in degrees, in `[0, 360)`.
    pub fn bottom_angle(&self) -> f64 {
        self.bottom_angle
    }

    /// Circumferential extent in degrees, in `(0, 360]`.
    pub fn angular_width(&self) -> f64 {
        self.angular_width
    }

    /// Half of the circumferential extent.
    pub fn half_width(&self) -> f64 {
        self.angular_width / 2.0
    }

    /// Angular midpoint of the circumferential extent, in `[0, 360)`.
    pub fn mid_angle(&self) -> f64 {
        self.mid_angle
    }

    /// Circumferential end, wrapped into `[0, 360)`.
    ///
    /// Equals [`bottom_angle`](Self::bottom_angle) for a box covering the full circumference.
    pub fn top_angle(&self) -> f64 {
        circular::normalize_degrees(self.bottom_angle + self.angular_width)
    }

    /// True if this box ends at or before `other` starts along the pipe.
    #[inline]
    pub fn is_left_of(&self, other: &Self) -> bool {
        self.right <= other.left
    }

    /// True if this box starts at or after `other` ends along the pipe.
    #[inline]
    pub fn is_right_of(&self, other: &Self) -> bool {
        self.left >= other.right
    }

    /// True if the circumferential extents share an arc of nonzero length.
    #[inline]
    pub fn circumferential_overlap(&self, other: &Self) -> bool {
        circular::arcs_overlap(
            self.mid_angle,
            self.half_width(),
            other.mid_angle,
            other.half_width(),
        )
    }

    /// True if the two boxes overlap on both axes.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_left_of(other) && !self.is_right_of(other) && self.circumferential_overlap(other)
    }
}

impl fmt::Display for PipeBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[box '{}' with left edge {}, right edge {}, bottom edge {}, midangle {}, half-width {}]",
            self.name,
            self.left,
            self.right,
            self.bottom_angle,
            self.mid_angle,
            self.half_width()
        )
    }
}
