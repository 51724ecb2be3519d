// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for box construction.
//!
//! All validation happens when a [`PipeBox`](crate::PipeBox) is built, so matchers are infallible.

/// Result alias used by fallible constructors in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced by this crate.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The supplied box geometry is not representable.
    #[error("invalid box geometry: {0}")]
    InvalidGeometry(#[from] InvalidGeometry),
}

/// Which part of a box's geometry was rejected, with the offending value.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidGeometry {
    /// The longitudinal start is NaN or infinite.
    #[error("left edge must be finite, got {0}")]
    NonFiniteLeft(f64),
    /// The longitudinal length is zero, negative, NaN or infinite.
    #[error("length must be positive and finite, got {0}")]
    NonPositiveLength(f64),
    /// `left + length` overflows or rounds back to `left`, leaving no extent along the pipe.
    #[error("left edge {left} plus length {length} does not give a finite right edge past it")]
    DegenerateExtent {
        /// Requested longitudinal start.
        left: f64,
        /// Requested longitudinal extent.
        length: f64,
    },
    /// The bottom angle lies outside `[0, 360)` degrees.
    #[error("bottom angle must lie in [0, 360) degrees, got {0}")]
    BottomAngleOutOfRange(f64),
    /// The angular width lies outside `(0, 360]` degrees.
    #[error("angular width must lie in (0, 360] degrees, got {0}")]
    AngularWidthOutOfRange(f64),
}
