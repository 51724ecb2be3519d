// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arithmetic on the circumferential axis, a circle of period 360 degrees.
//!
//! Angles are plain `f64` degrees. Arcs are described by their mid-angle and half-width,
//! which makes the overlap test independent of where the 0/360 seam falls.

/// Length of the circumferential period in degrees.
pub const FULL_TURN: f64 = 360.0;

const HALF_TURN: f64 = 180.0;

/// Wrap an angle into `[0, 360)` using floored modulo semantics.
///
/// Negative inputs wrap from the top, so `-10` becomes `350`.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let r = angle % FULL_TURN;
    let r = if r < 0.0 { r + FULL_TURN } else { r };
    // `r + 360` rounds up to exactly 360 for tiny negative remainders.
    if r >= FULL_TURN { 0.0 } else { r }
}

/// Shortest-arc distance between two angles, always in `[0, 180]`.
///
/// Equal to `|((a - b + 180) mod 360) - 180|`, computed so that swapping the arguments
/// gives a bit-identical result.
#[inline]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let (a, b) = (normalize_degrees(a), normalize_degrees(b));
    let d = if a >= b { a - b } else { b - a };
    if d > HALF_TURN { FULL_TURN - d } else { d }
}

/// Whether two arcs share a stretch of nonzero length.
///
/// Arcs that only touch at an endpoint do not overlap.
/// An arc with a half-width of 180 covers the whole circle and overlaps every other arc.
#[inline]
pub fn arcs_overlap(mid_a: f64, half_a: f64, mid_b: f64, half_b: f64) -> bool {
    angular_distance(mid_a, mid_b) < half_a + half_b
}
