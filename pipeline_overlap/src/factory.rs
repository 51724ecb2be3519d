// Copyright 2025 the Pipeline Overlap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box construction: id counters, angle policy, and the [`BoxFactory`] that ties them together.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;
use crate::types::{BoxId, BoxParams, PipeBox};

static PROCESS_COUNTER: IdCounter = IdCounter::new();

/// Monotonic source of [`BoxId`]s.
///
/// Increments are atomic, so one counter can be shared by threads building boxes concurrently.
/// Counters never reset. Use a fresh counter with [`IdCounter::starting_at`] when ids and
/// generated names must be reproducible across runs.
#[derive(Debug)]
pub struct IdCounter {
    next: AtomicU64,
}

impl IdCounter {
    /// Create a counter whose first id is `1`.
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a counter whose first id is `first`.
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// The counter shared by every [`BoxFactory::new`] in this process.
    pub fn global() -> &'static Self {
        &PROCESS_COUNTER
    }

    /// Take the next id.
    pub fn next_id(&self) -> BoxId {
        BoxId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// What to do with angles outside their canonical ranges at construction.
///
/// Lengths are always validated strictly; this only concerns the circumferential axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnglePolicy {
    /// Fail with [`InvalidGeometry`](crate::InvalidGeometry) when the bottom angle is outside
    /// `[0, 360)` or the width is outside `(0, 360]`.
    #[default]
    Reject,
    /// Wrap the bottom angle modulo 360 and clamp widths above 360 to a full turn,
    /// logging a warning for each adjustment.
    ///
    /// Widths that are zero, negative or not finite are still rejected.
    Normalize,
}

/// Builds [`PipeBox`]es with a chosen id counter and [`AnglePolicy`].
///
/// ```
/// use pipeline_overlap::{AnglePolicy, BoxFactory, BoxParams, IdCounter};
///
/// let counter = IdCounter::starting_at(100);
/// let factory = BoxFactory::with_counter(&counter).with_angle_policy(AnglePolicy::Normalize);
///
/// let a = factory.build(BoxParams::new(0.0, 2.0, -30.0, 60.0), None).unwrap();
/// assert_eq!(a.name(), "rect100");
/// assert_eq!(a.bottom_angle(), 330.0);
/// assert_eq!(a.mid_angle(), 0.0);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct BoxFactory<'c> {
    counter: &'c IdCounter,
    angle_policy: AnglePolicy,
}

impl BoxFactory<'static> {
    /// Factory using the process-wide counter and [`AnglePolicy::Reject`].
    pub fn new() -> Self {
        Self::with_counter(IdCounter::global())
    }
}

impl Default for BoxFactory<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> BoxFactory<'c> {
    /// Factory drawing ids from `counter`, with [`AnglePolicy::Reject`].
    pub fn with_counter(counter: &'c IdCounter) -> Self {
        Self {
            counter,
            angle_policy: AnglePolicy::default(),
        }
    }

    /// Replace the angle policy.
    #[must_use]
    pub fn with_angle_policy(mut self, angle_policy: AnglePolicy) -> Self {
        self.angle_policy = angle_policy;
        self
    }

    /// The configured angle policy.
    pub fn angle_policy(&self) -> AnglePolicy {
        self.angle_policy
    }

    /// Validate `params` and build a box.
    ///
    /// An id is drawn from the counter for every successful build. When `name` is `None`
    /// or empty, the box is named `rect{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`](crate::Error::InvalidGeometry) when the geometry
    /// is invalid under the configured policy.
    pub fn build(&self, params: BoxParams, name: Option<&str>) -> Result<PipeBox> {
        let (right, bottom_angle, angular_width) = params.validate(self.angle_policy)?;
        let id = self.counter.next_id();
        let name = match name {
            Some(n) if !n.is_empty() => String::from(n),
            _ => format!("rect{id}"),
        };
        Ok(PipeBox::from_validated(
            id,
            name,
            params.left,
            right,
            bottom_angle,
            angular_width,
        ))
    }

    /// Build one box per `(params, name)` record, stopping at the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns the first geometry error encountered.
    pub fn build_all<'n, I>(&self, records: I) -> Result<Vec<PipeBox>>
    where
        I: IntoIterator<Item = (BoxParams, Option<&'n str>)>,
    {
        records
            .into_iter()
            .map(|(params, name)| self.build(params, name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, InvalidGeometry};
    use alloc::vec;

    #[test]
    fn generated_names_follow_the_counter() {
        let counter = IdCounter::starting_at(7);
        let factory = BoxFactory::with_counter(&counter);
        let a = factory.build(BoxParams::new(0.0, 1.0, 0.0, 10.0), None).unwrap();
        let b = factory
            .build(BoxParams::new(0.0, 1.0, 0.0, 10.0), Some(""))
            .unwrap();
        let c = factory
            .build(BoxParams::new(0.0, 1.0, 0.0, 10.0), Some("weld"))
            .unwrap();
        assert_eq!(a.name(), "rect7");
        assert_eq!(b.name(), "rect8");
        assert_eq!(c.name(), "weld");
        assert_eq!(c.id().get(), 9);
    }

    #[test]
    fn failed_builds_do_not_consume_ids() {
        let counter = IdCounter::new();
        let factory = BoxFactory::with_counter(&counter);
        assert!(
            factory
                .build(BoxParams::new(0.0, -1.0, 0.0, 10.0), None)
                .is_err()
        );
        let a = factory.build(BoxParams::new(0.0, 1.0, 0.0, 10.0), None).unwrap();
        assert_eq!(a.id().get(), 1);
    }

    #[test]
    fn global_counter_is_monotonic() {
        let a = BoxFactory::new()
            .build(BoxParams::new(0.0, 1.0, 0.0, 10.0), None)
            .unwrap();
        let b = BoxFactory::new()
            .build(BoxParams::new(0.0, 1.0, 0.0, 10.0), None)
            .unwrap();
        assert!(b.id() > a.id());
        assert_ne!(a.name(), b.name());
    }

    #[test]
    fn normalize_policy_wraps_bottom_and_clamps_width() {
        let counter = IdCounter::new();
        let factory = BoxFactory::with_counter(&counter).with_angle_policy(AnglePolicy::Normalize);
        let a = factory
            .build(BoxParams::new(0.0, 1.0, 370.0, 400.0), Some("a"))
            .unwrap();
        assert_eq!(a.bottom_angle(), 10.0);
        assert_eq!(a.angular_width(), 360.0);
        let b = factory
            .build(BoxParams::new(0.0, 1.0, -90.0, 20.0), Some("b"))
            .unwrap();
        assert_eq!(b.bottom_angle(), 270.0);
        assert_eq!(b.mid_angle(), 280.0);
    }

    #[test]
    fn normalize_policy_leaves_longitudinal_checks_alone() {
        let counter = IdCounter::new();
        let factory = BoxFactory::with_counter(&counter).with_angle_policy(AnglePolicy::Normalize);
        let err = factory
            .build(BoxParams::new(f64::NAN, 1.0, 370.0, 10.0), None)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGeometry(InvalidGeometry::NonFiniteLeft(l)) if l.is_nan()
        ));
        assert_eq!(
            factory
                .build(BoxParams::new(0.0, 0.0, 370.0, 10.0), None)
                .unwrap_err(),
            Error::InvalidGeometry(InvalidGeometry::NonPositiveLength(0.0))
        );
        let err = factory
            .build(BoxParams::new(1e17, 1.0, -10.0, 10.0), None)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGeometry(InvalidGeometry::DegenerateExtent { .. })
        ));
        let ok = factory
            .build(BoxParams::new(0.0, 1.0, -10.0, 10.0), None)
            .unwrap();
        assert_eq!(ok.id().get(), 1);
        assert_eq!(ok.name(), "rect1");
    }

    #[test]
    fn normalize_policy_still_rejects_empty_widths() {
        let counter = IdCounter::new();
        let factory = BoxFactory::with_counter(&counter).with_angle_policy(AnglePolicy::Normalize);
        for width in [0.0, -10.0, f64::NAN] {
            let err = factory
                .build(BoxParams::new(0.0, 1.0, 0.0, width), None)
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    Error::InvalidGeometry(InvalidGeometry::AngularWidthOutOfRange(_))
                ),
                "width {width}"
            );
        }
    }

    #[test]
    fn build_all_stops_at_first_error() {
        let counter = IdCounter::new();
        let factory = BoxFactory::with_counter(&counter);
        let ok = factory
            .build_all(vec![
                (BoxParams::new(0.0, 1.0, 0.0, 10.0), Some("a")),
                (BoxParams::new(2.0, 1.0, 0.0, 10.0), None),
            ])
            .unwrap();
        assert_eq!(ok.len(), 2);
        let err = factory
            .build_all(vec![
                (BoxParams::new(0.0, 1.0, 0.0, 10.0), Some("a")),
                (BoxParams::new(2.0, 0.0, 0.0, 10.0), Some("b")),
            ])
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidGeometry(InvalidGeometry::NonPositiveLength(0.0))
        );
    }
}
