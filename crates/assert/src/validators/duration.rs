//! Duration validator for `std::time::Duration` and `chrono::TimeDelta`

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use chrono::TimeDelta;

use crate::foundation::Rules;
use crate::macros::assert_type;
use crate::mixins::{Comparable, Comparator, Custom, Ordered};

mod sealed {
    pub trait Sealed {}
}

/// Span-of-time types the duration validator accepts.
pub trait DurationLike:
    Copy + PartialEq + PartialOrd + Debug + Send + Sync + 'static + sealed::Sealed
{
    /// The empty span.
    fn zero() -> Self;
}

impl sealed::Sealed for Duration {}

impl DurationLike for Duration {
    fn zero() -> Self {
        Self::ZERO
    }
}

impl sealed::Sealed for TimeDelta {}

impl DurationLike for TimeDelta {
    fn zero() -> Self {
        TimeDelta::zero()
    }
}

assert_type! {
    /// Rules for spans of time, ordered by length. `TimeDelta` spans may be
    /// negative and order below zero.
    ///
    /// ```
    /// use std::time::Duration;
    /// use nebula_assert::prelude::*;
    ///
    /// let timeout = duration().not_zero().less_eq(Duration::from_secs(30));
    ///
    /// assert!(timeout.check(&Duration::from_millis(250)).is_ok());
    /// assert!(timeout.check(&Duration::ZERO).is_err());
    /// assert!(timeout.check(&Duration::from_secs(60)).is_err());
    /// ```
    pub struct DurationAssert<D> for D where { D: DurationLike };
}

impl<D: DurationLike> Comparable<D> for DurationAssert<D> {}
impl<D: DurationLike> Custom<D> for DurationAssert<D> {}

impl<D: DurationLike> Ordered<D> for DurationAssert<D> {
    fn comparator(&self) -> Comparator<D> {
        Arc::new(|bigger: &D, smaller: &D| bigger > smaller)
    }
}

/// Starts an empty validator for `std::time::Duration`.
#[must_use]
pub fn duration() -> DurationAssert<Duration> {
    DurationAssert { rules: Rules::new() }
}

/// Starts an empty validator for `chrono::TimeDelta`.
#[must_use]
pub fn time_delta() -> DurationAssert<TimeDelta> {
    DurationAssert { rules: Rules::new() }
}

impl<D: DurationLike> DurationAssert<D> {
    /// Value expects to be the empty span.
    pub fn zero(self) -> Self {
        self.equal(D::zero())
    }

    /// Value expects not to be the empty span.
    pub fn not_zero(self) -> Self {
        self.not_equal(D::zero())
    }
}
