//! Time validator

use std::sync::Arc;

use chrono::{DateTime, TimeZone};

use crate::foundation::Rules;
use crate::macros::assert_type;
use crate::mixins::{Comparable, Comparator, Custom, Ordered};

assert_type! {
    /// Rules for instants. Ordering is chronological, so `less` reads as
    /// "before" and `greater` as "after", regardless of the time zones
    /// involved.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use nebula_assert::prelude::*;
    ///
    /// let y2k = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    /// let after_y2k = time::<Utc>().not_zero().greater(y2k);
    ///
    /// assert!(after_y2k.check(&Utc::now()).is_ok());
    /// assert!(after_y2k.check(&y2k).is_err());
    /// ```
    pub struct TimeAssert<Tz> for DateTime<Tz>
    where { Tz: TimeZone + 'static, Tz::Offset: Send + Sync };
}

impl<Tz> Comparable<DateTime<Tz>> for TimeAssert<Tz>
where
    Tz: TimeZone + 'static,
    Tz::Offset: Send + Sync,
{
}

impl<Tz> Custom<DateTime<Tz>> for TimeAssert<Tz>
where
    Tz: TimeZone + 'static,
    Tz::Offset: Send + Sync,
{
}

impl<Tz> Ordered<DateTime<Tz>> for TimeAssert<Tz>
where
    Tz: TimeZone + 'static,
    Tz::Offset: Send + Sync,
{
    fn comparator(&self) -> Comparator<DateTime<Tz>> {
        Arc::new(|bigger: &DateTime<Tz>, smaller: &DateTime<Tz>| smaller < bigger)
    }
}

/// Starts an empty validator for instants in the time zone `Tz`.
#[must_use]
pub fn time<Tz>() -> TimeAssert<Tz>
where
    Tz: TimeZone + 'static,
    Tz::Offset: Send + Sync,
{
    TimeAssert { rules: Rules::new() }
}

impl<Tz> TimeAssert<Tz>
where
    Tz: TimeZone + 'static,
    Tz::Offset: Send + Sync,
    DateTime<Tz>: Default,
{
    /// Value expects to be the zero instant, `DateTime::default()`.
    ///
    /// The zero instant is the UNIX epoch, 1970-01-01T00:00:00Z, so a real
    /// timestamp at exactly that instant counts as zero.
    pub fn zero(self) -> Self {
        self.equal(DateTime::<Tz>::default())
    }

    /// Value expects not to be the zero instant, `DateTime::default()`.
    ///
    /// Rejects 1970-01-01T00:00:00Z, the UNIX epoch, in any time zone.
    pub fn not_zero(self) -> Self {
        self.not_equal(DateTime::<Tz>::default())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeDelta, Utc};

    use super::*;
    use crate::foundation::Assert;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_before_and_after() {
        assert!(time::<Utc>().less(at(12)).check(&at(11)).is_ok());
        assert!(time::<Utc>().less(at(12)).check(&at(12)).is_err());
        assert!(time::<Utc>().less_eq(at(12)).check(&at(12)).is_ok());
        assert!(time::<Utc>().greater(at(12)).check(&at(13)).is_ok());
    }

    #[test]
    fn test_in_range() {
        let office_hours = time::<Utc>().in_range(at(9), at(17));
        assert!(office_hours.check(&at(9)).is_ok());
        assert!(office_hours.check(&at(17)).is_ok());
        assert!(office_hours.check(&(at(17) + TimeDelta::seconds(1))).is_err());
    }

    #[test]
    fn test_zero() {
        assert!(time::<Utc>().zero().check(&DateTime::<Utc>::default()).is_ok());
        assert!(time::<Utc>().not_zero().check(&DateTime::<Utc>::default()).is_err());
        assert!(time::<Utc>().not_zero().check(&at(0)).is_ok());
    }

    #[test]
    fn test_not_zero_rejects_the_epoch() {
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert!(time::<Utc>().not_zero().check(&epoch).is_err());
        assert!(time::<Utc>().zero().check(&epoch).is_ok());
    }

    #[test]
    fn test_fixed_offset_compares_instants() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let noon_utc = at(12).with_timezone(&plus_two);
        let later = (at(12) + TimeDelta::minutes(1)).with_timezone(&plus_two);

        let assert = time::<FixedOffset>().equal(noon_utc).less(later);
        assert!(assert.check(&at(12).with_timezone(&plus_two)).is_ok());
    }
}
