//! Element-count rules, shared by length, rune-count and unique-count rules.

use std::any::type_name;
use std::fmt::Debug;

use super::ordered::within;
use crate::foundation::{Assert, ContractViolation, Countable, ValidationError, with_rule};

/// Length rules over [`Countable`] subjects.
///
/// Bounds are plain `i64`s and go through the same comparisons as any other
/// number: a negative `len_min` always passes, and an inverted
/// `len_in_range` never does.
///
/// ```
/// use nebula_assert::prelude::*;
///
/// let name = string().len_in_range(3, 5);
///
/// assert!(name.check("cats").is_ok());
/// assert!(name.check("hi").is_err());
/// assert!(name.check("caught").is_err());
/// ```
///
/// # Panics
///
/// Evaluating a length rule against a value whose [`Countable::count`] is
/// `None` raises [`ContractViolation::Uncountable`].
pub trait Length<T>: Assert<T>
where
    T: ?Sized + Countable + Debug + 'static,
{
    /// Length expects to be equal to `eq`.
    fn len_eq(self, eq: i64) -> Self {
        count_rule(self, CountBound::Eq(eq))
    }

    /// Length expects to be not equal to `not_eq`.
    fn len_not_eq(self, not_eq: i64) -> Self {
        count_rule(self, CountBound::NotEq(not_eq))
    }

    /// Length expects to be greater than or equal to `min`.
    fn len_min(self, min: i64) -> Self {
        count_rule(self, CountBound::Min(min))
    }

    /// Length expects to be less than or equal to `max`.
    fn len_max(self, max: i64) -> Self {
        count_rule(self, CountBound::Max(max))
    }

    /// Length expects to be in the inclusive range `[min, max]`.
    fn len_in_range(self, min: i64, max: i64) -> Self {
        count_rule(self, CountBound::InRange(min, max))
    }

    /// Length expects to be outside the inclusive range `[min, max]`.
    fn len_not_in_range(self, min: i64, max: i64) -> Self {
        count_rule(self, CountBound::NotInRange(min, max))
    }
}

fn count_rule<A, T>(assert: A, bound: CountBound) -> A
where
    A: Assert<T>,
    T: ?Sized + Countable + Debug + 'static,
{
    with_rule(assert, move |v: &T| {
        let Some(count) = v.count() else {
            ContractViolation::Uncountable {
                target: type_name::<T>(),
                value: format!("{v:?}"),
            }
            .raise()
        };
        bound.check(Measure::Len, v, count)
    })
}

// ============================================================================
// COUNT BOUNDS
// ============================================================================

/// What is being counted; decides the error code prefix and wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Measure {
    Len,
    Runes,
    UniquesLen,
}

impl Measure {
    fn subject(self) -> &'static str {
        match self {
            Self::Len => "length of",
            Self::Runes => "runes count of",
            Self::UniquesLen => "length of unique elements sub-slice of",
        }
    }
}

/// A bound on a count, with ordinary integer semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CountBound {
    Eq(i64),
    NotEq(i64),
    Min(i64),
    Max(i64),
    InRange(i64, i64),
    NotInRange(i64, i64),
}

impl CountBound {
    pub(crate) fn holds(self, count: i64) -> bool {
        let is_greater = |a: &i64, b: &i64| a > b;
        match self {
            Self::Eq(eq) => count == eq,
            Self::NotEq(not_eq) => count != not_eq,
            Self::Min(min) => count >= min,
            Self::Max(max) => count <= max,
            Self::InRange(min, max) => within(&is_greater, &count, &min, &max),
            Self::NotInRange(min, max) => !within(&is_greater, &count, &min, &max),
        }
    }

    /// Checks `count` against the bound, describing `subject` on failure.
    pub(crate) fn check<S: Debug + ?Sized>(
        self,
        measure: Measure,
        subject: &S,
        count: usize,
    ) -> Result<(), ValidationError> {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        if self.holds(count) {
            return Ok(());
        }
        Err(ValidationError::new(
            self.code(measure),
            format!(
                "{} {subject:?} expects to {}, got {count}",
                measure.subject(),
                self.expectation()
            ),
        )
        .with_param("actual", count.to_string()))
    }

    fn expectation(self) -> String {
        match self {
            Self::Eq(eq) => format!("be equal to {eq}"),
            Self::NotEq(not_eq) => format!("be not equal to {not_eq}"),
            Self::Min(min) => format!("be greater or equal to {min}"),
            Self::Max(max) => format!("be less or equal to {max}"),
            Self::InRange(min, max) => format!("be in range [{min}, {max}]"),
            Self::NotInRange(min, max) => format!("be not in range [{min}, {max}]"),
        }
    }

    fn code(self, measure: Measure) -> &'static str {
        let codes = match measure {
            Measure::Len => [
                "len_eq",
                "len_not_eq",
                "len_min",
                "len_max",
                "len_in_range",
                "len_not_in_range",
            ],
            Measure::Runes => [
                "runes_eq",
                "runes_not_eq",
                "runes_min",
                "runes_max",
                "runes_in_range",
                "runes_not_in_range",
            ],
            Measure::UniquesLen => [
                "uniques_len_eq",
                "uniques_len_not_eq",
                "uniques_len_min",
                "uniques_len_max",
                "uniques_len_in_range",
                "uniques_len_not_in_range",
            ],
        };
        let slot = match self {
            Self::Eq(_) => 0,
            Self::NotEq(_) => 1,
            Self::Min(_) => 2,
            Self::Max(_) => 3,
            Self::InRange(..) => 4,
            Self::NotInRange(..) => 5,
        };
        codes[slot]
    }
}
