//! Slice rules: emptiness, element predicates, membership and uniqueness.

use std::fmt::Debug;

use super::length::{CountBound, Measure};
use crate::foundation::{Assert, ValidationError, with_rule};

// ============================================================================
// ELEMENT RULES
// ============================================================================

/// Rules over `[E]` that need nothing from the element type beyond `Debug`.
///
/// The element predicates pass on an empty slice; chain
/// [`not_empty`](Self::not_empty) when that matters.
///
/// ```
/// use nebula_assert::prelude::*;
///
/// let scores = slice::<i32>().not_empty().element_each("non-negative", |s| *s >= 0);
///
/// assert!(scores.check(&[3, 0, 7][..]).is_ok());
/// assert!(scores.check(&[3, -1][..]).is_err());
/// assert!(scores.check(&[][..]).is_err());
/// ```
pub trait SliceRules<E>: Assert<[E]>
where
    E: Debug + 'static,
{
    /// Slice expects to be empty.
    fn empty(self) -> Self {
        with_rule(self, |v: &[E]| {
            if v.is_empty() {
                return Ok(());
            }
            Err(ValidationError::new("empty", format!("value expects to be empty, got {v:?}")))
        })
    }

    /// Slice expects to have at least one element.
    fn not_empty(self) -> Self {
        with_rule(self, |v: &[E]| {
            if !v.is_empty() {
                return Ok(());
            }
            Err(ValidationError::new(
                "not_empty",
                format!("value expects to be not empty, got {v:?}"),
            ))
        })
    }

    /// At least one element expects to match the named condition.
    fn element_any<F>(self, name: &'static str, condition: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        with_rule(self, move |v: &[E]| {
            if v.is_empty() || v.iter().any(&condition) {
                return Ok(());
            }
            Err(ValidationError::new(
                "element_any",
                format!("value expects any element to match {name:?} condition, got none matched in {v:?}"),
            )
            .with_param("condition", name))
        })
    }

    /// Every element expects to match the named condition.
    fn element_each<F>(self, name: &'static str, condition: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        with_rule(self, move |v: &[E]| match v.iter().find(|e| !condition(e)) {
            None => Ok(()),
            Some(e) => Err(ValidationError::new(
                "element_each",
                format!(
                    "value expects each element to match {name:?} condition, got at least {e:?} not matched in {v:?}"
                ),
            )
            .with_param("condition", name)),
        })
    }

    /// No element expects to match the named condition.
    fn element_none<F>(self, name: &'static str, condition: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        with_rule(self, move |v: &[E]| match v.iter().find(|e| condition(e)) {
            None => Ok(()),
            Some(e) => Err(ValidationError::new(
                "element_none",
                format!(
                    "value expects none element to match {name:?} condition, got at least {e:?} matched in {v:?}"
                ),
            )
            .with_param("condition", name)),
        })
    }
}

// ============================================================================
// COMPARABLE ELEMENT RULES
// ============================================================================

/// Membership and uniqueness rules over `[E]` for elements with equality.
///
/// Only `PartialEq` is required, so float slices qualify. Elements that are
/// not equal to themselves, like `NaN`, are never found and never count as
/// duplicates.
///
/// Empty argument lists: `contains_any([])` always fails, while
/// `contains_each([])` and `contains_none([])` always pass.
pub trait SliceCmpRules<E>: SliceRules<E>
where
    E: PartialEq + Debug + Send + Sync + 'static,
{
    /// Slice expects to contain `elem`.
    fn contains(self, elem: E) -> Self {
        with_rule(self, move |v: &[E]| {
            if v.contains(&elem) {
                return Ok(());
            }
            Err(ValidationError::new(
                "contains",
                format!("value expects to contain {elem:?}, got {v:?}"),
            ))
        })
    }

    /// Slice expects not to contain `elem`.
    fn not_contains(self, elem: E) -> Self {
        with_rule(self, move |v: &[E]| {
            if !v.contains(&elem) {
                return Ok(());
            }
            Err(ValidationError::new(
                "not_contains",
                format!("value expects to not contain {elem:?}, got {v:?}"),
            ))
        })
    }

    /// Slice expects to contain at least one of `elems`.
    fn contains_any(self, elems: impl IntoIterator<Item = E>) -> Self {
        let elems: Vec<E> = elems.into_iter().collect();
        with_rule(self, move |v: &[E]| {
            if elems.iter().any(|e| v.contains(e)) {
                return Ok(());
            }
            Err(ValidationError::new(
                "contains_any",
                format!("value expects to contain any of {elems:?}, got {v:?}"),
            ))
        })
    }

    /// Slice expects to contain every one of `elems`.
    fn contains_each(self, elems: impl IntoIterator<Item = E>) -> Self {
        let elems: Vec<E> = elems.into_iter().collect();
        with_rule(self, move |v: &[E]| {
            if elems.iter().all(|e| v.contains(e)) {
                return Ok(());
            }
            Err(ValidationError::new(
                "contains_each",
                format!("value expects to contain each of {elems:?}, got {v:?}"),
            ))
        })
    }

    /// Slice expects to contain none of `elems`.
    fn contains_none(self, elems: impl IntoIterator<Item = E>) -> Self {
        let elems: Vec<E> = elems.into_iter().collect();
        with_rule(self, move |v: &[E]| {
            if !elems.iter().any(|e| v.contains(e)) {
                return Ok(());
            }
            Err(ValidationError::new(
                "contains_none",
                format!("value expects to contain none of {elems:?}, got {v:?}"),
            ))
        })
    }

    /// Slice expects no duplicated elements. Reports the first duplicate.
    fn uniques(self) -> Self {
        with_rule(self, |v: &[E]| {
            match v.iter().enumerate().find(|&(i, e)| v[..i].contains(e)) {
                None => Ok(()),
                Some((_, duplicate)) => Err(ValidationError::new(
                    "uniques",
                    format!("value expects all elements to be unique, got {v:?}"),
                )
                .with_param("duplicate", format!("{duplicate:?}"))),
            }
        })
    }

    /// Count of distinct elements expects to be equal to `eq`.
    fn uniques_len_eq(self, eq: i64) -> Self {
        uniques_len(self, CountBound::Eq(eq))
    }

    /// Count of distinct elements expects to be not equal to `not_eq`.
    fn uniques_len_not_eq(self, not_eq: i64) -> Self {
        uniques_len(self, CountBound::NotEq(not_eq))
    }

    /// Count of distinct elements expects to be at least `min`.
    fn uniques_len_min(self, min: i64) -> Self {
        uniques_len(self, CountBound::Min(min))
    }

    /// Count of distinct elements expects to be at most `max`.
    fn uniques_len_max(self, max: i64) -> Self {
        uniques_len(self, CountBound::Max(max))
    }

    /// Count of distinct elements expects to be in `[min, max]`.
    fn uniques_len_in_range(self, min: i64, max: i64) -> Self {
        uniques_len(self, CountBound::InRange(min, max))
    }

    /// Count of distinct elements expects to be outside `[min, max]`.
    fn uniques_len_not_in_range(self, min: i64, max: i64) -> Self {
        uniques_len(self, CountBound::NotInRange(min, max))
    }
}

/// Number of elements not equal to any element before them.
fn distinct_count<E: PartialEq>(v: &[E]) -> usize {
    v.iter()
        .enumerate()
        .filter(|&(i, e)| !v[..i].contains(e))
        .count()
}

fn uniques_len<A, E>(assert: A, bound: CountBound) -> A
where
    A: Assert<[E]>,
    E: PartialEq + Debug + 'static,
{
    with_rule(assert, move |v: &[E]| {
        bound.check(Measure::UniquesLen, v, distinct_count(v))
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::validators::{slice, slice_cmp};

    // ========================================================================
    // Element rules
    // ========================================================================

    #[test]
    fn test_empty_and_not_empty() {
        assert!(slice::<i32>().empty().check(&[][..]).is_ok());
        assert!(slice::<i32>().empty().check(&[1][..]).is_err());
        assert!(slice::<i32>().not_empty().check(&[1][..]).is_ok());

        let error = slice::<i32>().not_empty().check(&[][..]).unwrap_err();
        assert_eq!(error.message, "value expects to be not empty, got []");
    }

    #[test]
    fn test_element_rules_pass_on_empty_slice() {
        let never = |_: &i32| false;
        assert!(slice::<i32>().element_any("never", never).check(&[][..]).is_ok());
        assert!(slice::<i32>().element_each("never", never).check(&[][..]).is_ok());
        assert!(slice::<i32>().element_none("never", never).check(&[][..]).is_ok());
    }

    #[test]
    fn test_element_messages() {
        let even = |e: &i32| e % 2 == 0;

        let error = slice::<i32>().element_any("even", even).check(&[1, 3][..]).unwrap_err();
        assert_eq!(
            error.message,
            "value expects any element to match \"even\" condition, got none matched in [1, 3]"
        );

        let error = slice::<i32>().element_each("even", even).check(&[2, 3, 5][..]).unwrap_err();
        assert_eq!(
            error.message,
            "value expects each element to match \"even\" condition, got at least 3 not matched in [2, 3, 5]"
        );

        let error = slice::<i32>().element_none("even", even).check(&[1, 4][..]).unwrap_err();
        assert_eq!(error.code, "element_none");
        assert_eq!(error.param("condition"), Some("even"));
    }

    // ========================================================================
    // Membership
    // ========================================================================

    #[rstest]
    #[case(&[1, 2, 3], true)]
    #[case(&[1, 3], false)]
    fn test_contains_each(#[case] input: &[i32], #[case] ok: bool) {
        assert_eq!(slice_cmp::<i32>().contains_each([2, 3]).check(input).is_ok(), ok);
    }

    #[test]
    fn test_membership_with_empty_lists() {
        let input = &[1, 2][..];
        assert!(slice_cmp::<i32>().contains_any(Vec::new()).check(input).is_err());
        assert!(slice_cmp::<i32>().contains_each(Vec::new()).check(input).is_ok());
        assert!(slice_cmp::<i32>().contains_none(Vec::new()).check(input).is_ok());
    }

    #[test]
    fn test_contains_and_not_contains() {
        let assert = slice_cmp::<&str>().contains("a").not_contains("z");
        assert!(assert.check(&["a", "b"][..]).is_ok());

        let errors = assert.check_all(&["z"][..]);
        let codes: Vec<_> = errors.iter().map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, ["contains", "not_contains"]);
    }

    // ========================================================================
    // Uniqueness
    // ========================================================================

    #[test]
    fn test_uniques_reports_first_duplicate() {
        assert!(slice_cmp::<i32>().uniques().check(&[][..]).is_ok());
        assert!(slice_cmp::<i32>().uniques().check(&[1, 2, 3][..]).is_ok());

        let error = slice_cmp::<i32>().uniques().check(&[1, 2, 2, 1][..]).unwrap_err();
        assert_eq!(error.message, "value expects all elements to be unique, got [1, 2, 2, 1]");
        assert_eq!(error.param("duplicate"), Some("2"));
    }

    #[test]
    fn test_float_elements() {
        let input = &[0.5, 1.5, 0.5][..];

        assert!(slice_cmp::<f64>().contains(1.5).check(input).is_ok());
        assert!(slice_cmp::<f64>().not_contains(2.5).check(input).is_ok());
        assert!(slice_cmp::<f64>().contains_any([9.0, 0.5]).check(input).is_ok());
        assert!(slice_cmp::<f64>().contains_each([0.5, 2.5]).check(input).is_err());
        assert!(slice_cmp::<f64>().contains_none([2.5]).check(input).is_ok());
        assert!(slice_cmp::<f64>().uniques_len_eq(2).check(input).is_ok());

        let error = slice_cmp::<f64>().uniques().check(input).unwrap_err();
        assert_eq!(error.param("duplicate"), Some("0.5"));
    }

    #[test]
    fn test_nan_is_never_found_or_duplicated() {
        let input = &[f64::NAN, f64::NAN][..];
        assert!(slice_cmp::<f64>().contains(f64::NAN).check(input).is_err());
        assert!(slice_cmp::<f64>().uniques().check(input).is_ok());
        assert!(slice_cmp::<f64>().uniques_len_eq(2).check(input).is_ok());
    }

    #[test]
    fn test_distinct_count_counts_each_nan() {
        assert_eq!(distinct_count::<i32>(&[]), 0);
        assert_eq!(distinct_count(&[1, 1, 2, 1]), 2);
        assert_eq!(distinct_count(&[f64::NAN, f64::NAN]), 2);
    }

    #[test]
    fn test_uniques_len() {
        let input = &[1, 1, 2][..];
        assert!(slice_cmp::<i32>().uniques_len_eq(2).check(input).is_ok());
        assert!(slice_cmp::<i32>().uniques_len_min(3).check(input).is_err());
        assert!(slice_cmp::<i32>().uniques_len_in_range(3, 1).check(input).is_err());
        assert!(slice_cmp::<i32>().uniques_len_not_in_range(3, 1).check(input).is_ok());

        let error = slice_cmp::<i32>().uniques_len_max(1).check(input).unwrap_err();
        assert_eq!(error.code, "uniques_len_max");
        assert_eq!(
            error.message,
            "length of unique elements sub-slice of [1, 1, 2] expects to be less or equal to 1, got 2"
        );
    }
}
