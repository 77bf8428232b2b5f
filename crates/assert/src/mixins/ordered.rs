//! Ordering and range rules over an injected comparator.

use std::fmt::Debug;
use std::sync::Arc;

use crate::foundation::{Assert, ValidationError, with_rule};

/// `is_greater(bigger, smaller)`: true when `bigger` is strictly greater.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Ordering rules. The owning validator supplies the comparator, so the
/// same rules serve numbers, instants and caller-defined orders.
///
/// Equality for the inclusive variants uses `PartialEq`, never the
/// comparator.
///
/// # Empty lists
///
/// - `*_any([])` always fails: there is no element to relate to.
/// - `*_each([])` always passes.
///
/// # Inverted ranges
///
/// `in_range(min, max)` with `min > max` describes an empty range: it
/// always fails and `not_in_range` always passes. Inverted bounds are not an
/// error in themselves.
pub trait Ordered<T>: Assert<T>
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    /// The `is_greater(bigger, smaller)` comparator for the subject type.
    fn comparator(&self) -> Comparator<T>;

    /// Value expects to be less than `than`.
    fn less(self, than: T) -> Self {
        single(self, Side::Less, false, than)
    }

    /// Value expects to be less than or equal to `than`.
    fn less_eq(self, than: T) -> Self {
        single(self, Side::Less, true, than)
    }

    /// Value expects to be less than at least one element.
    fn less_any(self, elems: impl IntoIterator<Item = T>) -> Self {
        any(self, Side::Less, false, elems)
    }

    /// Value expects to be less than or equal to at least one element.
    fn less_eq_any(self, elems: impl IntoIterator<Item = T>) -> Self {
        any(self, Side::Less, true, elems)
    }

    /// Value expects to be less than every element.
    fn less_each(self, elems: impl IntoIterator<Item = T>) -> Self {
        each(self, Side::Less, false, elems)
    }

    /// Value expects to be less than or equal to every element.
    fn less_eq_each(self, elems: impl IntoIterator<Item = T>) -> Self {
        each(self, Side::Less, true, elems)
    }

    /// Value expects to be greater than `than`.
    fn greater(self, than: T) -> Self {
        single(self, Side::Greater, false, than)
    }

    /// Value expects to be greater than or equal to `than`.
    fn greater_eq(self, than: T) -> Self {
        single(self, Side::Greater, true, than)
    }

    /// Value expects to be greater than at least one element.
    fn greater_any(self, elems: impl IntoIterator<Item = T>) -> Self {
        any(self, Side::Greater, false, elems)
    }

    /// Value expects to be greater than or equal to at least one element.
    fn greater_eq_any(self, elems: impl IntoIterator<Item = T>) -> Self {
        any(self, Side::Greater, true, elems)
    }

    /// Value expects to be greater than every element.
    fn greater_each(self, elems: impl IntoIterator<Item = T>) -> Self {
        each(self, Side::Greater, false, elems)
    }

    /// Value expects to be greater than or equal to every element.
    fn greater_eq_each(self, elems: impl IntoIterator<Item = T>) -> Self {
        each(self, Side::Greater, true, elems)
    }

    /// Value expects to be in the inclusive range `[min, max]`.
    fn in_range(self, min: T, max: T) -> Self {
        let is_greater = self.comparator();
        with_rule(self, move |v: &T| {
            if within(&*is_greater, v, &min, &max) {
                return Ok(());
            }
            Err(ValidationError::new(
                "in_range",
                format!("value expects to be in range [{min:?}, {max:?}], got {v:?}"),
            )
            .with_param("min", format!("{min:?}"))
            .with_param("max", format!("{max:?}")))
        })
    }

    /// Value expects to be outside the inclusive range `[min, max]`.
    fn not_in_range(self, min: T, max: T) -> Self {
        let is_greater = self.comparator();
        with_rule(self, move |v: &T| {
            if !within(&*is_greater, v, &min, &max) {
                return Ok(());
            }
            Err(ValidationError::new(
                "not_in_range",
                format!("value expects not to be in range [{min:?}, {max:?}], got {v:?}"),
            )
            .with_param("min", format!("{min:?}"))
            .with_param("max", format!("{max:?}")))
        })
    }
}

// ============================================================================
// PREDICATES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quantifier {
    One,
    Any,
    Each,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Less,
    Greater,
}

impl Side {
    fn phrase(self, inclusive: bool) -> &'static str {
        match (self, inclusive) {
            (Self::Less, false) => "less than",
            (Self::Less, true) => "less or equal than",
            (Self::Greater, false) => "greater than",
            (Self::Greater, true) => "greater or equal than",
        }
    }

    fn code(self, inclusive: bool, quantifier: Quantifier) -> &'static str {
        use Quantifier::{Any, Each, One};
        match (self, inclusive, quantifier) {
            (Self::Less, false, One) => "less",
            (Self::Less, true, One) => "less_eq",
            (Self::Less, false, Any) => "less_any",
            (Self::Less, true, Any) => "less_eq_any",
            (Self::Less, false, Each) => "less_each",
            (Self::Less, true, Each) => "less_eq_each",
            (Self::Greater, false, One) => "greater",
            (Self::Greater, true, One) => "greater_eq",
            (Self::Greater, false, Any) => "greater_any",
            (Self::Greater, true, Any) => "greater_eq_any",
            (Self::Greater, false, Each) => "greater_each",
            (Self::Greater, true, Each) => "greater_eq_each",
        }
    }
}

/// Whether `v` stands on `side` of `other`, counting equality when
/// `inclusive`.
fn relates<T: PartialEq + ?Sized>(
    is_greater: &dyn Fn(&T, &T) -> bool,
    side: Side,
    inclusive: bool,
    v: &T,
    other: &T,
) -> bool {
    let strict = match side {
        Side::Less => is_greater(other, v),
        Side::Greater => is_greater(v, other),
    };
    strict || (inclusive && v == other)
}

/// Inclusive range membership. False for every `v` when `min > max`.
pub(crate) fn within<T: PartialEq + ?Sized>(
    is_greater: &dyn Fn(&T, &T) -> bool,
    v: &T,
    min: &T,
    max: &T,
) -> bool {
    (is_greater(v, min) || v == min) && (is_greater(max, v) || v == max)
}

fn single<A, T>(assert: A, side: Side, inclusive: bool, than: T) -> A
where
    A: Ordered<T>,
    T: PartialEq + Debug + Send + Sync + 'static,
{
    let is_greater = assert.comparator();
    let code = side.code(inclusive, Quantifier::One);
    with_rule(assert, move |v: &T| {
        if relates(&*is_greater, side, inclusive, v, &than) {
            return Ok(());
        }
        Err(ValidationError::new(
            code,
            format!("value expects to be {} {than:?}, got {v:?}", side.phrase(inclusive)),
        )
        .with_param("than", format!("{than:?}")))
    })
}

fn any<A, T>(assert: A, side: Side, inclusive: bool, elems: impl IntoIterator<Item = T>) -> A
where
    A: Ordered<T>,
    T: PartialEq + Debug + Send + Sync + 'static,
{
    let is_greater = assert.comparator();
    let elems: Vec<T> = elems.into_iter().collect();
    let code = side.code(inclusive, Quantifier::Any);
    with_rule(assert, move |v: &T| {
        if elems.iter().any(|e| relates(&*is_greater, side, inclusive, v, e)) {
            return Ok(());
        }
        Err(ValidationError::new(
            code,
            format!("value expects to be {} any of {elems:?}, got {v:?}", side.phrase(inclusive)),
        ))
    })
}

fn each<A, T>(assert: A, side: Side, inclusive: bool, elems: impl IntoIterator<Item = T>) -> A
where
    A: Ordered<T>,
    T: PartialEq + Debug + Send + Sync + 'static,
{
    let is_greater = assert.comparator();
    let elems: Vec<T> = elems.into_iter().collect();
    let code = side.code(inclusive, Quantifier::Each);
    with_rule(assert, move |v: &T| {
        if elems.iter().all(|e| relates(&*is_greater, side, inclusive, v, e)) {
            return Ok(());
        }
        Err(ValidationError::new(
            code,
            format!("value expects to be {} each of {elems:?}, got {v:?}", side.phrase(inclusive)),
        ))
    })
}
