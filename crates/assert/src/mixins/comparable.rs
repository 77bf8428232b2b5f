//! Equality and membership rules.

use std::borrow::Borrow;
use std::fmt::Debug;

use crate::foundation::{Assert, ValidationError, with_rule};

/// Equality and membership rules for any `PartialEq` subject.
///
/// Expected values may be anything that borrows as the subject type, so a
/// string validator accepts both `&'static str` and `String`:
///
/// ```
/// use nebula_assert::prelude::*;
///
/// let status = string().is_in(["active", "paused"]).not_equal(String::from("paused"));
///
/// assert!(status.check("active").is_ok());
/// assert!(status.check("paused").is_err());
/// assert!(status.check("deleted").is_err());
/// ```
pub trait Comparable<T>: Assert<T>
where
    T: ?Sized + PartialEq + Debug + 'static,
{
    /// Value expects to be equal to `eq`.
    fn equal<E>(self, eq: E) -> Self
    where
        E: Borrow<T> + Debug + Send + Sync + 'static,
    {
        with_rule(self, move |v: &T| {
            if v == eq.borrow() {
                return Ok(());
            }
            Err(
                ValidationError::new("eq", format!("value expects to be equal to {eq:?}, got {v:?}"))
                    .with_param("expected", format!("{eq:?}")),
            )
        })
    }

    /// Value expects to be not equal to `not_eq`.
    fn not_equal<E>(self, not_eq: E) -> Self
    where
        E: Borrow<T> + Debug + Send + Sync + 'static,
    {
        with_rule(self, move |v: &T| {
            if v != not_eq.borrow() {
                return Ok(());
            }
            Err(ValidationError::new(
                "not_eq",
                format!("value expects to be not equal to {not_eq:?}, got {v:?}"),
            )
            .with_param("unexpected", format!("{not_eq:?}")))
        })
    }

    /// Value expects to be equal to one of `items`.
    ///
    /// Always fails when `items` is empty.
    fn is_in<I, E>(self, items: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Borrow<T> + Debug + Send + Sync + 'static,
    {
        let items: Vec<E> = items.into_iter().collect();
        with_rule(self, move |v: &T| {
            if items.iter().any(|item| v == item.borrow()) {
                return Ok(());
            }
            Err(ValidationError::new("in", format!("value expects to be in {items:?}, got {v:?}")))
        })
    }

    /// Value expects to be equal to none of `items`.
    ///
    /// Always passes when `items` is empty.
    fn not_in<I, E>(self, items: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Borrow<T> + Debug + Send + Sync + 'static,
    {
        let items: Vec<E> = items.into_iter().collect();
        with_rule(self, move |v: &T| {
            if items.iter().all(|item| v != item.borrow()) {
                return Ok(());
            }
            Err(ValidationError::new(
                "not_in",
                format!("value expects to be not in {items:?}, got {v:?}"),
            ))
        })
    }
}
