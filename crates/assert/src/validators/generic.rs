//! Validators for caller-defined comparable and ordered types

use std::fmt::Debug;
use std::sync::Arc;

use crate::foundation::Rules;
use crate::macros::assert_type;
use crate::mixins::{Comparable, Comparator, Custom, Ordered};

assert_type! {
    /// Equality and membership rules for any `PartialEq` type.
    ///
    /// ```
    /// use nebula_assert::prelude::*;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Role { Admin, Editor, Viewer }
    ///
    /// let can_write = cmp::<Role>().not_equal(Role::Viewer);
    ///
    /// assert!(can_write.check(&Role::Editor).is_ok());
    /// assert!(can_write.check(&Role::Viewer).is_err());
    /// ```
    pub struct CmpAssert<T> for T where { T: PartialEq + Debug + 'static };
}

impl<T: PartialEq + Debug + 'static> Comparable<T> for CmpAssert<T> {}
impl<T: PartialEq + Debug + 'static> Custom<T> for CmpAssert<T> {}

/// Starts an empty validator for the comparable type `T`.
#[must_use]
pub fn cmp<T: PartialEq + Debug + 'static>() -> CmpAssert<T> {
    CmpAssert { rules: Rules::new() }
}

assert_type! {
    /// Equality, membership and ordering rules for any type, ordered by a
    /// comparator chosen at construction.
    pub struct OrdAssert<T> for T where { T: PartialEq + Debug + Send + Sync + 'static } {
        is_greater: Comparator<T>,
    };
}

impl<T: PartialEq + Debug + Send + Sync + 'static> Comparable<T> for OrdAssert<T> {}
impl<T: PartialEq + Debug + Send + Sync + 'static> Custom<T> for OrdAssert<T> {}

impl<T: PartialEq + Debug + Send + Sync + 'static> Ordered<T> for OrdAssert<T> {
    fn comparator(&self) -> Comparator<T> {
        Arc::clone(&self.is_greater)
    }
}

/// Starts an empty validator for `T`, ordered by its `PartialOrd` impl.
///
/// ```
/// use nebula_assert::prelude::*;
///
/// let version = ord::<(u32, u32)>().greater_eq((1, 4));
///
/// assert!(version.check(&(1, 10)).is_ok());
/// assert!(version.check(&(0, 99)).is_err());
/// ```
#[must_use]
pub fn ord<T>() -> OrdAssert<T>
where
    T: PartialOrd + Debug + Send + Sync + 'static,
{
    ord_by(|bigger: &T, smaller: &T| bigger > smaller)
}

/// Starts an empty validator for `T`, ordered by `is_greater(bigger, smaller)`.
#[must_use]
pub fn ord_by<T, F>(is_greater: F) -> OrdAssert<T>
where
    T: PartialEq + Debug + Send + Sync + 'static,
    F: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    OrdAssert {
        rules: Rules::new(),
        is_greater: Arc::new(is_greater),
    }
}
