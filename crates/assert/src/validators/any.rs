//! Validator for values of any type

use std::fmt::Debug;

use crate::foundation::{Countable, Rules, ValidationError, ZeroValue, with_rule};
use crate::macros::assert_type;
use crate::mixins::{Custom, Length};

assert_type! {
    /// Rules for values of any type: zero-ness and deep nil-ness through
    /// [`ZeroValue`], length through [`Countable`], and custom rules.
    ///
    /// ```
    /// use nebula_assert::prelude::*;
    ///
    /// let present = any::<Option<Box<Option<u8>>>>().not_nil_deep();
    ///
    /// assert!(present.check(&Some(Box::new(Some(0)))).is_ok());
    /// assert!(present.check(&Some(Box::new(None))).is_err());
    /// assert!(present.check(&None).is_err());
    /// ```
    pub struct AnyAssert<T> for T where { T: ?Sized + 'static };
}

impl<T: ?Sized + 'static> Custom<T> for AnyAssert<T> {}
impl<T: ?Sized + Countable + Debug + 'static> Length<T> for AnyAssert<T> {}

/// Starts an empty validator for `T`.
#[must_use]
pub fn any<T: ?Sized + 'static>() -> AnyAssert<T> {
    AnyAssert { rules: Rules::new() }
}

impl<T> AnyAssert<T>
where
    T: ?Sized + ZeroValue + Debug + 'static,
{
    /// Value expects not to be the zero value of its type.
    ///
    /// An `Option` holding a zero value is not itself zero: `Some(0)` passes.
    pub fn not_zero(self) -> Self {
        with_rule(self, |v: &T| {
            if !v.is_zero_value() {
                return Ok(());
            }
            Err(ValidationError::new(
                "not_zero",
                format!("value expects to be non-zero, got {v:?}"),
            ))
        })
    }

    /// Value expects not to be nil at any depth: `Some(Box::new(None))` fails
    /// just like `None`. Values that cannot hold nil always pass.
    pub fn not_nil_deep(self) -> Self {
        with_rule(self, |v: &T| {
            if !v.is_nil_deep() {
                return Ok(());
            }
            Err(ValidationError::new(
                "not_nil_deep",
                format!("value expects to be non-nil in depth, got {v:?}"),
            ))
        })
    }
}
