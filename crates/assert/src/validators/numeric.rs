//! Numeric validator

use std::fmt::Debug;
use std::sync::Arc;

use crate::foundation::Rules;
use crate::macros::assert_type;
use crate::mixins::{Comparable, Comparator, Custom, Ordered};

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer and floating-point types.
///
/// Sealed: the sign rules need a zero constant and the natural `>` order.
pub trait Numeric:
    Copy + PartialEq + PartialOrd + Debug + Send + Sync + 'static + sealed::Sealed
{
    /// The additive identity.
    const ZERO: Self;
}

macro_rules! impl_numeric {
    ($zero:literal => $($ty:ty),+) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Numeric for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0 => f32, f64);

assert_type! {
    /// Rules for primitive numbers: equality, ordering and sign.
    ///
    /// ```
    /// use nebula_assert::prelude::*;
    ///
    /// let percent = num::<f64>().in_range(0.0, 100.0);
    ///
    /// assert!(percent.check(&42.5).is_ok());
    /// assert!(percent.check(&100.1).is_err());
    /// assert!(percent.check(&f64::NAN).is_err());
    /// ```
    pub struct NumAssert<T> for T where { T: Numeric };
}

impl<T: Numeric> Comparable<T> for NumAssert<T> {}
impl<T: Numeric> Custom<T> for NumAssert<T> {}

impl<T: Numeric> Ordered<T> for NumAssert<T> {
    fn comparator(&self) -> Comparator<T> {
        Arc::new(|bigger: &T, smaller: &T| bigger > smaller)
    }
}

/// Starts an empty validator for the numeric type `T`.
#[must_use]
pub fn num<T: Numeric>() -> NumAssert<T> {
    NumAssert { rules: Rules::new() }
}

impl<T: Numeric> NumAssert<T> {
    /// Value expects to be below zero. Same as `less(ZERO)`.
    pub fn negative(self) -> Self {
        self.less(T::ZERO)
    }

    /// Value expects to be zero. Same as `equal(ZERO)`.
    pub fn zero(self) -> Self {
        self.equal(T::ZERO)
    }

    /// Value expects to be non-zero. Same as `not_equal(ZERO)`.
    pub fn not_zero(self) -> Self {
        self.not_equal(T::ZERO)
    }

    /// Value expects to be above zero. Same as `greater(ZERO)`.
    pub fn positive(self) -> Self {
        self.greater(T::ZERO)
    }
}
