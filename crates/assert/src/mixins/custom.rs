//! Caller-defined rules.

use crate::foundation::{Assert, CheckResult, Checker};

/// Escape hatch for rules the built-in families do not cover.
///
/// ```
/// use nebula_assert::prelude::*;
///
/// let even = num::<i32>().custom(|v| {
///     if v % 2 == 0 {
///         Ok(())
///     } else {
///         Err(ValidationError::new("even", format!("value expects to be even, got {v}")))
///     }
/// });
///
/// assert!(even.check(&2).is_ok());
/// assert_eq!(even.check(&3).unwrap_err().code, "even");
/// ```
pub trait Custom<T>: Assert<T>
where
    T: ?Sized + 'static,
{
    /// Appends `f` verbatim as a rule.
    fn custom<F>(self, f: F) -> Self
    where
        F: Fn(&T) -> CheckResult + Send + Sync + 'static,
    {
        self.add_check(Some(Checker::new(f)))
    }

    /// Appends a pre-built checker.
    ///
    /// # Panics
    ///
    /// Raises [`ContractViolation::MissingChecker`](crate::foundation::ContractViolation::MissingChecker)
    /// immediately when `checker` is `None`, before any evaluation.
    #[track_caller]
    fn custom_checker(self, checker: Option<Checker<T>>) -> Self {
        self.add_check(checker)
    }
}
