//! The [`Checker`] unit: one predicate-with-reason over a typed value.

use std::borrow::Cow;
use std::fmt;

use super::error::ValidationError;

/// Outcome of running a single checker or a whole rule set fail-fast.
pub type CheckResult = Result<(), ValidationError>;

type CheckFn<T> = dyn Fn(&T) -> CheckResult + Send + Sync;

/// A single validation rule: maps a value to `Ok(())` or a descriptive error.
///
/// Checkers capture their parameters by value when built and are immutable
/// afterwards, so a registry holding them can be evaluated from many threads.
///
/// # Examples
///
/// ```
/// use nebula_assert::foundation::{Checker, ValidationError};
///
/// let even = Checker::<i32>::new(|v| {
///     if v % 2 == 0 {
///         Ok(())
///     } else {
///         Err(ValidationError::new("even", format!("value expects to be even, got {v}")))
///     }
/// });
///
/// assert!(even.run(&4).is_ok());
/// assert_eq!(even.run(&3).unwrap_err().message, "value expects to be even, got 3");
/// ```
pub struct Checker<T: ?Sized> {
    f: Box<CheckFn<T>>,
}

impl<T: ?Sized> Checker<T> {
    /// Wraps a closure as a checker.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> CheckResult + Send + Sync + 'static,
    {
        Self { f: Box::new(f) }
    }

    /// Runs the checker against a value.
    #[inline]
    pub fn run(&self, value: &T) -> CheckResult {
        (self.f)(value)
    }

    /// Returns a checker whose failures carry `message` instead of the
    /// default text. The error code is kept and the original error is nested.
    ///
    /// An empty message leaves the checker untouched.
    #[must_use]
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self
    where
        T: 'static,
    {
        let message = message.into();
        if message.is_empty() {
            return self;
        }

        let inner = self.f;
        Self::new(move |value| inner(value).map_err(|error| error.overridden(message.clone())))
    }
}

impl<T: ?Sized> fmt::Debug for Checker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("input", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
