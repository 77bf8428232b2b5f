//! The rule registry: an ordered, append-only list of checkers for one type.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

use super::check::{CheckResult, Checker};
use super::error::{ContractViolation, ValidationError, ValidationErrors};

/// Ordered, append-only sequence of [`Checker`]s for a fixed subject type.
///
/// Insertion order decides which failure fail-fast evaluation reports and
/// the order of collected failures. There is no removal or reordering API.
/// Evaluation reads the live list, so rules appended after an evaluation are
/// seen by the next one.
///
/// # Examples
///
/// ```
/// use nebula_assert::foundation::{Checker, Rules, ValidationError};
///
/// let mut rules = Rules::<i32>::new();
/// rules.append(Some(Checker::new(|v| {
///     if *v < 10 { Ok(()) } else { Err(ValidationError::new("less", "too big")) }
/// })));
///
/// assert!(rules.check(&3).is_ok());
/// assert_eq!(rules.check_msg(&30, "custom").unwrap_err().message, "custom");
/// assert_eq!(rules.check_all(&30).len(), 1);
/// ```
pub struct Rules<T: ?Sized> {
    checks: Vec<Checker<T>>,
}

impl<T: ?Sized> Rules<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: Vec::with_capacity(1),
        }
    }

    /// Number of registered checkers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if no checker has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Appends a checker to the end of the registry.
    ///
    /// # Panics
    ///
    /// Raises [`ContractViolation::MissingChecker`] when `checker` is `None`.
    #[track_caller]
    pub fn append(&mut self, checker: Option<Checker<T>>) {
        match checker {
            Some(checker) => self.push(checker),
            None => ContractViolation::MissingChecker {
                target: type_name::<T>(),
            }
            .raise(),
        }
    }

    pub(crate) fn push(&mut self, checker: Checker<T>) {
        self.checks.push(checker);
    }

    /// Replaces the most recently appended checker with one that reports
    /// `message` on failure.
    #[track_caller]
    pub(crate) fn relabel_last(&mut self, message: Cow<'static, str>)
    where
        T: 'static,
    {
        match self.checks.pop() {
            Some(last) => self.checks.push(last.with_message(message)),
            None => ContractViolation::NoRuleForMessage {
                target: type_name::<T>(),
                message: message.into_owned(),
            }
            .raise(),
        }
    }

    /// Runs the checkers in order and returns the first failure.
    pub fn check(&self, value: &T) -> CheckResult {
        self.checks.iter().try_for_each(|checker| checker.run(value))
    }

    /// Like [`check`](Self::check), but a non-empty `message` replaces the
    /// message of whichever checker failed.
    pub fn check_msg(&self, value: &T, message: &str) -> CheckResult {
        self.check(value).map_err(|error| {
            if message.is_empty() {
                error
            } else {
                error.overridden(message.to_owned())
            }
        })
    }

    /// Runs every checker and collects all failures in insertion order.
    pub fn check_all(&self, value: &T) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for checker in &self.checks {
            if let Err(error) = checker.run(value) {
                errors.add(error);
            }
        }

        tracing::trace!(
            subject = type_name::<T>(),
            rules = self.checks.len(),
            failures = errors.len(),
            "collect-all evaluation finished"
        );
        errors
    }

    /// Fail-fast evaluation that panics with the [`ValidationError`] as payload.
    #[track_caller]
    pub fn must(&self, value: &T) {
        if let Err(error) = self.check(value) {
            abort_with(error);
        }
    }

    /// Like [`must`](Self::must), with a per-call message override.
    #[track_caller]
    pub fn must_msg(&self, value: &T, message: &str) {
        if let Err(error) = self.check_msg(value, message) {
            abort_with(error);
        }
    }

    /// Collect-all evaluation that panics with the [`ValidationErrors`]
    /// collection as payload when anything failed.
    #[track_caller]
    pub fn must_all(&self, value: &T) {
        let errors = self.check_all(value);
        if errors.has_errors() {
            tracing::debug!(
                subject = type_name::<T>(),
                failures = errors.len(),
                "must_all evaluation failed"
            );
            std::panic::panic_any(errors);
        }
    }
}

#[track_caller]
fn abort_with(error: ValidationError) -> ! {
    tracing::debug!(code = %error.code, message = %error.message, "must evaluation failed");
    std::panic::panic_any(error)
}

impl<T: ?Sized> Default for Rules<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Rules<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules")
            .field("input", &type_name::<T>())
            .field("len", &self.checks.len())
            .finish()
    }
}
