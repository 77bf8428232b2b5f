//! Core traits: [`Validate`] for interop and [`Assert`] for fluent validators.

use std::borrow::Cow;

use super::check::{CheckResult, Checker};
use super::error::{ValidationError, ValidationErrors};
use super::rules::Rules;

// ============================================================================
// VALIDATE
// ============================================================================

/// Anything that can validate a value of its input type.
///
/// Every concrete validator and every [`Rules`] implements this by
/// delegating to fail-fast evaluation, so they can be handed to code that
/// only knows about `Validate`.
///
/// # Examples
///
/// ```
/// use nebula_assert::prelude::*;
///
/// fn run<V: Validate + ?Sized>(validator: &V, input: &V::Input) -> bool {
///     validator.validate(input).is_ok()
/// }
///
/// let name = string().not_empty().word();
/// assert!(run(&name, "Hello"));
/// assert!(!run(&name, ""));
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<T: ?Sized> Validate for Rules<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        self.check(input)
    }
}

// ============================================================================
// ASSERT
// ============================================================================

/// The narrow capability every concrete validator exposes: access to its
/// rule registry. Mixins are built on top of this, and the evaluation
/// methods are provided here.
///
/// Rule-building methods take and return `Self`, so rules from different
/// mixins chain on one value:
///
/// ```
/// use nebula_assert::prelude::*;
///
/// let age = num::<u8>().greater_eq(18).msg("too young").less(130);
///
/// assert!(age.check(&30).is_ok());
/// assert_eq!(age.check(&12).unwrap_err().message, "too young");
/// assert_eq!(age.check_all(&200).len(), 1);
/// ```
pub trait Assert<T: ?Sized + 'static>: Sized {
    /// The registry backing this validator.
    fn rules(&self) -> &Rules<T>;

    /// Mutable access to the registry, for rule builders.
    fn rules_mut(&mut self) -> &mut Rules<T>;

    /// Appends a pre-built checker.
    ///
    /// # Panics
    ///
    /// Raises a [`ContractViolation`](super::ContractViolation) when the
    /// checker is absent.
    #[track_caller]
    fn add_check(mut self, checker: Option<Checker<T>>) -> Self {
        self.rules_mut().append(checker);
        self
    }

    /// Sets the failure message of the rule added just before this call.
    ///
    /// # Panics
    ///
    /// Raises a [`ContractViolation`](super::ContractViolation) when no
    /// rule has been added yet.
    #[track_caller]
    fn msg(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.rules_mut().relabel_last(message.into());
        self
    }

    /// Fail-fast evaluation: the first failing rule's error.
    fn check(&self, value: &T) -> CheckResult {
        self.rules().check(value)
    }

    /// Fail-fast evaluation with a per-call message override.
    fn check_msg(&self, value: &T, message: &str) -> CheckResult {
        self.rules().check_msg(value, message)
    }

    /// Collect-all evaluation: every failing rule's error, in order.
    fn check_all(&self, value: &T) -> ValidationErrors {
        self.rules().check_all(value)
    }

    /// Fail-fast evaluation, panicking with the [`ValidationError`].
    #[track_caller]
    fn must(&self, value: &T) {
        self.rules().must(value);
    }

    /// Fail-fast evaluation with a message override, panicking on failure.
    #[track_caller]
    fn must_msg(&self, value: &T, message: &str) {
        self.rules().must_msg(value, message);
    }

    /// Collect-all evaluation, panicking with the [`ValidationErrors`].
    #[track_caller]
    fn must_all(&self, value: &T) {
        self.rules().must_all(value);
    }
}

/// Appends a closure as a new rule and hands the validator back.
///
/// Shared by every rule builder in the crate.
pub(crate) fn with_rule<A, T, F>(mut assert: A, rule: F) -> A
where
    A: Assert<T>,
    T: ?Sized + 'static,
    F: Fn(&T) -> CheckResult + Send + Sync + 'static,
{
    assert.rules_mut().push(Checker::new(rule));
    assert
}
