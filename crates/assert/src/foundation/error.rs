//! Error types for validation failures and contract violations
//!
//! Two disjoint classes live here:
//!
//! - [`ValidationError`] / [`ValidationErrors`]: expected, data-dependent
//!   outcomes. Always returned as values; the `must*` evaluation methods
//!   raise them as panic payloads only when the caller asked for it.
//! - [`ContractViolation`]: misuse of the library itself. Never returned,
//!   always raised immediately as a panic payload.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Parameters attached to an error (typically 0-3 pairs, kept inline).
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>;

/// A structured validation error.
///
/// `Display` prints the human-readable message only, so an overridden
/// message reads back exactly as it was supplied. The alternate form
/// (`{:#}`) also prints the code and parameters.
///
/// # Examples
///
/// ```
/// use nebula_assert::foundation::ValidationError;
///
/// let error = ValidationError::new("len_min", "length of \"hi\" expects to be greater or equal to 3, got 2")
///     .with_param("min", "3")
///     .with_param("actual", "2");
///
/// assert_eq!(error.param("min"), Some("3"));
/// assert_eq!(error.to_string(), "length of \"hi\" expects to be greater or equal to 3, got 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "eq", "in_range", "len_min", "prefix_in"
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Rule parameters and the observed value, as ordered key-value pairs.
    pub params: ErrorParams,

    /// Errors this one wraps, e.g. the original failure behind an
    /// overridden message.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Replaces the message, keeping the code and nesting the original error.
    ///
    /// Both the per-rule message and the per-call message go through here.
    #[must_use]
    pub fn overridden(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(self.code.clone(), message).with_nested_error(self)
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the innermost error, i.e. the one the failing rule produced
    /// before any message override.
    #[must_use]
    pub fn root_cause(&self) -> &ValidationError {
        self.nested.first().map_or(self, ValidationError::root_cause)
    }

    /// Converts the error to a JSON value.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(&self.message);
        }

        write!(f, "{}: {}", self.code, self.message)?;
        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors, as produced by collect-all
/// evaluation. Order matches the order the failing rules were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the first error, the one fail-fast evaluation would report.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Iterates over the errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }

    /// Converts the collection to a JSON array.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// CONTRACT VIOLATION
// ============================================================================

/// Misuse of the library, raised as a panic payload.
///
/// A contract violation is never a validation outcome: it is raised at the
/// point of misuse regardless of which evaluation method is in play, and it
/// is a different payload type from the `ValidationError` /
/// `ValidationErrors` payloads of the `must*` methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ContractViolation {
    /// A rule registry was asked to append an absent checker.
    #[error("{target}: expects a checker, got none")]
    MissingChecker {
        /// Type name of the registry's subject.
        target: &'static str,
    },

    /// A length rule ran against a value without a countable shape.
    #[error("{target}: unsupported value {value}, unable to get its length")]
    Uncountable {
        /// Type name of the subject.
        target: &'static str,
        /// Debug rendering of the offending value.
        value: String,
    },

    /// A build-time message was attached before any rule was added.
    #[error("{target}: no rule to attach message {message:?} to")]
    NoRuleForMessage {
        /// Type name of the registry's subject.
        target: &'static str,
        /// The message that could not be attached.
        message: String,
    },
}

impl ContractViolation {
    /// Raises the violation as a panic carrying `self` as payload.
    #[track_caller]
    pub fn raise(self) -> ! {
        tracing::error!(violation = %self, "assert contract violation");
        std::panic::panic_any(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================
