//! Default patterns for the `word` and `numeric` string rules
//!
//! The process-wide patterns live behind a lock and can be replaced at
//! startup, e.g. from a deserialized [`PatternConfig`]. A string validator
//! captures the patterns current when a `word` / `numeric` rule is built, so
//! replacing them later never changes rules that already exist. Validators
//! created with [`string_with`](super::string_with) ignore the global state
//! entirely.

use std::sync::LazyLock;

use parking_lot::RwLock;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Letters, optionally joined by single hyphens: `Hello`, `well-known`.
pub const WORD_PATTERN: &str = r"^[A-Za-z](-?[A-Za-z]+)*$";

/// Optionally negative integer or decimal in ASCII digits: `42`, `-3.14`.
pub const NUMERIC_PATTERN: &str = r"^-?[0-9]+(\.[0-9]+)?$";

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(WORD_PATTERN).unwrap());

static NUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(NUMERIC_PATTERN).unwrap());

static CURRENT: LazyLock<RwLock<Patterns>> = LazyLock::new(|| RwLock::new(Patterns::default()));

// ============================================================================
// PATTERNS
// ============================================================================

/// Compiled patterns used by [`StringAssert::word`](super::StringAssert::word)
/// and [`StringAssert::numeric`](super::StringAssert::numeric).
#[derive(Debug, Clone)]
pub struct Patterns {
    /// Pattern for `word`.
    pub word: Regex,
    /// Pattern for `numeric`.
    pub numeric: Regex,
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            word: WORD_REGEX.clone(),
            numeric: NUMERIC_REGEX.clone(),
        }
    }
}

impl Patterns {
    /// Snapshot of the process-wide patterns.
    #[must_use]
    pub fn current() -> Self {
        CURRENT.read().clone()
    }

    /// Replaces the process-wide patterns, returning the previous ones.
    ///
    /// Rules built before the call keep the patterns they captured.
    pub fn install(patterns: Self) -> Self {
        tracing::debug!(
            word = patterns.word.as_str(),
            numeric = patterns.numeric.as_str(),
            "replacing default string patterns"
        );
        std::mem::replace(&mut *CURRENT.write(), patterns)
    }

    /// Restores the built-in process-wide patterns, returning the previous ones.
    pub fn reset() -> Self {
        Self::install(Self::default())
    }

    /// Compiles a pattern configuration.
    pub fn from_config(config: &PatternConfig) -> Result<Self, PatternError> {
        Ok(Self {
            word: compile("word", &config.word)?,
            numeric: compile("numeric", &config.numeric)?,
        })
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError::Invalid { name, source })
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Serializable pattern configuration. Missing fields fall back to the
/// built-in patterns.
///
/// ```
/// use nebula_assert::validators::{PatternConfig, Patterns};
///
/// let config: PatternConfig = serde_json::from_str(r#"{ "word": "^[a-z]+$" }"#).unwrap();
/// let patterns = Patterns::from_config(&config).unwrap();
///
/// assert!(patterns.word.is_match("lower"));
/// assert!(patterns.numeric.is_match("-1.5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Source of the `word` pattern.
    pub word: String,
    /// Source of the `numeric` pattern.
    pub numeric: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            word: WORD_PATTERN.to_owned(),
            numeric: NUMERIC_PATTERN.to_owned(),
        }
    }
}

/// A pattern configuration that does not compile.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PatternError {
    /// The named pattern is not a valid regular expression.
    #[error("invalid {name} pattern")]
    Invalid {
        /// Which pattern failed: `word` or `numeric`.
        name: &'static str,
        /// The regex compilation error.
        #[source]
        source: regex::Error,
    },
}
