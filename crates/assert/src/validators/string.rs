//! String validator

use regex::Regex;

use super::pattern::Patterns;
use crate::foundation::{Rules, ValidationError, with_rule};
use crate::macros::assert_type;
use crate::mixins::{Comparable, CountBound, Custom, Length, Measure};

assert_type! {
    /// Rules for string slices: equality, byte length, affixes, substrings,
    /// char counts and patterns.
    ///
    /// ```
    /// use nebula_assert::prelude::*;
    ///
    /// let username = string().not_empty().runes_max(16).word();
    ///
    /// assert!(username.check("grace-hopper").is_ok());
    /// assert!(username.check("").is_err());
    /// assert!(username.check("x_x").is_err());
    /// ```
    pub struct StringAssert for str {
        patterns: Option<Patterns>,
    };
}

impl Comparable<str> for StringAssert {}
impl Length<str> for StringAssert {}
impl Custom<str> for StringAssert {}

/// Starts an empty string validator using the process-wide patterns.
#[must_use]
pub fn string() -> StringAssert {
    StringAssert {
        rules: Rules::new(),
        patterns: None,
    }
}

/// Starts an empty string validator pinned to `patterns`.
#[must_use]
pub fn string_with(patterns: Patterns) -> StringAssert {
    StringAssert {
        rules: Rules::new(),
        patterns: Some(patterns),
    }
}

fn owned_all<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl StringAssert {
    fn rule<P, D>(self, code: &'static str, pass: P, describe: D) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
        D: Fn(&str) -> String + Send + Sync + 'static,
    {
        with_rule(self, move |v: &str| {
            if pass(v) {
                Ok(())
            } else {
                Err(ValidationError::new(code, describe(v)))
            }
        })
    }

    fn runes(self, bound: CountBound) -> Self {
        with_rule(self, move |v: &str| {
            bound.check(Measure::Runes, v, v.chars().count())
        })
    }

    fn matches(self, code: &'static str, pattern: Regex) -> Self {
        let shown = pattern.as_str().to_owned();
        self.rule(
            code,
            move |v| pattern.is_match(v),
            move |v| format!("value expects to be matched to regexp {shown}, got {v:?}"),
        )
    }

    // ========================================================================
    // Emptiness
    // ========================================================================

    /// Value expects to be `""`. Same as `equal("")`.
    pub fn empty(self) -> Self {
        self.equal("")
    }

    /// Value expects not to be `""`. Same as `not_equal("")`.
    pub fn not_empty(self) -> Self {
        self.not_equal("")
    }

    // ========================================================================
    // Prefix
    // ========================================================================

    /// Value expects to start with `prefix`. An empty prefix always passes.
    pub fn prefix_eq(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let shown = format!("{prefix:?}");
        self.rule(
            "prefix_eq",
            move |v| v.starts_with(prefix.as_str()),
            move |v| format!("value expects to have prefix equal to {shown}, got {v:?}"),
        )
    }

    /// Value expects not to start with `prefix`. An empty prefix always fails.
    pub fn prefix_not_eq(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let shown = format!("{prefix:?}");
        self.rule(
            "prefix_not_eq",
            move |v| !v.starts_with(prefix.as_str()),
            move |v| format!("value expects to have prefix not equal to {shown}, got {v:?}"),
        )
    }

    /// Value expects to start with one of `prefixes`. No prefixes always fails.
    pub fn prefix_in<I>(self, prefixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let prefixes = owned_all(prefixes);
        let shown = format!("{prefixes:?}");
        self.rule(
            "prefix_in",
            move |v| prefixes.iter().any(|p| v.starts_with(p.as_str())),
            move |v| format!("value expects to have any of {shown} prefixes, got {v:?}"),
        )
    }

    /// Value expects to start with none of `prefixes`. No prefixes always passes.
    pub fn prefix_not_in<I>(self, prefixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let prefixes = owned_all(prefixes);
        let shown = format!("{prefixes:?}");
        self.rule(
            "prefix_not_in",
            move |v| !prefixes.iter().any(|p| v.starts_with(p.as_str())),
            move |v| format!("value expects to have none of {shown} prefixes, got {v:?}"),
        )
    }

    // ========================================================================
    // Suffix
    // ========================================================================

    /// Value expects to end with `suffix`. An empty suffix always passes.
    pub fn suffix_eq(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let shown = format!("{suffix:?}");
        self.rule(
            "suffix_eq",
            move |v| v.ends_with(suffix.as_str()),
            move |v| format!("value expects to have suffix equal to {shown}, got {v:?}"),
        )
    }

    /// Value expects not to end with `suffix`. An empty suffix always fails.
    pub fn suffix_not_eq(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let shown = format!("{suffix:?}");
        self.rule(
            "suffix_not_eq",
            move |v| !v.ends_with(suffix.as_str()),
            move |v| format!("value expects to have suffix not equal to {shown}, got {v:?}"),
        )
    }

    /// Value expects to end with one of `suffixes`. No suffixes always fails.
    pub fn suffix_in<I>(self, suffixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let suffixes = owned_all(suffixes);
        let shown = format!("{suffixes:?}");
        self.rule(
            "suffix_in",
            move |v| suffixes.iter().any(|s| v.ends_with(s.as_str())),
            move |v| format!("value expects to have any of {shown} suffixes, got {v:?}"),
        )
    }

    /// Value expects to end with none of `suffixes`. No suffixes always passes.
    pub fn suffix_not_in<I>(self, suffixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let suffixes = owned_all(suffixes);
        let shown = format!("{suffixes:?}");
        self.rule(
            "suffix_not_in",
            move |v| !suffixes.iter().any(|s| v.ends_with(s.as_str())),
            move |v| format!("value expects to have none of {shown} suffixes, got {v:?}"),
        )
    }

    // ========================================================================
    // Substrings
    // ========================================================================

    /// Value expects to contain `needle`. An empty needle always passes.
    pub fn contains_str(self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        let shown = format!("{needle:?}");
        self.rule(
            "contains_str",
            move |v| v.contains(needle.as_str()),
            move |v| format!("value expects to contain {shown} substring, got {v:?}"),
        )
    }

    /// Value expects not to contain `needle`. An empty needle always fails.
    pub fn not_contains_str(self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        let shown = format!("{needle:?}");
        self.rule(
            "not_contains_str",
            move |v| !v.contains(needle.as_str()),
            move |v| format!("value expects to not contain {shown} substring, got {v:?}"),
        )
    }

    /// Value expects to contain at least one of `needles`.
    ///
    /// Passes when `needles` is empty.
    pub fn contains_str_any<I>(self, needles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let needles = owned_all(needles);
        let shown = format!("{needles:?}");
        self.rule(
            "contains_str_any",
            move |v| needles.is_empty() || needles.iter().any(|n| v.contains(n.as_str())),
            move |v| format!("value expects to contain any of {shown} substrings, got {v:?}"),
        )
    }

    /// Value expects to contain every one of `needles`.
    pub fn contains_str_each<I>(self, needles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let needles = owned_all(needles);
        let shown = format!("{needles:?}");
        self.rule(
            "contains_str_each",
            move |v| needles.iter().all(|n| v.contains(n.as_str())),
            move |v| format!("value expects to contain each of {shown} substrings, got {v:?}"),
        )
    }

    /// Value expects to contain none of `needles`.
    pub fn contains_str_none<I>(self, needles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let needles = owned_all(needles);
        let shown = format!("{needles:?}");
        self.rule(
            "contains_str_none",
            move |v| !needles.iter().any(|n| v.contains(n.as_str())),
            move |v| format!("value expects to contain none of {shown} substrings, got {v:?}"),
        )
    }

    // ========================================================================
    // Runes
    // ========================================================================

    /// Char count expects to be equal to `eq`.
    pub fn runes_eq(self, eq: i64) -> Self {
        self.runes(CountBound::Eq(eq))
    }

    /// Char count expects to be not equal to `not_eq`.
    pub fn runes_not_eq(self, not_eq: i64) -> Self {
        self.runes(CountBound::NotEq(not_eq))
    }

    /// Char count expects to be at least `min`.
    pub fn runes_min(self, min: i64) -> Self {
        self.runes(CountBound::Min(min))
    }

    /// Char count expects to be at most `max`.
    pub fn runes_max(self, max: i64) -> Self {
        self.runes(CountBound::Max(max))
    }

    /// Char count expects to be in `[min, max]`.
    pub fn runes_in_range(self, min: i64, max: i64) -> Self {
        self.runes(CountBound::InRange(min, max))
    }

    /// Char count expects to be outside `[min, max]`.
    pub fn runes_not_in_range(self, min: i64, max: i64) -> Self {
        self.runes(CountBound::NotInRange(min, max))
    }

    // ========================================================================
    // Patterns
    // ========================================================================

    /// Value expects to match `pattern`.
    pub fn regexp(self, pattern: Regex) -> Self {
        self.matches("regexp", pattern)
    }

    /// Value expects to be a word: ASCII letters, optionally joined by
    /// single hyphens.
    ///
    /// Uses the validator's pinned patterns, or the process-wide ones
    /// current at this call.
    pub fn word(self) -> Self {
        let pattern = self.pinned_or_current().word;
        self.matches("word", pattern)
    }

    /// Value expects to be an optionally negative integer or decimal.
    ///
    /// Uses the validator's pinned patterns, or the process-wide ones
    /// current at this call.
    pub fn numeric(self) -> Self {
        let pattern = self.pinned_or_current().numeric;
        self.matches("numeric", pattern)
    }

    fn pinned_or_current(&self) -> Patterns {
        self.patterns.clone().unwrap_or_else(Patterns::current)
    }
}
