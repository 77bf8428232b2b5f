//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_assert::prelude::*;` import that brings in
//! the evaluation traits, every rule family and every built-in validator.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use nebula_assert::prelude::*;
//!
//! let port = num::<u16>().greater_eq(1024);
//! let hosts = slice_cmp::<&str>().not_empty().uniques();
//! let timeout = duration().less_eq(Duration::from_secs(30));
//!
//! assert!(port.check(&8080).is_ok());
//! assert!(hosts.check(&["a", "a"][..]).is_err());
//! assert!(timeout.validate(&Duration::from_secs(5)).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Evaluation traits and errors
// ============================================================================

pub use crate::foundation::{
    Assert, CheckResult, Checker, ContractViolation, Countable, Rules, Validate, ValidationError,
    ValidationErrors, ZeroValue,
};

// ============================================================================
// MIXINS: Rule families
// ============================================================================

pub use crate::mixins::{Comparable, Custom, Length, Ordered, SliceCmpRules, SliceRules};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    AnyAssert, BoolAssert, CmpAssert, DurationAssert, NumAssert, OrdAssert, SliceAssert,
    SliceCmpAssert, StringAssert, TimeAssert, any, boolean, cmp, duration, num, ord, ord_by,
    slice, slice_cmp, string, string_with, time, time_delta,
};
