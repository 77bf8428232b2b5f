//! # nebula-assert
//!
//! Composable, chainable value assertions with descriptive, overridable
//! error messages.
//!
//! ## Quick Start
//!
//! ```
//! use nebula_assert::prelude::*;
//!
//! let username = string()
//!     .not_empty()
//!     .runes_in_range(3, 20)
//!     .word()
//!     .msg("username must be a single word of 3 to 20 letters");
//!
//! assert!(username.check("alice").is_ok());
//!
//! let error = username.check("al").unwrap_err();
//! assert_eq!(error.code, "runes_in_range");
//! ```
//!
//! ## Evaluating
//!
//! Every validator offers three ways to run its rules, all of them in the
//! order the rules were added:
//!
//! - [`check`](foundation::Assert::check) stops at the first failure
//! - [`check_all`](foundation::Assert::check_all) collects every failure
//! - [`must`](foundation::Assert::must) panics with the first failure as payload
//!
//! The `_msg` variants replace the message of the reported failure, keeping
//! its code and nesting the original error.
//!
//! ## Building Validators
//!
//! Constructors in [`validators`] start an empty validator for one input
//! type. Rule methods come from the traits in [`mixins`], so bring them into
//! scope with the [`prelude`]. Programming mistakes in how a validator is
//! built, such as a missing custom checker, are reported as a
//! [`ContractViolation`](foundation::ContractViolation) panic rather than as
//! a validation failure.

// ValidationError is returned by value from every rule; boxing it would add
// an allocation to every failing check.
#![allow(clippy::result_large_err)]

pub mod foundation;
mod macros;
pub mod mixins;
pub mod prelude;
pub mod validators;
