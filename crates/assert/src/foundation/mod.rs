//! Core building blocks of the assertion system
//!
//! - **Checker**: [`Checker`], a single rule over a typed value
//! - **Registry**: [`Rules`], the ordered, append-only list of checkers
//! - **Traits**: [`Assert`] (fluent validators) and [`Validate`] (interop)
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ContractViolation`]
//! - **Introspection**: [`Countable`], [`ZeroValue`]
//!
//! # Evaluation modes
//!
//! A registry is evaluated either fail-fast (`check`, `check_msg`, `must`,
//! `must_msg`) or collect-all (`check_all`, `must_all`). Checkers always run
//! in insertion order; fail-fast stops at the first failure.
//!
//! ```
//! use nebula_assert::prelude::*;
//!
//! let port = num::<u16>().greater_eq(1024).not_equal(8080);
//!
//! assert!(port.check(&3000).is_ok());
//! assert_eq!(
//!     port.check(&80).unwrap_err().message,
//!     "value expects to be greater or equal than 1024, got 80",
//! );
//! assert!(port.check_all(&8080).first().is_some());
//! ```

mod check;
mod error;
mod inspect;
mod rules;
mod traits;

pub use check::{CheckResult, Checker};
pub use error::{ContractViolation, ErrorParams, ValidationError, ValidationErrors};
pub use inspect::{Countable, ZeroValue};
pub use rules::Rules;
pub use traits::{Assert, Validate};

pub(crate) use traits::with_rule;
