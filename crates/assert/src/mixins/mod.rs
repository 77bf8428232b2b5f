//! Capability mixins: families of rule builders shared across validators.
//!
//! Each mixin is a trait with provided methods over [`Assert`](crate::foundation::Assert).
//! A concrete validator opts into a family with an empty `impl`, and every
//! rule method appends exactly one checker and returns the validator, so
//! rules from different families chain freely:
//!
//! ```
//! use nebula_assert::prelude::*;
//!
//! let code = string().len_eq(4).prefix_eq("A").not_in(["AAAA"]);
//!
//! assert!(code.check("AB12").is_ok());
//! assert_eq!(code.check_all("AAAA").len(), 1);
//! ```

mod comparable;
mod custom;
mod length;
mod ordered;
mod slice;

pub use comparable::Comparable;
pub use custom::Custom;
pub use length::Length;
pub use ordered::{Comparator, Ordered};
pub use slice::{SliceCmpRules, SliceRules};

pub(crate) use length::{CountBound, Measure};
