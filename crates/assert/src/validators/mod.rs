//! Built-in validators
//!
//! Each validator is a builder over one input type, created by a
//! constructor function and extended by chaining rule methods. Which rule
//! families a validator offers is decided by the mixin traits it implements.
//!
//! | Constructor | Input | Rule families |
//! |---|---|---|
//! | [`boolean`] | `bool` | comparable, custom |
//! | [`num`] | integers and floats | comparable, ordered, custom |
//! | [`string`], [`string_with`] | `str` | comparable, length, string, custom |
//! | [`time`] | `DateTime<Tz>` | comparable, ordered, custom |
//! | [`duration`], [`time_delta`] | `Duration`, `TimeDelta` | comparable, ordered, custom |
//! | [`cmp`] | any `PartialEq` | comparable, custom |
//! | [`ord`], [`ord_by`] | any type with a comparator | comparable, ordered, custom |
//! | [`slice`] | `[E]` | length, slice, custom |
//! | [`slice_cmp`] | `[E]`, `E: PartialEq` | length, slice, slice membership, custom |
//! | [`any`] | any type | zero-ness, custom, length if countable |

mod any;
mod boolean;
mod duration;
mod generic;
mod numeric;
mod pattern;
mod slice;
mod string;
mod time;

// ============================================================================
// RE-EXPORTS: Scalars
// ============================================================================

pub use boolean::{BoolAssert, boolean};
pub use duration::{DurationAssert, DurationLike, duration, time_delta};
pub use numeric::{NumAssert, Numeric, num};
pub use time::{TimeAssert, time};

// ============================================================================
// RE-EXPORTS: Strings
// ============================================================================

pub use pattern::{NUMERIC_PATTERN, PatternConfig, PatternError, Patterns, WORD_PATTERN};
pub use string::{StringAssert, string, string_with};

// ============================================================================
// RE-EXPORTS: Generic and collections
// ============================================================================

pub use any::{AnyAssert, any};
pub use generic::{CmpAssert, OrdAssert, cmp, ord, ord_by};
pub use slice::{SliceAssert, SliceCmpAssert, slice, slice_cmp};
