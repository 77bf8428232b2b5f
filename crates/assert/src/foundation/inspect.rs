//! Value introspection used by the length and "any" rules.
//!
//! [`Countable`] answers "how many elements does this value hold", and
//! [`ZeroValue`] answers "is this the zero value of its type" and "is this
//! absent, looking through every layer of indirection". Static impls cover
//! std types; `serde_json::Value` is the one dynamically shaped type, where
//! the answer depends on the variant at hand.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// COUNTABLE
// ============================================================================

/// Values with an element count.
///
/// `None` means the value has no countable shape. Length rules treat that
/// as library misuse and raise a
/// [`ContractViolation::Uncountable`](super::ContractViolation::Uncountable).
///
/// Strings count bytes, like `str::len`; the string validator has separate
/// `runes_*` rules for the char count.
pub trait Countable {
    /// Number of elements, or `None` when the value cannot be counted.
    fn count(&self) -> Option<usize>;
}

impl Countable for str {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl Countable for String {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<E> Countable for [E] {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<E, const N: usize> Countable for [E; N] {
    fn count(&self) -> Option<usize> {
        Some(N)
    }
}

impl<E> Countable for Vec<E> {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<E> Countable for VecDeque<E> {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V, S> Countable for HashMap<K, V, S> {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V> Countable for BTreeMap<K, V> {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<E, S> Countable for HashSet<E, S> {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<E> Countable for BTreeSet<E> {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T: Countable + ?Sized> Countable for &T {
    fn count(&self) -> Option<usize> {
        (**self).count()
    }
}

impl<T: Countable + ?Sized> Countable for Box<T> {
    fn count(&self) -> Option<usize> {
        (**self).count()
    }
}

/// Strings count bytes, arrays count items, objects count keys. Every
/// other variant is uncountable.
impl Countable for serde_json::Value {
    fn count(&self) -> Option<usize> {
        match self {
            Self::String(s) => Some(s.len()),
            Self::Array(items) => Some(items.len()),
            Self::Object(map) => Some(map.len()),
            Self::Null | Self::Bool(_) | Self::Number(_) => None,
        }
    }
}

/// Queued message count.
#[cfg(feature = "channels")]
impl<T> Countable for tokio::sync::mpsc::Receiver<T> {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

#[cfg(feature = "channels")]
impl<T> Countable for tokio::sync::mpsc::UnboundedReceiver<T> {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

// ============================================================================
// ZERO VALUE
// ============================================================================

/// Zero-value and deep-nil introspection for the "any" validator.
///
/// - `is_zero_value`: the value equals its type's zero value (`0`, `false`,
///   `""`, an empty collection, `None`, ...).
/// - `is_nil_deep`: the value is absent, looking through every wrapper.
///   Plain values are never nil; `Option` is nil when `None` or when its
///   content is nil-deep; `Box` / `Rc` / `Arc` are nil when their content is.
///   So `Some(None::<i32>)` and `Box::new(None::<i32>)` are both nil-deep.
///
/// Implement it for your own types with
/// [`zero_value_by_default!`](crate::zero_value_by_default) or by hand.
pub trait ZeroValue {
    /// Returns true if the value is its type's zero value.
    fn is_zero_value(&self) -> bool;

    /// Returns true if the value is absent at any depth of indirection.
    fn is_nil_deep(&self) -> bool {
        false
    }
}

macro_rules! zero_value_eq {
    ($zero:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl ZeroValue for $ty {
                fn is_zero_value(&self) -> bool {
                    *self == $zero
                }
            }
        )+
    };
}

zero_value_eq!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
zero_value_eq!(0.0 => f32, f64);
zero_value_eq!(false => bool);
zero_value_eq!('\0' => char);
zero_value_eq!(Duration::ZERO => Duration);

impl ZeroValue for () {
    fn is_zero_value(&self) -> bool {
        true
    }
}

impl ZeroValue for str {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl ZeroValue for String {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! zero_value_empty {
    ($([$($generics:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> ZeroValue for $ty {
                fn is_zero_value(&self) -> bool {
                    self.is_empty()
                }
            }
        )+
    };
}

zero_value_empty!(
    [E] [E],
    [E] Vec<E>,
    [E] VecDeque<E>,
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
    [E, S] HashSet<E, S>,
    [E] BTreeSet<E>,
);

/// An array is zero when every element is.
impl<E: ZeroValue, const N: usize> ZeroValue for [E; N] {
    fn is_zero_value(&self) -> bool {
        self.iter().all(ZeroValue::is_zero_value)
    }
}

impl<T: ZeroValue> ZeroValue for Option<T> {
    fn is_zero_value(&self) -> bool {
        self.is_none()
    }

    fn is_nil_deep(&self) -> bool {
        self.as_ref().is_none_or(ZeroValue::is_nil_deep)
    }
}

macro_rules! zero_value_pointer {
    ($($ptr:ident),+) => {
        $(
            /// Never zero, since it always points somewhere; nil-deep when
            /// the pointee is.
            impl<T: ZeroValue + ?Sized> ZeroValue for $ptr<T> {
                fn is_zero_value(&self) -> bool {
                    false
                }

                fn is_nil_deep(&self) -> bool {
                    (**self).is_nil_deep()
                }
            }
        )+
    };
}

zero_value_pointer!(Box, Rc, Arc);

impl<T: ZeroValue + ?Sized> ZeroValue for &T {
    fn is_zero_value(&self) -> bool {
        (**self).is_zero_value()
    }

    fn is_nil_deep(&self) -> bool {
        (**self).is_nil_deep()
    }
}

impl ZeroValue for chrono::TimeDelta {
    fn is_zero_value(&self) -> bool {
        self.is_zero()
    }
}

/// The zero instant is the UNIX epoch, the `Default` of `DateTime<Utc>`.
impl ZeroValue for chrono::DateTime<chrono::Utc> {
    fn is_zero_value(&self) -> bool {
        *self == Self::default()
    }
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` are zero; only `null` is nil.
impl ZeroValue for serde_json::Value {
    fn is_zero_value(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Number(n) => n.as_f64() == Some(0.0),
            Self::String(s) => s.is_empty(),
            Self::Array(items) => items.is_empty(),
            Self::Object(map) => map.is_empty(),
        }
    }

    fn is_nil_deep(&self) -> bool {
        self.is_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ========================================================================
    // Countable
    // ========================================================================

    #[test]
    fn test_count_std_types() {
        assert_eq!("héllo".count(), Some(6));
        assert_eq!(vec![1, 2, 3].count(), Some(3));
        assert_eq!([0u8; 4].count(), Some(4));
        assert_eq!(HashMap::<i32, i32>::new().count(), Some(0));
        assert_eq!(BTreeSet::from([1, 2]).count(), Some(2));
        assert_eq!((&"abc").count(), Some(3));
        assert_eq!(Box::new(vec![1]).count(), Some(1));
    }

    #[test]
    fn test_count_json_depends_on_variant() {
        assert_eq!(json!("ab").count(), Some(2));
        assert_eq!(json!([1, 2, 3]).count(), Some(3));
        assert_eq!(json!({"a": 1}).count(), Some(1));
        assert_eq!(json!(1).count(), None);
        assert_eq!(json!(null).count(), None);
        assert_eq!(json!(true).count(), None);
    }

    // ========================================================================
    // Zero value
    // ========================================================================

    #[test]
    fn test_zero_scalars() {
        assert!(0i32.is_zero_value());
        assert!(!1u64.is_zero_value());
        assert!(0.0f64.is_zero_value());
        assert!(!0.1f32.is_zero_value());
        assert!(false.is_zero_value());
        assert!(!true.is_zero_value());
        assert!("".is_zero_value());
        assert!(!" ".is_zero_value());
        assert!(!"0".is_zero_value());
        assert!(Duration::ZERO.is_zero_value());
    }

    #[test]
    fn test_zero_arrays_and_collections() {
        assert!([0i32; 0].is_zero_value());
        assert!([0i32; 1].is_zero_value());
        assert!(![1i32].is_zero_value());
        assert!(Vec::<i32>::new().is_zero_value());
        assert!(!vec![0].is_zero_value());
    }

    #[test]
    fn test_zero_wrappers() {
        assert!(None::<i32>.is_zero_value());
        assert!(!Some(0).is_zero_value());
        assert!(!Box::new(0).is_zero_value());
        assert!((&0i32).is_zero_value());
    }

    #[test]
    fn test_zero_time() {
        assert!(chrono::TimeDelta::zero().is_zero_value());
        assert!(chrono::DateTime::<chrono::Utc>::default().is_zero_value());
        assert!(!chrono::Utc::now().is_zero_value());
    }

    // ========================================================================
    // Nil deep
    // ========================================================================

    #[test]
    fn test_plain_values_are_never_nil() {
        assert!(!0i32.is_nil_deep());
        assert!(!"".is_nil_deep());
        assert!(!false.is_nil_deep());
        assert!(![0i32; 1].is_nil_deep());
        assert!(!Vec::<i32>::new().is_nil_deep());
    }

    #[test]
    fn test_nil_deep_looks_through_wrappers() {
        assert!(None::<i32>.is_nil_deep());
        assert!(Some(None::<i32>).is_nil_deep());
        assert!(Some(Some(None::<i32>)).is_nil_deep());
        assert!(!Some(Some(0)).is_nil_deep());
        assert!(Box::new(None::<i32>).is_nil_deep());
        assert!(Arc::new(Some(Rc::new(None::<i32>))).is_nil_deep());
        assert!(!Rc::new(0).is_nil_deep());
    }

    #[test]
    fn test_json_zero_and_nil() {
        assert!(json!(null).is_nil_deep());
        assert!(!json!(0).is_nil_deep());
        assert!(json!(0).is_zero_value());
        assert!(json!("").is_zero_value());
        assert!(!json!({"a": null}).is_zero_value());
    }
}
