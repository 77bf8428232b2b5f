//! Slice validators

use std::fmt::Debug;

use crate::foundation::Rules;
use crate::macros::assert_type;
use crate::mixins::{Custom, Length, SliceCmpRules, SliceRules};

assert_type! {
    /// Length, emptiness and element-predicate rules for slices of any
    /// `Debug` element.
    pub struct SliceAssert<E> for [E] where { E: Debug + 'static };
}

impl<E: Debug + 'static> Length<[E]> for SliceAssert<E> {}
impl<E: Debug + 'static> SliceRules<E> for SliceAssert<E> {}
impl<E: Debug + 'static> Custom<[E]> for SliceAssert<E> {}

/// Starts an empty validator for `[E]`.
#[must_use]
pub fn slice<E: Debug + 'static>() -> SliceAssert<E> {
    SliceAssert { rules: Rules::new() }
}

assert_type! {
    /// Everything [`SliceAssert`] offers, plus membership and uniqueness
    /// rules for elements with equality.
    ///
    /// ```
    /// use nebula_assert::prelude::*;
    ///
    /// let tags = slice_cmp::<&str>()
    ///     .len_max(3)
    ///     .uniques()
    ///     .contains_none(["admin", "root"]);
    ///
    /// assert!(tags.check(&["rust", "cli"][..]).is_ok());
    /// assert!(tags.check(&["rust", "rust"][..]).is_err());
    /// assert!(tags.check(&["root"][..]).is_err());
    /// ```
    pub struct SliceCmpAssert<E> for [E] where { E: PartialEq + Debug + Send + Sync + 'static };
}

impl<E: PartialEq + Debug + Send + Sync + 'static> Length<[E]> for SliceCmpAssert<E> {}
impl<E: PartialEq + Debug + Send + Sync + 'static> SliceRules<E> for SliceCmpAssert<E> {}
impl<E: PartialEq + Debug + Send + Sync + 'static> SliceCmpRules<E> for SliceCmpAssert<E> {}
impl<E: PartialEq + Debug + Send + Sync + 'static> Custom<[E]> for SliceCmpAssert<E> {}

/// Starts an empty validator for `[E]` with comparable elements.
#[must_use]
pub fn slice_cmp<E: PartialEq + Debug + Send + Sync + 'static>() -> SliceCmpAssert<E> {
    SliceCmpAssert { rules: Rules::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Assert;

    #[test]
    fn test_element_predicates_on_floats() {
        let assert = slice::<f64>()
            .len_in_range(1, 3)
            .element_each("finite", |x| x.is_finite());
        assert!(assert.check(&[1.5, -2.0][..]).is_ok());
        assert!(assert.check(&[f64::NAN][..]).is_err());
        assert!(assert.check(&[][..]).is_err());
    }

    #[test]
    fn test_slice_cmp_accepts_floats() {
        let weights = slice_cmp::<f64>().uniques().contains_none([0.0]);
        assert!(weights.check(&[0.25, 0.75][..]).is_ok());
        assert!(weights.check(&[0.25, 0.25][..]).is_err());
        assert!(weights.check(&[0.0][..]).is_err());
    }

    #[test]
    fn test_vec_derefs_to_slice() {
        let ids = vec![3_u32, 1, 2];
        let assert = slice_cmp::<u32>().uniques().contains(1);
        assert!(assert.check(&ids).is_ok());
    }

    #[test]
    fn test_length_message_names_the_slice() {
        let error = slice::<u8>().len_min(2).check(&[7][..]).unwrap_err();
        assert_eq!(error.code, "len_min");
        assert_eq!(error.message, "length of [7] expects to be greater or equal to 2, got 1");
    }

    #[test]
    fn test_custom_on_slice() {
        let sorted = slice::<i32>().custom(|v| {
            if v.is_sorted() {
                Ok(())
            } else {
                Err(crate::foundation::ValidationError::new("sorted", "value expects to be sorted"))
            }
        });
        assert!(sorted.check(&[1, 2, 2][..]).is_ok());
        assert_eq!(sorted.check(&[2, 1][..]).unwrap_err().code, "sorted");
    }
}
