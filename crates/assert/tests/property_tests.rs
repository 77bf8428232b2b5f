//! Property-based tests for nebula-assert.

use nebula_assert::prelude::{
    Assert, Comparable, Length, Ordered, SliceCmpRules, num, slice_cmp, string,
};
use proptest::collection::vec;
use proptest::prelude::*;

// ============================================================================
// EVALUATION: check / check_all / check_msg agree
// ============================================================================

proptest! {
    #[test]
    fn empty_registry_always_passes(n in any::<i64>(), s in ".*") {
        prop_assert!(num::<i64>().check(&n).is_ok());
        prop_assert!(num::<i64>().check_all(&n).is_empty());
        prop_assert!(string().check(&s).is_ok());
    }

    #[test]
    fn check_all_counts_each_failing_rule(n in -100i32..100) {
        let assert = num::<i32>().greater(0).less(50).not_equal(7).is_in([1, 2, 3]);
        let expected = [n > 0, n < 50, n != 7, (1..=3).contains(&n)]
            .iter()
            .filter(|ok| !**ok)
            .count();
        prop_assert_eq!(assert.check_all(&n).len(), expected);
    }

    #[test]
    fn check_is_first_of_check_all(n in -100i32..100) {
        let assert = num::<i32>().greater(0).less(50).not_equal(7);
        let all = assert.check_all(&n);
        let first = assert.check(&n).err();
        prop_assert_eq!(first.as_ref(), all.first());
    }

    #[test]
    fn check_msg_always_reports_override(n in any::<i32>()) {
        let assert = num::<i32>().is_in(Vec::<i32>::new());
        let error = assert.check_msg(&n, "X").unwrap_err();
        prop_assert_eq!(error.message.as_ref(), "X");
        prop_assert_eq!(error.code.as_ref(), "in");
    }

    #[test]
    fn evaluation_is_idempotent(s in ".{0,12}") {
        let assert = string().not_empty().runes_max(8).word();
        let first = assert.check_all(&s);
        let second = assert.check_all(&s);
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// EMPTY SETS AND RANGES
// ============================================================================

proptest! {
    #[test]
    fn empty_membership_lists(n in any::<i32>()) {
        prop_assert!(num::<i32>().is_in(Vec::<i32>::new()).check(&n).is_err());
        prop_assert!(num::<i32>().not_in(Vec::<i32>::new()).check(&n).is_ok());
        prop_assert!(num::<i32>().less_each(Vec::new()).check(&n).is_ok());
        prop_assert!(num::<i32>().less_any(Vec::new()).check(&n).is_err());
    }

    #[test]
    fn in_range_matches_inclusive_bounds(v in -50i32..50, min in -50i32..50, max in -50i32..50) {
        let in_range = num::<i32>().in_range(min, max).check(&v).is_ok();
        let not_in_range = num::<i32>().not_in_range(min, max).check(&v).is_ok();
        if min > max {
            prop_assert!(!in_range);
            prop_assert!(not_in_range);
        } else {
            prop_assert_eq!(in_range, min <= v && v <= max);
            prop_assert_eq!(not_in_range, !in_range);
        }
    }

    #[test]
    fn string_length_is_byte_count(s in ".{0,10}", min in 0i64..12, max in 0i64..12) {
        let len = i64::try_from(s.len()).unwrap();
        let ok = string().len_in_range(min, max).check(&s).is_ok();
        prop_assert_eq!(ok, min <= max && min <= len && len <= max);
    }
}

// ============================================================================
// SLICES
// ============================================================================

proptest! {
    #[test]
    fn uniques_passes_iff_no_duplicates(items in vec(0u8..16, 0..12)) {
        let mut sorted = items.clone();
        sorted.sort_unstable();
        sorted.dedup();
        let distinct = sorted.len() == items.len();
        prop_assert_eq!(slice_cmp::<u8>().uniques().check(&items).is_ok(), distinct);
    }

    #[test]
    fn uniques_reports_first_repeated_element(items in vec(0u8..8, 2..12)) {
        let first_repeat = items
            .iter()
            .enumerate()
            .find(|(i, e)| items[..*i].contains(e))
            .map(|(_, e)| e.to_string());
        let error = slice_cmp::<u8>().uniques().check(&items).err();
        prop_assert_eq!(
            error.as_ref().and_then(|e| e.param("duplicate")).map(str::to_owned),
            first_repeat
        );
    }

    #[test]
    fn contains_each_is_subset(items in vec(0u8..8, 0..8), wanted in vec(0u8..8, 0..4)) {
        let subset = wanted.iter().all(|w| items.contains(w));
        let ok = slice_cmp::<u8>().contains_each(wanted.clone()).check(&items).is_ok();
        prop_assert_eq!(ok, subset);
    }
}
