//! Property-based tests for interval arithmetic
//!
//! **Feature: integer-intervals**

use aoc_collections::{Interval, Intervals};
use proptest::prelude::*;

fn interval() -> impl Strategy<Value = Interval> {
    (-50i64..50, -50i64..50).prop_map(|(a, b)| Interval::new(a, b))
}

fn intervals() -> impl Strategy<Value = Intervals> {
    prop::collection::vec(interval(), 0..8).prop_map(Intervals::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// **Property 1: Endpoints are inclusive**
    /// *For any* interval I, I contains its low and high but not low - 1 or high + 1.
    #[test]
    fn prop_endpoints_inclusive(i in interval()) {
        prop_assert!(i.contains(i.low()));
        prop_assert!(i.contains(i.high()));
        prop_assert!(!i.contains(i.low() - 1));
        prop_assert!(!i.contains(i.high() + 1));
        prop_assert_eq!(i.len(), i.values().count() as i64);
    }

    /// **Property 2: Plus covers exactly the union**
    /// *For any* intervals A and B, `A.plus(B)` contains x iff A or B does,
    /// and its members are ascending.
    #[test]
    fn prop_plus_is_union(a in interval(), b in interval(), x in -60i64..60) {
        let sum = a.plus(b);
        prop_assert_eq!(sum.contains(x), a.contains(x) || b.contains(x));
        prop_assert!(sum.as_slice().windows(2).all(|w| w[0].high() < w[1].low()));
    }

    /// **Property 3: Minus covers exactly the difference**
    /// *For any* intervals A and B, `A.minus(B)` contains x iff A does and B does not,
    /// and it has at most two fragments.
    #[test]
    fn prop_minus_is_difference(a in interval(), b in interval(), x in -60i64..60) {
        let rest = a.minus(b);
        prop_assert_eq!(rest.contains(x), a.contains(x) && !b.contains(x));
        prop_assert!(rest.as_slice().len() <= 2);
    }

    /// **Property 4: Compaction preserves coverage**
    /// *For any* list of intervals, the compacted list covers the same integers.
    #[test]
    fn prop_compact_preserves_coverage(list in intervals(), x in -60i64..60) {
        prop_assert_eq!(list.compact().contains(x), list.contains(x));
    }

    /// **Property 5: Compaction is minimal**
    /// *For any* list of intervals, compacted members are ascending and separated
    /// by at least one uncovered integer, so the summed length counts distinct integers.
    #[test]
    fn prop_compact_is_minimal(list in intervals()) {
        let compact = list.compact();
        prop_assert!(compact.as_slice().windows(2).all(|w| w[0].high() + 1 < w[1].low()));

        let distinct = (-50i64..50).filter(|&x| list.contains(x)).count() as i64;
        prop_assert_eq!(compact.len(), distinct);
        prop_assert_eq!(compact.compact(), compact);
    }
}
