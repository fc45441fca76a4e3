//! Property-based tests for Set algebra
//!
//! **Feature: generic-set**

use aoc_collections::Set;
use proptest::prelude::*;

fn small_values() -> impl Strategy<Value = Vec<i16>> {
    prop::collection::vec(-20i16..20, 0..30)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// **Property 1: Union membership**
    /// *For any* sets A and B, `A.union(B)` contains x iff A or B contains x.
    #[test]
    fn prop_union_membership(a in small_values(), b in small_values(), x in -25i16..25) {
        let a = Set::from_values(a);
        let b = Set::from_values(b);
        prop_assert_eq!(a.union(&b).contains(&x), a.contains(&x) || b.contains(&x));
    }

    /// **Property 2: Intersection membership**
    /// *For any* sets A and B, `A.intersect(B)` contains x iff both contain x.
    #[test]
    fn prop_intersect_membership(a in small_values(), b in small_values(), x in -25i16..25) {
        let a = Set::from_values(a);
        let b = Set::from_values(b);
        prop_assert_eq!(a.intersect(&b).contains(&x), a.contains(&x) && b.contains(&x));
    }

    /// **Property 3: Subtraction membership**
    /// *For any* sets A and B, `A.subtract(B)` contains x iff A does and B does not.
    #[test]
    fn prop_subtract_membership(a in small_values(), b in small_values(), x in -25i16..25) {
        let a = Set::from_values(a);
        let b = Set::from_values(b);
        prop_assert_eq!(a.subtract(&b).contains(&x), a.contains(&x) && !b.contains(&x));
    }

    /// **Property 4: Add is idempotent**
    /// *For any* set A and value v, adding v twice equals adding it once.
    #[test]
    fn prop_add_idempotent(a in small_values(), v in -25i16..25) {
        let mut once = Set::from_values(a.clone());
        once.add(v);
        let mut twice = Set::from_values(a);
        twice.add(v).add(v);

        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once, twice);
    }

    /// **Property 5: Length counts distinct values**
    /// *For any* list of values, the set built from it has one entry per distinct value.
    #[test]
    fn prop_len_counts_distinct(values in small_values()) {
        let mut distinct = values.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(Set::from_values(values).len(), distinct.len());
    }

    /// **Property 6: Remove then contains**
    /// *For any* set A and value v, after removing v the set no longer contains it
    /// and every other member is kept.
    #[test]
    fn prop_remove(a in small_values(), v in -25i16..25) {
        let original = Set::from_values(a);
        let mut removed = original.clone();
        removed.remove(&v);

        prop_assert!(!removed.contains(&v));
        prop_assert_eq!(removed.len() + usize::from(original.contains(&v)), original.len());
    }
}
