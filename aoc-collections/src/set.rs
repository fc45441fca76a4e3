//! Generic unordered set with set algebra

use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;
use std::ops::ControlFlow;

/// An unordered collection of unique values.
///
/// Iteration order is unspecified and must not be relied on. The algebraic
/// operations ([`intersect`](Set::intersect), [`union`](Set::union),
/// [`subtract`](Set::subtract)) leave both operands untouched and return a
/// new set.
///
/// # Example
///
/// ```
/// use aoc_collections::Set;
///
/// let mut seen = Set::from_values([1, 2, 3]);
/// seen.add(3).add(4).remove(&1);
///
/// let other = Set::from_values([3, 4, 5]);
/// assert_eq!(seen.intersect(&other), Set::from_values([3, 4]));
/// assert_eq!(seen.union(&other).len(), 4);
/// assert_eq!(seen.subtract(&other), Set::from_values([2]));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    contents: HashSet<T>,
}

impl<T> Set<T> {
    /// Creates a new empty set.
    pub fn new() -> Self {
        Self {
            contents: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Returns an iterator over the values, in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.contents.iter()
    }

    /// Calls `visitor` once per value until it returns `Break`.
    ///
    /// Returns the `Break` value if the visit was cut short, `Continue(())`
    /// if every value was seen.
    pub fn visit<B, F>(&self, visitor: F) -> ControlFlow<B>
    where
        F: FnMut(&T) -> ControlFlow<B>,
    {
        self.contents.iter().try_for_each(visitor)
    }
}

impl<T: Eq + Hash> Set<T> {
    /// Creates a set holding each distinct value of `values` once.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }

    /// Adds a value. Adding a value that is already present changes nothing.
    pub fn add(&mut self, value: T) -> &mut Self {
        self.contents.insert(value);
        self
    }

    /// Removes a value. Removing an absent value changes nothing.
    pub fn remove(&mut self, value: &T) -> &mut Self {
        self.contents.remove(value);
        self
    }

    pub fn contains(&self, value: &T) -> bool {
        self.contents.contains(value)
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Values present in both `self` and `other`.
    pub fn intersect(&self, other: &Set<T>) -> Set<T> {
        self.contents.intersection(&other.contents).cloned().collect()
    }

    /// Values present in either `self` or `other`.
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        self.contents.union(&other.contents).cloned().collect()
    }

    /// Values present in `self` but not in `other`.
    pub fn subtract(&self, other: &Set<T>) -> Set<T> {
        self.contents.difference(&other.contents).cloned().collect()
    }

    /// Copies the values out into a `Vec`, in unspecified order.
    pub fn values(&self) -> Vec<T> {
        self.contents.iter().cloned().collect()
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.contents == other.contents
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            contents: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.contents.extend(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.contents.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.contents.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for value in &self.contents {
            write!(f, " {value}")?;
        }
        f.write_str(" >")
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.contents).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collapses_duplicates() {
        let set = Set::from_values([1, 2, 2, 3, 1]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&1) && set.contains(&2) && set.contains(&3));
    }

    #[test]
    fn test_empty_set() {
        let set: Set<i32> = Set::new();
        assert!(set.is_empty());
        assert!(!set.contains(&0));
        assert_eq!(set.to_string(), "< >");
    }

    #[test]
    fn test_add_is_idempotent_and_chains() {
        let mut set = Set::new();
        set.add("a").add("a").add("b");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set = Set::from_values([1, 2]);
        set.remove(&7);
        assert_eq!(set, Set::from_values([1, 2]));
        set.remove(&1).remove(&1);
        assert_eq!(set, Set::from_values([2]));
    }

    #[test]
    fn test_algebra_leaves_operands_untouched() {
        let a = Set::from_values([1, 2, 3]);
        let b = Set::from_values([2, 3, 4]);

        assert_eq!(a.intersect(&b), Set::from_values([2, 3]));
        assert_eq!(a.union(&b), Set::from_values([1, 2, 3, 4]));
        assert_eq!(a.subtract(&b), Set::from_values([1]));
        assert_eq!(b.subtract(&a), Set::from_values([4]));

        assert_eq!(a, Set::from_values([1, 2, 3]));
        assert_eq!(b, Set::from_values([2, 3, 4]));
    }

    #[test]
    fn test_visit_sees_every_value_once() {
        let set = Set::from_values(0..10);
        let mut seen = Vec::new();
        let flow = set.visit(|v| {
            seen.push(*v);
            ControlFlow::<()>::Continue(())
        });
        assert!(flow.is_continue());
        seen.sort();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_visit_stops_on_break() {
        let set = Set::from_values(0..10);
        let mut visited = 0;
        let flow = set.visit(|v| {
            visited += 1;
            if visited == 3 {
                ControlFlow::Break(*v)
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(visited, 3);
        assert!(matches!(flow, ControlFlow::Break(v) if set.contains(&v)));
    }

    #[test]
    fn test_display_single() {
        assert_eq!(Set::from_values([42]).to_string(), "< 42 >");
    }

    #[test]
    fn test_values_and_into_iter() {
        let set = Set::from_values(["x", "y"]);
        let mut values = set.values();
        values.sort();
        assert_eq!(values, vec!["x", "y"]);

        let mut owned: Vec<_> = set.into_iter().collect();
        owned.sort();
        assert_eq!(owned, vec!["x", "y"]);
    }
}
