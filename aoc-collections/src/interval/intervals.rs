//! Ordered lists of intervals.

use std::fmt;
use std::slice;
use std::vec;

use itertools::Itertools;

use super::Interval;

/// An ordered list of [`Interval`]s.
///
/// No invariant holds until [`compact`](Intervals::compact) is called:
/// members may overlap or be out of order. [`len`](Intervals::len) sums the
/// member lengths and only counts distinct integers on a compacted list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Intervals(Vec<Interval>);

impl Intervals {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends an interval without normalizing anything.
    pub fn push(&mut self, interval: Interval) {
        self.0.push(interval);
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, Interval> {
        self.0.iter()
    }

    /// Whether there are no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of the member lengths.
    pub fn len(&self) -> i64 {
        self.0.iter().map(Interval::len).sum()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.0.iter().any(|interval| interval.contains(value))
    }

    /// Sorts the members and merges every overlapping or contiguous pair.
    ///
    /// The result is ascending, and consecutive members are separated by at
    /// least one uncovered integer. An empty list compacts to an empty list.
    pub fn compact(&self) -> Intervals {
        self.0
            .iter()
            .copied()
            .sorted()
            .coalesce(|current, next| {
                if next.low <= current.high.saturating_add(1) {
                    Ok(Interval {
                        low: current.low,
                        high: current.high.max(next.high),
                    })
                } else {
                    Err((current, next))
                }
            })
            .collect()
    }

    /// The compacted union of both lists.
    pub fn add(&self, other: &Intervals) -> Intervals {
        self.0
            .iter()
            .chain(other.iter())
            .copied()
            .collect::<Intervals>()
            .compact()
    }

    /// Removes the integers of `other` from every member, keeping order.
    pub fn minus(&self, other: Interval) -> Intervals {
        self.0
            .iter()
            .flat_map(|interval| interval.minus(other))
            .collect()
    }

    /// Every covered integer, member by member.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().flat_map(Interval::values)
    }
}

impl From<Vec<Interval>> for Intervals {
    fn from(intervals: Vec<Interval>) -> Self {
        Self(intervals)
    }
}

impl FromIterator<Interval> for Intervals {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Interval> for Intervals {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Intervals {
    type Item = Interval;
    type IntoIter = vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Intervals {
    type Item = &'a Interval;
    type IntoIter = slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Intervals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(" "))
    }
}
