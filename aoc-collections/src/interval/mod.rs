//! Closed integer intervals and collections of them
//!
//! An [`Interval`] is the inclusive range `[low, high]` of integers. Its
//! [`len`](Interval::len) counts integers, so `[3,3]` has length 1.
//!
//! [`Intervals`] is a plain ordered list. Nothing is normalized on insert:
//! members may overlap and appear in any order until
//! [`compact`](Intervals::compact) is called, which sorts and merges them
//! into the smallest equivalent ascending list.
//!
//! # Example
//!
//! ```rust
//! use aoc_collections::{Interval, Intervals};
//!
//! let seeds: Intervals = [Interval::new(79, 92), Interval::new(55, 67), Interval::new(60, 80)]
//!     .into_iter()
//!     .collect();
//!
//! let compact = seeds.compact();
//! assert_eq!(compact.as_slice(), &[Interval::new(55, 92)]);
//! assert_eq!(compact.len(), 38);
//!
//! let mapped = Interval::new(55, 92).minus(Interval::new(60, 70));
//! assert_eq!(mapped.as_slice(), &[Interval::new(55, 59), Interval::new(71, 92)]);
//! ```

mod intervals;

pub use intervals::Intervals;

use std::fmt;
use std::ops::RangeInclusive;

/// The inclusive range of integers `[low, high]`, with `low <= high`.
///
/// Intervals order by `low` first, then by `high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    low: i64,
    high: i64,
}

impl Interval {
    /// Creates the interval between `a` and `b`, in whichever order they come.
    pub const fn new(a: i64, b: i64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub const fn low(&self) -> i64 {
        self.low
    }

    pub const fn high(&self) -> i64 {
        self.high
    }

    pub const fn contains(&self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Number of integers covered, `high - low + 1`.
    pub const fn len(&self) -> i64 {
        self.high - self.low + 1
    }

    /// Whether the two intervals share at least one integer.
    pub const fn overlaps(&self, other: &Interval) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    /// The integers covered by both intervals, if any.
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        self.overlaps(other).then(|| Interval {
            low: self.low.max(other.low),
            high: self.high.min(other.high),
        })
    }

    /// Union of two intervals.
    ///
    /// Strictly separated intervals come back as two members, lower one
    /// first. Anything else, including intervals sharing only an endpoint,
    /// merges into `[min(lows), max(highs)]`.
    pub fn plus(self, other: Interval) -> Intervals {
        if self.high < other.low {
            Intervals::from(vec![self, other])
        } else if other.high < self.low {
            Intervals::from(vec![other, self])
        } else {
            Intervals::from(vec![Interval {
                low: self.low.min(other.low),
                high: self.high.max(other.high),
            }])
        }
    }

    /// Integers of `self` that are not in `other`.
    ///
    /// - disjoint: `self` unchanged
    /// - `other` strictly inside `self`: the left and right remainders
    /// - partial overlap: the one remaining fragment
    /// - `other` covers `self`: no fragments at all
    pub fn minus(self, other: Interval) -> Intervals {
        if !self.overlaps(&other) {
            return Intervals::from(vec![self]);
        }

        let mut rest = Intervals::new();
        if other.low > self.low {
            rest.push(Interval {
                low: self.low,
                high: other.low - 1,
            });
        }
        if other.high < self.high {
            rest.push(Interval {
                low: other.high + 1,
                high: self.high,
            });
        }
        rest
    }

    /// Every covered integer, ascending.
    pub fn values(&self) -> RangeInclusive<i64> {
        self.low..=self.high
    }
}

impl From<RangeInclusive<i64>> for Interval {
    fn from(range: RangeInclusive<i64>) -> Self {
        Interval::new(*range.start(), *range.end())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.low, self.high)
    }
}
