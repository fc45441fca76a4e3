//! 2D integer locations and displacement vectors

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Unit step towards negative y (up, when rows grow downwards)
pub const NORTH: Location = Location::new(0, -1);
/// Unit step towards positive x
pub const EAST: Location = Location::new(1, 0);
/// Unit step towards positive y
pub const SOUTH: Location = Location::new(0, 1);
/// Unit step towards negative x
pub const WEST: Location = Location::new(-1, 0);

const ORTHO_OFFSETS: [Location; 4] = [EAST, WEST, SOUTH, NORTH];

const OFFSETS: [Location; 8] = [
    Location::new(-1, -1),
    Location::new(0, -1),
    Location::new(1, -1),
    Location::new(-1, 0),
    Location::new(1, 0),
    Location::new(-1, 1),
    Location::new(0, 1),
    Location::new(1, 1),
];

/// An immutable point on the integer plane.
///
/// The same type is used for coordinates and for displacements between
/// them: `b - a` is the step from `a` to `b`, and `a + step` moves along it.
/// Every operation returns a new value.
///
/// # Example
///
/// ```
/// use aoc_collections::{EAST, Location};
///
/// let start = Location::new(2, 3);
/// let end = start + EAST.scale(4);
/// assert_eq!(end, Location::new(6, 3));
/// assert_eq!((end - start).manhattan(), 4);
/// assert_eq!((end - start).unit(), EAST);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub x: i64,
    pub y: i64,
}

impl Location {
    /// The origin `(0,0)`
    pub const ORIGIN: Location = Location::new(0, 0);

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Multiplies both components by `factor`.
    pub const fn scale(self, factor: i64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Taxicab length of this vector, `|x| + |y|`.
    pub const fn manhattan(self) -> i64 {
        self.x.abs() + self.y.abs()
    }

    /// Normalizes a displacement to a unit step: each component becomes
    /// -1, 0 or 1 according to its sign.
    pub const fn unit(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// The 8 locations at Chebyshev distance 1, in row-major order.
    pub fn neighbours(self) -> [Location; 8] {
        OFFSETS.map(|offset| self + offset)
    }

    /// The 4 orthogonally adjacent locations.
    pub fn ortho_neighbours(self) -> [Location; 4] {
        ORTHO_OFFSETS.map(|offset| self + offset)
    }
}

impl From<(i64, i64)> for Location {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Add for Location {
    type Output = Location;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Location {
    type Output = Location;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Location {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Location {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<i64> for Location {
    type Output = Location;

    fn mul(self, rhs: i64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for Location {
    type Output = Location;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}
