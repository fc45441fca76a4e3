//! Inclusive axis-aligned bounding boxes.

use crate::location::Location;

/// An inclusive bounding box over locations.
///
/// All four limits are inclusive, so a box with `x_min == x_max` is one
/// cell wide. [`width`](Bounds::width) and [`height`](Bounds::height) count
/// cells, i.e. `max - min + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl Bounds {
    /// Creates a box from its limits, swapping any pair given the wrong way round.
    pub fn new(x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Self {
        Self {
            x_min: x_min.min(x_max),
            x_max: x_min.max(x_max),
            y_min: y_min.min(y_max),
            y_max: y_min.max(y_max),
        }
    }

    /// The one-cell box covering `loc`.
    pub const fn at(loc: Location) -> Self {
        Self {
            x_min: loc.x,
            x_max: loc.x,
            y_min: loc.y,
            y_max: loc.y,
        }
    }

    /// The smallest box covering every location, or `None` if there are none.
    ///
    /// Works on any collection of locations, without building a grid first.
    pub fn from_locations<I>(locations: I) -> Option<Self>
    where
        I: IntoIterator<Item = Location>,
    {
        let mut iter = locations.into_iter();
        let first = Self::at(iter.next()?);
        Some(iter.fold(first, Self::include))
    }

    /// Grows the box just enough to cover `loc`.
    pub fn include(self, loc: Location) -> Self {
        Self {
            x_min: self.x_min.min(loc.x),
            x_max: self.x_max.max(loc.x),
            y_min: self.y_min.min(loc.y),
            y_max: self.y_max.max(loc.y),
        }
    }

    /// Grows the box by `margin` cells on every side.
    pub fn expand(self, margin: i64) -> Self {
        Self::new(
            self.x_min - margin,
            self.x_max + margin,
            self.y_min - margin,
            self.y_max + margin,
        )
    }

    pub fn contains(&self, loc: Location) -> bool {
        (self.x_min..=self.x_max).contains(&loc.x) && (self.y_min..=self.y_max).contains(&loc.y)
    }

    /// Number of columns covered.
    pub fn width(&self) -> i64 {
        self.x_max - self.x_min + 1
    }

    /// Number of rows covered.
    pub fn height(&self) -> i64 {
        self.y_max - self.y_min + 1
    }

    /// Every covered location, row by row from `y_min`, left to right.
    pub fn locations(&self) -> impl Iterator<Item = Location> + use<> {
        let Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        } = *self;
        (y_min..=y_max).flat_map(move |y| (x_min..=x_max).map(move |x| Location::new(x, y)))
    }
}
