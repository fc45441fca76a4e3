//! Shared collections for Advent of Code 2023 solutions
//!
//! Puzzle solutions keep reaching for the same handful of structures. This
//! crate collects them in one place:
//!
//! - [`Location`]: an immutable 2D integer point that doubles as a
//!   displacement vector
//! - [`Set`]: a generic unordered set with set algebra
//! - [`Grid`]: a sparse, unbounded 2D map with a configurable default policy
//!   and running [`Bounds`]
//! - [`Interval`] / [`Intervals`]: closed integer ranges with union,
//!   difference and compaction
//! - [`numeric`]: gcd/lcm and a few other small helpers
//!
//! # Quick Example
//!
//! ```
//! use aoc_collections::{Grid, Location, Set};
//!
//! let input = "#.\n.#";
//! let mut grid = Grid::with_default('.');
//! for (y, line) in input.lines().enumerate() {
//!     for (x, c) in line.chars().enumerate() {
//!         if c != '.' {
//!             grid.set(Location::new(x as i64, y as i64), c);
//!         }
//!     }
//! }
//!
//! let walls: Set<Location> = grid.iter().map(|(loc, _)| loc).collect();
//! assert_eq!(walls.len(), 2);
//! assert_eq!(grid.get(Location::new(1, 0)).unwrap(), '.');
//!
//! let bounds = grid.bounds().unwrap();
//! assert_eq!((bounds.width(), bounds.height()), (2, 2));
//! ```
//!
//! Everything here is single-threaded and synchronous. Errors are values
//! ([`GridError`]) returned to the caller; nothing in this crate panics on
//! bad input.

mod error;
mod location;
mod set;

pub mod grid;
pub mod interval;
pub mod numeric;

pub use error::GridError;
pub use grid::{Bounds, Grid};
pub use interval::{Interval, Intervals};
pub use location::{EAST, Location, NORTH, SOUTH, WEST};
pub use set::Set;
