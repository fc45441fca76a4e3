//! Sparse 2D grid with a configurable default policy
//!
//! A [`Grid`] stores values only at the locations that were explicitly
//! [`set`](Grid::set). Reads of any other location are answered by the grid's
//! [`DefaultPolicy`]:
//!
//! - [`Grid::new`]: no default, unset reads fail with [`GridError::NotFound`]
//! - [`Grid::with_default`]: unset reads return a clone of a constant
//! - [`Grid::with_default_fn`]: unset reads call a fallible function of the
//!   location; a failure reaches the caller unchanged as
//!   [`GridError::DefaultFunc`]
//!
//! The default is computed on demand every time. It is never written back
//! into the grid, so it affects neither [`len`](Grid::len) nor
//! [`bounds`](Grid::bounds).
//!
//! # Bounds
//!
//! [`Bounds`] is an inclusive bounding box. Width and height count cells:
//! a grid populated on `x in 0..10` has `width() == 10`, and `x_max == 9`.
//! Loops over a grid should walk `x_min..=x_max`.
//!
//! # Example: Constant default
//!
//! ```rust
//! use aoc_collections::{Grid, Location};
//!
//! let mut grid = Grid::with_default(0);
//! grid.set(Location::new(2, 3), 5);
//! grid.set(Location::new(-1, 5), 7);
//!
//! assert_eq!(grid.get(Location::new(2, 3)).unwrap(), 5);
//! assert_eq!(grid.get(Location::new(100, 100)).unwrap(), 0);
//! assert_eq!(grid.len(), 2);
//!
//! let bounds = grid.bounds().unwrap();
//! assert_eq!((bounds.x_min, bounds.x_max), (-1, 2));
//! assert_eq!((bounds.y_min, bounds.y_max), (3, 5));
//! ```
//!
//! # Example: Default function
//!
//! ```rust
//! use anyhow::bail;
//! use aoc_collections::{Grid, GridError, Location};
//!
//! let grid: Grid<char> = Grid::with_default_fn(|loc: Location| {
//!     if loc.x < 0 || loc.y < 0 {
//!         bail!("{loc} is off the map");
//!     }
//!     Ok('.')
//! });
//!
//! assert_eq!(grid.get(Location::new(4, 4)).unwrap(), '.');
//! match grid.get(Location::new(-1, 0)) {
//!     Err(GridError::DefaultFunc(e)) => assert_eq!(e.to_string(), "(-1,0) is off the map"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

mod bounds;
mod policy;
mod sparse;

pub use bounds::Bounds;
pub use policy::{DefaultFn, DefaultPolicy};
pub use sparse::Grid;
