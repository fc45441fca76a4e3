//! The sparse grid itself.

use std::collections::HashMap;
use std::fmt::{self, Write};
use std::sync::Arc;

use super::bounds::Bounds;
use super::policy::DefaultPolicy;
use crate::error::GridError;
use crate::location::Location;

/// A sparse, unbounded mapping from [`Location`] to `T`.
///
/// Only explicitly set locations are stored. Everything else is answered by
/// the grid's [`DefaultPolicy`], chosen at construction time.
///
/// # Type Parameters
///
/// - `T`: Cell value type. Reads hand out clones, so [`get`](Grid::get)
///   requires `T: Clone`.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    cells: HashMap<Location, T>,
    default: DefaultPolicy<T>,
    bounds: Option<Bounds>,
}

impl<T> Grid<T> {
    /// Creates a grid with no default: reading an unset location fails with
    /// [`GridError::NotFound`].
    ///
    /// Use this when "never set" has to stay distinguishable from any value.
    pub fn new() -> Self {
        Self::with_policy(DefaultPolicy::None)
    }

    /// Creates a grid whose unset locations read as `value`.
    pub fn with_default(value: T) -> Self {
        Self::with_policy(DefaultPolicy::Value(value))
    }

    /// Creates a grid whose unset locations read as `f(location)`.
    ///
    /// `f` runs on every read of an unset location. Its result is not stored.
    /// An error from `f` is returned from [`get`](Grid::get) as
    /// [`GridError::DefaultFunc`] without being wrapped or altered.
    pub fn with_default_fn<F>(f: F) -> Self
    where
        F: Fn(Location) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        Self::with_policy(DefaultPolicy::Func(Arc::new(f)))
    }

    /// Creates an empty grid with the given default policy.
    pub fn with_policy(default: DefaultPolicy<T>) -> Self {
        Self {
            cells: HashMap::new(),
            default,
            bounds: None,
        }
    }

    pub fn policy(&self) -> &DefaultPolicy<T> {
        &self.default
    }

    /// Stores `value` at `loc`, returning whatever was stored there before.
    ///
    /// The grid's bounds grow to cover `loc`.
    pub fn set(&mut self, loc: Location, value: T) -> Option<T> {
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.include(loc),
            None => Bounds::at(loc),
        });
        self.cells.insert(loc, value)
    }

    /// The value explicitly stored at `loc`, ignoring the default policy.
    pub fn get_stored(&self, loc: Location) -> Option<&T> {
        self.cells.get(&loc)
    }

    /// Whether `loc` was explicitly set.
    pub fn is_set(&self, loc: Location) -> bool {
        self.cells.contains_key(&loc)
    }

    /// Number of explicitly set locations.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The bounding box of every explicitly set location.
    ///
    /// # Errors
    ///
    /// [`GridError::UndefinedBounds`] if nothing was ever set.
    pub fn bounds(&self) -> Result<Bounds, GridError> {
        self.bounds.ok_or(GridError::UndefinedBounds)
    }

    /// Iterates the explicitly set entries, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &T)> {
        self.cells.iter().map(|(loc, value)| (*loc, value))
    }

    /// Calls `f` on every explicitly set entry, in unspecified order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Location, &T),
    {
        for (loc, value) in &self.cells {
            f(*loc, value);
        }
    }

    /// Calls `f` on every explicitly set entry with mutable access to the value.
    ///
    /// Locations cannot change, so bounds are unaffected.
    pub fn apply<F>(&mut self, mut f: F)
    where
        F: FnMut(Location, &mut T),
    {
        for (loc, value) in &mut self.cells {
            f(*loc, value);
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Reads the value at `loc`.
    ///
    /// Returns the stored value if `loc` was set, otherwise whatever the
    /// default policy yields. Reading never changes the grid.
    ///
    /// # Errors
    ///
    /// - [`GridError::NotFound`] if `loc` is unset and there is no default
    /// - [`GridError::DefaultFunc`] if the default function failed
    pub fn get(&self, loc: Location) -> Result<T, GridError> {
        match self.cells.get(&loc) {
            Some(value) => Ok(value.clone()),
            None => self.default.resolve(loc),
        }
    }

    /// Draws the grid over its bounds, one line per row from `y_min` down.
    ///
    /// Every cell, set or not, goes through [`get`](Grid::get) and the result
    /// is handed to `cell` for formatting. An empty grid renders as an empty
    /// string.
    pub fn render<F, D>(&self, mut cell: F) -> String
    where
        F: FnMut(Result<T, GridError>) -> D,
        D: fmt::Display,
    {
        let mut out = String::new();
        let Some(bounds) = self.bounds else {
            return out;
        };
        for y in bounds.y_min..=bounds.y_max {
            for x in bounds.x_min..=bounds.x_max {
                // Writing into a String cannot fail
                let _ = write!(out, "{}", cell(self.get(Location::new(x, y))));
            }
            out.push('\n');
        }
        out
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(Location, T)> for Grid<T> {
    fn from_iter<I: IntoIterator<Item = (Location, T)>>(iter: I) -> Self {
        let mut grid = Grid::new();
        grid.extend(iter);
        grid
    }
}

impl<T> Extend<(Location, T)> for Grid<T> {
    fn extend<I: IntoIterator<Item = (Location, T)>>(&mut self, iter: I) {
        for (loc, value) in iter {
            self.set(loc, value);
        }
    }
}
