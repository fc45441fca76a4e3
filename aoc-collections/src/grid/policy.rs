//! How a grid answers reads of unset locations.

use std::fmt;
use std::sync::Arc;

use crate::error::GridError;
use crate::location::Location;

/// Fallible function producing the value of an unset location.
pub type DefaultFn<T> = Arc<dyn Fn(Location) -> anyhow::Result<T> + Send + Sync>;

/// The rule a [`Grid`](super::Grid) uses for locations that were never set.
#[derive(Clone)]
pub enum DefaultPolicy<T> {
    /// Unset locations are an error
    None,
    /// Unset locations read as a clone of this value
    Value(T),
    /// Unset locations read as the result of calling this function
    Func(DefaultFn<T>),
}

impl<T: Clone> DefaultPolicy<T> {
    /// Produces the value for an unset location.
    ///
    /// The function variant is called on every invocation; nothing is cached.
    pub(crate) fn resolve(&self, loc: Location) -> Result<T, GridError> {
        match self {
            DefaultPolicy::None => Err(GridError::NotFound(loc)),
            DefaultPolicy::Value(value) => Ok(value.clone()),
            DefaultPolicy::Func(f) => f(loc).map_err(GridError::DefaultFunc),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DefaultPolicy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultPolicy::None => f.write_str("None"),
            DefaultPolicy::Value(value) => f.debug_tuple("Value").field(value).finish(),
            DefaultPolicy::Func(_) => f.write_str("Func(..)"),
        }
    }
}
