//! Error types for the collections

use crate::location::Location;
use thiserror::Error;

/// Error type for grid lookups and bounds queries
#[derive(Debug, Error)]
pub enum GridError {
    /// Nothing stored at the location and the grid has no default policy
    #[error("No value at {0} and no default configured")]
    NotFound(Location),
    /// The default function failed; the error is passed through as-is
    #[error(transparent)]
    DefaultFunc(#[from] anyhow::Error),
    /// Bounds were requested before anything was set
    #[error("Grid bounds are undefined: no location has been set")]
    UndefinedBounds,
}
