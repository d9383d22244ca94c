//! Error types for the resa library.
//!
//! This module provides the error hierarchy for all operations in the
//! resa library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a resa error.
///
/// # Examples
///
/// ```
/// use resa::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(16)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the resa library.
///
/// This enum encompasses all possible error conditions that can occur
/// during reservation and routing operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A location index outside the route graph was provided.
    #[error("unknown location index {index}: graph has {count} locations")]
    UnknownLocation {
        /// The out-of-range index.
        index: usize,
        /// The number of locations in the graph.
        count: usize,
    },

    /// No path connects the two requested locations.
    #[error("no route exists between {from} and {to}")]
    RouteUnreachable {
        /// Name of the origin location.
        from: String,
        /// Name of the destination location.
        to: String,
    },

    /// The requested capacity is below the current occupancy.
    #[error("cannot shrink capacity to {requested}: {occupied} slot(s) occupied")]
    CapacityShrink {
        /// The requested capacity.
        requested: u32,
        /// The number of currently occupied slots.
        occupied: u32,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates an unreachable route.
    ///
    /// # Examples
    ///
    /// ```
    /// use resa::Error;
    ///
    /// let err = Error::RouteUnreachable {
    ///     from: "Delhi".to_string(),
    ///     to: "Mumbai".to_string(),
    /// };
    /// assert!(err.is_unreachable());
    /// ```
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::RouteUnreachable { .. })
    }

    /// Check if error indicates an out-of-range location index.
    ///
    /// # Examples
    ///
    /// ```
    /// use resa::Error;
    ///
    /// let err = Error::UnknownLocation { index: 9, count: 6 };
    /// assert!(err.is_unknown_location());
    /// ```
    #[must_use]
    pub fn is_unknown_location(&self) -> bool {
        matches!(self, Self::UnknownLocation { .. })
    }
}
