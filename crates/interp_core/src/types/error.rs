//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from point storage, polynomial fitting and evaluation

use thiserror::Error;

/// Interpolation-related errors.
///
/// Provides structured error handling for interpolation operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `EmptyDataset`: Fitting requested with no sample points
/// - `DuplicateAbscissa`: Two sample points share an x-value
/// - `IndexOutOfRange`: Point access beyond the end of the set
/// - `NotBuilt`: Evaluation requested before the coefficients were computed
/// - `InvalidInput`: Mismatched coordinate slices or a non-finite abscissa
///
/// # Examples
/// ```
/// use interp_core::types::InterpolationError;
///
/// let err = InterpolationError::IndexOutOfRange { index: 5, len: 3 };
/// assert_eq!(format!("{}", err), "Index 5 out of range for point set of length 3");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// No sample points are available to interpolate.
    #[error("No data is available to interpolate")]
    EmptyDataset,

    /// Two sample points share the same x-value (division by zero in the
    /// divided-difference recurrence).
    #[error("Duplicate abscissa x = {x} at points {first} and {second}")]
    DuplicateAbscissa {
        /// Insertion index of the earlier point
        first: usize,
        /// Insertion index of the later point
        second: usize,
        /// The shared x-value
        x: f64,
    },

    /// Point index beyond the end of the point set.
    #[error("Index {index} out of range for point set of length {len}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of points in the set
        len: usize,
    },

    /// Coefficients are absent (never built, or invalidated by a mutation).
    #[error("Interpolator has not been built")]
    NotBuilt,

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
