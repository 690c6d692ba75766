//! Core numeric and error types.
//!
//! This module provides:
//! - `dual`: Dual number type integration with num-dual for automatic differentiation (when `num-dual-mode` feature is enabled)
//! - `error`: Structured error types for interpolation operations
//! - `scalar`: The arithmetic trait shared by `f64`, `f32` and dual numbers
//!
//! # Re-exports
//!
//! For convenience, [`InterpolationError`] and [`Scalar`] are re-exported at this module level.

#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod error;
pub mod scalar;

// Re-export commonly used types at module level
pub use error::InterpolationError;
pub use scalar::Scalar;
