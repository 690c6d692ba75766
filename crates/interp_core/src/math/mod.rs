//! Numerical methods.
//!
//! - `interpolators`: Sample storage and Newton polynomial interpolation

pub mod interpolators;
