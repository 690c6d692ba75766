//! Interpolation methods for numerical computation.
//!
//! This module provides Newton divided-difference interpolation, with full
//! support for automatic differentiation through generic `T: Scalar` type
//! parameters.
//!
//! ## Building Blocks
//!
//! - [`Point`] / [`PointSet`]: Ordered, append-only sample storage
//! - [`NewtonInterpolator`]: Minimal-degree polynomial through every sample,
//!   stored as divided-difference coefficients and evaluated in Newton form
//!
//! ## Core Trait
//!
//! Fitted interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: Return the range spanned by the samples
//!
//! ## AD Compatibility
//!
//! All types are generic over `T: interp_core::types::Scalar`, enabling use with:
//! - `f64`: Standard floating-point computation
//! - `Dual64`: Automatic differentiation via num-dual
//!
//! ## Example
//!
//! ```
//! use interp_core::math::interpolators::{Interpolator, NewtonInterpolator, PointSet};
//!
//! let mut points: PointSet<f64> = PointSet::new();
//! points.push(0.0, 0.0);
//! points.push(1.0, 1.0);
//! points.push(2.0, 4.0);
//!
//! let mut interp = NewtonInterpolator::new(points);
//! interp.build().unwrap();
//! assert_eq!(interp.domain(), (0.0, 2.0));
//!
//! let y = interp.interpolate(1.5).unwrap();
//! assert!((y - 2.25).abs() < 1e-10);
//! ```

mod newton;
mod point_set;
mod traits;


// Re-export public types at module level
pub use newton::NewtonInterpolator;
pub use point_set::{Point, PointSet};
pub use traits::Interpolator;
