//! # interp_core: Newton Divided-Difference Interpolation
//!
//! ## Foundation Layer Role
//!
//! interp_core is the numeric kernel of the workspace, providing:
//! - Sample storage: `PointSet` (`math::interpolators`)
//! - Polynomial fitting and evaluation: `NewtonInterpolator` (`math::interpolators`)
//! - The generic 1D `Interpolator` trait (`math::interpolators`)
//! - Error types: `InterpolationError` (`types::error`)
//! - The `Scalar` trait over `f64`, `f32` and `Dual64` (`types::scalar`)
//!
//! ## Zero Dependency Principle
//!
//! The kernel performs no I/O and no logging. It depends only on:
//! - num-traits: `Zero` for the generic `Scalar` bound
//! - num-dual: Dual number types and automatic differentiation (optional)
//! - thiserror: Structured error values
//! - serde: Serialisation support (optional)
//!
//! Loading points from text and printing reports live in the
//! `adapter_loader` and `service_cli` crates.
//!
//! ## Usage Examples
//!
//! ```rust
//! use interp_core::math::interpolators::NewtonInterpolator;
//!
//! // y = x^2 + 1
//! let mut interp = NewtonInterpolator::from_pairs(&[(0.0_f64, 1.0), (1.0, 2.0), (2.0, 5.0)]);
//! interp.build().unwrap();
//!
//! assert!((interp.evaluate(3.0).unwrap() - 10.0).abs() < 1e-12);
//! assert!((interp.evaluate(0.5).unwrap() - 1.25).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Use num-dual for automatic differentiation (verification mode)
//! - `serde`: Enable serialisation for `Point` and `InterpolationError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
