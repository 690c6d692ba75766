//! Dual number type integration for automatic differentiation.
//!
//! Seeding a query point with a unit dual part yields the derivative of the
//! fitted polynomial alongside its value.
//!
//! ## Usage
//!
//! ```
//! use interp_core::math::interpolators::NewtonInterpolator;
//! use interp_core::types::dual::DualNumber;
//!
//! // y = x^2 + 1, so dy/dx = 2x
//! let mut interp = NewtonInterpolator::from_pairs(&[
//!     (DualNumber::from(0.0), DualNumber::from(1.0)),
//!     (DualNumber::from(1.0), DualNumber::from(2.0)),
//!     (DualNumber::from(2.0), DualNumber::from(5.0)),
//! ]);
//! interp.build().unwrap();
//!
//! let y = interp.evaluate(DualNumber::new(3.0, 1.0)).unwrap();
//! assert!((y.re - 10.0).abs() < 1e-12);
//! assert!((y.eps - 6.0).abs() < 1e-12);
//! ```

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// - `re`: Real part (function value)
/// - `eps`: Dual part (derivative)
#[cfg(feature = "num-dual-mode")]
pub type DualNumber = num_dual::Dual64;
