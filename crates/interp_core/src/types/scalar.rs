//! Scalar types the interpolators compute with.
//!
//! `num_traits::Float` is not implemented by num-dual's `Dual64`, so the
//! kernel is generic over the narrower [`Scalar`] trait instead. It asks only
//! for field arithmetic and a real part, which both plain floats and dual
//! numbers provide.

use num_traits::Zero;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Arithmetic type usable as an abscissa or ordinate.
///
/// Comparisons (duplicate detection, domain bounds) are made on the real
/// part returned by [`re`](Scalar::re), so a dual number compares like the
/// value it carries.
///
/// # Example
///
/// ```
/// use interp_core::types::Scalar;
///
/// fn midpoint<T: Scalar>(a: T, b: T) -> T {
///     (a + b) / T::from_f64(2.0)
/// }
///
/// assert_eq!(midpoint(1.0_f64, 4.0), 2.5);
/// assert_eq!(midpoint(1.0_f32, 4.0).re(), 2.5);
/// ```
pub trait Scalar:
    Copy
    + Debug
    + Send
    + Sync
    + 'static
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Lift a plain value into this type.
    fn from_f64(value: f64) -> Self;

    /// Real part as `f64`.
    fn re(&self) -> f64;
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn re(&self) -> f64 {
        *self
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn re(&self) -> f64 {
        f64::from(*self)
    }
}

#[cfg(feature = "num-dual-mode")]
impl Scalar for num_dual::Dual64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        num_dual::Dual64::from(value)
    }

    #[inline]
    fn re(&self) -> f64 {
        self.re
    }
}
