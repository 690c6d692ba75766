//! Common trait for 1D interpolators.

use crate::types::{InterpolationError, Scalar};

/// One-dimensional interpolation over a set of sample points.
///
/// # Type Parameters
///
/// * `T` - Scalar type (e.g., `f64`, `Dual64`)
pub trait Interpolator<T: Scalar> {
    /// Interpolated value at `x`.
    ///
    /// Implementations fail when they are not ready to evaluate, or when
    /// `x` lies somewhere they cannot produce a value for.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Range `(x_min, x_max)` spanned by the sample abscissae.
    fn domain(&self) -> (T, T);

    /// Interpolate every point of `xs`, stopping at the first failure.
    fn interpolate_many(&self, xs: &[T]) -> Result<Vec<T>, InterpolationError> {
        xs.iter().map(|&x| self.interpolate(x)).collect()
    }
}
