//! Newton divided-difference interpolation.
//!
//! The interpolating polynomial of minimal degree through `n` samples is
//! stored as the top row of the divided-difference table,
//! `c[i] = f[x_0, ..., x_i]`, and evaluated in Newton form:
//!
//! ```text
//! P(x) = c[0] + c[1](x - x_0) + ... + c[n-1](x - x_0)...(x - x_{n-2})
//! ```

use super::{Interpolator, PointSet};
use crate::types::{InterpolationError, Scalar};

/// Polynomial interpolator using Newton's divided differences.
///
/// Owns its [`PointSet`] and the coefficient vector derived from it. The
/// interpolator is either *unbuilt* (no coefficients) or *built*
/// (coefficients valid for the current points):
///
/// - [`build`](Self::build) moves it to built.
/// - Adding points through [`push`](Self::push) or [`extend`](Self::extend)
///   drops the coefficients and moves it back to unbuilt, so a stale
///   polynomial can never be evaluated.
///
/// Evaluation on a built interpolator only reads, so a built interpolator
/// can be shared across threads and queried concurrently.
///
/// # Type Parameters
///
/// * `T` - Scalar type (e.g., `f64`, `Dual64`)
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::NewtonInterpolator;
///
/// // y = x^2 + 1
/// let mut interp = NewtonInterpolator::from_pairs(&[(0.0_f64, 1.0), (1.0, 2.0), (2.0, 5.0)]);
/// assert!(!interp.is_built());
///
/// interp.build().unwrap();
/// assert_eq!(interp.coefficients(), Some(&[1.0, 1.0, 1.0][..]));
/// assert!((interp.evaluate(3.0).unwrap() - 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonInterpolator<T: Scalar> {
    /// Samples in insertion order
    points: PointSet<T>,
    /// `f[x_0, ..., x_i]` for each `i`; `None` while unbuilt
    coefficients: Option<Vec<T>>,
}

impl<T: Scalar> Default for NewtonInterpolator<T> {
    fn default() -> Self {
        Self::new(PointSet::new())
    }
}

impl<T: Scalar> NewtonInterpolator<T> {
    /// Take ownership of `points`. The interpolator starts unbuilt.
    pub fn new(points: PointSet<T>) -> Self {
        Self {
            points,
            coefficients: None,
        }
    }

    /// Create an unbuilt interpolator from `(x, y)` pairs.
    pub fn from_pairs(pairs: &[(T, T)]) -> Self {
        Self::new(PointSet::from_pairs(pairs))
    }

    /// The owned sample points.
    #[inline]
    pub fn points(&self) -> &PointSet<T> {
        &self.points
    }

    /// Give the sample points back, discarding any coefficients.
    pub fn into_points(self) -> PointSet<T> {
        self.points
    }

    /// Append a sample. Invalidates previously built coefficients.
    pub fn push(&mut self, x: T, y: T) {
        self.points.push(x, y);
        self.coefficients = None;
    }

    /// Append several samples. Invalidates previously built coefficients.
    pub fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, pairs: I) {
        self.points.extend(pairs);
        self.coefficients = None;
    }

    /// Returns true if coefficients are available for the current points.
    #[inline]
    pub fn is_built(&self) -> bool {
        self.coefficients.is_some()
    }

    /// Divided-difference coefficients `f[x_0, ..., x_i]`, if built.
    #[inline]
    pub fn coefficients(&self) -> Option<&[T]> {
        self.coefficients.as_deref()
    }

    /// Upper bound on the polynomial degree (`n - 1`), if built.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.as_ref().map(|c| c.len() - 1)
    }

    /// Compute the divided-difference coefficients from the current points.
    ///
    /// Always recomputes from scratch, so calling it again after adding
    /// points refreshes the polynomial. On failure the interpolator is left
    /// unbuilt.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::EmptyDataset` - No points to interpolate
    /// * `InterpolationError::DuplicateAbscissa` - Two points share an
    ///   x-value, which would divide by zero
    /// * `InterpolationError::InvalidInput` - An x-value is NaN or infinite
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::math::interpolators::NewtonInterpolator;
    /// use interp_core::types::InterpolationError;
    ///
    /// let mut interp = NewtonInterpolator::from_pairs(&[(1.0_f64, 5.0), (1.0, 7.0)]);
    /// assert!(matches!(
    ///     interp.build(),
    ///     Err(InterpolationError::DuplicateAbscissa { first: 0, second: 1, .. })
    /// ));
    /// ```
    pub fn build(&mut self) -> Result<(), InterpolationError> {
        self.coefficients = None;
        let coefficients = divided_differences(self.points.xs(), self.points.ys())?;
        self.coefficients = Some(coefficients);
        Ok(())
    }

    /// Evaluate the fitted polynomial at `x`.
    ///
    /// Only reads the built state. The polynomial is defined everywhere, so
    /// no domain check is made; overflow for extreme `x` is the caller's
    /// concern.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::NotBuilt` - [`build`](Self::build) has not
    ///   been called since the last change to the points
    pub fn evaluate(&self, x: T) -> Result<T, InterpolationError> {
        let coefficients = self
            .coefficients
            .as_deref()
            .ok_or(InterpolationError::NotBuilt)?;
        Ok(newton_form(coefficients, self.points.xs(), x))
    }

    /// Evaluate at `x`, building first if needed.
    ///
    /// # Errors
    ///
    /// Any error from [`build`](Self::build).
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::math::interpolators::NewtonInterpolator;
    ///
    /// let mut interp = NewtonInterpolator::from_pairs(&[(2.0_f64, 5.0), (4.0, 9.0)]);
    /// let y = interp.evaluate_lazy(3.0).unwrap();
    /// assert!((y - 7.0).abs() < 1e-12);
    /// assert!(interp.is_built());
    /// ```
    pub fn evaluate_lazy(&mut self, x: T) -> Result<T, InterpolationError> {
        if !self.is_built() {
            self.build()?;
        }
        self.evaluate(x)
    }

    /// Evaluate at every point of `xs`.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::NotBuilt` - The interpolator is unbuilt
    pub fn evaluate_many(&self, xs: &[T]) -> Result<Vec<T>, InterpolationError> {
        let coefficients = self
            .coefficients
            .as_deref()
            .ok_or(InterpolationError::NotBuilt)?;
        let nodes = self.points.xs();
        Ok(xs.iter().map(|&x| newton_form(coefficients, nodes, x)).collect())
    }
}

impl<T: Scalar> Interpolator<T> for NewtonInterpolator<T> {
    /// Same as [`NewtonInterpolator::evaluate`]; values outside the domain
    /// are extrapolated by the polynomial.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        self.evaluate(x)
    }

    /// Smallest and largest abscissa. An empty set yields the empty range
    /// `(+inf, -inf)`.
    fn domain(&self) -> (T, T) {
        self.points
            .xs()
            .iter()
            .fold(
                (T::from_f64(f64::INFINITY), T::from_f64(f64::NEG_INFINITY)),
                |(lo, hi), &x| {
                    let lo = if x.re() < lo.re() { x } else { lo };
                    let hi = if x.re() > hi.re() { x } else { hi };
                    (lo, hi)
                },
            )
    }
}

/// Top row of the divided-difference table.
///
/// Reduces one reused row in place: after pass `j`, `row[i]` holds
/// `f[x_i, ..., x_{i+j}]` and `row[0]` is the `j`-th coefficient.
fn divided_differences<T: Scalar>(xs: &[T], ys: &[T]) -> Result<Vec<T>, InterpolationError> {
    let n = xs.len();
    if n == 0 {
        return Err(InterpolationError::EmptyDataset);
    }
    if let Some((i, x)) = xs.iter().enumerate().find(|(_, x)| !x.re().is_finite()) {
        return Err(InterpolationError::InvalidInput(format!(
            "non-finite abscissa x = {} at point {}",
            x.re(),
            i
        )));
    }

    let mut row = ys.to_vec();
    let mut coefficients = Vec::with_capacity(n);
    coefficients.push(row[0]);

    for j in 1..n {
        for i in 0..n - j {
            let dx = xs[i + j] - xs[i];
            if dx.re() == 0.0 {
                return Err(InterpolationError::DuplicateAbscissa {
                    first: i,
                    second: i + j,
                    x: xs[i].re(),
                });
            }
            row[i] = (row[i + 1] - row[i]) / dx;
        }
        coefficients.push(row[0]);
    }

    Ok(coefficients)
}

/// Nested evaluation of the Newton form:
/// `c[0] + (x - x_0)(c[1] + (x - x_1)(c[2] + ...))`.
#[inline]
fn newton_form<T: Scalar>(coefficients: &[T], nodes: &[T], x: T) -> T {
    let n = coefficients.len();
    let mut p = coefficients[n - 1];
    for j in (0..n - 1).rev() {
        p = coefficients[j] + (x - nodes[j]) * p;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quadratic() -> NewtonInterpolator<f64> {
        // y = x^2 + 1
        NewtonInterpolator::from_pairs(&[(0.0, 1.0), (1.0, 2.0), (2.0, 5.0)])
    }

    // ========================================
    // Build Tests
    // ========================================

    #[test]
    fn test_build_quadratic_coefficients() {
        let mut interp = quadratic();
        interp.build().unwrap();

        // f[x0] = 1, f[x0,x1] = 1, f[x0,x1,x2] = 1
        let c = interp.coefficients().unwrap();
        assert_eq!(c.len(), 3);
        assert_relative_eq!(c[0], 1.0);
        assert_relative_eq!(c[1], 1.0);
        assert_relative_eq!(c[2], 1.0);
        assert_eq!(interp.degree(), Some(2));
    }

    #[test]
    fn test_build_matches_full_table() {
        // Non-uniform spacing, checked against the hand-built table
        let xs = [1.0, 2.0, 4.0, 7.0];
        let ys = [3.0, -1.0, 2.0, 0.5];
        let mut interp = NewtonInterpolator::new(PointSet::from_slices(&xs, &ys).unwrap());
        interp.build().unwrap();

        let n = xs.len();
        let mut table = vec![vec![0.0; n]; n];
        for i in 0..n {
            table[i][0] = ys[i];
        }
        for j in 1..n {
            for i in 0..n - j {
                table[i][j] = (table[i + 1][j - 1] - table[i][j - 1]) / (xs[i + j] - xs[i]);
            }
        }

        let c = interp.coefficients().unwrap();
        for j in 0..n {
            assert_relative_eq!(c[j], table[0][j], epsilon = 1e-14);
        }
    }

    #[test]
    fn test_build_empty_dataset() {
        let mut interp: NewtonInterpolator<f64> = NewtonInterpolator::default();
        assert_eq!(interp.build(), Err(InterpolationError::EmptyDataset));
        assert!(!interp.is_built());
    }

    #[test]
    fn test_build_duplicate_abscissa_adjacent() {
        let mut interp = NewtonInterpolator::from_pairs(&[(1.0, 5.0), (1.0, 7.0)]);
        match interp.build().unwrap_err() {
            InterpolationError::DuplicateAbscissa { first, second, x } => {
                assert_eq!(first, 0);
                assert_eq!(second, 1);
                assert_eq!(x, 1.0);
            }
            other => panic!("Expected DuplicateAbscissa error, got {:?}", other),
        }
        assert!(!interp.is_built());
    }

    #[test]
    fn test_build_duplicate_abscissa_non_adjacent() {
        // x_0 == x_2 is only reached by the second-order pass
        let mut interp = NewtonInterpolator::from_pairs(&[(0.0, 1.0), (1.0, 2.0), (0.0, 3.0)]);
        assert!(matches!(
            interp.build(),
            Err(InterpolationError::DuplicateAbscissa {
                first: 0,
                second: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_build_rejects_non_finite_abscissa() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut interp = NewtonInterpolator::from_pairs(&[(0.0, 1.0), (bad, 2.0), (2.0, 5.0)]);
            match interp.build().unwrap_err() {
                InterpolationError::InvalidInput(msg) => {
                    assert!(msg.contains("non-finite abscissa"));
                    assert!(msg.contains("at point 1"));
                }
                other => panic!("Expected InvalidInput error, got {:?}", other),
            }
            assert_eq!(interp.evaluate(1.0), Err(InterpolationError::NotBuilt));
        }
    }

    #[test]
    fn test_failed_rebuild_drops_old_coefficients() {
        let mut interp = quadratic();
        interp.build().unwrap();
        interp.push(2.0, 9.0);
        assert!(interp.build().is_err());
        assert_eq!(interp.evaluate(1.0), Err(InterpolationError::NotBuilt));
    }

    #[test]
    fn test_build_is_repeatable() {
        let mut interp = quadratic();
        interp.build().unwrap();
        let first = interp.coefficients().unwrap().to_vec();
        interp.build().unwrap();
        assert_eq!(interp.coefficients().unwrap(), first.as_slice());
    }

    // ========================================
    // Evaluation Tests
    // ========================================

    #[test]
    fn test_evaluate_quadratic_scenario() {
        let mut interp = quadratic();
        interp.build().unwrap();
        assert_relative_eq!(interp.evaluate(3.0).unwrap(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(interp.evaluate(0.5).unwrap(), 1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_at_sample_points() {
        let pairs = [(0.0, 0.0), (1.0, 2.0), (3.0, 3.0), (6.0, 3.0), (10.0, 8.0)];
        let mut interp = NewtonInterpolator::from_pairs(&pairs);
        interp.build().unwrap();
        for &(x, y) in &pairs {
            assert_relative_eq!(interp.evaluate(x).unwrap(), y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_evaluate_single_point_is_constant() {
        let mut interp = NewtonInterpolator::from_pairs(&[(4.0, -2.5)]);
        interp.build().unwrap();
        assert_eq!(interp.degree(), Some(0));
        for x in [-100.0, 0.0, 4.0, 1e6] {
            assert_eq!(interp.evaluate(x).unwrap(), -2.5);
        }
    }

    #[test]
    fn test_evaluate_two_points_is_linear() {
        let mut interp = NewtonInterpolator::from_pairs(&[(2.0, 5.0), (4.0, 9.0)]);
        interp.build().unwrap();
        assert_relative_eq!(interp.evaluate(3.0).unwrap(), 7.0, epsilon = 1e-12);
        assert_relative_eq!(interp.evaluate(10.0).unwrap(), 21.0, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_reproduces_cubic_everywhere() {
        // y = 2x^3 - x + 4 from four samples
        let f = |x: f64| 2.0 * x * x * x - x + 4.0;
        let pairs: Vec<(f64, f64)> = [-1.0, 0.5, 2.0, 3.0].iter().map(|&x| (x, f(x))).collect();
        let mut interp = NewtonInterpolator::from_pairs(&pairs);
        interp.build().unwrap();
        for x in [-3.0, -0.25, 1.0, 2.5, 7.0] {
            assert_relative_eq!(interp.evaluate(x).unwrap(), f(x), max_relative = 1e-9);
        }
    }

    #[test]
    fn test_evaluate_unordered_points() {
        let mut interp = NewtonInterpolator::from_pairs(&[(2.0, 5.0), (0.0, 1.0), (1.0, 2.0)]);
        interp.build().unwrap();
        assert_relative_eq!(interp.evaluate(3.0).unwrap(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_before_build() {
        let interp = quadratic();
        assert_eq!(interp.evaluate(1.0), Err(InterpolationError::NotBuilt));
        assert_eq!(
            interp.evaluate_many(&[1.0, 2.0]),
            Err(InterpolationError::NotBuilt)
        );
    }

    #[test]
    fn test_evaluate_lazy_builds_once() {
        let mut interp = quadratic();
        assert_relative_eq!(interp.evaluate_lazy(3.0).unwrap(), 10.0, epsilon = 1e-12);
        assert!(interp.is_built());
    }

    #[test]
    fn test_evaluate_lazy_empty_dataset() {
        let mut interp: NewtonInterpolator<f64> = NewtonInterpolator::default();
        assert_eq!(interp.evaluate_lazy(0.0), Err(InterpolationError::EmptyDataset));
    }

    #[test]
    fn test_evaluate_many() {
        let mut interp = quadratic();
        interp.build().unwrap();
        let ys = interp.evaluate_many(&[0.0, 0.5, 3.0]).unwrap();
        assert_eq!(ys.len(), 3);
        assert_relative_eq!(ys[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(ys[1], 1.25, epsilon = 1e-12);
        assert_relative_eq!(ys[2], 10.0, epsilon = 1e-12);
    }

    // ========================================
    // Invalidation Tests
    // ========================================

    #[test]
    fn test_push_invalidates() {
        let mut interp = quadratic();
        interp.build().unwrap();
        interp.push(3.0, 10.0);
        assert!(!interp.is_built());
        assert_eq!(interp.coefficients(), None);
        assert_eq!(interp.evaluate(1.0), Err(InterpolationError::NotBuilt));
    }

    #[test]
    fn test_rebuild_after_push_uses_new_point() {
        // Adding (3, 0) bends the parabola into a cubic
        let mut interp = quadratic();
        interp.build().unwrap();
        interp.push(3.0, 0.0);
        interp.build().unwrap();
        assert_eq!(interp.degree(), Some(3));
        assert_relative_eq!(interp.evaluate(3.0).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(interp.evaluate(2.0).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extend_invalidates() {
        let mut interp = quadratic();
        interp.build().unwrap();
        interp.extend(vec![(3.0, 10.0), (4.0, 17.0)]);
        assert!(!interp.is_built());
        assert_eq!(interp.points().len(), 5);
    }

    // ========================================
    // Trait and Misc Tests
    // ========================================

    #[test]
    fn test_interpolator_trait() {
        let mut interp = quadratic();
        interp.build().unwrap();
        assert_eq!(interp.domain(), (0.0, 2.0));
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 3.25, epsilon = 1e-12);
        let ys = interp.interpolate_many(&[0.0, 2.0]).unwrap();
        assert_relative_eq!(ys[1], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_domain_unordered_points() {
        let interp = NewtonInterpolator::from_pairs(&[(3.0, 0.0), (-1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(interp.domain(), (-1.0, 3.0));
    }

    #[test]
    fn test_domain_empty() {
        let interp: NewtonInterpolator<f64> = NewtonInterpolator::default();
        let (lo, hi) = interp.domain();
        assert!(lo > hi);
    }

    #[test]
    fn test_into_points() {
        let points = quadratic().into_points();
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<NewtonInterpolator<f64>>();
    }

    #[test]
    fn test_with_f32() {
        let mut interp = NewtonInterpolator::from_pairs(&[(0.0_f32, 1.0), (1.0, 2.0), (2.0, 5.0)]);
        interp.build().unwrap();
        assert!((interp.evaluate(3.0_f32).unwrap() - 10.0).abs() < 1e-5);
    }
}
