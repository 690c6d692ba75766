//! Sample point storage.

use crate::types::{InterpolationError, Scalar};

/// A single `(x, y)` sample.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::Point;
///
/// let p = Point::new(2.0, 5.0);
/// assert_eq!(p.x, 2.0);
/// assert_eq!(p.y, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    /// Abscissa
    pub x: T,
    /// Ordinate
    pub y: T,
}

impl<T: Scalar> Point<T> {
    /// Create a point from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// Ordered, append-only collection of sample points.
///
/// Insertion order is preserved and is the order the divided-difference
/// recurrence walks. Points are never modified or removed once added.
///
/// Distinct abscissae are required for interpolation but are not checked
/// here: [`push`](Self::push) accepts anything, and duplicates are reported
/// when a [`NewtonInterpolator`](super::NewtonInterpolator) is built.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::PointSet;
///
/// let mut points: PointSet<f64> = PointSet::new();
/// points.push(0.0, 1.0);
/// points.push(1.0, 2.0);
///
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.get(1).unwrap().y, 2.0);
/// assert!(points.get(2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet<T: Scalar> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Scalar> Default for PointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> PointSet<T> {
    /// Create an empty point set.
    pub fn new() -> Self {
        Self {
            xs: Vec::new(),
            ys: Vec::new(),
        }
    }

    /// Create an empty point set with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }

    /// Build a point set from `(x, y)` pairs, keeping their order.
    pub fn from_pairs(pairs: &[(T, T)]) -> Self {
        pairs.iter().copied().collect()
    }

    /// Build a point set from parallel coordinate slices.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - `xs` and `ys` differ in length
    pub fn from_slices(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Append a point at the end of the set.
    #[inline]
    pub fn push(&mut self, x: T, y: T) {
        self.xs.push(x);
        self.ys.push(y);
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if no point has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The `index`-th point in insertion order.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::IndexOutOfRange` - `index >= len()`
    pub fn get(&self, index: usize) -> Result<Point<T>, InterpolationError> {
        match (self.xs.get(index), self.ys.get(index)) {
            (Some(&x), Some(&y)) => Ok(Point { x, y }),
            _ => Err(InterpolationError::IndexOutOfRange {
                index,
                len: self.len(),
            }),
        }
    }

    /// Abscissae in insertion order.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Ordinates in insertion order.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Point<T>> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| Point { x, y })
    }
}

impl<T: Scalar> Extend<(T, T)> for PointSet<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (x, y) in iter {
            self.push(x, y);
        }
    }
}

impl<T: Scalar> Extend<Point<T>> for PointSet<T> {
    fn extend<I: IntoIterator<Item = Point<T>>>(&mut self, iter: I) {
        for p in iter {
            self.push(p.x, p.y);
        }
    }
}

impl<T: Scalar> FromIterator<(T, T)> for PointSet<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Scalar> FromIterator<Point<T>> for PointSet<T> {
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
