//! Runtime-shaped dense matrix.
//!
//! Unlike [`Tensor`], a [`Matrix`] carries its shape at runtime, so two
//! matrices of different sizes share a type and shape agreement between
//! operands is asserted rather than type-checked. Storage is row-major:
//! element `(i, j)` lives at offset `n_cols*i + j`.

use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use crate::error::AlgebraError;
use crate::scalar::Scalar;
use crate::tensor::Tensor;

/// A dense `n_rows x n_cols` matrix with no special symmetries.
///
/// # Examples
///
/// ```
/// use tensorkit::Matrix;
///
/// let mut m: Matrix = Matrix::zeros(2, 2);
/// m.identity();
/// assert_eq!(*m.at(0, 0), 1.0);
/// assert_eq!(*m.at(0, 1), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Scalar = f64> {
    n_rows: usize,
    n_cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Create an empty `0 x 0` matrix.
    pub fn new() -> Self {
        Self {
            n_rows: 0,
            n_cols: 0,
            data: Vec::new(),
        }
    }

    /// Create an `m x n` matrix with every element set to the additive
    /// identity.
    pub fn zeros(m: usize, n: usize) -> Self {
        Self {
            n_rows: m,
            n_cols: n,
            data: vec![T::zero(); m * n],
        }
    }

    /// Allocate an `m x n` matrix, zero-filled if `zero` is true;
    /// otherwise the contents are unspecified and must be written before
    /// being read.
    pub fn with_shape(m: usize, n: usize, zero: bool) -> Self {
        let _ = zero;
        Self::zeros(m, n)
    }

    /// Create an `m x n` matrix from a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ShapeMismatch`] if `data` does not hold
    /// exactly `m * n` elements.
    pub fn from_vec(m: usize, n: usize, data: Vec<T>) -> Result<Self, AlgebraError> {
        if data.len() != m * n {
            return Err(AlgebraError::ShapeMismatch {
                expected: m * n,
                actual: data.len(),
            });
        }
        Ok(Self {
            n_rows: m,
            n_cols: n,
            data,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Total number of elements, `n_rows * n_cols`.
    #[inline]
    pub fn n_elements(&self) -> usize {
        self.n_rows * self.n_cols
    }

    /// Underlying elements in row-major order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the underlying elements.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Element at row `i`, column `j`.
    ///
    /// Bounds are checked in debug builds only.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> &T {
        debug_assert!(i < self.n_rows, "row {i} out of range ({} rows)", self.n_rows);
        debug_assert!(j < self.n_cols, "col {j} out of range ({} cols)", self.n_cols);
        &self.data[self.n_cols * i + j]
    }

    /// Mutable element at row `i`, column `j`.
    #[inline]
    pub fn at_mut(&mut self, i: usize, j: usize) -> &mut T {
        debug_assert!(i < self.n_rows, "row {i} out of range ({} rows)", self.n_rows);
        debug_assert!(j < self.n_cols, "col {j} out of range ({} cols)", self.n_cols);
        &mut self.data[self.n_cols * i + j]
    }

    /// Resize to `m x n`, discarding previous contents. Always
    /// reallocates. With `zero = false` the new contents are
    /// unspecified.
    pub fn reinit(&mut self, m: usize, n: usize, zero: bool) {
        let _ = zero;
        self.n_rows = m;
        self.n_cols = n;
        self.data = vec![T::zero(); m * n];
    }

    /// Reset every element to the additive identity, keeping the shape.
    pub fn clear(&mut self) {
        for x in &mut self.data {
            *x = T::zero();
        }
    }

    /// Overwrite this matrix with the identity.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    pub fn identity(&mut self) {
        assert_eq!(
            self.n_rows, self.n_cols,
            "an identity matrix is always square"
        );
        self.clear();
        for i in 0..self.n_rows {
            self.data[self.n_cols * i + i] = T::one();
        }
    }

    /// Sum of the absolute values of all elements.
    ///
    /// This is an entrywise L1-style norm, not an induced operator norm.
    pub fn norm(&self) -> <T as Scalar>::Real {
        let mut acc = <T as Scalar>::Real::zero();
        for &x in &self.data {
            acc += x.abs();
        }
        acc
    }

    /// True iff `at(i, j) == at(j, i)` for every pair of indices.
    /// Trivially true at zero extent.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    pub fn is_symmetric(&self) -> bool {
        assert_eq!(
            self.n_rows, self.n_cols,
            "symmetry is only defined for square matrices"
        );
        for i in 0..self.n_rows {
            for j in (i + 1)..self.n_cols {
                if self.at(i, j) != self.at(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Accumulate a matrix product: `self += a * b`.
    ///
    /// # Panics
    ///
    /// Panics unless `a.n_cols == b.n_rows` and `self` is pre-sized to
    /// `a.n_rows x b.n_cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensorkit::Matrix;
    ///
    /// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let mut id = Matrix::zeros(2, 2);
    /// id.identity();
    ///
    /// let mut prod = Matrix::zeros(2, 2);
    /// prod.mult(&a, &id);
    /// assert_eq!(prod, a);
    /// ```
    pub fn mult(&mut self, a: &Self, b: &Self) {
        assert_eq!(a.n_cols, b.n_rows, "inner dimensions must agree");
        assert_eq!(self.n_rows, a.n_rows, "result rows must match a");
        assert_eq!(self.n_cols, b.n_cols, "result cols must match b");

        for i in 0..a.n_rows {
            for k in 0..a.n_cols {
                let aik = *a.at(i, k);
                for j in 0..b.n_cols {
                    *self.at_mut(i, j) += aik * *b.at(k, j);
                }
            }
        }
    }

    /// Accumulate a transpose-matrix product: `self += a^T * b`.
    ///
    /// # Panics
    ///
    /// Panics unless `a.n_rows == b.n_rows` and `self` is pre-sized to
    /// `a.n_cols x b.n_cols`.
    pub fn tmult(&mut self, a: &Self, b: &Self) {
        assert_eq!(a.n_rows, b.n_rows, "inner dimensions must agree");
        assert_eq!(self.n_rows, a.n_cols, "result rows must match a^T");
        assert_eq!(self.n_cols, b.n_cols, "result cols must match b");

        for k in 0..a.n_rows {
            for i in 0..a.n_cols {
                let aki = *a.at(k, i);
                for j in 0..b.n_cols {
                    *self.at_mut(i, j) += aki * *b.at(k, j);
                }
            }
        }
    }

    /// Accumulate a matrix-transpose product: `self += a * b^T`.
    ///
    /// # Panics
    ///
    /// Panics unless `a.n_cols == b.n_cols` and `self` is pre-sized to
    /// `a.n_rows x b.n_rows`.
    pub fn mult_t(&mut self, a: &Self, b: &Self) {
        assert_eq!(a.n_cols, b.n_cols, "inner dimensions must agree");
        assert_eq!(self.n_rows, a.n_rows, "result rows must match a");
        assert_eq!(self.n_cols, b.n_rows, "result cols must match b^T");

        for i in 0..a.n_rows {
            for j in 0..b.n_rows {
                for k in 0..a.n_cols {
                    *self.at_mut(i, j) += *a.at(i, k) * *b.at(j, k);
                }
            }
        }
    }

    /// Overwrite this matrix with the inverse of `m`, resizing to `m`'s
    /// shape first.
    ///
    /// The same closed-form formulas as rank-2 [`Tensor::invert`] are
    /// used; general elimination for larger systems is a deliberate
    /// scope boundary, not a missing feature.
    ///
    /// # Panics
    ///
    /// Panics if `m` is not square, its extent is 0 or greater than 3,
    /// or it is singular.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensorkit::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![2.0, 0.0, 0.0, 4.0]).unwrap();
    /// let mut inv = Matrix::new();
    /// inv.invert(&m);
    /// assert_eq!(inv.data(), &[0.5, 0.0, 0.0, 0.25]);
    /// ```
    pub fn invert(&mut self, m: &Self) {
        assert_eq!(m.n_rows, m.n_cols, "only square matrices can be inverted");
        assert!(
            (1..=3).contains(&m.n_cols),
            "closed-form inversion is only defined for sizes 1 to 3, not {}",
            m.n_cols
        );

        self.reinit(m.n_rows, m.n_cols, true);

        match m.n_cols {
            1 => {
                assert!(*m.at(0, 0) != T::zero(), "matrix is singular");
                *self.at_mut(0, 0) = T::one() / *m.at(0, 0);
            }

            2 => {
                let det = *m.at(0, 0) * *m.at(1, 1) - *m.at(0, 1) * *m.at(1, 0);
                assert!(det != T::zero(), "matrix is singular");

                *self.at_mut(0, 0) = *m.at(1, 1) / det;
                *self.at_mut(0, 1) = -*m.at(0, 1) / det;
                *self.at_mut(1, 0) = -*m.at(1, 0) / det;
                *self.at_mut(1, 1) = *m.at(0, 0) / det;
            }

            3 => {
                let e = |i, j| *m.at(i, j);
                let det = e(0, 0) * (e(2, 2) * e(1, 1) - e(2, 1) * e(1, 2))
                    - e(1, 0) * (e(2, 2) * e(0, 1) - e(2, 1) * e(0, 2))
                    + e(2, 0) * (e(1, 2) * e(0, 1) - e(1, 1) * e(0, 2));
                assert!(det != T::zero(), "matrix is singular");

                *self.at_mut(0, 0) = (e(2, 2) * e(1, 1) - e(2, 1) * e(1, 2)) / det;
                *self.at_mut(0, 1) = -(e(2, 2) * e(0, 1) - e(2, 1) * e(0, 2)) / det;
                *self.at_mut(0, 2) = (e(1, 2) * e(0, 1) - e(1, 1) * e(0, 2)) / det;

                *self.at_mut(1, 0) = -(e(2, 2) * e(1, 0) - e(2, 0) * e(1, 2)) / det;
                *self.at_mut(1, 1) = (e(2, 2) * e(0, 0) - e(2, 0) * e(0, 2)) / det;
                *self.at_mut(1, 2) = -(e(1, 2) * e(0, 0) - e(1, 0) * e(0, 2)) / det;

                *self.at_mut(2, 0) = (e(2, 1) * e(1, 0) - e(2, 0) * e(1, 1)) / det;
                *self.at_mut(2, 1) = -(e(2, 1) * e(0, 0) - e(2, 0) * e(0, 1)) / det;
                *self.at_mut(2, 2) = (e(1, 1) * e(0, 0) - e(1, 0) * e(0, 1)) / det;
            }

            _ => unreachable!(),
        }
    }
}

impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a matrix from a rank-2 tensor by copying its component buffer.
///
/// The copy is by buffer, matching the tensor's linearized layout; no
/// aliasing is introduced.
impl<const DIM: usize, T: Scalar> From<&Tensor<DIM, 2, T>> for Matrix<T> {
    fn from(t: &Tensor<DIM, 2, T>) -> Self {
        Self {
            n_rows: DIM,
            n_cols: DIM,
            data: t.data().to_vec(),
        }
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(self.n_rows, rhs.n_rows, "row counts must agree");
        assert_eq!(self.n_cols, rhs.n_cols, "column counts must agree");
        for (x, &y) in self.data.iter_mut().zip(rhs.data.iter()) {
            *x += y;
        }
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(self.n_rows, rhs.n_rows, "row counts must agree");
        assert_eq!(self.n_cols, rhs.n_cols, "column counts must agree");
        for (x, &y) in self.data.iter_mut().zip(rhs.data.iter()) {
            *x -= y;
        }
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, scalar: T) {
        for x in &mut self.data {
            *x *= scalar;
        }
    }
}

impl<T: Scalar> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, scalar: T) {
        for x in &mut self.data {
            *x /= scalar;
        }
    }
}
