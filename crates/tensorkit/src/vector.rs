//! Runtime-length dense vector.

use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use crate::matrix::Matrix;
use crate::scalar::{RealScalar, Scalar};

/// A dense vector of runtime length.
///
/// # Examples
///
/// ```
/// use tensorkit::Vector;
///
/// let v = Vector::from(vec![3.0, 4.0]);
/// assert_eq!(v.l2_norm(), 5.0);
/// assert_eq!(v.l1_norm(), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T: Scalar = f64> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a vector of length `n` with every component set to the
    /// additive identity.
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![T::zero(); n],
        }
    }

    /// Allocate a vector of length `n`, zero-filled if `zero` is true;
    /// otherwise the contents are unspecified and must be written before
    /// being read.
    pub fn with_len(n: usize, zero: bool) -> Self {
        let _ = zero;
        Self::zeros(n)
    }

    /// Create a vector by copying a slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True iff the vector has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Underlying components.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the underlying components.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Component at index `i`. Bounds are checked in debug builds only.
    #[inline]
    pub fn at(&self, i: usize) -> &T {
        debug_assert!(i < self.data.len(), "index {i} out of range");
        &self.data[i]
    }

    /// Mutable component at index `i`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.data.len(), "index {i} out of range");
        &mut self.data[i]
    }

    /// Resize to length `n`, discarding previous contents. Always
    /// reallocates. With `zero = false` the new contents are
    /// unspecified.
    pub fn reinit(&mut self, n: usize, zero: bool) {
        let _ = zero;
        self.data = vec![T::zero(); n];
    }

    /// Reset every component to the additive identity, keeping the
    /// length.
    pub fn clear(&mut self) {
        for x in &mut self.data {
            *x = T::zero();
        }
    }

    /// The l1 norm, `sum |x_i|`.
    pub fn l1_norm(&self) -> <T as Scalar>::Real {
        let mut acc = <T as Scalar>::Real::zero();
        for &x in &self.data {
            acc += x.abs();
        }
        acc
    }

    /// The l2 norm, `sqrt(sum |x_i|^2)`.
    pub fn l2_norm(&self) -> <T as Scalar>::Real {
        let mut acc = <T as Scalar>::Real::zero();
        for &x in &self.data {
            acc += x.abs_sqr();
        }
        acc.sqrt()
    }

    /// Divide every component by the l2 norm.
    ///
    /// # Panics
    ///
    /// Panics if the norm is zero.
    pub fn l2_normalize(&mut self) {
        let norm = self.l2_norm();
        assert!(
            norm != <T as Scalar>::Real::zero(),
            "cannot normalize a zero vector"
        );
        let scale = T::from_real(norm);
        for x in &mut self.data {
            *x /= scale;
        }
    }

    /// Copy the main diagonal of a square matrix into this vector.
    ///
    /// # Panics
    ///
    /// Panics unless `m` is square and `self.len() == m.n_rows()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensorkit::{Matrix, Vector};
    ///
    /// let mut m: Matrix = Matrix::zeros(2, 2);
    /// m.identity();
    ///
    /// let mut v = Vector::zeros(2);
    /// v.diag(&m);
    /// assert_eq!(v.data(), &[1.0, 1.0]);
    /// ```
    pub fn diag(&mut self, m: &Matrix<T>) {
        assert_eq!(
            m.n_rows(),
            m.n_cols(),
            "the diagonal is only defined for square matrices"
        );
        assert_eq!(self.len(), m.n_rows(), "vector length must match");

        for (i, x) in self.data.iter_mut().enumerate() {
            *x = *m.at(i, i);
        }
    }

    /// Scale-and-assign: `self = a * v`.
    ///
    /// Unlike the tensor scale-add this overwrites rather than
    /// accumulates; the name is kept for symmetry with [`Vector::sadd2`].
    ///
    /// # Panics
    ///
    /// Panics unless `v.len() == self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensorkit::Vector;
    ///
    /// let w = Vector::from(vec![1.0, 2.0, 3.0]);
    /// let mut v = Vector::zeros(3);
    /// v.sadd(2.0, &w);
    /// assert_eq!(v.data(), &[2.0, 4.0, 6.0]);
    /// ```
    pub fn sadd(&mut self, a: T, v: &Self) {
        assert_eq!(v.len(), self.len(), "operand lengths must agree");
        for (x, &y) in self.data.iter_mut().zip(v.data.iter()) {
            *x = a * y;
        }
    }

    /// Scale-and-assign two vectors: `self = a*v + b*w`.
    ///
    /// # Panics
    ///
    /// Panics unless both operands match `self.len()`.
    pub fn sadd2(&mut self, a: T, v: &Self, b: T, w: &Self) {
        assert_eq!(v.len(), self.len(), "operand lengths must agree");
        assert_eq!(w.len(), self.len(), "operand lengths must agree");
        for ((x, &y), &z) in self.data.iter_mut().zip(v.data.iter()).zip(w.data.iter()) {
            *x = a * y + b * z;
        }
    }
}

impl<T: RealScalar> Vector<T> {
    /// The lp norm for positive integer `p`, computed as the literal
    /// formula `(sum x_i^p)^(1/p)`.
    ///
    /// Components are NOT passed through an absolute value first, so for
    /// negative components and odd `p` this diverges from the
    /// mathematical lp norm. The literal behavior is kept deliberately;
    /// callers wanting the corrected norm should take absolute values
    /// themselves.
    ///
    /// # Panics
    ///
    /// Panics if `p` is zero.
    pub fn lp_norm(&self, p: u32) -> T {
        assert!(p > 0, "the lp norm requires a positive exponent");

        let mut acc = T::zero();
        for &x in &self.data {
            acc += x.powi(p as i32);
        }
        acc.powf(T::one() / T::from_u32(p))
    }

    /// Divide every component by the lp norm.
    ///
    /// There is no zero-norm guard here, unlike [`Vector::l2_normalize`];
    /// a zero norm divides through silently.
    pub fn lp_normalize(&mut self, p: u32) {
        let norm = self.lp_norm(p);
        for x in &mut self.data {
            *x /= norm;
        }
    }
}

impl<T: Scalar> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a vector by taking ownership of a buffer; the length is taken
/// from the buffer.
impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Scalar> AddAssign<&Vector<T>> for Vector<T> {
    fn add_assign(&mut self, rhs: &Vector<T>) {
        assert_eq!(self.len(), rhs.len(), "operand lengths must agree");
        for (x, &y) in self.data.iter_mut().zip(rhs.data.iter()) {
            *x += y;
        }
    }
}

impl<T: Scalar> SubAssign<&Vector<T>> for Vector<T> {
    fn sub_assign(&mut self, rhs: &Vector<T>) {
        assert_eq!(self.len(), rhs.len(), "operand lengths must agree");
        for (x, &y) in self.data.iter_mut().zip(rhs.data.iter()) {
            *x -= y;
        }
    }
}

impl<T: Scalar> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, scalar: T) {
        for x in &mut self.data {
            *x *= scalar;
        }
    }
}

impl<T: Scalar> DivAssign<T> for Vector<T> {
    fn div_assign(&mut self, scalar: T) {
        for x in &mut self.data {
            *x /= scalar;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zeros() {
        let v: Vector = Vector::zeros(3);
        assert_eq!(v.len(), 3);
        assert!(v.data().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_from_vec_takes_length() {
        let v = Vector::from(vec![1.0, 1.1, 1.25]);
        assert_eq!(v.len(), 3);
        assert_eq!(*v.at(2), 1.25);
    }

    #[test]
    fn test_norms() {
        let v = Vector::from(vec![3.0, 4.0]);
        assert_eq!(v.l2_norm(), 5.0);
        assert_eq!(v.l1_norm(), 7.0);
    }

    #[test]
    fn test_l1_norm_uses_abs() {
        let v = Vector::from(vec![-3.0, 4.0]);
        assert_eq!(v.l1_norm(), 7.0);
    }

    #[test]
    fn test_lp_norm_matches_l2_for_p2() {
        let v = Vector::from(vec![3.0, 4.0]);
        assert_relative_eq!(v.lp_norm(2), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lp_norm_is_literal() {
        // No absolute value: (1^3 + 2^3)^(1/3) = 9^(1/3).
        let v = Vector::from(vec![1.0, 2.0]);
        assert_relative_eq!(v.lp_norm(3), 9.0_f64.powf(1.0 / 3.0), epsilon = 1e-12);

        // Negative components cancel under odd p before the root.
        let w = Vector::from(vec![2.0, -2.0, 1.0]);
        assert_relative_eq!(w.lp_norm(3), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_l2_normalize() {
        let mut v = Vector::from(vec![3.0, 4.0]);
        v.l2_normalize();
        assert_relative_eq!(v.l2_norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(*v.at(0), 0.6, epsilon = 1e-12);
    }

    #[test]
    #[should_panic]
    fn test_l2_normalize_zero_vector() {
        let mut v: Vector = Vector::zeros(3);
        v.l2_normalize();
    }

    #[test]
    fn test_sadd_overwrites() {
        let w = Vector::from(vec![1.0, 2.0, 3.0]);
        let mut v = Vector::from(vec![9.0, 9.0, 9.0]);
        v.sadd(2.0, &w);
        assert_eq!(v.data(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_sadd2() {
        let v1 = Vector::from(vec![1.0, 2.0]);
        let v2 = Vector::from(vec![10.0, 20.0]);
        let mut out = Vector::zeros(2);
        out.sadd2(2.0, &v1, 0.5, &v2);
        assert_eq!(out.data(), &[7.0, 14.0]);
    }

    #[test]
    fn test_diag() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut v = Vector::zeros(2);
        v.diag(&m);
        assert_eq!(v.data(), &[1.0, 4.0]);
    }

    #[test]
    #[should_panic]
    fn test_diag_length_mismatch() {
        let m: Matrix = Matrix::zeros(2, 2);
        let mut v = Vector::zeros(3);
        v.diag(&m);
    }

    #[test]
    fn test_compound_assign() {
        let mut v = Vector::from(vec![1.0, 2.0]);
        let other = Vector::from(vec![1.0, 1.0]);
        v += &other;
        assert_eq!(v.data(), &[2.0, 3.0]);
        v -= &other;
        assert_eq!(v.data(), &[1.0, 2.0]);
        v *= 3.0;
        assert_eq!(v.data(), &[3.0, 6.0]);
        v /= 3.0;
        assert_eq!(v.data(), &[1.0, 2.0]);
    }

    #[test]
    fn test_reinit_and_clear() {
        let mut v = Vector::from(vec![1.0, 2.0]);
        v.reinit(4, true);
        assert_eq!(v.len(), 4);
        assert!(v.data().iter().all(|&x| x == 0.0));

        *v.at_mut(0) = 5.0;
        v.clear();
        assert!(v.data().iter().all(|&x| x == 0.0));
    }
}
