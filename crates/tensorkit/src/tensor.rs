//! Fixed-shape dense tensor of arbitrary rank.
//!
//! A [`Tensor`] carries its extent (`DIM`) and rank (`RANK`) in its type,
//! so shape agreement between operands is enforced at compile time and
//! multi-index access takes exactly `RANK` indices. Components live in a
//! flat buffer of `DIM^RANK` scalars addressed by [`crate::index`].

use std::ops::{Add, AddAssign, DivAssign, MulAssign, Sub, SubAssign};

use crate::error::AlgebraError;
use crate::index;
use crate::scalar::Scalar;

/// A dense tensor with extent `DIM`, rank `RANK` and scalar type `T`.
///
/// Rank 0 is a scalar, rank 1 a vector, rank 2 a matrix, and so on. No
/// symmetry is assumed of the components.
///
/// # Examples
///
/// ```
/// use tensorkit::Tensor;
///
/// let mut t: Tensor<3, 2> = Tensor::zeros();
/// assert_eq!(t.n_components(), 9);
///
/// *t.at_mut([0, 1]) = 4.0;
/// assert_eq!(*t.at([0, 1]), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<const DIM: usize, const RANK: usize, T: Scalar = f64> {
    data: Vec<T>,
}

impl<const DIM: usize, const RANK: usize, T: Scalar> Tensor<DIM, RANK, T> {
    /// Number of components, `DIM^RANK`.
    pub const N_COMPONENTS: usize = index::n_components(DIM, RANK as u32);

    /// Create a tensor with every component set to the additive identity.
    pub fn zeros() -> Self {
        Self {
            data: vec![T::zero(); Self::N_COMPONENTS],
        }
    }

    /// Allocate a tensor, zero-filled if `zero` is true.
    ///
    /// With `zero = false` the contents are unspecified and must be
    /// written before being read. (The buffer is still initialized
    /// memory; unspecified does not mean undefined.)
    pub fn new(zero: bool) -> Self {
        let _ = zero;
        Self::zeros()
    }

    /// Create a tensor from a flat buffer in linearized component order.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::ShapeMismatch`] if `data` does not hold
    /// exactly `DIM^RANK` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensorkit::Tensor;
    ///
    /// let t: Tensor<2, 2> = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(*t.at([1, 0]), 2.0);
    ///
    /// assert!(Tensor::<2, 2>::from_vec(vec![1.0]).is_err());
    /// ```
    pub fn from_vec(data: Vec<T>) -> Result<Self, AlgebraError> {
        if data.len() != Self::N_COMPONENTS {
            return Err(AlgebraError::ShapeMismatch {
                expected: Self::N_COMPONENTS,
                actual: data.len(),
            });
        }
        Ok(Self { data })
    }

    /// Number of components, `DIM^RANK`.
    #[inline]
    pub fn n_components(&self) -> usize {
        Self::N_COMPONENTS
    }

    /// Underlying components in linearized order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the underlying components.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Component at the given multi-index.
    ///
    /// Indices are checked against `DIM` in debug builds only.
    #[inline]
    pub fn at(&self, indices: [usize; RANK]) -> &T {
        &self.data[index::linearize(DIM, &indices)]
    }

    /// Mutable component at the given multi-index.
    #[inline]
    pub fn at_mut(&mut self, indices: [usize; RANK]) -> &mut T {
        &mut self.data[index::linearize(DIM, &indices)]
    }

    /// Reset every component to the additive identity. The shape is
    /// fixed by the type and does not change.
    pub fn reinit(&mut self) {
        for x in &mut self.data {
            *x = T::zero();
        }
    }

    /// Copy the components of `other` into this tensor. Shape agreement
    /// is enforced by the type.
    pub fn copy_from(&mut self, other: &Self) {
        self.data.copy_from_slice(&other.data);
    }

    /// Scale-and-add a tensor onto this one: `self += a * ta`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensorkit::Tensor;
    ///
    /// let ones: Tensor<2, 1> = Tensor::from_vec(vec![1.0, 1.0]).unwrap();
    /// let mut t = ones.clone();
    /// t.sadd(2.0, &ones);
    /// assert_eq!(t.data(), &[3.0, 3.0]);
    /// ```
    pub fn sadd(&mut self, a: T, ta: &Self) {
        for (x, &y) in self.data.iter_mut().zip(ta.data.iter()) {
            *x += a * y;
        }
    }

    /// Scale-and-add two tensors onto this one: `self += a*ta + b*tb`.
    pub fn sadd2(&mut self, a: T, ta: &Self, b: T, tb: &Self) {
        for ((x, &y), &z) in self.data.iter_mut().zip(ta.data.iter()).zip(tb.data.iter()) {
            *x += a * y + b * z;
        }
    }

    /// Scale-and-add three tensors onto this one:
    /// `self += a*ta + b*tb + c*tc`.
    pub fn sadd3(&mut self, a: T, ta: &Self, b: T, tb: &Self, c: T, tc: &Self) {
        for (((x, &y), &z), &w) in self
            .data
            .iter_mut()
            .zip(ta.data.iter())
            .zip(tb.data.iter())
            .zip(tc.data.iter())
        {
            *x += a * y + b * z + c * w;
        }
    }

    /// Scale-and-add a family of tensors onto this one:
    /// `self += sum_i coeffs[i] * tensors[i]`.
    ///
    /// # Panics
    ///
    /// Panics unless `coeffs` and `tensors` have equal lengths.
    pub fn sadd_slice(&mut self, coeffs: &[T], tensors: &[Self]) {
        assert_eq!(
            coeffs.len(),
            tensors.len(),
            "one coefficient is required per tensor"
        );
        for (&a, ta) in coeffs.iter().zip(tensors.iter()) {
            self.sadd(a, ta);
        }
    }

    /// Shape of the reduced (Voigt) matrix representation of a symmetric
    /// tensor of this rank, as `(rows, cols)`.
    ///
    /// Rank 1 maps to a `1 x DIM` row; rank 2 to the linearized upper
    /// triangle `1 x (DIM*(DIM-1)/2 + DIM)`; higher ranks split the rank
    /// in half, giving `(DIM*(RANK/2), DIM*(RANK/2 + RANK%2))`. Only the
    /// shape is computed; no index remapping is performed.
    ///
    /// # Panics
    ///
    /// Panics for rank-0 tensors, which have no Voigt representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensorkit::Tensor;
    ///
    /// assert_eq!(Tensor::<3, 2>::zeros().voigt_components(), (1, 6));
    /// assert_eq!(Tensor::<3, 4>::zeros().voigt_components(), (6, 6));
    /// ```
    pub fn voigt_components(&self) -> (usize, usize) {
        assert!(RANK > 0, "rank-0 tensors have no Voigt representation");
        match RANK {
            1 => (1, DIM),
            2 => (1, DIM * (DIM - 1) / 2 + DIM),
            _ => {
                let quot = RANK / 2;
                let rem = RANK % 2;
                (DIM * quot, DIM * (quot + rem))
            }
        }
    }
}

impl<const DIM: usize, const RANK: usize, T: Scalar> Default for Tensor<DIM, RANK, T> {
    fn default() -> Self {
        Self::zeros()
    }
}

/// Rank-2 operations.
impl<const DIM: usize, T: Scalar> Tensor<DIM, 2, T> {
    /// True iff `at([i, j]) == at([j, i])` for every pair of indices.
    /// Trivially true at zero extent.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..DIM {
            for j in (i + 1)..DIM {
                if self.at([i, j]) != self.at([j, i]) {
                    return false;
                }
            }
        }
        true
    }

    /// Overwrite this tensor with the matrix inverse of `src`.
    ///
    /// Closed-form formulas are used, which are only available for
    /// extents 1 to 3; larger systems are deliberately unsupported, as
    /// are singular inputs. Callers needing graceful handling must check
    /// invertibility beforehand.
    ///
    /// # Panics
    ///
    /// Panics if `DIM` is 0 or greater than 3, or if `src` is singular.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensorkit::Tensor;
    ///
    /// let mut a: Tensor<2, 2> = Tensor::zeros();
    /// *a.at_mut([0, 0]) = 2.0;
    /// *a.at_mut([1, 1]) = 4.0;
    ///
    /// let mut inv = Tensor::zeros();
    /// inv.invert(&a);
    /// assert_eq!(*inv.at([0, 0]), 0.5);
    /// assert_eq!(*inv.at([1, 1]), 0.25);
    /// ```
    pub fn invert(&mut self, src: &Self) {
        assert!(
            (1..=3).contains(&DIM),
            "closed-form inversion is only defined for extents 1 to 3, not {DIM}"
        );

        let t = |i, j| *src.at([i, j]);

        match DIM {
            1 => {
                assert!(t(0, 0) != T::zero(), "tensor is singular");
                *self.at_mut([0, 0]) = T::one() / t(0, 0);
            }

            2 => {
                let det = t(0, 0) * t(1, 1) - t(0, 1) * t(1, 0);
                assert!(det != T::zero(), "tensor is singular");

                *self.at_mut([0, 0]) = t(1, 1) / det;
                *self.at_mut([0, 1]) = -t(0, 1) / det;
                *self.at_mut([1, 0]) = -t(1, 0) / det;
                *self.at_mut([1, 1]) = t(0, 0) / det;
            }

            3 => {
                let det = t(0, 0) * (t(2, 2) * t(1, 1) - t(2, 1) * t(1, 2))
                    - t(1, 0) * (t(2, 2) * t(0, 1) - t(2, 1) * t(0, 2))
                    + t(2, 0) * (t(1, 2) * t(0, 1) - t(1, 1) * t(0, 2));
                assert!(det != T::zero(), "tensor is singular");

                *self.at_mut([0, 0]) = (t(2, 2) * t(1, 1) - t(2, 1) * t(1, 2)) / det;
                *self.at_mut([0, 1]) = -(t(2, 2) * t(0, 1) - t(2, 1) * t(0, 2)) / det;
                *self.at_mut([0, 2]) = (t(1, 2) * t(0, 1) - t(1, 1) * t(0, 2)) / det;

                *self.at_mut([1, 0]) = -(t(2, 2) * t(1, 0) - t(2, 0) * t(1, 2)) / det;
                *self.at_mut([1, 1]) = (t(2, 2) * t(0, 0) - t(2, 0) * t(0, 2)) / det;
                *self.at_mut([1, 2]) = -(t(1, 2) * t(0, 0) - t(1, 0) * t(0, 2)) / det;

                *self.at_mut([2, 0]) = (t(2, 1) * t(1, 0) - t(2, 0) * t(1, 1)) / det;
                *self.at_mut([2, 1]) = -(t(2, 1) * t(0, 0) - t(2, 0) * t(0, 1)) / det;
                *self.at_mut([2, 2]) = (t(1, 1) * t(0, 0) - t(1, 0) * t(0, 1)) / det;
            }

            _ => unreachable!(),
        }
    }
}

impl<const DIM: usize, const RANK: usize, T: Scalar> Add for &Tensor<DIM, RANK, T> {
    type Output = Tensor<DIM, RANK, T>;

    fn add(self, rhs: Self) -> Tensor<DIM, RANK, T> {
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&x, &y)| x + y)
            .collect();
        Tensor { data }
    }
}

impl<const DIM: usize, const RANK: usize, T: Scalar> Sub for &Tensor<DIM, RANK, T> {
    type Output = Tensor<DIM, RANK, T>;

    fn sub(self, rhs: Self) -> Tensor<DIM, RANK, T> {
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&x, &y)| x - y)
            .collect();
        Tensor { data }
    }
}

impl<const DIM: usize, const RANK: usize, T: Scalar> AddAssign<&Tensor<DIM, RANK, T>>
    for Tensor<DIM, RANK, T>
{
    fn add_assign(&mut self, rhs: &Tensor<DIM, RANK, T>) {
        for (x, &y) in self.data.iter_mut().zip(rhs.data.iter()) {
            *x += y;
        }
    }
}

impl<const DIM: usize, const RANK: usize, T: Scalar> SubAssign<&Tensor<DIM, RANK, T>>
    for Tensor<DIM, RANK, T>
{
    fn sub_assign(&mut self, rhs: &Tensor<DIM, RANK, T>) {
        for (x, &y) in self.data.iter_mut().zip(rhs.data.iter()) {
            *x -= y;
        }
    }
}

impl<const DIM: usize, const RANK: usize, T: Scalar> MulAssign<T> for Tensor<DIM, RANK, T> {
    fn mul_assign(&mut self, scalar: T) {
        for x in &mut self.data {
            *x *= scalar;
        }
    }
}

impl<const DIM: usize, const RANK: usize, T: Scalar> DivAssign<T> for Tensor<DIM, RANK, T> {
    fn div_assign(&mut self, scalar: T) {
        for x in &mut self.data {
            *x /= scalar;
        }
    }
}
