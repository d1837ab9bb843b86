//! Scalar trait for tensor, matrix and vector element types.

use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Double-precision complex scalar.
pub use num_complex::Complex64 as c64;

/// Trait for scalar types supported by the containers in this crate.
///
/// A scalar is a field element: it can be added, subtracted, multiplied
/// and divided, has an additive and a multiplicative identity, and has a
/// real-valued magnitude. Both real (`f64`) and complex (`c64`) scalars
/// are supported.
pub trait Scalar:
    Copy
    + Debug
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// The real type associated with this scalar.
    type Real: RealScalar;

    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Embed a real value into this scalar type.
    fn from_real(r: Self::Real) -> Self;

    /// Absolute value (modulus for complex scalars).
    fn abs(self) -> Self::Real;

    /// Squared absolute value. Cheaper than `abs` when the square root
    /// is not needed.
    fn abs_sqr(self) -> Self::Real;
}

/// Refinement of [`Scalar`] for ordered real types.
pub trait RealScalar: Scalar<Real = Self> + PartialOrd + Display {
    /// Square root.
    fn sqrt(self) -> Self;

    /// Raise to an integer power.
    fn powi(self, n: i32) -> Self;

    /// Raise to a real power.
    fn powf(self, p: Self) -> Self;

    /// Convert a small non-negative integer into this type.
    fn from_u32(n: u32) -> Self;
}

impl Scalar for f64 {
    type Real = f64;

    fn one() -> Self {
        1.0
    }

    fn from_real(r: f64) -> Self {
        r
    }

    fn abs(self) -> f64 {
        f64::abs(self)
    }

    fn abs_sqr(self) -> f64 {
        self * self
    }
}

impl RealScalar for f64 {
    fn sqrt(self) -> f64 {
        f64::sqrt(self)
    }

    fn powi(self, n: i32) -> f64 {
        f64::powi(self, n)
    }

    fn powf(self, p: f64) -> f64 {
        f64::powf(self, p)
    }

    fn from_u32(n: u32) -> f64 {
        f64::from(n)
    }
}

impl Scalar for c64 {
    type Real = f64;

    fn one() -> Self {
        c64::new(1.0, 0.0)
    }

    fn from_real(r: f64) -> Self {
        c64::new(r, 0.0)
    }

    fn abs(self) -> f64 {
        self.norm()
    }

    fn abs_sqr(self) -> f64 {
        self.norm_sqr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
        assert_eq!(c64::zero(), c64::new(0.0, 0.0));
        assert_eq!(c64::one(), c64::new(1.0, 0.0));
    }

    #[test]
    fn test_abs_f64() {
        assert_eq!(Scalar::abs(-2.5), 2.5);
        assert_eq!(Scalar::abs_sqr(-2.0), 4.0);
    }

    #[test]
    fn test_abs_c64() {
        let z = c64::new(3.0, 4.0);
        assert_eq!(z.abs(), 5.0);
        assert_eq!(z.abs_sqr(), 25.0);
    }

    #[test]
    fn test_from_real() {
        assert_eq!(c64::from_real(2.0), c64::new(2.0, 0.0));
        assert_eq!(<f64 as Scalar>::from_real(2.0), 2.0);
    }
}
