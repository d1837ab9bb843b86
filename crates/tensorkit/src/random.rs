//! Random construction of tensors, matrices and vectors.
//!
//! This module provides constructors that fill containers with random
//! values, either uniform on [0, 1) or standard normal.

use rand::Rng;
use rand::distr::StandardUniform;
use rand_distr::StandardNormal;

use crate::matrix::Matrix;
use crate::scalar::{Scalar, c64};
use crate::tensor::Tensor;
use crate::vector::Vector;

/// Trait for types that can be randomly sampled from a uniform distribution.
pub trait RandomUniform: Scalar {
    /// Sample a random value from the uniform distribution [0, 1).
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self;
}

impl RandomUniform for f64 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

impl RandomUniform for c64 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        c64::new(rng.sample(StandardUniform), rng.sample(StandardUniform))
    }
}

/// Trait for types that can be randomly sampled from a normal distribution.
pub trait RandomNormal: Scalar {
    /// Sample a random value from the standard normal distribution.
    fn sample_normal<R: Rng>(rng: &mut R) -> Self;
}

impl RandomNormal for f64 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl RandomNormal for c64 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        // Standard complex normal: real and imaginary parts are independent
        // N(0, 1/2) so that |z|^2 has mean 1
        let scale = std::f64::consts::FRAC_1_SQRT_2;
        c64::new(
            rng.sample::<f64, _>(StandardNormal) * scale,
            rng.sample::<f64, _>(StandardNormal) * scale,
        )
    }
}

impl<const DIM: usize, const RANK: usize, T: RandomUniform> Tensor<DIM, RANK, T> {
    /// Create a tensor with uniform random values in [0, 1).
    ///
    /// # Example
    ///
    /// ```
    /// use tensorkit::Tensor;
    ///
    /// let t: Tensor<2, 3> = Tensor::random();
    /// for &v in t.data() {
    ///     assert!((0.0..1.0).contains(&v));
    /// }
    /// ```
    pub fn random() -> Self {
        Self::random_with_rng(&mut rand::rng())
    }

    /// Create a tensor with uniform random values using a specific RNG.
    ///
    /// This is useful for reproducible results with a seeded RNG.
    ///
    /// # Example
    ///
    /// ```
    /// use tensorkit::Tensor;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let t1: Tensor<3, 2> = Tensor::random_with_rng(&mut rng);
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let t2: Tensor<3, 2> = Tensor::random_with_rng(&mut rng);
    ///
    /// assert_eq!(t1, t2);
    /// ```
    pub fn random_with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut t = Self::zeros();
        for x in t.data_mut() {
            *x = T::sample_uniform(rng);
        }
        t
    }
}

impl<const DIM: usize, const RANK: usize, T: RandomNormal> Tensor<DIM, RANK, T> {
    /// Create a tensor with standard normal random values.
    pub fn randn() -> Self {
        Self::randn_with_rng(&mut rand::rng())
    }

    /// Create a tensor with standard normal random values using a
    /// specific RNG.
    pub fn randn_with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut t = Self::zeros();
        for x in t.data_mut() {
            *x = T::sample_normal(rng);
        }
        t
    }
}

impl<T: RandomUniform> Matrix<T> {
    /// Create an `n_rows x n_cols` matrix with uniform random values in
    /// [0, 1).
    pub fn random(n_rows: usize, n_cols: usize) -> Self {
        Self::random_with_rng(n_rows, n_cols, &mut rand::rng())
    }

    /// Create a random matrix using a specific RNG.
    pub fn random_with_rng<R: Rng>(n_rows: usize, n_cols: usize, rng: &mut R) -> Self {
        let mut m = Self::zeros(n_rows, n_cols);
        for x in m.data_mut() {
            *x = T::sample_uniform(rng);
        }
        m
    }
}

impl<T: RandomNormal> Matrix<T> {
    /// Create an `n_rows x n_cols` matrix with standard normal random
    /// values.
    pub fn randn(n_rows: usize, n_cols: usize) -> Self {
        Self::randn_with_rng(n_rows, n_cols, &mut rand::rng())
    }

    /// Create a normal random matrix using a specific RNG.
    pub fn randn_with_rng<R: Rng>(n_rows: usize, n_cols: usize, rng: &mut R) -> Self {
        let mut m = Self::zeros(n_rows, n_cols);
        for x in m.data_mut() {
            *x = T::sample_normal(rng);
        }
        m
    }
}

impl<T: RandomUniform> Vector<T> {
    /// Create a length-`n` vector with uniform random values in [0, 1).
    pub fn random(n: usize) -> Self {
        Self::random_with_rng(n, &mut rand::rng())
    }

    /// Create a random vector using a specific RNG.
    pub fn random_with_rng<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut v = Self::zeros(n);
        for x in v.data_mut() {
            *x = T::sample_uniform(rng);
        }
        v
    }
}

impl<T: RandomNormal> Vector<T> {
    /// Create a length-`n` vector with standard normal random values.
    pub fn randn(n: usize) -> Self {
        Self::randn_with_rng(n, &mut rand::rng())
    }

    /// Create a normal random vector using a specific RNG.
    pub fn randn_with_rng<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut v = Self::zeros(n);
        for x in v.data_mut() {
            *x = T::sample_normal(rng);
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_f64() {
        let t: Tensor<2, 3> = Tensor::random();
        assert_eq!(t.n_components(), 8);
        for &v in t.data() {
            assert!((0.0..1.0).contains(&v), "value {} not in [0, 1)", v);
        }
    }

    #[test]
    fn test_random_c64() {
        let t: Tensor<2, 2, c64> = Tensor::random();
        for v in t.data() {
            assert!((0.0..1.0).contains(&v.re));
            assert!((0.0..1.0).contains(&v.im));
        }
    }

    #[test]
    fn test_random_reproducible() {
        let mut rng1 = StdRng::seed_from_u64(12345);
        let t1: Tensor<3, 2> = Tensor::random_with_rng(&mut rng1);

        let mut rng2 = StdRng::seed_from_u64(12345);
        let t2: Tensor<3, 2> = Tensor::random_with_rng(&mut rng2);

        assert_eq!(t1, t2);
    }

    #[test]
    fn test_randn_mean_and_variance() {
        let v: Vector = Vector::randn(100);

        let sum: f64 = v.data().iter().sum();
        let mean = sum / 100.0;
        assert!(mean.abs() < 0.5, "mean {} too far from 0", mean);

        let var: f64 = v.data().iter().map(|x| (x - mean).powi(2)).sum::<f64>() / 100.0;
        assert!(var > 0.3 && var < 2.0, "variance {} too far from 1", var);
    }

    #[test]
    fn test_randn_c64() {
        let v: Vector<c64> = Vector::randn(100);

        // For complex normal, |z|^2 should have mean 1
        let sum_sq: f64 = v.data().iter().map(|z| z.re * z.re + z.im * z.im).sum();
        let mean_sq = sum_sq / 100.0;
        assert!(
            mean_sq > 0.3 && mean_sq < 2.0,
            "mean |z|^2 {} too far from 1",
            mean_sq
        );
    }

    #[test]
    fn test_random_matrix_shape() {
        let m: Matrix = Matrix::random(2, 5);
        assert_eq!(m.n_rows(), 2);
        assert_eq!(m.n_cols(), 5);
        for &v in m.data() {
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_randn_reproducible() {
        let mut rng1 = StdRng::seed_from_u64(54321);
        let m1: Matrix = Matrix::randn_with_rng(3, 4, &mut rng1);

        let mut rng2 = StdRng::seed_from_u64(54321);
        let m2: Matrix = Matrix::randn_with_rng(3, 4, &mut rng2);

        assert_eq!(m1, m2);
    }

    #[test]
    fn test_random_rank0() {
        let t: Tensor<3, 0> = Tensor::random();
        assert_eq!(t.n_components(), 1);
    }
}
