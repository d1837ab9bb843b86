//! Fixed-pattern tensor contractions.
//!
//! Each function sums two tensors over shared index ranges following a
//! fixed Einstein-summation pattern and returns a freshly zeroed result.
//! Accumulation is sequential and left to right, so floating-point
//! rounding is reproducible. A general contraction engine is
//! deliberately not provided; these three patterns cover the anticipated
//! physical-tensor use cases (elasticity and piezoelectricity style
//! constitutive relations).

use crate::scalar::Scalar;
use crate::tensor::Tensor;

/// Contract a rank-2 with a rank-4 tensor over the first two indices of
/// the rank-4 operand: `r(k,l) = sum_{i,j} a(i,j) * b(i,j,k,l)`.
///
/// # Examples
///
/// ```
/// use tensorkit::{contract_rank2_rank4, Tensor};
///
/// let a: Tensor<2, 2> = Tensor::zeros();
/// let b: Tensor<2, 4> = Tensor::zeros();
/// let r = contract_rank2_rank4(&a, &b);
/// assert_eq!(r.n_components(), 4);
/// assert!(r.data().iter().all(|&x| x == 0.0));
/// ```
pub fn contract_rank2_rank4<const DIM: usize, T: Scalar>(
    a: &Tensor<DIM, 2, T>,
    b: &Tensor<DIM, 4, T>,
) -> Tensor<DIM, 2, T> {
    let mut out = Tensor::zeros();

    for i in 0..DIM {
        for j in 0..DIM {
            for k in 0..DIM {
                for l in 0..DIM {
                    *out.at_mut([k, l]) += *a.at([i, j]) * *b.at([i, j, k, l]);
                }
            }
        }
    }

    out
}

/// Contract a rank-4 with a rank-2 tensor over the last two indices of
/// the rank-4 operand: `r(i,j) = sum_{k,l} a(i,j,k,l) * b(k,l)`.
pub fn contract_rank4_rank2<const DIM: usize, T: Scalar>(
    a: &Tensor<DIM, 4, T>,
    b: &Tensor<DIM, 2, T>,
) -> Tensor<DIM, 2, T> {
    let mut out = Tensor::zeros();

    for i in 0..DIM {
        for j in 0..DIM {
            for k in 0..DIM {
                for l in 0..DIM {
                    *out.at_mut([i, j]) += *a.at([i, j, k, l]) * *b.at([k, l]);
                }
            }
        }
    }

    out
}

/// Contract a rank-3 with a rank-2 tensor over the last two indices of
/// the rank-3 operand: `r(i) = sum_{j,k} a(i,j,k) * b(j,k)`.
pub fn contract_rank3_rank2<const DIM: usize, T: Scalar>(
    a: &Tensor<DIM, 3, T>,
    b: &Tensor<DIM, 2, T>,
) -> Tensor<DIM, 1, T> {
    let mut out = Tensor::zeros();

    for i in 0..DIM {
        for j in 0..DIM {
            for k in 0..DIM {
                *out.at_mut([i]) += *a.at([i, j, k]) * *b.at([j, k]);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_rank2_rank4_values() {
        // With b(i,j,k,l) = 1 everywhere, r(k,l) = sum over a.
        let a: Tensor<2, 2> = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b: Tensor<2, 4> = Tensor::from_vec(vec![1.0; 16]).unwrap();

        let r = contract_rank2_rank4(&a, &b);
        assert!(r.data().iter().all(|&x| x == 10.0));
    }

    #[test]
    fn test_contract_rank4_rank2_identity_pattern() {
        // a(i,j,k,l) = delta(i,k) * delta(j,l) reproduces b.
        let mut a: Tensor<2, 4> = Tensor::zeros();
        for i in 0..2 {
            for j in 0..2 {
                *a.at_mut([i, j, i, j]) = 1.0;
            }
        }
        let b: Tensor<2, 2> = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0]).unwrap();

        let r = contract_rank4_rank2(&a, &b);
        assert_eq!(r, b);
    }

    #[test]
    fn test_contract_rank3_rank2_values() {
        let mut a: Tensor<2, 3> = Tensor::zeros();
        *a.at_mut([0, 0, 0]) = 1.0;
        *a.at_mut([0, 1, 1]) = 2.0;
        *a.at_mut([1, 0, 1]) = 3.0;

        let mut b: Tensor<2, 2> = Tensor::zeros();
        *b.at_mut([0, 0]) = 1.0;
        *b.at_mut([1, 1]) = 1.0;
        *b.at_mut([0, 1]) = 2.0;

        let r = contract_rank3_rank2(&a, &b);
        // r(0) = a(0,0,0)*b(0,0) + a(0,1,1)*b(1,1) = 1 + 2
        // r(1) = a(1,0,1)*b(0,1) = 6
        assert_eq!(*r.at([0]), 3.0);
        assert_eq!(*r.at([1]), 6.0);
    }

    #[test]
    fn test_contract_zero_gives_zero() {
        let a: Tensor<3, 4> = Tensor::zeros();
        let b: Tensor<3, 2> = Tensor::from_vec((0..9).map(f64::from).collect()).unwrap();
        let r = contract_rank4_rank2(&a, &b);
        assert_eq!(r, Tensor::zeros());
    }
}
