//! Integration tests for runtime-shaped matrices.

use approx::assert_relative_eq;
use tensorkit::{Matrix, Vector};

#[test]
fn test_identity_is_neutral_for_mult() {
    let a = Matrix::from_vec(3, 3, (1..=9).map(f64::from).collect()).unwrap();
    let mut id: Matrix = Matrix::zeros(3, 3);
    id.identity();

    let mut out: Matrix = Matrix::zeros(3, 3);
    out.mult(&a, &id);
    assert_eq!(out, a);
}

#[test]
fn test_matrix_vector_product_via_column_matrix() {
    // M * v == v when M is the identity; the vector rides in an n x 1
    // matrix.
    let v = Vector::from(vec![1.0, 2.0, 3.0]);
    let col = Matrix::from_vec(3, 1, v.data().to_vec()).unwrap();

    let mut id: Matrix = Matrix::zeros(3, 3);
    id.identity();

    let mut out: Matrix = Matrix::zeros(3, 1);
    out.mult(&id, &col);
    assert_eq!(out.data(), v.data());
}

#[test]
fn test_inverse_dim2() {
    let a = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
    let mut inv: Matrix = Matrix::new();
    inv.invert(&a);

    let mut prod: Matrix = Matrix::zeros(2, 2);
    prod.mult(&a, &inv);

    for i in 0..2 {
        for j in 0..2 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(*prod.at(i, j), expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_inverse_dim3() {
    let a = Matrix::from_vec(
        3,
        3,
        vec![3.0, 0.0, 2.0, 2.0, 0.0, -2.0, 0.0, 1.0, 1.0],
    )
    .unwrap();
    let mut inv: Matrix = Matrix::new();
    inv.invert(&a);

    let mut prod: Matrix = Matrix::zeros(3, 3);
    prod.mult(&a, &inv);

    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(*prod.at(i, j), expected, epsilon = 1e-12);
        }
    }
}

#[test]
#[should_panic]
fn test_inverse_rejects_singular() {
    let a = Matrix::from_vec(3, 3, vec![1.0; 9]).unwrap();
    let mut inv: Matrix = Matrix::new();
    inv.invert(&a);
}

#[test]
#[should_panic]
fn test_inverse_rejects_large_order() {
    let a: Matrix = Matrix::zeros(4, 4);
    let mut inv: Matrix = Matrix::new();
    inv.invert(&a);
}

#[test]
fn test_transpose_products_agree_with_explicit_transpose() {
    let a = Matrix::from_vec(3, 2, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]).unwrap();
    let b = Matrix::from_vec(3, 2, vec![7.0, 10.0, 8.0, 11.0, 9.0, 12.0]).unwrap();

    // a^T explicitly.
    let mut at: Matrix = Matrix::zeros(2, 3);
    for i in 0..3 {
        for j in 0..2 {
            *at.at_mut(j, i) = *a.at(i, j);
        }
    }

    let mut expected: Matrix = Matrix::zeros(2, 2);
    expected.mult(&at, &b);

    let mut got: Matrix = Matrix::zeros(2, 2);
    got.tmult(&a, &b);
    assert_eq!(got, expected);
}

#[test]
fn test_products_accumulate() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 1.0]).unwrap();

    let mut out: Matrix = Matrix::zeros(2, 2);
    out.mult(&a, &a);
    out.mult(&a, &a);
    assert_eq!(out.data(), &[2.0, 0.0, 0.0, 2.0]);
}

#[test]
fn test_symmetry_and_norm() {
    let s = Matrix::from_vec(2, 2, vec![1.0, -2.0, -2.0, 3.0]).unwrap();
    assert!(s.is_symmetric());
    assert_eq!(s.norm(), 8.0);

    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert!(!a.is_symmetric());
}

#[test]
fn test_reinit_then_use() {
    let mut m: Matrix = Matrix::zeros(2, 2);
    m.reinit(3, 4, true);
    assert_eq!(m.n_rows(), 3);
    assert_eq!(m.n_cols(), 4);
    assert_eq!(m.n_elements(), 12);
    assert!(m.data().iter().all(|&x| x == 0.0));
}
