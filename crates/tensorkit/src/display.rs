//! Plain-text formatting helpers.
//!
//! Components are printed space-separated, with a leading space in front
//! of non-negative values so that columns of mixed-sign data line up:
//!
//! ```text
//!  1 -2  3
//! -4  5 -6
//! ```

use std::fmt::Write;

use crate::matrix::Matrix;
use crate::scalar::RealScalar;
use crate::tensor::Tensor;
use crate::vector::Vector;

/// One line of components; non-negative values get a leading space so
/// they align with negative ones.
fn format_components<T: RealScalar>(components: &[T]) -> String {
    let mut line = String::new();
    for &x in components {
        if x < T::zero() {
            let _ = write!(line, "{x} ");
        } else {
            let _ = write!(line, " {x} ");
        }
    }
    line
}

/// Format every component of a tensor on a single line, in storage
/// order.
pub fn format_tensor<const DIM: usize, const RANK: usize, T: RealScalar>(
    t: &Tensor<DIM, RANK, T>,
) -> String {
    format_components(t.data())
}

/// Format a matrix row by row, one line per row.
///
/// # Examples
///
/// ```
/// use tensorkit::{format_matrix, Matrix};
///
/// let m = Matrix::from_vec(2, 2, vec![1.0, -2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(format_matrix(&m), " 1 -2 \n 3  4 \n");
/// ```
pub fn format_matrix<T: RealScalar>(m: &Matrix<T>) -> String {
    let mut out = String::new();
    for i in 0..m.n_rows() {
        let row = &m.data()[m.n_cols() * i..m.n_cols() * (i + 1)];
        out.push_str(&format_components(row));
        out.push('\n');
    }
    out
}

/// Format every component of a vector on a single line.
pub fn format_vector<T: RealScalar>(v: &Vector<T>) -> String {
    format_components(v.data())
}
