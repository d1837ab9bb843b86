//! tensorkit - small dense tensors, matrices and vectors
//!
//! This crate provides fixed-extent physical tensors of arbitrary rank
//! alongside runtime-shaped matrices and vectors, aimed at the small
//! objects that show up in continuum mechanics (stress and strain
//! tensors, stiffness tensors, local element matrices).
//!
//! # Architecture
//!
//! Three container families share one scalar abstraction:
//!
//! ```text
//! Tensor<DIM, RANK, T>  fixed extent and rank, dim^rank components
//!     → arithmetic, scale-add, Voigt sizing, closed-form inversion
//! Matrix<T>             runtime shape, row-major
//!     → products, closed-form inversion for orders 1..=3
//! Vector<T>             runtime length
//!     → norms, normalization, diagonal extraction
//! ```
//!
//! Contractions between tensors live in [`contract`]; they cover the
//! fixed patterns used by constitutive relations rather than a general
//! einsum.
//!
//! # Example
//!
//! ```
//! use tensorkit::Tensor;
//!
//! // A rank-2 tensor over a 3-dimensional space: 9 components.
//! let mut t: Tensor<3, 2> = Tensor::zeros();
//! *t.at_mut([0, 1]) = 5.0;
//! assert_eq!(*t.at([0, 1]), 5.0);
//! assert_eq!(t.n_components(), 9);
//!
//! // Runtime-shaped linear algebra.
//! use tensorkit::Matrix;
//! let mut m: Matrix = Matrix::zeros(3, 3);
//! m.identity();
//! assert!(m.is_symmetric());
//! ```

pub mod contract;
pub mod display;
pub mod error;
pub mod index;
pub mod matrix;
pub mod random;
pub mod scalar;
pub mod tensor;
pub mod vector;

pub use contract::{contract_rank2_rank4, contract_rank3_rank2, contract_rank4_rank2};
pub use display::{format_matrix, format_tensor, format_vector};
pub use error::AlgebraError;
pub use matrix::Matrix;
pub use random::{RandomNormal, RandomUniform};
pub use scalar::{RealScalar, Scalar, c64};
pub use tensor::Tensor;
pub use vector::Vector;
