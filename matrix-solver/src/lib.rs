//! `matrix-solver`: elimination-based linear algebra kernels for dense matrices.
//!
//! Determinant and inverse are both driven by a shared partial-pivoting
//! elimination engine that works on a private scratch copy of its input.

// Core modules
pub mod algorithms;

// Re-export from matrix_core
pub use matrix_core::{DenseMatrix, Matrix, MatrixError, Result, EPS};

use algorithms::{Determinant, GaussJordanInverse, MatrixAlgorithm};

/// Determinant of `a` with the default pivot threshold.
///
/// # Errors
/// Returns `MatrixError::NotSquare` if `a` is not square.
pub fn determinant(a: &DenseMatrix) -> Result<f64> {
    Determinant::default().run(a)
}

/// Inverse of `a` with the default pivot threshold.
///
/// # Errors
/// Returns `MatrixError::NotSquare` if `a` is not square and
/// `MatrixError::SingularMatrix` if a pivot falls below the threshold.
pub fn inverse(a: &DenseMatrix) -> Result<DenseMatrix> {
    GaussJordanInverse::default().run(a)
}
