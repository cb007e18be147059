//! # Matrix Core Library
//!
//! Provides the dense matrix type, elementary algebra and the text codec shared by
//! the solver algorithms and the toolbox.

// Declare modules
pub mod codec;
pub mod dense_matrix;
pub mod error;
mod ops;
pub mod random;
pub mod traits;

// Re-export public types
pub use dense_matrix::DenseMatrix;
pub use error::{MatrixError, Result};
pub use random::random_fill;
pub use traits::Matrix;

/// Pivots with magnitude below this are treated as zero by the elimination kernels.
pub const EPS: f64 = 1e-12;

// --- Elementary operations on DenseMatrix ---
// The kernels live in `ops`; these are the public entry points.

impl DenseMatrix {
    /// Elementwise sum `self + other`.
    ///
    /// # Errors
    /// Returns `MatrixError::DimensionMismatch` unless both shapes are equal.
    pub fn add(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        ops::internal_add_sub(self, other, false)
    }

    /// Elementwise difference `self - other`.
    ///
    /// # Errors
    /// Returns `MatrixError::DimensionMismatch` unless both shapes are equal.
    pub fn subtract(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        ops::internal_add_sub(self, other, true)
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    /// Returns `MatrixError::DimensionMismatch` unless `self.cols() == other.rows()`.
    pub fn multiply(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        ops::internal_multiply(self, other)
    }

    /// Returns a new matrix with rows and columns swapped.
    pub fn transpose(&self) -> Result<DenseMatrix> {
        ops::internal_transpose(self)
    }
}

/// Free-function form of [`DenseMatrix::add`].
pub fn add(a: &DenseMatrix, b: &DenseMatrix) -> Result<DenseMatrix> {
    a.add(b)
}

/// Free-function form of [`DenseMatrix::subtract`].
pub fn subtract(a: &DenseMatrix, b: &DenseMatrix) -> Result<DenseMatrix> {
    a.subtract(b)
}

/// Free-function form of [`DenseMatrix::multiply`].
pub fn multiply(a: &DenseMatrix, b: &DenseMatrix) -> Result<DenseMatrix> {
    a.multiply(b)
}

/// Free-function form of [`DenseMatrix::transpose`].
pub fn transpose(a: &DenseMatrix) -> Result<DenseMatrix> {
    a.transpose()
}
