//! CPU kernels for the elementary matrix operations.
//!
//! Every kernel reads its operands and writes into a freshly allocated result;
//! operands are never mutated.

use crate::dense_matrix::DenseMatrix;
use crate::error::{MatrixError, Result};
use crate::traits::Matrix;

/// Shared body of `add` and `subtract`: `c = a + sign * b`.
pub(crate) fn internal_add_sub(
    a: &DenseMatrix,
    b: &DenseMatrix,
    subtract: bool,
) -> Result<DenseMatrix> {
    if a.dims() != b.dims() {
        return Err(MatrixError::DimensionMismatch {
            op: if subtract { "subtract" } else { "add" },
            left: a.dims(),
            right: b.dims(),
        });
    }
    let mut c = DenseMatrix::create(a.rows(), a.cols())?;
    for ((out, &x), &y) in c.data_mut().iter_mut().zip(a.data()).zip(b.data()) {
        *out = if subtract { x - y } else { x + y };
    }
    Ok(c)
}

/// Standard product `c = a * b` in `i, k, j` order so the inner loop walks
/// contiguous rows of both `b` and `c`.
pub(crate) fn internal_multiply(a: &DenseMatrix, b: &DenseMatrix) -> Result<DenseMatrix> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            op: "multiply",
            left: a.dims(),
            right: b.dims(),
        });
    }
    let (n, inner, m) = (a.rows(), a.cols(), b.cols());
    let mut c = DenseMatrix::create(n, m)?;
    let (a_data, b_data) = (a.data(), b.data());
    let c_data = c.data_mut();
    for i in 0..n {
        let c_row = &mut c_data[i * m..(i + 1) * m];
        for k in 0..inner {
            let aik = a_data[i * inner + k];
            let b_row = &b_data[k * m..(k + 1) * m];
            for (cij, &bkj) in c_row.iter_mut().zip(b_row) {
                *cij += aik * bkj;
            }
        }
    }
    Ok(c)
}

pub(crate) fn internal_transpose(a: &DenseMatrix) -> Result<DenseMatrix> {
    let (rows, cols) = a.dims();
    let mut t = DenseMatrix::create(cols, rows)?;
    let src = a.data();
    let dst = t.data_mut();
    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }
    Ok(t)
}
