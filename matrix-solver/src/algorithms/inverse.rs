use matrix_core::{DenseMatrix, MatrixError};

use super::elimination::{Elimination, Reduction};
use super::{GaussJordanInverse, MatrixAlgorithm};

impl MatrixAlgorithm<DenseMatrix> for GaussJordanInverse {
    type Output = DenseMatrix;

    /// Reduces the augmented buffer `[A | I]` until the left block is the
    /// identity, then returns the right block.
    fn run(&self, a: &DenseMatrix) -> Result<DenseMatrix, MatrixError> {
        self.validate_inputs(a)?;
        let n = a.rows();
        let width = 2 * n;

        let mut augmented = DenseMatrix::create(n, width)?;
        let buf = augmented.data_mut();
        for (i, src_row) in a.data().chunks(n.max(1)).enumerate() {
            let dst_row = &mut buf[i * width..(i + 1) * width];
            dst_row[..n].copy_from_slice(src_row);
            dst_row[n + i] = 1.0;
        }

        let outcome = Elimination::new(buf, n, width, self.pivot_epsilon)?
            .run(Reduction::GaussJordan)
            .map_err(|singular| {
                log::debug!("Inverse failed: {}", singular);
                MatrixError::from(singular)
            })?;
        log::debug!(
            "Inverted {}x{} matrix with {} row swap(s)",
            n,
            n,
            outcome.row_swaps
        );

        let mut inv = DenseMatrix::create(n, n)?;
        for (i, dst_row) in inv.data_mut().chunks_mut(n.max(1)).enumerate() {
            dst_row.copy_from_slice(&buf[i * width + n..(i + 1) * width]);
        }
        Ok(inv)
    }
}
