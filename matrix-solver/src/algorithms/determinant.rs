use matrix_core::{DenseMatrix, MatrixError};

use super::elimination::{Elimination, Reduction};
use super::{Determinant, MatrixAlgorithm};

impl MatrixAlgorithm<DenseMatrix> for Determinant {
    type Output = f64;

    /// Reduces a scratch copy of `a` to upper-triangular form and returns
    /// `sign * product(pivots)`.
    ///
    /// A pivot below `pivot_epsilon` ends the reduction early with `0.0`.
    /// The `0 x 0` matrix has determinant `1.0`.
    fn run(&self, a: &DenseMatrix) -> Result<f64, MatrixError> {
        self.validate_inputs(a)?;
        let n = a.rows();
        let mut work = a.data().to_vec();

        let elimination = Elimination::new(&mut work, n, n, self.pivot_epsilon)?;
        match elimination.run(Reduction::UpperTriangular) {
            Ok(outcome) => {
                log::debug!(
                    "Determinant of {}x{} matrix: {} row swap(s)",
                    n,
                    n,
                    outcome.row_swaps
                );
                Ok(outcome.sign() * outcome.pivot_product)
            }
            Err(singular) => {
                log::debug!("Determinant is zero: {}", singular);
                Ok(0.0)
            }
        }
    }
}
