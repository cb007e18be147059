//! Partial-pivoting row reduction over a row-major working buffer.
//!
//! The engine borrows an `n x width` buffer (`width >= n`) that the caller owns
//! and reduces the leading `n` columns. Callers hand in a scratch copy, never
//! the user's matrix.

use matrix_core::MatrixError;
use thiserror::Error;

/// How far each pivot step reduces the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// Eliminate below the pivot only. Used for the determinant.
    UpperTriangular,
    /// Normalise the pivot row, then clear the pivot column in every other row.
    GaussJordan,
}

/// Bookkeeping of a completed elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct EliminationOutcome {
    /// Number of row interchanges performed.
    pub row_swaps: usize,
    /// Product of the pivots as they were met (before normalisation).
    pub pivot_product: f64,
}

impl EliminationOutcome {
    /// `+1.0` for an even number of swaps, `-1.0` for odd.
    pub fn sign(&self) -> f64 {
        if self.row_swaps % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }
}

/// The best available pivot in column `index` was below the threshold.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("pivot {index} has magnitude {value:e}, below threshold")]
pub struct SingularPivot {
    pub index: usize,
    pub value: f64,
}

impl From<SingularPivot> for MatrixError {
    fn from(err: SingularPivot) -> Self {
        MatrixError::SingularMatrix { pivot: err.index }
    }
}

#[derive(Debug)]
pub struct Elimination<'a> {
    buf: &'a mut [f64],
    rows: usize,
    width: usize,
    pivot_epsilon: f64,
}

impl<'a> Elimination<'a> {
    /// Wraps a `rows x width` row-major buffer.
    ///
    /// # Errors
    /// Returns `MatrixError::DimensionMismatch` if the buffer length does not match
    /// or `width < rows`.
    pub fn new(
        buf: &'a mut [f64],
        rows: usize,
        width: usize,
        pivot_epsilon: f64,
    ) -> Result<Self, MatrixError> {
        if width < rows || rows.checked_mul(width) != Some(buf.len()) {
            return Err(MatrixError::DimensionMismatch {
                op: "elimination",
                left: (rows, width),
                right: (buf.len(), 1),
            });
        }
        Ok(Self {
            buf,
            rows,
            width,
            pivot_epsilon,
        })
    }

    /// Runs all `rows` pivot steps in the given mode.
    ///
    /// Stops at the first pivot whose magnitude is below the threshold; the buffer
    /// is then left partially reduced and should be discarded.
    pub fn run(mut self, mode: Reduction) -> Result<EliminationOutcome, SingularPivot> {
        let mut outcome = EliminationOutcome {
            row_swaps: 0,
            pivot_product: 1.0,
        };
        for i in 0..self.rows {
            let piv = self.select_pivot(i);
            let value = self.at(piv, i);
            if value.abs() < self.pivot_epsilon {
                return Err(SingularPivot { index: i, value });
            }
            if piv != i {
                log::trace!("Swapping rows {} and {}", i, piv);
                self.swap_rows(i, piv);
                outcome.row_swaps += 1;
            }
            outcome.pivot_product *= value;
            match mode {
                Reduction::UpperTriangular => self.eliminate_below(i, value),
                Reduction::GaussJordan => self.gauss_jordan_step(i, value),
            }
        }
        Ok(outcome)
    }

    fn at(&self, row: usize, col: usize) -> f64 {
        self.buf[row * self.width + col]
    }

    /// First row in `i..rows` holding the largest magnitude in column `i`.
    fn select_pivot(&self, i: usize) -> usize {
        let mut piv = i;
        for r in i + 1..self.rows {
            if self.at(r, i).abs() > self.at(piv, i).abs() {
                piv = r;
            }
        }
        piv
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.buf.split_at_mut(hi * self.width);
        head[lo * self.width..(lo + 1) * self.width].swap_with_slice(&mut tail[..self.width]);
    }

    fn eliminate_below(&mut self, i: usize, pivot: f64) {
        for r in i + 1..self.rows {
            let (target, source) = row_pair(self.buf, self.width, r, i);
            let factor = target[i] / pivot;
            for (t, &s) in target[i..].iter_mut().zip(&source[i..]) {
                *t -= factor * s;
            }
        }
    }

    fn gauss_jordan_step(&mut self, i: usize, pivot: f64) {
        let width = self.width;
        for v in &mut self.buf[i * width..(i + 1) * width] {
            *v /= pivot;
        }
        for r in (0..self.rows).filter(|&r| r != i) {
            let (target, source) = row_pair(self.buf, width, r, i);
            let factor = target[i];
            if factor.abs() < self.pivot_epsilon {
                continue;
            }
            for (t, &s) in target.iter_mut().zip(source) {
                *t -= factor * s;
            }
        }
    }
}

/// Borrows row `target` mutably and row `source` shared. The rows must differ.
fn row_pair(buf: &mut [f64], width: usize, target: usize, source: usize) -> (&mut [f64], &[f64]) {
    debug_assert_ne!(target, source);
    if target < source {
        let (head, tail) = buf.split_at_mut(source * width);
        (&mut head[target * width..(target + 1) * width], &tail[..width])
    } else {
        let (head, tail) = buf.split_at_mut(target * width);
        (&mut tail[..width], &head[source * width..(source + 1) * width])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_core::EPS;

    #[test]
    fn test_pivot_picks_largest_magnitude() {
        let mut buf = vec![1.0, 0.0, 0.0, -5.0, 0.0, 0.0, 3.0, 0.0, 0.0];
        let elim = Elimination::new(&mut buf, 3, 3, EPS).unwrap();
        assert_eq!(elim.select_pivot(0), 1);
    }

    #[test]
    fn test_pivot_tie_keeps_first_occurrence() {
        let mut buf = vec![2.0, 1.0, 1.0, -2.0, 1.0, 1.0, 2.0, 1.0, 1.0];
        let elim = Elimination::new(&mut buf, 3, 3, EPS).unwrap();
        assert_eq!(elim.select_pivot(0), 0);
    }

    #[test]
    fn test_upper_triangular_counts_swaps() {
        // [[0, 1], [1, 0]] needs one swap; pivots are 1 and 1.
        let mut buf = vec![0.0, 1.0, 1.0, 0.0];
        let outcome = Elimination::new(&mut buf, 2, 2, EPS)
            .unwrap()
            .run(Reduction::UpperTriangular)
            .unwrap();
        assert_eq!(outcome.row_swaps, 1);
        assert_eq!(outcome.sign(), -1.0);
        assert_eq!(outcome.pivot_product, 1.0);
        assert_eq!(buf, vec![1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_gauss_jordan_reduces_left_block_to_identity() {
        // [A | I] with A = [[4, 7], [2, 6]]
        let mut buf = vec![4.0, 7.0, 1.0, 0.0, 2.0, 6.0, 0.0, 1.0];
        Elimination::new(&mut buf, 2, 4, EPS)
            .unwrap()
            .run(Reduction::GaussJordan)
            .unwrap();
        let expected = [1.0, 0.0, 0.6, -0.7, 0.0, 1.0, -0.2, 0.4];
        for (got, want) in buf.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "got {}, want {}", got, want);
        }
    }

    #[test]
    fn test_singular_pivot_reported() {
        let mut buf = vec![1.0, 2.0, 2.0, 4.0];
        let err = Elimination::new(&mut buf, 2, 2, EPS)
            .unwrap()
            .run(Reduction::UpperTriangular)
            .unwrap_err();
        assert_eq!(err.index, 1);
        assert!(err.value.abs() < EPS);
        assert!(matches!(
            MatrixError::from(err),
            MatrixError::SingularMatrix { pivot: 1 }
        ));
    }

    #[test]
    fn test_buffer_shape_checked() {
        let mut buf = vec![0.0; 5];
        assert!(Elimination::new(&mut buf, 2, 2, EPS).is_err());
        let mut buf = vec![0.0; 6];
        assert!(Elimination::new(&mut buf, 3, 2, EPS).is_err());
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf: Vec<f64> = Vec::new();
        let outcome = Elimination::new(&mut buf, 0, 0, EPS)
            .unwrap()
            .run(Reduction::GaussJordan)
            .unwrap();
        assert_eq!(outcome.pivot_product, 1.0);
        assert_eq!(outcome.row_swaps, 0);
    }
}
