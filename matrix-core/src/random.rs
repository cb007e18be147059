use fastrand::Rng;

use crate::dense_matrix::DenseMatrix;
use crate::error::Result;

/// Fills every entry of `matrix` independently and uniformly from `[min, max]`.
/// The bounds are swapped first when `max < min`.
///
/// Samples come from [`Rng::f64`], which is half-open, so `max` itself is never
/// drawn unless `min == max`.
pub fn random_fill(matrix: &mut DenseMatrix, min: f64, max: f64, rng: &mut Rng) {
    let (lo, hi) = if max < min { (max, min) } else { (min, max) };
    for value in matrix.data_mut() {
        let t = rng.f64();
        // Convex combination; `hi - lo` may overflow for wide finite bounds.
        *value = (lo * (1.0 - t) + hi * t).max(lo).min(hi);
    }
}

impl DenseMatrix {
    /// Allocates a `rows x cols` matrix filled by [`random_fill`].
    pub fn random(rows: usize, cols: usize, min: f64, max: f64, rng: &mut Rng) -> Result<Self> {
        let mut matrix = DenseMatrix::create(rows, cols)?;
        random_fill(&mut matrix, min, max, rng);
        Ok(matrix)
    }
}
