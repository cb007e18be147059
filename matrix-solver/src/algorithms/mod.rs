use matrix_core::{Matrix, MatrixError, EPS};

// --- Algorithm Trait Definition ---
/// Trait representing an algorithm that consumes a matrix and produces a result.
/// Generic over the Matrix type it supports.
pub trait MatrixAlgorithm<M: Matrix> {
    type Output;

    /// Runs the algorithm on `a`. The input is never mutated.
    fn run(&self, a: &M) -> Result<Self::Output, MatrixError>;

    // Helper for input validation, can be called by implementations.
    fn validate_inputs(&self, a: &M) -> Result<(), MatrixError> {
        if !a.is_square() {
            let (rows, cols) = a.dims();
            return Err(MatrixError::NotSquare { rows, cols });
        }
        Ok(())
    }
}

// --- Algorithm Implementations ---

pub mod determinant; // Upper-triangular elimination, product of pivots
pub mod elimination; // Shared partial-pivoting engine
pub mod inverse; // Gauss-Jordan on [A | I]

// --- Algorithm Struct Definitions ---

/// Determinant via Gaussian elimination with partial pivoting.
#[derive(Debug, Clone)]
pub struct Determinant {
    /// Pivots with smaller magnitude end the elimination with a zero determinant.
    pub pivot_epsilon: f64,
}

impl Default for Determinant {
    fn default() -> Self {
        Self { pivot_epsilon: EPS }
    }
}

impl Determinant {
    /// Creates a new instance with default parameters.
    pub fn new() -> Self {
        Self::default()
    }
    /// Creates a new instance with the given pivot threshold.
    pub fn with_params(pivot_epsilon: f64) -> Self {
        Self { pivot_epsilon }
    }
}

/// Matrix inverse via Gauss-Jordan elimination with partial pivoting.
#[derive(Debug, Clone)]
pub struct GaussJordanInverse {
    /// Pivots with smaller magnitude make the matrix singular.
    pub pivot_epsilon: f64,
}

impl Default for GaussJordanInverse {
    fn default() -> Self {
        Self { pivot_epsilon: EPS }
    }
}

impl GaussJordanInverse {
    /// Creates a new instance with default parameters.
    pub fn new() -> Self {
        Self::default()
    }
    /// Creates a new instance with the given pivot threshold.
    pub fn with_params(pivot_epsilon: f64) -> Self {
        Self { pivot_epsilon }
    }
}
