use thiserror::Error;

pub type Result<T> = core::result::Result<T, MatrixError>;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Unable to allocate a {rows}x{cols} matrix")]
    AllocationError { rows: usize, cols: usize },

    #[error("Dimension mismatch in {op}: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("Matrix is singular (pivot {pivot} is below threshold)")]
    SingularMatrix { pivot: usize },

    #[error("Index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    RangeError {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Malformed matrix input: {0}")]
    MalformedInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
