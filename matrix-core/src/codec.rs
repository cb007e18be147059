//! Plain-text matrix format.
//!
//! ```text
//! <rows> <cols>
//! <row 0 values separated by spaces>
//! ...
//! ```
//!
//! Values are written with the shortest representation that parses back to the
//! same `f64`, so encode/decode is lossless.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::dense_matrix::DenseMatrix;
use crate::error::{MatrixError, Result};

/// Writes `matrix` in the text format.
pub fn encode<W: Write>(matrix: &DenseMatrix, mut writer: W) -> Result<()> {
    writer.write_all(to_text(matrix).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Reads a matrix in the text format from `reader`.
pub fn decode<R: Read>(mut reader: R) -> Result<DenseMatrix> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_text(&text)
}

/// Encodes into an owned string.
pub fn to_text(matrix: &DenseMatrix) -> String {
    let cols = matrix.cols();
    let mut text = format!("{} {}\n", matrix.rows(), cols);
    for i in 0..matrix.rows() {
        let row = &matrix.data()[i * cols..(i + 1) * cols];
        let line: Vec<String> = row.iter().map(|&v| format_value(v)).collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    text
}

/// Decodes a matrix from an in-memory string.
pub fn from_text(text: &str) -> Result<DenseMatrix> {
    let mut tokens = text.split_ascii_whitespace();
    let rows = parse_extent(tokens.next(), "rows")?;
    let cols = parse_extent(tokens.next(), "cols")?;

    let expected = rows
        .checked_mul(cols)
        .ok_or(MatrixError::AllocationError { rows, cols })?;

    // Storage grows with the tokens actually present, not the declared extents.
    let mut values = Vec::new();
    for (idx, token) in tokens.by_ref().take(expected).enumerate() {
        let value: f64 = token.parse().map_err(|_| {
            MatrixError::MalformedInput(format!("value {} is not a number: {:?}", idx, token))
        })?;
        values.push(value);
    }
    if values.len() < expected {
        return Err(MatrixError::MalformedInput(format!(
            "expected {} values, found {}",
            expected,
            values.len()
        )));
    }
    let matrix = DenseMatrix::new(rows, cols, values)?;

    let trailing = tokens.count();
    if trailing > 0 {
        log::warn!(
            "Ignoring {} trailing token(s) after {}x{} matrix",
            trailing,
            rows,
            cols
        );
    }
    Ok(matrix)
}

/// Saves `matrix` to `path`, truncating any existing file.
pub fn save<P: AsRef<Path>>(matrix: &DenseMatrix, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    encode(matrix, BufWriter::new(file))?;
    log::debug!(
        "Saved {}x{} matrix to {}",
        matrix.rows(),
        matrix.cols(),
        path.display()
    );
    Ok(())
}

/// Loads a matrix from `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<DenseMatrix> {
    let path = path.as_ref();
    let matrix = decode(BufReader::new(File::open(path)?))?;
    log::debug!(
        "Loaded {}x{} matrix from {}",
        matrix.rows(),
        matrix.cols(),
        path.display()
    );
    Ok(matrix)
}

fn parse_extent(token: Option<&str>, name: &str) -> Result<usize> {
    let token =
        token.ok_or_else(|| MatrixError::MalformedInput(format!("missing {} in header", name)))?;
    token.parse().map_err(|_| {
        MatrixError::MalformedInput(format!("{} must be a non-negative integer, got {:?}", name, token))
    })
}

/// Shortest round-trip representation; exponent form outside `[1e-4, 1e15)`.
fn format_value(v: f64) -> String {
    let magnitude = v.abs();
    if v == 0.0 || !v.is_finite() || (1e-4..1e15).contains(&magnitude) {
        format!("{}", v)
    } else {
        format!("{:e}", v)
    }
}
