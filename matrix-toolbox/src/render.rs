use matrix_core::DenseMatrix;

/// `%.{precision}g`-style formatting: `precision` significant digits, trailing
/// zeros dropped, exponent form for very large or very small magnitudes.
pub fn format_general(v: f64, precision: usize) -> String {
    if v == 0.0 || !v.is_finite() {
        return format!("{}", v);
    }
    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, v)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Header line followed by one line per row, each cell right-aligned in 10 columns.
pub fn render_matrix(matrix: &DenseMatrix) -> String {
    let mut out = format!("Matrix {}x{}:\n", matrix.rows(), matrix.cols());
    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            let cell = matrix.get(i, j).map_or_else(|_| "?".to_string(), |v| format_general(v, 4));
            out.push_str(&format!("{:>10} ", cell));
        }
        out.push('\n');
    }
    out
}
