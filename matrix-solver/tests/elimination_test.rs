use fastrand::Rng;
use matrix_solver::{
    algorithms::{Determinant, GaussJordanInverse, MatrixAlgorithm},
    determinant, inverse, DenseMatrix, Matrix, MatrixError,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper for float comparison in tests
fn assert_approx_eq_matrix(a: &DenseMatrix, b: &DenseMatrix, tolerance: f64) {
    assert_eq!(a.dims(), b.dims(), "Matrix dimensions differ");
    for (i, (x, y)) in a.data().iter().zip(b.data()).enumerate() {
        let diff = (x - y).abs();
        assert!(
            diff <= tolerance,
            "Verification failed at index {}: expected {}, got {}, diff {}",
            i,
            y,
            x,
            diff
        );
    }
}

/// Random matrix with a boosted diagonal so it is comfortably invertible.
fn well_conditioned(n: usize, rng: &mut Rng) -> DenseMatrix {
    let mut a = DenseMatrix::random(n, n, -1.0, 1.0, rng).unwrap();
    for i in 0..n {
        let v = a.get(i, i).unwrap();
        a.set(i, i, v + n as f64 * 2.0).unwrap();
    }
    a
}

#[test]
fn test_reference_scenarios() -> Result<(), MatrixError> {
    init_logger();

    let singular = DenseMatrix::from_rows(&[
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])?;
    assert_eq!(determinant(&singular)?, 0.0);

    let b = DenseMatrix::from_rows(&[vec![2.0, 1.0], vec![5.0, 3.0]])?;
    assert!((determinant(&b)? - 1.0).abs() < 1e-12);
    let expected = DenseMatrix::from_rows(&[vec![3.0, -1.0], vec![-5.0, 2.0]])?;
    assert_approx_eq_matrix(&inverse(&b)?, &expected, 1e-12);

    let lhs = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let rhs = DenseMatrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]])?;
    assert_eq!(
        lhs.multiply(&rhs)?,
        DenseMatrix::from_rows(&[vec![19.0, 22.0], vec![43.0, 50.0]])?
    );

    let rank_one = DenseMatrix::from_rows(&[vec![1.0, 0.0], vec![0.0, 0.0]])?;
    assert!(matches!(
        inverse(&rank_one),
        Err(MatrixError::SingularMatrix { pivot: 1 })
    ));

    assert_eq!(determinant(&DenseMatrix::zeros(0, 0))?, 1.0);
    Ok(())
}

#[test]
fn test_determinant_invariant_under_transpose() {
    init_logger();
    let mut rng = Rng::with_seed(77);
    for n in 1..=6 {
        let a = DenseMatrix::random(n, n, -10.0, 10.0, &mut rng).unwrap();
        let d = determinant(&a).unwrap();
        let dt = determinant(&a.transpose().unwrap()).unwrap();
        let scale = d.abs().max(dt.abs()).max(1.0);
        assert!(
            (d - dt).abs() <= 1e-9 * scale,
            "n={}: det(A)={}, det(A^T)={}",
            n,
            d,
            dt
        );
    }
}

#[test]
fn test_inverse_times_matrix_is_identity() {
    init_logger();
    let mut rng = Rng::with_seed(4242);
    for n in [1, 2, 3, 5, 8] {
        let a = well_conditioned(n, &mut rng);
        let inv = inverse(&a).unwrap();
        let identity = DenseMatrix::identity(n);
        assert_approx_eq_matrix(&a.multiply(&inv).unwrap(), &identity, 1e-9);
        assert_approx_eq_matrix(&inv.multiply(&a).unwrap(), &identity, 1e-9);
    }
}

#[test]
fn test_determinant_of_product() {
    // det(AB) == det(A) det(B)
    let mut rng = Rng::with_seed(3);
    let a = well_conditioned(4, &mut rng);
    let b = well_conditioned(4, &mut rng);
    let lhs = determinant(&a.multiply(&b).unwrap()).unwrap();
    let rhs = determinant(&a).unwrap() * determinant(&b).unwrap();
    assert!((lhs - rhs).abs() <= 1e-9 * rhs.abs());
}

#[test]
fn test_determinant_of_inverse_is_reciprocal() {
    let mut rng = Rng::with_seed(8);
    let a = well_conditioned(5, &mut rng);
    let d = determinant(&a).unwrap();
    let d_inv = determinant(&inverse(&a).unwrap()).unwrap();
    assert!((d * d_inv - 1.0).abs() < 1e-9);
}

#[test]
fn test_singular_matrix_has_no_inverse_and_zero_determinant() {
    // Third row is the sum of the first two.
    let a = DenseMatrix::from_rows(&[
        vec![1.0, 2.0, 3.0],
        vec![0.5, -1.0, 4.0],
        vec![1.5, 1.0, 7.0],
    ])
    .unwrap();
    assert_eq!(determinant(&a).unwrap(), 0.0);
    assert!(matches!(
        inverse(&a),
        Err(MatrixError::SingularMatrix { .. })
    ));
}

#[test]
fn test_non_square_rejected_by_both_algorithms() {
    let a = DenseMatrix::zeros(3, 2);
    assert!(matches!(
        Determinant::default().run(&a),
        Err(MatrixError::NotSquare { rows: 3, cols: 2 })
    ));
    assert!(matches!(
        GaussJordanInverse::default().run(&a),
        Err(MatrixError::NotSquare { rows: 3, cols: 2 })
    ));
}
