use super::*;

// row and column sums of Diagonal(d)*A*Diagonal(e)
fn scaled_sums(A: &MatrixSparse<'_, f64>, d: &[f64], e: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let (m, n) = (A.rows(), A.cols());
    let mut rows = vec![0.; m];
    let mut cols = vec![0.; n];
    A.mul(MatrixShape::N, 1., e, 0., &mut rows).unwrap();
    A.mul(MatrixShape::T, 1., d, 0., &mut cols).unwrap();
    rows.iter_mut().zip(d).for_each(|(r, di)| *r *= di);
    cols.iter_mut().zip(e).for_each(|(c, ej)| *c *= ej);
    (rows, cols)
}

#[test]
fn test_sinkhorn_balances() {
    let A = built(MatrixOrder::Row, 3, 3, &VAL_3X3, &PTR_3X3, &IND_3X3);
    let mut d = vec![0.; 3];
    let mut e = vec![0.; 3];

    let info = sinkhorn_knopp(&A, &mut d, &mut e, 1000, 1e-10).unwrap();
    assert!(info.converged);
    assert!(info.residual < 1e-10);
    assert!(info.iterations < 1000);

    let (rows, cols) = scaled_sums(&A, &d, &e);
    assert!(rows.norm_inf_diff(&[3.; 3]) < 1e-12);
    assert!(cols.norm_inf_diff(&[3.; 3]) < 1e-8);
    assert!(d.iter().chain(e.iter()).all(|&s| s > 0.));
}

#[test]
fn test_sinkhorn_rectangular() {
    // A =
    //[1.0  2.0   ⋅ ]
    //[ ⋅   1.0  3.0]
    let ptr = [0, 2, 4];
    let ind = [0, 1, 1, 2];
    let val = [1., 2., 1., 3.];
    let A = built(MatrixOrder::Row, 2, 3, &val, &ptr, &ind);
    let mut d = vec![0.; 2];
    let mut e = vec![0.; 3];

    sinkhorn_knopp(&A, &mut d, &mut e, 5000, 1e-9).unwrap();

    // row sums n, column sums m
    let (rows, cols) = scaled_sums(&A, &d, &e);
    assert!(rows.norm_inf_diff(&[3.; 2]) < 1e-12);
    assert!(cols.norm_inf_diff(&[2.; 3]) < 1e-6);
}

#[test]
fn test_sinkhorn_zero_row_and_column() {
    // A =
    //[1.0   ⋅ ]
    //[ ⋅    ⋅ ]
    let ptr = [0, 1, 1];
    let ind = [0];
    let val = [4.];
    let A = built(MatrixOrder::Row, 2, 2, &val, &ptr, &ind);
    let mut d = vec![0.; 2];
    let mut e = vec![0.; 2];

    let info = sinkhorn_knopp(&A, &mut d, &mut e, 50, 1e-6).unwrap();
    assert!(info.converged);
    assert_eq!(d[1], 1.);
    assert_eq!(e[1], 1.);
    assert!((d[0] * 4. * e[0] - 2.).abs() < 1e-12);
}

#[test]
fn test_sinkhorn_iteration_limit() {
    let A = built(MatrixOrder::Col, 3, 3, &VAL_3X3, &PTR_3X3, &IND_3X3);
    let mut d = vec![0.; 3];
    let mut e = vec![0.; 3];

    let info = sinkhorn_knopp(&A, &mut d, &mut e, 0, 1e-6).unwrap();
    assert_eq!(info.iterations, 0);
    assert!(!info.converged);
    assert_eq!(d, vec![1.; 3]);
    assert_eq!(e, vec![1.; 3]);

    let info = sinkhorn_knopp(&A, &mut d, &mut e, 1, 0.).unwrap();
    assert_eq!(info.iterations, 1);
    assert!(!info.converged);
    assert!(d.iter().all(|v| v.is_finite()));
}

#[test]
fn test_sinkhorn_unbuilt() {
    let A = MatrixSparse::new(MatrixOrder::Row, 3, 3, 5, &VAL_3X3, &PTR_3X3, &IND_3X3);
    let mut d = vec![0.; 3];
    let mut e = vec![0.; 3];
    assert_eq!(
        sinkhorn_knopp(&A, &mut d, &mut e, 10, 1e-6),
        Err(MatrixError::NotInitialized)
    );
}
