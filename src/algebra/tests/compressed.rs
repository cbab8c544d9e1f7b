#![allow(non_snake_case)]
use crate::algebra::*;
use itertools::iproduct;

fn test_matrix_3x4_csc() -> CompressedMatrix<f64> {
    // A =
    //[-1.0  -17.0  6.0  10.0]
    //[ 3.0     ⋅   7.0    ⋅ ]
    //[  ⋅    -4.0   ⋅   -5.0]
    let Ap = vec![0, 2, 4, 6, 8];
    let Ai = vec![0, 1, 0, 2, 0, 1, 0, 2];
    let Ax = vec![-1., 3., -17., -4., 6., 7., 10., -5.];
    CompressedMatrix::new(MatrixOrder::Col, 3, 4, Ap, Ai, Ax)
}

fn test_matrix_3x4_csr() -> CompressedMatrix<f64> {
    // same matrix as above, stored by rows
    let Ap = vec![0, 4, 6, 8];
    let Aj = vec![0, 1, 2, 3, 0, 2, 1, 3];
    let Ax = vec![-1., -17., 6., 10., 3., 7., -4., -5.];
    CompressedMatrix::new(MatrixOrder::Row, 3, 4, Ap, Aj, Ax)
}

fn test_matrix(order: MatrixOrder) -> CompressedMatrix<f64> {
    match order {
        MatrixOrder::Row => test_matrix_3x4_csr(),
        MatrixOrder::Col => test_matrix_3x4_csc(),
    }
}

const ORDERS: [MatrixOrder; 2] = [MatrixOrder::Row, MatrixOrder::Col];

#[test]
fn test_dims_and_nnz() {
    let A = test_matrix_3x4_csc();
    assert_eq!(A.nrows(), 3);
    assert_eq!(A.ncols(), 4);
    assert_eq!(A.nnz(), 8);
    assert_eq!(A.primary_dim(), 4);
    assert_eq!(A.secondary_dim(), 3);

    let B = test_matrix_3x4_csr();
    assert_eq!(B.primary_dim(), 3);
    assert_eq!(B.secondary_dim(), 4);
    assert_eq!(B.primary_range(1), 4..6);
}

#[test]
fn test_get_entry() {
    for order in ORDERS {
        let A = test_matrix(order);
        assert_eq!(A.get_entry((0, 1)), Some(-17.));
        assert_eq!(A.get_entry((1, 2)), Some(7.));
        assert_eq!(A.get_entry((2, 3)), Some(-5.));
        assert_eq!(A.get_entry((1, 1)), None);
        assert_eq!(A.get_entry((2, 0)), None);
    }
}

#[test]
fn test_to_order() {
    let csc = test_matrix_3x4_csc();
    let csr = test_matrix_3x4_csr();

    assert_eq!(csc.to_order(MatrixOrder::Row), csr);
    assert_eq!(csr.to_order(MatrixOrder::Col), csc);
    assert_eq!(csc.to_order(MatrixOrder::Col), csc);

    // unsorted input indices are allowed, and come out sorted
    let A = CompressedMatrix::new(
        MatrixOrder::Row,
        2,
        3,
        vec![0, 2, 3],
        vec![2, 0, 1],
        vec![1., 2., 3.],
    );
    assert!(A.check_format().is_ok());
    let B = A.to_order(MatrixOrder::Col);
    assert_eq!(B.ptr, vec![0, 1, 2, 3]);
    assert_eq!(B.ind, vec![0, 1, 0]);
    assert_eq!(B.val, vec![2., 3., 1.]);
    assert_eq!(B.to_order(MatrixOrder::Row).get_entry((0, 2)), Some(1.));
}

#[test]
fn test_to_order_empty_slices() {
    // A =
    //[ ⋅    ⋅ ]
    //[1.0   ⋅ ]
    //[ ⋅    ⋅ ]
    let A = CompressedMatrix::new(MatrixOrder::Row, 3, 2, vec![0, 0, 1, 1], vec![0], vec![1.]);
    let B = A.to_order(MatrixOrder::Col);
    assert_eq!(B.ptr, vec![0, 1, 1]);
    assert_eq!(B.ind, vec![1]);
    assert!(B.check_format().is_ok());

    let Z = CompressedMatrix::<f64>::spalloc(MatrixOrder::Col, 0, 0, 0);
    let Zt = Z.to_order(MatrixOrder::Row);
    assert_eq!(Zt.ptr, vec![0]);
    assert_eq!(Zt.nnz(), 0);
}

#[test]
fn test_check_format() {
    assert!(test_matrix_3x4_csc().check_format().is_ok());
    assert!(test_matrix_3x4_csr().check_format().is_ok());

    let mut A = test_matrix_3x4_csc();
    A.ptr[2] = 1;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadPtr));

    let mut A = test_matrix_3x4_csc();
    A.ptr[0] = 1;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadPtr));

    let mut A = test_matrix_3x4_csc();
    A.ind[3] = 3;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadIndex));

    let mut A = test_matrix_3x4_csr();
    A.ind[3] = 4;
    assert_eq!(A.check_format(), Err(SparseFormatError::BadIndex));

    let mut A = test_matrix_3x4_csc();
    A.ptr.pop();
    assert_eq!(
        A.check_format(),
        Err(SparseFormatError::IncompatibleDimension)
    );

    let mut A = test_matrix_3x4_csc();
    A.val.pop();
    assert_eq!(
        A.check_format(),
        Err(SparseFormatError::IncompatibleDimension)
    );
}

#[test]
fn test_gemv() {
    let x = [1., 2., 3., 4.];

    for (order, (a, b)) in iproduct!(ORDERS, [(1., 0.), (2., -1.), (-1., 1.), (0.5, 3.)]) {
        let A = test_matrix(order);
        let mut y = vec![1.; 3];
        A.gemv(&mut y, &x, a, b);
        let Ax = [23., 24., -28.];
        let expected: Vec<f64> = Ax.iter().map(|v| a * v + b).collect();
        assert!(y.norm_inf_diff(&expected) < 1e-12);
    }
}

#[test]
fn test_gemv_adjoint() {
    let x = [1., 2., 3.];

    for (order, (a, b)) in iproduct!(ORDERS, [(1., 0.), (2., -1.), (-1., 1.), (0.5, 3.)]) {
        let A = test_matrix(order);
        let mut y = vec![1.; 4];
        A.t().gemv(&mut y, &x, a, b);
        let Atx = [5., -29., 20., -5.];
        let expected: Vec<f64> = Atx.iter().map(|v| a * v + b).collect();
        assert!(y.norm_inf_diff(&expected) < 1e-12);
    }
}

#[test]
fn test_gemv_beta_zero_overwrites() {
    let x = [1., 2., 3., 4.];
    for order in ORDERS {
        let A = test_matrix(order);
        let mut y = vec![f64::NAN; 3];
        A.gemv(&mut y, &x, 1., 0.);
        assert_eq!(y, vec![23., 24., -28.]);
    }
}

#[test]
fn test_scale() {
    let mut A = test_matrix_3x4_csc();
    A.scale(-2.);
    assert_eq!(A.get_entry((0, 0)), Some(2.));
    assert_eq!(A.get_entry((2, 3)), Some(10.));
}

#[test]
fn test_lrscale() {
    let l = [1., 2., 3.];
    let r = [1., 10., 100., 1000.];

    for order in ORDERS {
        let mut A = test_matrix(order);
        A.lrscale(&l, &r);
        assert_eq!(A.get_entry((0, 3)), Some(10000.));
        assert_eq!(A.get_entry((2, 1)), Some(-120.));
        assert_eq!(A.get_entry((1, 2)), Some(1400.));
        assert_eq!(A.get_entry((1, 0)), Some(6.));
        assert_eq!(A.get_entry((1, 1)), None);
    }

    // the two storage orders stay consistent
    let mut csc = test_matrix_3x4_csc();
    let mut csr = test_matrix_3x4_csr();
    csc.lrscale(&l, &r);
    csr.lrscale(&l, &r);
    assert_eq!(csr.to_order(MatrixOrder::Col), csc);
}

#[test]
fn test_order_and_shape_tags() {
    assert_eq!(MatrixOrder::from_char('r'), MatrixOrder::Row);
    assert_eq!(MatrixOrder::from_char('C'), MatrixOrder::Col);
    assert_eq!(MatrixOrder::Row.flip(), MatrixOrder::Col);
    assert_eq!(MatrixShape::from_char('n'), MatrixShape::N);
    assert_eq!(MatrixShape::from_char('T'), MatrixShape::T);
}

#[test]
#[should_panic]
fn test_bad_order_tag() {
    MatrixOrder::from_char('x');
}

#[test]
#[should_panic]
fn test_bad_shape_tag() {
    MatrixShape::from_char('c');
}
