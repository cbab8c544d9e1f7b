#![allow(non_snake_case)]

use crate::algebra::*;
use crate::matrix::*;

mod sinkhorn;

// A =
//[2.0   ⋅   1.0]
//[ ⋅   3.0   ⋅ ]
//[4.0   ⋅   5.0]
pub(super) const PTR_3X3: [usize; 4] = [0, 2, 3, 5];
pub(super) const IND_3X3: [usize; 5] = [0, 2, 1, 0, 2];
pub(super) const VAL_3X3: [f64; 5] = [2., 1., 3., 4., 5.];

pub(super) fn built<'a>(
    order: MatrixOrder,
    m: usize,
    n: usize,
    val: &'a [f64],
    ptr: &'a [usize],
    ind: &'a [usize],
) -> MatrixSparse<'a, f64> {
    let mut A = MatrixSparse::new(order, m, n, val.len(), val, ptr, ind);
    A.init().unwrap();
    A
}
