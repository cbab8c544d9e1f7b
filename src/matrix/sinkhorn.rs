#![allow(non_snake_case)]

use super::{Matrix, MatrixError};
use crate::algebra::*;
use std::iter::zip;

/// Outcome of a Sinkhorn-Knopp balancing run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinkhornInfo<T> {
    /// number of completed iterations
    pub iterations: u32,
    /// true if the column balance tolerance was met
    pub converged: bool,
    /// largest relative deviation of a column sum from its target,
    /// as measured at the start of the final iteration
    pub residual: T,
}

/// Sinkhorn-Knopp balancing of a nonnegative matrix.
///
/// Computes `d` and `e` such that `Diagonal(d)*A*Diagonal(e)` has row sums
/// `n` and column sums `m`.  Each iteration sets
///
/// ```text
/// e = m ./ (A'*d)
/// d = n ./ (A*e)
/// ```
///
/// so the row sums are exact after every iteration, and the iteration
/// stops once every column sum is within a relative tolerance `tol` of its
/// target or after `max_iter` iterations.  Running out of iterations is not
/// an error and the last iterate is kept.  Rows or columns with a zero sum
/// keep a scaling of one.
///
/// The matrix must already hold nonnegative values.
pub fn sinkhorn_knopp<T, M>(
    A: &M,
    d: &mut [T],
    e: &mut [T],
    max_iter: u32,
    tol: T,
) -> Result<SinkhornInfo<T>, MatrixError>
where
    T: FloatT,
    M: Matrix<T> + ?Sized,
{
    let (m, n) = (A.rows(), A.cols());
    assert_eq!(d.len(), m);
    assert_eq!(e.len(), n);

    d.set(T::one());
    e.set(T::one());

    let (mT, nT): (T, T) = (m.as_T(), n.as_T());
    let mut work = vec![T::zero(); n];

    let mut info = SinkhornInfo {
        iterations: 0,
        converged: false,
        residual: T::infinity(),
    };

    for k in 0..max_iter {
        // work = A'*d.   With the current e these are the column sums
        A.mul(MatrixShape::T, T::one(), d, T::zero(), &mut work)?;

        if k > 0 {
            info.residual = column_residual(&work, e, mT);
            if info.residual < tol {
                info.converged = true;
                break;
            }
        }

        // e := m ./ (A'*d)
        e.scalarop_from(|s| balance(mT, s), &work);

        // d := n ./ (A*e)
        A.mul(MatrixShape::N, T::one(), e, T::zero(), d)?;
        d.scalarop(|s| balance(nT, s));

        info.iterations = k + 1;
    }

    Ok(info)
}

#[inline]
fn balance<T: FloatT>(target: T, s: T) -> T {
    if s > T::zero() {
        target / s
    } else {
        T::one()
    }
}

// max_j |e_j*(A'd)_j / m - 1| over columns with a nonzero sum
fn column_residual<T: FloatT>(colsums: &[T], e: &[T], target: T) -> T {
    zip(colsums, e)
        .filter(|(s, _)| **s > T::zero())
        .fold(T::zero(), |acc, (&s, &ej)| {
            T::max(acc, T::abs(ej * s / target - T::one()))
        })
}
