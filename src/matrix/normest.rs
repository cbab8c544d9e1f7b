#![allow(non_snake_case)]

use super::{Matrix, MatrixError};
use crate::algebra::*;

/// Estimates the largest singular value of `A` by power iteration on `A'*A`.
///
/// The iteration starts from `A'*w` with `w` all ones, or with `w` a linear
/// ramp if that product is zero, and stops once successive estimates differ
/// by less than `tol` relative to the current estimate, or after `max_iter`
/// iterations.  Returns zero for a matrix with no nonzero entries.
pub fn norm2_est<T, M>(A: &M, max_iter: u32, tol: T) -> Result<T, MatrixError>
where
    T: FloatT,
    M: Matrix<T> + ?Sized,
{
    let (m, n) = (A.rows(), A.cols());
    if m == 0 || n == 0 {
        return Ok(T::zero());
    }

    let mut x = vec![T::zero(); n];
    let mut Sx = vec![T::one(); m];

    // any nonzero start in the range of A' gives A*x != 0
    A.mul(MatrixShape::T, T::one(), &Sx, T::zero(), &mut x)?;
    if x.normalize() == T::zero() {
        for (i, w) in Sx.iter_mut().enumerate() {
            *w = (i + 1).as_T();
        }
        A.mul(MatrixShape::T, T::one(), &Sx, T::zero(), &mut x)?;
        if x.normalize() == T::zero() {
            return Ok(T::zero());
        }
    }

    let mut est = T::zero();

    for _ in 0..max_iter {
        let est_last = est;

        A.mul(MatrixShape::N, T::one(), &x, T::zero(), &mut Sx)?;
        let normSx = Sx.norm();
        if normSx == T::zero() {
            return Ok(T::zero());
        }

        A.mul(MatrixShape::T, T::one(), &Sx, T::zero(), &mut x)?;
        let normx = x.normalize();

        est = normx / normSx;
        if T::abs(est - est_last) < tol * est {
            break;
        }
    }
    Ok(est)
}
