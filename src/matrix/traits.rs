use super::{EquilibrationInfo, MatrixError};
use crate::algebra::{FloatT, MatrixShape};

/// Matrix operations required by a first-order solver.
///
/// This is the contract shared by the sparse implementation in this
/// crate and any dense counterpart.  The Sinkhorn-Knopp iteration and the
/// 2-norm estimator are written against it, using only products with the
/// matrix and its transpose.

pub trait Matrix<T: FloatT> {
    /// number of rows
    fn rows(&self) -> usize;

    /// number of columns
    fn cols(&self) -> usize;

    /// true once [`init`](Matrix::init) has succeeded
    fn is_initialized(&self) -> bool;

    /// Builds the internal storage from the data supplied at construction.
    /// Fails with `AlreadyInitialized` on a second call, without
    /// modifying the existing storage.
    fn init(&mut self) -> Result<(), MatrixError>;

    /// Produces `y = alpha*op(A)*x + beta*y`, with `op(A) = A` for
    /// `MatrixShape::N` and `op(A) = A^T` for `MatrixShape::T`.
    fn mul(
        &self,
        trans: MatrixShape,
        alpha: T,
        x: &[T],
        beta: T,
        y: &mut [T],
    ) -> Result<(), MatrixError>;

    /// Equilibrates the matrix in place, writing row scalings to `d`
    /// and column scalings to `e`.
    fn equil(&mut self, d: &mut [T], e: &mut [T]) -> Result<EquilibrationInfo<T>, MatrixError>;
}
