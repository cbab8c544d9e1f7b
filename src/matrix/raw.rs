use crate::algebra::{check_compressed_format, primary_dim, CompressedMatrix};
use crate::algebra::{FloatT, MatrixOrder, SparseFormatError};

/// Caller-owned compressed sparse data, borrowed until the matrix is built.
///
/// The arrays follow the usual compressed layout for `order`: `ptr` has
/// one entry per row (`MatrixOrder::Row`) or column (`MatrixOrder::Col`)
/// plus one, and `ind` / `values` have one entry per nonzero.
#[derive(Debug, Clone, Copy)]
pub struct RawInput<'a, T> {
    pub order: MatrixOrder,
    pub m: usize,
    pub n: usize,
    pub nnz: usize,
    pub values: &'a [T],
    pub ptr: &'a [usize],
    pub ind: &'a [usize],
}

impl<'a, T> RawInput<'a, T>
where
    T: FloatT,
{
    /// Check that the borrowed data describes a valid `m x n` matrix
    /// with `nnz` entries.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.values.len() != self.nnz {
            return Err(SparseFormatError::IncompatibleDimension);
        }
        check_compressed_format(
            primary_dim(self.order, self.m, self.n),
            primary_dim(self.order.flip(), self.m, self.n),
            self.ptr,
            self.ind,
            self.values.len(),
        )
    }

    /// Owned copy in the input storage order.  The data should
    /// have passed [`check_format`](Self::check_format).
    pub(crate) fn to_compressed(&self) -> CompressedMatrix<T> {
        CompressedMatrix::new(
            self.order,
            self.m,
            self.n,
            self.ptr.to_vec(),
            self.ind.to_vec(),
            self.values.to_vec(),
        )
    }
}
