#![allow(non_snake_case)]

use crate::algebra::{Adjoint, FloatT, MatrixOrder, SparseFormatError};
use std::ops::Range;

/// Sparse matrix in either Compressed Sparse Row (CSR) or Compressed
/// Sparse Column (CSC) format.
///
/// The *primary* dimension is the one that is compressed, i.e. rows
/// for `MatrixOrder::Row` and columns for `MatrixOrder::Col`.  The
/// *secondary* dimension is the one indexed by `ind`.
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [2.  0.  1.]
///     [0.  3.  0.]
///     [4.  0.  5.]
/// ```
///
/// in row major format
///
/// ```no_run
/// use dualsparse::algebra::{CompressedMatrix, MatrixOrder};
///
/// let A : CompressedMatrix<f64> = CompressedMatrix::new(
///    MatrixOrder::Row,
///    3,                          // m
///    3,                          // n
///    vec![0, 2, 3, 5],           // ptr
///    vec![0, 2, 1, 0, 2],        // ind
///    vec![2., 1., 3., 4., 5.],   // val
///  );
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
///
/// ```
///

#[derive(Debug, Clone, PartialEq)]
pub struct CompressedMatrix<T = f64> {
    /// storage order
    pub order: MatrixOrder,
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// pointer into `ind` and `val` for each primary index.
    ///
    /// Ths field should have length `primary_dim + 1`. The last entry
    /// corresponds to the the number of nonzeros and should agree with the
    /// lengths of the `ind` and `val` fields.
    pub ptr: Vec<usize>,
    /// vector of secondary indices
    pub ind: Vec<usize>,
    /// vector of non-zero matrix elements
    pub val: Vec<T>,
}

impl<T> CompressedMatrix<T>
where
    T: FloatT,
{
    /// `CompressedMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__ ensure that indices are
    /// all in bounds.  Use [`check_format`](Self::check_format) for that.
    ///
    pub fn new(
        order: MatrixOrder,
        m: usize,
        n: usize,
        ptr: Vec<usize>,
        ind: Vec<usize>,
        val: Vec<T>,
    ) -> Self {
        let primary = primary_dim(order, m, n);
        assert_eq!(ind.len(), val.len());
        assert_eq!(ptr.len(), primary + 1);
        assert_eq!(ptr[primary], ind.len());
        CompressedMatrix {
            order,
            m,
            n,
            ptr,
            ind,
            val,
        }
    }

    /// allocate space for a sparse matrix with `nnz` elements
    pub fn spalloc(order: MatrixOrder, m: usize, n: usize, nnz: usize) -> Self {
        let primary = primary_dim(order, m, n);
        let mut ptr = vec![0; primary + 1];
        let ind = vec![0; nnz];
        let val = vec![T::zero(); nnz];
        ptr[primary] = nnz;

        CompressedMatrix::new(order, m, n, ptr, ind, val)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.ptr[self.primary_dim()]
    }

    /// number of rows
    pub fn nrows(&self) -> usize {
        self.m
    }

    /// number of columns
    pub fn ncols(&self) -> usize {
        self.n
    }

    /// size of the compressed dimension
    pub fn primary_dim(&self) -> usize {
        primary_dim(self.order, self.m, self.n)
    }

    /// size of the indexed dimension
    pub fn secondary_dim(&self) -> usize {
        primary_dim(self.order.flip(), self.m, self.n)
    }

    /// range of `ind` / `val` entries for primary index `k`
    #[inline]
    pub fn primary_range(&self, k: usize) -> Range<usize> {
        self.ptr[k]..self.ptr[k + 1]
    }

    /// transpose
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        check_compressed_format(
            self.primary_dim(),
            self.secondary_dim(),
            &self.ptr,
            &self.ind,
            self.val.len(),
        )
    }

    /// Returns the value at the given (row,col) index as an Option.
    /// Returns None if the given index is not a structural nonzero.
    ///
    /// # Panics
    /// Panics if the given index is out of bounds.
    pub fn get_entry(&self, idx: (usize, usize)) -> Option<T> {
        let (row, col) = idx;
        assert!(row < self.nrows() && col < self.ncols());

        let (k, j) = match self.order {
            MatrixOrder::Row => (row, col),
            MatrixOrder::Col => (col, row),
        };
        let rng = self.primary_range(k);
        self.ind[rng.clone()]
            .iter()
            .position(|&i| i == j)
            .map(|p| self.val[rng.start + p])
    }
}

#[inline]
pub(crate) fn primary_dim(order: MatrixOrder, m: usize, n: usize) -> usize {
    match order {
        MatrixOrder::Row => m,
        MatrixOrder::Col => n,
    }
}

// Shared format check for owned matrices and borrowed raw input.
// Indices need not be sorted within a primary slice.
pub(crate) fn check_compressed_format(
    primary: usize,
    secondary: usize,
    ptr: &[usize],
    ind: &[usize],
    nvals: usize,
) -> Result<(), SparseFormatError> {
    if ind.len() != nvals {
        return Err(SparseFormatError::IncompatibleDimension);
    }

    if ptr.len() != primary + 1 || ptr[primary] != ind.len() {
        return Err(SparseFormatError::IncompatibleDimension);
    }

    //check for ptr monotonicity
    if ptr[0] != 0 || ptr.windows(2).any(|c| c[0] > c[1]) {
        return Err(SparseFormatError::BadPtr);
    }

    //check for indices out of bounds
    if !ind.iter().all(|i| i < &secondary) {
        return Err(SparseFormatError::BadIndex);
    }

    Ok(())
}
