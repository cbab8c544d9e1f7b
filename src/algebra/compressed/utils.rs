//---------------------------------------------------------
// storage order conversion for compressed sparse matrices
//---------------------------------------------------------

use crate::algebra::{CompressedMatrix, FloatT, MatrixOrder};

impl<T> CompressedMatrix<T>
where
    T: FloatT,
{
    /// Returns a copy of the same logical matrix in the requested
    /// storage order.  Converted data has sorted indices within each
    /// primary slice.
    pub fn to_order(&self, order: MatrixOrder) -> Self {
        if order == self.order {
            self.clone()
        } else {
            self.flip_order()
        }
    }

    // counting sort by secondary index.  The primary slices of the
    // output are the secondary slices of the input and vice versa.
    fn flip_order(&self) -> Self {
        let mut out = CompressedMatrix::spalloc(self.order.flip(), self.m, self.n, self.nnz());

        // count entries in each output primary slice
        out.ptr.fill(0);
        for &j in self.ind.iter() {
            out.ptr[j] += 1;
        }
        out.count_to_ptr();

        // populate values using out.ptr as the indicator of the
        // next fill location in each output slice
        for k in 0..self.primary_dim() {
            for p in self.primary_range(k) {
                let j = self.ind[p];
                let dest = out.ptr[j];
                out.ind[dest] = k;
                out.val[dest] = self.val[p];
                out.ptr[j] += 1;
            }
        }

        out.backshift_ptrs();
        out
    }

    // convert per-slice counts into starting offsets
    pub(crate) fn count_to_ptr(&mut self) {
        let mut currentptr = 0;
        for p in &mut self.ptr {
            let count = *p;
            *p = currentptr;
            currentptr += count;
        }
    }

    // after filling, each ptr entry holds the start of the following
    // slice, so shift everything back by one
    pub(crate) fn backshift_ptrs(&mut self) {
        self.ptr.rotate_right(1);
        self.ptr[0] = 0;
    }
}
