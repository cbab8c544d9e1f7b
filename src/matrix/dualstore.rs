use super::RawInput;
use crate::algebra::*;

/// Row-major and column-major copies of the same sparse matrix.
///
/// Products with `A` are computed from the row form and products with
/// `A^T` from the column form, so that both are gather operations over
/// contiguous memory.  The two forms hold physically distinct orderings of
/// the same nonzeros, and any change to the values must be applied to
/// both of them.  The sparsity pattern never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DualStore<T> {
    /// CSR form, `ind` holds column indices
    pub row: CompressedMatrix<T>,
    /// CSC form, `ind` holds row indices
    pub col: CompressedMatrix<T>,
    order: MatrixOrder,
}

impl<T> DualStore<T>
where
    T: FloatT,
{
    /// Builds both forms from raw input.  The caller's arrays are read
    /// once for the copy in their own order, and the other order is
    /// converted from that copy.
    pub(crate) fn new(raw: &RawInput<'_, T>) -> Self {
        let input = raw.to_compressed();
        let other = input.to_order(raw.order.flip());

        let (row, col) = match raw.order {
            MatrixOrder::Row => (input, other),
            MatrixOrder::Col => (other, input),
        };

        Self {
            row,
            col,
            order: raw.order,
        }
    }

    /// storage order of the original input
    pub fn order(&self) -> MatrixOrder {
        self.order
    }

    /// the form matching the original input order
    pub fn primary(&self) -> &CompressedMatrix<T> {
        match self.order {
            MatrixOrder::Row => &self.row,
            MatrixOrder::Col => &self.col,
        }
    }

    /// number of nonzeros (in each form)
    pub fn nnz(&self) -> usize {
        self.row.nnz()
    }

    /// `y = a*op(A)*x + b*y` using whichever form gives a gather product
    pub(crate) fn gemv(&self, trans: MatrixShape, y: &mut [T], x: &[T], a: T, b: T) {
        match trans {
            MatrixShape::N => self.row.gemv(y, x, a, b),
            MatrixShape::T => self.col.t().gemv(y, x, a, b),
        }
    }

    /// `A = Diagonal(d)*A*Diagonal(e)` applied to both forms
    pub(crate) fn lrscale(&mut self, d: &[T], e: &[T]) {
        self.row.lrscale(d, e);
        self.col.lrscale(d, e);
    }

    /// `A = c*A` applied to both forms
    pub(crate) fn scale(&mut self, c: T) {
        self.row.scale(c);
        self.col.scale(c);
    }

    /// Replaces every value in both forms with its transformed
    /// magnitude, returning the signs of (row form, column form).
    pub(crate) fn extract_signs(&mut self, transform: MagnitudeTransform) -> (SignBits, SignBits) {
        let rsign = SignBits::extract(&mut self.row.val, transform);
        let csign = SignBits::extract(&mut self.col.val, transform);
        (rsign, csign)
    }

    /// Inverse of [`extract_signs`](Self::extract_signs)
    pub(crate) fn restore_signs(&mut self, signs: &(SignBits, SignBits), transform: MagnitudeTransform) {
        signs.0.restore(&mut self.row.val, transform);
        signs.1.restore(&mut self.col.val, transform);
    }
}
