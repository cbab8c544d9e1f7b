#![allow(non_snake_case)]

use crate::algebra::*;
use std::iter::zip;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

// A compressed matrix applied in its own storage order is a
// "gather" (one output per primary slice, parallel friendly).
// Applied against its storage order it is a "scatter" into the
// output vector, which is kept sequential.

impl<T: FloatT> MatrixVectorMultiply for CompressedMatrix<T> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        match self.order {
            MatrixOrder::Row => _compressed_gather(self, y, x, a, b),
            MatrixOrder::Col => _compressed_scatter(self, y, x, a, b),
        }
    }
}

impl<T: FloatT> MatrixVectorMultiply for Adjoint<'_, CompressedMatrix<T>> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        match self.src.order {
            MatrixOrder::Row => _compressed_scatter(self.src, y, x, a, b),
            MatrixOrder::Col => _compressed_gather(self.src, y, x, a, b),
        }
    }
}

impl<T: FloatT> MatrixMath for CompressedMatrix<T> {
    type T = T;

    fn scale(&mut self, c: T) {
        self.val.scale(c);
    }

    fn lrscale(&mut self, l: &[T], r: &[T]) {
        assert_eq!(l.len(), self.m);
        assert_eq!(r.len(), self.n);
        assert_eq!(self.val.len(), self.nnz());

        // scaling for the compressed and the indexed dimension
        let (pscale, sscale) = match self.order {
            MatrixOrder::Row => (l, r),
            MatrixOrder::Col => (r, l),
        };

        let ptr = &self.ptr;
        let ind = &self.ind;
        let slices = primary_slices_mut(ptr, &mut self.val);

        let kernel = |(k, vals): (usize, &mut [T])| {
            let idx = &ind[ptr[k]..ptr[k + 1]];
            let pk = pscale[k];
            for (val, &j) in zip(vals, idx) {
                *val *= pk * sscale[j];
            }
        };

        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                slices.into_par_iter().enumerate().for_each(kernel);
            } else {
                slices.into_iter().enumerate().for_each(kernel);
            }
        }
    }
}

// split the value array into one disjoint mutable slice per
// primary index so that each can be handed to a separate worker
fn primary_slices_mut<'a, T>(ptr: &[usize], val: &'a mut [T]) -> Vec<&'a mut [T]> {
    let mut out = Vec::with_capacity(ptr.len().saturating_sub(1));
    let mut rest = val;
    for w in ptr.windows(2) {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(w[1] - w[0]);
        out.push(head);
        rest = tail;
    }
    out
}

// y = a*A*x + b*y, one output entry per primary slice
fn _compressed_gather<T: FloatT>(A: &CompressedMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    assert_eq!(A.val.len(), A.nnz());
    assert_eq!(x.len(), A.secondary_dim());
    assert_eq!(y.len(), A.primary_dim());

    let kernel = |(k, yk): (usize, &mut T)| {
        let rng = A.primary_range(k);
        let dot = zip(&A.ind[rng.clone()], &A.val[rng])
            .fold(T::zero(), |acc, (&j, &v)| acc + v * x[j]);

        //NB: b == 0 overwrites, so that NaNs in y are not propagated
        *yk = if b == T::zero() {
            a * dot
        } else {
            b * (*yk) + a * dot
        };
    };

    cfg_if::cfg_if! {
        if #[cfg(feature = "rayon")] {
            y.par_iter_mut().enumerate().for_each(kernel);
        } else {
            y.iter_mut().enumerate().for_each(kernel);
        }
    }
}

// y = a*A*x + b*y, accumulating each primary slice into y
fn _compressed_scatter<T: FloatT>(A: &CompressedMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    //first do the b*y part
    if b == T::zero() {
        y.fill(T::zero());
    } else if b == T::one() {
    } else if b == -T::one() {
        y.negate();
    } else {
        y.scale(b);
    }

    // if a is zero, we're done
    if a == T::zero() {
        return;
    }

    assert_eq!(A.val.len(), A.nnz());
    assert_eq!(x.len(), A.primary_dim());
    assert_eq!(y.len(), A.secondary_dim());

    for (k, &xk) in x.iter().enumerate() {
        let axk = a * xk;
        for p in A.primary_range(k) {
            y[A.ind[p]] += A.val[p] * axk;
        }
    }
}
