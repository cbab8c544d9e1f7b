//! __dualsparse__ is a sparse matrix library for first-order optimization
//! solvers.
//!
//! A [`MatrixSparse`](crate::matrix::MatrixSparse) is built from compressed
//! sparse row (CSR) or compressed sparse column (CSC) data, and stores the
//! matrix in __both__ formats so that products with the matrix and with its
//! transpose are computed as contiguous row-wise dot products.   It
//! provides:
//!
//! * BLAS style matrix-vector products
//! $$
//! y \leftarrow \alpha\\, \mathrm{op}(A)\\, x + \beta y,
//! \qquad \mathrm{op}(A) \in \\{A, A^\top\\}
//! $$
//!
//! * In place equilibration: diagonal scalings $d$ and $e$ are computed by
//!   Sinkhorn-Knopp balancing so that $\mathrm{diag}(d)\\, A\\, \mathrm{diag}(e)$
//!   has rows and columns of equal norm, followed by a normalization of the
//!   result to unit norm.
//!
//! ## Example
//!
//! ```no_run
//! use dualsparse::algebra::{MatrixOrder, MatrixShape};
//! use dualsparse::matrix::{Matrix, MatrixSparse};
//!
//! let (ptr, ind, val) = ([0, 2, 3, 5], [0, 2, 1, 0, 2], [2., 1., 3., 4., 5.]);
//!
//! let mut A = MatrixSparse::new(MatrixOrder::Row, 3, 3, 5, &val, &ptr, &ind);
//! A.init().unwrap();
//!
//! let mut y = [0.; 3];
//! A.mul(MatrixShape::T, 1., &[1., 1., 1.], 0., &mut y).unwrap();
//! assert_eq!(y, [6., 3., 6.]);
//! ```
//!
//! ## Features
//!
//! * `rayon` (default) : row and column kernels run as parallel loops.
//! * `serde` (default) : serialization of equilibration settings.
//! * `strict-state` : lifecycle errors also trip a `debug_assert!`.

pub mod algebra;
pub mod io;
pub mod matrix;
pub mod timers;
