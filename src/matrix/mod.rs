//! Sparse matrix type and equilibration for first-order solvers.
//!
//! [`MatrixSparse`] borrows caller data in either compressed sparse row or
//! compressed sparse column format, builds both forms on
//! [`init`](Matrix::init), and provides products with the matrix or its
//! transpose together with in place Sinkhorn-Knopp equilibration.
//!
//! The free functions [`sinkhorn_knopp`] and [`norm2_est`] only require
//! the [`Matrix`] trait and can be used with other implementations of it.

#![allow(non_snake_case)]

mod dualstore;
mod equilibrate;
mod error;
mod info_print;
mod normest;
mod raw;
mod settings;
mod sinkhorn;
mod sparse;
mod traits;

//export flattened
pub use dualstore::*;
pub use equilibrate::*;
pub use error::*;
pub use normest::*;
pub use raw::*;
pub use settings::*;
pub use sinkhorn::*;
pub use sparse::*;
pub use traits::*;

//configure tests of internals
#[cfg(test)]
mod tests;
