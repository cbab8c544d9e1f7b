//! Dualsparse algebra module.
//!
//! __This module is provided primarily for testing and internal use__
//!
//! All floating point calculations are represented internally on values
//! implementing the [`FloatT`](crate::algebra::FloatT) trait.  The module
//! provides the compressed sparse storage used by the matrix types, the
//! matrix-vector and diagonal scaling kernels applied to it, vector
//! operations on slices of `FloatT` and the bit-packed sign storage used
//! during equilibration.

mod compressed;
mod error_types;
mod floats;
mod math_traits;
mod matrix_types;
mod signbits;
mod vecmath;

pub use compressed::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_types::*;
pub use signbits::*;

#[cfg(test)]
mod tests;
