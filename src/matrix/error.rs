use crate::algebra::{NormType, SparseFormatError};
use thiserror::Error;

/// Error type returned by matrix construction, multiplication and equilibration.
///
/// State errors (`NotInitialized`, `AlreadyInitialized`) are always returned
/// before any caller visible buffer is modified.  With the "strict-state"
/// feature they additionally trigger a `debug_assert!` in debug builds.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Operation requires the matrix storage to be built first
    #[error("Matrix storage has not been initialized")]
    NotInitialized,
    /// Matrix storage has already been built
    #[error("Matrix storage is already initialized")]
    AlreadyInitialized,
    /// The requested norm cannot be used for this operation
    #[error("Unsupported norm policy ({0})")]
    InvalidPolicy(NormType),
    /// Raw sparse input data is malformed
    #[error("Bad sparse input: {0}")]
    BadFormat(#[from] SparseFormatError),
}

// route every state error through here so that the
// stricter development check lives in one place
pub(crate) fn state_error(err: MatrixError) -> MatrixError {
    #[cfg(feature = "strict-state")]
    debug_assert!(false, "{}", err);
    err
}
