use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Error type returned by sparse matrix format checks.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    #[error("Bad pointer values")]
    /// Matrix row or column pointer values are defective
    BadPtr,
    #[error("Index value exceeds the matrix dimension")]
    /// Row or column index exceeds the matrix dimension
    BadIndex,
}
