/// Matrix orientation marker
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

impl MatrixShape {
    /// Parse a BLAS style transpose flag.
    ///
    /// # Panics
    /// Panics unless `c` is one of `'n'`, `'N'`, `'t'` or `'T'`.
    pub fn from_char(c: char) -> Self {
        assert!(
            matches!(c, 'n' | 'N' | 't' | 'T'),
            "bad transpose flag '{}'",
            c
        );
        if c == 'n' || c == 'N' {
            MatrixShape::N
        } else {
            MatrixShape::T
        }
    }
}

/// Storage order of a compressed sparse matrix
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum MatrixOrder {
    /// Compressed sparse row (CSR) storage
    Row,
    /// Compressed sparse column (CSC) storage
    Col,
}

impl MatrixOrder {
    /// Parse a storage order tag.
    ///
    /// # Panics
    /// Panics unless `c` is one of `'r'`, `'R'`, `'c'` or `'C'`.
    pub fn from_char(c: char) -> Self {
        assert!(
            matches!(c, 'r' | 'R' | 'c' | 'C'),
            "bad storage order '{}'",
            c
        );
        if c == 'r' || c == 'R' {
            MatrixOrder::Row
        } else {
            MatrixOrder::Col
        }
    }

    /// The opposite storage order
    pub fn flip(&self) -> Self {
        match self {
            MatrixOrder::Row => MatrixOrder::Col,
            MatrixOrder::Col => MatrixOrder::Row,
        }
    }
}

impl std::fmt::Display for MatrixOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixOrder::Row => write!(f, "row"),
            MatrixOrder::Col => write!(f, "col"),
        }
    }
}

/// Matrix norm used to select an equilibration or normalization policy
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormType {
    /// Induced 1-norm.   Equilibrates absolute values.
    One,
    /// Induced 2-norm (largest singular value).  Equilibrates squared values.
    Two,
    /// Frobenius norm.  Equilibrates squared values.
    Frobenius,
}

impl NormType {
    /// True if equilibration in this norm operates on squared magnitudes
    pub fn is_squared(&self) -> bool {
        matches!(self, NormType::Two | NormType::Frobenius)
    }
}

impl std::fmt::Display for NormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NormType::One => "1-norm",
            NormType::Two => "2-norm",
            NormType::Frobenius => "Frobenius",
        };
        write!(f, "{}", s)
    }
}

/// Adjoint of a matrix
#[derive(Debug, Clone, Copy)]
pub struct Adjoint<'a, M> {
    pub src: &'a M,
}
