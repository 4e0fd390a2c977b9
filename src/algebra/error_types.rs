use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Error type returned by sparse matrix conversion and validation.
///
/// Every variant is a structural defect of the index / pointer arrays,
/// independent of the numerical values stored.   Any of these aborts a
/// solve before the external solver is reached.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// The first entry of the pointer array is not zero
    #[error("First pointer entry must be 0, got {found}")]
    BadPointerStart { found: usize },
    /// The last entry of the pointer array disagrees with the number of nonzeros
    #[error("Last pointer entry must equal nnz = {nnz}, got {found}")]
    PointerNnzMismatch { found: usize, nnz: usize },
    /// Pointer array decreases somewhere
    #[error("Pointer array is not monotonically increasing at position {position}")]
    NonMonotonicPointer { position: usize },
    /// Minor (row or column) index exceeds the matrix dimension
    #[error("Index {index} at position {position} exceeds the dimension {dim}")]
    IndexOutOfBounds {
        position: usize,
        index: usize,
        dim: usize,
    },
    /// Minor indices are unsorted or duplicated within a major slice
    #[error("Indices are not strictly increasing within slice {slice}")]
    UnsortedIndices { slice: usize },
    /// An index, dimension or nonzero count does not fit the 32 bit
    /// integers used by the native calling convention
    #[error("Value {value} does not fit in a 32 bit native index")]
    IndexOverflow { value: usize },
}

impl SparseFormatError {
    /// Negative status code reported through [`SolveResult`](crate::solver::SolveResult).
    ///
    /// Codes live in the reserved range `-101..=-107`.
    pub fn status_code(&self) -> i32 {
        match self {
            SparseFormatError::IncompatibleDimension => -101,
            SparseFormatError::BadPointerStart { .. } => -102,
            SparseFormatError::PointerNnzMismatch { .. } => -103,
            SparseFormatError::NonMonotonicPointer { .. } => -104,
            SparseFormatError::IndexOutOfBounds { .. } => -105,
            SparseFormatError::UnsortedIndices { .. } => -106,
            SparseFormatError::IndexOverflow { .. } => -107,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Error type for dimension problems detected before any conversion begins.
pub enum ShapeError {
    /// Zero row or column count
    #[error("Matrix has an empty dimension ({nrows} x {ncols})")]
    EmptyDimension { nrows: usize, ncols: usize },
    /// Direct solves require a square system
    #[error("Matrix is not square ({nrows} x {ncols})")]
    NotSquare { nrows: usize, ncols: usize },
    /// Right hand side length differs from the matrix row count
    #[error("Right hand side has length {found}, expected {expected}")]
    RhsLengthMismatch { expected: usize, found: usize },
}

impl ShapeError {
    /// Negative status code reported through [`SolveResult`](crate::solver::SolveResult).
    ///
    /// Codes live in the reserved range `-201..=-203`.
    pub fn status_code(&self) -> i32 {
        match self {
            ShapeError::EmptyDimension { .. } => -201,
            ShapeError::NotSquare { .. } => -202,
            ShapeError::RhsLengthMismatch { .. } => -203,
        }
    }
}
