use crate::algebra::{ShapeError, SparseFormatError};
use crate::validate::DiagnosticReport;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Reasons a solve can fail.
pub enum SolveError {
    /// Structurally invalid sparse data.   The native solver was not called.
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] SparseFormatError),
    /// Bad dimensions or right hand side.   The native solver was not called.
    #[error("Invalid shape: {0}")]
    InvalidShape(#[from] ShapeError),
    /// The native solver returned a nonzero status
    #[error("Native solver failed with status {0}")]
    NativeFailure(i32),
}

impl SolveError {
    /// Status code reported in [`SolveResult::status`].
    ///
    /// Input errors use the reserved negative ranges of
    /// [`SparseFormatError::status_code`] and [`ShapeError::status_code`].
    /// Native failures forward the native status unchanged.
    pub fn status_code(&self) -> i32 {
        match self {
            SolveError::MalformedInput(e) => e.status_code(),
            SolveError::InvalidShape(e) => e.status_code(),
            SolveError::NativeFailure(code) => *code,
        }
    }

    /// true if the failure was detected before calling the native solver
    pub fn is_input_error(&self) -> bool {
        !matches!(self, SolveError::NativeFailure(_))
    }
}

/// Outcome of a single solve.
///
/// Failures are reported here rather than by panicking, so that a caller
/// working through a batch of systems can tell bad input apart from a
/// native solver failure by inspecting [`status`](Self::status) or
/// [`error`](Self::error).
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// solution vector, of length equal to the matrix row count when
    /// the shape could be determined.   All zeros unless the solve succeeded.
    pub solution: Vec<f64>,
    /// 0 on success, otherwise the code of [`SolveError::status_code`]
    pub status: i32,
    /// the failure, if any
    pub error: Option<SolveError>,
    /// pre-flight numerical assessment, when enabled and reached
    pub diagnostics: Option<DiagnosticReport>,
    /// ‖Ax - b‖∞ of the returned solution, when requested and successful
    pub residual: Option<f64>,
    /// wall clock time spent in the solve (seconds)
    pub solve_time: f64,
}

impl SolveResult {
    /// true if the native solver reported success
    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    pub(crate) fn failed(error: SolveError, n: usize) -> Self {
        SolveResult {
            solution: vec![0.0; n],
            status: error.status_code(),
            error: Some(error),
            diagnostics: None,
            residual: None,
            solve_time: 0.0,
        }
    }
}

#[test]
fn test_solve_error_codes() {
    let e: SolveError = SparseFormatError::PointerNnzMismatch { found: 3, nnz: 4 }.into();
    assert_eq!(e.status_code(), -103);
    assert!(e.is_input_error());

    let e: SolveError = ShapeError::NotSquare { nrows: 2, ncols: 3 }.into();
    assert_eq!(e.status_code(), -202);

    let e = SolveError::NativeFailure(7);
    assert_eq!(e.status_code(), 7);
    assert!(!e.is_input_error());

    let r = SolveResult::failed(e, 3);
    assert_eq!(r.solution, vec![0.0; 3]);
    assert_eq!(r.status, 7);
    assert!(!r.is_success());
}
