use super::{NativeSolver, NativeSystem};
use crate::algebra::SparseFormatError;
use std::os::raw::c_int;
use tracing::{debug, warn};

/// C signature of an external direct sparse solve routine:
///
/// ```text
/// int solve_sparse_system(const double *values, const int *rowind,
///                         const int *colptr, int n_rows, int n_cols,
///                         int nnz, const double *rhs, double *solution);
/// ```
///
/// The matrix is 0-indexed CSC with strictly increasing row indices in each
/// column.   `solution` has room for `n_rows` values.   Returns 0 on success.
pub type NativeSolveFn = unsafe extern "C" fn(
    values: *const f64,
    rowind: *const c_int,
    colptr: *const c_int,
    n_rows: c_int,
    n_cols: c_int,
    nnz: c_int,
    rhs: *const f64,
    solution: *mut f64,
) -> c_int;

/// A [`NativeSolver`] calling an external C routine through a
/// [`NativeSolveFn`] pointer.
#[derive(Debug, Clone)]
pub struct ExternSolver {
    name: String,
    func: NativeSolveFn,
}

impl ExternSolver {
    /// Wraps a foreign solve routine.
    ///
    /// # Safety
    /// `func` must follow the [`NativeSolveFn`] contract for every valid
    /// system: it may only read `nnz` values and row indices, `n_cols + 1`
    /// column pointers and `n_rows` right hand side entries, may only write
    /// the first `n_rows` entries of `solution`, must not keep any of the
    /// pointers after returning, and must be safe to call concurrently from
    /// several threads.
    pub unsafe fn from_raw(name: impl Into<String>, func: NativeSolveFn) -> Self {
        ExternSolver {
            name: name.into(),
            func,
        }
    }
}

impl NativeSolver for ExternSolver {
    fn name(&self) -> &str {
        &self.name
    }

    /// Calls the routine, or returns the
    /// [`IncompatibleDimension`](SparseFormatError::IncompatibleDimension)
    /// status code without calling it if `solution` does not have one entry
    /// per row.
    fn solve(&self, system: &NativeSystem<'_>, solution: &mut [f64]) -> i32 {
        if solution.len() != system.rhs().len() {
            warn!(
                solver = %self.name,
                expected = system.rhs().len(),
                found = solution.len(),
                "solution buffer length mismatch"
            );
            return SparseFormatError::IncompatibleDimension.status_code();
        }

        debug!(solver = %self.name, n = system.n_rows(), nnz = system.nnz(), "calling native solver");

        // SAFETY: NativeSystem is only built by marshal, so its dimensions
        // match its buffers and its indices are in range.   solution was
        // checked above, and every buffer outlives the call.
        unsafe {
            (self.func)(
                system.values().as_ptr(),
                system.rowind().as_ptr(),
                system.colptr().as_ptr(),
                system.n_rows(),
                system.n_cols(),
                system.nnz(),
                system.rhs().as_ptr(),
                solution.as_mut_ptr(),
            )
        }
    }
}
