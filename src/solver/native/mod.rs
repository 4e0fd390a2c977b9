//! Boundary between the dispatcher and the external direct solvers.
//!
//! The native solvers take 32 bit CSC indices, so a validated
//! [`CscMatrix`] is marshalled into a [`NativeSystem`] holding 32 bit index
//! copies alongside borrowed value and right hand side buffers.   A backend
//! only ever sees a `NativeSystem` for the duration of one call.

use crate::algebra::{CscMatrix, SparseFormatError};
use std::os::raw::c_int;

mod availability;
mod ffi;
pub use availability::*;
pub use ffi::*;

/// A direct sparse solver backend.
///
/// Implementations solve `A x = b` for one system per call, with no state
/// carried between calls.   They must be safe to call from several threads
/// at once.
pub trait NativeSolver: Send + Sync {
    /// name used to select this backend in
    /// [`SolverSettings::direct_solve_method`](crate::solver::SolverSettings::direct_solve_method)
    fn name(&self) -> &str;

    /// Solves the system, writing into `solution`, which has length
    /// `system.n_rows()` and is zero on entry.   Returns 0 on success or a
    /// backend defined nonzero status.
    fn solve(&self, system: &NativeSystem<'_>, solution: &mut [f64]) -> i32;
}

/// A structurally valid CSC system laid out for the native calling
/// convention: `f64` values and 32 bit indices in contiguous buffers.
///
/// Only [`marshal`](NativeSystem::marshal) builds one, so the dimensions
/// always agree with the buffer lengths and the indices always pass
/// [`check_format`](CscMatrix::check_format).
#[derive(Debug)]
pub struct NativeSystem<'a> {
    values: &'a [f64],
    rowind: Vec<c_int>,
    colptr: Vec<c_int>,
    n_rows: c_int,
    n_cols: c_int,
    nnz: c_int,
    rhs: &'a [f64],
}

impl<'a> NativeSystem<'a> {
    /// Marshal a matrix and right hand side for a native call.
    ///
    /// The matrix is checked with [`check_format`](CscMatrix::check_format)
    /// first and its error returned on failure.   Fails with
    /// [`IndexOverflow`](SparseFormatError::IndexOverflow) if any index,
    /// dimension or the nonzero count does not fit in a `c_int`, and with
    /// [`IncompatibleDimension`](SparseFormatError::IncompatibleDimension)
    /// if `rhs` does not have one entry per row.
    pub fn marshal(A: &'a CscMatrix<f64>, rhs: &'a [f64]) -> Result<Self, SparseFormatError> {
        A.check_format()?;
        if rhs.len() != A.m {
            return Err(SparseFormatError::IncompatibleDimension);
        }
        Ok(NativeSystem {
            values: &A.nzval,
            rowind: to_c_indices(&A.rowval)?,
            colptr: to_c_indices(&A.colptr)?,
            n_rows: to_c_int(A.m)?,
            n_cols: to_c_int(A.n)?,
            nnz: to_c_int(A.nzval.len())?,
            rhs,
        })
    }

    /// nonzero values, `nnz` long
    pub fn values(&self) -> &[f64] {
        self.values
    }

    /// row indices, `nnz` long
    pub fn rowind(&self) -> &[c_int] {
        &self.rowind
    }

    /// column pointers, `n_cols + 1` long
    pub fn colptr(&self) -> &[c_int] {
        &self.colptr
    }

    pub fn n_rows(&self) -> c_int {
        self.n_rows
    }

    pub fn n_cols(&self) -> c_int {
        self.n_cols
    }

    pub fn nnz(&self) -> c_int {
        self.nnz
    }

    /// right hand side, `n_rows` long
    pub fn rhs(&self) -> &[f64] {
        self.rhs
    }
}

fn to_c_int(value: usize) -> Result<c_int, SparseFormatError> {
    c_int::try_from(value).map_err(|_| SparseFormatError::IndexOverflow { value })
}

fn to_c_indices(v: &[usize]) -> Result<Vec<c_int>, SparseFormatError> {
    v.iter().map(|&x| to_c_int(x)).collect()
}
