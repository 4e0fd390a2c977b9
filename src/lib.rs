//! __sparsedirect__ is the format conversion, validation and dispatch layer
//! in front of external direct sparse linear solvers.
//!
//! Callers may hold their system matrix in any of three standard layouts:
//! coordinate (COO), compressed sparse row (CSR) or compressed sparse column
//! (CSC).   Every solve goes through the same steps:
//!
//! 1. COO and CSR inputs are converted to canonical CSC, with duplicate
//!    entries summed in a fixed, documented order ([`convert`]);
//! 2. the CSC arrays are checked structurally, and malformed input is
//!    rejected before any native code runs ([`validate`]);
//! 3. optionally, cheap numerical estimates flag matrices that look
//!    singular or badly conditioned ([`validate::assess`]);
//! 4. the system is handed to a native direct solver backend through a
//!    bounds-checked, 32 bit index calling convention ([`solver`]).
//!
//! Failures are reported as status codes in a [`SolveResult`](solver::SolveResult)
//! and never panic, so batch callers can tell bad input apart from a native
//! solver failure.
//!
//! # Example
//!
//! ```
//! use sparsedirect::solver::*;
//! use std::os::raw::c_int;
//!
//! // A native routine with the expected C signature.   This one only
//! // handles diagonal matrices.
//! unsafe extern "C" fn diagonal_solve(
//!     values: *const f64, rowind: *const c_int, colptr: *const c_int,
//!     n_rows: c_int, _n_cols: c_int, _nnz: c_int,
//!     rhs: *const f64, solution: *mut f64,
//! ) -> c_int {
//!     for j in 0..n_rows as usize {
//!         let p = *colptr.add(j) as usize;
//!         if *rowind.add(p) as usize != j {
//!             return -1;
//!         }
//!         *solution.add(j) = *rhs.add(j) / *values.add(p);
//!     }
//!     0
//! }
//!
//! let backend = unsafe { ExternSolver::from_raw("diagonal", diagonal_solve) };
//! let available = SolverAvailability::new().with_backend(backend);
//! let solver = SparseSolver::new(&available, SolverSettings::default()).unwrap();
//!
//! // 3 x 3 identity in CSC form
//! let result = solver.solve_csc(&[1., 1., 1.], &[0, 1, 2], &[0, 1, 2, 3], &[4., 5., 6.]);
//! assert_eq!(result.status, 0);
//! assert_eq!(result.solution, vec![4., 5., 6.]);
//! ```
//!
//! # Logging
//!
//! The crate logs through [`tracing`].   Conversion summaries and dispatch
//! decisions are emitted at `debug` level, while rejected input, suspicious
//! pivots and native failures are emitted at `warn` level.   No subscriber
//! is installed by the library.

#![allow(non_snake_case)]

pub mod algebra;
pub mod convert;
pub mod solver;
pub(crate) mod timers;
pub mod validate;
