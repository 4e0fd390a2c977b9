//! Solve dispatch.
//!
//! [`SparseSolver`] is the single entry point for solving square sparse
//! systems held in COO, CSR or CSC form.   The external direct solver it
//! calls is supplied explicitly as a [`NativeSolver`] backend, registered in
//! a [`SolverAvailability`] and selected once when the solver is built.

mod dispatcher;
pub mod native;
mod settings;
mod status;

pub use dispatcher::*;
pub use native::{ExternSolver, NativeSolveFn, NativeSolver, NativeSystem, SolverAvailability};
pub use settings::*;
pub use status::*;
