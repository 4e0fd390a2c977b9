//! Structural validation and numerical pre-flight checks for CSC data.
//!
//! Structural checks return a [`SparseFormatError`](crate::algebra::SparseFormatError)
//! and never modify their inputs.   Numerical checks are advisory only: they
//! produce a [`DiagnosticReport`] or log warnings, and never reject a matrix.

mod diagnostics;
mod dims;
mod pivots;
mod structure;

pub use diagnostics::*;
pub use dims::*;
pub use pivots::*;
pub use structure::*;
