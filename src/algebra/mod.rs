//! Sparse matrix types and the numerical primitives shared by the
//! conversion, validation and solve layers.
//!
//! All three supported storage layouts are represented here:
//! [`CooMatrix`], [`CsrMatrix`] and [`CscMatrix`].   Only the CSC layout
//! is accepted by the external native solvers, and every other layout
//! is funnelled into it via the routines in [`crate::convert`].

// first import and flatten the solver's collection
// of core numeric types and matrix / vector traits.

mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod vecmath;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;

// sparse matrix implementations, one per layout

mod coo;
mod csc;
mod csr;
