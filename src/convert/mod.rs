//! Conversion of COO and CSR inputs into canonical CSC form.
//!
//! Every routine here produces new, independently owned arrays and never
//! mutates its input.   The output of [`coo_to_csc`] and [`csr_to_csc`] is
//! always canonical: column pointers start at zero and end at nnz, and row
//! indices are strictly increasing within each column.
//!
//! # Summation order
//!
//! Entries sharing the same `(row, col)` position are coalesced into a
//! single entry by floating point summation.   Since floating point
//! addition is not associative, the order of summation is fixed: within
//! each column entries are ordered by ascending row index, and duplicates
//! of a single position are ordered by value under the IEEE 754 total
//! order (`-0.0` before `0.0`, NaN last) before being summed left to right.   The converted values are therefore bit-for-bit
//! independent of the order in which the input entries were supplied.

mod coo;
mod csc;
mod csr;
pub use coo::*;
pub use csc::*;
pub use csr::*;
