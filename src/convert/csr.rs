use crate::algebra::{CscMatrix, FloatT, SparseFormatError};
use crate::validate::{check_compressed_pointers, check_minor_bounds, infer_dimensions};
use tracing::debug;

/// Convert compressed row (CSR) data into canonical CSC form.
///
/// Each CSR entry `(row = major, col = minor)` becomes the CSC entry
/// `(row = minor, col = major)`.   The number of rows is taken from the
/// length of `major_ptr`.   The number of columns is `n_cols` when supplied,
/// otherwise it is inferred as `max(minor_indices) + 1` (zero for an empty
/// matrix).   A column index of `usize::MAX` leaves no room for the
/// inferred count and fails with
/// [`IndexOverflow`](SparseFormatError::IndexOverflow).
///
/// Column indices within a row may be unsorted and may repeat.   The pointer
/// array is checked before any entry is moved, and repeated positions are
/// summed as described in the [module docs](crate::convert).
///
/// An input with no stored entries is valid and produces an all-zero
/// column pointer.
pub fn csr_to_csc<T: FloatT>(
    values: &[T],
    minor_indices: &[usize],
    major_ptr: &[usize],
    n_cols: Option<usize>,
) -> Result<CscMatrix<T>, SparseFormatError> {
    if major_ptr.is_empty() || minor_indices.len() != values.len() {
        return Err(SparseFormatError::IncompatibleDimension);
    }
    let nnz = values.len();
    let shape = n_cols.map(|n| (major_ptr.len() - 1, n));
    let (m, n) = infer_dimensions(minor_indices, major_ptr, shape)?;

    check_compressed_pointers(major_ptr, nnz)?;
    check_minor_bounds(minor_indices, n)?;

    let mut A = CscMatrix::spalloc(m, n, nnz);
    A.colptr[n] = 0;
    A.colcount_indices(minor_indices);
    A.colcount_to_colptr();

    // row by row scatter, so rows already arrive in ascending
    // order within each column.   Repeated columns in a row
    // still need the sort below to fix their summation order
    for row in 0..m {
        for ptr in major_ptr[row]..major_ptr[row + 1] {
            A.fill_entry(row, minor_indices[ptr], values[ptr]);
        }
    }
    A.backshift_colptrs();

    A.sort_columns();
    A.coalesce_duplicates();

    debug!(
        nrows = m,
        ncols = n,
        nnz_in = nnz,
        nnz_out = A.nnz(),
        "converted CSR to CSC"
    );

    Ok(A)
}
