use crate::algebra::SparseFormatError;

/// Check that a CSC triple is in the canonical form required by the
/// native solvers.
///
/// Checks are made in the following order, returning on the first failure:
///
/// 0. `minor_indices` and `values` have equal length, and `major_ptr` has
///    length `n_cols + 1`;
/// 1. `major_ptr[0] == 0`;
/// 2. `major_ptr[n_cols] == values.len()`;
/// 3. `major_ptr` is non-decreasing;
/// 4. every minor index is `< n_rows`;
/// 5. minor indices are strictly increasing within every column.
///
/// The cheap global checks come first so that badly formed pointer arrays
/// fail before the per-column scan.
///
/// ```
/// use sparsedirect::algebra::SparseFormatError;
/// use sparsedirect::validate::validate_csc;
///
/// // column 0 holds rows [2, 1]
/// let res = validate_csc(&[1., 2.], &[2, 1], &[0, 2], 3, 1);
/// assert_eq!(res, Err(SparseFormatError::UnsortedIndices { slice: 0 }));
/// ```
pub fn validate_csc<T>(
    values: &[T],
    minor_indices: &[usize],
    major_ptr: &[usize],
    n_rows: usize,
    n_cols: usize,
) -> Result<(), SparseFormatError> {
    if minor_indices.len() != values.len() || major_ptr.len().checked_sub(1) != Some(n_cols) {
        return Err(SparseFormatError::IncompatibleDimension);
    }

    check_compressed_pointers(major_ptr, values.len())?;
    check_minor_bounds(minor_indices, n_rows)?;

    for (col, win) in major_ptr.windows(2).enumerate() {
        let slice = &minor_indices[win[0]..win[1]];
        if slice.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(SparseFormatError::UnsortedIndices { slice: col });
        }
    }
    Ok(())
}

/// Check a compressed (CSC or CSR) pointer array against the number of
/// stored entries: starts at zero, ends at `nnz`, never decreases.
///
/// Once this passes, every `major_ptr[k]..major_ptr[k+1]` is a valid range
/// into arrays of length `nnz`.
pub fn check_compressed_pointers(major_ptr: &[usize], nnz: usize) -> Result<(), SparseFormatError> {
    let (first, last) = match (major_ptr.first(), major_ptr.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return Err(SparseFormatError::IncompatibleDimension),
    };
    if first != 0 {
        return Err(SparseFormatError::BadPointerStart { found: first });
    }
    if last != nnz {
        return Err(SparseFormatError::PointerNnzMismatch { found: last, nnz });
    }
    if let Some(k) = major_ptr.windows(2).position(|w| w[1] < w[0]) {
        return Err(SparseFormatError::NonMonotonicPointer { position: k + 1 });
    }
    Ok(())
}

/// Check that every index is strictly less than `dim`.
pub fn check_minor_bounds(indices: &[usize], dim: usize) -> Result<(), SparseFormatError> {
    match indices.iter().position(|&i| i >= dim) {
        Some(position) => Err(SparseFormatError::IndexOutOfBounds {
            position,
            index: indices[position],
            dim,
        }),
        None => Ok(()),
    }
}

/// Bounds check for coordinate data: all row indices against `n_rows`,
/// then all column indices against `n_cols`.
pub fn check_coo_bounds(
    rows: &[usize],
    cols: &[usize],
    n_rows: usize,
    n_cols: usize,
) -> Result<(), SparseFormatError> {
    check_minor_bounds(rows, n_rows)?;
    check_minor_bounds(cols, n_cols)
}
