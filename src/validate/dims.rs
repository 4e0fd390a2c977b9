use crate::algebra::SparseFormatError;

/// Dimensions `(n_major, n_minor)` of compressed data.
///
/// When `shape` is supplied it is returned unchanged.   Otherwise the major
/// dimension is the number of slices described by `major_ptr`, and the minor
/// dimension is one past the largest minor index (zero when no entries are
/// stored).   For CSR data this is `(n_rows, n_cols)`, for CSC data
/// `(n_cols, n_rows)`.
///
/// Fails with [`IndexOverflow`](SparseFormatError::IndexOverflow) if the
/// largest minor index is `usize::MAX`.
pub fn infer_dimensions(
    minor_indices: &[usize],
    major_ptr: &[usize],
    shape: Option<(usize, usize)>,
) -> Result<(usize, usize), SparseFormatError> {
    if let Some(shape) = shape {
        return Ok(shape);
    }
    let n_major = major_ptr.len().saturating_sub(1);
    let n_minor = match minor_indices.iter().max() {
        None => 0,
        Some(&i) => i
            .checked_add(1)
            .ok_or(SparseFormatError::IndexOverflow { value: i })?,
    };
    Ok((n_major, n_minor))
}

#[test]
fn test_infer_dimensions() {
    assert_eq!(infer_dimensions(&[0, 4, 2], &[0, 1, 3], None), Ok((2, 5)));
    assert_eq!(infer_dimensions(&[], &[0, 0, 0, 0], None), Ok((3, 0)));
    assert_eq!(infer_dimensions(&[], &[], None), Ok((0, 0)));
    assert_eq!(infer_dimensions(&[0, 4], &[0, 2], Some((7, 9))), Ok((7, 9)));
    assert_eq!(
        infer_dimensions(&[2, usize::MAX], &[0, 2], None),
        Err(SparseFormatError::IndexOverflow { value: usize::MAX })
    );
}
