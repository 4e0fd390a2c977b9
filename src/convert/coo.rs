use crate::algebra::{CscMatrix, FloatT, SparseFormatError};
use crate::validate::check_coo_bounds;
use std::iter::zip;
use tracing::debug;

/// Convert coordinate (COO) data into canonical CSC form.
///
/// `shape` is `(nrows, ncols)`.   Entries may appear in any order and
/// repeated positions are summed (see the [module docs](crate::convert)
/// for the summation order).   The output satisfies `nnz' <= nnz`.
///
/// All indices are bounds checked before any entry is scattered, so
/// out of range input is reported as
/// [`IndexOutOfBounds`](SparseFormatError::IndexOutOfBounds) rather than
/// producing a corrupt matrix.
///
/// ```
/// use sparsedirect::convert::coo_to_csc;
///
/// let rows = [0, 1, 0];
/// let cols = [0, 1, 0];
/// let vals = [2.0, 1.0, 3.0];
/// let A = coo_to_csc(&rows, &cols, &vals, (2, 2)).unwrap();
///
/// assert_eq!(A.colptr, vec![0, 1, 2]);
/// assert_eq!(A.rowval, vec![0, 1]);
/// assert_eq!(A.nzval, vec![5.0, 1.0]);
/// ```
pub fn coo_to_csc<T: FloatT>(
    rows: &[usize],
    cols: &[usize],
    values: &[T],
    shape: (usize, usize),
) -> Result<CscMatrix<T>, SparseFormatError> {
    let (m, n) = shape;
    let nnz = values.len();

    if rows.len() != nnz || cols.len() != nnz {
        return Err(SparseFormatError::IncompatibleDimension);
    }
    check_coo_bounds(rows, cols, m, n)?;

    let mut A = CscMatrix::spalloc(m, n, nnz);

    // spalloc marks colptr[n] = nnz, but it must take
    // part in the count as an empty trailing slot
    A.colptr[n] = 0;

    // histogram of column counts, then column starts
    A.colcount_indices(cols);
    A.colcount_to_colptr();

    // scatter into column buckets
    for ((&row, &col), &val) in zip(zip(rows, cols), values) {
        A.fill_entry(row, col, val);
    }
    A.backshift_colptrs();

    A.sort_columns();
    A.coalesce_duplicates();

    debug!(
        nrows = m,
        ncols = n,
        nnz_in = nnz,
        nnz_out = A.nnz(),
        "converted COO to CSC"
    );

    Ok(A)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coo_to_csc_sorts_within_columns() {
        let rows = [0, 3, 1, 0, 2, 1, 3];
        let cols = [0, 0, 1, 2, 2, 3, 3];
        let vals = [1., 6., 2., 3., 4., 5., 7.];

        let A = coo_to_csc(&rows, &cols, &vals, (4, 4)).unwrap();
        assert_eq!(A.colptr, vec![0, 2, 3, 5, 7]);
        assert_eq!(A.rowval, vec![0, 3, 1, 0, 2, 1, 3]);
        assert_eq!(A.nzval, vec![1., 6., 2., 3., 4., 5., 7.]);
    }

    #[test]
    fn coo_to_csc_reversed_input() {
        // same matrix as above, entries supplied back to front
        let rows = [3, 1, 2, 0, 1, 3, 0];
        let cols = [3, 3, 2, 2, 1, 0, 0];
        let vals = [7., 5., 4., 3., 2., 6., 1.];

        let A = coo_to_csc(&rows, &cols, &vals, (4, 4)).unwrap();
        assert_eq!(A.colptr, vec![0, 2, 3, 5, 7]);
        assert_eq!(A.rowval, vec![0, 3, 1, 0, 2, 1, 3]);
        assert_eq!(A.nzval, vec![1., 6., 2., 3., 4., 5., 7.]);
    }

    #[test]
    fn coo_to_csc_sums_duplicates() {
        let A = coo_to_csc(&[0, 0], &[0, 0], &[2.0, 3.0], (1, 1)).unwrap();
        assert_eq!(A.colptr, vec![0, 1]);
        assert_eq!(A.rowval, vec![0]);
        assert_eq!(A.nzval, vec![5.0]);
    }

    #[test]
    fn coo_to_csc_duplicate_sum_is_order_independent() {
        // 0.1 + 0.2 + 0.3 differs from 0.3 + 0.2 + 0.1 in the last bit
        let perms: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        let base: [f64; 3] = [0.1, 0.2, 0.3];
        let reference = coo_to_csc(&[1, 1, 1], &[0, 0, 0], &base, (2, 1)).unwrap();

        for p in perms {
            let vals = [base[p[0]], base[p[1]], base[p[2]]];
            let A = coo_to_csc(&[1, 1, 1], &[0, 0, 0], &vals, (2, 1)).unwrap();
            assert_eq!(A.nzval.len(), 1);
            assert_eq!(A.nzval[0].to_bits(), reference.nzval[0].to_bits());
        }
    }

    #[test]
    fn coo_to_csc_empty() {
        let A = coo_to_csc::<f64>(&[], &[], &[], (3, 2)).unwrap();
        assert_eq!(A.colptr, vec![0, 0, 0]);
        assert!(A.rowval.is_empty());
        assert!(A.nzval.is_empty());
    }

    #[test]
    fn coo_to_csc_rejects_bad_input() {
        let err = coo_to_csc(&[0, 2], &[0, 1], &[1., 1.], (2, 2)).unwrap_err();
        assert_eq!(
            err,
            SparseFormatError::IndexOutOfBounds {
                position: 1,
                index: 2,
                dim: 2
            }
        );

        let err = coo_to_csc(&[0, 1], &[0, 5], &[1., 1.], (2, 2)).unwrap_err();
        assert!(matches!(err, SparseFormatError::IndexOutOfBounds { index: 5, .. }));

        let err = coo_to_csc(&[0, 1], &[0], &[1., 1.], (2, 2)).unwrap_err();
        assert_eq!(err, SparseFormatError::IncompatibleDimension);
    }
}
