use crate::algebra::{AsFloatT, CscMatrix, FloatT};
use tracing::warn;

// number of missing diagonal positions listed in a warning
const MISSING_REPORT_LIMIT: usize = 10;

/// Summary of the diagonal pivots of a matrix, as reported by [`check_pivots`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotSummary {
    /// columns `j < min(m,n)` with no stored `(j,j)` entry
    pub missing: Vec<usize>,
    /// `(j, A[j,j])` for every stored diagonal with magnitude below tolerance
    pub small: Vec<(usize, f64)>,
}

impl PivotSummary {
    /// true if no pivot gave cause for a warning
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.small.is_empty()
    }
}

/// Scan the diagonal of a structurally valid matrix and log a warning for
/// every stored pivot with magnitude below `tolerance`, and a single
/// warning listing the first few missing diagonal positions.
///
/// These are advisory only.   A matrix with small or missing pivots is
/// still handed to the solver, which may or may not succeed.
pub fn check_pivots<T: FloatT>(A: &CscMatrix<T>, tolerance: f64) -> PivotSummary {
    let diag = diagonal_entries(&A.nzval, &A.rowval, &A.colptr, A.m);
    let tolerance: T = tolerance.as_T();
    let mut summary = PivotSummary::default();

    for (j, d) in diag.into_iter().enumerate() {
        match d {
            None => summary.missing.push(j),
            Some(d) if d.abs() < tolerance => {
                let value = d.to_f64().unwrap_or(f64::NAN);
                warn!(position = j, value, "small diagonal element");
                summary.small.push((j, value));
            }
            Some(_) => {}
        }
    }

    if !summary.missing.is_empty() {
        let shown = &summary.missing[..summary.missing.len().min(MISSING_REPORT_LIMIT)];
        warn!(
            count = summary.missing.len(),
            positions = ?shown,
            "missing diagonal elements"
        );
    }
    summary
}

// The stored diagonal entry of each of the leading min(n_rows, n_cols)
// columns, or None if absent.   Tolerates malformed input: a column whose
// pointer range is not valid is treated as having no diagonal.
pub(crate) fn diagonal_entries<T: FloatT>(
    values: &[T],
    minor_indices: &[usize],
    major_ptr: &[usize],
    n_rows: usize,
) -> Vec<Option<T>> {
    let n_cols = major_ptr.len().saturating_sub(1);
    let min_dim = n_rows.min(n_cols);

    (0..min_dim)
        .map(|j| {
            let rng = major_ptr[j]..major_ptr[j + 1];
            let rows = minor_indices.get(rng.clone())?;
            let k = rows.iter().position(|&i| i == j)?;
            values.get(rng.start + k).copied()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivots_reports_small_and_missing() {
        // A =
        // [1e-12  1.  .  ]
        // [.      .   .  ]
        // [.      2.  3. ]
        let A = CscMatrix::new(
            3,
            3,
            vec![0, 1, 3, 4],
            vec![0, 0, 2, 2],
            vec![1e-12, 1., 2., 3.],
        );
        let s = check_pivots(&A, 1e-10);
        assert_eq!(s.missing, vec![1]);
        assert_eq!(s.small, vec![(0, 1e-12)]);
        assert!(!s.is_clean());

        let s = check_pivots(&CscMatrix::<f64>::identity(4), 1e-10);
        assert!(s.is_clean());
    }

    #[test]
    fn diagonal_of_rectangular_and_malformed() {
        // 2 x 3, diagonal only over the first two columns
        let d = diagonal_entries(&[5., 6., 7.], &[0, 1, 1], &[0, 1, 2, 3], 2);
        assert_eq!(d, vec![Some(5.), Some(6.)]);

        // pointer range runs past the end of the index array
        let d = diagonal_entries(&[5.], &[0], &[0, 4], 1);
        assert_eq!(d, vec![None]);
    }
}
