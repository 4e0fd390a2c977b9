use super::pivots::diagonal_entries;
use crate::algebra::FloatT;
use itertools::{Itertools, MinMaxResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cheap numerical risk estimates for a CSC matrix.
///
/// All quantities are heuristics.   A matrix flagged as singular may still
/// factor successfully, and many singular matrices are not flagged.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiagnosticReport {
    /// true if the matrix looks singular or badly conditioned
    pub is_singular: bool,
    /// product of the largest absolute row sum and largest absolute
    /// column sum.   Not a condition number, but an upper-bound style
    /// proxy for one.   Infinite if the matrix is entirely zero.
    pub condition_estimate: f64,
    /// `min|A[j,j]| / max|A[j,j]|` over stored diagonal entries,
    /// or zero when there are none
    pub diagonal_ratio: f64,
    /// number of leading diagonal positions with no stored entry
    pub missing_diagonals: usize,
    /// number of stored diagonal entries below the pivot tolerance
    pub small_pivots: usize,
}

/// Thresholds used by [`assess_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagnosticThresholds {
    /// flag as singular below this diagonal ratio
    pub singular_ratio: f64,
    /// flag as singular above this condition estimate
    pub condition_limit: f64,
    /// diagonal entries below this magnitude count as small pivots
    pub pivot_tolerance: f64,
}

impl Default for DiagnosticThresholds {
    fn default() -> Self {
        Self {
            singular_ratio: 1e-10,
            condition_limit: 1e15,
            pivot_tolerance: 1e-10,
        }
    }
}

/// Numerical pre-flight assessment with default thresholds.
///
/// See [`assess_with`].
pub fn assess<T: FloatT>(
    values: &[T],
    minor_indices: &[usize],
    major_ptr: &[usize],
    n_rows: usize,
) -> DiagnosticReport {
    assess_with(
        values,
        minor_indices,
        major_ptr,
        n_rows,
        &DiagnosticThresholds::default(),
    )
}

/// Numerical pre-flight assessment of a CSC triple.
///
/// Makes a single pass over the stored entries, accumulating absolute row
/// and column sums and locating the diagonal of the leading
/// `min(n_rows, n_cols)` columns.   The matrix is reported as singular if
/// any of those diagonal entries is missing, if the diagonal ratio is below
/// `thresholds.singular_ratio` or if the condition estimate exceeds
/// `thresholds.condition_limit`.
///
/// The input is not required to be structurally valid.   Entries that fall
/// outside the matrix are ignored rather than causing a panic.
pub fn assess_with<T: FloatT>(
    values: &[T],
    minor_indices: &[usize],
    major_ptr: &[usize],
    n_rows: usize,
    thresholds: &DiagnosticThresholds,
) -> DiagnosticReport {
    let n_cols = major_ptr.len().saturating_sub(1);

    // infinity norm style accumulators
    let mut row_sums = vec![T::zero(); n_rows];
    let mut col_sums = vec![T::zero(); n_cols];

    for (col, win) in major_ptr.windows(2).enumerate() {
        let rng = win[0]..win[1];
        let (Some(rows), Some(vals)) = (minor_indices.get(rng.clone()), values.get(rng)) else {
            continue;
        };
        for (&row, &v) in rows.iter().zip(vals) {
            if let Some(s) = row_sums.get_mut(row) {
                *s += v.abs();
            }
            col_sums[col] += v.abs();
        }
    }

    let max_row = max_or_zero(&row_sums);
    let max_col = max_or_zero(&col_sums);
    let condition_estimate = match max_row * max_col {
        c if c == 0.0 => f64::INFINITY,
        c => c,
    };

    let diag = diagonal_entries(values, minor_indices, major_ptr, n_rows);
    let missing_diagonals = diag.iter().filter(|d| d.is_none()).count();
    let present = diag.iter().flatten().map(|d| to_f64(d.abs())).collect_vec();

    let diagonal_ratio = match present.iter().minmax() {
        MinMaxResult::NoElements => 0.0,
        MinMaxResult::OneElement(&d) if d > 0.0 => 1.0,
        MinMaxResult::MinMax(&lo, &hi) if hi > 0.0 => lo / hi,
        _ => 0.0,
    };
    let small_pivots = present
        .iter()
        .filter(|&&d| d < thresholds.pivot_tolerance)
        .count();

    let is_singular = missing_diagonals > 0
        || diagonal_ratio < thresholds.singular_ratio
        || condition_estimate > thresholds.condition_limit;

    DiagnosticReport {
        is_singular,
        condition_estimate,
        diagonal_ratio,
        missing_diagonals,
        small_pivots,
    }
}

fn max_or_zero<T: FloatT>(v: &[T]) -> f64 {
    v.iter().fold(0.0, |acc, &x| f64::max(acc, to_f64(x)))
}

fn to_f64<T: FloatT>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
