use super::native::{NativeSolver, NativeSystem, SolverAvailability};
use super::{SettingsError, SolveError, SolveResult, SolverSettings};
use crate::algebra::*;
use crate::convert::{coo_to_csc, csr_to_csc};
use crate::timers::*;
use crate::validate::{assess_with, check_pivots, DiagnosticReport};
use std::sync::Arc;
use tracing::{debug, warn};

/// Borrowed sparse system matrix in any of the supported layouts.
///
/// The compressed layouts carry no dimensions of their own.   Since the
/// dispatcher only solves square systems, the dimension is the number of
/// major slices, i.e. `major_ptr.len() - 1`.
#[derive(Debug, Clone, Copy)]
pub enum SparseInput<'a> {
    /// coordinate triplets, unordered, duplicates summed
    Coo {
        rows: &'a [usize],
        cols: &'a [usize],
        values: &'a [f64],
        shape: (usize, usize),
    },
    /// compressed rows, column indices may be unsorted or repeated
    Csr {
        values: &'a [f64],
        minor_indices: &'a [usize],
        major_ptr: &'a [usize],
    },
    /// compressed columns, must already be canonical
    Csc {
        values: &'a [f64],
        minor_indices: &'a [usize],
        major_ptr: &'a [usize],
    },
}

impl<'a> SparseInput<'a> {
    pub fn format(&self) -> SparseFormat {
        match self {
            SparseInput::Coo { .. } => SparseFormat::Coo,
            SparseInput::Csr { .. } => SparseFormat::Csr,
            SparseInput::Csc { .. } => SparseFormat::Csc,
        }
    }

    // best guess at the row count, used to size
    // the solution of a failed solve
    fn nrows_hint(&self) -> usize {
        match *self {
            SparseInput::Coo { shape, .. } => shape.0,
            SparseInput::Csr { major_ptr, .. } | SparseInput::Csc { major_ptr, .. } => {
                major_ptr.len().saturating_sub(1)
            }
        }
    }

    // dimension of the square system, checked against the rhs
    fn system_dimension(&self, rhs: &[f64]) -> Result<usize, SolveError> {
        let (nrows, ncols) = match *self {
            SparseInput::Coo { shape, .. } => shape,
            SparseInput::Csr { major_ptr, .. } | SparseInput::Csc { major_ptr, .. } => {
                let n = major_ptr
                    .len()
                    .checked_sub(1)
                    .ok_or(SparseFormatError::IncompatibleDimension)?;
                (n, n)
            }
        };
        if nrows == 0 || ncols == 0 {
            return Err(ShapeError::EmptyDimension { nrows, ncols }.into());
        }
        if nrows != ncols {
            return Err(ShapeError::NotSquare { nrows, ncols }.into());
        }
        if rhs.len() != nrows {
            return Err(ShapeError::RhsLengthMismatch {
                expected: nrows,
                found: rhs.len(),
            }
            .into());
        }
        Ok(nrows)
    }

    // CSC copy of the input.   Converted inputs are canonical, copied
    // CSC input is not checked here.
    fn to_csc(self, n: usize) -> Result<CscMatrix<f64>, SparseFormatError> {
        match self {
            SparseInput::Coo {
                rows,
                cols,
                values,
                shape,
            } => coo_to_csc(rows, cols, values, shape),
            SparseInput::Csr {
                values,
                minor_indices,
                major_ptr,
            } => csr_to_csc(values, minor_indices, major_ptr, Some(n)),
            SparseInput::Csc {
                values,
                minor_indices,
                major_ptr,
            } => Ok(CscMatrix {
                m: n,
                n,
                colptr: major_ptr.to_vec(),
                rowval: minor_indices.to_vec(),
                nzval: values.to_vec(),
            }),
        }
    }
}

impl<'a> From<&'a CooMatrix<f64>> for SparseInput<'a> {
    fn from(A: &'a CooMatrix<f64>) -> Self {
        SparseInput::Coo {
            rows: &A.rowval,
            cols: &A.colval,
            values: &A.nzval,
            shape: (A.m, A.n),
        }
    }
}

impl<'a> From<&'a CsrMatrix<f64>> for SparseInput<'a> {
    fn from(A: &'a CsrMatrix<f64>) -> Self {
        SparseInput::Csr {
            values: &A.nzval,
            minor_indices: &A.colval,
            major_ptr: &A.rowptr,
        }
    }
}

impl<'a> From<&'a CscMatrix<f64>> for SparseInput<'a> {
    fn from(A: &'a CscMatrix<f64>) -> Self {
        SparseInput::Csc {
            values: &A.nzval,
            minor_indices: &A.rowval,
            major_ptr: &A.colptr,
        }
    }
}

/// Uniform direct solve entry point for COO, CSR and CSC systems.
///
/// Each call converts the input to canonical CSC if needed, validates it,
/// optionally assesses it numerically and then makes exactly one call to
/// the native backend chosen at construction.   Nothing is cached between
/// calls, so a single `SparseSolver` can be shared between threads.
///
/// ```
/// use sparsedirect::solver::*;
///
/// # struct Diagonal;
/// # impl NativeSolver for Diagonal {
/// #     fn name(&self) -> &str { "diagonal" }
/// #     fn solve(&self, sys: &NativeSystem<'_>, x: &mut [f64]) -> i32 {
/// #         for j in 0..x.len() {
/// #             x[j] = sys.rhs()[j] / sys.values()[sys.colptr()[j] as usize];
/// #         }
/// #         0
/// #     }
/// # }
/// let available = SolverAvailability::new().with_backend(Diagonal);
/// let solver = SparseSolver::new(&available, SolverSettings::default()).unwrap();
///
/// // 2 x 2 diagonal system given as triplets with a split entry
/// let result = solver.solve_coo(&[0, 1, 1], &[0, 1, 1], &[2., 1., 3.], (2, 2), &[2., 8.]);
/// assert!(result.is_success());
/// assert_eq!(result.solution, vec![1., 2.]);
/// ```
pub struct SparseSolver {
    settings: SolverSettings,
    backend: Arc<dyn NativeSolver>,
}

impl SparseSolver {
    /// Creates a solver using the backend named by
    /// `settings.direct_solve_method`.
    ///
    /// Fails if the settings are invalid or no matching backend is
    /// registered in `available`.
    pub fn new(
        available: &SolverAvailability,
        settings: SolverSettings,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        let backend = available.resolve(&settings.direct_solve_method)?;
        debug!(
            method = %settings.direct_solve_method,
            backend = backend.name(),
            "selected native solver"
        );
        Ok(SparseSolver { settings, backend })
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// name of the native backend in use
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Solve with a matrix in compressed column form.   Row indices must be
    /// strictly increasing within each column.
    pub fn solve_csc(
        &self,
        values: &[f64],
        minor_indices: &[usize],
        major_ptr: &[usize],
        rhs: &[f64],
    ) -> SolveResult {
        let input = SparseInput::Csc {
            values,
            minor_indices,
            major_ptr,
        };
        self.solve(input, rhs)
    }

    /// Solve with a matrix in compressed row form.
    pub fn solve_csr(
        &self,
        values: &[f64],
        minor_indices: &[usize],
        major_ptr: &[usize],
        rhs: &[f64],
    ) -> SolveResult {
        let input = SparseInput::Csr {
            values,
            minor_indices,
            major_ptr,
        };
        self.solve(input, rhs)
    }

    /// Solve with a matrix in coordinate form.
    pub fn solve_coo(
        &self,
        rows: &[usize],
        cols: &[usize],
        values: &[f64],
        shape: (usize, usize),
        rhs: &[f64],
    ) -> SolveResult {
        let input = SparseInput::Coo {
            rows,
            cols,
            values,
            shape,
        };
        self.solve(input, rhs)
    }

    /// Solve `A x = rhs` for a matrix in any supported layout.
    ///
    /// Never panics on bad input.   Failures are reported through
    /// [`SolveResult::status`] with an all zero solution.
    pub fn solve<'a>(&self, input: impl Into<SparseInput<'a>>, rhs: &[f64]) -> SolveResult {
        let input = input.into();
        let mut timers = Timers::default();
        let mut diagnostics = None;

        let outcome = self.run(input, rhs, &mut timers, &mut diagnostics);
        let solve_time = timers.total_time().as_secs_f64();

        match outcome {
            Ok((solution, residual)) => SolveResult {
                solution,
                status: 0,
                error: None,
                diagnostics,
                residual,
                solve_time,
            },
            Err(e) => {
                warn!(
                    format = %input.format(),
                    status = e.status_code(),
                    "solve failed: {}", e
                );
                SolveResult {
                    diagnostics,
                    solve_time,
                    ..SolveResult::failed(e, input.nrows_hint())
                }
            }
        }
    }

    fn run(
        &self,
        input: SparseInput<'_>,
        rhs: &[f64],
        timers: &mut Timers,
        diagnostics: &mut Option<DiagnosticReport>,
    ) -> Result<(Vec<f64>, Option<f64>), SolveError> {
        let n = input.system_dimension(rhs)?;
        debug!(format = %input.format(), n, "dispatching solve");

        if !rhs.is_finite() {
            warn!("right hand side has non-finite entries");
        }

        let converted;
        timeit! {timers => "convert";
            converted = input.to_csc(n);
        }
        let A = converted?;

        let checked;
        timeit! {timers => "validate";
            checked = A.check_format();
            if checked.is_ok() {
                check_pivots(&A, self.settings.pivot_warning_tolerance);
            }
        }
        checked?;

        if self.settings.diagnostics_enable {
            let report;
            timeit! {timers => "diagnostics";
                report = assess_with(
                    &A.nzval,
                    &A.rowval,
                    &A.colptr,
                    A.m,
                    &self.settings.diagnostic_thresholds(),
                );
            }
            if report.is_singular {
                warn!(
                    condition_estimate = report.condition_estimate,
                    diagonal_ratio = report.diagonal_ratio,
                    missing_diagonals = report.missing_diagonals,
                    "matrix appears singular or badly conditioned"
                );
            }
            *diagnostics = Some(report);
        }

        let system = NativeSystem::marshal(&A, rhs)?;
        let mut solution = vec![0.0; n];

        let status;
        timeit! {timers => "native";
            status = self.backend.solve(&system, &mut solution);
        }
        debug!(backend = self.backend.name(), status, "native solve returned");

        if status != 0 {
            return Err(SolveError::NativeFailure(status));
        }

        let residual = self
            .settings
            .compute_residual
            .then(|| residual_norm(&A, &solution, rhs));

        Ok((solution, residual))
    }
}

// ‖Ax - b‖∞
fn residual_norm(A: &CscMatrix<f64>, x: &[f64], b: &[f64]) -> f64 {
    let mut r = vec![0.0; b.len()];
    r.copy_from(b);
    A.gemv(&mut r, x, 1.0, -1.0);
    r.norm_inf()
}
