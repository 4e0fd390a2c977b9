#![allow(non_snake_case)]
use sparsedirect::{algebra::*, solver::*};
use std::os::raw::c_int;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// Solves lower triangular CSC systems by forward substitution.
// Returns 1 on a zero or missing pivot.
unsafe extern "C" fn lower_triangular_solve(
    values: *const f64,
    rowind: *const c_int,
    colptr: *const c_int,
    n_rows: c_int,
    n_cols: c_int,
    nnz: c_int,
    rhs: *const f64,
    solution: *mut f64,
) -> c_int {
    let n = n_rows as usize;
    let values = std::slice::from_raw_parts(values, nnz as usize);
    let rowind = std::slice::from_raw_parts(rowind, nnz as usize);
    let colptr = std::slice::from_raw_parts(colptr, n_cols as usize + 1);
    let rhs = std::slice::from_raw_parts(rhs, n);
    let x = std::slice::from_raw_parts_mut(solution, n);

    x.copy_from_slice(rhs);
    for j in 0..n {
        let rng = colptr[j] as usize..colptr[j + 1] as usize;
        let pivot = rng
            .clone()
            .find(|&p| rowind[p] as usize == j)
            .map(|p| values[p]);
        match pivot {
            Some(d) if d != 0.0 => x[j] /= d,
            _ => return 1,
        }
        for p in rng {
            let i = rowind[p] as usize;
            if i > j {
                x[i] -= values[p] * x[j];
            }
        }
    }
    0
}

static COUNTED_CALLS: AtomicUsize = AtomicUsize::new(0);

unsafe extern "C" fn counting_solve(
    values: *const f64,
    rowind: *const c_int,
    colptr: *const c_int,
    n_rows: c_int,
    n_cols: c_int,
    nnz: c_int,
    rhs: *const f64,
    solution: *mut f64,
) -> c_int {
    COUNTED_CALLS.fetch_add(1, Ordering::SeqCst);
    lower_triangular_solve(values, rowind, colptr, n_rows, n_cols, nnz, rhs, solution)
}

fn triangular_solver() -> SparseSolver {
    let backend = unsafe { ExternSolver::from_raw("lower", lower_triangular_solve) };
    let available = SolverAvailability::new().with_backend(backend);
    SparseSolver::new(&available, SolverSettings::default()).unwrap()
}

// L =
// [2.  .   . ]
// [1.  4.  . ]
// [.   2.  1.]
fn test_matrix() -> CscMatrix<f64> {
    CscMatrix::new(
        3,
        3,
        vec![0, 2, 4, 5],
        vec![0, 1, 1, 2, 2],
        vec![2., 1., 4., 2., 1.],
    )
}

#[test]
fn solve_csc_identity() {
    let solver = triangular_solver();
    let n = 5;
    let I = CscMatrix::<f64>::identity(n);
    let rhs = vec![1.; n];

    let result = solver.solve_csc(&I.nzval, &I.rowval, &I.colptr, &rhs);
    assert_eq!(result.status, 0);
    assert!(result.is_success());
    assert_eq!(result.solution, rhs);
    assert!(!result.diagnostics.unwrap().is_singular);
}

#[test]
fn solve_csc_bad_pointer_never_reaches_native() {
    let backend = unsafe { ExternSolver::from_raw("counting", counting_solve) };
    let available = SolverAvailability::new().with_backend(backend);
    let solver = SparseSolver::new(&available, SolverSettings::default()).unwrap();

    let I = CscMatrix::<f64>::identity(4);
    let mut colptr = I.colptr.clone();
    *colptr.last_mut().unwrap() -= 1;

    let result = solver.solve_csc(&I.nzval, &I.rowval, &colptr, &[1.; 4]);
    assert!(result.status < 0);
    assert_eq!(result.status, -103);
    assert_eq!(result.solution, vec![0.; 4]);
    assert!(matches!(
        result.error,
        Some(SolveError::MalformedInput(
            SparseFormatError::PointerNnzMismatch { found: 3, nnz: 4 }
        ))
    ));
    assert_eq!(COUNTED_CALLS.load(Ordering::SeqCst), 0);

    // the same backend is called for well formed input
    let result = solver.solve_csc(&I.nzval, &I.rowval, &I.colptr, &[1.; 4]);
    assert_eq!(result.status, 0);
    assert_eq!(COUNTED_CALLS.load(Ordering::SeqCst), 1);
}

#[test]
fn solve_all_formats_agree() {
    let solver = triangular_solver();
    let L = test_matrix();
    let b = [2., 9., 7.];
    let expected = [1., 2., 3.];

    let from_csc = solver.solve(&L, &b);

    let csr = L.to_csr().unwrap();
    let from_csr = solver.solve_csr(&csr.nzval, &csr.colval, &csr.rowptr, &b);

    let coo = L.to_coo();
    let from_coo = solver.solve_coo(&coo.rowval, &coo.colval, &coo.nzval, (3, 3), &b);

    for result in [from_csc, from_csr, from_coo] {
        assert!(result.is_success());
        assert!(result.solution.norm_inf_diff(&expected) < 1e-14);
    }
}

#[test]
fn solve_coo_sums_split_entries() {
    let solver = triangular_solver();
    // (0,0) supplied as 0.5 + 1.5, (1,1) as 3 + 1
    let rows = [1, 0, 1, 2, 0, 2, 1];
    let cols = [1, 0, 0, 1, 0, 2, 1];
    let vals = [3., 0.5, 1., 2., 1.5, 1., 1.];
    let result = solver.solve_coo(&rows, &cols, &vals, (3, 3), &[2., 9., 7.]);
    assert!(result.is_success());
    assert_eq!(result.solution, vec![1., 2., 3.]);
}

#[test]
fn solve_csr_unsorted_row() {
    let solver = triangular_solver();
    // rows of L with column order reversed inside each row
    let rowptr = [0, 1, 3, 5];
    let colval = [0, 1, 0, 2, 1];
    let nzval = [2., 4., 1., 1., 2.];
    let result = solver.solve_csr(&nzval, &colval, &rowptr, &[2., 9., 7.]);
    assert_eq!(result.solution, vec![1., 2., 3.]);
}

#[test]
fn solve_reports_input_errors() {
    let solver = triangular_solver();

    // COO index out of range
    let r = solver.solve_coo(&[0, 5], &[0, 1], &[1., 1.], (2, 2), &[1., 1.]);
    assert_eq!(r.status, -105);
    assert!(r.error.unwrap().is_input_error());

    // CSR column out of range for a square system
    let r = solver.solve_csr(&[1., 1.], &[0, 2], &[0, 1, 2], &[1., 1.]);
    assert_eq!(r.status, -105);

    // CSC with a repeated row in one column
    let r = solver.solve_csc(&[1., 1., 1.], &[0, 0, 1], &[0, 2, 3], &[1., 1.]);
    assert_eq!(r.status, -106);

    // rectangular COO
    let r = solver.solve_coo(&[0], &[0], &[1.], (3, 2), &[1., 1., 1.]);
    assert_eq!(r.status, -202);
    assert_eq!(r.solution.len(), 3);

    // rhs too short
    let r = solver.solve_csc(&[1.], &[0], &[0, 1], &[]);
    assert_eq!(r.status, -203);
}

#[test]
fn solve_forwards_native_status() {
    let solver = triangular_solver();
    // upper triangular entry is ignored by the stub, missing (1,1) pivot is not
    let A = CscMatrix::new(2, 2, vec![0, 1, 2], vec![0, 0], vec![1., 1.]);
    let r = solver.solve(&A, &[1., 1.]);
    assert_eq!(r.status, 1);
    assert_eq!(r.error, Some(SolveError::NativeFailure(1)));
    assert_eq!(r.solution, vec![0., 0.]);
    assert_eq!(r.diagnostics.unwrap().missing_diagonals, 1);
}

#[test]
fn solve_with_residual() {
    let backend = unsafe { ExternSolver::from_raw("lower", lower_triangular_solve) };
    let available = SolverAvailability::new().with_backend(backend);
    let settings = SolverSettingsBuilder::default()
        .direct_solve_method("lower".to_string())
        .compute_residual(true)
        .build()
        .unwrap();
    let solver = SparseSolver::new(&available, settings).unwrap();
    assert_eq!(solver.backend_name(), "lower");

    let r = solver.solve(&test_matrix(), &[2., 9., 7.]);
    assert!(r.residual.unwrap() < 1e-14);
}

#[test]
fn unavailable_backend_is_a_settings_error() {
    let settings = SolverSettingsBuilder::default()
        .direct_solve_method("umfpack".to_string())
        .build()
        .unwrap();
    let err = SparseSolver::new(&SolverAvailability::new(), settings).err();
    assert_eq!(
        err,
        Some(SettingsError::LinearSolverProblem {
            solver: "umfpack".to_string(),
            problem: "not available"
        })
    );
}

// A pure Rust backend, shared by several threads at once
#[derive(Default)]
struct Jacobi {
    calls: AtomicUsize,
}

impl NativeSolver for Jacobi {
    fn name(&self) -> &str {
        "jacobi-diagonal"
    }
    fn solve(&self, sys: &NativeSystem<'_>, x: &mut [f64]) -> i32 {
        self.calls.fetch_add(1, Ordering::Relaxed);
        for (j, xj) in x.iter_mut().enumerate() {
            let p = sys.colptr()[j] as usize;
            *xj = sys.rhs()[j] / sys.values()[p];
        }
        0
    }
}

#[test]
fn concurrent_solves_share_one_solver() {
    let backend = Arc::new(Jacobi::default());
    let mut available = SolverAvailability::new();
    available.register(backend.clone());
    let solver = SparseSolver::new(&available, SolverSettings::default()).unwrap();

    std::thread::scope(|s| {
        for t in 1..=8 {
            let solver = &solver;
            s.spawn(move || {
                let n = 10 * t;
                let mut A = CooMatrix::empty(n, n);
                for i in 0..n {
                    A.push(i, i, t as f64);
                }
                let rhs = vec![t as f64; n];
                let r = solver.solve(&A, &rhs);
                assert!(r.is_success());
                assert_eq!(r.solution, vec![1.0; n]);
            });
        }
    });
    assert_eq!(backend.calls.load(Ordering::Relaxed), 8);
}
