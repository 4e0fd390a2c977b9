#![allow(non_snake_case)]
use sparsedirect::{algebra::*, convert::*};

// linear congruential generator for reproducible test matrices
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

fn random_coo(seed: u64, m: usize, n: usize, nnz: usize) -> CooMatrix<f64> {
    let mut rng = Lcg(seed);
    let mut A = CooMatrix::empty(m, n);
    for _ in 0..nnz {
        let r = rng.next(m);
        let c = rng.next(n);
        let v = (rng.next(2000) as f64 - 1000.) / 7.;
        A.push(r, c, v);
    }
    A
}

fn assert_canonical(A: &CscMatrix<f64>) {
    assert_eq!(A.colptr[0], 0);
    assert_eq!(*A.colptr.last().unwrap(), A.nzval.len());
    assert!(A.colptr.windows(2).all(|w| w[0] <= w[1]));
    assert!(A.check_format().is_ok());
}

#[test]
fn coo_scenario_column_sorted() {
    let rows = [0, 3, 1, 0, 2, 1, 3];
    let cols = [0, 0, 1, 2, 2, 3, 3];
    let values = [1., 6., 2., 3., 4., 5., 7.];
    let A = coo_to_csc(&rows, &cols, &values, (4, 4)).unwrap();

    assert_eq!(A.colptr, vec![0, 2, 3, 5, 7]);
    assert_canonical(&A);

    // compare against a dense build
    let mut dense = vec![0.; 16];
    for k in 0..values.len() {
        dense[rows[k] + 4 * cols[k]] += values[k];
    }
    assert_eq!(A.to_dense(), dense);
}

#[test]
fn coo_scenario_duplicates_summed() {
    let A = coo_to_csc(&[0, 0], &[0, 0], &[2.0, 3.0], (1, 1)).unwrap();
    assert_eq!(A.nnz(), 1);
    assert_eq!(A.get_entry((0, 0)), Some(5.0));
}

#[test]
fn coo_random_matches_dense_sum() {
    for seed in 0..20 {
        let B = random_coo(seed, 7, 5, 40);
        let A = B.to_csc().unwrap();
        assert_canonical(&A);
        assert!(A.nnz() <= B.nnz());

        let mut dense = vec![0.; 35];
        for k in 0..B.nnz() {
            dense[B.rowval[k] + 7 * B.colval[k]] += B.nzval[k];
        }
        let diff = dense.norm_inf_diff(&A.to_dense());
        assert!(diff < 1e-12, "seed {seed}: {diff}");
    }
}

#[test]
fn coo_result_independent_of_entry_order() {
    let B = random_coo(42, 3, 3, 60);
    let A = B.to_csc().unwrap();

    // reverse, then rotate, the entry order
    let mut rows = B.rowval.clone();
    let mut cols = B.colval.clone();
    let mut vals = B.nzval.clone();
    for _ in 0..2 {
        rows.reverse();
        cols.reverse();
        vals.reverse();
        let C = coo_to_csc(&rows, &cols, &vals, (3, 3)).unwrap();
        assert_eq!(C.colptr, A.colptr);
        assert_eq!(C.rowval, A.rowval);
        let same_bits = C
            .nzval
            .iter()
            .zip(&A.nzval)
            .all(|(x, y)| x.to_bits() == y.to_bits());
        assert!(same_bits);

        rows.rotate_left(17);
        cols.rotate_left(17);
        vals.rotate_left(17);
    }
}

#[test]
fn csc_coo_csc_is_identity() {
    let A = random_coo(7, 6, 6, 25).to_csc().unwrap();
    let B = A.to_coo();
    let C = coo_to_csc(&B.rowval, &B.colval, &B.nzval, (B.m, B.n)).unwrap();
    assert_eq!(A, C);
}

#[test]
fn csr_to_csc_transpose_correctness() {
    // dense 3 x 4, row major
    let dense = [
        [0., 2., 0., 1.], //
        [3., 0., 0., 0.], //
        [0., 4., 5., 6.], //
    ];

    // CSR of the dense matrix, columns within each row reversed
    let mut rowptr = vec![0];
    let mut colval = vec![];
    let mut nzval = vec![];
    for row in dense.iter() {
        for (j, &v) in row.iter().enumerate().rev() {
            if v != 0. {
                colval.push(j);
                nzval.push(v);
            }
        }
        rowptr.push(colval.len());
    }

    let A = csr_to_csc(&nzval, &colval, &rowptr, Some(4)).unwrap();
    assert_canonical(&A);
    assert_eq!((A.m, A.n), (3, 4));

    let Ad = A.to_dense();
    for i in 0..3 {
        for j in 0..4 {
            assert_eq!(Ad[i + 3 * j], dense[i][j]);
        }
    }
}

#[test]
fn csr_empty_matrix() {
    let A = csr_to_csc::<f64>(&[], &[], &[0, 0, 0, 0], Some(3)).unwrap();
    assert_eq!(A.colptr, vec![0; 4]);
    assert!(A.rowval.is_empty() && A.nzval.is_empty());
}

#[test]
fn csr_round_trip_through_csc() {
    let A = random_coo(99, 5, 8, 30).to_csc().unwrap();
    let B = A.to_csr().unwrap();
    assert_eq!(B.nnz(), A.nnz());
    assert_eq!(B.to_csc().unwrap(), A);
}

#[test]
fn f32_conversion() {
    let A = coo_to_csc::<f32>(&[1, 0, 1], &[0, 0, 0], &[1.5, 2.0, 0.5], (2, 1)).unwrap();
    assert_eq!(A.nzval, vec![2.0f32, 2.0]);
}
