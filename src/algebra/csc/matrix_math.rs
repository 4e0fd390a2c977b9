#![allow(non_snake_case)]
use crate::algebra::*;
use std::iter::zip;

impl<T: FloatT> MatrixVectorMultiply for CscMatrix<T> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) {
        _csc_axpby_N(self, y, x, a, b);
    }
}

// sparse matrix-vector multiply, no transpose
fn _csc_axpby_N<T: FloatT>(A: &CscMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    //first do the b*y part
    if b == T::zero() {
        y.fill(T::zero());
    } else if b == T::one() {
    } else if b == -T::one() {
        y.iter_mut().for_each(|v| *v = -*v);
    } else {
        y.iter_mut().for_each(|v| *v *= b);
    }

    // if a is zero, we're done
    if a == T::zero() {
        return;
    }

    assert_eq!(A.nzval.len(), A.nnz());
    assert_eq!(x.len(), A.n);

    //y += A*x
    for (j, xj) in x.iter().enumerate() {
        let rng = A.colptr[j]..A.colptr[j + 1];
        for (&Aij, &i) in zip(&A.nzval[rng.clone()], &A.rowval[rng]) {
            y[i] += a * Aij * *xj;
        }
    }
}

#[test]
fn test_csc_gemv() {
    // A =
    //[-1.0  -17.0  6.0  10.0]
    //[ 3.0     ⋅   7.0    ⋅ ]
    //[  ⋅    -4.0   ⋅   -5.0]
    let A = CscMatrix::new(
        3,
        4,
        vec![0, 2, 4, 6, 8],
        vec![0, 1, 0, 2, 0, 1, 0, 2],
        vec![-1., 3., -17., -4., 6., 7., 10., -5.],
    );
    let x = vec![1., 2., 3., 4.];
    let mut y = vec![1., 1., 1.];
    A.gemv(&mut y, &x, 1.0, -1.0);
    // A*x = [23, 24, -28]
    assert_eq!(y, vec![22., 23., -29.]);
}
