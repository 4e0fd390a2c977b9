#![allow(non_snake_case)]

use crate::algebra::{CooMatrix, CscMatrix, CsrMatrix, FloatT, ShapedMatrix, SparseFormatError};
use crate::convert;
use crate::validate;

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// `CscMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__
    /// ensure that rows indices are all in bounds or that data is arranged
    /// such that entries within each column appear in order of increasing
    /// row index.   Responsibility for ensuring these conditions hold
    /// is left to the caller.  See [`check_format`](Self::check_format).
    ///
    pub fn new(m: usize, n: usize, colptr: Vec<usize>, rowval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// Fallible `CscMatrix` constructor.
    ///
    /// Runs the full structural validation of [`check_format`](Self::check_format)
    /// on the supplied arrays and takes ownership of them on success.
    pub fn try_new(
        m: usize,
        n: usize,
        colptr: Vec<usize>,
        rowval: Vec<usize>,
        nzval: Vec<T>,
    ) -> Result<Self, SparseFormatError> {
        validate::validate_csc(&nzval, &rowval, &colptr, m, n)?;
        Ok(CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        })
    }

    /// allocate space for a sparse matrix with `nnz` elements
    ///
    /// To make an m x n matrix of zeros, use
    /// ```no_run
    /// use sparsedirect::algebra::CscMatrix;
    /// let m = 3;
    /// let n = 4;
    /// let A : CscMatrix<f64> = CscMatrix::spalloc(m,n,0);
    /// ```

    pub fn spalloc(m: usize, n: usize, nnz: usize) -> Self {
        let mut colptr = vec![0; n + 1];
        let rowval = vec![0; nnz];
        let nzval = vec![T::zero(); nnz];
        colptr[n] = nnz;

        CscMatrix::new(m, n, colptr, rowval, nzval)
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let colptr = (0usize..=n).collect();
        let rowval = (0usize..n).collect();
        let nzval = vec![T::one(); n];

        CscMatrix::new(n, n, colptr, rowval, nzval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// Check that matrix data is correctly formatted.
    ///
    /// This is the canonical-form check required before the matrix can be
    /// handed to a native solver.  See [`validate_csc`](crate::validate::validate_csc).
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        validate::validate_csc(&self.nzval, &self.rowval, &self.colptr, self.m, self.n)
    }

    /// Returns the value at the given (row,col) index as an Option.
    /// Returns None if the given index is not a structural nonzero.
    ///
    /// # Panics
    /// Panics if the given index is out of bounds.
    pub fn get_entry(&self, idx: (usize, usize)) -> Option<T> {
        let (row, col) = idx;
        assert!(row < self.nrows() && col < self.ncols());

        let first = self.colptr[col];
        let last = self.colptr[col + 1];
        let rows_in_this_column = &self.rowval[first..last];
        match rows_in_this_column.binary_search(&row) {
            Ok(idx) => Some(self.nzval[first + idx]),
            Err(_) => None,
        }
    }

    /// Dense copy of the matrix in column major order.
    ///
    /// Entry `(i,j)` lands at position `i + j*m`.   Repeated structural
    /// entries are summed, so this also densifies non-canonical data.
    pub fn to_dense(&self) -> Vec<T> {
        let mut dense = vec![T::zero(); self.m * self.n];
        for col in 0..self.n {
            for ptr in self.colptr[col]..self.colptr[col + 1] {
                dense[self.rowval[ptr] + col * self.m] += self.nzval[ptr];
            }
        }
        dense
    }

    /// Expand to coordinate form.   Entries appear in column major order.
    pub fn to_coo(&self) -> CooMatrix<T> {
        convert::csc_to_coo(self)
    }

    /// Compressed sparse row copy of the matrix.
    pub fn to_csr(&self) -> Result<CsrMatrix<T>, SparseFormatError> {
        convert::csc_to_csr(self)
    }
}

impl<T> ShapedMatrix for CscMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

#[test]
fn test_csc_get_entry() {
    // A =
    //[ ⋅   4.0    ⋅    ⋅   12.0]
    //[1.0  5.0    ⋅    ⋅     ⋅ ]
    //[ ⋅   6.0    ⋅    ⋅   13.0]
    //[2.0  7.0  10.0   ⋅     ⋅ ]
    //[ ⋅   8.0  11.0   ⋅   14.0]
    //[3.0  9.0    ⋅    ⋅     ⋅ ]

    let A = CscMatrix::new(
        6,                                                                 // m
        5,                                                                 // n
        vec![0, 3, 9, 11, 11, 14],                                         // colptr
        vec![1, 3, 5, 0, 1, 2, 3, 4, 5, 3, 4, 0, 2, 4],                    // rowval
        vec![1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 13., 14.], // nzval
    );

    assert_eq!(A.get_entry((1, 0)).unwrap(), 1.);
    assert_eq!(A.get_entry((5, 0)).unwrap(), 3.);
    assert_eq!(A.get_entry((0, 1)).unwrap(), 4.);
    assert_eq!(A.get_entry((3, 1)).unwrap(), 7.);
    assert_eq!(A.get_entry((5, 1)).unwrap(), 9.);
    assert_eq!(A.get_entry((3, 2)).unwrap(), 10.);
    assert_eq!(A.get_entry((4, 2)).unwrap(), 11.);
    assert_eq!(A.get_entry((4, 4)).unwrap(), 14.);

    assert!(A.get_entry((0, 0)).is_none());
    assert!(A.get_entry((4, 0)).is_none());
    assert!(A.get_entry((2, 2)).is_none());
    assert!(A.get_entry((1, 3)).is_none());
    assert!(A.get_entry((2, 3)).is_none());
    assert!(A.get_entry((4, 3)).is_none());
    assert!(A.get_entry((3, 4)).is_none());
}

#[test]
fn test_csc_try_new() {
    let A = CscMatrix::try_new(2, 2, vec![0, 1, 2], vec![0, 1], vec![1., 2.]);
    assert!(A.is_ok());

    // row index 2 is out of bounds
    let A = CscMatrix::try_new(2, 2, vec![0, 1, 2], vec![0, 2], vec![1., 2.]);
    assert!(matches!(
        A,
        Err(SparseFormatError::IndexOutOfBounds { index: 2, .. })
    ));
}
