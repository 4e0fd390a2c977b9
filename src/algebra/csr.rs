use crate::algebra::{CscMatrix, CsrMatrix, FloatT, ShapedMatrix, SparseFormatError};
use crate::convert;

impl<T> CsrMatrix<T>
where
    T: FloatT,
{
    /// `CsrMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure, in the same way as [`CscMatrix::new`].
    pub fn new(m: usize, n: usize, rowptr: Vec<usize>, colval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(colval.len(), nzval.len());
        assert_eq!(rowptr.len(), m + 1);
        assert_eq!(rowptr[m], colval.len());
        CsrMatrix {
            m,
            n,
            rowptr,
            colval,
            nzval,
        }
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.rowptr[self.m]
    }

    /// Canonical CSC copy of the matrix, with duplicates summed.
    pub fn to_csc(&self) -> Result<CscMatrix<T>, SparseFormatError> {
        convert::csr_to_csc(&self.nzval, &self.colval, &self.rowptr, Some(self.n))
    }
}

impl<T> ShapedMatrix for CsrMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}
