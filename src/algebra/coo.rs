use crate::algebra::{CooMatrix, CscMatrix, FloatT, ShapedMatrix, SparseFormatError};
use crate::convert;

impl<T> CooMatrix<T>
where
    T: FloatT,
{
    /// `CooMatrix` constructor.
    ///
    /// # Panics
    /// Panics if the three entry arrays differ in length.   Index bounds
    /// are not checked here, but are checked during conversion.
    pub fn new(m: usize, n: usize, rowval: Vec<usize>, colval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colval.len(), nzval.len());
        CooMatrix {
            m,
            n,
            rowval,
            colval,
            nzval,
        }
    }

    /// empty m x n matrix with no stored entries
    pub fn empty(m: usize, n: usize) -> Self {
        CooMatrix::new(m, n, Vec::new(), Vec::new(), Vec::new())
    }

    /// number of stored entries, including duplicates
    pub fn nnz(&self) -> usize {
        self.nzval.len()
    }

    /// Appends an entry.   Entries at the same position are summed
    /// when converted.
    pub fn push(&mut self, row: usize, col: usize, val: T) {
        self.rowval.push(row);
        self.colval.push(col);
        self.nzval.push(val);
    }

    /// Canonical CSC copy of the matrix, with duplicates summed.
    pub fn to_csc(&self) -> Result<CscMatrix<T>, SparseFormatError> {
        convert::coo_to_csc(&self.rowval, &self.colval, &self.nzval, (self.m, self.n))
    }
}

impl<T> ShapedMatrix for CooMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}
