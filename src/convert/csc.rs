use super::csr_to_csc;
use crate::algebra::{CooMatrix, CscMatrix, CsrMatrix, FloatT, SparseFormatError};

/// Expand a CSC matrix into coordinate form, in column major order.
///
/// Stored entries are copied one for one, so the output of a canonical
/// matrix converts back to the identical CSC arrays.
pub fn csc_to_coo<T: FloatT>(A: &CscMatrix<T>) -> CooMatrix<T> {
    let nnz = A.nzval.len();
    let mut colval = Vec::with_capacity(nnz);
    for col in 0..A.n {
        let count = A.colptr[col + 1] - A.colptr[col];
        colval.extend(std::iter::repeat(col).take(count));
    }
    CooMatrix {
        m: A.m,
        n: A.n,
        rowval: A.rowval.clone(),
        colval,
        nzval: A.nzval.clone(),
    }
}

/// Compressed sparse row copy of a CSC matrix.
///
/// The CSC arrays are read as the CSR arrays of the transpose, so the
/// conversion is the same bucket sort used by [`csr_to_csc`], producing
/// rows with strictly increasing column indices.
pub fn csc_to_csr<T: FloatT>(A: &CscMatrix<T>) -> Result<CsrMatrix<T>, SparseFormatError> {
    let At = csr_to_csc(&A.nzval, &A.rowval, &A.colptr, Some(A.m))?;
    Ok(CsrMatrix {
        m: A.m,
        n: A.n,
        rowptr: At.colptr,
        colval: At.rowval,
        nzval: At.nzval,
    })
}
