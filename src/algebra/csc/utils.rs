//---------------------------------------------------------
// low-level internal utilities for counting / filling entries
// in CSC matrices assembled from unordered data.
//
// Assembly always follows the same four steps:
//   1. colcount_* : place per-column counts in colptr[0..n]
//   2. colcount_to_colptr : exclusive cumsum, colptr[j] = first slot
//   3. fill_entry : scatter, using colptr[j] as next free slot
//   4. backshift_colptrs : restore colptr to column starts
//---------------------------------------------------------

use crate::algebra::{CscMatrix, FloatT};

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    // increment self.colptr by one for every column index
    // appearing in `cols`.
    pub(crate) fn colcount_indices(&mut self, cols: &[usize]) {
        for &col in cols {
            self.colptr[col] += 1;
        }
    }

    pub(crate) fn colcount_to_colptr(&mut self) {
        let mut currentptr = 0;
        for p in &mut self.colptr {
            let count = *p;
            *p = currentptr;
            currentptr += count;
        }
    }

    // place a single entry using the self.colptr as
    // the indicator of the next fill location in each column.
    #[inline]
    pub(crate) fn fill_entry(&mut self, row: usize, col: usize, val: T) {
        let dest = self.colptr[col];
        self.rowval[dest] = row;
        self.nzval[dest] = val;
        self.colptr[col] += 1;
    }

    pub(crate) fn backshift_colptrs(&mut self) {
        self.colptr.rotate_right(1);
        self.colptr[0] = 0;
    }

    // Insertion sort of the rows within every column.   Entries sharing
    // a row index are ordered by value under IEEE total order, which
    // fixes the order in which duplicates are later summed independently
    // of the input ordering.   Columns are expected to be short.
    pub(crate) fn sort_columns(&mut self) {
        for col in 0..self.n {
            let rng = self.colptr[col]..self.colptr[col + 1];
            if rng.len() > 1 {
                insertion_sort_by_row(&mut self.rowval[rng.clone()], &mut self.nzval[rng]);
            }
        }
    }

    // Sums entries with equal row index within each column and
    // compacts the storage.  Requires rows sorted within columns.
    pub(crate) fn coalesce_duplicates(&mut self) {
        let mut dest = 0;
        let mut start = self.colptr[0];

        for col in 0..self.n {
            let stop = self.colptr[col + 1];
            let mut ptr = start;

            while ptr < stop {
                let row = self.rowval[ptr];
                let mut sum = self.nzval[ptr];
                ptr += 1;
                while ptr < stop && self.rowval[ptr] == row {
                    sum += self.nzval[ptr];
                    ptr += 1;
                }
                self.rowval[dest] = row;
                self.nzval[dest] = sum;
                dest += 1;
            }
            // colptr[col+1] is overwritten only after it has been read
            start = stop;
            self.colptr[col + 1] = dest;
        }
        self.rowval.truncate(dest);
        self.nzval.truncate(dest);
    }
}

fn insertion_sort_by_row<T: FloatT>(rows: &mut [usize], vals: &mut [T]) {
    for i in 1..rows.len() {
        let key_row = rows[i];
        let key_val = vals[i];

        // shift larger (row, value) pairs one place to the right
        let mut k = i;
        while k > 0
            && (rows[k - 1] > key_row
                || (rows[k - 1] == key_row && vals[k - 1].total_cmp(&key_val).is_gt()))
        {
            rows[k] = rows[k - 1];
            vals[k] = vals[k - 1];
            k -= 1;
        }
        rows[k] = key_row;
        vals[k] = key_val;
    }
}

#[test]
fn test_insertion_sort_rows_then_values() {
    let mut rows = vec![3, 1, 3, 0, 1];
    let mut vals = vec![3., 5., 1., 4., 2.];
    insertion_sort_by_row(&mut rows, &mut vals);
    assert_eq!(rows, vec![0, 1, 1, 3, 3]);
    assert_eq!(vals, vec![4., 2., 5., 1., 3.]);
}

#[test]
fn test_insertion_sort_total_order() {
    // NaN sorts above every number, -0.0 below 0.0
    let orderings = [
        [f64::NAN, 1.0, -0.0, 0.0],
        [0.0, f64::NAN, -0.0, 1.0],
        [1.0, 0.0, -0.0, f64::NAN],
    ];
    for vals in orderings {
        let mut rows = vec![2; 4];
        let mut vals = vals.to_vec();
        insertion_sort_by_row(&mut rows, &mut vals);
        let bits: Vec<u64> = vals.iter().map(|v| v.to_bits()).collect();
        let expected: Vec<u64> = [-0.0, 0.0, 1.0, f64::NAN].iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits, expected);
    }
}

#[test]
fn test_coalesce_duplicates() {
    // column 0 : rows [0,0,2], column 1 : empty, column 2 : rows [1,1]
    let mut A = CscMatrix::new(
        3,
        3,
        vec![0, 3, 3, 5],
        vec![0, 0, 2, 1, 1],
        vec![1., 2., 3., 4., 5.],
    );
    A.coalesce_duplicates();
    assert_eq!(A.colptr, vec![0, 2, 2, 3]);
    assert_eq!(A.rowval, vec![0, 2, 1]);
    assert_eq!(A.nzval, vec![3., 3., 9.]);
}
