//! # Matrix implementations
//!
//! The `Matrix` trait defines a set of operations available for all matrix types defined in this
//! module. Transition matrices of small graphs are stored densely; the adjacency lists of larger
//! graphs are stored row by row, sparsely.
use std::fmt;
use std::fmt::Display;
use std::slice::Iter;

use itertools::repeat_n;
use num_traits::Float;

use crate::data::linear_algebra::{SparseTuple, SparseTupleVec};
use crate::data::linear_algebra::error::{DimensionMismatch, LinearAlgebraError, try_with_capacity};
use crate::data::number_types::float::format::significant;

/// Defines basic ways to inspect a matrix, regardless of back-end.
pub trait Matrix {
    /// Get the number of rows in this matrix.
    fn nr_rows(&self) -> usize;
    /// Get the number of columns in this matrix.
    fn nr_columns(&self) -> usize;
    /// Get the number of values stored in this matrix.
    fn size(&self) -> usize;
    /// Whether the matrix has as many rows as columns.
    fn is_square(&self) -> bool {
        self.nr_rows() == self.nr_columns()
    }
    /// Shape as a `(rows, columns)` tuple, used in error messages.
    fn shape(&self) -> (usize, usize) {
        (self.nr_rows(), self.nr_columns())
    }
}

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
///
/// Every row has exactly `nr_columns` values.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Errors
    ///
    /// If not all rows have the same length. A matrix without rows is created with zero columns.
    pub fn from_data(data: Vec<Vec<F>>) -> Result<Self, LinearAlgebraError> {
        let nr_columns = data.first().map_or(0, Vec::len);
        if let Some((i, row)) = data.iter().enumerate().find(|(_, row)| row.len() != nr_columns) {
            let operation = format!("from data, row {}", i);
            return Err(DimensionMismatch::new(operation, (1, nr_columns), (1, row.len())).into());
        }

        Ok(Self { data, nr_columns })
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows());

        &self.data[i]
    }

    /// Get mutable access to the values in row `i` of this matrix.
    pub fn row_mut(&mut self, i: usize) -> &mut [F] {
        debug_assert!(i < self.nr_rows());

        &mut self.data[i]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[F]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Iterate mutably over the rows of this matrix.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [F]> {
        self.data.iter_mut().map(Vec::as_mut_slice)
    }

    /// Get a reference to the value at coordinate (`i`, `j`).
    pub fn get(&self, i: usize, j: usize) -> Option<&F> {
        self.data.get(i).and_then(|row| row.get(j))
    }

    /// Get the data of this matrix.
    pub fn data(self) -> Vec<Vec<F>> {
        self.data
    }
}

impl<F: Copy> DenseMatrix<F> {
    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }
}

impl<F: Float> DenseMatrix<F> {
    /// Create a dense matrix of zero's of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: repeat_n(vec![F::zero(); nr_columns], nr_rows).collect(),
            nr_columns,
        }
    }

    /// Create a dense matrix of zero's, reporting a failed allocation rather than aborting.
    ///
    /// Use this when the dimensions come from outside of the program, such as a file header.
    ///
    /// With memory overcommit, reserving may succeed for a matrix that doesn't fit and the process
    /// is killed once the zeros are written. Callers reading a header should first check that the
    /// declared size is plausible, as the text importer does.
    pub fn try_zeros(nr_rows: usize, nr_columns: usize) -> Result<Self, LinearAlgebraError> {
        let total = nr_rows.checked_mul(nr_columns)
            .ok_or(LinearAlgebraError::AllocationFailure(usize::MAX))?;
        // Reserve everything at once, such that a too large header fails before any row is built
        try_with_capacity::<F>(total)?;

        let mut data = try_with_capacity(nr_rows)?;
        for _ in 0..nr_rows {
            let mut row = try_with_capacity(nr_columns)?;
            row.resize(nr_columns, F::zero());
            data.push(row);
        }

        Ok(Self { data, nr_columns })
    }

    /// Create a dense square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let mut matrix = Self::zeros(len, len);
        for i in 0..len {
            matrix.data[i][i] = F::one();
        }

        matrix
    }

    /// Embed a vector as a matrix with a single row.
    pub fn from_row(values: &[F]) -> Self {
        Self { data: vec![values.to_vec()], nr_columns: values.len() }
    }

    /// Sum of the values in row `i`.
    pub fn row_sum(&self, i: usize) -> F {
        debug_assert!(i < self.nr_rows());

        self.data[i].iter().fold(F::zero(), |total, &value| total + value)
    }
}

impl<F> Matrix for DenseMatrix<F> {
    fn nr_rows(&self) -> usize {
        self.data.len()
    }

    fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    fn size(&self) -> usize {
        self.data.len() * self.nr_columns
    }
}

/// Writes the `Matrix: <m> by <n>` header followed by one labelled line per row.
impl<F: Float> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Matrix: {} by {}", self.nr_rows(), self.nr_columns)?;
        for (i, row) in self.data.iter().enumerate() {
            write!(f, "row {}: ", i)?;
            for &value in row {
                write!(f, "{} ", significant(value, 5))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Row-major sparse storage: for every row the (`column`, `value`) tuples of the nonzero values,
/// sorted by column. Indices start at `0`.
///
/// This is the adjacency list representation of a graph, the values of an unweighted graph are
/// all one.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseMatrix<F> {
    rows: Vec<SparseTupleVec<F>>,
    nr_columns: usize,
}

impl<F> SparseMatrix<F> {
    /// Create a new instance, sorting each row by column.
    ///
    /// # Arguments
    ///
    /// * `rows`: For each row, the column indices and values, in any order.
    /// * `nr_columns`: Number of columns, all column indices should be smaller.
    ///
    /// # Errors
    ///
    /// If a column index is not smaller than `nr_columns`, or if a row lists a column twice.
    pub fn new(mut rows: Vec<SparseTupleVec<F>>, nr_columns: usize) -> Result<Self, LinearAlgebraError> {
        for (i, row) in rows.iter_mut().enumerate() {
            row.sort_unstable_by_key(|&(j, _)| j);

            if let Some(pair) = row.windows(2).find(|pair| pair[0].0 == pair[1].0) {
                return Err(LinearAlgebraError::DuplicateIndex { row: i, column: pair[0].0 });
            }
            if let Some(&(j, _)) = row.last().filter(|&&(j, _)| j >= nr_columns) {
                return Err(LinearAlgebraError::IndexOutOfRange { row: i, column: j, nr_columns });
            }
        }

        Ok(Self { rows, nr_columns })
    }

    /// Get all (`column`, `value`) tuples of row `i`.
    pub fn row(&self, i: usize) -> &[SparseTuple<F>] {
        debug_assert!(i < self.rows.len());

        &self.rows[i]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> Iter<'_, SparseTupleVec<F>> {
        self.rows.iter()
    }

    /// Number of values stored in row `i`, the out-degree of node `i` for an adjacency matrix.
    pub fn nnz_in_row(&self, i: usize) -> usize {
        self.rows[i].len()
    }
}

impl<F: Float> SparseMatrix<F> {
    /// Store the nonzero values of a dense matrix.
    pub fn from_dense(matrix: &DenseMatrix<F>) -> Self {
        let rows = matrix.rows()
            .map(|row| row.iter()
                .enumerate()
                .filter(|&(_, value)| !value.is_zero())
                .map(|(j, &value)| (j, value))
                .collect())
            .collect();

        Self { rows, nr_columns: matrix.nr_columns() }
    }

    /// Create a dense copy with explicit zeros.
    pub fn to_dense(&self) -> DenseMatrix<F> {
        let mut dense = DenseMatrix::zeros(self.rows.len(), self.nr_columns);
        for (i, row) in self.rows.iter().enumerate() {
            for &(j, value) in row {
                dense.set_value(i, j, value);
            }
        }

        dense
    }
}

impl<F> Matrix for SparseMatrix<F> {
    fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the number of nonzero values in this matrix.
    fn size(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Writes the `SparseMatrix: <m> by <n>` header and for every row the `column:value` pairs,
/// closed by `-1`.
///
/// Because values are written, the result can only be read back for 0/1 matrices after removing
/// the values.
impl<F: Float> Display for SparseMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "SparseMatrix: {} by {}", self.rows.len(), self.nr_columns)?;
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "row {}: ", i)?;
            for &(j, value) in row {
                write!(f, "{}:{} ", j, significant(value, 5))?;
            }
            writeln!(f, "-1")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::data::linear_algebra::error::{DimensionMismatch, LinearAlgebraError};
    use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix, SparseMatrix};

    fn test_matrix() -> DenseMatrix<f64> {
        DenseMatrix::from_data(vec![
            vec![1_f64, 2_f64, 0_f64],
            vec![0_f64, 5_f64, 6_f64],
        ]).unwrap()
    }

    #[test]
    fn from_data() {
        let m = test_matrix();

        assert_eq!(m.shape(), (2, 3));
        assert_abs_diff_eq!(m.get_value(0, 0), 1_f64);
        assert_abs_diff_eq!(m.get_value(1, 2), 6_f64);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.column(1), vec![2_f64, 5_f64]);
        assert_abs_diff_eq!(m.row_sum(1), 11_f64);

        let ragged = DenseMatrix::from_data(vec![vec![1_f64, 2_f64], vec![3_f64]]);
        assert_eq!(
            ragged,
            Err(LinearAlgebraError::DimensionMismatch(DimensionMismatch::new("from data, row 1", (1, 2), (1, 1)))),
        );
        assert_eq!(
            ragged.unwrap_err().to_string(),
            "from data, row 1: incompatible dimensions 1 by 2 and 1 by 1",
        );

        let empty = DenseMatrix::<f64>::from_data(vec![]).unwrap();
        assert_eq!(empty.shape(), (0, 0));
    }

    #[test]
    fn zeros() {
        let (rows, columns) = (299, 482);
        let m = DenseMatrix::<f64>::zeros(rows, columns);

        assert_abs_diff_eq!(m.get_value(0, 0), 0_f64);
        assert_abs_diff_eq!(m.get_value(rows - 1, columns - 1), 0_f64);
        assert_eq!(m.size(), rows * columns);
        assert_eq!(DenseMatrix::try_zeros(rows, columns), Ok(m));

        assert!(matches!(
            DenseMatrix::<f64>::try_zeros(usize::MAX, 2),
            Err(LinearAlgebraError::AllocationFailure(_)),
        ));
        assert!(matches!(
            DenseMatrix::<f64>::try_zeros(1 << 62, 1),
            Err(LinearAlgebraError::AllocationFailure(_)),
        ));
    }

    #[test]
    fn identity() {
        let m = DenseMatrix::<f64>::identity(3);

        assert!(m.is_square());
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(m.get_value(i, j), if i == j { 1_f64 } else { 0_f64 });
            }
        }
    }

    #[test]
    fn set_value() {
        let mut m = test_matrix();
        m.set_value(1, 0, 3.5);
        m.row_mut(0)[2] = 7_f64;

        assert_eq!(m.data(), vec![vec![1_f64, 2_f64, 7_f64], vec![3.5, 5_f64, 6_f64]]);
    }

    #[test]
    fn display() {
        let m = DenseMatrix::from_data(vec![vec![0.25, 0.75], vec![1_f64 / 3_f64, 0_f64]]).unwrap();
        assert_eq!(m.to_string(), "Matrix: 2 by 2\nrow 0: 0.25 0.75 \nrow 1: 0.33333 0 \n");

        let v = DenseMatrix::from_row(&[1_f64, 2_f64]);
        assert_eq!(v.to_string(), "Matrix: 1 by 2\nrow 0: 1 2 \n");
    }

    #[test]
    fn sparse() {
        let m = SparseMatrix::new(vec![vec![(1, 1_f64)], vec![], vec![(2, 1_f64), (0, 1_f64)]], 3).unwrap();

        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m.size(), 3);
        assert_eq!(m.nnz_in_row(1), 0);
        assert_eq!(m.row(2), &[(0, 1_f64), (2, 1_f64)]);

        let dense = m.to_dense();
        assert_eq!(dense.data(), vec![
            vec![0_f64, 1_f64, 0_f64],
            vec![0_f64, 0_f64, 0_f64],
            vec![1_f64, 0_f64, 1_f64],
        ]);
        assert_eq!(SparseMatrix::from_dense(&m.to_dense()), m);
    }

    #[test]
    fn sparse_invalid() {
        assert_eq!(
            SparseMatrix::new(vec![vec![(5, 1_f64)]], 1),
            Err(LinearAlgebraError::IndexOutOfRange { row: 0, column: 5, nr_columns: 1 }),
        );
        assert_eq!(
            SparseMatrix::new(vec![vec![(0, 1_f64)], vec![(1, 1_f64), (0, 1_f64), (1, 2_f64)]], 2),
            Err(LinearAlgebraError::DuplicateIndex { row: 1, column: 1 }),
        );
        assert!(SparseMatrix::<f64>::new(vec![vec![], vec![]], 0).is_ok());
    }

    #[test]
    fn sparse_display() {
        let m = SparseMatrix::new(vec![vec![(1, 1_f64)], vec![]], 2).unwrap();

        assert_eq!(m.to_string(), "SparseMatrix: 2 by 2\nrow 0: 1:1 -1\nrow 1: -1\n");
    }
}
