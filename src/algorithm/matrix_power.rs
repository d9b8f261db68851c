//! # Matrix powers
//!
//! Instead of propagating a vector, the transition matrix can be multiplied with itself: row `i`
//! of `H^k` is the distribution of a walk of `k` steps that started in node `i`. A rank vector
//! embedded as a matrix with a single row gives the same sequence as vector propagation.
use num_traits::Float;

use crate::data::linear_algebra::error::DimensionMismatch;
use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix};

/// Replace `left` by the product `left * right`.
///
/// Row `i` of the product only depends on row `i` of `left`, so a single row sized buffer is
/// enough to never read a value that was already overwritten. Values are accumulated in the
/// floating point type.
///
/// # Arguments
///
/// * `left`: Matrix of `p` rows and `n` columns, overwritten with the product.
/// * `right`: Square matrix of size `n`, such that the product has the shape of `left`.
///
/// # Errors
///
/// If `right` is not square or doesn't have as many rows as `left` has columns. Nothing is
/// changed in that case.
pub fn iterate_matrix_matrix<F: Float>(
    left: &mut DenseMatrix<F>,
    right: &DenseMatrix<F>,
) -> Result<(), DimensionMismatch> {
    if !right.is_square() || left.nr_columns() != right.nr_rows() {
        return Err(DimensionMismatch::new("multiply", left.shape(), right.shape()));
    }

    let mut buffer = vec![F::zero(); right.nr_columns()];
    for row in left.rows_mut() {
        buffer.fill(F::zero());
        for (&weight, right_row) in row.iter().zip(right.rows()) {
            for (total, &value) in buffer.iter_mut().zip(right_row) {
                *total = *total + weight * value;
            }
        }
        row.copy_from_slice(&buffer);
    }

    Ok(())
}

/// Compute `matrix^exponent` by repeated multiplication.
///
/// # Arguments
///
/// * `matrix`: Square matrix.
/// * `exponent`: Number of factors, `0` gives the identity.
///
/// # Errors
///
/// If the matrix is not square.
pub fn matrix_power<F: Float>(
    matrix: &DenseMatrix<F>,
    exponent: usize,
) -> Result<DenseMatrix<F>, DimensionMismatch> {
    if !matrix.is_square() {
        return Err(DimensionMismatch::new("power", matrix.shape(), matrix.shape()));
    }

    let mut power = DenseMatrix::identity(matrix.nr_rows());
    for _ in 0..exponent {
        iterate_matrix_matrix(&mut power, matrix)?;
    }

    Ok(power)
}
