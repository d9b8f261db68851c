//! # Row-stochastic matrices
//!
//! Turning the weights of outgoing edges into transition probabilities.
use log::debug;
use num_traits::Float;

use crate::algorithm::utilities::sum;
use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix};
use crate::data::linear_algebra::vector::cast;

/// Divide every row by its sum, such that each row becomes a probability distribution.
///
/// Rows summing to zero belong to dangling nodes, nodes without outgoing edges. Those rows are
/// replaced by the uniform distribution: from a dangling node, the walk continues anywhere.
///
/// # Arguments
///
/// * `matrix`: Weight matrix, nonnegative. Changed in place.
///
/// # Return value
///
/// The number of dangling rows that were made uniform.
///
/// # Errors
///
/// A matrix without columns has no distribution on its rows. It is left unchanged.
pub fn make_stochastic<F: Float>(matrix: &mut DenseMatrix<F>) -> Result<usize, LinearAlgebraError> {
    if matrix.nr_columns() == 0 {
        return Err(LinearAlgebraError::DivideByZero("make stochastic"));
    }

    let uniform = F::one() / cast(matrix.nr_columns());
    let mut nr_dangling = 0;
    for row in matrix.rows_mut() {
        let total = sum(row);
        if total.is_zero() {
            row.fill(uniform);
            nr_dangling += 1;
        } else {
            for value in row.iter_mut() {
                *value = *value / total;
            }
        }
    }
    debug!("Made {} rows stochastic, {} of them dangling", matrix.nr_rows(), nr_dangling);

    Ok(nr_dangling)
}

/// Whether every row of the matrix sums to one, up to `tolerance`.
pub fn is_row_stochastic<F: Float>(matrix: &DenseMatrix<F>, tolerance: F) -> bool {
    matrix.rows().all(|row| (sum(row) - F::one()).abs() < tolerance)
}
