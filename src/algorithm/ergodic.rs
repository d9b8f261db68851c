//! # Damping
//!
//! A random walk on a row-stochastic matrix may get stuck in a part of the graph, or cycle
//! through it periodically. Teleporting to a uniformly random node with probability `1 - alpha`
//! at every step makes every entry of the transition matrix positive. By the Perron-Frobenius
//! theorem, the walk then has a unique stationary distribution that power iteration converges to.
use num_traits::Float;

use crate::data::linear_algebra::error::{DimensionMismatch, LinearAlgebraError};
use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix};
use crate::data::linear_algebra::vector::cast;

/// Check that a damping factor is a probability.
///
/// # Errors
///
/// If `alpha` is not a finite number in `[0, 1]`.
pub fn check_damping<F: Float>(alpha: F) -> Result<(), LinearAlgebraError> {
    if alpha >= F::zero() && alpha <= F::one() {
        Ok(())
    } else {
        Err(LinearAlgebraError::InvalidDamping(alpha.to_f64().unwrap_or(f64::NAN)))
    }
}

/// Blend a row-stochastic matrix with the uniform transition matrix.
///
/// Every entry becomes `alpha * M[i][j] + (1 - alpha) / m`. Each entry only depends on its own
/// previous value, so the order in which they are visited doesn't matter.
///
/// # Arguments
///
/// * `matrix`: Square, row-stochastic matrix. Changed in place, stays row-stochastic.
/// * `alpha`: Probability of following an edge rather than teleporting.
///
/// # Errors
///
/// If the matrix is not square, has no rows or if `alpha` is not a probability. The matrix is
/// left unchanged.
pub fn make_ergodic<F: Float>(matrix: &mut DenseMatrix<F>, alpha: F) -> Result<(), LinearAlgebraError> {
    check_damping(alpha)?;
    if !matrix.is_square() {
        let transposed = (matrix.nr_columns(), matrix.nr_rows());
        return Err(DimensionMismatch::new("make ergodic", matrix.shape(), transposed).into());
    }
    if matrix.nr_rows() == 0 {
        return Err(LinearAlgebraError::DivideByZero("make ergodic"));
    }

    let teleport = (F::one() - alpha) / cast(matrix.nr_rows());
    for row in matrix.rows_mut() {
        for value in row.iter_mut() {
            *value = alpha * *value + teleport;
        }
    }

    Ok(())
}
