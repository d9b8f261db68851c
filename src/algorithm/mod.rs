//! # Algorithms
//!
//! A raw weight matrix becomes a transition matrix in two steps: `stochastic` makes every row a
//! probability distribution and `ergodic` blends it with uniform teleportation. The rank vector is
//! then propagated through the transition matrix by `power_iteration`, or the transition matrix
//! is multiplied with itself by `matrix_power`. `rank` drives the whole pipeline.
use num_traits::Float;

use crate::data::linear_algebra::error::DimensionMismatch;
use crate::data::linear_algebra::vector::DenseVector;

pub mod ergodic;
pub mod matrix_power;
pub mod power_iteration;
pub mod rank;
pub mod sparse;
pub mod stochastic;
pub mod utilities;

/// A transition matrix through which a rank vector can be propagated.
///
/// Implementations differ in how the matrix is stored: a dense, damped matrix, or a sparse
/// adjacency list for which the damping is applied on the fly.
pub trait Transition<F: Float> {
    /// Number of nodes of the graph, the dimension of the rank vectors.
    fn nr_nodes(&self) -> usize;

    /// Compute a single step of the power method without checking dimensions.
    ///
    /// # Arguments
    ///
    /// * `rank`: Current rank vector, read only.
    /// * `next`: Buffer of the same length, every value is overwritten with
    /// `sum_j rank[j] * H[j][i]`.
    fn propagate_into(&self, rank: &[F], next: &mut [F]);

    /// Verify that a rank vector can be propagated through this matrix.
    ///
    /// # Errors
    ///
    /// If the vector doesn't have one value per node.
    fn check_dimension(&self, rank: &DenseVector<F>) -> Result<(), DimensionMismatch> {
        if rank.len() == self.nr_nodes() {
            Ok(())
        } else {
            Err(DimensionMismatch::new(
                "propagate",
                (1, rank.len()),
                (self.nr_nodes(), self.nr_nodes()),
            ))
        }
    }

    /// Replace `rank` by `rank * H`, a single step of the power method.
    ///
    /// The new vector is computed entirely from the old one before anything is overwritten.
    ///
    /// # Errors
    ///
    /// If the vector doesn't have one value per node. The vector is left untouched.
    fn propagate(&self, rank: &mut DenseVector<F>) -> Result<(), DimensionMismatch> {
        self.check_dimension(rank)?;

        let mut next = vec![F::zero(); rank.len()];
        self.propagate_into(rank.as_slice(), &mut next);
        rank.copy_from_slice(&next);

        Ok(())
    }
}
