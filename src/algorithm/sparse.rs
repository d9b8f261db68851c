//! # Power iteration on adjacency lists
//!
//! For larger graphs, the damped transition matrix is dense while the graph is not. The
//! normalized adjacency lists are kept instead, and the uniform parts of the dense matrix, from
//! dangling rows and from teleportation, are added as a single scalar per step.
use num_traits::Float;

use crate::algorithm::Transition;
use crate::algorithm::ergodic::check_damping;
use crate::algorithm::utilities::sum;
use crate::data::linear_algebra::SparseTupleVec;
use crate::data::linear_algebra::error::{DimensionMismatch, LinearAlgebraError};
use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix, SparseMatrix};
use crate::data::linear_algebra::vector::cast;

/// The damped transition matrix of a graph given by its adjacency lists.
///
/// Equal to normalizing the dense adjacency matrix with `make_stochastic` and damping it with
/// `make_ergodic`, without storing the dense result.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseTransition<F> {
    /// Rows of nodes with outgoing edges, divided by their sum.
    rows: Vec<SparseTupleVec<F>>,
    /// Nodes without outgoing edges.
    dangling: Vec<usize>,
    alpha: F,
}

impl<F: Float> SparseTransition<F> {
    /// Normalize the adjacency lists of a graph.
    ///
    /// # Arguments
    ///
    /// * `adjacency`: Square matrix with nonnegative edge weights.
    /// * `alpha`: Probability of following an edge rather than teleporting.
    ///
    /// # Errors
    ///
    /// If the matrix is not square or empty, or if `alpha` is not a probability.
    pub fn new(adjacency: &SparseMatrix<F>, alpha: F) -> Result<Self, LinearAlgebraError> {
        check_damping(alpha)?;
        if !adjacency.is_square() {
            let transposed = (adjacency.nr_columns(), adjacency.nr_rows());
            return Err(DimensionMismatch::new("sparse transition", adjacency.shape(), transposed).into());
        }
        if adjacency.nr_rows() == 0 {
            return Err(LinearAlgebraError::DivideByZero("sparse transition"));
        }

        let mut dangling = Vec::new();
        let rows = adjacency.rows()
            .enumerate()
            .map(|(i, row)| {
                let total = row.iter().fold(F::zero(), |total, &(_, value)| total + value);
                if total.is_zero() {
                    dangling.push(i);
                    Vec::new()
                } else {
                    row.iter().map(|&(j, value)| (j, value / total)).collect()
                }
            })
            .collect();

        Ok(Self { rows, dangling, alpha })
    }

    /// Nodes without outgoing edges, in increasing order.
    pub fn dangling(&self) -> &[usize] {
        &self.dangling
    }

    /// The damping factor.
    pub fn alpha(&self) -> F {
        self.alpha
    }

    /// Materialize the damped transition matrix.
    ///
    /// Only sensible for small graphs, used for inspection.
    pub fn to_dense(&self) -> DenseMatrix<F> {
        let n = self.rows.len();
        let teleport = (F::one() - self.alpha) / cast(n);
        let uniform = self.alpha / cast(n) + teleport;

        let mut dense = DenseMatrix::zeros(n, n);
        for (i, row) in dense.rows_mut().enumerate() {
            row.fill(teleport);
            for &(j, value) in &self.rows[i] {
                row[j] = self.alpha * value + teleport;
            }
        }
        for &i in &self.dangling {
            dense.row_mut(i).fill(uniform);
        }

        dense
    }
}

impl<F: Float> Transition<F> for SparseTransition<F> {
    fn nr_nodes(&self) -> usize {
        self.rows.len()
    }

    /// Compute `next[i] = alpha * (sum_j rank[j] * S[j][i] + d / n) + (1 - alpha) * sum(rank) / n`.
    ///
    /// Here `S` holds the normalized adjacency lists and `d` is the mass on dangling nodes.
    fn propagate_into(&self, rank: &[F], next: &mut [F]) {
        debug_assert_eq!(rank.len(), self.rows.len());
        debug_assert_eq!(next.len(), self.rows.len());

        let n = cast::<F>(self.rows.len());
        let dangling_mass = self.dangling.iter().fold(F::zero(), |total, &i| total + rank[i]);
        let teleport_mass = (F::one() - self.alpha) * sum(rank);
        next.fill((self.alpha * dangling_mass + teleport_mass) / n);

        for (&weight, row) in rank.iter().zip(&self.rows) {
            if weight.is_zero() {
                continue;
            }
            for &(i, value) in row {
                next[i] = next[i] + self.alpha * weight * value;
            }
        }
    }
}
