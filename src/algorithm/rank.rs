//! # Computing PageRank
//!
//! Drives the pipeline from a raw graph to a sequence of rank vectors. The parameters of a run are
//! collected in a `RankConfig`.
use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use log::{info, warn};
use num_traits::{Float, NumCast};

use crate::algorithm::ergodic::{check_damping, make_ergodic};
use crate::algorithm::matrix_power::iterate_matrix_matrix;
use crate::algorithm::power_iteration::PowerIteration;
use crate::algorithm::sparse::SparseTransition;
use crate::algorithm::stochastic::make_stochastic;
use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix, SparseMatrix};
use crate::data::linear_algebra::vector::DenseVector;

/// Damping factor used when none is given.
pub const DEFAULT_DAMPING: f64 = 0.5;
/// Number of power iteration steps taken when no number is given.
pub const DEFAULT_ITERATIONS: usize = 10;

/// How rank vectors are advanced.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Strategy {
    /// Multiply the rank vector with the transition matrix.
    #[default]
    Vector,
    /// Multiply the rank vector, embedded as a single row matrix, with the transition matrix
    /// using matrix-matrix multiplication.
    Matrix,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "vector" => Ok(Strategy::Vector),
            "matrix" => Ok(Strategy::Matrix),
            other => Err(format!("unknown strategy \"{}\", expected \"vector\" or \"matrix\"", other)),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::Vector => f.write_str("vector"),
            Strategy::Matrix => f.write_str("matrix"),
        }
    }
}

/// Parameters of a run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RankConfig {
    /// Probability of following an edge rather than teleporting, in `[0, 1]`.
    pub damping: f64,
    /// Number of power iteration steps.
    pub iterations: usize,
    /// How the rank vector is advanced.
    pub strategy: Strategy,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            iterations: DEFAULT_ITERATIONS,
            strategy: Strategy::default(),
        }
    }
}

impl RankConfig {
    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// If the damping factor is not a probability.
    pub fn validate(&self) -> Result<(), LinearAlgebraError> {
        check_damping(self.damping)
    }

    /// The damping factor in the floating point type of the computation.
    fn alpha<F: Float>(&self) -> Result<F, LinearAlgebraError> {
        self.validate()?;

        <F as NumCast>::from(self.damping).ok_or(LinearAlgebraError::InvalidDamping(self.damping))
    }
}

/// All stages of a computation on a dense matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<F> {
    /// The input made row-stochastic.
    pub stochastic: DenseMatrix<F>,
    /// The damped transition matrix.
    pub transition: DenseMatrix<F>,
    /// Number of rows that were dangling in the input.
    pub nr_dangling: usize,
    /// The uniform starting distribution.
    pub initial: DenseVector<F>,
    /// The rank vector after each step.
    pub ranks: Vec<DenseVector<F>>,
}

impl<F> Run<F> {
    /// The last rank vector, or the initial one if no steps were taken.
    pub fn rank(&self) -> &DenseVector<F> {
        self.ranks.last().unwrap_or(&self.initial)
    }
}

/// Compute PageRank on a dense weight matrix.
///
/// The matrix is made row-stochastic, damped and then the uniform distribution is propagated
/// through it `config.iterations` times.
///
/// # Arguments
///
/// * `matrix`: Square matrix of nonnegative edge weights, consumed.
/// * `config`: Parameters of the run.
///
/// # Errors
///
/// If the matrix is not square, is empty, or if the damping factor is not a probability.
pub fn rank_dense<F: Float>(
    mut matrix: DenseMatrix<F>,
    config: &RankConfig,
) -> Result<Run<F>, LinearAlgebraError> {
    let alpha = config.alpha()?;

    let nr_dangling = make_stochastic(&mut matrix)?;
    let stochastic = matrix.clone();
    make_ergodic(&mut matrix, alpha)?;
    let transition = matrix;

    let initial = DenseVector::uniform(transition.nr_rows())?;
    let ranks = match config.strategy {
        Strategy::Vector => {
            PowerIteration::new(&transition, initial.clone())?
                .take(config.iterations)
                .collect()
        },
        Strategy::Matrix => {
            let mut rank = DenseMatrix::from_row(initial.as_slice());
            let mut ranks = Vec::with_capacity(config.iterations);
            for _ in 0..config.iterations {
                iterate_matrix_matrix(&mut rank, &transition)?;
                ranks.push(DenseVector::new(rank.row(0).to_vec()));
            }
            ranks
        },
    };
    info!(
        "Ranked {} nodes ({} dangling) in {} {} steps with damping {}",
        transition.nr_rows(), nr_dangling, config.iterations, config.strategy, config.damping,
    );

    Ok(Run { stochastic, transition, nr_dangling, initial, ranks })
}

/// Compute PageRank on the adjacency lists of a graph.
///
/// Gives the same rank vectors as `rank_dense` on the dense version of the matrix, but the dense
/// transition matrix is never built. Only the vector strategy is available.
///
/// # Return value
///
/// The rank vector after each step.
///
/// # Errors
///
/// If the matrix is not square, is empty, or if the damping factor is not a probability.
pub fn rank_sparse<F: Float>(
    adjacency: &SparseMatrix<F>,
    config: &RankConfig,
) -> Result<Vec<DenseVector<F>>, LinearAlgebraError> {
    let alpha = config.alpha()?;
    if config.strategy != Strategy::Vector {
        warn!("The {} strategy is not available for sparse graphs, propagating vectors", config.strategy);
    }

    let transition = SparseTransition::new(adjacency, alpha)?;
    let initial = DenseVector::uniform(adjacency.nr_rows())?;
    let ranks = PowerIteration::new(&transition, initial)?
        .take(config.iterations)
        .collect();
    info!(
        "Ranked {} nodes with {} edges ({} dangling) in {} steps with damping {}",
        adjacency.nr_rows(), adjacency.size(), transition.dangling().len(), config.iterations, config.damping,
    );

    Ok(ranks)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::rank::{rank_dense, rank_sparse, RankConfig, Strategy};
    use crate::data::linear_algebra::EPSILON;
    use crate::data::linear_algebra::error::LinearAlgebraError;
    use crate::data::linear_algebra::matrix::{DenseMatrix, SparseMatrix};

    fn graph() -> DenseMatrix<f64> {
        DenseMatrix::from_data(vec![
            vec![0_f64, 1_f64, 1_f64, 0_f64],
            vec![0_f64, 0_f64, 1_f64, 0_f64],
            vec![1_f64, 0_f64, 0_f64, 0_f64],
            vec![0_f64, 0_f64, 0_f64, 0_f64],
        ]).unwrap()
    }

    #[test]
    fn defaults() {
        let config = RankConfig::default();

        assert_abs_diff_eq!(config.damping, 0.5);
        assert_eq!(config.iterations, 10);
        assert_eq!(config.strategy, Strategy::Vector);
        assert_eq!(config.validate(), Ok(()));

        let config = RankConfig { damping: 1.01, ..RankConfig::default() };
        assert_eq!(config.validate(), Err(LinearAlgebraError::InvalidDamping(1.01)));
    }

    #[test]
    fn strategy() {
        assert_eq!("vector".parse::<Strategy>(), Ok(Strategy::Vector));
        assert_eq!("matrix".parse::<Strategy>(), Ok(Strategy::Matrix));
        assert!("scalar".parse::<Strategy>().is_err());
        assert_eq!(Strategy::Matrix.to_string(), "matrix");
    }

    #[test]
    fn dense() {
        let run = rank_dense(graph(), &RankConfig::default()).unwrap();

        assert_eq!(run.nr_dangling, 1);
        assert_eq!(run.stochastic.row(3), &[0.25; 4]);
        assert_eq!(run.initial.as_slice(), &[0.25; 4]);
        assert_eq!(run.ranks.len(), 10);
        for rank in &run.ranks {
            assert_abs_diff_eq!(rank.sum(), 1_f64, epsilon = EPSILON);
        }
        // Node 2 is linked from both 0 and 1
        let last = run.rank();
        assert!(last[2] > last[1] && last[2] > last[3]);
    }

    #[test]
    fn strategies_agree() {
        let vector = rank_dense(graph(), &RankConfig::default()).unwrap();
        let config = RankConfig { strategy: Strategy::Matrix, ..RankConfig::default() };
        let matrix = rank_dense(graph(), &config).unwrap();

        assert_eq!(vector.transition, matrix.transition);
        for (x, y) in vector.ranks.iter().zip(&matrix.ranks) {
            for (a, b) in x.iter().zip(y.iter()) {
                assert_abs_diff_eq!(*a, *b, epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn sparse_agrees() {
        let config = RankConfig { damping: 0.85, iterations: 25, ..RankConfig::default() };
        let dense = rank_dense(graph(), &config).unwrap();
        let sparse = rank_sparse(&SparseMatrix::from_dense(&graph()), &config).unwrap();

        assert_eq!(sparse.len(), 25);
        for (x, y) in dense.ranks.iter().zip(&sparse) {
            for (a, b) in x.iter().zip(y.iter()) {
                assert_abs_diff_eq!(*a, *b, epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn no_iterations() {
        let config = RankConfig { iterations: 0, ..RankConfig::default() };
        let run = rank_dense(graph(), &config).unwrap();

        assert!(run.ranks.is_empty());
        assert_eq!(run.rank(), &run.initial);
    }

    #[test]
    fn errors() {
        let rectangular = DenseMatrix::<f64>::zeros(2, 3);
        assert!(matches!(
            rank_dense(rectangular, &RankConfig::default()),
            Err(LinearAlgebraError::DimensionMismatch(_)),
        ));

        let config = RankConfig { damping: -1_f64, ..RankConfig::default() };
        assert!(rank_dense(graph(), &config).is_err());
        assert!(rank_sparse(&SparseMatrix::from_dense(&graph()), &config).is_err());
    }
}
