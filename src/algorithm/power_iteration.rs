//! # Power iteration
//!
//! Multiplying a probability (row) vector from the left with the transition matrix gives the
//! distribution of the random walk one step later. Repeating this approximates the dominant left
//! eigenvector of the matrix, the stationary distribution.
//!
//! The number of steps is chosen by the caller; there is no stopping criterion. The change between
//! successive vectors is logged, such that the caller can see whether more steps are needed.
use log::debug;
use num_traits::Float;

use crate::algorithm::Transition;
use crate::algorithm::utilities::l1_distance;
use crate::data::linear_algebra::error::DimensionMismatch;
use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix};
use crate::data::linear_algebra::vector::DenseVector;

/// A dense transition matrix, damping already applied.
impl<F: Float> Transition<F> for DenseMatrix<F> {
    fn nr_nodes(&self) -> usize {
        self.nr_rows()
    }

    /// Compute `next[i] = sum_j rank[j] * H[j][i]`.
    ///
    /// Rows are traversed in storage order; row `j` adds its share `rank[j] * H[j][i]` to each
    /// `next[i]`.
    fn propagate_into(&self, rank: &[F], next: &mut [F]) {
        debug_assert_eq!(rank.len(), self.nr_rows());
        debug_assert_eq!(next.len(), self.nr_columns());

        next.fill(F::zero());
        for (&weight, row) in rank.iter().zip(self.rows()) {
            for (total, &value) in next.iter_mut().zip(row) {
                *total = *total + weight * value;
            }
        }
    }

    /// A dense matrix has to be square as well.
    fn check_dimension(&self, rank: &DenseVector<F>) -> Result<(), DimensionMismatch> {
        if self.is_square() && rank.len() == self.nr_rows() {
            Ok(())
        } else {
            Err(DimensionMismatch::new("propagate", (1, rank.len()), self.shape()))
        }
    }
}

/// Replace `rank` by `rank * matrix`, one step of the power method.
///
/// # Errors
///
/// If the matrix is not square or the vector length doesn't match it.
pub fn iterate_vector_matrix<F: Float>(
    rank: &mut DenseVector<F>,
    matrix: &DenseMatrix<F>,
) -> Result<(), DimensionMismatch> {
    matrix.propagate(rank)
}

/// Successive rank vectors of the power method.
///
/// The iterator never ends by itself, take as many steps as needed. Each item is the rank vector
/// after one more step; the initial vector is not yielded.
#[derive(Debug)]
pub struct PowerIteration<'a, F, T: ?Sized> {
    transition: &'a T,
    rank: DenseVector<F>,
    /// Holds the next state while it is computed from the current one.
    buffer: Vec<F>,
    step: usize,
    last_change: Option<F>,
}

impl<'a, F: Float, T: Transition<F> + ?Sized> PowerIteration<'a, F, T> {
    /// Start iterating.
    ///
    /// # Arguments
    ///
    /// * `transition`: Transition matrix to propagate through.
    /// * `initial`: Starting distribution, typically uniform.
    ///
    /// # Errors
    ///
    /// If the initial vector doesn't fit the transition matrix. This is the only check, the steps
    /// themselves can't fail.
    pub fn new(transition: &'a T, initial: DenseVector<F>) -> Result<Self, DimensionMismatch> {
        transition.check_dimension(&initial)?;
        let buffer = vec![F::zero(); initial.len()];

        Ok(Self { transition, rank: initial, buffer, step: 0, last_change: None })
    }

    /// Compute the next rank vector in place.
    ///
    /// # Return value
    ///
    /// The distance in the 1-norm between the previous and the new vector.
    pub fn advance(&mut self) -> F {
        self.transition.propagate_into(self.rank.as_slice(), &mut self.buffer);
        let change = l1_distance(self.rank.as_slice(), &self.buffer);
        self.rank.copy_from_slice(&self.buffer);

        self.step += 1;
        self.last_change = Some(change);
        debug!(
            "Step {}: change {:e}, mass {:e}",
            self.step,
            change.to_f64().unwrap_or(f64::NAN),
            self.rank.sum().to_f64().unwrap_or(f64::NAN),
        );

        change
    }

    /// The current rank vector.
    pub fn rank(&self) -> &DenseVector<F> {
        &self.rank
    }

    /// Number of steps taken so far.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Change in the 1-norm caused by the last step, if a step was taken.
    pub fn last_change(&self) -> Option<F> {
        self.last_change
    }

    /// Stop iterating and keep the current rank vector.
    pub fn into_rank(self) -> DenseVector<F> {
        self.rank
    }
}

impl<F: Float, T: Transition<F> + ?Sized> Iterator for PowerIteration<'_, F, T> {
    type Item = DenseVector<F>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance();

        Some(self.rank.clone())
    }
}

#[cfg(test)]
mod test {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::algorithm::ergodic::make_ergodic;
    use crate::algorithm::power_iteration::{iterate_vector_matrix, PowerIteration};
    use crate::algorithm::stochastic::make_stochastic;
    use crate::algorithm::Transition;
    use crate::data::linear_algebra::EPSILON;
    use crate::data::linear_algebra::error::DimensionMismatch;
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_algebra::vector::DenseVector;

    fn damped(data: Vec<Vec<f64>>, alpha: f64) -> DenseMatrix<f64> {
        let mut m = DenseMatrix::from_data(data).unwrap();
        make_stochastic(&mut m).unwrap();
        make_ergodic(&mut m, alpha).unwrap();
        m
    }

    #[test]
    fn symmetric_fixed_point() {
        let h = damped(vec![vec![0_f64, 1_f64], vec![1_f64, 0_f64]], 0.5);
        let mut rank = DenseVector::new(vec![0.5, 0.5]);

        iterate_vector_matrix(&mut rank, &h).unwrap();
        assert_eq!(rank.as_slice(), &[0.5, 0.5]);
    }

    #[test]
    fn uses_old_values() {
        // An in-place update would read the new first value while computing the second one.
        let h = DenseMatrix::from_data(vec![vec![0_f64, 1_f64], vec![1_f64, 0_f64]]).unwrap();
        let mut rank = DenseVector::new(vec![0.75, 0.25]);

        iterate_vector_matrix(&mut rank, &h).unwrap();
        assert_eq!(rank.as_slice(), &[0.25, 0.75]);
    }

    #[test]
    fn left_multiplication() {
        let h = DenseMatrix::from_data(vec![
            vec![0.5, 0.5, 0_f64],
            vec![0_f64, 0_f64, 1_f64],
            vec![1_f64, 0_f64, 0_f64],
        ]).unwrap();
        let mut rank = DenseVector::new(vec![1_f64, 0_f64, 0_f64]);

        h.propagate(&mut rank).unwrap();
        assert_eq!(rank.as_slice(), &[0.5, 0.5, 0_f64]);
        h.propagate(&mut rank).unwrap();
        assert_eq!(rank.as_slice(), &[0.25, 0.25, 0.5]);
    }

    #[test]
    fn mass_is_preserved() {
        let h = damped(vec![
            vec![0_f64, 1_f64, 1_f64, 0_f64, 0_f64],
            vec![0_f64, 0_f64, 1_f64, 0_f64, 0_f64],
            vec![1_f64, 0_f64, 0_f64, 1_f64, 1_f64],
            vec![0_f64, 0_f64, 0_f64, 0_f64, 0_f64],
            vec![0.3, 0_f64, 0_f64, 2_f64, 0_f64],
        ], 0.85);
        let mut rank = DenseVector::uniform(5).unwrap();

        for _ in 0..20 {
            iterate_vector_matrix(&mut rank, &h).unwrap();
            assert_abs_diff_eq!(rank.sum(), 1_f64, epsilon = EPSILON);
            assert!(rank.iter().all(|&value| value > 0_f64));
        }
    }

    #[test]
    fn stationary_distribution_is_fixed() {
        let h = damped(vec![
            vec![0_f64, 1_f64, 0_f64],
            vec![0_f64, 0_f64, 1_f64],
            vec![1_f64, 1_f64, 0_f64],
        ], 0.85);
        let mut iteration = PowerIteration::new(&h, DenseVector::uniform(3).unwrap()).unwrap();
        for _ in 0..200 {
            iteration.advance();
        }
        let stationary = iteration.into_rank();

        let mut rank = stationary.clone();
        iterate_vector_matrix(&mut rank, &h).unwrap();
        for (x, y) in rank.iter().zip(stationary.iter()) {
            assert_relative_eq!(*x, *y, max_relative = 1e-12);
        }
    }

    #[test]
    fn dimension_mismatch() {
        let h = damped(vec![vec![0_f64, 1_f64], vec![1_f64, 0_f64]], 0.5);
        let mut rank = DenseVector::new(vec![1_f64 / 3_f64; 3]);

        assert_eq!(
            iterate_vector_matrix(&mut rank, &h),
            Err(DimensionMismatch::new("propagate", (1, 3), (2, 2))),
        );
        assert_eq!(rank.as_slice(), &[1_f64 / 3_f64; 3]);

        let rectangular = DenseMatrix::from_data(vec![vec![0.5, 0.5, 0_f64], vec![0_f64, 0_f64, 1_f64]]).unwrap();
        let mut rank = DenseVector::new(vec![0.5, 0.5]);
        assert!(iterate_vector_matrix(&mut rank, &rectangular).is_err());

        assert!(PowerIteration::new(&h, DenseVector::uniform(3).unwrap()).is_err());
    }

    #[test]
    fn iterator() {
        let h = damped(vec![vec![0_f64, 1_f64], vec![0_f64, 0_f64]], 0.5);
        let mut iteration = PowerIteration::new(&h, DenseVector::uniform(2).unwrap()).unwrap();
        assert_eq!(iteration.last_change(), None);

        let ranks = iteration.by_ref().take(10).collect::<Vec<_>>();
        assert_eq!(ranks.len(), 10);
        assert_eq!(iteration.step(), 10);
        assert_eq!(&ranks[9], iteration.rank());
        assert!(iteration.last_change().unwrap() < 1e-3);

        let mut rank = DenseVector::uniform(2).unwrap();
        iterate_vector_matrix(&mut rank, &h).unwrap();
        assert_eq!(ranks[0], rank);
    }
}
