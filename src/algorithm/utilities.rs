//! # Utilities
//!
//! Helper functions for algorithms.
use num_traits::Float;

/// Sum of a slice of values.
pub fn sum<F: Float>(values: &[F]) -> F {
    values.iter().fold(F::zero(), |total, &value| total + value)
}

/// Distance between two vectors in the 1-norm, `sum_i |a_i - b_i|`.
///
/// # Arguments
///
/// * `a`, `b`: Slices of the same length.
pub fn l1_distance<F: Float>(a: &[F], b: &[F]) -> F {
    debug_assert_eq!(a.len(), b.len());

    a.iter().zip(b)
        .fold(F::zero(), |total, (&x, &y)| total + (x - y).abs())
}
