//! # Linear algebra primitives
//!
//! Linear algebra primitives used to represent data in either a dense or a sparse format.

pub mod error;
pub mod matrix;
pub mod vector;

/// Absolute tolerance used when checking that probability masses add up.
pub const EPSILON: f64 = 1e-10;

/// A column (or row) index together with the value stored at that index.
pub type SparseTuple<F> = (usize, F);
/// Sparse storage of a single row or column, sorted by index.
pub type SparseTupleVec<F> = Vec<SparseTuple<F>>;
