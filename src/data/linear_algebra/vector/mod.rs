//! # Vector types
//!
//! Rank vectors are dense: after a single step of the power method every node has a nonzero
//! probability.
pub use dense::Dense as DenseVector;

mod dense;

pub(crate) use dense::cast;
