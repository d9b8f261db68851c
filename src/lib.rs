//! # PageRank by power iteration
//!
//! The stationary distribution of a random walk with restart is computed by repeatedly
//! multiplying a probability vector with a damped, row-stochastic transition matrix, as described
//! by Brin and Page. The raw input is a dense weight matrix or a sparse 0/1 adjacency list.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;
pub mod io;

pub use error::Error;

#[cfg(test)]
mod tests;
