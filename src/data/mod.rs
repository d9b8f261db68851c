//! # Storing of graphs and rank vectors in memory
//!
//! This module provides the data structures used to represent transition matrices and rank
//! vectors in memory. Algorithms may introduce their specific data structures in
//! `algorithm::my_algorithm`.

pub mod linear_algebra;
pub mod number_types;
