//! # Number types
//!
//! Transition matrices and rank vectors are generic over a floating point type, see
//! `num_traits::Float`. This module collects what is needed on top of that trait.
pub mod float;
