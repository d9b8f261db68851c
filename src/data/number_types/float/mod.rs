//! # Floating point numbers
//!
//! Probabilities are represented with floating point numbers. Rounding errors accumulate over the
//! iterations, so the total mass of a rank vector is only preserved up to a tolerance.
pub mod format;
