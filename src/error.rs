//! # Errors of the crate
//!
//! Reading a graph and ranking it fail in different ways, this type collects both for callers
//! that do both.
use std::error::Error as StdError;
use std::fmt;
use std::fmt::Display;

use crate::data::linear_algebra::error::{DimensionMismatch, LinearAlgebraError};
use crate::io::error::Import;

/// Anything that can go wrong between reading a graph file and producing rank vectors.
#[derive(Debug)]
pub enum Error {
    /// The graph could not be read.
    Import(Import),
    /// The graph could not be ranked, for example because its matrix is not square.
    LinearAlgebra(LinearAlgebraError),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Import(error) => error.fmt(f),
            Error::LinearAlgebra(error) => error.fmt(f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Import(error) => Some(error),
            Error::LinearAlgebra(error) => Some(error),
        }
    }
}

impl From<Import> for Error {
    fn from(error: Import) -> Self {
        Error::Import(error)
    }
}

impl From<LinearAlgebraError> for Error {
    fn from(error: LinearAlgebraError) -> Self {
        Error::LinearAlgebra(error)
    }
}

impl From<DimensionMismatch> for Error {
    fn from(error: DimensionMismatch) -> Self {
        Error::LinearAlgebra(error.into())
    }
}
