//! # Errors of the numeric core
//!
//! Numeric routines never abort the process. Operand shapes that don't fit together, matrices
//! without columns and allocations that can't be satisfied are reported to the caller, who
//! decides what to do with them.
use std::borrow::Cow;
use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Shapes of two operands that were expected to agree.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DimensionMismatch {
    /// The operation that was attempted.
    pub operation: Cow<'static, str>,
    /// Shape of the left operand, as `(rows, columns)`. Vectors are a single row.
    pub left: (usize, usize),
    /// Shape of the right operand, as `(rows, columns)`.
    pub right: (usize, usize),
}

impl DimensionMismatch {
    /// Describe a pair of incompatible operands.
    ///
    /// # Arguments
    ///
    /// * `operation`: Name of the operation that was attempted, used in the message.
    /// * `left`: Shape of the left operand.
    /// * `right`: Shape of the right operand.
    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        Self { operation: operation.into(), left, right }
    }
}

impl Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: incompatible dimensions {} by {} and {} by {}",
            self.operation, self.left.0, self.left.1, self.right.0, self.right.1,
        )
    }
}

impl Error for DimensionMismatch {}

/// A `LinearAlgebraError` is created when a numeric operation can't be carried out.
#[derive(Debug, Clone, PartialEq)]
pub enum LinearAlgebraError {
    /// Memory for a container of the given number of elements could not be reserved.
    AllocationFailure(usize),
    /// The operands don't have shapes that fit together.
    DimensionMismatch(DimensionMismatch),
    /// The operation would divide by a dimension that is zero.
    ///
    /// The contained `&str` names the operation.
    DivideByZero(&'static str),
    /// The damping factor is not a finite number in `[0, 1]`.
    InvalidDamping(f64),
    /// A sparse row refers to a column the matrix doesn't have.
    IndexOutOfRange {
        /// Row holding the index.
        row: usize,
        /// The offending column index.
        column: usize,
        /// Number of columns of the matrix.
        nr_columns: usize,
    },
    /// A sparse row lists the same column twice.
    DuplicateIndex {
        /// Row holding the index.
        row: usize,
        /// The repeated column index.
        column: usize,
    },
}

impl Display for LinearAlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearAlgebraError::AllocationFailure(len) => {
                write!(f, "could not allocate memory for {} values", len)
            },
            LinearAlgebraError::DimensionMismatch(error) => error.fmt(f),
            LinearAlgebraError::DivideByZero(operation) => {
                write!(f, "{}: dimension is zero, would divide by zero", operation)
            },
            LinearAlgebraError::InvalidDamping(alpha) => {
                write!(f, "damping factor {} is not in [0, 1]", alpha)
            },
            LinearAlgebraError::IndexOutOfRange { row, column, nr_columns } => {
                write!(f, "row {}: column {} is out of range for {} columns", row, column, nr_columns)
            },
            LinearAlgebraError::DuplicateIndex { row, column } => {
                write!(f, "row {}: column {} is listed twice", row, column)
            },
        }
    }
}

impl Error for LinearAlgebraError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LinearAlgebraError::DimensionMismatch(error) => Some(error),
            _ => None,
        }
    }
}

impl From<DimensionMismatch> for LinearAlgebraError {
    fn from(error: DimensionMismatch) -> Self {
        LinearAlgebraError::DimensionMismatch(error)
    }
}

/// Reserve exactly `len` elements, reporting failure instead of aborting.
pub(crate) fn try_with_capacity<T>(len: usize) -> Result<Vec<T>, LinearAlgebraError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_: TryReserveError| LinearAlgebraError::AllocationFailure(len))?;

    Ok(data)
}
