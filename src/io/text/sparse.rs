//! # Adjacency lists
//!
//! Reading of the `SparseMatrix:` format. Every listed column is an edge of weight one.
use log::{debug, warn};
use num_traits::Float;

use crate::data::linear_algebra::error::{LinearAlgebraError, try_with_capacity};
use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_algebra::SparseTupleVec;
use crate::io::error::{Import, Inconsistency, Parse, ParseResult};
use crate::io::text::{check_declared_size, next_token, parse_header, parse_row_label, Token};
use crate::io::text::token::SPARSE_MATRIX;

/// Read a sparse matrix, starting at its header.
///
/// # Arguments
///
/// * `tokens`: Tokens of the text, starting with the header keyword.
/// * `text_len`: Length of the text, bounds the number of rows the header may declare.
///
/// # Errors
///
/// If the tokens don't describe a sparse matrix, when a column is out of range or listed twice
/// in a row, or if the row index can't be stored.
pub(super) fn parse_matrix<'a, F: Float>(
    tokens: &mut impl Iterator<Item = Token<'a>>,
    text_len: usize,
) -> Result<SparseMatrix<F>, Import> {
    let ((nr_rows, nr_columns), location) = parse_header(tokens, SPARSE_MATRIX)
        .and_then(|(shape, location)| {
            check_declared_size(Some(shape.0), text_len, location)?;
            Ok((shape, location))
        })
        .map_err(|error| error.wrap("Could not read the matrix header"))?;
    debug!("Reading {} adjacency lists declared on line {}", nr_rows, location.0);

    let mut rows = try_with_capacity(nr_rows)?;
    let mut line_numbers = try_with_capacity(nr_rows)?;
    for i in 0..nr_rows {
        let (row, line_number) = parse_row(tokens, i)
            .map_err(|error| error.wrap(format!("Could not read row {}", i)))?;
        rows.push(row);
        line_numbers.push(line_number);
    }

    SparseMatrix::new(rows, nr_columns).map_err(|error| match error {
        LinearAlgebraError::IndexOutOfRange { row, .. } | LinearAlgebraError::DuplicateIndex { row, .. } => {
            Inconsistency::new(error.to_string(), line_numbers[row]).into()
        },
        other => other.into(),
    })
}

/// Read the label and column indices of row `i`, up to and including the terminating negative
/// number.
///
/// # Return value
///
/// The edges in the order listed and the line on which the row ended.
fn parse_row<'a, F: Float>(
    tokens: &mut impl Iterator<Item = Token<'a>>,
    i: usize,
) -> ParseResult<(SparseTupleVec<F>, usize)> {
    let (label, (line_number, _)) = parse_row_label(tokens)?;
    if label != i {
        warn!("Row {} is labeled {} on line {}, using its position", i, label, line_number);
    }

    let mut row = Vec::new();
    loop {
        let token = next_token(tokens, "a column index or a negative number closing the row")?;
        let column: i64 = token.text.parse()
            .map_err(|_| Parse::with_location(
                format!("Could not parse column index \"{}\"", token.text),
                token.location,
            ))?;

        if column < 0 {
            return Ok((row, token.location.0));
        }
        let column = usize::try_from(column)
            .map_err(|_| Parse::with_location(
                format!("Column index \"{}\" can't be stored", token.text),
                token.location,
            ))?;
        row.push((column, F::one()));
    }
}
