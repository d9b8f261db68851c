//! # Dense matrices
//!
//! Reading of the `Matrix:` format.
use log::{debug, warn};
use num_traits::{Float, NumCast};

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::io::error::{Import, Parse, ParseResult};
use crate::io::text::{check_declared_size, next_token, parse_header, parse_row_label, Token};
use crate::io::text::token::MATRIX;

/// Read a dense matrix, starting at its header.
///
/// # Arguments
///
/// * `tokens`: Tokens of the text, starting with the header keyword.
/// * `text_len`: Length of the text, bounds the size the header may declare.
///
/// # Errors
///
/// If the tokens don't describe a dense matrix, or if the declared matrix can't be stored.
pub(super) fn parse_matrix<'a, F: Float>(
    tokens: &mut impl Iterator<Item = Token<'a>>,
    text_len: usize,
) -> Result<DenseMatrix<F>, Import> {
    let ((nr_rows, nr_columns), location) = parse_header(tokens, MATRIX)
        .and_then(|(shape, location)| {
            check_declared_size(shape.0.checked_mul(shape.1.max(1)), text_len, location)?;
            Ok((shape, location))
        })
        .map_err(|error| error.wrap("Could not read the matrix header"))?;
    debug!("Reading a dense {} by {} matrix declared on line {}", nr_rows, nr_columns, location.0);
    let mut matrix = DenseMatrix::try_zeros(nr_rows, nr_columns)?;

    for i in 0..nr_rows {
        parse_row(tokens, i, matrix.row_mut(i))
            .map_err(|error| error.wrap(format!("Could not read row {}", i)))?;
    }

    Ok(matrix)
}

/// Read the label and values of row `i` into `row`.
fn parse_row<'a, F: Float>(
    tokens: &mut impl Iterator<Item = Token<'a>>,
    i: usize,
    row: &mut [F],
) -> ParseResult<()> {
    let (label, (line_number, _)) = parse_row_label(tokens)?;
    if label != i {
        warn!("Row {} is labeled {} on line {}, using its position", i, label, line_number);
    }

    for value in row {
        *value = parse_value(next_token(tokens, "a value")?)?;
    }

    Ok(())
}

/// Read a single matrix entry.
fn parse_value<F: Float>(token: Token) -> ParseResult<F> {
    let value: f64 = token.text.parse()
        .map_err(|_| Parse::with_location(
            format!("Could not parse value \"{}\"", token.text),
            token.location,
        ))?;

    <F as NumCast>::from(value)
        .ok_or_else(|| Parse::with_location(
            format!("Value \"{}\" can't be represented", token.text),
            token.location,
        ))
}
