//! # Text format for matrices
//!
//! A dense matrix is written as a `Matrix: <m> by <n>` header followed by `m` rows, each a
//! `row <i>:` label followed by `n` values. Adjacency lists of a 0/1 matrix use a
//! `SparseMatrix: <m> by <n>` header; each row lists the columns of its ones, closed by `-1`.
//!
//! Whitespace, including line breaks, only separates tokens. Rows may be spread over lines. A
//! colon also ends a token, so `Matrix:2 by 2` and `row 0:1 2` are read like their spaced out
//! versions.
use std::iter::Peekable;

use num_traits::Float;

use crate::data::linear_algebra::matrix::{DenseMatrix, SparseMatrix};
use crate::io::error::{FileLocation, Import, Parse, ParseResult};
use crate::io::text::token::{BY, END_OF_LABEL, MATRIX, ROW, SPARSE_MATRIX};

mod dense;
mod sparse;
pub mod token;

/// A graph read from a file, in the representation of the file.
#[derive(Clone, Debug, PartialEq)]
pub enum Graph<F> {
    /// Read from a `Matrix:` file.
    Dense(DenseMatrix<F>),
    /// Read from a `SparseMatrix:` file.
    Sparse(SparseMatrix<F>),
}

/// Parse a matrix in either the dense or the sparse format, depending on the header.
///
/// # Arguments
///
/// * `text`: Entire contents of the file.
///
/// # Errors
///
/// If the text is not a matrix in one of the two formats, when a declared matrix is too large to
/// store or if there is anything after the last row.
pub fn parse<F: Float>(text: &str) -> Result<Graph<F>, Import> {
    let mut tokens = into_tokens(text).peekable();

    let graph = match tokens.peek().copied() {
        Some(token) if token.text == MATRIX => {
            Graph::Dense(dense::parse_matrix(&mut tokens, text.len())?)
        },
        Some(token) if token.text == SPARSE_MATRIX => {
            Graph::Sparse(sparse::parse_matrix(&mut tokens, text.len())?)
        },
        Some(token) => return Err(Parse::with_location(
            format!("Expected a \"{}\" or \"{}\" header, found \"{}\"", MATRIX, SPARSE_MATRIX, token.text),
            token.location,
        ).into()),
        None => return Err(Parse::new("No header to read, is the file empty?").into()),
    };
    expect_end(&mut tokens)?;

    Ok(graph)
}

/// Parse a matrix in the dense format.
///
/// # Errors
///
/// If the text is not a dense matrix or if there is anything after the last row.
pub fn parse_dense<F: Float>(text: &str) -> Result<DenseMatrix<F>, Import> {
    let mut tokens = into_tokens(text).peekable();
    let matrix = dense::parse_matrix(&mut tokens, text.len())?;
    expect_end(&mut tokens)?;

    Ok(matrix)
}

/// Parse a 0/1 matrix in the sparse format.
///
/// # Errors
///
/// If the text is not a sparse matrix, if a column is out of range or listed twice, or if there
/// is anything after the last row.
pub fn parse_sparse<F: Float>(text: &str) -> Result<SparseMatrix<F>, Import> {
    let mut tokens = into_tokens(text).peekable();
    let matrix = sparse::parse_matrix(&mut tokens, text.len())?;
    expect_end(&mut tokens)?;

    Ok(matrix)
}

/// A piece of text between separators, together with the line it was found on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Token<'a> {
    text: &'a str,
    location: FileLocation<'a>,
}

/// Split a text into tokens, remembering the line number.
///
/// Tokens are separated by whitespace and end after a colon, which stays part of the token.
///
/// # Arguments
///
/// * `text`: The file contents.
///
/// # Return value
///
/// An iterator over tokens, line numbers count from 1.
fn into_tokens(text: &str) -> impl Iterator<Item = Token<'_>> {
    text.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line))
        .flat_map(|(number, line)| {
            line.split_whitespace()
                .flat_map(|word| word.split_inclusive(END_OF_LABEL))
                .map(move |text| Token { text, location: (number, line) })
        })
}

/// Take the next token, failing at the end of the text.
///
/// # Arguments
///
/// * `tokens`: Remaining tokens.
/// * `expected`: What the token should be, used in the error message.
fn next_token<'a>(
    tokens: &mut impl Iterator<Item = Token<'a>>,
    expected: &str,
) -> ParseResult<Token<'a>> {
    tokens.next()
        .ok_or_else(|| Parse::new(format!("Unexpected end of file, expected {}", expected)))
}

/// Consume a specific keyword.
fn expect_keyword<'a>(
    tokens: &mut impl Iterator<Item = Token<'a>>,
    keyword: &str,
) -> ParseResult<Token<'a>> {
    let token = next_token(tokens, &format!("\"{}\"", keyword))?;
    if token.text == keyword {
        Ok(token)
    } else {
        Err(Parse::with_location(
            format!("Expected \"{}\", found \"{}\"", keyword, token.text),
            token.location,
        ))
    }
}

/// Read a nonnegative integer such as a dimension or a row label.
fn parse_count(token: Token, what: &str) -> ParseResult<usize> {
    token.text.parse()
        .map_err(|_| Parse::with_location(
            format!("Could not read {} from \"{}\"", what, token.text),
            token.location,
        ))
}

/// Read the `<keyword> <m> by <n>` header.
///
/// # Return value
///
/// The number of rows and columns, and the location of the header.
fn parse_header<'a>(
    tokens: &mut impl Iterator<Item = Token<'a>>,
    keyword: &str,
) -> ParseResult<((usize, usize), FileLocation<'a>)> {
    let header = expect_keyword(tokens, keyword)?;
    let nr_rows = parse_count(next_token(tokens, "the number of rows")?, "the number of rows")?;
    expect_keyword(tokens, BY)?;
    let nr_columns = parse_count(next_token(tokens, "the number of columns")?, "the number of columns")?;

    Ok(((nr_rows, nr_columns), header.location))
}

/// Reject a header that declares more entries than the text has bytes.
///
/// Every entry takes at least one byte, so such a file can't be complete. Checking this before
/// storage is reserved keeps a bogus header from exhausting memory.
///
/// # Arguments
///
/// * `declared`: Number of entries the header implies, `None` if that overflows.
/// * `text_len`: Length of the whole text in bytes.
/// * `location`: Location of the header.
fn check_declared_size(
    declared: Option<usize>,
    text_len: usize,
    location: FileLocation,
) -> ParseResult<()> {
    match declared {
        Some(declared) if declared <= text_len => Ok(()),
        _ => Err(Parse::with_location(
            format!("Header declares more entries than the {} bytes of text can hold", text_len),
            location,
        )),
    }
}

/// Read the `row <i>:` label in front of the values of a row.
///
/// # Return value
///
/// The index in the label and its location. The index is not required to equal the position of
/// the row.
fn parse_row_label<'a>(
    tokens: &mut impl Iterator<Item = Token<'a>>,
) -> ParseResult<(usize, FileLocation<'a>)> {
    expect_keyword(tokens, ROW)?;
    let token = next_token(tokens, "a row label")?;
    let index = token.text.strip_suffix(END_OF_LABEL)
        .ok_or_else(|| Parse::with_location(
            format!("Row label \"{}\" should end with '{}'", token.text, END_OF_LABEL),
            token.location,
        ))?;
    let index = parse_count(Token { text: index, location: token.location }, "a row index")?;

    Ok((index, token.location))
}

/// Check that nothing but whitespace remains.
fn expect_end<'a, I: Iterator<Item = Token<'a>>>(tokens: &mut Peekable<I>) -> ParseResult<()> {
    match tokens.peek() {
        None => Ok(()),
        Some(token) => Err(Parse::with_location(
            format!("Matrix parsed successfully, but \"{}\" follows after the last row", token.text),
            token.location,
        )),
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::{DenseMatrix, SparseMatrix};
    use crate::io::error::Import;
    use crate::io::text::{Graph, into_tokens, parse, parse_dense, parse_row_label, parse_sparse};

    #[test]
    fn tokens() {
        let tokens = into_tokens("Matrix: 1 by 2\n\n  row 0:\t1 2\n").collect::<Vec<_>>();

        assert_eq!(tokens.len(), 8);
        assert_eq!(tokens[0].text, "Matrix:");
        assert_eq!(tokens[5].text, "0:");
        assert_eq!(tokens[5].location, (3, "  row 0:\t1 2"));
    }

    #[test]
    fn colon_ends_token() {
        let tokens = into_tokens("Matrix:2 by 2\nrow 0:1 2").map(|token| token.text).collect::<Vec<_>>();

        assert_eq!(tokens, vec!["Matrix:", "2", "by", "2", "row", "0:", "1", "2"]);
    }

    #[test]
    fn row_label() {
        let mut tokens = into_tokens("row 12:");
        assert_eq!(parse_row_label(&mut tokens).map(|(index, _)| index).ok(), Some(12));

        assert!(parse_row_label(&mut into_tokens("row 12")).is_err());
        assert!(parse_row_label(&mut into_tokens("row x:")).is_err());
        assert!(parse_row_label(&mut into_tokens("column 1:")).is_err());
        assert!(parse_row_label(&mut into_tokens("row")).is_err());
    }

    #[test]
    fn dispatch() {
        let dense = parse::<f64>("Matrix: 1 by 1\nrow 0: 1\n").unwrap();
        assert_eq!(dense, Graph::Dense(DenseMatrix::from_data(vec![vec![1_f64]]).unwrap()));

        let sparse = parse::<f64>("SparseMatrix: 1 by 1\nrow 0: 0 -1\n").unwrap();
        assert_eq!(sparse, Graph::Sparse(SparseMatrix::new(vec![vec![(0, 1_f64)]], 1).unwrap()));

        assert!(matches!(parse::<f64>(""), Err(Import::Parse(_))));
        assert!(matches!(parse::<f64>("Vector: 2\n0.5 0.5"), Err(Import::Parse(_))));
    }

    #[test]
    fn trailing_content() {
        let result = parse_dense::<f64>("Matrix: 1 by 1\nrow 0: 1\nrow 1: 2\n");
        match result {
            Err(Import::Parse(error)) => assert_eq!(error.line_number(), Some(3)),
            other => panic!("unexpected result {:?}", other),
        }

        assert!(parse_sparse::<f64>("SparseMatrix: 1 by 1\nrow 0: -1\n0").is_err());
    }
}
