//! # Tokens used in graph files

/// First token of a file holding a dense matrix.
pub const MATRIX: &str = "Matrix:";

/// First token of a file holding a sparse 0/1 matrix as adjacency lists.
pub const SPARSE_MATRIX: &str = "SparseMatrix:";

/// Separates the number of rows from the number of columns in a header.
pub const BY: &str = "by";

/// Starts every row, followed by the row label.
pub const ROW: &str = "row";

/// Closes the row label, as in `row 3:`.
pub const END_OF_LABEL: char = ':';
