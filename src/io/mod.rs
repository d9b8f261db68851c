//! # Reading of graphs
//!
//! Graphs are read from text files holding either a dense weight matrix or adjacency lists. The
//! matrices and vectors of this crate are written in the same format by their `Display`
//! implementations.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use num_traits::Float;

use crate::data::linear_algebra::matrix::Matrix;
use crate::io::error::Import;

pub use text::Graph;

pub mod error;
pub mod text;

/// Import a graph from a file.
///
/// The format is recognized by the header keyword, the file extension is not used.
///
/// # Errors
///
/// When the file cannot be found or read, or when its contents are not a matrix.
pub fn import<F: Float>(file_path: &Path) -> Result<Graph<F>, Import> {
    let mut contents = String::new();
    File::open(file_path)
        .map_err(Import::IO)?
        .read_to_string(&mut contents)
        .map_err(Import::IO)?;

    let graph = text::parse(&contents)?;
    match &graph {
        Graph::Dense(matrix) => info!(
            "Read a dense {} by {} matrix from {:?}", matrix.nr_rows(), matrix.nr_columns(), file_path,
        ),
        Graph::Sparse(matrix) => info!(
            "Read {} adjacency lists with {} edges from {:?}", matrix.nr_rows(), matrix.size(), file_path,
        ),
    }

    Ok(graph)
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::data::linear_algebra::matrix::{DenseMatrix, SparseMatrix};
    use crate::io::{Graph, import};
    use crate::io::error::Import;

    #[test]
    fn from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Matrix: 2 by 2\nrow 0: 0 1\nrow 1: 1 0\n").unwrap();

        let graph = import::<f64>(file.path()).unwrap();
        assert_eq!(graph, Graph::Dense(DenseMatrix::from_data(vec![
            vec![0_f64, 1_f64],
            vec![1_f64, 0_f64],
        ]).unwrap()));
    }

    #[test]
    fn display_is_readable() {
        let dense = SparseMatrix::new(vec![vec![(1, 1_f64)], vec![]], 2).unwrap().to_dense();
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", dense).unwrap();

        assert_eq!(import::<f64>(file.path()).unwrap(), Graph::Dense(dense));
    }

    #[test]
    fn missing() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing.dat");

        assert!(matches!(import::<f64>(&path), Err(Import::IO(_))));
    }
}
