//! # Error reporting for reading of graph files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;

use crate::data::linear_algebra::error::LinearAlgebraError;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum Import {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into a matrix.
    ///
    /// # Note
    ///
    /// This variant should only be created for syntactically incorrect files. Graphs that are
    /// written down correctly but make no sense are represented by `Inconsistency`.
    Parse(Parse),
    /// There is a logical inconsistency in the graph described by a file.
    ///
    /// For example, an edge might point to a column that the header didn't declare.
    Inconsistency(Inconsistency),
    /// The matrix declared by the header could not be stored.
    LinearAlgebra(LinearAlgebraError),
}

impl Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Import::IO(error) => error.fmt(f),
            Import::Parse(error) => error.fmt(f),
            Import::Inconsistency(error) => error.fmt(f),
            Import::LinearAlgebra(error) => error.fmt(f),
        }
    }
}

impl Error for Import {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Import::IO(error) => Some(error),
            Import::Parse(error) => Some(error),
            Import::Inconsistency(error) => Some(error),
            Import::LinearAlgebra(error) => Some(error),
        }
    }
}

impl From<Parse> for Import {
    fn from(error: Parse) -> Self {
        Import::Parse(error)
    }
}

impl From<Inconsistency> for Import {
    fn from(error: Inconsistency) -> Self {
        Import::Inconsistency(error)
    }
}

impl From<LinearAlgebraError> for Import {
    fn from(error: LinearAlgebraError) -> Self {
        Import::LinearAlgebra(error)
    }
}

/// A `Parse` error represents all errors encountered during parsing.
///
/// It may recursively hold more `Parse` errors to provide more detail. At the end of this chain,
/// there may be a file location containing a line number and line, at which the error was caused.
#[derive(Debug)]
pub struct Parse {
    description: String,
    source: Option<Source>,
}

/// Describes the cause of a `Parse` error.
///
/// It can be either a file line number and line contents, or another `Parse` error with its own
/// description and optionally, a cause.
#[derive(Debug)]
enum Source {
    FileLocation(usize, String),
    Nested(Box<Parse>),
}

/// Result of a parsing stage.
pub type ParseResult<T> = Result<T, Parse>;

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub type FileLocation<'a> = (usize, &'a str);

impl Parse {
    /// Create a new `Parse` error with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), source: None }
    }

    /// Create a new `Parse` error with a file location as the cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: Line number and line that caused the error.
    pub fn with_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;

        Self {
            description: description.into(),
            source: Some(Source::FileLocation(line_number, line.to_string())),
        }
    }

    /// Wrap a new `Parse` error around this one.
    ///
    /// # Arguments
    ///
    /// * `description`: What went wrong at the level of the caller.
    pub fn wrap(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            source: Some(Source::Nested(Box::new(self))),
        }
    }

    /// Line number at the end of the cause chain, if the error was located.
    pub fn line_number(&self) -> Option<usize> {
        match &self.source {
            Some(Source::FileLocation(line_number, _)) => Some(*line_number),
            Some(Source::Nested(error)) => error.line_number(),
            None => None,
        }
    }

    /// Get all descriptions in the chain, starting with this one.
    fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![self.description.clone()];

        match &self.source {
            Some(Source::FileLocation(line_number, line)) => {
                descriptions.push(format!("\tCaused at line\t{}:\t{}", line_number, line));
            },
            Some(Source::Nested(error)) => descriptions.extend(error.chain_description()),
            None => {},
        }

        descriptions
    }
}

impl Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.chain_description().join("\n"))
    }
}

impl Error for Parse {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(Source::Nested(error)) => Some(error.as_ref()),
            _ => None,
        }
    }
}

/// An `Inconsistency` is returned when a graph file is well formed but describes no valid matrix.
#[derive(Debug)]
pub struct Inconsistency {
    description: String,
    line_number: usize,
}

impl Inconsistency {
    /// Wrap a text in an `Inconsistency`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    /// * `line_number`: Line on which the inconsistency was found.
    pub fn new(description: impl Into<String>, line_number: usize) -> Self {
        Self { description: description.into(), line_number }
    }
}

impl Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InconsistencyError: {} (line {})", self.description, self.line_number)
    }
}

impl Error for Inconsistency {}
