use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, LevelFilter};

use pagerank::Error;
use pagerank::algorithm::rank::{DEFAULT_DAMPING, DEFAULT_ITERATIONS, RankConfig, Strategy, rank_dense, rank_sparse};
use pagerank::data::linear_algebra::error::LinearAlgebraError;
use pagerank::data::linear_algebra::vector::DenseVector;
use pagerank::io::{Graph, import};
use pagerank::io::error::Import;

const DEFAULT_STEPS: NonZeroUsize = NonZeroUsize::new(DEFAULT_ITERATIONS).unwrap();

/// Compute PageRank by power iteration.
///
/// Prints the matrix as read, the row-stochastic matrix, the initial vector, the damped
/// transition matrix and the rank vector after every step. For adjacency lists, only the lists
/// and the vectors are printed.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing a `Matrix:` or `SparseMatrix:`
    #[arg(default_value = "g.dat")]
    graph_file: PathBuf,
    /// Probability of following an edge rather than teleporting
    #[arg(short = 'a', long, default_value_t = DEFAULT_DAMPING)]
    damping: f64,
    /// Number of power iteration steps
    #[arg(short = 'k', long, default_value_t = DEFAULT_STEPS)]
    iterations: NonZeroUsize,
    /// How the rank vector is advanced: "vector" or "matrix"
    #[arg(long, default_value_t = Strategy::Vector)]
    strategy: Strategy,
    /// Write the results to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("PAGERANK_LOG", "warn"))
        .init();

    let opts = Opts::parse();
    let config = RankConfig {
        damping: opts.damping,
        iterations: opts.iterations.get(),
        strategy: opts.strategy,
    };

    let result = match &opts.output {
        Some(path) => match File::create(path) {
            Ok(file) => run(&opts.graph_file, &config, BufWriter::new(file)),
            Err(io_error) => {
                error!("Could not create output file {:?}: {}", path, io_error);
                return ExitCode::FAILURE;
            },
        },
        None => run(&opts.graph_file, &config, BufWriter::new(io::stdout().lock())),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Rank(rank_error)) => {
            error!("{}", rank_error);
            ExitCode::FAILURE
        },
        Err(Failure::Output(io_error)) => {
            error!("Could not write results: {}", io_error);
            ExitCode::FAILURE
        },
    }
}

/// Reasons for the program to stop early.
enum Failure {
    Rank(Error),
    Output(io::Error),
}

impl From<io::Error> for Failure {
    fn from(error: io::Error) -> Self {
        Failure::Output(error)
    }
}

impl From<Import> for Failure {
    fn from(error: Import) -> Self {
        Failure::Rank(error.into())
    }
}

impl From<LinearAlgebraError> for Failure {
    fn from(error: LinearAlgebraError) -> Self {
        Failure::Rank(error.into())
    }
}

fn run(path: &Path, config: &RankConfig, mut out: impl Write) -> Result<(), Failure> {
    config.validate()?;

    match import::<f64>(path)? {
        Graph::Dense(matrix) => {
            write!(out, "{}", matrix)?;
            let run = rank_dense(matrix, config)?;
            write!(out, "{}", run.stochastic)?;
            write!(out, "{}", run.initial)?;
            write!(out, "{}", run.transition)?;
            write_ranks(&mut out, &run.ranks)?;
        },
        Graph::Sparse(matrix) => {
            write!(out, "{}", matrix)?;
            let ranks = rank_sparse(&matrix, config)?;
            write_ranks(&mut out, &ranks)?;
        },
    }

    out.flush()?;
    Ok(())
}

fn write_ranks(out: &mut impl Write, ranks: &[DenseVector<f64>]) -> io::Result<()> {
    for rank in ranks {
        write!(out, "{}", rank)?;
    }

    Ok(())
}
