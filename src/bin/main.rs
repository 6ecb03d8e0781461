use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use num_rational::BigRational;
use tracing::info;
use tracing_subscriber::EnvFilter;

use utmatrix::UpperTriangularMatrix;
use utmatrix::io::{TokenReader, write_matrix};

/// Arithmetic on upper triangular matrices of exact rationals.
///
/// The input file starts with the order of the matrices, followed by the values of each matrix
/// row by row. Row `i` holds the values of the columns `i` and higher.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// What to compute
    #[arg(value_enum)]
    operation: Operation,
    /// File containing the order followed by the matrices
    problem_file: PathBuf,
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Operation {
    /// Print the single matrix in the file
    Show,
    /// Print the sum of the two matrices in the file
    Add,
    /// Print the first matrix minus the second
    Sub,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let filter = match opts.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let path = &opts.problem_file;
    info!(path = %path.display(), "reading problem file");
    let file = File::open(path)
        .with_context(|| format!("Couldn't open \"{}\"", path.display()))?;
    let mut reader = TokenReader::new(BufReader::new(file));

    let order = reader.read_order().context("Couldn't read the matrix order")?;
    let first = read(&mut reader, order, "first")?;

    let result = match opts.operation {
        Operation::Show => first,
        Operation::Add => {
            let second = read(&mut reader, order, "second")?;
            info!(order, "adding");
            first.add(&second)?
        },
        Operation::Sub => {
            let second = read(&mut reader, order, "second")?;
            info!(order, "subtracting");
            first.sub(&second)?
        },
    };

    write_matrix(&mut io::stdout().lock(), &result).context("Couldn't write the result")?;

    Ok(())
}

fn read(
    reader: &mut TokenReader<BufReader<File>>,
    order: usize,
    which: &str,
) -> Result<UpperTriangularMatrix<BigRational>> {
    reader.read_new_matrix(order)
        .with_context(|| format!("Couldn't read the {} matrix of order {}", which, order))
}
