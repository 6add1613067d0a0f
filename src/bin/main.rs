use std::error::Error;
use std::io;
use std::io::{BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand};

use packsym::algorithm::permutation::{distinct_permutations, permutation_count, permutations};
use packsym::data::bounded::{Bounded, DEFAULT_CAPACITY};
use packsym::io::console::{parse_values, read_symmetric, Strictness, write_dense};
use packsym::io::import;
use packsym::io::report::{demonstrations, report, Routine};

/// Packed symmetric matrices and classic array exercises.
#[derive(Parser)]
#[command(name = "packsym", version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read a dimension and all values of a symmetric matrix, print the full matrix
    Symmetric {
        /// File with the matrix, standard input when absent
        #[arg(long)]
        input: Option<PathBuf>,
        /// Reject values above the diagonal that differ from their mirror image
        #[arg(long)]
        strict: bool,
    },
    /// Run the seven array exercises on their built-in data
    Arrays {
        /// Maximum number of elements in an array
        #[arg(long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,
    },
    /// Run a single array exercise on the given values
    Scan {
        routine: Routine,
        /// Integers separated by commas
        #[arg(long, allow_hyphen_values = true)]
        values: String,
        /// Target for the pair searches
        #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
        sum: i64,
        /// Maximum number of elements in the array
        #[arg(long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,
    },
    /// Print all orderings of the characters of a text
    Permutations {
        text: String,
        /// List repeated orderings only once
        #[arg(long)]
        unique: bool,
        /// Refuse texts with more characters than this
        #[arg(long, default_value_t = 8)]
        max_length: usize,
    },
}

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {}", error);
        exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let opts = Opts::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match opts.command {
        Command::Symmetric { input, strict } => {
            let strictness = if strict { Strictness::Strict } else { Strictness::Lenient };
            let matrix = match input {
                Some(path) => import(&path, strictness)?,
                None => {
                    let stdin = io::stdin();
                    if stdin.is_terminal() {
                        eprintln!("Enter the dimension, followed by all elements row by row:");
                    }
                    read_symmetric(stdin.lock(), strictness)?
                },
            };
            write_dense(&matrix, &mut out)?;
        },
        Command::Arrays { capacity } => {
            demonstrations(&mut out, capacity)?;
        },
        Command::Scan { routine, values, sum, capacity } => {
            let values = Bounded::new(parse_values(&values)?, capacity)?;
            report(&mut out, routine, &values, sum)?;
        },
        Command::Permutations { text, unique, max_length } => {
            let len = text.chars().count();
            if len > max_length {
                return Err(format!(
                    "\"{}\" has {} characters, which gives {} permutations; the maximum length is {}",
                    text,
                    len,
                    permutation_count(len).map_or("too many".to_string(), |count| count.to_string()),
                    max_length,
                ).into());
            }

            writeln!(out, "The permutations of {} are", text)?;
            let result = if unique { distinct_permutations(&text) } else { permutations(&text) };
            for permutation in result {
                writeln!(out, "{}", permutation)?;
            }
        },
    }

    out.flush()?;
    Ok(())
}
