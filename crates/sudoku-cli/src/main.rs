mod api;

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;
use std::time::Instant;

use api::{ErrorResponse, GenerateResponse, SolveRequest, SolveResponse, DEFAULT_SIZE};
use clap::{Parser, Subcommand};

/// Sudoku solve/generate boundary speaking the service JSON shapes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Also render the resulting board to stderr
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a puzzle given as JSON: {"grid": [[int]], "size": int}
    Solve {
        /// Read the request from this file instead of stdin
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Generate a fresh puzzle as JSON: {"puzzle": [[int]]}
    Generate {
        /// Board size; must have an integer square root
        #[arg(short, long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        /// Cells to leave filled; defaults to half the board
        #[arg(short, long)]
        clues: Option<usize>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        // Client errors go to stdout as the JSON error body, matching the
        // service response they stand in for
        let body = ErrorResponse {
            error: err.to_string(),
        };
        println!("{}", serde_json::to_string(&body).unwrap_or_default());
        log::error!("request failed: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Solve { file } => {
            let body = match file {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let request: SolveRequest = serde_json::from_str(&body)?;
            let size = request.size;

            let started = Instant::now();
            let solution = api::solve(request)?;
            log::debug!(
                "solved {size}x{size} grid in {:.3}s",
                started.elapsed().as_secs_f64()
            );

            if cli.pretty {
                eprintln!("{solution}");
            }
            let response = SolveResponse {
                solution: solution.rows(),
            };
            println!("{}", serde_json::to_string(&response)?);
        }
        Command::Generate { size, clues, seed } => {
            let puzzle = api::generate(*size, *clues, *seed)?;
            log::info!(
                "generated {size}x{size} puzzle with {} clues",
                puzzle.filled_count()
            );

            if cli.pretty {
                eprintln!("{puzzle}");
            }
            let response = GenerateResponse {
                puzzle: puzzle.rows(),
            };
            println!("{}", serde_json::to_string(&response)?);
        }
    }
    Ok(())
}
