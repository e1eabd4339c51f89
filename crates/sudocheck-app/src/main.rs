//! Command-line front end for the sudocheck operations.
//!
//! Frames the two transport-agnostic operations as subcommands and prints
//! their JSON responses, one per invocation:
//!
//! ```sh
//! sudocheck solve "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//! sudocheck check "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37." A1 1
//! ```
//!
//! The process exits with status 1 when the response carries an error, so
//! scripts can branch without parsing the JSON.

use std::process;

use clap::{Parser, Subcommand};
use sudocheck_api::{
    CheckRequest, CheckResponse, SolveRequest, SolveResponse,
    check::check_response,
    solve::solve_response,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve an 81-character serialized puzzle.
    Solve {
        /// The serialized puzzle, `.` for empty cells.
        puzzle: String,
    },
    /// Check a single digit placement against a puzzle.
    Check {
        /// The serialized puzzle, `.` for empty cells.
        puzzle: String,
        /// Cell label, row letter A-I followed by column number 1-9.
        coordinate: String,
        /// Candidate digit 1-9.
        value: String,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let failed = match args.command {
        Command::Solve { puzzle } => {
            let response = solve_response(&SolveRequest {
                puzzle: Some(puzzle),
            });
            print_json(&response);
            matches!(response, SolveResponse::Error { .. })
        }
        Command::Check {
            puzzle,
            coordinate,
            value,
        } => {
            let response = check_response(&CheckRequest {
                puzzle: Some(puzzle),
                coordinate: Some(coordinate),
                value: Some(value),
            });
            print_json(&response);
            matches!(response, CheckResponse::Error { .. })
        }
    };

    if failed {
        process::exit(1);
    }
}

fn print_json<T>(response: &T)
where
    T: serde::Serialize,
{
    match serde_json::to_string(response) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("failed to serialize response: {err}");
            process::exit(2);
        }
    }
}
