// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point.
//!
//! `knight <depth>` counts the keypad knight-move sequences of the given
//! length (1..=32) under the default vowel budget of 2 and prints the
//! decimal count to stdout. Any parse or validation failure prints the
//! usage message to stdout and exits with status 1.
//!
//! Diagnostics (memo statistics and the like) go to stderr and are enabled
//! via `RUST_LOG`, e.g. `RUST_LOG=knight_moves=debug knight 10`.

use clap::error::ErrorKind;
use clap::Parser;
use knight_moves::{graph, SequenceCounter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Vowel budget used by the command surface.
const DEFAULT_MAX_NUMBER_OF_VOWELS: usize = 2;

const USAGE: &str =
    "Please provide a command-line argument as an integer between 1 and 32, inclusive";

/// Count keypad knight-move sequences under a vowel budget.
#[derive(Parser)]
#[command(name = "knight")]
struct Cli {
    /// Sequence length, between 1 and 32 inclusive.
    depth: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match SequenceCounter::new(graph::keypad(), DEFAULT_MAX_NUMBER_OF_VOWELS, cli.depth) {
        Ok(mut counter) => {
            println!("{}", counter.count());
            ExitCode::SUCCESS
        }
        Err(_) => {
            println!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}
