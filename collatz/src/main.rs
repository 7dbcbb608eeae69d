//! Collatz argmax CLI.
//!
//! Scans `[1, LIMIT)` for the value with the longest Collatz sequence and
//! prints the winner and its step count.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use collatz::logging;
use collatz::search::search;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "collatz",
    version,
    about = "Find the longest Collatz sequence below a limit"
)]
struct Cli {
    /// Upper bound of the scanned range [1, LIMIT), exclusive.
    limit: u64,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let start = Instant::now();
    let winner = search(cli.limit);
    info!(elapsed = ?start.elapsed(), limit = cli.limit, "scan finished");

    println!("{} takes the most steps at {}.", winner.value, winner.steps);
    Ok(())
}
