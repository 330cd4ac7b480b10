//! Monogatari CLI binary.

use clap::Parser;
use monogatari::cli::{args::*, commands::*};
use std::process;
use tracing::Level;

fn main() {
    // Parse command line arguments using clap
    let args = MonogatariArgs::parse();

    // Map verbosity onto the tracing level
    let level = match args.verbosity() {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
