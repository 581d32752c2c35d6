//! worttokens - count capitalized word tokens in a directory tree
//!
//! worttokens provides:
//! - Recursive discovery of text files up to 500 KiB
//! - Per-file and global counts of `[A-Z][a-z]*` tokens
//! - A CSV report (`worttokens.csv`) in the current directory

use anyhow::Result;
use clap::Parser;
use tracing::Level;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    cli::run(cli)
}
