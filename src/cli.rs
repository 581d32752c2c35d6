//! CLI module - Command-line interface definition and dispatch

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// worttokens - count capitalized word tokens across a directory tree.
#[derive(Parser, Debug)]
#[command(name = "worttokens")]
#[command(
    author,
    version,
    about,
    long_about = r#"worttokens scans DIRECTORY recursively and counts word tokens in every text
file of at most 500 KiB. A token is one uppercase letter followed by any number
of lowercase letters ([A-Z][a-z]*). Files containing a zero byte are treated as
binary and skipped.

The report is written to worttokens.csv in the current directory:

    Token,Dateiname,HäufigkeitGesamt,HäufigkeitDatei

One row per token and file, with the token's total count across all files and
its count within that file.

Examples:
    worttokens ./docs
    worttokens -v ~/notes
"#
)]
pub struct Cli {
    /// Directory to scan.
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Quiet mode (no summary on stdout, errors only on stderr).
    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        long_help = "Suppress the completion summary on stdout and log errors only.\n\
The CSV report is still written."
    )]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        long_help = "Log every excluded or skipped file and run totals to stderr.\n\
This is intended for debugging and may produce a lot of output."
    )]
    pub verbose: bool,
}

/// One-line usage shown when no directory is given
pub fn usage() -> String {
    format!("Usage: {} <directory>", Cli::command().get_name())
}

pub fn run(cli: Cli) -> Result<()> {
    let Some(directory) = cli.directory else {
        println!("{}", usage());
        return Ok(());
    };

    crate::flows::report::run_report(&directory, cli.quiet)
}
