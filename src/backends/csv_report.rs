//! CSV report writer
//!
//! Fields are joined with plain commas (no quoting) and each record ends with
//! the platform's line terminator. The destination is overwritten.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::model::{Report, CSV_HEADER};

/// Default report file name, created in the current working directory
pub const DEFAULT_OUTPUT: &str = "worttokens.csv";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot create report file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write report file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[cfg(windows)]
fn line_terminator() -> Terminator {
    Terminator::CRLF
}

#[cfg(not(windows))]
fn line_terminator() -> Terminator {
    Terminator::Any(b'\n')
}

fn builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(line_terminator());
    builder
}

/// Write the header and every row of `report` to `out`
pub fn write_report_to<W: Write>(report: &Report, out: W) -> csv::Result<()> {
    let mut writer = builder().from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for row in &report.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `report` to the file at `path`, replacing any existing file
pub fn write_report(report: &Report, path: &Path) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    write_report_to(report, file).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
