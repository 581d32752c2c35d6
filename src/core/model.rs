//! Report data model
//!
//! A run produces one `CountRow` per (token, file) pair. Rows are collected
//! with a placeholder global count and only become a `Report` once every
//! file has been tallied.

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Header literals of the CSV report, in column order
pub const CSV_HEADER: [&str; 4] = ["Token", "Dateiname", "HäufigkeitGesamt", "HäufigkeitDatei"];

/// Token -> occurrences
pub type TokenCounts = HashMap<String, u64>;

/// One line of the report, serialized in `CSV_HEADER` column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow {
    pub token: String,

    /// Base name of the file, without directories
    pub filename: String,

    /// Occurrences across every processed file
    pub global_count: u64,

    /// Occurrences within this file only
    pub file_count: u64,
}

impl CountRow {
    /// Create a row whose global count is not known yet
    pub fn pending(token: impl Into<String>, filename: impl Into<String>, file_count: u64) -> Self {
        Self {
            token: token.into(),
            filename: filename.into(),
            global_count: 0,
            file_count,
        }
    }

    /// Sort key used for stable output: token, then filename, then file count
    fn sort_key(&self) -> (&str, &str, u64) {
        (&self.token, &self.filename, self.file_count)
    }
}

/// Finalized rows, ready to be written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub rows: Vec<CountRow>,
}

impl Report {
    /// Backfill global counts from the final tally and order rows
    pub fn finalize(mut rows: Vec<CountRow>, global: &TokenCounts) -> Self {
        for row in rows.iter_mut() {
            row.global_count = global.get(&row.token).copied().unwrap_or(0);
        }
        rows.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct tokens across all rows
    pub fn distinct_tokens(&self) -> usize {
        let mut tokens: Vec<&str> = self.rows.iter().map(|r| r.token.as_str()).collect();
        tokens.dedup();
        tokens.len()
    }
}

/// A file that was dropped during extraction
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// What a run did, reported after the CSV is written
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Candidate files found by the scan
    pub files_scanned: usize,
    /// Files whose tokens made it into the report
    pub files_processed: usize,
    /// Files dropped because they could not be read
    pub skipped: Vec<SkippedFile>,
    pub distinct_tokens: usize,
    pub rows_written: usize,
    pub output: PathBuf,
}
