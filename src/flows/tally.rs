//! Token tally - the aggregation context of a run
//!
//! Pass 1 feeds files through `TokenTally::process_file`, which counts tokens
//! per file and globally and appends rows with a pending global count.
//! Pass 2 is `TokenTally::finish`, which backfills the global counts once the
//! tally is complete.

use std::path::Path;
use tracing::warn;

use crate::core::file_reader::read_text_lossy;
use crate::core::model::{CountRow, Report, SkippedFile, TokenCounts};
use crate::core::paths::base_name;
use crate::core::tokenizer::count_tokens;

/// Per-file and global token counts for one run
#[derive(Debug, Default)]
pub struct TokenTally {
    global: TokenCounts,
    rows: Vec<CountRow>,
    processed: usize,
    skipped: Vec<SkippedFile>,
}

impl TokenTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the tokens of already-read text as if it came from `path`
    pub fn add_text(&mut self, path: &Path, text: &str) {
        let mut file_counts = TokenCounts::new();
        count_tokens(text, &mut file_counts);

        let filename = base_name(path);
        for (token, count) in file_counts {
            *self.global.entry(token.clone()).or_insert(0) += count;
            self.rows.push(CountRow::pending(token, filename.clone(), count));
        }
        self.processed += 1;
    }

    /// Read and count one file; an unreadable file is logged and skipped
    pub fn process_file(&mut self, path: &Path) {
        match read_text_lossy(path) {
            Ok(text) => self.add_text(path, &text),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable file");
                self.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Total occurrences of `token` so far
    #[cfg(test)]
    pub fn global_count(&self, token: &str) -> u64 {
        self.global.get(token).copied().unwrap_or(0)
    }

    /// Finalize the report: backfill global counts into every row
    pub fn finish(self) -> TallyResult {
        TallyResult {
            report: Report::finalize(self.rows, &self.global),
            processed: self.processed,
            skipped: self.skipped,
        }
    }
}

/// Output of a finished tally
#[derive(Debug)]
pub struct TallyResult {
    pub report: Report,
    pub processed: usize,
    pub skipped: Vec<SkippedFile>,
}
