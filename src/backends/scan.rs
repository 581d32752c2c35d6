//! File scanning backend
//!
//! Walks a directory tree with walkdir and keeps regular files that are within
//! the size cap and contain no zero byte. Anything that fails along the way is
//! excluded, never reported as an error.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::file_reader::{classify_content, ContentKind};

/// Why an entry was left out of the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    NotRegular,
    TooLarge,
    Binary,
    Unreadable,
}

/// Candidates plus counters of everything that was excluded
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Candidate files, sorted by path
    pub candidates: Vec<PathBuf>,
    pub not_regular: usize,
    pub too_large: usize,
    pub binary: usize,
    pub unreadable: usize,
}

impl ScanOutcome {
    fn exclude(&mut self, path: &Path, reason: Exclusion) {
        debug!(path = %path.display(), ?reason, "excluded from scan");
        match reason {
            Exclusion::NotRegular => self.not_regular += 1,
            Exclusion::TooLarge => self.too_large += 1,
            Exclusion::Binary => self.binary += 1,
            Exclusion::Unreadable => self.unreadable += 1,
        }
    }

    pub fn excluded(&self) -> usize {
        self.not_regular + self.too_large + self.binary + self.unreadable
    }
}

/// Decide whether a single path is a candidate
pub fn check_candidate(path: &Path, max_size: u64) -> Result<(), Exclusion> {
    // fs::metadata follows symlinks, so a link to a regular file counts as one
    let metadata = fs::metadata(path).map_err(|_| Exclusion::Unreadable)?;
    if !metadata.is_file() {
        return Err(Exclusion::NotRegular);
    }
    if metadata.len() > max_size {
        return Err(Exclusion::TooLarge);
    }
    match classify_content(path) {
        ContentKind::Text => Ok(()),
        ContentKind::Binary => Err(Exclusion::Binary),
        ContentKind::Unreadable => Err(Exclusion::Unreadable),
    }
}

/// Collect text files under `root` no larger than `max_size` bytes
pub fn list_text_files(root: &Path, max_size: u64) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                outcome.exclude(&path, Exclusion::Unreadable);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        match check_candidate(path, max_size) {
            Ok(()) => outcome.candidates.push(path.to_path_buf()),
            Err(reason) => outcome.exclude(path, reason),
        }
    }

    outcome.candidates.sort();
    outcome
}
