//! Report flow - scan, tally and write in one run
//!
//! Files are processed sequentially in sorted path order. Read failures during
//! extraction skip the file; only a failure to write the CSV ends the run.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::backends::csv_report::{write_report, DEFAULT_OUTPUT};
use crate::backends::scan::list_text_files;
use crate::core::file_reader::DEFAULT_MAX_FILE_SIZE;
use crate::core::model::RunSummary;
use crate::flows::tally::TokenTally;

/// Inputs of a single run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub root: PathBuf,
    /// Largest file size (bytes) that is still scanned
    pub max_size: u64,
    pub output: PathBuf,
}

impl ReportConfig {
    /// Fixed 500 KiB cap, `worttokens.csv` in the working directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_size: DEFAULT_MAX_FILE_SIZE,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Build and write the report described by `config`
pub fn build_report(config: &ReportConfig) -> Result<RunSummary> {
    if !config.root.is_dir() {
        bail!("Not a directory: {}", config.root.display());
    }

    let scan = list_text_files(&config.root, config.max_size);
    info!(
        candidates = scan.candidates.len(),
        excluded = scan.excluded(),
        "scan complete"
    );

    let mut tally = TokenTally::new();
    for path in &scan.candidates {
        tally.process_file(path);
    }
    let result = tally.finish();

    if result.report.is_empty() {
        warn!(root = %config.root.display(), "no tokens found");
    }

    write_report(&result.report, &config.output)
        .with_context(|| format!("Failed to write report {}", config.output.display()))?;
    info!(rows = result.report.len(), output = %config.output.display(), "report written");

    Ok(RunSummary {
        files_scanned: scan.candidates.len(),
        files_processed: result.processed,
        distinct_tokens: result.report.distinct_tokens(),
        rows_written: result.report.len(),
        skipped: result.skipped,
        output: config.output.clone(),
    })
}

/// Run the report for `root` with the fixed defaults and print a summary
pub fn run_report(root: &Path, quiet: bool) -> Result<()> {
    let summary = build_report(&ReportConfig::new(root))?;
    info!(
        processed = summary.files_processed,
        tokens = summary.distinct_tokens,
        rows = summary.rows_written,
        "run complete"
    );

    if !quiet {
        println!("CSV erzeugt: {}", summary.output.display());
        if !summary.skipped.is_empty() {
            println!(
                "{} von {} Dateien übersprungen (nicht lesbar)",
                summary.skipped.len(),
                summary.files_scanned
            );
            for skipped in &summary.skipped {
                println!("  {}: {}", skipped.path.display(), skipped.reason);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn config_in(root: &Path, out_dir: &Path) -> ReportConfig {
        ReportConfig {
            output: out_dir.join(DEFAULT_OUTPUT),
            ..ReportConfig::new(root)
        }
    }

    #[test]
    fn test_default_config() {
        let config = ReportConfig::new("docs");
        assert_eq!(config.max_size, 512_000);
        assert_eq!(config.output, PathBuf::from("worttokens.csv"));
    }

    #[test]
    fn test_build_report_end_to_end() {
        let input = tempdir().unwrap();
        let out = tempdir().unwrap();
        fs::create_dir(input.path().join("sub")).unwrap();
        fs::write(input.path().join("a.txt"), "Hallo Welt").unwrap();
        fs::write(input.path().join("sub/b.txt"), "Welt\nWelt").unwrap();
        fs::write(input.path().join("c.bin"), b"Binary\0Data").unwrap();

        let summary = build_report(&config_in(input.path(), out.path())).unwrap();
        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.files_processed, 2);
        assert_eq!(summary.distinct_tokens, 2);
        assert_eq!(summary.rows_written, 3);
        assert!(summary.skipped.is_empty());

        let csv = fs::read_to_string(out.path().join(DEFAULT_OUTPUT)).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Token,Dateiname,HäufigkeitGesamt,HäufigkeitDatei",
                "Hallo,a.txt,1,1",
                "Welt,a.txt,3,1",
                "Welt,b.txt,3,2",
            ]
        );
    }

    #[test]
    fn test_build_report_is_repeatable() {
        let input = tempdir().unwrap();
        let out = tempdir().unwrap();
        for (name, text) in [("x.txt", "Zeta Alpha"), ("y.txt", "Alpha Beta"), ("z.md", "Beta")] {
            fs::write(input.path().join(name), text).unwrap();
        }
        let config = config_in(input.path(), out.path());

        build_report(&config).unwrap();
        let first = fs::read(&config.output).unwrap();
        build_report(&config).unwrap();
        let second = fs::read(&config.output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_report_rejects_missing_root() {
        let out = tempdir().unwrap();
        let missing = out.path().join("does-not-exist");
        let err = build_report(&config_in(&missing, out.path())).unwrap_err();
        assert!(err.to_string().contains("Not a directory"));
        assert!(!out.path().join(DEFAULT_OUTPUT).exists());
    }

    #[test]
    fn test_build_report_write_failure_is_fatal() {
        let input = tempdir().unwrap();
        fs::write(input.path().join("a.txt"), "Hallo").unwrap();
        let config = ReportConfig {
            output: input.path().join("missing-dir").join(DEFAULT_OUTPUT),
            ..ReportConfig::new(input.path())
        };
        let err = build_report(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to write report"));
    }
}
