//! Flows module - Operations combining scanning, counting and output
//!
//! Provides:
//! - tally: Per-file and global token counting for one run
//! - report: The full scan -> tally -> CSV pipeline

pub mod report;
pub mod tally;
