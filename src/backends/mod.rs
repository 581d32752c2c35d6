//! Backends module - Filesystem input and report output
//!
//! Provides:
//! - scan: Candidate file discovery with walkdir
//! - csv_report: CSV report writing

pub mod csv_report;
pub mod scan;
