//! Core module - Data model, token extraction and file reading
//!
//! This module provides:
//! - Report rows and run summary (model)
//! - The fixed token pattern (tokenizer)
//! - Binary detection and text reading (file_reader)
//! - Path display helpers (paths)

pub mod file_reader;
pub mod model;
pub mod paths;
pub mod tokenizer;
