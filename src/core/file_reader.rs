//! File content checks and text reading
//!
//! Provides:
//! - Binary detection (a single zero byte anywhere makes a file binary)
//! - Lossy UTF-8 reading for token extraction

use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default maximum file size in bytes (500 KiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 500 * 1024;

/// How a file's content was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    /// Contains at least one zero byte
    Binary,
    /// Could not be opened or read
    Unreadable,
}

/// Classify a file by reading all of its bytes once
pub fn classify_content(path: &Path) -> ContentKind {
    match read_bytes(path) {
        Ok(bytes) if bytes.contains(&0) => ContentKind::Binary,
        Ok(_) => ContentKind::Text,
        Err(_) => ContentKind::Unreadable,
    }
}

/// Read a file as text, replacing invalid UTF-8 sequences
pub fn read_text_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = read_bytes(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

fn read_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = fs::File::open(path)?;
    let size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);
    let mut reader = BufReader::new(file);
    let mut buffer = Vec::with_capacity(size);
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}
