//! File reading utilities

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::error::CliError;

/// Opens input files for the normalizer
pub struct FileReader;

impl FileReader {
    /// Open a file for buffered, in-order reading
    pub fn open(path: &Path) -> Result<BufReader<File>> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        Ok(BufReader::new(file))
    }

    /// Read a whole file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
