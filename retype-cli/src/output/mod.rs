//! Output file handling

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Creates and replaces output files
pub struct FileWriter;

impl FileWriter {
    /// Create the output file, truncating any previous content
    pub fn create(path: &Path) -> Result<BufWriter<File>> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;

        Ok(BufWriter::new(file))
    }

    /// Replace the whole content of `path`.
    ///
    /// The new content is staged in a sibling temporary file and renamed over
    /// `path`, so a failed write leaves the old file intact.
    pub fn overwrite(path: &Path, content: &str) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to stage output in {}", dir.display()))?;
        staged
            .write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to {}", path.display()))?;
        staged
            .persist(path)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output.txt");
        fs::write(&path, "stale content from an earlier run").unwrap();

        let mut writer = FileWriter::create(&path).unwrap();
        writer.write_all(b"Fresh.  ").unwrap();
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(fs::read_to_string(&path).unwrap(), "Fresh.  ");
    }

    #[test]
    fn test_create_in_missing_directory() {
        let err = FileWriter::create(Path::new("/nonexistent/dir/output.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to create output file"));
    }

    #[test]
    fn test_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output.txt");
        fs::write(&path, "Hello.  ").unwrap();

        FileWriter::overwrite(&path, "Bonjour.  ").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Bonjour.  ");
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_overwrite_leaves_target_and_no_stray_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output.txt");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "kept").unwrap();

        let err = FileWriter::overwrite(&path, "Bonjour.  ").unwrap_err();

        assert!(err.to_string().contains("Failed to write to"));
        assert_eq!(fs::read_to_string(path.join("keep.txt")).unwrap(), "kept");
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }
}
