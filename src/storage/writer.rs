//! Document log writer
//!
//! Appends records to the log file. Every append is flushed and
//! fsynced before returning, so an acknowledged write survives a
//! crash.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::errors::StorageResult;
use super::record::DocumentRecord;

/// Append-only writer for the document log
pub struct LogWriter {
    file: File,
    path: PathBuf,
}

impl LogWriter {
    /// Open the log for appending, creating it (and its parent
    /// directory) if missing.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self { file, path })
    }

    /// Append one record, durable on return
    pub fn append(&mut self, record: &DocumentRecord) -> StorageResult<()> {
        let bytes = record.serialize();
        self.file.write_all(&bytes)?;
        self.file.flush()?;
        self.file.sync_data()?;
        Ok(())
    }

    /// Path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/books.log");

        let writer = LogWriter::open(&path).unwrap();
        assert_eq!(writer.path(), path);
        assert!(path.exists());
    }

    #[test]
    fn test_append_grows_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.log");
        let mut writer = LogWriter::open(&path).unwrap();

        writer
            .append(&DocumentRecord::write("a", b"{}".to_vec()))
            .unwrap();
        let after_one = std::fs::metadata(&path).unwrap().len();

        writer.append(&DocumentRecord::tombstone("a")).unwrap();
        let after_two = std::fs::metadata(&path).unwrap().len();

        assert!(after_one > 0);
        assert!(after_two > after_one);
    }

    #[test]
    fn test_reopen_appends_rather_than_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.log");

        {
            let mut writer = LogWriter::open(&path).unwrap();
            writer
                .append(&DocumentRecord::write("a", b"{}".to_vec()))
                .unwrap();
        }
        let first_len = std::fs::metadata(&path).unwrap().len();

        {
            let mut writer = LogWriter::open(&path).unwrap();
            writer
                .append(&DocumentRecord::write("b", b"{}".to_vec()))
                .unwrap();
        }

        assert!(std::fs::metadata(&path).unwrap().len() > first_len);
    }
}
