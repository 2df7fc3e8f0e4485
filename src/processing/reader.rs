//! Bounded file reading with lossy UTF-8 decoding.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, warn};

use crate::DEFAULT_MAX_FILE_SIZE;

/// Failure to read a file's content.
#[derive(Debug, Error)]
#[error("{path}: {source}")]
pub struct ReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Text read from a file, possibly truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    /// Decoded text. Invalid sequences are replaced with U+FFFD.
    pub text: String,
    /// Number of bytes read from disk.
    pub bytes_read: usize,
    /// Size of the file on disk.
    pub file_size: u64,
    /// Whether the read stopped at the size ceiling.
    pub truncated: bool,
}

impl FileContent {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Reads file content up to a byte ceiling.
#[derive(Debug, Clone)]
pub struct ContentReader {
    max_size: usize,
}

impl Default for ContentReader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_SIZE)
    }
}

impl ContentReader {
    pub fn new(max_size: usize) -> Self {
        Self { max_size }
    }

    /// Read `path`, stopping after `max_size` bytes.
    pub fn read(&self, path: &Path) -> Result<FileContent, ReadError> {
        self.read_inner(path).map_err(|source| {
            error!(path = %path.display(), error = %source, "Error reading file");
            ReadError {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    fn read_inner(&self, path: &Path) -> io::Result<FileContent> {
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();
        let truncated = file_size > self.max_size as u64;

        if truncated {
            warn!(
                path = %path.display(),
                file_size,
                max_size = self.max_size,
                "File too large, truncating"
            );
        }

        let mut bytes = Vec::with_capacity(file_size.min(self.max_size as u64) as usize);
        file.take(self.max_size as u64).read_to_end(&mut bytes)?;

        Ok(FileContent {
            bytes_read: bytes.len(),
            text: decode_lossy(bytes),
            file_size,
            truncated,
        })
    }
}

/// Decode bytes as UTF-8, replacing invalid sequences.
fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_reads_whole_small_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("main.py");
        fs::write(&path, "print('hi')\n").unwrap();

        let content = ContentReader::default().read(&path).unwrap();

        assert_eq!(content.text, "print('hi')\n");
        assert_eq!(content.bytes_read, 12);
        assert_eq!(content.file_size, 12);
        assert!(!content.truncated);
    }

    #[test]
    fn test_truncates_at_ceiling() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.txt");
        fs::write(&path, "x".repeat(5000)).unwrap();

        let content = ContentReader::new(1024).read(&path).unwrap();

        assert!(content.truncated);
        assert_eq!(content.bytes_read, 1024);
        assert_eq!(content.text.len(), 1024);
        assert_eq!(content.file_size, 5000);
    }

    #[test]
    fn test_file_exactly_at_ceiling_is_not_truncated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edge.txt");
        fs::write(&path, "y".repeat(64)).unwrap();

        let content = ContentReader::new(64).read(&path).unwrap();

        assert!(!content.truncated);
        assert_eq!(content.text.len(), 64);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin.txt");
        fs::write(&path, b"caf\xe9 bar").unwrap();

        let content = ContentReader::default().read(&path).unwrap();

        assert_eq!(content.text, "caf\u{FFFD} bar");
    }

    #[test]
    fn test_missing_file_is_an_error_not_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.rs");

        let err = ContentReader::default().read(&path).unwrap_err();

        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_empty_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.md");
        fs::write(&path, "").unwrap();

        let content = ContentReader::default().read(&path).unwrap();

        assert!(content.is_empty());
        assert!(!content.truncated);
    }
}
