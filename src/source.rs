use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Default todo file, resolved against the current working directory.
pub const DEFAULT_TODO_FILE: &str = "test";

/// Failures reading a todo source other than it being absent
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read todo file at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("todo file at {} is not valid UTF-8", path.display())]
    InvalidUtf8 { path: PathBuf },
}

/// Somewhere todo text can be read from.
///
/// `Ok(None)` means the source does not exist, which callers treat as an
/// empty list rather than a failure.
pub trait TodoSource {
    fn read(&self) -> Result<Option<String>, SourceError>;

    /// Human readable location used in log records
    fn describe(&self) -> String;
}

/// Reads todos from a file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(DEFAULT_TODO_FILE)
    }
}

impl TodoSource for FileSource {
    fn read(&self) -> Result<Option<String>, SourceError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                debug!(path = %self.path.display(), bytes = content.len(), "read todo file");
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "todo file not found");
                Ok(None)
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(SourceError::InvalidUtf8 {
                path: self.path.clone(),
            }),
            Err(source) => Err(SourceError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory source, `None` behaves like a missing file
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    content: Option<String>,
}

impl MemorySource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn missing() -> Self {
        Self { content: None }
    }
}

impl TodoSource for MemorySource {
    fn read(&self) -> Result<Option<String>, SourceError> {
        Ok(self.content.clone())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path().join("test"));
        assert!(source.read().unwrap().is_none());
    }

    #[test]
    fn existing_file_reads_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test");
        fs::write(&path, "buy milk\n").unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.read().unwrap().as_deref(), Some("buy milk\n"));
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = FileSource::new(&path).read().unwrap_err();
        assert!(matches!(err, SourceError::InvalidUtf8 { .. }));
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = FileSource::new(dir.path()).read().unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read todo file at"));
    }

    #[test]
    fn default_source_points_at_test() {
        assert_eq!(FileSource::default().path(), Path::new("test"));
    }

    #[test]
    fn memory_source() {
        assert_eq!(MemorySource::new("a").read().unwrap().as_deref(), Some("a"));
        assert!(MemorySource::missing().read().unwrap().is_none());
    }
}
