//! Desktop platform implementations
//!
//! Provides the file-backed document store used by the desktop player.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use directories::UserDirs;

use crate::ports::outbound::{DocumentStorePort, StoreError};

/// Desktop document store with file-based persistence
///
/// Sheets are stored as plain files under a base directory:
/// - Linux: ~/Documents/<name> (or the XDG documents dir)
/// - macOS: ~/Documents/<name>
/// - Windows: C:\Users\<User>\Documents\<name>
///
/// An absolute `name` bypasses the base directory.
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    base_dir: PathBuf,
}

impl FileDocumentStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The user's documents directory, or the current directory if the
    /// platform has none.
    pub fn default_base_dir() -> PathBuf {
        UserDirs::new()
            .and_then(|dirs| dirs.document_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Full path a name resolves to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    let location = path.display().to_string();
    if source.kind() == ErrorKind::NotFound {
        StoreError::NotFound(location)
    } else {
        StoreError::Io { location, source }
    }
}

#[async_trait]
impl DocumentStorePort for FileDocumentStore {
    async fn read_bytes(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.path_for(name);
        tracing::debug!("Reading character sheet from {:?}", path);
        tokio::fs::read(&path)
            .await
            .map_err(|source| io_error(&path, source))
    }

    async fn write_bytes(&self, name: &str, bytes: &[u8]) -> Result<String, StoreError> {
        let path = self.path_for(name);

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| io_error(parent, source))?;
        }

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| io_error(&path, source))?;
        tracing::debug!("Wrote {} bytes to {:?}", bytes.len(), path);
        Ok(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_then_read_returns_the_same_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileDocumentStore::new(dir.path());

        let location = store
            .write_bytes("character.json", b"{\"attacks\": []}")
            .await
            .expect("write");
        let bytes = store.read_bytes("character.json").await.expect("read");

        assert_eq!(bytes, b"{\"attacks\": []}");
        assert!(location.ends_with("character.json"));
    }

    #[tokio::test]
    async fn write_creates_missing_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileDocumentStore::new(dir.path().join("sheets").join("campaign"));

        store.write_bytes("mira.json", b"{}").await.expect("write");

        assert!(dir.path().join("sheets/campaign/mira.json").exists());
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileDocumentStore::new(dir.path());

        let err = store.read_bytes("nope.json").await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn absolute_names_bypass_the_base_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileDocumentStore::new("/somewhere/else");
        let absolute = dir.path().join("x.json");

        assert_eq!(store.path_for(&absolute.display().to_string()), absolute);
    }
}
