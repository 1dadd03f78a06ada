//! Output store port.
//!
//! Persists the session's records to one artifact inside a fixed directory.

use std::path::{Path, PathBuf};

use crate::domain::ConversionRecord;

/// Error type for output persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Port trait for the output artifact.
#[async_trait::async_trait]
pub trait OutputStore: Send + Sync {
    /// Directory every output file lives in.
    fn directory(&self) -> &Path;

    /// Path written to when no conflict exists.
    fn default_target(&self) -> PathBuf;

    /// Maps a user-chosen file name into the output directory.
    ///
    /// Returns `None` unless `file_name` is a single plain path component.
    fn resolve(&self, file_name: &str) -> Option<PathBuf>;

    async fn exists(&self, path: &Path) -> Result<bool, StoreError>;

    /// Writes all records, replacing any existing file at `path`.
    async fn write(&self, path: &Path, records: &[ConversionRecord]) -> Result<(), StoreError>;
}
