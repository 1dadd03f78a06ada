//! JSON output directory adapter.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use conversion_types::{ConversionRecord, OutputStore, StoreError};

/// File written when the user is not asked for another name.
pub const DEFAULT_FILE_NAME: &str = "conversions.json";

/// Writes records as a pretty-printed JSON array inside one directory.
///
/// `serde_json`'s pretty printer indents with two spaces and leaves
/// non-ASCII characters unescaped.
#[derive(Debug, Clone)]
pub struct JsonOutputDir {
    dir: PathBuf,
}

impl JsonOutputDir {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl OutputStore for JsonOutputDir {
    fn directory(&self) -> &Path {
        &self.dir
    }

    fn default_target(&self) -> PathBuf {
        self.dir.join(DEFAULT_FILE_NAME)
    }

    fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        let candidate = Path::new(file_name);
        let mut components = candidate.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == candidate.as_os_str() => {
                Some(self.dir.join(name))
            }
            _ => None,
        }
    }

    async fn exists(&self, path: &Path) -> Result<bool, StoreError> {
        tokio::fs::try_exists(path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
    }

    #[tracing::instrument(
        skip(self, records),
        fields(path = %path.display(), count = records.len())
    )]
    async fn write(&self, path: &Path, records: &[ConversionRecord]) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(records)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(path, body)
            .await
            .map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!("Wrote {} conversions", records.len());
        Ok(())
    }
}
