use crate::error::{StorageError, StorageResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Flat on-disk store for relayed PDF files.
#[derive(Clone, Debug)]
pub struct PdfStore {
    base_path: PathBuf,
}

impl PdfStore {
    /// Create a new store rooted at `base_path`, creating the directory if needed.
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(PdfStore { base_path })
    }

    /// Convert a filename to a filesystem path with traversal validation.
    ///
    /// Tokens are issued without inspecting the filename, so a hostile name can
    /// reach download/delete with a valid token. The check here is what keeps
    /// every code path inside the storage directory.
    fn file_path(&self, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty()
            || filename.contains("..")
            || filename.contains('/')
            || filename.contains('\\')
        {
            return Err(StorageError::InvalidKey(
                "Filename contains invalid characters".to_string(),
            ));
        }

        Ok(self.base_path.join(filename))
    }

    /// Write `data` under `filename`. Last write wins.
    pub async fn write(&self, filename: &str, data: &[u8]) -> StorageResult<()> {
        let path = self.file_path(filename)?;

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            size_bytes = data.len(),
            "PDF stored"
        );

        Ok(())
    }

    /// Read the file stored under `filename`.
    pub async fn read(&self, filename: &str) -> StorageResult<Vec<u8>> {
        let path = self.file_path(filename)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(filename.to_string()));
        }

        let data = fs::read(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Ok(data)
    }

    /// Delete the file stored under `filename`. Absence is not an error.
    pub async fn delete(&self, filename: &str) -> StorageResult<()> {
        let path = self.file_path(filename)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(());
        }

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), "PDF deleted");

        Ok(())
    }

    /// Whether a file exists under `filename`.
    pub async fn exists(&self, filename: &str) -> StorageResult<bool> {
        let path = self.file_path(filename)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
