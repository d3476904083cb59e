//! Blob storage for uploaded CV files.
//!
//! Files land in a flat directory under random names; the original file
//! extension is preserved so downloads keep a usable type hint.

use std::path::{Path, PathBuf};

use tutorhub_core::errors::{TutorError, TutorResult};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct FileStore {
    upload_dir: PathBuf,
}

impl FileStore {
    pub fn new(upload_dir: impl AsRef<Path>) -> Self {
        Self {
            upload_dir: upload_dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        self.upload_dir.join(file_name)
    }

    /// Stores the bytes under a random name, keeping the extension of
    /// `original_name` if it has one. Returns the stored name.
    pub async fn store(&self, bytes: &[u8], original_name: &str) -> TutorResult<String> {
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| TutorError::Internal(Box::new(e)))?;

        let extension = match original_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => format!(".{ext}"),
            _ => String::new(),
        };
        let file_name = format!("{}{}", Uuid::new_v4(), extension);

        tokio::fs::write(self.path_for(&file_name), bytes)
            .await
            .map_err(|e| TutorError::Internal(Box::new(e)))?;

        tracing::info!("File stored successfully: {}", file_name);
        Ok(file_name)
    }

    pub async fn retrieve(&self, file_name: &str) -> TutorResult<Vec<u8>> {
        let path = self.path_for(file_name);

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(TutorError::NotFound(
                format!("File not found: {file_name}"),
            )),
            Err(e) => Err(TutorError::Internal(Box::new(e))),
        }
    }

    pub async fn delete(&self, file_name: &str) -> TutorResult<()> {
        let path = self.path_for(file_name);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!("File deleted successfully: {}", file_name);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(TutorError::NotFound(
                format!("File not found: {file_name}"),
            )),
            Err(e) => Err(TutorError::Internal(Box::new(e))),
        }
    }

    /// Public download URL for a stored file.
    pub fn url_for(&self, file_name: &str) -> String {
        format!("/api/public/files/download/{file_name}")
    }
}
