//! Implements ResumeStorePort over the local filesystem.
//!
//! Inspection stats the file and infers its media kind from the extension;
//! encoding reads the bytes asynchronously and base64-encodes them with the
//! standard alphabet. The payload carries no data-URI prefix.

use crate::domain::{DomainError, MediaKind, ResumeUpload};
use crate::ports::ResumeStorePort;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;
use tokio::fs;
use tracing::debug;

pub struct FsResumeStore;

#[async_trait::async_trait]
impl ResumeStorePort for FsResumeStore {
    async fn inspect(&self, path: &Path) -> Result<ResumeUpload, DomainError> {
        let meta = fs::metadata(path)
            .await
            .map_err(|e| DomainError::Input(format!("cannot read {}: {}", path.display(), e)))?;
        if !meta.is_file() {
            return Err(DomainError::Input(format!(
                "{} is not a regular file",
                path.display()
            )));
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(ResumeUpload {
            file_name,
            media: MediaKind::from_path(path),
            path: path.to_path_buf(),
            size_bytes: meta.len(),
        })
    }

    async fn encode(&self, upload: &ResumeUpload) -> Result<String, DomainError> {
        let bytes = fs::read(&upload.path)
            .await
            .map_err(|e| DomainError::Encode(e.to_string()))?;
        debug!(
            file = %upload.file_name,
            bytes = bytes.len(),
            "resume read for encoding"
        );
        Ok(STANDARD.encode(bytes))
    }
}
