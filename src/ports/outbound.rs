//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{AnalysisResult, AtsReport, DomainError, MediaKind, ResumeUpload};
use std::path::{Path, PathBuf};

/// AI analysis gateway. One-shot call to the generative endpoint: resume
/// payload inline, fixed prompt, declared response schema. No retry, no
/// timeout enforcement; a single network attempt per invocation.
#[async_trait::async_trait]
pub trait AiPort: Send + Sync {
    /// Score the resume against the job description.
    ///
    /// `resume_base64` is the raw encoded file content (no data-URI prefix).
    async fn analyze(
        &self,
        resume_base64: &str,
        media: MediaKind,
        job_description: &str,
    ) -> Result<AnalysisResult, DomainError>;
}

/// Resume file access. Inspection for the validator, encoding for the request.
#[async_trait::async_trait]
pub trait ResumeStorePort: Send + Sync {
    /// Stat the file and infer its media kind. Does not validate.
    async fn inspect(&self, path: &Path) -> Result<ResumeUpload, DomainError>;

    /// Read the file and base64-encode its bytes (standard alphabet,
    /// no transport-scheme prefix). Read errors propagate as `Encode`.
    async fn encode(&self, upload: &ResumeUpload) -> Result<String, DomainError>;
}

/// Report sink. Persists a derived report for the user.
#[async_trait::async_trait]
pub trait ReportPort: Send + Sync {
    /// Write the report; returns the path it was saved to.
    async fn save(&self, report: &AtsReport) -> Result<PathBuf, DomainError>;
}
