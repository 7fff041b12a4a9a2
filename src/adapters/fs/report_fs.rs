//! Implements ReportPort by writing pretty-printed JSON reports to disk.

use crate::domain::{AtsReport, DomainError};
use crate::ports::ReportPort;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

/// Writes `ats-report-<date>.json` files into a configured directory,
/// creating it on demand.
pub struct FsReportWriter {
    reports_dir: PathBuf,
}

impl FsReportWriter {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }
}

#[async_trait::async_trait]
impl ReportPort for FsReportWriter {
    async fn save(&self, report: &AtsReport) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.reports_dir)
            .await
            .map_err(|e| DomainError::Report(format!("failed to create reports dir: {}", e)))?;

        let path = self.reports_dir.join(report.file_name());
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| DomainError::Report(format!("failed to serialize report: {}", e)))?;

        fs::write(&path, json)
            .await
            .map_err(|e| DomainError::Report(format!("failed to write report: {}", e)))?;

        info!(path = %path.display(), "report saved");
        Ok(path)
    }
}
