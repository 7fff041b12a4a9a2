//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/filesystem types here — these are mapped from adapters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::DomainError;

/// Uploads larger than this are rejected before any encoding happens.
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// Media kind of a candidate resume file, inferred from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Pdf,
    PlainText,
    Unsupported,
}

impl MediaKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => Self::Pdf,
            Some("txt") | Some("text") => Self::PlainText,
            _ => Self::Unsupported,
        }
    }

    /// MIME type sent to the provider. None for kinds the validator rejects.
    pub fn mime(&self) -> Option<&'static str> {
        match self {
            Self::Pdf => Some("application/pdf"),
            Self::PlainText => Some("text/plain"),
            Self::Unsupported => None,
        }
    }
}

/// A resume file the user selected, before or after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub file_name: String,
    pub path: PathBuf,
    pub media: MediaKind,
    pub size_bytes: u64,
}

impl ResumeUpload {
    /// Gate for accepting a selected file: PDF or plain text, at most 5 MiB.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.media.mime().is_none() {
            return Err(DomainError::InvalidFile(
                "Please upload a PDF or Text file.".to_string(),
            ));
        }
        if self.size_bytes > MAX_RESUME_BYTES {
            return Err(DomainError::InvalidFile(
                "File size must be less than 5MB.".to_string(),
            ));
        }
        Ok(())
    }

    /// Size in KB with one decimal, for the selection summary line.
    pub fn size_kb(&self) -> String {
        format!("{:.1} KB", self.size_bytes as f64 / 1024.0)
    }
}

/// Presence check for one canonical resume section (Summary, Experience, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCheck {
    pub name: String,
    pub found: bool,
    pub message: String,
}

/// Per-dimension sub-scores. The provider bounds each component independently;
/// their sum is not required to equal the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub keyword_score: u8,
    pub section_score: u8,
    pub length_score: u8,
}

/// Result of one AI analysis run. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: u8,
    pub score_breakdown: ScoreBreakdown,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub sections: Vec<SectionCheck>,
    pub suggestions: Vec<String>,
    pub word_count: u32,
}

impl AnalysisResult {
    /// Range checks on the declared score bounds: score 0-100, keyword 0-50,
    /// section 0-30, length 0-20. Anything outside is a schema violation.
    pub fn check_bounds(&self) -> Result<(), String> {
        if self.score > 100 {
            return Err(format!("score {} exceeds 100", self.score));
        }
        let b = &self.score_breakdown;
        if b.keyword_score > 50 {
            return Err(format!("keywordScore {} exceeds 50", b.keyword_score));
        }
        if b.section_score > 30 {
            return Err(format!("sectionScore {} exceeds 30", b.section_score));
        }
        if b.length_score > 20 {
            return Err(format!("lengthScore {} exceeds 20", b.length_score));
        }
        Ok(())
    }
}

/// Downloadable report. A renamed reshaping of `AnalysisResult` plus a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtsReport {
    pub date: DateTime<Utc>,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub sections: Vec<SectionCheck>,
    pub suggestions: Vec<String>,
}

impl AtsReport {
    pub fn from_result(result: &AnalysisResult, date: DateTime<Utc>) -> Self {
        Self {
            date,
            score: result.score,
            breakdown: result.score_breakdown,
            found_keywords: result.matched_keywords.clone(),
            missing_keywords: result.missing_keywords.clone(),
            sections: result.sections.clone(),
            suggestions: result.suggestions.clone(),
        }
    }

    /// `ats-report-<ISO-date>.json`
    pub fn file_name(&self) -> String {
        format!("ats-report-{}.json", self.date.format("%Y-%m-%d"))
    }
}

/// Presentation theme. Process-wide setting with a single writer (the toggle).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
