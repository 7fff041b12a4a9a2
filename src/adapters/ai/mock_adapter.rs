//! Mock AI adapter for testing without API calls.
//!
//! Returns hardcoded responses for development and testing purposes.

use crate::domain::{AnalysisResult, DomainError, MediaKind, ScoreBreakdown, SectionCheck};
use crate::ports::AiPort;
use std::time::Duration;
use tracing::info;

/// Mock AI adapter.
///
/// Returns a predetermined analysis without making API calls.
/// Simulates network latency with configurable delay.
pub struct MockAiAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockAiAdapter {
    /// Create a new mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AiPort for MockAiAdapter {
    async fn analyze(
        &self,
        resume_base64: &str,
        media: MediaKind,
        job_description: &str,
    ) -> Result<AnalysisResult, DomainError> {
        info!(
            ?media,
            payload_len = resume_base64.len(),
            jd_len = job_description.len(),
            "[MOCK] Simulating AI analysis"
        );

        // Simulate network delay
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        // Rough payload-derived word count so the output varies with input.
        let word_count = (resume_base64.len() / 8) as u32;

        Ok(AnalysisResult {
            score: 72,
            score_breakdown: ScoreBreakdown {
                keyword_score: 35,
                section_score: 25,
                length_score: 12,
            },
            matched_keywords: vec![
                "[MOCK] communication".to_string(),
                "[MOCK] teamwork".to_string(),
            ],
            missing_keywords: vec!["[MOCK] a keyword from the job description".to_string()],
            sections: vec![
                SectionCheck {
                    name: "Summary".to_string(),
                    found: true,
                    message: "[MOCK] Present".to_string(),
                },
                SectionCheck {
                    name: "Experience".to_string(),
                    found: true,
                    message: "[MOCK] Present".to_string(),
                },
                SectionCheck {
                    name: "Education".to_string(),
                    found: true,
                    message: "[MOCK] Present".to_string(),
                },
                SectionCheck {
                    name: "Skills".to_string(),
                    found: false,
                    message: "[MOCK] Not detected".to_string(),
                },
            ],
            suggestions: vec![
                "[MOCK] Configure a real AI API key to get genuine analysis".to_string(),
                "[MOCK] Add a dedicated Skills section".to_string(),
            ],
            word_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_adapter() {
        let adapter = MockAiAdapter::with_delay(10);
        let result = adapter
            .analyze("c29tZSByZXN1bWU=", MediaKind::PlainText, "Rust engineer")
            .await
            .unwrap();

        assert_eq!(result.score, 72);
        assert!(result.check_bounds().is_ok());
        assert_eq!(result.sections.len(), 4);
        assert!(!result.suggestions.is_empty());
    }
}
