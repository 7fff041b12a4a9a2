//! Gemini adapter for AI resume analysis.
//!
//! Implements `AiPort` against a `generateContent`-style endpoint: the resume
//! travels inline (base64) next to a fixed instructional prompt, and a
//! response schema constrains the model to structurally valid JSON. The reply
//! is still re-validated here — missing or mistyped fields and out-of-range
//! scores are a malformed response, distinct from transport failures.

use crate::domain::{AnalysisResult, DomainError, MediaKind};
use crate::ports::AiPort;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

/// Gemini generateContent adapter.
///
/// Works with the Google generative-language REST API or any endpoint that
/// speaks the same request/response shape.
pub struct GeminiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl GeminiAdapter {
    /// Create a new Gemini adapter.
    ///
    /// # Arguments
    /// * `api_url` - Models base URL (e.g. "https://generativelanguage.googleapis.com/v1beta/models")
    /// * `api_key` - Provider API key
    /// * `model` - Model name (e.g. "gemini-2.5-flash")
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
        }
    }

    /// Fixed instructional prompt embedding the job description.
    fn prompt(job_description: &str) -> String {
        format!(
            "You are an expert ATS (Applicant Tracking System) and Career Coach.\n\
             Analyze the attached resume against the provided Job Description.\n\n\
             Job Description:\n{job_description}\n\n\
             Task:\n\
             1. Extract keywords from the Job Description.\n\
             2. Check if these keywords exist in the Resume.\n\
             3. Identify missing critical keywords.\n\
             4. Check for standard resume sections (Summary, Experience, Education, Skills).\n\
             5. Evaluate the resume length and content density.\n\
             6. Provide a score from 0-100 based on the match.\n\
             7. Provide specific, actionable suggestions to improve the resume for this specific job.\n\n\
             Output strict JSON adhering to the defined schema."
        )
    }

    /// Declared output schema. Field names, types, and required-ness mirror
    /// `AnalysisResult`; the provider is constrained to this shape.
    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "score": { "type": "INTEGER", "description": "Overall match score 0-100" },
                "scoreBreakdown": {
                    "type": "OBJECT",
                    "properties": {
                        "keywordScore": { "type": "INTEGER", "description": "Score out of 50 for keywords" },
                        "sectionScore": { "type": "INTEGER", "description": "Score out of 30 for sections" },
                        "lengthScore": { "type": "INTEGER", "description": "Score out of 20 for length" }
                    },
                    "required": ["keywordScore", "sectionScore", "lengthScore"]
                },
                "matchedKeywords": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Keywords found in both JD and Resume"
                },
                "missingKeywords": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Important keywords from JD missing in Resume"
                },
                "sections": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": { "type": "STRING" },
                            "found": { "type": "BOOLEAN" },
                            "message": { "type": "STRING" }
                        },
                        "required": ["name", "found", "message"]
                    }
                },
                "suggestions": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "Actionable advice to improve the score"
                },
                "wordCount": { "type": "INTEGER", "description": "Estimated word count of resume" }
            },
            "required": [
                "score", "scoreBreakdown", "matchedKeywords", "missingKeywords",
                "sections", "suggestions", "wordCount"
            ]
        })
    }

    /// Sanitize JSON response from the LLM.
    ///
    /// LLMs sometimes wrap JSON in markdown code blocks. This strips them.
    fn sanitize_json(raw_text: &str) -> String {
        let trimmed = raw_text.trim();

        // Handle markdown code blocks: ```json ... ``` or ``` ... ```
        if trimmed.starts_with("```") {
            let without_prefix = if trimmed.starts_with("```json") {
                trimmed.strip_prefix("```json").unwrap_or(trimmed)
            } else {
                trimmed.strip_prefix("```").unwrap_or(trimmed)
            };

            if let Some(end_idx) = without_prefix.rfind("```") {
                return without_prefix[..end_idx].trim().to_string();
            }
            return without_prefix.trim().to_string();
        }

        // Handle cases where JSON might be wrapped in other prose
        if let Some(start) = trimmed.find('{') {
            if let Some(end) = trimmed.rfind('}') {
                if start < end {
                    return trimmed[start..=end].to_string();
                }
            }
        }

        trimmed.to_string()
    }

    /// Parse and validate the model's text into an `AnalysisResult`.
    ///
    /// Any parse error, missing/mistyped field, or out-of-range score maps to
    /// `MalformedResponse`.
    fn parse_analysis(text: &str) -> Result<AnalysisResult, DomainError> {
        let clean = Self::sanitize_json(text);
        let result: AnalysisResult = serde_json::from_str(&clean).map_err(|e| {
            warn!(
                error = %e,
                json = %clean.chars().take(200).collect::<String>(),
                "analysis JSON parse failed"
            );
            DomainError::MalformedResponse(e.to_string())
        })?;
        result.check_bounds().map_err(|reason| {
            warn!(%reason, "analysis JSON out of declared bounds");
            DomainError::MalformedResponse(reason)
        })?;
        Ok(result)
    }

    /// Pull the first non-empty text part out of the response envelope.
    fn extract_text(response: GenerateResponse) -> Option<String> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .find(|t| !t.trim().is_empty())
    }
}

/// Response envelope of the generateContent API.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[async_trait::async_trait]
impl AiPort for GeminiAdapter {
    async fn analyze(
        &self,
        resume_base64: &str,
        media: MediaKind,
        job_description: &str,
    ) -> Result<AnalysisResult, DomainError> {
        let mime = media.mime().ok_or_else(|| {
            DomainError::Encode("unsupported media kind reached the AI client".to_string())
        })?;

        info!(
            mime,
            payload_len = resume_base64.len(),
            jd_len = job_description.len(),
            "sending resume to AI for analysis"
        );

        let body = json!({
            "contents": [{
                "parts": [
                    { "inlineData": { "mimeType": mime, "data": resume_base64 } },
                    { "text": Self::prompt(job_description) }
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema()
            }
        });

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.api_url.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        // One-shot call: no retry, no timeout enforcement.
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Transport(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "AI API returned error");
            return Err(DomainError::Transport(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let envelope: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Transport(format!("failed to decode API response: {}", e)))?;

        let raw_text = Self::extract_text(envelope).ok_or(DomainError::EmptyResponse)?;
        debug!(raw_len = raw_text.len(), "received AI response");

        Self::parse_analysis(&raw_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"{
        "score": 72,
        "scoreBreakdown": {"keywordScore": 35, "sectionScore": 25, "lengthScore": 12},
        "matchedKeywords": ["Python", "SQL"],
        "missingKeywords": ["Docker"],
        "sections": [{"name": "Summary", "found": true, "message": "Present"}],
        "suggestions": ["Add a summary tailored to the role"],
        "wordCount": 450
    }"#;

    #[test]
    fn sanitize_json_clean() {
        let input = r#"{"score": 1}"#;
        assert_eq!(GeminiAdapter::sanitize_json(input), input);
    }

    #[test]
    fn sanitize_json_markdown() {
        let input = "```json\n{\"score\": 1}\n```";
        assert_eq!(GeminiAdapter::sanitize_json(input), r#"{"score": 1}"#);
    }

    #[test]
    fn sanitize_json_markdown_no_lang() {
        let input = "```\n{\"score\": 1}\n```";
        assert_eq!(GeminiAdapter::sanitize_json(input), r#"{"score": 1}"#);
    }

    #[test]
    fn sanitize_json_with_text() {
        let input = "Here is the analysis:\n{\"score\": 1}";
        assert_eq!(GeminiAdapter::sanitize_json(input), r#"{"score": 1}"#);
    }

    #[test]
    fn parse_well_formed_analysis() {
        let result = GeminiAdapter::parse_analysis(WELL_FORMED).unwrap();
        assert_eq!(result.score, 72);
        assert_eq!(result.score_breakdown.keyword_score, 35);
        assert_eq!(result.matched_keywords, vec!["Python", "SQL"]);
        assert_eq!(result.missing_keywords, vec!["Docker"]);
        assert_eq!(result.sections.len(), 1);
        assert!(result.sections[0].found);
        assert_eq!(result.word_count, 450);
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let err = GeminiAdapter::parse_analysis("not json at all").unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[test]
    fn parse_rejects_missing_field() {
        // No wordCount.
        let input = r#"{
            "score": 72,
            "scoreBreakdown": {"keywordScore": 35, "sectionScore": 25, "lengthScore": 12},
            "matchedKeywords": [],
            "missingKeywords": [],
            "sections": [],
            "suggestions": []
        }"#;
        let err = GeminiAdapter::parse_analysis(input).unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[test]
    fn parse_rejects_mistyped_field() {
        let input = r#"{
            "score": "seventy-two",
            "scoreBreakdown": {"keywordScore": 35, "sectionScore": 25, "lengthScore": 12},
            "matchedKeywords": [],
            "missingKeywords": [],
            "sections": [],
            "suggestions": [],
            "wordCount": 450
        }"#;
        let err = GeminiAdapter::parse_analysis(input).unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[test]
    fn parse_rejects_out_of_range_score() {
        let input = r#"{
            "score": 150,
            "scoreBreakdown": {"keywordScore": 35, "sectionScore": 25, "lengthScore": 12},
            "matchedKeywords": [],
            "missingKeywords": [],
            "sections": [],
            "suggestions": [],
            "wordCount": 450
        }"#;
        let err = GeminiAdapter::parse_analysis(input).unwrap_err();
        assert!(matches!(err, DomainError::MalformedResponse(_)));
    }

    #[test]
    fn parse_accepts_markdown_wrapped_analysis() {
        let wrapped = format!("```json\n{}\n```", WELL_FORMED);
        assert!(GeminiAdapter::parse_analysis(&wrapped).is_ok());
    }

    #[test]
    fn prompt_embeds_job_description_and_sections() {
        let prompt = GeminiAdapter::prompt("Senior Rust engineer, Docker required");
        assert!(prompt.contains("Senior Rust engineer, Docker required"));
        for section in ["Summary", "Experience", "Education", "Skills"] {
            assert!(prompt.contains(section));
        }
    }

    #[test]
    fn schema_requires_every_result_field() {
        let schema = GeminiAdapter::response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        for field in [
            "score",
            "scoreBreakdown",
            "matchedKeywords",
            "missingKeywords",
            "sections",
            "suggestions",
            "wordCount",
        ] {
            assert!(required.contains(&field), "missing required field {field}");
        }
    }

    #[test]
    fn empty_envelope_yields_no_text() {
        let envelope = GenerateResponse { candidates: vec![] };
        assert!(GeminiAdapter::extract_text(envelope).is_none());

        let blank = GenerateResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![CandidatePart {
                        text: Some("   ".to_string()),
                    }],
                }),
            }],
        };
        assert!(GeminiAdapter::extract_text(blank).is_none());
    }
}
