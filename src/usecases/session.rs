//! Session controller: owns UI state and sequences validate -> encode ->
//! analyze -> render.
//!
//! Single owner of `UiState`; the presentation layer only reads snapshots.
//! The `analyzing` flag latches the analyze action (at most one in flight),
//! and a generation counter tags every analysis so a settlement that arrives
//! after a reset (or after a newer analysis started) is discarded instead of
//! clobbering fresh state.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::{AnalysisResult, AtsReport, DomainError, ResumeUpload, Theme};

/// The one message shown for any analysis-stage failure. The distinct cause
/// is logged, never displayed.
pub const ANALYSIS_FAILED_MSG: &str =
    "Failed to analyze resume. Please check your network connection or API key and try again.";

/// Session life-cycle phase, derived from state. Never stored, so impossible
/// combinations (result while analyzing, etc.) cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No file and/or blank job text.
    Idle,
    /// File selected and job text non-blank; analyze is enabled.
    Ready,
    /// Request in flight.
    Analyzing,
    /// Result present.
    Completed,
}

/// Mutable session state. Exclusively owned by `SessionController`.
#[derive(Debug, Default)]
pub struct UiState {
    pub upload: Option<ResumeUpload>,
    pub job_text: String,
    pub analyzing: bool,
    pub error: Option<String>,
    pub result: Option<AnalysisResult>,
    pub theme: Theme,
}

/// Handle for one analysis attempt. Produced by `begin_analysis`, consumed by
/// `complete_analysis`; stale tickets (reset or superseded) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: u64,
}

pub struct SessionController {
    state: UiState,
    generation: u64,
}

impl SessionController {
    pub fn new(theme: Theme) -> Self {
        Self {
            state: UiState {
                theme,
                ..UiState::default()
            },
            generation: 0,
        }
    }

    /// Read-only snapshot for the presentation layer.
    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        if self.state.result.is_some() {
            Phase::Completed
        } else if self.state.analyzing {
            Phase::Analyzing
        } else if self.state.upload.is_some() && !self.state.job_text.trim().is_empty() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    /// Validate and select a resume file. On success the previous selection is
    /// replaced, any error is cleared, and any previously computed result is
    /// discarded (a new file invalidates stale analysis). On rejection the
    /// previous selection and result stay untouched and the rejection message
    /// becomes the visible error.
    pub fn select_file(&mut self, candidate: ResumeUpload) -> Result<(), DomainError> {
        if let Err(e) = candidate.validate() {
            warn!(file = %candidate.file_name, %e, "resume rejected");
            self.state.error = Some(e.to_string());
            return Err(e);
        }
        info!(file = %candidate.file_name, size = candidate.size_bytes, "resume selected");
        self.state.error = None;
        self.state.upload = Some(candidate);
        self.state.result = None;
        Ok(())
    }

    /// Update the job-description text. Allowed while a request is in flight;
    /// the phase is re-derived from blank-ness on the next read.
    pub fn edit_job_text(&mut self, text: String) {
        self.state.job_text = text;
    }

    /// Try to start an analysis. Returns a ticket only from `Ready`: a second
    /// invocation while one is in flight, or without a file / non-blank job
    /// text, is a no-op.
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        if self.phase() != Phase::Ready {
            debug!(phase = ?self.phase(), "analyze ignored");
            return None;
        }
        self.generation += 1;
        self.state.analyzing = true;
        self.state.error = None;
        Some(AnalysisTicket {
            generation: self.generation,
        })
    }

    /// Settle an analysis. Applies the outcome only if the ticket is current
    /// and the latch is still held; anything else is a stale settlement from
    /// before a reset and is silently dropped.
    pub fn complete_analysis(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<AnalysisResult, DomainError>,
    ) {
        if ticket.generation != self.generation || !self.state.analyzing {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "stale analysis settlement discarded"
            );
            return;
        }
        self.state.analyzing = false;
        match outcome {
            Ok(result) => {
                info!(
                    score = result.score,
                    matched = result.matched_keywords.len(),
                    missing = result.missing_keywords.len(),
                    "analysis complete"
                );
                self.state.error = None;
                self.state.result = Some(result);
            }
            Err(cause) => {
                warn!(%cause, "analysis failed");
                self.state.error = Some(ANALYSIS_FAILED_MSG.to_string());
            }
        }
    }

    /// Start over: clears file, text, result, and error in one step. An
    /// in-flight analysis cannot be aborted, but bumping the generation makes
    /// its eventual settlement stale. Theme survives the reset.
    pub fn reset(&mut self) {
        self.generation += 1;
        let theme = self.state.theme;
        self.state = UiState {
            theme,
            ..UiState::default()
        };
        info!("session reset");
    }

    /// Derive the downloadable report. Only available in `Completed`; has no
    /// effect on state.
    pub fn report(&self) -> Option<AtsReport> {
        self.state
            .result
            .as_ref()
            .map(|r| AtsReport::from_result(r, Utc::now()))
    }

    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MAX_RESUME_BYTES, MediaKind, ScoreBreakdown, SectionCheck};
    use std::path::PathBuf;

    fn upload(name: &str, size: u64) -> ResumeUpload {
        let path = PathBuf::from(name);
        ResumeUpload {
            file_name: name.to_string(),
            media: MediaKind::from_path(&path),
            path,
            size_bytes: size,
        }
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            score: 72,
            score_breakdown: ScoreBreakdown {
                keyword_score: 35,
                section_score: 25,
                length_score: 12,
            },
            matched_keywords: vec!["Python".into(), "SQL".into()],
            missing_keywords: vec!["Docker".into()],
            sections: vec![SectionCheck {
                name: "Summary".into(),
                found: true,
                message: "Present".into(),
            }],
            suggestions: vec!["Add a summary tailored to the role".into()],
            word_count: 450,
        }
    }

    fn ready_controller() -> SessionController {
        let mut c = SessionController::new(Theme::Dark);
        c.select_file(upload("resume.txt", 10 * 1024)).unwrap();
        c.edit_job_text("200 words of job description".into());
        assert_eq!(c.phase(), Phase::Ready);
        c
    }

    #[test]
    fn starts_idle() {
        let c = SessionController::new(Theme::Dark);
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.state().upload.is_none());
        assert!(c.state().error.is_none());
    }

    #[test]
    fn blank_job_text_keeps_idle() {
        let mut c = SessionController::new(Theme::Dark);
        c.select_file(upload("resume.pdf", 1024)).unwrap();
        c.edit_job_text("   \n\t ".into());
        assert_eq!(c.phase(), Phase::Idle);
        c.edit_job_text("Rust engineer".into());
        assert_eq!(c.phase(), Phase::Ready);
    }

    #[test]
    fn rejected_file_preserves_previous_selection() {
        let mut c = ready_controller();
        let previous = c.state().upload.clone().unwrap();

        assert!(c.select_file(upload("resume.docx", 1024)).is_err());
        assert_eq!(c.state().upload.as_ref(), Some(&previous));
        assert_eq!(
            c.state().error.as_deref(),
            Some("Please upload a PDF or Text file.")
        );

        assert!(c.select_file(upload("big.pdf", MAX_RESUME_BYTES + 1)).is_err());
        assert_eq!(c.state().upload.as_ref(), Some(&previous));
    }

    #[test]
    fn rejected_file_preserves_previous_result() {
        let mut c = ready_controller();
        let ticket = c.begin_analysis().unwrap();
        c.complete_analysis(ticket, Ok(sample_result()));
        assert_eq!(c.phase(), Phase::Completed);

        assert!(c.select_file(upload("resume.docx", 1024)).is_err());
        assert!(c.state().result.is_some());
    }

    #[test]
    fn new_valid_file_clears_stale_result_and_error() {
        let mut c = ready_controller();
        let ticket = c.begin_analysis().unwrap();
        c.complete_analysis(ticket, Ok(sample_result()));
        assert_eq!(c.phase(), Phase::Completed);

        c.select_file(upload("updated.pdf", 2048)).unwrap();
        assert!(c.state().result.is_none());
        assert!(c.state().error.is_none());
        assert_eq!(c.phase(), Phase::Ready);
    }

    #[test]
    fn analyze_latch_ignores_reentry() {
        let mut c = ready_controller();
        let first = c.begin_analysis();
        assert!(first.is_some());
        assert_eq!(c.phase(), Phase::Analyzing);
        // Second Analyze while in flight is a no-op.
        assert!(c.begin_analysis().is_none());
    }

    #[test]
    fn analyze_requires_file_and_text() {
        let mut c = SessionController::new(Theme::Dark);
        assert!(c.begin_analysis().is_none());
        c.edit_job_text("some role".into());
        assert!(c.begin_analysis().is_none());
    }

    #[test]
    fn success_transitions_to_completed_with_exact_result() {
        let mut c = ready_controller();
        let ticket = c.begin_analysis().unwrap();
        let result = sample_result();
        c.complete_analysis(ticket, Ok(result.clone()));

        assert_eq!(c.phase(), Phase::Completed);
        assert_eq!(c.state().result.as_ref(), Some(&result));
        assert!(c.state().error.is_none());
        assert!(!c.state().analyzing);
    }

    #[test]
    fn failure_returns_to_ready_with_generic_error() {
        for cause in [
            DomainError::EmptyResponse,
            DomainError::MalformedResponse("expected value at line 1".into()),
            DomainError::Transport("connection refused".into()),
            DomainError::Encode("read failed".into()),
        ] {
            let mut c = ready_controller();
            let ticket = c.begin_analysis().unwrap();
            c.complete_analysis(ticket, Err(cause));

            assert_eq!(c.phase(), Phase::Ready);
            assert!(c.state().result.is_none());
            assert_eq!(c.state().error.as_deref(), Some(ANALYSIS_FAILED_MSG));
            // File and text survive so the user can retry without re-entering.
            assert!(c.state().upload.is_some());
            assert!(!c.state().job_text.is_empty());
        }
    }

    #[test]
    fn reset_clears_everything_at_once() {
        let mut c = ready_controller();
        let ticket = c.begin_analysis().unwrap();
        c.complete_analysis(ticket, Ok(sample_result()));
        c.toggle_theme();
        let theme = c.theme();

        c.reset();
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.state().upload.is_none());
        assert!(c.state().job_text.is_empty());
        assert!(c.state().result.is_none());
        assert!(c.state().error.is_none());
        // Theme is session-wide configuration, not analysis state.
        assert_eq!(c.theme(), theme);
    }

    #[test]
    fn settlement_after_reset_is_discarded() {
        let mut c = ready_controller();
        let ticket = c.begin_analysis().unwrap();
        c.reset();

        c.complete_analysis(ticket, Ok(sample_result()));
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.state().result.is_none());
        assert!(c.state().error.is_none());
    }

    #[test]
    fn stale_failure_after_reset_sets_no_error() {
        let mut c = ready_controller();
        let ticket = c.begin_analysis().unwrap();
        c.reset();

        c.complete_analysis(ticket, Err(DomainError::Transport("timed out".into())));
        assert!(c.state().error.is_none());
    }

    #[test]
    fn report_only_in_completed_and_matches_result() {
        let mut c = ready_controller();
        assert!(c.report().is_none());

        let ticket = c.begin_analysis().unwrap();
        let result = sample_result();
        c.complete_analysis(ticket, Ok(result.clone()));

        let report = c.report().unwrap();
        assert_eq!(report.score, result.score);
        assert_eq!(report.missing_keywords, result.missing_keywords);
        assert_eq!(report.found_keywords, result.matched_keywords);
        // Deriving the report does not change state.
        assert_eq!(c.phase(), Phase::Completed);
    }

    #[test]
    fn theme_toggle_round_trips() {
        let mut c = SessionController::new(Theme::Light);
        c.toggle_theme();
        assert_eq!(c.theme(), Theme::Dark);
        c.toggle_theme();
        assert_eq!(c.theme(), Theme::Light);
    }
}
