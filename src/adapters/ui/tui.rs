//! Implements InputPort. Inquire-based interactive session loop.
//!
//! The menu is rebuilt from a controller snapshot on every iteration, so the
//! options shown are exactly the transitions the state machine allows.

use crate::adapters::ui::render;
use crate::domain::{DomainError, Theme};
use crate::ports::{AiPort, InputPort, ReportPort, ResumeStorePort};
use crate::usecases::{Phase, SessionController};
use async_trait::async_trait;
use indicatif::ProgressBar;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Editor, Select, Text};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

const MENU_SELECT_FILE: &str = "Select resume file";
const MENU_EDIT_JD: &str = "Edit job description";
const MENU_ANALYZE: &str = "Analyze resume";
const MENU_VIEW: &str = "View results";
const MENU_SAVE: &str = "Save report";
const MENU_RESET: &str = "Start over";
const MENU_THEME: &str = "Toggle theme";
const MENU_QUIT: &str = "Quit";

/// Styles all subsequent inquire prompts for the given theme.
pub fn apply_theme(theme: Theme) {
    let accent = match theme {
        Theme::Dark => Color::LightCyan,
        Theme::Light => Color::DarkBlue,
    };
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("?").with_fg(accent))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(accent));
    inquire::set_global_render_config(config);
}

/// TUI adapter. Owns the controller; everything else comes in through ports.
pub struct TuiSession {
    controller: Mutex<SessionController>,
    resume_store: Arc<dyn ResumeStorePort>,
    ai: Arc<dyn AiPort>,
    reports: Arc<dyn ReportPort>,
}

impl TuiSession {
    pub fn new(
        controller: SessionController,
        resume_store: Arc<dyn ResumeStorePort>,
        ai: Arc<dyn AiPort>,
        reports: Arc<dyn ReportPort>,
    ) -> Self {
        Self {
            controller: Mutex::new(controller),
            resume_store,
            ai,
            reports,
        }
    }

    fn menu_for(phase: Phase, has_any_input: bool) -> Vec<&'static str> {
        let mut options = Vec::new();
        match phase {
            Phase::Completed => {
                options.extend([MENU_VIEW, MENU_SAVE, MENU_SELECT_FILE, MENU_RESET]);
            }
            Phase::Ready => {
                options.extend([MENU_ANALYZE, MENU_SELECT_FILE, MENU_EDIT_JD, MENU_RESET]);
            }
            Phase::Idle => {
                options.extend([MENU_SELECT_FILE, MENU_EDIT_JD]);
                if has_any_input {
                    options.push(MENU_RESET);
                }
            }
            // The loop never shows a menu mid-flight; the call is awaited.
            Phase::Analyzing => {}
        }
        options.extend([MENU_THEME, MENU_QUIT]);
        options
    }

    async fn select_file(&self) -> Result<(), DomainError> {
        let path = match Text::new("Path to resume (PDF or TXT):").prompt() {
            Ok(p) => p,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(e) => return Err(DomainError::Input(e.to_string())),
        };
        let candidate = match self.resume_store.inspect(Path::new(path.trim())).await {
            Ok(c) => c,
            Err(e) => {
                render::print_error(&e.to_string());
                return Ok(());
            }
        };

        let mut controller = self.controller.lock().await;
        match controller.select_file(candidate) {
            Ok(()) => {
                if let Some(upload) = &controller.state().upload {
                    render::print_selection(upload, controller.theme());
                }
            }
            Err(e) => render::print_error(&e.to_string()),
        }
        Ok(())
    }

    async fn edit_job_description(&self) -> Result<(), DomainError> {
        let current = self.controller.lock().await.state().job_text.clone();
        match Editor::new("Paste the job description:")
            .with_predefined_text(&current)
            .prompt()
        {
            Ok(text) => {
                let mut controller = self.controller.lock().await;
                controller.edit_job_text(text);
                if controller.state().job_text.trim().is_empty() {
                    render::print_error("Job description is empty.");
                }
                Ok(())
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(()),
            Err(e) => Err(DomainError::Input(e.to_string())),
        }
    }

    /// Encode then analyze, settling the controller with the outcome. The
    /// latch in `begin_analysis` guarantees a single request in flight.
    async fn run_analysis(&self) {
        let (ticket, upload, job_text) = {
            let mut controller = self.controller.lock().await;
            let Some(ticket) = controller.begin_analysis() else {
                return;
            };
            let Some(upload) = controller.state().upload.clone() else {
                return;
            };
            (ticket, upload, controller.state().job_text.clone())
        };

        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message("Running AI Analysis...");

        let outcome = match self.resume_store.encode(&upload).await {
            Ok(encoded) => self.ai.analyze(&encoded, upload.media, &job_text).await,
            Err(e) => Err(e),
        };

        spinner.finish_and_clear();

        let mut controller = self.controller.lock().await;
        controller.complete_analysis(ticket, outcome);
        if controller.phase() == Phase::Completed {
            if let Some(result) = &controller.state().result {
                render::print_result(result, controller.theme());
            }
        } else if let Some(error) = &controller.state().error {
            render::print_error(error);
        }
    }

    async fn save_report(&self) {
        let report = self.controller.lock().await.report();
        let Some(report) = report else {
            render::print_error("Nothing to save yet.");
            return;
        };
        let theme = self.controller.lock().await.theme();
        match self.reports.save(&report).await {
            Ok(path) => render::print_saved(&path, theme),
            Err(e) => render::print_error(&e.to_string()),
        }
    }
}

#[async_trait]
impl InputPort for TuiSession {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let (phase, has_any_input) = {
                let controller = self.controller.lock().await;
                let state = controller.state();
                render::print_status(
                    state.upload.as_ref(),
                    state.job_text.split_whitespace().count(),
                    controller.theme(),
                );
                (
                    controller.phase(),
                    state.upload.is_some() || !state.job_text.is_empty(),
                )
            };

            let options = Self::menu_for(phase, has_any_input);
            let choice = match Select::new("What next?", options).prompt() {
                Ok(c) => c,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };

            match choice {
                MENU_SELECT_FILE => self.select_file().await?,
                MENU_EDIT_JD => self.edit_job_description().await?,
                MENU_ANALYZE => self.run_analysis().await,
                MENU_VIEW => {
                    let controller = self.controller.lock().await;
                    if let Some(result) = &controller.state().result {
                        render::print_result(result, controller.theme());
                    }
                }
                MENU_SAVE => self.save_report().await,
                MENU_RESET => self.controller.lock().await.reset(),
                MENU_THEME => {
                    let mut controller = self.controller.lock().await;
                    controller.toggle_theme();
                    apply_theme(controller.theme());
                }
                MENU_QUIT => return Ok(()),
                _ => {}
            }
        }
    }
}
