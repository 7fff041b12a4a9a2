//! Wiring & DI. Entry point: bootstrap adapters, inject into the session, run UI.
//! No business logic here; the analysis workflow lives in the session controller.

use ats_check::adapters::ai::{GeminiAdapter, MockAiAdapter};
use ats_check::adapters::fs::{FsReportWriter, FsResumeStore};
use ats_check::adapters::ui::tui::TuiSession;
use ats_check::ports::{AiPort, InputPort, ReportPort, ResumeStorePort};
use ats_check::shared::config::AppConfig;
use ats_check::usecases::SessionController;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_default();

    ats_check::adapters::ui::init_ui(cfg.theme_or_default());

    // --- AI adapter: real endpoint when a key is configured, mock otherwise ---
    let ai: Arc<dyn AiPort> = if cfg.is_ai_configured() {
        info!(
            model = %cfg.ai_model_or_default(),
            url = %cfg.ai_api_url_or_default(),
            "AI analysis enabled with Gemini adapter"
        );
        Arc::new(GeminiAdapter::new(
            cfg.ai_api_url_or_default(),
            cfg.ai_api_key().unwrap_or_default(),
            cfg.ai_model_or_default(),
        ))
    } else {
        warn!("ATS_CHECK_AI_API_KEY not set, using mock AI adapter");
        Arc::new(MockAiAdapter::new())
    };

    let resume_store: Arc<dyn ResumeStorePort> = Arc::new(FsResumeStore);

    let reports_dir = PathBuf::from(cfg.reports_dir_or_default());
    info!(path = %reports_dir.display(), "reports directory");
    let reports: Arc<dyn ReportPort> = Arc::new(FsReportWriter::new(reports_dir));

    let controller = SessionController::new(cfg.theme_or_default());
    let session = TuiSession::new(controller, resume_store, ai, reports);

    // --- Run (menu -> select resume / edit JD / analyze / save report) ---
    session.run().await.map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
