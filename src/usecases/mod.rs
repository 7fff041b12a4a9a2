//! Application use cases. Orchestrate domain logic via ports.

pub mod session;

pub use session::{ANALYSIS_FAILED_MSG, AnalysisTicket, Phase, SessionController, UiState};
