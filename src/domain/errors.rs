//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. `InvalidFile` carries the
//! user-facing rejection message verbatim; every other variant is internal
//! and the controller collapses it into one generic analysis-failure message.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// File rejected by the upload validator. Message is shown to the user.
    #[error("{0}")]
    InvalidFile(String),

    #[error("resume encoding failed: {0}")]
    Encode(String),

    #[error("AI transport error: {0}")]
    Transport(String),

    #[error("AI returned an empty response")]
    EmptyResponse,

    #[error("AI returned a malformed response: {0}")]
    MalformedResponse(String),

    #[error("report error: {0}")]
    Report(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("input error: {0}")]
    Input(String),
}
