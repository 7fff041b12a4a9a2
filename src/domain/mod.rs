//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    AnalysisResult, AtsReport, MAX_RESUME_BYTES, MediaKind, ResumeUpload, ScoreBreakdown,
    SectionCheck, Theme,
};
pub use errors::DomainError;
