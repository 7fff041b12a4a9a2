//! Filesystem adapters: resume access and report output.

pub mod report_fs;
pub mod resume_fs;

pub use report_fs::FsReportWriter;
pub use resume_fs::FsResumeStore;
