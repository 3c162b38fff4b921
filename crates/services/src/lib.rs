#![forbid(unsafe_code)]

pub mod error;
pub mod report;

pub use error::ReportServiceError;
pub use report::{
    OutputTarget, ProgressReport, ReportFormat, ReportService, RunOutcome, render_json,
    render_markdown,
};
