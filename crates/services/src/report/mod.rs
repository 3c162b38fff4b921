mod render;
mod service;
mod view;

// Public API of the report subsystem.
pub use crate::error::ReportServiceError;
pub use render::{ALL_COMPLETED_TEXT, render_json, render_markdown};
pub use service::{OutputTarget, ReportFormat, ReportService, RunOutcome};
pub use view::ProgressReport;
