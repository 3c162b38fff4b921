use std::path::PathBuf;

use progress_core::model::{sort_exercises, sort_quizzes};
use storage::CurriculumLayout;
use storage::repository::Storage;
use tracing::{debug, info};

use super::render::{render_json, render_markdown};
use super::view::ProgressReport;
use crate::error::ReportServiceError;

/// Document format produced by a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

/// Where the rendered document goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputTarget {
    /// Overwrite the layout's output file.
    #[default]
    File,
    /// Hand the document back to the caller; nothing is written.
    Stdout,
}

/// Result of a report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The state file is missing; no document was produced.
    MissingState { path: PathBuf },
    /// The document was written to `path`.
    Written { path: PathBuf, report: ProgressReport },
    /// The document was rendered but not written.
    Rendered { document: String, report: ProgressReport },
}

/// Regenerates the progress document from completion state and the exercise tree.
#[derive(Clone)]
pub struct ReportService {
    storage: Storage,
    layout: CurriculumLayout,
}

impl ReportService {
    #[must_use]
    pub fn new(storage: Storage, layout: CurriculumLayout) -> Self {
        Self { storage, layout }
    }

    /// Service reading everything from the filesystem described by `layout`.
    #[must_use]
    pub fn from_layout(layout: CurriculumLayout) -> Self {
        Self::new(Storage::filesystem(&layout), layout)
    }

    /// Load completion state, discover the curriculum and assign statuses.
    ///
    /// # Errors
    ///
    /// Returns `ReportServiceError::Storage` if the state file or exercise tree cannot be read.
    pub fn build_report(&self) -> Result<ProgressReport, ReportServiceError> {
        let completed = self.storage.completions.load_completed()?;

        let mut exercises = self.storage.curriculum.exercises()?;
        sort_exercises(&mut exercises);

        let mut quizzes = self.storage.curriculum.quizzes()?;
        sort_quizzes(&mut quizzes);

        let report = ProgressReport::build(&exercises, &quizzes, &completed);
        info!(
            completed = report.completed_exercises,
            total = report.total_exercises,
            quizzes = report.total_quizzes,
            current = report.current.as_ref().map(|id| id.as_str()),
            "built progress report"
        );
        Ok(report)
    }

    /// Render `report` in the requested format.
    ///
    /// # Errors
    ///
    /// Returns `ReportServiceError::Json` if JSON encoding fails.
    pub fn render(
        &self,
        report: &ProgressReport,
        format: ReportFormat,
    ) -> Result<String, ReportServiceError> {
        match format {
            ReportFormat::Markdown => Ok(render_markdown(report)),
            ReportFormat::Json => Ok(render_json(report)?),
        }
    }

    /// Run the whole pipeline.
    ///
    /// Stops before reading anything else when the state file is missing.
    /// With `OutputTarget::File` the output file is fully overwritten.
    ///
    /// # Errors
    ///
    /// Returns `ReportServiceError` if reading inputs, rendering, or writing fails.
    pub fn run(
        &self,
        format: ReportFormat,
        target: OutputTarget,
    ) -> Result<RunOutcome, ReportServiceError> {
        if !self.storage.completions.state_exists() {
            debug!(path = %self.layout.state_file().display(), "state file missing");
            return Ok(RunOutcome::MissingState {
                path: self.layout.state_file().to_path_buf(),
            });
        }

        let report = self.build_report()?;
        let document = self.render(&report, format)?;

        match target {
            OutputTarget::Stdout => Ok(RunOutcome::Rendered { document, report }),
            OutputTarget::File => {
                let path = self.layout.output_file().to_path_buf();
                std::fs::write(&path, document).map_err(|source| ReportServiceError::Write {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), "wrote progress report");
                Ok(RunOutcome::Written { path, report })
            }
        }
    }
}
