use progress_core::StatusRow;

use super::view::ProgressReport;

/// Shown in place of the current exercise once every exercise is done.
pub const ALL_COMPLETED_TEXT: &str = "All exercises completed";

fn table_rows(rows: &[StatusRow]) -> String {
    // Identifiers are written verbatim, pipes included.
    rows.iter()
        .map(|row| format!("| {} | {} |", row.id, row.status))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the README progress document.
#[must_use]
pub fn render_markdown(report: &ProgressReport) -> String {
    let current = report
        .current
        .as_ref()
        .map_or(ALL_COMPLETED_TEXT, |id| id.as_str());
    let exercise_table = table_rows(&report.exercises);
    let quiz_table = table_rows(&report.quizzes);

    format!(
        "# Rustlings Progress

Tracking my progress through
[Rustlings](https://github.com/rust-lang/rustlings).

**Current exercise:** `{current}`

## Exercises

| Exercise | Status |
|----------|--------|
{exercise_table}

## Quizzes

| Quiz | Status |
|------|--------|
{quiz_table}
"
    )
}

/// Render the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn render_json(report: &ProgressReport) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}
