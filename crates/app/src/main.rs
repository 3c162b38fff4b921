use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use services::{OutputTarget, ReportFormat, ReportService, RunOutcome};
use storage::CurriculumLayout;
use tracing_subscriber::EnvFilter;

/// Regenerate the progress README from the rustlings state file.
#[derive(Debug, Parser)]
#[command(name = "progress-report", version, long_about = None)]
struct Args {
    /// Checkout root holding the state file, exercises and README
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// State file listing completed exercises [default: <root>/.rustlings-state.txt]
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Exercises directory [default: <root>/exercises]
    #[arg(long)]
    exercises: Option<PathBuf>,

    /// Report to overwrite [default: <root>/README.md]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Document format
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Print the document instead of writing it
    #[arg(long)]
    stdout: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => ReportFormat::Markdown,
            Format::Json => ReportFormat::Json,
        }
    }
}

impl Args {
    fn layout(&self) -> CurriculumLayout {
        let mut layout = CurriculumLayout::rustlings(&self.root);
        if let Some(path) = &self.state_file {
            layout = layout.with_state_file(path);
        }
        if let Some(path) = &self.exercises {
            layout = layout.with_exercises_dir(path);
        }
        if let Some(path) = &self.output {
            layout = layout.with_output_file(path);
        }
        layout
    }

    fn target(&self) -> OutputTarget {
        if self.stdout {
            OutputTarget::Stdout
        } else {
            OutputTarget::File
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn init_logging() {
    // Logs go to stderr so stdout carries only the run's messages.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let service = ReportService::from_layout(args.layout());

    match service.run(args.format.into(), args.target())? {
        RunOutcome::MissingState { path } => {
            println!("Error: {} not found", display_name(&path));
        }
        RunOutcome::Written { path, .. } => {
            println!("{} updated", display_name(&path));
        }
        RunOutcome::Rendered { document, .. } => {
            print!("{document}");
        }
    }

    Ok(())
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_root() {
        let args = Args::try_parse_from(["progress-report", "--root", "/work/rl"]).unwrap();
        let layout = args.layout();
        assert_eq!(
            layout.state_file(),
            Path::new("/work/rl/.rustlings-state.txt")
        );
        assert_eq!(layout.output_file(), Path::new("/work/rl/README.md"));
        assert_eq!(args.format, Format::Markdown);
        assert_eq!(args.target(), OutputTarget::File);
    }

    #[test]
    fn bare_invocation_ignores_environment() {
        // SAFETY: no other test in this binary reads these variables.
        unsafe {
            std::env::set_var("PROGRESS_OUTPUT", "/tmp/elsewhere.md");
            std::env::set_var("PROGRESS_FORMAT", "json");
        }
        let args = Args::try_parse_from(["progress-report"]).unwrap();

        assert_eq!(args.layout().output_file(), Path::new("./README.md"));
        assert_eq!(args.format, Format::Markdown);
        assert_eq!(args.target(), OutputTarget::File);
    }

    #[test]
    fn explicit_paths_override_root() {
        let args = Args::try_parse_from([
            "progress-report",
            "--root",
            "/work/rl",
            "--output",
            "/tmp/out.md",
            "--exercises",
            "/src/ex",
            "--format",
            "json",
            "--stdout",
        ])
        .unwrap();
        let layout = args.layout();
        assert_eq!(layout.output_file(), Path::new("/tmp/out.md"));
        assert_eq!(layout.quizzes_dir(), Path::new("/src/ex/quizzes"));
        assert_eq!(ReportFormat::from(args.format), ReportFormat::Json);
        assert_eq!(args.target(), OutputTarget::Stdout);
    }

    #[test]
    fn display_name_uses_file_name() {
        assert_eq!(
            display_name(Path::new("/a/b/.rustlings-state.txt")),
            ".rustlings-state.txt"
        );
        assert_eq!(display_name(Path::new("README.md")), "README.md");
    }
}
