//! CLI logic for the Diagra diagram tool.
//!
//! [`run`] dispatches on the subcommand. `render` processes a single file and
//! fails with its error. `render-all` processes every `.diag` file of a
//! directory in sorted order, reporting and skipping files that fail.
//!
//! Timing is returned as values: every rendered file yields a
//! [`RenderTiming`], and the caller owns the [`BatchSummary`] that adds them
//! up.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
pub use config::ConfigError;

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use log::{debug, error, info};
use thiserror::Error;

use diagra::{DiagraError, DiagramBuilder};

/// File extension of diagram sources.
pub const DIAGRAM_EXTENSION: &str = "diag";

/// Problems with an input path, found before the file is read.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("File must have .diag extension: {0}")]
    Extension(PathBuf),

    #[error("File does not exist: {0}")]
    MissingFile(PathBuf),
}

impl From<InputError> for DiagraError {
    fn from(err: InputError) -> Self {
        let kind = match err {
            InputError::Extension(_) => io::ErrorKind::InvalidInput,
            InputError::MissingFile(_) => io::ErrorKind::NotFound,
        };
        DiagraError::Io(io::Error::new(kind, err))
    }
}

/// Time spent turning one source file into an SVG file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RenderTiming {
    elapsed: Duration,
}

impl RenderTiming {
    pub fn new(elapsed: Duration) -> Self {
        Self { elapsed }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Result of one `render` or `render-all` invocation.
#[derive(Debug, Default)]
pub struct BatchSummary {
    created: Vec<PathBuf>,
    failed: Vec<PathBuf>,
    total: Duration,
}

impl BatchSummary {
    /// Record a file written to `output`.
    pub fn record_created(&mut self, output: PathBuf, timing: RenderTiming) {
        self.created.push(output);
        self.total += timing.elapsed();
    }

    /// Record an input file that could not be rendered.
    pub fn record_failed(&mut self, input: PathBuf) {
        self.failed.push(input);
    }

    /// SVG files written, in render order.
    pub fn created(&self) -> &[PathBuf] {
        &self.created
    }

    /// Input files that failed, in render order.
    pub fn failed(&self) -> &[PathBuf] {
        &self.failed
    }

    /// Sum of the timings of all created files.
    pub fn total(&self) -> Duration {
        self.total
    }
}

/// Run the Diagra CLI application
///
/// # Errors
///
/// Returns `DiagraError` for:
/// - Configuration loading errors
/// - A bad input path, read, parse or write error of `render`
/// - An unreadable input directory of `render-all`
pub fn run(args: &Args) -> Result<BatchSummary, DiagraError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = DiagramBuilder::new(app_config);

    match &args.command {
        Command::Render { input, output } => {
            let mut summary = BatchSummary::default();
            let (svg_path, timing) = render_file(&builder, Path::new(input), Path::new(output))?;
            summary.record_created(svg_path, timing);
            Ok(summary)
        }
        Command::RenderAll { input, output } => {
            render_all(&builder, Path::new(input), Path::new(output))
        }
    }
}

/// Render one `.diag` file into `output_dir/<basename>.svg`.
///
/// The output directory is created if it does not exist.
///
/// # Errors
///
/// Returns an error if the path does not end in `.diag`, the file is
/// missing or unreadable, the source does not parse, or the SVG file cannot
/// be written.
pub fn render_file(
    builder: &DiagramBuilder,
    input: &Path,
    output_dir: &Path,
) -> Result<(PathBuf, RenderTiming), DiagraError> {
    info!(
        input_path = input.display().to_string(),
        output_dir = output_dir.display().to_string();
        "Processing diagram"
    );

    if !is_diagram_file(input) {
        return Err(InputError::Extension(input.to_path_buf()).into());
    }
    if !input.is_file() {
        return Err(InputError::MissingFile(input.to_path_buf()).into());
    }

    let start = Instant::now();

    let source = fs::read_to_string(input)?;
    let diagram = builder.parse(&source)?;
    let svg = builder.render_svg(&diagram);

    fs::create_dir_all(output_dir)?;
    let svg_path = output_path(input, output_dir);
    fs::write(&svg_path, svg)?;

    let timing = RenderTiming::new(start.elapsed());
    info!(
        output_file = svg_path.display().to_string(),
        elapsed_ms = timing.elapsed().as_millis();
        "SVG exported successfully"
    );

    Ok((svg_path, timing))
}

/// Render every `.diag` file in `input_dir`, in sorted order.
///
/// A file that fails is reported through the log and skipped.
///
/// # Errors
///
/// Returns an error only if `input_dir` cannot be read.
pub fn render_all(
    builder: &DiagramBuilder,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<BatchSummary, DiagraError> {
    let mut files: Vec<PathBuf> = fs::read_dir(input_dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_diagram_file(path))
        .collect();
    files.sort();

    debug!(
        input_dir = input_dir.display().to_string(),
        files_count = files.len();
        "Collected diagram files"
    );

    let mut summary = BatchSummary::default();
    for file in files {
        match render_file(builder, &file, output_dir) {
            Ok((svg_path, timing)) => summary.record_created(svg_path, timing),
            Err(err) => {
                error!(
                    input_path = file.display().to_string();
                    "Failed to render\n{}",
                    error_adapter::render_report(&err)
                );
                summary.record_failed(file);
            }
        }
    }

    Ok(summary)
}

fn is_diagram_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(DIAGRAM_EXTENSION)
}

/// `output_dir/<basename>.svg` for an input file.
fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .unwrap_or(input.as_os_str())
        .to_os_string();
    name.push(".svg");
    output_dir.join(name)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    const SOURCE: &str = r#"diagram flowchart { node A "Start" node B "End" A -> B }"#;

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("example/flow.diag"), Path::new("output")),
            PathBuf::from("output/flow.svg")
        );
        assert_eq!(
            output_path(Path::new("v1.2.diag"), Path::new("out")),
            PathBuf::from("out/v1.2.svg")
        );
    }

    #[test]
    fn test_is_diagram_file() {
        assert!(is_diagram_file(Path::new("a/b.diag")));
        assert!(!is_diagram_file(Path::new("a/b.diagram")));
        assert!(!is_diagram_file(Path::new("a/diag")));
    }

    #[test]
    fn test_summary_adds_timings() {
        let mut summary = BatchSummary::default();
        summary.record_created("a.svg".into(), RenderTiming::new(Duration::from_millis(3)));
        summary.record_created("b.svg".into(), RenderTiming::new(Duration::from_millis(4)));
        summary.record_failed("c.diag".into());

        assert_eq!(summary.total(), Duration::from_millis(7));
        assert_eq!(summary.created().len(), 2);
        assert_eq!(summary.failed(), [PathBuf::from("c.diag")]);
    }

    #[test]
    fn test_render_file_writes_svg() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("flow.diag");
        fs::write(&input, SOURCE).unwrap();
        let output_dir = dir.path().join("nested").join("output");

        let (svg_path, _) =
            render_file(&DiagramBuilder::default(), &input, &output_dir).unwrap();

        assert_eq!(svg_path, output_dir.join("flow.svg"));
        let svg = fs::read_to_string(svg_path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Start"));
    }

    #[test]
    fn test_render_file_rejects_extension_before_reading() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("flow.txt");

        let err = render_file(&DiagramBuilder::default(), &input, dir.path()).unwrap_err();
        match err {
            DiagraError::Io(io_err) => assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput),
            other => panic!("Expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_render_file_missing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("missing.diag");

        let err = render_file(&DiagramBuilder::default(), &input, dir.path()).unwrap_err();
        match err {
            DiagraError::Io(io_err) => assert_eq!(io_err.kind(), io::ErrorKind::NotFound),
            other => panic!("Expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_render_all_skips_failures() {
        let dir = tempdir().unwrap();
        let input_dir = dir.path().join("example");
        fs::create_dir(&input_dir).unwrap();
        fs::write(input_dir.join("b_good.diag"), SOURCE).unwrap();
        fs::write(input_dir.join("a_bad.diag"), "diagram bogus { }").unwrap();
        fs::write(input_dir.join("notes.txt"), "not a diagram").unwrap();
        let output_dir = dir.path().join("output");

        let summary = render_all(&DiagramBuilder::default(), &input_dir, &output_dir).unwrap();

        assert_eq!(summary.created(), [output_dir.join("b_good.svg")]);
        assert_eq!(summary.failed(), [input_dir.join("a_bad.diag")]);
        assert!(!output_dir.join("a_bad.svg").exists());
    }

    #[test]
    fn test_render_all_missing_directory() {
        let dir = tempdir().unwrap();
        let result = render_all(
            &DiagramBuilder::default(),
            &dir.path().join("nope"),
            dir.path(),
        );
        assert!(matches!(result, Err(DiagraError::Io(_))));
    }
}
