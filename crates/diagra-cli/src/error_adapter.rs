//! Error adapter for converting DiagraError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler};

use diagra::DiagraError;

/// Adapter that lets miette render a [`DiagraError`].
///
/// Parse errors carry their error code and help text. Other variants get a
/// `diagra::*` code and no help.
pub struct ErrorAdapter<'a>(pub &'a DiagraError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            DiagraError::Io(_) => Some(Box::new("diagra::io") as Box<dyn fmt::Display>),
            DiagraError::Parse { err, .. } => Some(Box::new(err.code()) as Box<dyn fmt::Display>),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            DiagraError::Io(_) => None,
            DiagraError::Parse { err, .. } => err
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display>),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.0 {
            DiagraError::Io(_) => None,
            DiagraError::Parse { src, .. } => Some(src as &dyn miette::SourceCode),
        }
    }
}

/// Render `err` with miette's graphical report handler.
///
/// Falls back to the plain error message if rendering fails.
pub fn render_report(err: &DiagraError) -> String {
    let reporter = GraphicalReportHandler::new();
    let mut writer = String::new();

    match reporter.render_report(&mut writer, &ErrorAdapter(err)) {
        Ok(()) => writer,
        Err(_) => err.to_string(),
    }
}
