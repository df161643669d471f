//! Error types for Diagra operations.
//!
//! This module provides the main error type [`DiagraError`]. Layout and
//! rendering never fail, so the only failures are parse errors and the I/O
//! of front ends.

use std::io;

use thiserror::Error;

use diagra_parser::ParseError;

/// The main error type for Diagra operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the [`ParseError`], so
/// front ends can show the offending file when reporting.
#[derive(Debug, Error)]
pub enum DiagraError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },
}

impl DiagraError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_is_transparent() {
        let err = diagra_parser::parse_source("diagram bogus { }").unwrap_err();
        let err = DiagraError::new_parse_error(err, "diagram bogus { }");
        assert_eq!(err.to_string(), "unknown diagram type `bogus`");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: DiagraError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, DiagraError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
