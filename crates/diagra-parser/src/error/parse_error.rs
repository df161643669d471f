//! The ParseError type returned when parsing aborts.
//!
//! Parsing stops at the first structural violation, so a [`ParseError`]
//! always describes exactly one problem.

use thiserror::Error;

use diagra_core::attribute::AttributeScope;

use crate::error::ErrorCode;

/// A type alias for `Result<T, ParseError>`.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error type for the parser.
///
/// `found` fields hold the offending token as displayed in messages
/// (`` `name` ``, `"text"`, or `end of input`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected `diagram` keyword, found {found}")]
    MissingDiagramKeyword { found: String },

    #[error("expected diagram type name, found {found}")]
    MissingDiagramType { found: String },

    #[error("unknown diagram type `{name}`")]
    UnknownDiagramType { name: String },

    #[error("expected `=` after {scope} attribute `{key}`, found {found}")]
    MissingEquals {
        scope: AttributeScope,
        key: String,
        found: String,
    },

    #[error("expected `{{` after diagram header, found {found}")]
    MissingBody { found: String },

    #[error("expected `->` after `{from}`, found {found}")]
    MissingArrow { from: String, found: String },
}

impl ParseError {
    /// The error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::MissingDiagramKeyword { .. } => ErrorCode::E100,
            ParseError::MissingDiagramType { .. } => ErrorCode::E101,
            ParseError::UnknownDiagramType { .. } => ErrorCode::E102,
            ParseError::MissingEquals { .. } => ErrorCode::E103,
            ParseError::MissingBody { .. } => ErrorCode::E104,
            ParseError::MissingArrow { .. } => ErrorCode::E105,
        }
    }

    /// Suggested fix, if there is one.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::MissingDiagramKeyword { .. } => {
                Some("start the file with `diagram <type> { ... }`")
            }
            ParseError::MissingDiagramType { .. } | ParseError::UnknownDiagramType { .. } => {
                Some("supported diagram types are `flowchart` and `tree`")
            }
            ParseError::MissingEquals { .. } => Some("write attributes as `(key=value, ...)`"),
            ParseError::MissingBody { .. } => None,
            ParseError::MissingArrow { .. } => {
                Some("declare nodes with `node ID \"label\"` and edges with `FROM -> TO`")
            }
        }
    }
}
