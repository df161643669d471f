//! Error codes for parse failures.
//!
//! The lexer never fails, so every code belongs to the parser (`E1xx`).

use std::fmt;

/// Error codes for categorizing parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Missing `diagram` keyword.
    ///
    /// A source file must start with the `diagram` keyword.
    E100,

    /// Missing diagram type.
    ///
    /// The `diagram` keyword must be followed by a type name.
    E101,

    /// Unknown diagram type.
    ///
    /// The diagram type is not one of `flowchart` or `tree`.
    E102,

    /// Missing `=` in an attribute list.
    ///
    /// Each attribute key must be followed by `=` and a value.
    E103,

    /// Missing diagram body.
    ///
    /// The diagram header must be followed by `{`.
    E104,

    /// Missing `->` in an edge.
    ///
    /// An identifier inside the body starts an edge and must be followed by `->`.
    E105,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "missing diagram keyword",
            ErrorCode::E101 => "missing diagram type",
            ErrorCode::E102 => "unknown diagram type",
            ErrorCode::E103 => "missing `=` in attribute",
            ErrorCode::E104 => "missing diagram body",
            ErrorCode::E105 => "missing arrow in edge",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
