//! Error types for the Diagra parser.
//!
//! The lexer never fails. The parser stops at the first structural violation
//! and reports it as a [`ParseError`]; each variant maps to an [`ErrorCode`]
//! and may carry help text for front ends.
//!
//! # Example
//!
//! ```
//! # use diagra_parser::{parse_source, error::ErrorCode};
//! let err = parse_source("diagram bogus { }").unwrap_err();
//! assert_eq!(err.code(), ErrorCode::E102);
//! assert_eq!(err.to_string(), "unknown diagram type `bogus`");
//! ```

mod error_code;
mod parse_error;

pub(crate) use parse_error::Result;

pub use error_code::ErrorCode;
pub use parse_error::ParseError;
