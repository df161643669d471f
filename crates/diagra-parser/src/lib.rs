//! # Diagra Parser
//!
//! Lexer and parser for the Diagra diagram language. This crate provides the
//! pipeline from source text to the [`Diagram`] model of `diagra-core`.
//!
//! ## Usage
//!
//! ```
//! # use diagra_parser::{parse_source, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         diagram flowchart {
//!             node A "Start"
//!             node B "Process"
//!             A -> B "Next"
//!         }
//!     "#;
//!
//!     let diagram = parse_source(source)?;
//!     assert_eq!(diagram.nodes().len(), 2);
//!     assert_eq!(diagram.edges()[0].label(), "Next");
//!     Ok(())
//! }
//! ```

mod elaborate;
pub mod error;
mod lexer;
mod parser;
mod parser_types;
mod tokens;

pub use error::{ErrorCode, ParseError};
pub use lexer::tokenize;
pub use tokens::{KEYWORDS, Token, TokenKind};

use diagra_core::diagram::Diagram;

use elaborate::Builder;

/// Parse tokens into a diagram.
///
/// The token sequence is usually the output of [`tokenize`]. Parsing runs in
/// two steps:
///
/// 1. **Parse** - Build declarations from tokens, stopping at the first
///    structural error
/// 2. **Elaborate** - Reconcile attribute lists against the typed key sets
///    and apply defaults
///
/// # Errors
///
/// Returns a [`ParseError`] for the first structural violation. No partial
/// diagram is returned.
pub fn parse(tokens: &[Token<'_>]) -> Result<Diagram, ParseError> {
    let decl = parser::build_diagram(tokens)?;
    Ok(Builder::new().build(&decl))
}

/// Tokenize and parse source text in one step.
///
/// # Example
///
/// ```
/// # use diagra_parser::{parse_source, ParseError};
/// # use diagra_core::diagram::DiagramKind;
/// fn main() -> Result<(), ParseError> {
///     let diagram = parse_source("diagram tree { }")?;
///     assert_eq!(diagram.kind(), DiagramKind::Tree);
///     Ok(())
/// }
/// ```
pub fn parse_source(source: &str) -> Result<Diagram, ParseError> {
    let tokens = tokenize(source);
    parse(&tokens)
}
