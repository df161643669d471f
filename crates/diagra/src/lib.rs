//! Diagra - A small text language for flowcharts and trees.
//!
//! Parsing, layout, and SVG rendering for the Diagra diagram language. The
//! pipeline is linear:
//!
//! ```text
//! source --lex--> tokens --parse--> Diagram --layout--> Layout --render--> SVG
//! ```
//!
//! The free functions [`lex`], [`parse`] and [`render`] expose the stages
//! directly. [`DiagramBuilder`] runs them with an [`AppConfig`].

pub mod config;

mod error;
mod export;
mod layout;
mod structure;

pub use diagra_core::{attribute, diagram, geometry, positioned};
pub use diagra_core::layout::{LayoutStrategy, TreeEngine};
pub use diagra_parser::{ErrorCode, ParseError, Token, TokenKind};

pub use error::DiagraError;

use log::{debug, info, trace};

use config::AppConfig;
use diagram::Diagram;
use positioned::Layout;

/// Convert source text into tokens.
///
/// Never fails; the last token is always [`TokenKind::Eof`].
pub fn lex(source: &str) -> Vec<Token<'_>> {
    diagra_parser::tokenize(source)
}

/// Parse tokens into a diagram.
///
/// # Errors
///
/// Returns the first [`ParseError`] found. No partial diagram is returned.
pub fn parse(tokens: &[Token<'_>]) -> Result<Diagram, ParseError> {
    diagra_parser::parse(tokens)
}

/// Calculate positions for a diagram with the given tree engine.
///
/// Flowcharts ignore `tree_engine`.
pub fn layout(diagram: &Diagram, tree_engine: TreeEngine) -> Layout<'_> {
    layout::EngineBuilder::new()
        .with_tree_engine(tree_engine)
        .build(diagram)
}

/// Render a diagram to SVG text with the default configuration.
///
/// Identical diagrams always produce identical output.
///
/// # Examples
///
/// ```
/// let tokens = diagra::lex(r#"diagram flowchart { node A "Start" }"#);
/// let diagram = diagra::parse(&tokens).expect("valid diagram");
/// let svg = diagra::render(&diagram);
/// assert!(svg.contains("Start"));
/// ```
pub fn render(diagram: &Diagram) -> String {
    DiagramBuilder::default().render_svg(diagram)
}

/// Builder for parsing and rendering Diagra diagrams.
///
/// This provides an API for processing Diagra diagrams through parsing,
/// layout, and rendering stages.
///
/// # Examples
///
/// ```
/// use diagra::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"diagram tree { node root "Root" node leaf "Leaf" root -> leaf }"#;
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = DiagramBuilder::new(config);
///
/// // Parse source to diagram model
/// let diagram = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render diagram model to SVG
/// let svg = builder.render_svg(&diagram);
/// assert!(svg.contains("</svg>"));
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse source code into a diagram.
    ///
    /// This performs lexing, parsing and elaboration to produce a diagram
    /// with every attribute resolved.
    ///
    /// # Errors
    ///
    /// Returns `DiagraError::Parse` for the first syntax error found. The
    /// error keeps a copy of `source` for reporting.
    pub fn parse(&self, source: &str) -> Result<Diagram, DiagraError> {
        info!("Parsing diagram");

        let tokens = lex(source);
        trace!(tokens_count = tokens.len(); "Source tokenized");

        let diagram =
            parse(&tokens).map_err(|err| DiagraError::new_parse_error(err, source))?;

        debug!(
            nodes_count = diagram.nodes().len(),
            edges_count = diagram.edges().len();
            "Diagram parsed successfully"
        );
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Render a diagram to an SVG string.
    ///
    /// Runs the layout strategy selected for the diagram and serializes the
    /// result in memory.
    pub fn render_svg(&self, diagram: &Diagram) -> String {
        info!(diagram_kind:? = diagram.kind(); "Calculating layout");
        let diagram_layout = layout(diagram, self.config.layout().tree());
        info!(
            nodes_count = diagram_layout.nodes().len(),
            edges_count = diagram_layout.edges().len();
            "Layout calculated"
        );

        let svg = export::svg::Svg::new(diagram).render_to_string(&diagram_layout);

        info!("SVG rendered successfully");
        svg
    }
}
