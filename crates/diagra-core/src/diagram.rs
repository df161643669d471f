//! Diagram model types.
//!
//! This module contains the representation of a diagram after parsing and
//! elaboration. Every value here is immutable once built: the parser creates a
//! [`Diagram`] per source file, the layout engines and the SVG exporter read
//! it, and it is dropped afterwards.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ lexer
//! Tokens
//!     ↓ parser
//! Parser types - raw declarations and attribute lists
//!     ↓ elaborate
//! Diagram (these types) - typed, defaulted records
//!     ↓ layout
//! Layout (positioned nodes and edges)
//!     ↓ export
//! SVG
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default fill color of a node.
pub const DEFAULT_NODE_COLOR: &str = "#e0f7fa";
/// Default label color of a node.
pub const DEFAULT_NODE_TEXT_COLOR: &str = "#004d40";
/// Default border color of a node.
pub const DEFAULT_NODE_BORDER_COLOR: &str = "#00796b";
/// Default stroke color of an edge.
pub const DEFAULT_EDGE_COLOR: &str = "#37474f";
/// Default stroke width of an edge.
pub const DEFAULT_EDGE_WIDTH: &str = "2";

/// Layout modifier that switches a flowchart to a single column.
pub const VERTICAL_LAYOUT: &str = "vertical";

/// Error returned when a diagram type name is not in the allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown diagram type `{0}`")]
pub struct UnknownDiagramKind(pub String);

/// The allowed diagram types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramKind {
    /// Nodes laid out in a single row or column.
    Flowchart,
    /// Nodes laid out as a rooted tree.
    Tree,
}

impl DiagramKind {
    /// Returns the source spelling of this diagram kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Tree => "tree",
        }
    }
}

impl FromStr for DiagramKind {
    type Err = UnknownDiagramKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flowchart" => Ok(Self::Flowchart),
            "tree" => Ok(Self::Tree),
            _ => Err(UnknownDiagramKind(s.to_string())),
        }
    }
}

impl Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outline drawn for a node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Rounded rectangle (default)
    #[default]
    Rect,
    /// Ellipse
    Ellipse,
}

impl Shape {
    /// Returns the source spelling of this shape.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Ellipse => "ellipse",
        }
    }
}

impl FromStr for Shape {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rect" => Ok(Self::Rect),
            "ellipse" => Ok(Self::Ellipse),
            _ => Err("Unsupported shape"),
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled shape in the diagram.
///
/// Node IDs are unique by convention only. When two nodes share an ID, lookups
/// keyed by ID resolve to the one declared last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: String,
    label: String,
    color: String,
    text_color: String,
    border_color: String,
    shape: Shape,
}

impl Node {
    /// Create a node with default styling.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: DEFAULT_NODE_COLOR.to_string(),
            text_color: DEFAULT_NODE_TEXT_COLOR.to_string(),
            border_color: DEFAULT_NODE_BORDER_COLOR.to_string(),
            shape: Shape::default(),
        }
    }

    /// Set the fill color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the label color.
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Set the border color.
    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = color.into();
        self
    }

    /// Set the shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn text_color(&self) -> &str {
        &self.text_color
    }

    pub fn border_color(&self) -> &str {
        &self.border_color
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }
}

/// A directed connector between two node IDs.
///
/// The endpoints are not checked against the declared nodes; layout engines
/// resolve a missing endpoint to the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    from: String,
    to: String,
    label: String,
    color: String,
    width: String,
}

impl Edge {
    /// Create an unlabeled edge with default styling.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: String::new(),
            color: DEFAULT_EDGE_COLOR.to_string(),
            width: DEFAULT_EDGE_WIDTH.to_string(),
        }
    }

    /// Set the label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the stroke color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the stroke width. Kept as the literal attribute string.
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    /// The label text; empty when the edge has no label.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn width(&self) -> &str {
        &self.width
    }
}

/// A fully elaborated diagram: kind, optional layout modifier, and the nodes
/// and edges in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    kind: DiagramKind,
    layout: Option<String>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Create a new diagram.
    pub fn new(
        kind: DiagramKind,
        layout: Option<String>,
        nodes: Vec<Node>,
        edges: Vec<Edge>,
    ) -> Self {
        Self {
            kind,
            layout,
            nodes,
            edges,
        }
    }

    /// Get the diagram kind.
    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    /// Get the layout modifier, if one was given.
    pub fn layout(&self) -> Option<&str> {
        self.layout.as_deref()
    }

    /// Returns `true` when the layout modifier is `vertical`.
    pub fn is_vertical(&self) -> bool {
        self.layout() == Some(VERTICAL_LAYOUT)
    }

    /// Borrow the nodes in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Borrow the edges in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagram_kind_from_str() {
        assert_eq!("flowchart".parse(), Ok(DiagramKind::Flowchart));
        assert_eq!("tree".parse(), Ok(DiagramKind::Tree));
        assert_eq!(
            "bogus".parse::<DiagramKind>(),
            Err(UnknownDiagramKind("bogus".to_string()))
        );
        // Case matters
        assert!("Tree".parse::<DiagramKind>().is_err());
    }

    #[test]
    fn test_diagram_kind_display() {
        assert_eq!(DiagramKind::Flowchart.to_string(), "flowchart");
        assert_eq!(DiagramKind::Tree.to_string(), "tree");
    }

    #[test]
    fn test_shape_round_trips_source_spelling() {
        for shape in [Shape::Rect, Shape::Ellipse] {
            assert_eq!(shape.as_str().parse(), Ok(shape));
        }
        assert!("circle".parse::<Shape>().is_err());
    }

    #[test]
    fn test_node_defaults() {
        let node = Node::new("A", "Start");
        assert_eq!(node.id(), "A");
        assert_eq!(node.label(), "Start");
        assert_eq!(node.color(), "#e0f7fa");
        assert_eq!(node.text_color(), "#004d40");
        assert_eq!(node.border_color(), "#00796b");
        assert_eq!(node.shape(), Shape::Rect);
    }

    #[test]
    fn test_edge_defaults() {
        let edge = Edge::new("A", "B");
        assert_eq!(edge.label(), "");
        assert_eq!(edge.color(), "#37474f");
        assert_eq!(edge.width(), "2");
    }

    #[test]
    fn test_is_vertical() {
        let vertical = Diagram::new(
            DiagramKind::Flowchart,
            Some("vertical".to_string()),
            vec![],
            vec![],
        );
        let horizontal = Diagram::new(DiagramKind::Flowchart, None, vec![], vec![]);
        let other = Diagram::new(
            DiagramKind::Flowchart,
            Some("diagonal".to_string()),
            vec![],
            vec![],
        );

        assert!(vertical.is_vertical());
        assert!(!horizontal.is_vertical());
        assert!(!other.is_vertical());
    }
}
