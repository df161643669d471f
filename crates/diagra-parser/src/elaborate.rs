//! Elaboration phase for parsed declarations
//!
//! This module turns the raw declarations from [`parser_types`] into the
//! owned [`diagra_core::diagram`] records. Each attribute list is reconciled
//! against the typed key set of its position: recognized keys override the
//! defaults, unknown keys are ignored.

use std::collections::HashSet;

use log::{debug, trace, warn};

use diagra_core::{
    attribute::{AttributeScope, DiagramAttribute, EdgeAttribute, NodeAttribute},
    diagram::{Diagram, Edge, Node, Shape},
};

use crate::parser_types;

pub struct Builder<'src> {
    seen_node_ids: HashSet<&'src str>,
}

impl<'src> Builder<'src> {
    pub fn new() -> Self {
        Self {
            seen_node_ids: HashSet::new(),
        }
    }

    /// Build a [`Diagram`] from parsed declarations.
    pub fn build(mut self, decl: &parser_types::DiagramDecl<'src>) -> Diagram {
        let layout = self.diagram_layout(&decl.attributes);

        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        for item in &decl.items {
            match item {
                parser_types::Item::Node(node) => nodes.push(self.build_node(node)),
                parser_types::Item::Edge(edge) => edges.push(self.build_edge(edge)),
            }
        }

        let diagram = Diagram::new(decl.kind, layout, nodes, edges);
        trace!(diagram:?; "Elaborated diagram");
        diagram
    }

    fn diagram_layout(&self, attributes: &parser_types::Attributes<'src>) -> Option<String> {
        let mut layout = None;

        for (key, value) in attributes.iter() {
            match key.parse::<DiagramAttribute>() {
                Ok(DiagramAttribute::Layout) => layout = Some(value.to_string()),
                Err(_) => ignore_unknown(AttributeScope::Diagram, key),
            }
        }

        layout
    }

    fn build_node(&mut self, decl: &parser_types::NodeDecl<'src>) -> Node {
        if !self.seen_node_ids.insert(decl.id) {
            warn!(id = decl.id; "Duplicate node id, the later declaration shadows the earlier one");
        }

        let mut node = Node::new(decl.id, decl.label);

        for (key, value) in decl.attributes.iter() {
            node = match key.parse::<NodeAttribute>() {
                Ok(NodeAttribute::Color) => node.with_color(value),
                Ok(NodeAttribute::Text) => node.with_text_color(value),
                Ok(NodeAttribute::Border) => node.with_border_color(value),
                Ok(NodeAttribute::Shape) => node.with_shape(parse_shape(decl.id, value)),
                Err(_) => {
                    ignore_unknown(AttributeScope::Node, key);
                    node
                }
            };
        }

        node
    }

    fn build_edge(&self, decl: &parser_types::EdgeDecl<'src>) -> Edge {
        let mut edge = Edge::new(decl.from, decl.to);

        if let Some(label) = decl.label {
            edge = edge.with_label(label);
        }

        for (key, value) in decl.attributes.iter() {
            edge = match key.parse::<EdgeAttribute>() {
                Ok(EdgeAttribute::Color) => edge.with_color(value),
                Ok(EdgeAttribute::Width) => edge.with_width(value),
                Err(_) => {
                    ignore_unknown(AttributeScope::Edge, key);
                    edge
                }
            };
        }

        edge
    }
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn ignore_unknown(scope: AttributeScope, key: &str) {
    debug!(scope:? = scope, key; "Ignoring unknown attribute");
}

fn parse_shape(node_id: &str, value: &str) -> Shape {
    value.parse().unwrap_or_else(|_| {
        warn!(node_id, shape = value; "Unsupported shape, falling back to rect");
        Shape::Rect
    })
}

#[cfg(test)]
mod tests {
    use diagra_core::diagram::{
        DEFAULT_EDGE_COLOR, DEFAULT_EDGE_WIDTH, DEFAULT_NODE_BORDER_COLOR, DEFAULT_NODE_COLOR,
        DEFAULT_NODE_TEXT_COLOR, DiagramKind,
    };

    use super::*;
    use crate::{lexer::tokenize, parser::build_diagram};

    fn elaborate(source: &str) -> Diagram {
        let tokens = tokenize(source);
        let decl = build_diagram(&tokens).unwrap();
        Builder::new().build(&decl)
    }

    #[test]
    fn test_node_defaults() {
        let diagram = elaborate(r#"diagram flowchart { node A "Start" }"#);
        let node = &diagram.nodes()[0];

        assert_eq!(node.id(), "A");
        assert_eq!(node.label(), "Start");
        assert_eq!(node.color(), DEFAULT_NODE_COLOR);
        assert_eq!(node.text_color(), DEFAULT_NODE_TEXT_COLOR);
        assert_eq!(node.border_color(), DEFAULT_NODE_BORDER_COLOR);
        assert_eq!(node.shape(), Shape::Rect);
    }

    #[test]
    fn test_node_attributes() {
        let diagram = elaborate(
            r##"diagram flowchart {
                node A "Start" (color="#ffcdd2", text="#b71c1c", shape=ellipse, border="#c62828")
            }"##,
        );
        let node = &diagram.nodes()[0];

        assert_eq!(node.color(), "#ffcdd2");
        assert_eq!(node.text_color(), "#b71c1c");
        assert_eq!(node.border_color(), "#c62828");
        assert_eq!(node.shape(), Shape::Ellipse);
    }

    #[test]
    fn test_unknown_shape_falls_back_to_rect() {
        let diagram = elaborate(r#"diagram flowchart { node A "A" (shape=hexagon) }"#);
        assert_eq!(diagram.nodes()[0].shape(), Shape::Rect);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let diagram = elaborate(
            r#"diagram flowchart (theme=dark) {
                node A "A" (glow=yes)
                A -> B (shape=ellipse, width=5)
            }"#,
        );

        assert_eq!(diagram.layout(), None);
        assert_eq!(diagram.nodes()[0].color(), DEFAULT_NODE_COLOR);
        assert_eq!(diagram.edges()[0].color(), DEFAULT_EDGE_COLOR);
        assert_eq!(diagram.edges()[0].width(), "5");
    }

    #[test]
    fn test_edge_defaults_and_label() {
        let diagram = elaborate(r#"diagram flowchart { A -> B A -> C "yes" }"#);
        let edges = diagram.edges();

        assert_eq!(edges[0].label(), "");
        assert_eq!(edges[0].color(), DEFAULT_EDGE_COLOR);
        assert_eq!(edges[0].width(), DEFAULT_EDGE_WIDTH);
        assert_eq!(edges[1].label(), "yes");
    }

    #[test]
    fn test_layout_attribute() {
        let diagram = elaborate("diagram flowchart (layout=vertical) { }");
        assert_eq!(diagram.kind(), DiagramKind::Flowchart);
        assert_eq!(diagram.layout(), Some("vertical"));
        assert!(diagram.is_vertical());
    }

    #[test]
    fn test_duplicate_node_ids_are_kept() {
        let diagram = elaborate(r#"diagram flowchart { node A "first" node A "second" }"#);
        let labels: Vec<_> = diagram.nodes().iter().map(Node::label).collect();
        assert_eq!(labels, ["first", "second"]);
    }
}
