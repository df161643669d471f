//! SVG export backend.
//!
//! [`Svg`] renders a diagram and its layout into one in-memory
//! [`svg::Document`]. The canvas size depends only on the node count and the
//! layout modifier, not on the positions the layout produced:
//!
//! ```text
//! width  = nodes * 200 + 100
//! height = nodes * 100 + 100   (+ 100 for vertical layouts)
//! ```
//!
//! Elements are emitted in a fixed order: every node (shape, then label),
//! every edge (line, then label), and finally the arrow marker definition.
//!
//! Text content is serialized on its own line inside `<text>`. SVG's default
//! `xml:space` handling collapses that surrounding whitespace when drawn.

mod edge;
mod node;

use log::debug;
use svg::Document;

use diagra_core::{diagram::Diagram, positioned::Layout};

/// Horizontal canvas space per node.
const NODE_SPACING_X: i32 = 200;
/// Vertical canvas space per node.
const NODE_SPACING_Y: i32 = 100;
/// Extra space added to both canvas dimensions.
const MARGIN: i32 = 100;
/// Extra height reserved for vertical layouts.
const NODE_HEIGHT: i32 = 100;

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    width: i32,
    height: i32,
}

impl CanvasSize {
    /// Size of the canvas for `diagram`.
    pub fn for_diagram(diagram: &Diagram) -> Self {
        let count = i32::try_from(diagram.nodes().len()).unwrap_or(i32::MAX);

        let width = count.saturating_mul(NODE_SPACING_X).saturating_add(MARGIN);
        let mut height = count.saturating_mul(NODE_SPACING_Y).saturating_add(MARGIN);
        if diagram.is_vertical() {
            height = height.saturating_add(NODE_HEIGHT);
        }

        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

/// SVG renderer for one diagram.
#[derive(Debug)]
pub struct Svg<'a> {
    diagram: &'a Diagram,
}

impl<'a> Svg<'a> {
    pub fn new(diagram: &'a Diagram) -> Self {
        Self { diagram }
    }

    /// Renders the positioned nodes and edges to an SVG document.
    pub fn render_layout(&self, layout: &Layout<'_>) -> Document {
        let size = CanvasSize::for_diagram(self.diagram);
        debug!(width = size.width(), height = size.height(); "Canvas size");

        let mut doc = Document::new()
            .set("width", size.width())
            .set("height", size.height())
            .set(
                "viewBox",
                format!("0 0 {} {}", size.width(), size.height()),
            );

        for node in layout.nodes() {
            doc = doc.add(self.render_node_shape(node));
            doc = doc.add(self.render_node_label(node));
        }

        for edge in layout.edges() {
            doc = doc.add(self.render_edge_line(edge));
            doc = doc.add(self.render_edge_label(edge));
        }

        doc.add(self.marker_definitions())
    }

    /// Renders the layout to SVG text.
    pub fn render_to_string(&self, layout: &Layout<'_>) -> String {
        self.render_layout(layout).to_string()
    }
}

#[cfg(test)]
mod tests {
    use diagra_core::diagram::{DiagramKind, Node};

    use super::*;

    fn nodes(count: usize) -> Vec<Node> {
        (0..count)
            .map(|index| Node::new(index.to_string(), "node"))
            .collect()
    }

    #[test]
    fn test_canvas_size_horizontal() {
        let diagram = Diagram::new(DiagramKind::Flowchart, None, nodes(3), vec![]);
        let size = CanvasSize::for_diagram(&diagram);
        assert_eq!(size.width(), 700);
        assert_eq!(size.height(), 400);
    }

    #[test]
    fn test_canvas_size_vertical() {
        let diagram = Diagram::new(
            DiagramKind::Flowchart,
            Some("vertical".to_string()),
            nodes(3),
            vec![],
        );
        let size = CanvasSize::for_diagram(&diagram);
        assert_eq!(size.width(), 700);
        assert_eq!(size.height(), 500);
    }

    #[test]
    fn test_canvas_size_empty() {
        let diagram = Diagram::new(DiagramKind::Tree, None, vec![], vec![]);
        let size = CanvasSize::for_diagram(&diagram);
        assert_eq!((size.width(), size.height()), (100, 100));
    }

    #[test]
    fn test_empty_document_has_only_defs() {
        let diagram = Diagram::new(DiagramKind::Flowchart, None, vec![], vec![]);
        let output = Svg::new(&diagram).render_to_string(&Layout::default());

        assert!(output.starts_with("<svg"));
        assert!(output.trim_end().ends_with("</svg>"));
        assert!(output.contains(r#"viewBox="0 0 100 100""#));
        assert_eq!(output.matches("<defs").count(), 1);
        assert!(!output.contains("<rect"));
        assert!(!output.contains("<line"));
        assert!(!output.contains("<text"));
    }
}
