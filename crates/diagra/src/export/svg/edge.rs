//! SVG rendering for edges and the arrow marker.

use svg::node::element as svg_element;

use diagra_core::{diagram::DEFAULT_EDGE_COLOR, positioned::PositionedEdge};

use super::Svg;

const ARROW_MARKER_ID: &str = "arrow";
const LABEL_FONT_SIZE: i32 = 12;

impl Svg<'_> {
    /// Renders the edge as a straight line ending in an arrow.
    pub fn render_edge_line(&self, edge: &PositionedEdge<'_>) -> svg_element::Line {
        let start = edge.start();
        let end = edge.end();

        svg_element::Line::new()
            .set("x1", start.x())
            .set("y1", start.y())
            .set("x2", end.x())
            .set("y2", end.y())
            .set("stroke", edge.edge().color())
            .set("stroke-width", edge.edge().width())
            .set("marker-end", format!("url(#{ARROW_MARKER_ID})"))
    }

    /// Renders the edge label next to the line's midpoint.
    ///
    /// Vertical layouts put the label to the right of the line, all others
    /// put it above.
    pub fn render_edge_label(&self, edge: &PositionedEdge<'_>) -> svg_element::Text {
        let (dx, dy) = if self.diagram.is_vertical() {
            (20, -10)
        } else {
            (-20, -15)
        };
        let position = edge.midpoint().offset(dx, dy);

        svg_element::Text::new(edge.edge().label())
            .set("x", position.x())
            .set("y", position.y())
            .set("font-size", LABEL_FONT_SIZE)
            .set("text-anchor", "start")
            .set("fill", DEFAULT_EDGE_COLOR)
    }

    /// Definitions block with the arrow head referenced by every edge.
    pub fn marker_definitions(&self) -> svg_element::Definitions {
        let marker = svg_element::Marker::new()
            .set("id", ARROW_MARKER_ID)
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto-start-reverse")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", DEFAULT_EDGE_COLOR),
            );

        svg_element::Definitions::new().add(marker)
    }
}

#[cfg(test)]
mod tests {
    use diagra_core::{
        diagram::{Diagram, DiagramKind, Edge},
        geometry::Point,
    };

    use super::*;

    fn diagram(layout: Option<&str>) -> Diagram {
        Diagram::new(
            DiagramKind::Flowchart,
            layout.map(str::to_string),
            vec![],
            vec![],
        )
    }

    #[test]
    fn test_edge_line() {
        let diagram = diagram(None);
        let edge = Edge::new("A", "B").with_color("red").with_width("4");
        let positioned = PositionedEdge::new(&edge, Point::new(210, 150), Point::new(290, 150));

        let output = Svg::new(&diagram).render_edge_line(&positioned).to_string();

        assert!(output.starts_with("<line"));
        assert!(output.contains(r#"x1="210""#));
        assert!(output.contains(r#"x2="290""#));
        assert!(output.contains(r#"stroke="red""#));
        assert!(output.contains(r#"stroke-width="4""#));
        assert!(output.contains(r#"marker-end="url(#arrow)""#));
    }

    #[test]
    fn test_label_offset_horizontal() {
        let diagram = diagram(None);
        let edge = Edge::new("A", "B").with_label("next");
        let positioned = PositionedEdge::new(&edge, Point::new(210, 150), Point::new(290, 150));

        let output = Svg::new(&diagram).render_edge_label(&positioned).to_string();

        // Midpoint (250, 150) moved by (-20, -15)
        assert!(output.contains(r#"x="230""#));
        assert!(output.contains(r#"y="135""#));
        assert!(output.contains(r#"font-size="12""#));
        assert!(output.contains(r#"text-anchor="start""#));
        assert!(output.contains(r##"fill="#37474f""##));
        assert!(output.contains(">\nnext\n</text>"));
    }

    #[test]
    fn test_label_offset_vertical() {
        let diagram = diagram(Some("vertical"));
        let edge = Edge::new("A", "B").with_label("down");
        let positioned = PositionedEdge::new(&edge, Point::new(400, 130), Point::new(400, 190));

        let output = Svg::new(&diagram).render_edge_label(&positioned).to_string();

        // Midpoint (400, 160) moved by (20, -10)
        assert!(output.contains(r#"x="420""#));
        assert!(output.contains(r#"y="150""#));
    }

    #[test]
    fn test_marker_definitions() {
        let diagram = diagram(None);
        let output = Svg::new(&diagram).marker_definitions().to_string();

        assert!(output.starts_with("<defs"));
        assert!(output.contains(r#"id="arrow""#));
        assert!(output.contains(r#"orient="auto-start-reverse""#));
        assert!(output.contains(r#"d="M 0 0 L 10 5 L 0 10 z""#));
    }
}
