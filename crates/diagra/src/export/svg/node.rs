//! SVG rendering for nodes.

use svg::node::element as svg_element;

use diagra_core::{diagram::Shape, positioned::PositionedNode};

use super::Svg;

/// Node box size; ellipses use half of it as radii.
const NODE_WIDTH: i32 = 100;
const NODE_HEIGHT: i32 = 50;
const CORNER_RADIUS: i32 = 10;
const BORDER_WIDTH: i32 = 2;
const LABEL_FONT_SIZE: i32 = 14;
/// Baseline shift that centers the label text vertically.
const LABEL_BASELINE_OFFSET: i32 = 5;

impl Svg<'_> {
    /// Renders the node's shape centered on its position.
    pub fn render_node_shape(&self, node: &PositionedNode<'_>) -> Box<dyn svg::Node> {
        let position = node.position();
        let style = node.node();

        match style.shape() {
            Shape::Rect => Box::new(
                svg_element::Rectangle::new()
                    .set("x", position.x() - NODE_WIDTH / 2)
                    .set("y", position.y() - NODE_HEIGHT / 2)
                    .set("width", NODE_WIDTH)
                    .set("height", NODE_HEIGHT)
                    .set("rx", CORNER_RADIUS)
                    .set("ry", CORNER_RADIUS)
                    .set("fill", style.color())
                    .set("stroke", style.border_color())
                    .set("stroke-width", BORDER_WIDTH),
            ),
            Shape::Ellipse => Box::new(
                svg_element::Ellipse::new()
                    .set("cx", position.x())
                    .set("cy", position.y())
                    .set("rx", NODE_WIDTH / 2)
                    .set("ry", NODE_HEIGHT / 2)
                    .set("fill", style.color())
                    .set("stroke", style.border_color())
                    .set("stroke-width", BORDER_WIDTH),
            ),
        }
    }

    /// Renders the node's label centered on its position.
    pub fn render_node_label(&self, node: &PositionedNode<'_>) -> svg_element::Text {
        let position = node.position();

        svg_element::Text::new(node.node().label())
            .set("x", position.x())
            .set("y", position.y() + LABEL_BASELINE_OFFSET)
            .set("font-size", LABEL_FONT_SIZE)
            .set("text-anchor", "middle")
            .set("fill", node.node().text_color())
    }
}
