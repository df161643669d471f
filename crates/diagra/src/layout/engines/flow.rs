//! Flowchart layout engines.
//!
//! Nodes are placed in declaration order along a single row or column, at a
//! fixed spacing from a fixed origin. Edges run between the node centers,
//! pulled inward so the arrow does not point into the middle of a box.

use diagra_core::{
    diagram::Diagram,
    geometry::Point,
    positioned::{Layout, PositionedNode},
};

use super::{position_edges, step};

/// Places nodes one after another along a fixed direction.
pub struct Engine {
    /// Position of the first node
    origin: Point,

    /// Distance between consecutive nodes
    spacing: Point,

    /// How far edge endpoints are pulled in from the node centers
    edge_inset: Point,
}

impl Engine {
    /// Nodes left to right, starting at (150, 150).
    pub fn horizontal() -> Self {
        Self {
            origin: Point::new(150, 150),
            spacing: Point::new(200, 0),
            edge_inset: Point::new(60, 0),
        }
    }

    /// Nodes top to bottom, starting at (400, 100).
    pub fn vertical() -> Self {
        Self {
            origin: Point::new(400, 100),
            spacing: Point::new(0, 120),
            edge_inset: Point::new(0, 30),
        }
    }
}

impl super::Engine for Engine {
    fn calculate<'a>(&self, diagram: &'a Diagram) -> Layout<'a> {
        let nodes: Vec<_> = diagram
            .nodes()
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let position = self
                    .origin
                    .offset(step(index) * self.spacing.x(), step(index) * self.spacing.y());
                PositionedNode::new(node, position)
            })
            .collect();

        let edges = position_edges(diagram, &nodes, self.edge_inset);

        Layout::new(nodes, edges)
    }
}
