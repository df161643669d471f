//! Positioned nodes and edges produced by a layout engine.
//!
//! These wrap a borrowed [`Node`] or [`Edge`] together with the pixel
//! coordinates computed for one render. They are created fresh for every
//! render and never modified afterwards.

use crate::{
    diagram::{Edge, Node},
    geometry::Point,
};

/// A node together with the position of its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedNode<'a> {
    node: &'a Node,
    position: Point,
}

impl<'a> PositionedNode<'a> {
    pub fn new(node: &'a Node, position: Point) -> Self {
        Self { node, position }
    }

    /// Get a reference to the inner node
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// Get the center position of the node
    pub fn position(&self) -> Point {
        self.position
    }
}

/// An edge together with the endpoints of the line drawn for it.
///
/// Endpoints already include the margin that keeps the line from entering
/// the node shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedEdge<'a> {
    edge: &'a Edge,
    start: Point,
    end: Point,
}

impl<'a> PositionedEdge<'a> {
    pub fn new(edge: &'a Edge, start: Point, end: Point) -> Self {
        Self { edge, start, end }
    }

    /// Get a reference to the inner edge
    pub fn edge(&self) -> &'a Edge {
        self.edge
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Midpoint of the drawn line.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

/// The output of every layout strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout<'a> {
    nodes: Vec<PositionedNode<'a>>,
    edges: Vec<PositionedEdge<'a>>,
}

impl<'a> Layout<'a> {
    pub fn new(nodes: Vec<PositionedNode<'a>>, edges: Vec<PositionedEdge<'a>>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[PositionedNode<'a>] {
        &self.nodes
    }

    pub fn edges(&self) -> &[PositionedEdge<'a>] {
        &self.edges
    }

    /// Returns `true` if nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Position of the node placed for `id`, if any.
    ///
    /// When several placed nodes share the ID, the last one wins.
    pub fn node_position(&self, id: &str) -> Option<Point> {
        self.nodes
            .iter()
            .rev()
            .find(|positioned| positioned.node().id() == id)
            .map(PositionedNode::position)
    }
}
