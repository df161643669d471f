//! Layout engine factory module
//!
//! This module selects one of the layout engines for a diagram. The choice
//! comes from the diagram kind, its layout modifier and the configured tree
//! engine, see [`LayoutStrategy`].
//!
//! [`EngineBuilder`] holds the configured tree engine and builds layouts.

mod flow;
mod tree;

use std::collections::HashMap;

use log::{debug, trace};

use diagra_core::{
    diagram::Diagram,
    geometry::Point,
    layout::{LayoutStrategy, TreeEngine},
    positioned::{Layout, PositionedEdge, PositionedNode},
};

/// Trait implemented by every layout strategy.
pub trait Engine {
    /// Calculate positions for all nodes and edges of `diagram`.
    ///
    /// Nodes that the strategy does not reach are left out. Every edge of
    /// the diagram is positioned, in declaration order.
    fn calculate<'a>(&self, diagram: &'a Diagram) -> Layout<'a>;
}

/// Builder for creating and configuring layout engines.
#[derive(Debug, Default, Clone, Copy)]
pub struct EngineBuilder {
    tree_engine: TreeEngine,
}

impl EngineBuilder {
    /// Create a new engine builder with the default tree engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine used for tree diagrams
    pub fn with_tree_engine(mut self, tree_engine: TreeEngine) -> Self {
        self.tree_engine = tree_engine;
        self
    }

    /// Create the engine for a strategy
    fn engine(strategy: LayoutStrategy) -> Box<dyn Engine> {
        match strategy {
            LayoutStrategy::Horizontal => Box::new(flow::Engine::horizontal()),
            LayoutStrategy::Vertical => Box::new(flow::Engine::vertical()),
            LayoutStrategy::TreeLevelOrder => Box::new(tree::LevelOrder::new()),
            LayoutStrategy::TreeRecursive => Box::new(tree::Recursive::new()),
        }
    }

    /// Calculate the layout of `diagram` with the engine its kind and
    /// modifier select.
    pub fn build<'a>(&self, diagram: &'a Diagram) -> Layout<'a> {
        let strategy = LayoutStrategy::for_diagram(diagram, self.tree_engine);
        debug!(strategy:?; "Selected layout strategy");

        let layout = Self::engine(strategy).calculate(diagram);
        trace!(layout:?; "Calculated layout");

        layout
    }
}

/// Position every edge of `diagram` between the placed nodes.
///
/// The start point is the source position moved by `inset`, the end point is
/// the target position moved back by `inset`. An endpoint whose node was not
/// placed resolves to the origin, with no inset applied. With duplicate IDs
/// the node placed last wins.
fn position_edges<'a>(
    diagram: &'a Diagram,
    nodes: &[PositionedNode<'a>],
    inset: Point,
) -> Vec<PositionedEdge<'a>> {
    let positions: HashMap<&str, Point> = nodes
        .iter()
        .map(|positioned| (positioned.node().id(), positioned.position()))
        .collect();

    diagram
        .edges()
        .iter()
        .map(|edge| {
            let start = positions
                .get(edge.from())
                .map(|from| from.offset(inset.x(), inset.y()))
                .unwrap_or_default();
            let end = positions
                .get(edge.to())
                .map(|to| to.offset(-inset.x(), -inset.y()))
                .unwrap_or_default();
            PositionedEdge::new(edge, start, end)
        })
        .collect()
}

/// Convert a count into a pixel multiplier.
fn step(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}
