//! Adjacency view of a diagram used by the tree layout engines.
//!
//! The structure borrows from a [`Diagram`] and indexes it by node ID:
//! - Node lookup by ID, where a later declaration shadows an earlier one
//! - Outgoing edges per node, kept in edge declaration order
//! - The set of IDs that appear as an edge target, used for root detection
//!
//! Edge endpoints are not required to name declared nodes. Children that are
//! not declared are left out of traversal, so they never get a position.

use std::collections::{HashMap, HashSet};

use diagra_core::diagram::{Diagram, Node};

/// Tree-shaped view of a diagram's nodes and edges.
#[derive(Debug)]
pub struct TreeStructure<'a> {
    declared: &'a [Node],
    nodes: HashMap<&'a str, &'a Node>,
    outgoing_edges: HashMap<&'a str, Vec<&'a str>>,
    targets: HashSet<&'a str>,
}

impl<'a> TreeStructure<'a> {
    /// Index the nodes and edges of `diagram`.
    pub fn from_diagram(diagram: &'a Diagram) -> Self {
        let nodes = diagram
            .nodes()
            .iter()
            .map(|node| (node.id(), node))
            .collect();

        let mut outgoing_edges: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
        let mut targets = HashSet::new();
        for edge in diagram.edges() {
            outgoing_edges
                .entry(edge.from())
                .or_default()
                .push(edge.to());
            targets.insert(edge.to());
        }

        Self {
            declared: diagram.nodes(),
            nodes,
            outgoing_edges,
            targets,
        }
    }

    /// Returns the node for `id`, if one is declared.
    ///
    /// With duplicate IDs this is the node declared last.
    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.nodes.get(id).copied()
    }

    /// Returns the first declared node that is never an edge target.
    pub fn root(&self) -> Option<&'a Node> {
        self.declared
            .iter()
            .find(|node| !self.targets.contains(node.id()))
            .and_then(|node| self.node(node.id()))
    }

    /// Returns the declared children of `id`, in edge declaration order.
    ///
    /// A child appears once per edge, so parallel edges repeat it.
    pub fn children(&self, id: &str) -> impl Iterator<Item = &'a Node> + '_ {
        self.outgoing_edges
            .get(id)
            .into_iter()
            .flatten()
            .filter_map(|target| self.node(target))
    }
}
