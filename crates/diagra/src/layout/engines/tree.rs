//! Tree layout engines.
//!
//! Both engines start from the root found by [`TreeStructure::root`] and only
//! traverse declared nodes. A diagram without a root (empty, or every node is
//! an edge target) produces an empty layout.

use std::collections::{HashMap, HashSet, VecDeque};

use log::debug;

use diagra_core::{
    diagram::{Diagram, Node},
    geometry::Point,
    positioned::{Layout, PositionedNode},
};

use super::{position_edges, step};
use crate::structure::TreeStructure;

/// Vertical distance from a node center to where its edges attach.
const EDGE_INSET: Point = Point::new(0, 25);

/// Breadth-first tree layout.
///
/// Each node gets the level at which it is first reached. Nodes on the same
/// level are placed left to right in visit order.
pub struct LevelOrder {
    origin: Point,
    node_spacing: i32,
    level_spacing: i32,
}

impl LevelOrder {
    pub fn new() -> Self {
        Self {
            origin: Point::new(100, 100),
            node_spacing: 160,
            level_spacing: 120,
        }
    }

    /// Group reachable nodes by level, in visit order.
    fn levels<'a>(structure: &TreeStructure<'a>, root: &'a Node) -> Vec<Vec<&'a Node>> {
        let mut levels: Vec<Vec<&'a Node>> = Vec::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([(root, 0)]);

        while let Some((node, level)) = queue.pop_front() {
            if !visited.insert(node.id()) {
                continue;
            }

            if levels.len() <= level {
                levels.resize_with(level + 1, Vec::new);
            }
            levels[level].push(node);

            queue.extend(
                structure
                    .children(node.id())
                    .map(|child| (child, level + 1)),
            );
        }

        levels
    }
}

impl super::Engine for LevelOrder {
    fn calculate<'a>(&self, diagram: &'a Diagram) -> Layout<'a> {
        let structure = TreeStructure::from_diagram(diagram);
        let Some(root) = structure.root() else {
            debug!("Tree has no root, nothing to place");
            return Layout::default();
        };

        let nodes: Vec<_> = Self::levels(&structure, root)
            .into_iter()
            .enumerate()
            .flat_map(|(level, nodes)| {
                nodes.into_iter().enumerate().map(move |(index, node)| {
                    let position = self.origin.offset(
                        step(index) * self.node_spacing,
                        step(level) * self.level_spacing,
                    );
                    PositionedNode::new(node, position)
                })
            })
            .collect();

        let edges = position_edges(diagram, &nodes, EDGE_INSET);

        Layout::new(nodes, edges)
    }
}

/// Recursive tree layout with parents centered over their children.
///
/// Leaves are placed first, left to right, on a shared cursor. An inner node
/// sits halfway between its first and last placed child. A node reached a
/// second time keeps its first placement, so cycles and shared children are
/// laid out once.
pub struct Recursive {
    leaf_spacing: i32,
    level_spacing: i32,
    margin: Point,
}

/// Mutable state of one recursive placement run.
#[derive(Default)]
struct Placement<'a> {
    cursor: i32,
    visited: HashSet<&'a str>,
    positions: HashMap<&'a str, Point>,
}

/// A node whose children are still being placed.
struct Frame<'a> {
    node: &'a Node,
    depth: usize,
    children: std::vec::IntoIter<&'a Node>,
    first_child_x: Option<i32>,
    last_child_x: Option<i32>,
}

impl<'a> Frame<'a> {
    fn new(structure: &TreeStructure<'a>, node: &'a Node, depth: usize) -> Self {
        Self {
            node,
            depth,
            children: structure.children(node.id()).collect::<Vec<_>>().into_iter(),
            first_child_x: None,
            last_child_x: None,
        }
    }
}

impl Recursive {
    pub fn new() -> Self {
        Self {
            leaf_spacing: 80,
            level_spacing: 120,
            margin: Point::new(100, 50),
        }
    }

    /// Place `root` and its unvisited descendants, children before parents.
    ///
    /// Walks with an explicit stack, so tree depth is bounded by memory only.
    fn place<'a>(
        &self,
        structure: &TreeStructure<'a>,
        root: &'a Node,
        placement: &mut Placement<'a>,
    ) {
        placement.visited.insert(root.id());
        let mut stack = vec![Frame::new(structure, root, 0)];

        while let Some(frame) = stack.last_mut() {
            match frame.children.next() {
                Some(child) => {
                    if placement.visited.insert(child.id()) {
                        let depth = frame.depth + 1;
                        stack.push(Frame::new(structure, child, depth));
                    }
                }
                None => {
                    let Some(frame) = stack.pop() else {
                        break;
                    };

                    let x = match (frame.first_child_x, frame.last_child_x) {
                        (Some(first), Some(last)) => (first + last) / 2,
                        _ => {
                            let x = placement.cursor;
                            placement.cursor += self.leaf_spacing;
                            x
                        }
                    };

                    placement.positions.insert(
                        frame.node.id(),
                        Point::new(x, step(frame.depth) * self.level_spacing),
                    );

                    if let Some(parent) = stack.last_mut() {
                        parent.first_child_x.get_or_insert(x);
                        parent.last_child_x = Some(x);
                    }
                }
            }
        }
    }
}

impl super::Engine for Recursive {
    fn calculate<'a>(&self, diagram: &'a Diagram) -> Layout<'a> {
        let structure = TreeStructure::from_diagram(diagram);
        let Some(root) = structure.root() else {
            debug!("Tree has no root, nothing to place");
            return Layout::default();
        };

        let mut placement = Placement::default();
        self.place(&structure, root, &mut placement);

        // Declaration order, one entry per placed ID
        let nodes: Vec<_> = diagram
            .nodes()
            .iter()
            .filter(|node| {
                structure
                    .node(node.id())
                    .is_some_and(|placed| std::ptr::eq(placed, *node))
            })
            .filter_map(|node| {
                placement.positions.get(node.id()).map(|position| {
                    PositionedNode::new(
                        node,
                        position.offset(self.margin.x(), self.margin.y()),
                    )
                })
            })
            .collect();

        let edges = position_edges(diagram, &nodes, EDGE_INSET);

        Layout::new(nodes, edges)
    }
}
