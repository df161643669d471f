//! Layout strategy selection.
//!
//! A diagram is placed by exactly one [`LayoutStrategy`]. The strategy follows
//! from the diagram kind, its optional layout modifier, and the configured
//! [`TreeEngine`]; [`LayoutStrategy::select`] is the only place that mapping
//! lives.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::diagram::{Diagram, DiagramKind, VERTICAL_LAYOUT};

/// Algorithms available for tree diagrams.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeEngine {
    /// Breadth-first levels, placed left to right in visit order (default)
    #[default]
    LevelOrder,
    /// Leaves first, parents centered over their children
    Recursive,
}

impl FromStr for TreeEngine {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "level_order" => Ok(Self::LevelOrder),
            "recursive" => Ok(Self::Recursive),
            _ => Err("Unsupported tree engine"),
        }
    }
}

impl From<TreeEngine> for &'static str {
    fn from(val: TreeEngine) -> Self {
        match val {
            TreeEngine::LevelOrder => "level_order",
            TreeEngine::Recursive => "recursive",
        }
    }
}

impl Display for TreeEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// The geometry strategies a diagram can be placed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutStrategy {
    /// Flowchart nodes in one row
    Horizontal,
    /// Flowchart nodes in one column
    Vertical,
    /// Tree placed level by level (breadth-first)
    TreeLevelOrder,
    /// Tree placed recursively with parents centered over children
    TreeRecursive,
}

impl LayoutStrategy {
    /// Pick the strategy for a diagram kind and layout modifier.
    ///
    /// | kind        | modifier     | tree engine   | strategy           |
    /// |-------------|--------------|---------------|--------------------|
    /// | `flowchart` | `vertical`   | any           | [`Vertical`]       |
    /// | `flowchart` | anything else| any           | [`Horizontal`]     |
    /// | `tree`      | any          | `level_order` | [`TreeLevelOrder`] |
    /// | `tree`      | any          | `recursive`   | [`TreeRecursive`]  |
    ///
    /// [`Vertical`]: LayoutStrategy::Vertical
    /// [`Horizontal`]: LayoutStrategy::Horizontal
    /// [`TreeLevelOrder`]: LayoutStrategy::TreeLevelOrder
    /// [`TreeRecursive`]: LayoutStrategy::TreeRecursive
    pub fn select(kind: DiagramKind, modifier: Option<&str>, tree_engine: TreeEngine) -> Self {
        match (kind, modifier, tree_engine) {
            (DiagramKind::Flowchart, Some(VERTICAL_LAYOUT), _) => Self::Vertical,
            (DiagramKind::Flowchart, _, _) => Self::Horizontal,
            (DiagramKind::Tree, _, TreeEngine::LevelOrder) => Self::TreeLevelOrder,
            (DiagramKind::Tree, _, TreeEngine::Recursive) => Self::TreeRecursive,
        }
    }

    /// Pick the strategy for a diagram.
    pub fn for_diagram(diagram: &Diagram, tree_engine: TreeEngine) -> Self {
        Self::select(diagram.kind(), diagram.layout(), tree_engine)
    }
}
