//! Typed attribute keys.
//!
//! Attribute lists are written as `(key=value, ...)` after a diagram header,
//! a node, or an edge. Each position accepts its own fixed set of keys, listed
//! here as enums. Parsing a key that is not part of the set fails, and
//! elaboration treats that as "unknown key, ignore it".

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Error returned when an attribute key is not recognized for its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownAttribute;

/// Where an attribute list appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeScope {
    Diagram,
    Node,
    Edge,
}

impl Display for AttributeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Diagram => "diagram",
            Self::Node => "node",
            Self::Edge => "edge",
        };
        f.write_str(s)
    }
}

/// Keys accepted after the diagram type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramAttribute {
    /// `layout` - layout modifier such as `vertical`
    Layout,
}

impl FromStr for DiagramAttribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "layout" => Ok(Self::Layout),
            _ => Err(UnknownAttribute),
        }
    }
}

/// Keys accepted after a node declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeAttribute {
    /// `color` - fill color
    Color,
    /// `text` - label color
    Text,
    /// `shape` - `rect` or `ellipse`
    Shape,
    /// `border` - border color
    Border,
}

impl FromStr for NodeAttribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" => Ok(Self::Color),
            "text" => Ok(Self::Text),
            "shape" => Ok(Self::Shape),
            "border" => Ok(Self::Border),
            _ => Err(UnknownAttribute),
        }
    }
}

/// Keys accepted after an edge declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeAttribute {
    /// `color` - stroke color
    Color,
    /// `width` - stroke width
    Width,
}

impl FromStr for EdgeAttribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" => Ok(Self::Color),
            "width" => Ok(Self::Width),
            _ => Err(UnknownAttribute),
        }
    }
}
