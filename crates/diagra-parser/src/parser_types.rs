//! Parser output types.
//!
//! These types hold the declarations exactly as written, borrowing their text
//! from the token stream. Attribute values are still raw strings here;
//! [`elaborate`](crate::elaborate) turns them into typed `diagra-core` records.

use indexmap::IndexMap;

use diagra_core::diagram::DiagramKind;

/// A raw `(key=value, ...)` list.
///
/// Keys keep their first-seen order. A key written twice keeps the value
/// written last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes<'src> {
    entries: IndexMap<&'src str, &'src str>,
}

impl<'src> Attributes<'src> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'src str, value: &'src str) {
        self.entries.insert(key, value);
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&'src str> {
        self.entries.get(key).copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'src str, &'src str)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, *value))
    }
}

/// `node ID "label" (attrs)?`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDecl<'src> {
    pub id: &'src str,
    pub label: &'src str,
    pub attributes: Attributes<'src>,
}

/// `FROM -> TO "label"? (attrs)?`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDecl<'src> {
    pub from: &'src str,
    pub to: &'src str,
    pub label: Option<&'src str>,
    pub attributes: Attributes<'src>,
}

/// A declaration inside the diagram body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item<'src> {
    Node(NodeDecl<'src>),
    Edge(EdgeDecl<'src>),
}

/// `diagram TYPE (attrs)? { item* }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramDecl<'src> {
    pub kind: DiagramKind,
    pub attributes: Attributes<'src>,
    pub items: Vec<Item<'src>>,
}
