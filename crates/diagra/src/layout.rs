//! Layout engines for positioning diagram elements.
//!
//! This module turns an elaborated [`Diagram`](diagra_core::diagram::Diagram)
//! into a [`Layout`](diagra_core::positioned::Layout) of nodes and edges with
//! integer pixel coordinates.
//!
//! # Pipeline Position
//!
//! ```text
//! Diagram
//!     ↓ layout (this module)
//! Layout
//!     ↓ export
//! SVG
//! ```
//!
//! The strategy is picked by
//! [`LayoutStrategy::for_diagram`](diagra_core::layout::LayoutStrategy::for_diagram)
//! and each strategy is one `Engine` implementation. Layout never fails: an
//! edge endpoint that names no placed node resolves to the origin.

mod engines;

pub use engines::EngineBuilder;
