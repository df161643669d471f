//! Export functionality for Diagra diagrams.
//!
//! This module is the final stage of the pipeline: it turns a diagram and its
//! calculated [`Layout`](diagra_core::positioned::Layout) into output text.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! Diagram
//!     ↓ layout
//! Positioned nodes and edges (Layout)
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::Svg`]

/// SVG export backend.
pub mod svg;
