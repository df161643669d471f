//! Diagra Core Types and Definitions
//!
//! This crate provides the foundational types for the Diagra diagram
//! language. It includes:
//!
//! - **Diagram model**: [`diagram::Diagram`], [`diagram::Node`], [`diagram::Edge`]
//! - **Attributes**: typed attribute keys for each declaration ([`attribute`] module)
//! - **Geometry**: integer pixel coordinates ([`geometry::Point`])
//! - **Layout**: strategy selection ([`layout`] module) and positioned output
//!   ([`positioned`] module)

pub mod attribute;
pub mod diagram;
pub mod geometry;
pub mod layout;
pub mod positioned;
