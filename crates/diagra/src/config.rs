//! Configuration types for Diagra diagram rendering.
//!
//! This module provides the configuration structures that control how
//! diagrams are laid out. All types implement [`serde::Deserialize`] so front
//! ends can load them from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`LayoutConfig`] - Controls which [`TreeEngine`] places tree diagrams.
//!
//! # Example
//!
//! ```
//! # use diagra::config::AppConfig;
//! # use diagra_core::layout::TreeEngine;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().tree(), TreeEngine::LevelOrder);
//! ```

use serde::Deserialize;

use diagra_core::layout::TreeEngine;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout configuration.
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

/// Layout configuration.
///
/// Flowcharts are always placed by their `layout` modifier; only trees have
/// a choice of engine.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    /// [`TreeEngine`] for tree diagrams.
    #[serde(default)]
    tree: TreeEngine,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the specified tree engine.
    pub fn new(tree: TreeEngine) -> Self {
        Self { tree }
    }

    /// Returns the [`TreeEngine`] for tree diagrams.
    pub fn tree(&self) -> TreeEngine {
        self.tree
    }
}
