//! Structural views over an elaborated diagram.
//!
//! Layout engines that need more than declaration order build one of these
//! views first. Flowcharts are placed straight from the node list; trees go
//! through [`TreeStructure`] for root detection and child traversal.

mod tree;

pub use tree::TreeStructure;
