//! Example: Creating a diagram from the model types
//!
//! This example builds a tree programmatically, without parsing source code,
//! and renders it with both tree engines.

use diagra::{
    DiagramBuilder, TreeEngine,
    config::{AppConfig, LayoutConfig},
    diagram::{Diagram, DiagramKind, Edge, Node, Shape},
};

fn main() {
    let nodes = vec![
        Node::new("ceo", "CEO").with_shape(Shape::Ellipse),
        Node::new("cto", "CTO"),
        Node::new("cfo", "CFO"),
        Node::new("dev", "Developers").with_color("#fff3e0"),
        Node::new("ops", "Operations").with_color("#fff3e0"),
    ];

    let edges = vec![
        Edge::new("ceo", "cto"),
        Edge::new("ceo", "cfo"),
        Edge::new("cto", "dev").with_label("leads"),
        Edge::new("cto", "ops").with_width("3"),
    ];

    let diagram = Diagram::new(DiagramKind::Tree, None, nodes, edges);

    for engine in [TreeEngine::LevelOrder, TreeEngine::Recursive] {
        let builder = DiagramBuilder::new(AppConfig::new(LayoutConfig::new(engine)));
        let svg = builder.render_svg(&diagram);

        println!("--- {engine} ---");
        println!("{svg}\n");
    }
}
