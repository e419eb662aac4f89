//! Visitor
//!
//! Each element calls the visitor method named for its own type.
//!
//! Run with: cargo run --example visitor

use patterncraft::visitor::{Element, ElementA, ElementB, LabelVisitor};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_target(false)
        .init();

    let elements: Vec<Box<dyn Element>> = vec![Box::new(ElementA), Box::new(ElementB)];
    let mut visitor = LabelVisitor::default();

    for element in &elements {
        element.accept(&mut visitor);
    }

    println!("visited: {:?}", visitor.labels());
}
