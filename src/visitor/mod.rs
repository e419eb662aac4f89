//! Double dispatch over a two-element hierarchy.
//!
//! An element hands itself to the visitor method named for its own variant,
//! so the operation run depends on both the element and the visitor.

use tracing::info;

/// Operations over every element variant.
pub trait Visitor {
    fn visit_a(&mut self, element: &ElementA);
    fn visit_b(&mut self, element: &ElementB);
}

/// Something a [`Visitor`] can be applied to.
pub trait Element {
    fn accept(&self, visitor: &mut dyn Visitor);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementA;

impl Element for ElementA {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_a(self);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementB;

impl Element for ElementB {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_b(self);
    }
}

/// Visitor that announces each element it sees.
///
/// Labels are logged at info level and kept in visiting order.
///
/// ```rust
/// use patterncraft::visitor::{Element, ElementA, ElementB, LabelVisitor};
///
/// let elements: Vec<Box<dyn Element>> = vec![Box::new(ElementB), Box::new(ElementA)];
/// let mut visitor = LabelVisitor::default();
/// for element in &elements {
///     element.accept(&mut visitor);
/// }
/// assert_eq!(visitor.labels(), ["visit B", "visit A"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LabelVisitor {
    labels: Vec<&'static str>,
}

impl LabelVisitor {
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    fn emit(&mut self, label: &'static str) {
        info!("{}", label);
        self.labels.push(label);
    }
}

impl Visitor for LabelVisitor {
    fn visit_a(&mut self, _element: &ElementA) {
        self.emit("visit A");
    }

    fn visit_b(&mut self, _element: &ElementB) {
        self.emit("visit B");
    }
}
