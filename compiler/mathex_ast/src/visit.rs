//! Visitor pattern implementation for traversing expression trees.
//!
//! A `Visitor` receives each node in its shape-level form (number, letter,
//! binary, unary) and decides itself whether and when to descend into the
//! children by calling [`Visitable::accept`] on them. Evaluators and
//! printers outside this crate are written as visitors.

use crate::ast::*;

/// The result type for visitor operations.
pub type VisitResult<T = ()> = Result<T, VisitError>;

/// An error that can occur during tree traversal.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// An error with a custom message.
    #[error("{0}")]
    Custom(String),

    /// A letter the visitor needed a value for but had none.
    #[error("unbound letter '{0}'")]
    UnboundLetter(String),
}

impl VisitError {
    /// Creates a new custom error with the given message.
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        VisitError::Custom(msg.into())
    }
}

/// A trait for types that can be visited by a `Visitor`.
pub trait Visitable {
    /// Accepts a visitor and calls the appropriate visit method.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output>;
}

/// A visitor for traversing expression trees.
pub trait Visitor {
    /// The output type of the visitor.
    type Output;

    fn visit_number(&mut self, value: f64) -> VisitResult<Self::Output>;

    fn visit_letter(&mut self, node: &LetterNode) -> VisitResult<Self::Output>;

    fn visit_binary(
        &mut self,
        op: BinaryOperator,
        left: &Node,
        right: &Node,
    ) -> VisitResult<Self::Output>;

    fn visit_unary(&mut self, op: UnaryOperator, operand: &Node) -> VisitResult<Self::Output>;
}

impl Visitable for Node {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        match self.view() {
            NodeView::Number(value) => visitor.visit_number(value),
            NodeView::Letter(letter) => visitor.visit_letter(letter),
            NodeView::Binary(op, left, right) => visitor.visit_binary(op, left, right),
            NodeView::Unary(op, operand) => visitor.visit_unary(op, operand),
        }
    }
}

/// Collects the distinct letter names of a tree in first-seen order.
///
/// Letters inside an index are collected too.
#[derive(Debug, Default)]
pub struct LetterCollector {
    names: Vec<String>,
}

impl LetterCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks `node` and returns the names seen so far.
    pub fn collect(mut self, node: &Node) -> VisitResult<Vec<String>> {
        node.accept(&mut self)?;
        Ok(self.names)
    }
}

impl Visitor for LetterCollector {
    type Output = ();

    fn visit_number(&mut self, _value: f64) -> VisitResult {
        Ok(())
    }

    fn visit_letter(&mut self, node: &LetterNode) -> VisitResult {
        if !self.names.iter().any(|n| n == &node.name) {
            self.names.push(node.name.clone());
        }
        if let Some(index) = &node.index {
            index.accept(self)?;
        }
        Ok(())
    }

    fn visit_binary(&mut self, _op: BinaryOperator, left: &Node, right: &Node) -> VisitResult {
        left.accept(self)?;
        right.accept(self)
    }

    fn visit_unary(&mut self, _op: UnaryOperator, operand: &Node) -> VisitResult {
        operand.accept(self)
    }
}

/// Returns the distinct letter names of `node` in first-seen order.
pub fn collect_letters(node: &Node) -> VisitResult<Vec<String>> {
    LetterCollector::new().collect(node)
}
