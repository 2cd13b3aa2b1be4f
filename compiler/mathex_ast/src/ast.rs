// Abstract Syntax Tree (AST) definitions for mathex expressions.
// Every node owns its children; trees are built bottom-up by the parser and
// never mutated afterwards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of a parsed expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum Node {
    Number(f64),
    Letter(LetterNode),

    Add(Box<Node>, Box<Node>),
    Subtract(Box<Node>, Box<Node>),
    Multiply(Box<Node>, Box<Node>),
    Divide(Box<Node>, Box<Node>),
    Power(Box<Node>, Box<Node>),

    Plus(Box<Node>),
    Minus(Box<Node>),

    Sin(Box<Node>),
    Cos(Box<Node>),
    Exp(Box<Node>),
    Sqrt(Box<Node>),
}

/// An unresolved variable, optionally indexed (`x2` read as x sub 2).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterNode {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub index: Option<Box<Node>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Power => "^",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Sin,
    Cos,
    Exp,
    Sqrt,
}

impl UnaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Sin => "sin",
            UnaryOperator::Cos => "cos",
            UnaryOperator::Exp => "exp",
            UnaryOperator::Sqrt => "sqrt",
        }
    }

    /// True for the named functions, false for the sign operators.
    pub fn is_function(self) -> bool {
        !matches!(self, UnaryOperator::Plus | UnaryOperator::Minus)
    }
}

/// A borrowed, shape-level view of a [`Node`].
///
/// Collapses the twelve node variants into four shapes so consumers that
/// treat all binary (or all unary) nodes alike need a single match arm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeView<'a> {
    Number(f64),
    Letter(&'a LetterNode),
    Binary(BinaryOperator, &'a Node, &'a Node),
    Unary(UnaryOperator, &'a Node),
}

impl Node {
    pub fn number(value: f64) -> Self {
        Node::Number(value)
    }

    pub fn letter<S: Into<String>>(name: S) -> Self {
        Node::Letter(LetterNode {
            name: name.into(),
            index: None,
        })
    }

    pub fn indexed_letter<S: Into<String>>(name: S, index: Node) -> Self {
        Node::Letter(LetterNode {
            name: name.into(),
            index: Some(Box::new(index)),
        })
    }

    /// Builds the binary node for `op`.
    pub fn binary(op: BinaryOperator, left: Node, right: Node) -> Self {
        let (left, right) = (Box::new(left), Box::new(right));
        match op {
            BinaryOperator::Add => Node::Add(left, right),
            BinaryOperator::Subtract => Node::Subtract(left, right),
            BinaryOperator::Multiply => Node::Multiply(left, right),
            BinaryOperator::Divide => Node::Divide(left, right),
            BinaryOperator::Power => Node::Power(left, right),
        }
    }

    /// Builds the unary node for `op`.
    pub fn unary(op: UnaryOperator, operand: Node) -> Self {
        let operand = Box::new(operand);
        match op {
            UnaryOperator::Plus => Node::Plus(operand),
            UnaryOperator::Minus => Node::Minus(operand),
            UnaryOperator::Sin => Node::Sin(operand),
            UnaryOperator::Cos => Node::Cos(operand),
            UnaryOperator::Exp => Node::Exp(operand),
            UnaryOperator::Sqrt => Node::Sqrt(operand),
        }
    }

    pub fn add(left: Node, right: Node) -> Self {
        Self::binary(BinaryOperator::Add, left, right)
    }

    pub fn subtract(left: Node, right: Node) -> Self {
        Self::binary(BinaryOperator::Subtract, left, right)
    }

    pub fn multiply(left: Node, right: Node) -> Self {
        Self::binary(BinaryOperator::Multiply, left, right)
    }

    pub fn divide(left: Node, right: Node) -> Self {
        Self::binary(BinaryOperator::Divide, left, right)
    }

    pub fn power(left: Node, right: Node) -> Self {
        Self::binary(BinaryOperator::Power, left, right)
    }

    pub fn plus(operand: Node) -> Self {
        Self::unary(UnaryOperator::Plus, operand)
    }

    pub fn minus(operand: Node) -> Self {
        Self::unary(UnaryOperator::Minus, operand)
    }

    pub fn sin(operand: Node) -> Self {
        Self::unary(UnaryOperator::Sin, operand)
    }

    pub fn cos(operand: Node) -> Self {
        Self::unary(UnaryOperator::Cos, operand)
    }

    pub fn exp(operand: Node) -> Self {
        Self::unary(UnaryOperator::Exp, operand)
    }

    pub fn sqrt(operand: Node) -> Self {
        Self::unary(UnaryOperator::Sqrt, operand)
    }

    /// Returns the shape-level view of this node.
    pub fn view(&self) -> NodeView<'_> {
        match self {
            Node::Number(value) => NodeView::Number(*value),
            Node::Letter(letter) => NodeView::Letter(letter),
            Node::Add(l, r) => NodeView::Binary(BinaryOperator::Add, l, r),
            Node::Subtract(l, r) => NodeView::Binary(BinaryOperator::Subtract, l, r),
            Node::Multiply(l, r) => NodeView::Binary(BinaryOperator::Multiply, l, r),
            Node::Divide(l, r) => NodeView::Binary(BinaryOperator::Divide, l, r),
            Node::Power(l, r) => NodeView::Binary(BinaryOperator::Power, l, r),
            Node::Plus(operand) => NodeView::Unary(UnaryOperator::Plus, operand),
            Node::Minus(operand) => NodeView::Unary(UnaryOperator::Minus, operand),
            Node::Sin(operand) => NodeView::Unary(UnaryOperator::Sin, operand),
            Node::Cos(operand) => NodeView::Unary(UnaryOperator::Cos, operand),
            Node::Exp(operand) => NodeView::Unary(UnaryOperator::Exp, operand),
            Node::Sqrt(operand) => NodeView::Unary(UnaryOperator::Sqrt, operand),
        }
    }

    /// Number of `Number` and `Letter` leaves, counting leaves inside
    /// letter indices.
    pub fn leaf_count(&self) -> usize {
        match self.view() {
            NodeView::Number(_) => 1,
            NodeView::Letter(letter) => 1 + letter.index.as_ref().map_or(0, |i| i.leaf_count()),
            NodeView::Binary(_, left, right) => left.leaf_count() + right.leaf_count(),
            NodeView::Unary(_, operand) => operand.leaf_count(),
        }
    }

    /// Height of the tree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self.view() {
            NodeView::Number(_) => 1,
            NodeView::Letter(letter) => 1 + letter.index.as_ref().map_or(0, |i| i.depth()),
            NodeView::Binary(_, left, right) => 1 + left.depth().max(right.depth()),
            NodeView::Unary(_, operand) => 1 + operand.depth(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Number(_) | Node::Letter(_))
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Number(value)
    }
}

impl From<LetterNode> for Node {
    fn from(letter: LetterNode) -> Self {
        Node::Letter(letter)
    }
}
