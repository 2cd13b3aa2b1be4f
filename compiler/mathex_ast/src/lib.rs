//! Abstract Syntax Tree (AST) for mathex expressions.
//!
//! This crate defines the node type the parser produces, along with
//! utilities for traversing, rendering and serializing trees.

pub mod ast;
pub mod render;
pub mod visit;

// Re-export commonly used types
pub use ast::{BinaryOperator, LetterNode, Node, NodeView, UnaryOperator};
pub use render::AstPrinter;
pub use visit::{collect_letters, VisitError, VisitResult, Visitable, Visitor};

/// A result type for serialization helpers.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Serializes a tree to a pretty-printed JSON string.
///
/// # Example
///
/// ```
/// use mathex_ast::{to_json, Node};
///
/// let json = to_json(&Node::add(Node::number(1.0), Node::letter("x"))).unwrap();
/// assert!(json.contains(r#""type": "Add""#));
/// assert!(json.contains(r#""name": "x""#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes a tree from a JSON string.
///
/// # Examples
///
/// ```
/// use mathex_ast::{from_json, Node};
///
/// let node: Node = from_json(r#"{"type":"Number","value":42.0}"#).unwrap();
/// assert_eq!(node, Node::number(42.0));
/// ```
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> serde::Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
