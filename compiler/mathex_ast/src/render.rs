//! Text rendering of expression trees.
//!
//! Binary nodes are always parenthesized, so the rendered text states the
//! tree's grouping explicitly and lexes back into the same tree (for trees
//! the parser produces from plain source).

use std::fmt;

use crate::ast::{LetterNode, Node, NodeView};

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.view() {
            // Negative numbers only appear through substitution; the
            // parentheses keep the sign from reading as a binary minus.
            NodeView::Number(value) if value.is_sign_negative() && value != 0.0 => {
                write!(f, "({value})")
            }
            NodeView::Number(value) => write!(f, "{value}"),
            NodeView::Letter(letter) => write!(f, "{letter}"),
            NodeView::Binary(op, left, right) => {
                write!(f, "({left} {} {right})", op.symbol())
            }
            NodeView::Unary(op, operand) if op.is_function() => {
                if operand.is_leaf() {
                    write!(f, "{}({operand})", op.symbol())
                } else {
                    write!(f, "{} {operand}", op.symbol())
                }
            }
            NodeView::Unary(op, operand) => write!(f, "{}{operand}", op.symbol()),
        }
    }
}

impl fmt::Display for LetterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index.as_deref() {
            None => write!(f, "{}", self.name),
            Some(index @ Node::Number(_)) => write!(f, "{}{index}", self.name),
            Some(index) => write!(f, "{}[{index}]", self.name),
        }
    }
}

/// A utility for pretty-printing trees as an indented outline, one node per
/// line.
pub struct AstPrinter {
    indent: usize,
}

impl Default for AstPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl AstPrinter {
    /// Creates a new `AstPrinter` with the default indent of two spaces.
    pub fn new() -> Self {
        Self { indent: 2 }
    }

    /// Creates a printer with a custom indent width.
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    /// Prints a tree to a string.
    pub fn print(&self, node: &Node) -> String {
        let mut out = String::new();
        self.print_into(node, 0, &mut out);
        out
    }

    fn print_into(&self, node: &Node, level: usize, out: &mut String) {
        let pad = " ".repeat(level * self.indent);
        match node.view() {
            NodeView::Number(value) => out.push_str(&format!("{pad}Number({value})\n")),
            NodeView::Letter(letter) => {
                out.push_str(&format!("{pad}Letter({})\n", letter.name));
                if let Some(index) = &letter.index {
                    self.print_into(index, level + 1, out);
                }
            }
            NodeView::Binary(op, left, right) => {
                out.push_str(&format!("{pad}{op:?}\n"));
                self.print_into(left, level + 1, out);
                self.print_into(right, level + 1, out);
            }
            NodeView::Unary(op, operand) => {
                out.push_str(&format!("{pad}{op:?}\n"));
                self.print_into(operand, level + 1, out);
            }
        }
    }
}
