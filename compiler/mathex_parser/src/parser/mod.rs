//! Recursive-descent parser for mathex expressions.
//!
//! The grammar, from lowest to highest binding power:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := exponent (('*' | '/') exponent)*
//! exponent   := factor ('^' factor)*
//! factor     := '(' expression ')' | '[' expression ']'
//!             | NUMBER | LETTER [NUMBER]
//!             | ('+' | '-' | 'sin' | 'cos' | 'exp' | 'sqrt') factor
//! ```
//!
//! Each production is a method on [`Parser`]; they call each other directly
//! and share one [`TokenStream`] cursor.

pub mod config;
pub mod diagnostics;
pub mod error;
mod expressions;
mod factor;
pub mod test_utils;
pub mod token_stream;

use log::debug;
use mathex_ast::{BinaryOperator, Node, UnaryOperator};
use mathex_lexer::{Location, Token};

pub use config::{
    Associativity, Bindings, ParserConfig, DEFAULT_MAX_NESTING_DEPTH, DEFAULT_MAX_TREE_DEPTH,
};
pub use diagnostics::{render_snippet, Diagnostic, Severity};
pub use error::{Delimiter, ParseError, ParseResult};
pub use token_stream::TokenStream;

/// A parsed subtree together with its height (a leaf has height 1).
pub(crate) struct Subtree {
    pub(crate) node: Node,
    pub(crate) height: usize,
}

impl Subtree {
    pub(crate) fn leaf(node: Node) -> Self {
        Subtree { node, height: 1 }
    }
}

/// Parses one token sequence into one expression tree.
///
/// A parser is single-use: [`Parser::parse`] takes it by value, so the
/// cursor cannot be rewound or reused for another parse.
pub struct Parser<I: Iterator<Item = Token>> {
    tokens: TokenStream<I>,
    bindings: Bindings,
    config: ParserConfig,
    /// Current recursion depth, checked against `config.max_depth`
    depth: usize,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Creates a parser with no bindings and the default configuration.
    pub fn new<T>(tokens: T) -> Self
    where
        T: IntoIterator<Item = Token, IntoIter = I>,
    {
        Self::with_config(tokens, Bindings::new(), ParserConfig::default())
    }

    /// Creates a parser that substitutes bound letters with their values.
    pub fn with_bindings<T>(tokens: T, bindings: Bindings) -> Self
    where
        T: IntoIterator<Item = Token, IntoIter = I>,
    {
        Self::with_config(tokens, bindings, ParserConfig::default())
    }

    /// Creates a parser with bindings and an explicit configuration.
    pub fn with_config<T>(tokens: T, bindings: Bindings, config: ParserConfig) -> Self
    where
        T: IntoIterator<Item = Token, IntoIter = I>,
    {
        Parser {
            tokens: TokenStream::new(tokens),
            bindings,
            config,
            depth: 0,
        }
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses the whole token sequence.
    ///
    /// Returns `Ok(None)` for an empty sequence. Otherwise the sequence must
    /// form exactly one expression: leftover tokens are an error.
    pub fn parse(mut self) -> ParseResult<Option<Node>> {
        if self.tokens.is_empty() {
            debug!("empty token sequence, nothing to parse");
            return Ok(None);
        }

        debug!(
            "parsing expression with {} binding(s), {:?}",
            self.bindings.len(),
            self.config
        );
        let result = self.expression()?.node;

        if let Some(token) = self.tokens.advance() {
            return Err(ParseError::TrailingTokens {
                found: token.token_type,
                location: token.location,
            });
        }

        debug!("parsed {} token(s) into {}", self.tokens.position(), result);
        Ok(Some(result))
    }

    /// Runs `f` one nesting level deeper, failing once the configured depth
    /// limit is reached.
    fn descend<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_depth,
                location: self.tokens.location(),
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Builds a binary node, failing when the result would be taller than
    /// `config.max_tree_depth`. Long operator chains grow the tree without
    /// recursing, so `descend` alone does not bound them.
    fn join(
        &self,
        op: BinaryOperator,
        left: Subtree,
        right: Subtree,
        location: Location,
    ) -> ParseResult<Subtree> {
        let height = 1 + left.height.max(right.height);
        self.check_height(height, location)?;
        Ok(Subtree {
            node: Node::binary(op, left.node, right.node),
            height,
        })
    }

    /// Builds a unary node under the same height limit as [`Parser::join`].
    fn wrap(&self, op: UnaryOperator, operand: Subtree, location: Location) -> ParseResult<Subtree> {
        let height = 1 + operand.height;
        self.check_height(height, location)?;
        Ok(Subtree {
            node: Node::unary(op, operand.node),
            height,
        })
    }

    fn check_height(&self, height: usize, location: Location) -> ParseResult<()> {
        if height > self.config.max_tree_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_tree_depth,
                location,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
