//! Recursive-descent parser for mathematical expressions.
//!
//! Turns a token sequence from `mathex_lexer` into a `mathex_ast::Node`
//! tree, honouring the usual precedence of `+ - * / ^`, the grouping
//! delimiters `()` and `[]`, unary signs and the functions
//! `sin cos exp sqrt`. Letters can be replaced by numbers at parse time.
//!
//! ```
//! use mathex_ast::Node;
//! use mathex_parser::{parse_str, Bindings, ParserConfig};
//!
//! let bindings = Bindings::from([("x".to_string(), 5.0)]);
//! let tree = parse_str("x + 1", bindings, ParserConfig::default()).unwrap();
//! assert_eq!(tree, Some(Node::add(Node::number(5.0), Node::number(1.0))));
//! ```

pub mod parser;

use mathex_ast::Node;
use mathex_lexer::{LexError, Token};

pub use parser::{
    render_snippet, Associativity, Bindings, Delimiter, Diagnostic, ParseError, ParseResult,
    Parser, ParserConfig, Severity, DEFAULT_MAX_NESTING_DEPTH, DEFAULT_MAX_TREE_DEPTH,
};

/// Errors from lexing and parsing source text in one go.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Converts the error into a renderable diagnostic.
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            Error::Lex(err) => Diagnostic::from(err),
            Error::Parse(err) => Diagnostic::from(err),
        }
    }
}

/// Parses a token sequence with the given bindings and the default
/// configuration.
pub fn parse_tokens<T>(tokens: T, bindings: Bindings) -> ParseResult<Option<Node>>
where
    T: IntoIterator<Item = Token>,
{
    Parser::with_bindings(tokens, bindings).parse()
}

/// Lexes and parses source text.
///
/// Lexing completes before parsing starts, so a lexer error is reported
/// even when the tokens before it would not parse.
pub fn parse_str(
    source: &str,
    bindings: Bindings,
    config: ParserConfig,
) -> Result<Option<Node>, Error> {
    let tokens = mathex_lexer::tokenize(source)?;
    Ok(Parser::with_config(tokens, bindings, config).parse()?)
}


// Integration tests are in the tests/ directory
