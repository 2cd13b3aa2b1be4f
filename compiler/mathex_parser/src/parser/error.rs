use std::fmt;

use mathex_lexer::{Location, TokenType};

/// The two interchangeable grouping delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Paren,
    Bracket,
}

impl Delimiter {
    /// The token that opens this grouping
    pub fn open(self) -> TokenType {
        match self {
            Delimiter::Paren => TokenType::LParen,
            Delimiter::Bracket => TokenType::LBracket,
        }
    }

    /// The token that closes this grouping
    pub fn close(self) -> TokenType {
        match self {
            Delimiter::Paren => TokenType::RParen,
            Delimiter::Bracket => TokenType::RBracket,
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Paren => write!(f, "'(' ... ')'"),
            Delimiter::Bracket => write!(f, "'[' ... ']'"),
        }
    }
}

/// Errors raised by the parser. Every variant is a syntax error; the parser
/// stops at the first one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A token that cannot start an operand
    #[error("invalid syntax: unexpected {found} at {location}")]
    UnexpectedToken { found: TokenType, location: Location },

    /// The input ended where an operand was required
    #[error("invalid syntax: unexpected end of input after {location}")]
    UnexpectedEndOfInput { location: Location },

    /// A grouping closed by something other than its own delimiter
    #[error("invalid syntax: expected the end of {delimiter} but found {found} at {location}")]
    MismatchedDelimiter {
        delimiter: Delimiter,
        found: TokenType,
        location: Location,
    },

    /// The input ended inside a grouping
    #[error("invalid syntax: unclosed {delimiter} opened at {opened_at}")]
    UnclosedDelimiter {
        delimiter: Delimiter,
        opened_at: Location,
    },

    /// Tokens left over after a complete expression
    #[error("invalid syntax: unexpected trailing {found} at {location}")]
    TrailingTokens { found: TokenType, location: Location },

    /// Nesting beyond the configured depth limit
    #[error("invalid syntax: expression nests deeper than {limit} levels at {location}")]
    NestingTooDeep { limit: usize, location: Location },
}

impl ParseError {
    /// Where the error was detected
    pub fn location(&self) -> Location {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::UnexpectedEndOfInput { location }
            | ParseError::MismatchedDelimiter { location, .. }
            | ParseError::TrailingTokens { location, .. }
            | ParseError::NestingTooDeep { location, .. } => *location,
            ParseError::UnclosedDelimiter { opened_at, .. } => *opened_at,
        }
    }

    /// The offending token, when the error was caused by one
    pub fn token(&self) -> Option<&TokenType> {
        match self {
            ParseError::UnexpectedToken { found, .. }
            | ParseError::MismatchedDelimiter { found, .. }
            | ParseError::TrailingTokens { found, .. } => Some(found),
            ParseError::UnexpectedEndOfInput { .. }
            | ParseError::UnclosedDelimiter { .. }
            | ParseError::NestingTooDeep { .. } => None,
        }
    }
}

/// Result alias used throughout the parser
pub type ParseResult<T> = Result<T, ParseError>;
