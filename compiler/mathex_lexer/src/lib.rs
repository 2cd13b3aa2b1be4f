//! mathex lexical analyzer
//!
//! Converts the source text of a mathematical expression into a stream of
//! tokens for the parser: numbers, single letters, the operators
//! `+ - * / ^`, parentheses, brackets and the functions `sin`, `cos`, `exp`
//! and `sqrt`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::{tokenize, Lexer};
pub use logos_token::LogosToken;
pub use token::{Location, Token, TokenType};
