//! Lexer for mathex expressions built on the `logos` crate
//! Tracks line and column positions so the parser can point at bad tokens

use logos::Logos;
use std::ops::Range;

use crate::error::LexError;
use crate::token::{Location, Token, TokenType};
use crate::LogosToken;

/// The main lexer struct that holds the state of the lexing process
pub struct Lexer<'a> {
    /// The source text being lexed
    source: &'a str,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The byte offset `line` and `column` refer to
    offset: usize,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
            offset: 0,
            inner: LogosToken::lexer(source),
        }
    }

    /// Move the line/column tracking forward to `target`.
    /// Counts characters, not bytes, so multi-byte input keeps columns right.
    fn sync_position_to(&mut self, target: usize) {
        let text = &self.source[self.offset..target];

        let mut iter = text.chars().peekable();
        while let Some(c) = iter.next() {
            match c {
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                '\r' => {
                    // \r\n counts as a single line break
                    if iter.peek() == Some(&'\n') {
                        iter.next();
                    }
                    self.line += 1;
                    self.column = 1;
                }
                _ => self.column += 1,
            }
        }

        self.offset = target;
    }

    /// Location of the byte at `span.start`, after syncing to it
    fn location_of(&mut self, span: &Range<usize>) -> Location {
        self.sync_position_to(span.start);
        Location::new(self.line, self.column, self.offset)
    }

    /// Convert a LogosToken to our semantic TokenType
    fn convert_token(logos_token: LogosToken) -> TokenType {
        match logos_token {
            LogosToken::Number(value) => TokenType::Number(value),
            LogosToken::Letter(name) => TokenType::Letter(name),

            LogosToken::Plus => TokenType::Plus,
            LogosToken::Minus => TokenType::Minus,
            LogosToken::Multiply => TokenType::Multiply,
            LogosToken::Divide => TokenType::Divide,
            LogosToken::Power => TokenType::Power,

            LogosToken::LParen => TokenType::LParen,
            LogosToken::RParen => TokenType::RParen,
            LogosToken::LBracket => TokenType::LBracket,
            LogosToken::RBracket => TokenType::RBracket,

            LogosToken::Sin => TokenType::Sin,
            LogosToken::Cos => TokenType::Cos,
            LogosToken::Exp => TokenType::Exp,
            LogosToken::Sqrt => TokenType::Sqrt,
        }
    }

    /// Get the next token from the source text
    pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        let source = self.source;
        let lexeme = &source[span.clone()];
        let location = self.location_of(&span);

        match result {
            Ok(logos_token) => {
                let token = Token::new(Self::convert_token(logos_token), lexeme, location);
                #[cfg(feature = "logging")]
                log::trace!("lexed {} '{}' at {}", token.token_type, lexeme, location);
                Some(Ok(token))
            }
            Err(()) => {
                #[cfg(feature = "logging")]
                log::debug!("no token matches '{}' at {}", lexeme, location);
                Some(Err(LexError::UnexpectedCharacter {
                    lexeme: lexeme.to_string(),
                    location,
                }))
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Lex the whole source, stopping at the first error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}
