use log::{debug, trace};
use mathex_ast::{Node, UnaryOperator};
use mathex_lexer::{Location, Token, TokenType};

use crate::parser::{Delimiter, ParseError, ParseResult, Parser, Subtree};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// The atomic production: a literal, a letter, a grouping, or a sign or
    /// function applied to another factor.
    pub(crate) fn factor(&mut self) -> ParseResult<Subtree> {
        let token = match self.tokens.advance() {
            Some(token) => token,
            None => {
                return Err(ParseError::UnexpectedEndOfInput {
                    location: self.tokens.location(),
                })
            }
        };
        trace!("factor {} at {}", token.token_type, token.location);

        match token.token_type {
            TokenType::LParen => self.group(Delimiter::Paren, token.location),
            TokenType::LBracket => self.group(Delimiter::Bracket, token.location),

            TokenType::Number(value) => Ok(Subtree::leaf(Node::Number(value))),
            TokenType::Letter(name) => self.letter(name, token.location),

            TokenType::Plus => self.prefixed(UnaryOperator::Plus, token.location),
            TokenType::Minus => self.prefixed(UnaryOperator::Minus, token.location),
            TokenType::Sin => self.prefixed(UnaryOperator::Sin, token.location),
            TokenType::Cos => self.prefixed(UnaryOperator::Cos, token.location),
            TokenType::Exp => self.prefixed(UnaryOperator::Exp, token.location),
            TokenType::Sqrt => self.prefixed(UnaryOperator::Sqrt, token.location),

            found => Err(ParseError::UnexpectedToken {
                found,
                location: token.location,
            }),
        }
    }

    /// A grouped expression; the opening delimiter is already consumed and
    /// only its own closing delimiter ends the group.
    fn group(&mut self, delimiter: Delimiter, opened_at: Location) -> ParseResult<Subtree> {
        let inner = self.descend(|p| p.expression())?;

        match self.tokens.advance() {
            Some(token) if token.token_type == delimiter.close() => Ok(inner),
            Some(token) => Err(ParseError::MismatchedDelimiter {
                delimiter,
                found: token.token_type,
                location: token.location,
            }),
            None => Err(ParseError::UnclosedDelimiter {
                delimiter,
                opened_at,
            }),
        }
    }

    /// A sign or function applied to exactly one factor.
    fn prefixed(&mut self, op: UnaryOperator, location: Location) -> ParseResult<Subtree> {
        let operand = self.descend(|p| p.factor())?;
        self.wrap(op, operand, location)
    }

    /// A letter: indexed when enabled and followed by a number, replaced by
    /// its bound value when there is one, symbolic otherwise.
    fn letter(&mut self, name: String, location: Location) -> ParseResult<Subtree> {
        if self.config.indexed_letters
            && matches!(self.tokens.peek_type(), Some(TokenType::Number(_)))
        {
            let index = self.factor()?;
            let height = 1 + index.height;
            self.check_height(height, location)?;
            return Ok(Subtree {
                node: Node::indexed_letter(name, index.node),
                height,
            });
        }

        match self.bindings.get(&name) {
            Some(&value) => {
                debug!("substituting {name} = {value}");
                Ok(Subtree::leaf(Node::Number(value)))
            }
            None => Ok(Subtree::leaf(Node::letter(name))),
        }
    }
}
