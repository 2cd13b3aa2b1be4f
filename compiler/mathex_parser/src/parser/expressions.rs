use log::trace;
use mathex_ast::BinaryOperator;
use mathex_lexer::{Token, TokenType};

use crate::parser::{Associativity, ParseResult, Parser, Subtree};

/// Maps `+`/`-` to their binary operators
fn additive_operator(token_type: &TokenType) -> Option<BinaryOperator> {
    match token_type {
        TokenType::Plus => Some(BinaryOperator::Add),
        TokenType::Minus => Some(BinaryOperator::Subtract),
        _ => None,
    }
}

/// Maps `*`/`/` to their binary operators
fn multiplicative_operator(token_type: &TokenType) -> Option<BinaryOperator> {
    match token_type {
        TokenType::Multiply => Some(BinaryOperator::Multiply),
        TokenType::Divide => Some(BinaryOperator::Divide),
        _ => None,
    }
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// `expression := term (('+' | '-') term)*`, folded left.
    pub(crate) fn expression(&mut self) -> ParseResult<Subtree> {
        trace!("expression at {}", self.tokens.location());
        let mut result = self.term()?;

        while let Some(op) = self.tokens.peek_type().and_then(additive_operator) {
            let location = self.tokens.location();
            self.tokens.advance();
            let right = self.term()?;
            result = self.join(op, result, right, location)?;
        }

        Ok(result)
    }

    /// `term := exponent (('*' | '/') exponent)*`, folded left.
    pub(crate) fn term(&mut self) -> ParseResult<Subtree> {
        let mut result = self.exponent()?;

        while let Some(op) = self.tokens.peek_type().and_then(multiplicative_operator) {
            let location = self.tokens.location();
            self.tokens.advance();
            let right = self.exponent()?;
            result = self.join(op, result, right, location)?;
        }

        Ok(result)
    }

    /// `exponent := factor ('^' factor)*`.
    ///
    /// Folds left unless the configuration asks for right associativity, in
    /// which case the tail after each `^` is parsed as a whole exponent.
    pub(crate) fn exponent(&mut self) -> ParseResult<Subtree> {
        let base = self.factor()?;

        match self.config.power_associativity {
            Associativity::Left => {
                let mut result = base;
                while self.tokens.check(&TokenType::Power) {
                    let location = self.tokens.location();
                    self.tokens.advance();
                    let right = self.factor()?;
                    result = self.join(BinaryOperator::Power, result, right, location)?;
                }
                Ok(result)
            }
            Associativity::Right => {
                if !self.tokens.check(&TokenType::Power) {
                    return Ok(base);
                }
                let location = self.tokens.location();
                self.tokens.advance();
                let right = self.descend(|p| p.exponent())?;
                self.join(BinaryOperator::Power, base, right, location)
            }
        }
    }
}
