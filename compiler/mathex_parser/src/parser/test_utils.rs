//! Test utilities for the parser

// This module is only used for testing purposes
#![allow(dead_code)]

use mathex_lexer::token::{Location, Token, TokenType};

/// Creates a token with default location for testing
pub fn create_token(token_type: TokenType, lexeme: &str) -> Token {
    Token::new(token_type, lexeme, Location::default())
}

/// Creates a letter token for testing
pub fn create_letter(name: &str) -> Token {
    create_token(TokenType::Letter(name.to_string()), name)
}

/// Creates a number token for testing
pub fn create_number(value: f64) -> Token {
    let s = value.to_string();
    create_token(TokenType::Number(value), &s)
}

/// Creates an operator, delimiter or function token for testing
pub fn create_operator(op: &str) -> Token {
    let token_type = match op {
        "+" => TokenType::Plus,
        "-" => TokenType::Minus,
        "*" => TokenType::Multiply,
        "/" => TokenType::Divide,
        "^" => TokenType::Power,
        "(" => TokenType::LParen,
        ")" => TokenType::RParen,
        "[" => TokenType::LBracket,
        "]" => TokenType::RBracket,
        "sin" => TokenType::Sin,
        "cos" => TokenType::Cos,
        "exp" => TokenType::Exp,
        "sqrt" => TokenType::Sqrt,
        _ => panic!("Unknown operator: {}", op),
    };
    create_token(token_type, op)
}

/// Tokenizes a string for testing
pub fn tokenize(input: &str) -> Vec<Token> {
    match mathex_lexer::tokenize(input) {
        Ok(tokens) => tokens,
        Err(err) => panic!("Failed to tokenize {input:?}: {err}"),
    }
}
