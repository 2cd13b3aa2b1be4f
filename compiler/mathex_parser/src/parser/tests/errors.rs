use pretty_assertions::assert_eq;

use super::parse;
use crate::parser::test_utils::{create_letter, create_number, create_operator};
use crate::parser::{Delimiter, ParseError, Parser};
use mathex_lexer::{Location, Token, TokenType};

#[test]
fn test_empty_input_is_not_an_error() {
    assert_eq!(parse(""), Ok(None));
    assert_eq!(Parser::new(Vec::<Token>::new()).parse(), Ok(None));
}

#[test]
fn test_unclosed_parenthesis() {
    assert_eq!(
        parse("(2 + 3"),
        Err(ParseError::UnclosedDelimiter {
            delimiter: Delimiter::Paren,
            opened_at: Location::new(1, 1, 0),
        })
    );
}

#[test]
fn test_trailing_closing_parenthesis() {
    assert_eq!(
        parse("2 + 3 )"),
        Err(ParseError::TrailingTokens {
            found: TokenType::RParen,
            location: Location::new(1, 7, 6),
        })
    );
}

#[test]
fn test_bare_closing_delimiter() {
    assert_eq!(
        parse(")"),
        Err(ParseError::UnexpectedToken {
            found: TokenType::RParen,
            location: Location::new(1, 1, 0),
        })
    );
    assert!(matches!(
        parse("]"),
        Err(ParseError::UnexpectedToken {
            found: TokenType::RBracket,
            ..
        })
    ));
}

#[test]
fn test_missing_operand_at_end() {
    assert_eq!(
        parse("2 +"),
        Err(ParseError::UnexpectedEndOfInput {
            location: Location::new(1, 3, 2),
        })
    );
    assert!(matches!(
        parse("sin"),
        Err(ParseError::UnexpectedEndOfInput { .. })
    ));
}

#[test]
fn test_groups_close_with_their_own_delimiter() {
    assert_eq!(
        parse("(1]"),
        Err(ParseError::MismatchedDelimiter {
            delimiter: Delimiter::Paren,
            found: TokenType::RBracket,
            location: Location::new(1, 3, 2),
        })
    );
    assert!(matches!(
        parse("[1)"),
        Err(ParseError::MismatchedDelimiter {
            delimiter: Delimiter::Bracket,
            found: TokenType::RParen,
            ..
        })
    ));
}

#[test]
fn test_adjacent_operands_are_trailing_tokens() {
    assert_eq!(
        parse("2 3"),
        Err(ParseError::TrailingTokens {
            found: TokenType::Number(3.0),
            location: Location::new(1, 3, 2),
        })
    );
    assert!(matches!(
        parse("x y"),
        Err(ParseError::TrailingTokens {
            found: TokenType::Letter(_),
            ..
        })
    ));
}

#[test]
fn test_empty_group() {
    assert_eq!(
        parse("()"),
        Err(ParseError::UnexpectedToken {
            found: TokenType::RParen,
            location: Location::new(1, 2, 1),
        })
    );
}

#[test]
fn test_leading_binary_operator() {
    assert!(matches!(
        parse("* 2"),
        Err(ParseError::UnexpectedToken {
            found: TokenType::Multiply,
            ..
        })
    ));
}

#[test]
fn test_hand_built_tokens() {
    // ( x + 2 ( has no closing delimiter for the first group
    let tokens = vec![
        create_operator("("),
        create_letter("x"),
        create_operator("+"),
        create_number(2.0),
        create_operator("("),
    ];
    assert_eq!(
        Parser::new(tokens).parse(),
        Err(ParseError::MismatchedDelimiter {
            delimiter: Delimiter::Paren,
            found: TokenType::LParen,
            location: Location::default(),
        })
    );
}

#[test]
fn test_error_messages_read_invalid_syntax() {
    let err = parse("2 + * 3").unwrap_err();
    assert_eq!(err.to_string(), "invalid syntax: unexpected '*' at 1:5");
}
