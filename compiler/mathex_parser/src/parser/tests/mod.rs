//! Unit tests for the parser productions

mod errors;

use mathex_ast::Node;

use crate::parser::test_utils::tokenize;
use crate::parser::{Bindings, ParseResult, Parser, ParserConfig};
use crate::test_logging::init_test_logger;

/// Parses `input` with no bindings and the default configuration
fn parse(input: &str) -> ParseResult<Option<Node>> {
    init_test_logger();
    Parser::new(tokenize(input)).parse()
}

/// Parses `input` that must form an expression
fn parse_ok(input: &str) -> Node {
    match parse(input) {
        Ok(Some(node)) => node,
        other => panic!("Expected {input:?} to parse, got {other:?}"),
    }
}

fn parse_with(input: &str, bindings: Bindings, config: ParserConfig) -> ParseResult<Option<Node>> {
    init_test_logger();
    Parser::with_config(tokenize(input), bindings, config).parse()
}

fn num(value: f64) -> Node {
    Node::number(value)
}

fn var(name: &str) -> Node {
    Node::letter(name)
}
