//! Shared helpers for the end-to-end tests.

use mathex_ast::Node;
use mathex_parser::{parse_str, Bindings, ParserConfig};

/// Lexes and parses `source` with no bindings, panicking on any error or on
/// empty input.
pub fn parse(source: &str) -> Node {
    parse_with(source, &[])
}

/// Lexes and parses `source` with the given letter bindings.
pub fn parse_with(source: &str, bindings: &[(&str, f64)]) -> Node {
    let bindings: Bindings = bindings
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect();
    match parse_str(source, bindings, ParserConfig::default()) {
        Ok(Some(node)) => node,
        Ok(None) => panic!("{source:?} is empty"),
        Err(err) => panic!("{source:?} failed to parse: {err}"),
    }
}
