use mathex_lexer::{LexError, Location, TokenType};
use mathex_parser::{
    parse_str, render_snippet, Bindings, Delimiter, Error, ParseError, ParserConfig, Severity,
};
use pretty_assertions::assert_eq;

fn parse(source: &str) -> Result<Option<mathex_ast::Node>, Error> {
    parse_str(source, Bindings::new(), ParserConfig::default())
}

#[test]
fn test_lex_errors_are_reported_before_parse_errors() {
    // The stray ')' would fail to parse, but the '%' fails to lex first
    let err = parse(") + 2 % 3").unwrap_err();
    assert_eq!(
        err,
        Error::Lex(LexError::UnexpectedCharacter {
            lexeme: "%".to_string(),
            location: Location::new(1, 7, 6),
        })
    );
}

#[test]
fn test_parse_errors_pass_through() {
    let err = parse("[1 + 2").unwrap_err();
    assert_eq!(
        err,
        Error::Parse(ParseError::UnclosedDelimiter {
            delimiter: Delimiter::Bracket,
            opened_at: Location::new(1, 1, 0),
        })
    );
    assert_eq!(
        err.to_string(),
        "invalid syntax: unclosed '[' ... ']' opened at 1:1"
    );
}

#[test]
fn test_error_accessors() {
    let err = ParseError::TrailingTokens {
        found: TokenType::Letter("y".to_string()),
        location: Location::new(2, 3, 9),
    };
    assert_eq!(err.location(), Location::new(2, 3, 9));
    assert_eq!(err.token(), Some(&TokenType::Letter("y".to_string())));
}

#[test]
fn test_diagnostic_for_multiline_source() {
    let source = "1 +\n  2 3";
    let err = parse(source).unwrap_err();
    let diagnostic = err.diagnostic();
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.location, Location::new(2, 5, 8));

    let rendered = render_snippet(&diagnostic, source);
    let expected = "error: invalid syntax: unexpected trailing number 3 at 2:5\n  \
                    --> 2:5\n  |\n2 |   2 3\n  |     ^\n  \
                    = help: Two operands need an operator between them, e.g. '2 * x'";
    assert_eq!(rendered, expected);
}

#[test]
fn test_nesting_limit_through_parse_str() {
    let config = ParserConfig::default().with_max_depth(3);
    let err = parse_str("sin cos exp sqrt x", Bindings::new(), config).unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ParseError::NestingTooDeep { limit: 3, .. })
    ));
}

#[test]
fn test_empty_and_blank_sources() {
    assert_eq!(parse(""), Ok(None));
    assert_eq!(parse("  \n\t "), Ok(None));
}
