use mathex_lexer::{LexError, Location, TokenType};

use crate::parser::error::ParseError;

/// Severity levels for diagnostics; lexing and parsing only report errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
        }
    }
}

/// A user-facing diagnostic describing a problem in an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: Location,
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic at a location with a custom message
    pub fn error<S: Into<String>>(location: Location, message: S) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            location,
            help: None,
        }
    }

    /// Attach a help message
    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        let diagnostic = Diagnostic::error(err.location(), err.to_string());
        match help_for_parse_error(err) {
            Some(help) => diagnostic.with_help(help),
            None => diagnostic,
        }
    }
}

impl From<&LexError> for Diagnostic {
    fn from(err: &LexError) -> Self {
        Diagnostic::error(err.location(), err.to_string()).with_help(
            "Expressions use numbers, letters, + - * / ^, parentheses, brackets \
             and the functions sin, cos, exp and sqrt",
        )
    }
}

/// Provide a help message for a token found where an operand was expected
fn help_for_unexpected(tt: &TokenType) -> Option<String> {
    match tt {
        TokenType::RParen => Some("Did you forget a matching '(' earlier?".to_string()),
        TokenType::RBracket => Some("Did you forget a matching '[' earlier?".to_string()),
        TokenType::Multiply | TokenType::Divide | TokenType::Power => {
            Some("This operator needs an operand on both sides".to_string())
        }
        _ => None,
    }
}

/// Map a parse error to a help message
fn help_for_parse_error(err: &ParseError) -> Option<String> {
    match err {
        ParseError::UnexpectedToken { found, .. } => help_for_unexpected(found),
        ParseError::UnexpectedEndOfInput { .. } => {
            Some("The expression ends where an operand was expected".to_string())
        }
        ParseError::MismatchedDelimiter { delimiter, .. } => Some(format!(
            "A group opened with {} must be closed with {}",
            delimiter.open(),
            delimiter.close()
        )),
        ParseError::UnclosedDelimiter { delimiter, .. } => {
            Some(format!("Add the missing {} at the end", delimiter.close()))
        }
        ParseError::TrailingTokens { found, .. } => match found {
            TokenType::Number(_) | TokenType::Letter(_) | TokenType::LParen | TokenType::LBracket => {
                Some("Two operands need an operator between them, e.g. '2 * x'".to_string())
            }
            other => help_for_unexpected(other),
        },
        ParseError::NestingTooDeep { .. } => {
            Some("Simplify the expression or raise the nesting limit".to_string())
        }
    }
}

/// Render a diagnostic with the offending source line and a caret under the
/// reported column.
///
/// Diagnostics whose location does not point into `source` (for example
/// errors on hand-built tokens, which carry line 0) are rendered without the
/// snippet.
pub fn render_snippet(diagnostic: &Diagnostic, source: &str) -> String {
    let mut out = format!("{}: {}", diagnostic.severity.label(), diagnostic.message);
    let Location { line, column, .. } = diagnostic.location;

    let source_line = line
        .checked_sub(1)
        .and_then(|index| source.lines().nth(index));
    if let Some(text) = source_line {
        let gutter = " ".repeat(line.to_string().len());
        let caret_pad = " ".repeat(column.saturating_sub(1));
        out.push_str(&format!("\n{gutter} --> {line}:{column}"));
        out.push_str(&format!("\n{gutter} |"));
        out.push_str(&format!("\n{line} | {text}"));
        out.push_str(&format!("\n{gutter} | {caret_pad}^"));
    }

    if let Some(help) = &diagnostic.help {
        out.push_str(&format!("\n  = help: {help}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::error::Delimiter;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_help_for_stray_closing_paren() {
        let err = ParseError::UnexpectedToken {
            found: TokenType::RParen,
            location: Location::new(1, 1, 0),
        };
        let diagnostic = Diagnostic::from(&err);
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(
            diagnostic.help.as_deref(),
            Some("Did you forget a matching '(' earlier?")
        );
    }

    #[test]
    fn test_render_snippet_points_at_column() {
        let err = ParseError::TrailingTokens {
            found: TokenType::RParen,
            location: Location::new(1, 7, 6),
        };
        let rendered = render_snippet(&Diagnostic::from(&err), "2 + 3 )");
        let expected = "error: invalid syntax: unexpected trailing ')' at 1:7\n  \
                        --> 1:7\n  |\n1 | 2 + 3 )\n  |       ^\n  \
                        = help: Did you forget a matching '(' earlier?";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_snippet_without_source_position() {
        let err = ParseError::UnclosedDelimiter {
            delimiter: Delimiter::Bracket,
            opened_at: Location::default(),
        };
        let rendered = render_snippet(&Diagnostic::from(&err), "[1 + 2");
        assert_eq!(
            rendered,
            "error: invalid syntax: unclosed '[' ... ']' opened at 0:0\n  = help: Add the missing ']' at the end"
        );
    }

    #[test]
    fn test_custom_diagnostic_renders_as_error() {
        let diagnostic = Diagnostic::error(Location::new(1, 1, 0), "bad input");
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(render_snippet(&diagnostic, "?"), "error: bad input\n  --> 1:1\n  |\n1 | ?\n  | ^");
    }

    #[test]
    fn test_lex_error_diagnostic() {
        let err = LexError::UnexpectedCharacter {
            lexeme: "%".to_string(),
            location: Location::new(1, 3, 2),
        };
        let diagnostic = Diagnostic::from(&err);
        assert_eq!(diagnostic.location, Location::new(1, 3, 2));
        assert!(diagnostic.help.is_some());
    }
}
