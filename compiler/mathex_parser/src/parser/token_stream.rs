use mathex_lexer::{Location, Token, TokenType};

/// A forward-only cursor over a stream of tokens.
///
/// Exactly one token is visible at a time. Advancing hands that token out
/// and pulls the next one from the underlying iterator; once the iterator
/// is exhausted the cursor stays empty.
pub struct TokenStream<I: Iterator<Item = Token>> {
    /// The tokens not yet pulled
    tokens: I,
    /// The visible token, `None` once the input is exhausted
    current: Option<Token>,
    /// Location of the last consumed token
    last_location: Option<Location>,
    /// Number of tokens consumed so far
    position: usize,
}

impl<I: Iterator<Item = Token>> TokenStream<I> {
    /// Create a token stream, priming it with the first token
    pub fn new<T>(tokens: T) -> Self
    where
        T: IntoIterator<Item = Token, IntoIter = I>,
    {
        let mut tokens = tokens.into_iter();
        let current = tokens.next();
        TokenStream {
            tokens,
            current,
            last_location: None,
            position: 0,
        }
    }

    /// Get the current token without advancing
    pub fn peek(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Get the current token's type without advancing
    pub fn peek_type(&self) -> Option<&TokenType> {
        self.current.as_ref().map(|t| &t.token_type)
    }

    /// Consume the current token and reveal the next one
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.current.take()?;
        self.current = self.tokens.next();
        self.last_location = Some(token.location);
        self.position += 1;
        Some(token)
    }

    /// Check whether the current token has the expected type
    pub fn check(&self, expected: &TokenType) -> bool {
        matches!(self.peek_type(), Some(token_type) if token_type == expected)
    }

    /// Check if we're at the end of input
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Number of tokens consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Location of the last consumed token, if any
    pub fn last_location(&self) -> Option<Location> {
        self.last_location
    }

    /// Best location to report for the current position: the visible token,
    /// else the last consumed one.
    pub fn location(&self) -> Location {
        self.current
            .as_ref()
            .map(|t| t.location)
            .or(self.last_location)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::test_utils::{create_number, create_operator};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_stream() {
        let mut stream = TokenStream::new(Vec::<Token>::new());
        assert!(stream.is_empty());
        assert_eq!(stream.peek(), None);
        assert_eq!(stream.advance(), None);
        assert_eq!(stream.position(), 0);
        assert_eq!(stream.location(), Location::default());
    }

    #[test]
    fn test_advance_walks_forward_once() {
        let mut stream = TokenStream::new(vec![create_number(1.0), create_operator("+")]);
        assert!(stream.check(&TokenType::Number(1.0)));
        assert_eq!(stream.advance().map(|t| t.token_type), Some(TokenType::Number(1.0)));
        assert!(stream.check(&TokenType::Plus));
        assert_eq!(stream.advance().map(|t| t.token_type), Some(TokenType::Plus));
        assert!(stream.is_empty());
        assert_eq!(stream.advance(), None);
        assert_eq!(stream.position(), 2);
    }

    #[test]
    fn test_pulls_lazily() {
        let mut pulled = 0;
        let source = (0..3).map(|n| {
            pulled += 1;
            create_number(f64::from(n))
        });
        let mut stream = TokenStream::new(source);
        stream.advance();
        drop(stream);
        assert_eq!(pulled, 2);
    }
}
