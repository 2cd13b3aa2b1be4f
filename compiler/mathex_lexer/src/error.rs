use crate::token::Location;

/// Errors raised while turning source text into tokens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    /// A character (or run of characters) that starts no token.
    #[error("unexpected character '{lexeme}' at {location}")]
    UnexpectedCharacter {
        /// The offending source text.
        lexeme: String,
        /// Where it starts.
        location: Location,
    },
}

impl LexError {
    /// Returns the location the error points at.
    pub fn location(&self) -> Location {
        match self {
            LexError::UnexpectedCharacter { location, .. } => *location,
        }
    }
}
