use std::fmt;

/// Represents a token's location in the source text.
///
/// Line and column numbers are 1-based, the byte offset is 0-based. Tokens
/// built by hand (for example in tests) use [`Location::default`], which
/// reports line 0 and column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number in the source text
    pub line: usize,
    /// The 1-based column number in the source text
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

impl Location {
    /// Creates a location from its parts.
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// The kind of a token, with its payload for literals and letters.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    // Literals and letters
    Number(f64),
    Letter(String),

    // Operators
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,

    // Functions
    Sin,
    Cos,
    Exp,
    Sqrt,
}

impl TokenType {
    /// Returns the canonical source text for this token type.
    pub fn symbol(&self) -> String {
        match self {
            TokenType::Number(value) => value.to_string(),
            TokenType::Letter(name) => name.clone(),
            TokenType::Plus => "+".to_string(),
            TokenType::Minus => "-".to_string(),
            TokenType::Multiply => "*".to_string(),
            TokenType::Divide => "/".to_string(),
            TokenType::Power => "^".to_string(),
            TokenType::LParen => "(".to_string(),
            TokenType::RParen => ")".to_string(),
            TokenType::LBracket => "[".to_string(),
            TokenType::RBracket => "]".to_string(),
            TokenType::Sin => "sin".to_string(),
            TokenType::Cos => "cos".to_string(),
            TokenType::Exp => "exp".to_string(),
            TokenType::Sqrt => "sqrt".to_string(),
        }
    }

    /// Returns true for the named unary functions `sin`, `cos`, `exp` and `sqrt`
    pub fn is_function(&self) -> bool {
        matches!(
            self,
            TokenType::Sin | TokenType::Cos | TokenType::Exp | TokenType::Sqrt
        )
    }

    /// Returns true for the binary operators `+ - * / ^`
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenType::Plus
                | TokenType::Minus
                | TokenType::Multiply
                | TokenType::Divide
                | TokenType::Power
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Number(value) => write!(f, "number {value}"),
            TokenType::Letter(name) => write!(f, "letter '{name}'"),
            other => write!(f, "'{}'", other.symbol()),
        }
    }
}

/// A token: its type, the original source text and where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The type of the token
    pub token_type: TokenType,
    /// The original source text of the token
    pub lexeme: String,
    /// The location of the token in the source text
    pub location: Location,
}

impl Token {
    /// Creates a new token.
    pub fn new<S: Into<String>>(token_type: TokenType, lexeme: S, location: Location) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Creates a token without source text, using the canonical symbol as
    /// its lexeme and a default location.
    pub fn synthetic(token_type: TokenType) -> Self {
        let lexeme = token_type.symbol();
        Self::new(token_type, lexeme, Location::default())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.token_type, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
