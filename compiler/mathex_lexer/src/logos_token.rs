use logos::Logos;

/// Raw token type produced by the logos lexer
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum LogosToken {
    // Functions (longer than a single letter, so they win over `Letter`)
    #[token("sin")]
    Sin,
    #[token("cos")]
    Cos,
    #[token("exp")]
    Exp,
    #[token("sqrt")]
    Sqrt,

    // Number literals: integers, decimals, a leading decimal point and an
    // optional exponent (e.g. 42, 3.14, .5, 2.5e-3). Signs are operators.
    #[regex(r"(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Letters are single ASCII characters, so `xy` is two letters and `x2`
    // is a letter followed by a number.
    #[regex(r"[a-zA-Z]", |lex| lex.slice().to_string())]
    Letter(String),

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Multiply,
    #[token("/")]
    Divide,
    #[token("^")]
    Power,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
}
