use std::fmt;

use crate::error::Error;

/// Source location for error reporting. Both fields are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Returned forever once the source is consumed.
    Eof,
    /// Character that cannot start any other token.
    Unknown,
    Semicolon,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Equal,
    LeftParen,
    RightParen,
    /// Input operator `>>`.
    Input,
    /// Output operator `<<`.
    Output,
    Identifier,
    /// Double-quoted string, delimiters included in the token text.
    StringLiteral,
    NumericLiteral,
}

impl TokenKind {
    /// Fixed text of kinds that carry no value of their own.
    ///
    /// Returns `None` for identifiers, literals, and unknown characters,
    /// whose text comes from the source.
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            Self::Eof => Some("EOT"),
            Self::Semicolon => Some(";"),
            Self::Add => Some("+"),
            Self::Subtract => Some("-"),
            Self::Multiply => Some("*"),
            Self::Divide => Some("/"),
            Self::Power => Some("^"),
            Self::Equal => Some("="),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::Input => Some(">>"),
            Self::Output => Some("<<"),
            Self::Unknown | Self::Identifier | Self::StringLiteral | Self::NumericLiteral => None,
        }
    }

    /// Single-character operators and punctuation.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            ';' => Some(Self::Semicolon),
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            '=' => Some(Self::Equal),
            '(' => Some(Self::LeftParen),
            ')' => Some(Self::RightParen),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Unknown => "UNKNOWN",
            Self::Identifier => "VAR",
            Self::StringLiteral => "STRING_LITERAL",
            Self::NumericLiteral => "NUMERIC_LITERAL",
            other => other.symbol().unwrap_or_default(),
        };
        f.write_str(text)
    }
}

/// A single token with its kind, text, and the location of its first
/// character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, text: String, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Build a token whose text is the kind's fixed symbol.
    ///
    /// # Errors
    ///
    /// Returns `Error::Internal` for value-bearing kinds, which have no
    /// fixed text to synthesize.
    pub fn fixed(kind: TokenKind, span: Span) -> Result<Self, Error> {
        let text = kind
            .symbol()
            .ok_or_else(|| Error::Internal(format!("token kind {kind:?} has no fixed text")))?;
        Ok(Self::new(kind, text.to_string(), span))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} @({},{})",
            self.kind, self.text, self.span.line, self.span.column
        )
    }
}
