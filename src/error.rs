//! Error taxonomy: syntax, semantic, usage, and internal failures.
//!
//! Every error is fatal to the translation that raised it. The display
//! message is the only artifact a failed translation leaves behind.

use std::fmt;

use crate::token::{Span, TokenKind};

/// Classifies a syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// No closing `"` before the end of input.
    InvalidStringLiteral,
    /// Trailing bare `.` or a literal starting with `.`.
    InvalidNumericLiteral,
    /// A specific token was required.
    Expecting(TokenKind),
    /// Statement must start with `>>`, `<<`, or an identifier.
    ExpectingStatement,
    /// Output operand must be an identifier or a literal.
    ExpectingValue,
    /// Expression operand must be `(`, an identifier, or a number.
    ExpectingOperand,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStringLiteral => write!(f, "invalid string literal"),
            Self::InvalidNumericLiteral => write!(f, "invalid numeric literal"),
            Self::Expecting(kind) => write!(f, "expecting {kind}"),
            Self::ExpectingStatement => write!(f, "expecting >>, <<, or VAR"),
            Self::ExpectingValue => {
                write!(f, "expecting VAR, NUMERIC_LITERAL, or STRING_LITERAL")
            }
            Self::ExpectingOperand => write!(f, "expecting (, VAR, or NUMERIC_LITERAL"),
        }
    }
}

/// Lexical or grammatical mismatch at a known position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("syntax error @ ({},{}): {kind}", span.line, span.column)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Span,
}

impl SyntaxError {
    #[must_use]
    pub const fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Classifies a semantic error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticErrorKind {
    /// Variable used before any assignment or input.
    UndefinedVariable(String),
}

impl fmt::Display for SemanticErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable(name) => write!(f, "variable '{name}' undefined"),
        }
    }
}

/// Well-formed but meaningless program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("semantic error @ ({},{}): {kind}", span.line, span.column)]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub span: Span,
}

/// Unified error type covering every way a translation can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Syntax(#[from] SyntaxError),
    #[error("{0}")]
    Semantic(#[from] SemanticError),
    /// Invalid invocation or unreadable source.
    #[error("usage: {0}")]
    Usage(String),
    /// Broken invariant inside the translator itself.
    #[error("**internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Source position for the two grammar-level kinds.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Syntax(e) => Some(e.span),
            Self::Semantic(e) => Some(e.span),
            Self::Usage(_) | Self::Internal(_) => None,
        }
    }
}
