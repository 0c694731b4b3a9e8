//! Line/column cursor over a line-split view of the source text.
//!
//! The end of a line acts as one implicit separator: advancing past the
//! last character of a line lands on the first column of the next one.

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::token::{Span, Token, TokenKind};

pub struct Cursor {
    lines: Vec<Vec<char>>,
    line: usize,
    column: usize,
    line_index: usize,
    column_index: usize,
    line_length: usize,
}

impl Cursor {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let source = source.strip_prefix('\u{FEFF}').unwrap_or(source);
        let lines: Vec<Vec<char>> = source.lines().map(|line| line.chars().collect()).collect();
        let line_length = lines.first().map_or(0, Vec::len);
        Self {
            lines,
            line: 1,
            column: 1,
            line_index: 0,
            column_index: 0,
            line_length,
        }
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.column,
        }
    }

    /// True once every line has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.line_index >= self.lines.len()
    }

    /// Character under the cursor. `None` on an empty line or past the end.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.lines
            .get(self.line_index)?
            .get(self.column_index)
            .copied()
    }

    /// True iff there is at least one more character after the current
    /// column on the current line.
    #[must_use]
    pub const fn available(&self) -> bool {
        self.column < self.line_length
    }

    /// Character one position ahead, without consuming anything.
    #[must_use]
    pub fn peek_next(&self) -> Option<char> {
        if self.available() {
            self.lines[self.line_index].get(self.column).copied()
        } else {
            None
        }
    }

    /// Advance by `n` columns, moving to the next line when the new column
    /// runs past the end of the current one. Returns the previous column.
    pub fn advance_column(&mut self, n: usize) -> usize {
        let previous = self.column;
        self.column += n;
        self.column_index += n;
        if self.column > self.line_length {
            self.advance_line(1);
        }
        previous
    }

    /// Advance by `n` lines and rewind to column 1. Returns the previous line.
    pub fn advance_line(&mut self, n: usize) -> usize {
        let previous = self.line;
        self.line += n;
        self.line_index += n;
        self.column = 1;
        self.column_index = 0;
        self.line_length = self.lines.get(self.line_index).map_or(0, Vec::len);
        previous
    }

    fn rest(&self) -> &[char] {
        self.lines
            .get(self.line_index)
            .and_then(|line| line.get(self.column_index..))
            .unwrap_or_default()
    }

    /// Scan a string literal starting at the opening `"`.
    ///
    /// The literal may continue onto later lines; each line break becomes a
    /// `\n` in the token text. The text keeps both delimiters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStringLiteral` at the opening quote if the input
    /// runs out before a closing quote.
    pub fn scan_string(&mut self) -> Result<Token, SyntaxError> {
        let start = self.span();
        let mut text = String::from('"');
        let mut line_index = self.line_index;
        self.advance_column(1);

        while !self.is_exhausted() {
            if self.line_index != line_index {
                text.push('\n');
                line_index = self.line_index;
            }
            match self.current() {
                Some('"') => {
                    text.push('"');
                    self.advance_column(1);
                    return Ok(Token::new(TokenKind::StringLiteral, text, start));
                }
                Some(ch) => {
                    text.push(ch);
                    self.advance_column(1);
                }
                None => {
                    self.advance_column(1);
                }
            }
        }

        Err(SyntaxError::new(SyntaxErrorKind::InvalidStringLiteral, start))
    }

    /// Scan the longest `[0-9]+(\.[0-9]*)?` at the cursor.
    ///
    /// With `forced` set the cursor sits on a `.`: a digit after it is an
    /// error (leading-dot literals are not part of the language), otherwise
    /// the dot becomes an `Unknown` token.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumericLiteral` for `.5`-style literals and for a
    /// literal ending in a bare `.`.
    pub fn scan_number(&mut self, forced: bool) -> Result<Token, SyntaxError> {
        let start = self.span();

        if forced {
            if self.peek_next().is_some_and(|ch| ch.is_ascii_digit()) {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::InvalidNumericLiteral,
                    start,
                ));
            }
            self.advance_column(1);
            return Ok(Token::new(TokenKind::Unknown, ".".to_string(), start));
        }

        let rest = self.rest();
        let mut len = rest.iter().take_while(|ch| ch.is_ascii_digit()).count();
        if len == 0 {
            return Err(SyntaxError::new(
                SyntaxErrorKind::InvalidNumericLiteral,
                start,
            ));
        }
        if rest.get(len) == Some(&'.') {
            let fraction = rest[len + 1..]
                .iter()
                .take_while(|ch| ch.is_ascii_digit())
                .count();
            if fraction == 0 {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::InvalidNumericLiteral,
                    start,
                ));
            }
            len += 1 + fraction;
        }

        let text: String = rest[..len].iter().collect();
        self.advance_column(len);
        Ok(Token::new(TokenKind::NumericLiteral, text, start))
    }

    /// Scan a maximal run of ASCII alphanumerics and underscores.
    pub fn scan_identifier(&mut self) -> Token {
        let start = self.span();
        let text: String = self
            .rest()
            .iter()
            .take_while(|ch| ch.is_ascii_alphanumeric() || **ch == '_')
            .collect();
        self.advance_column(text.len());
        Token::new(TokenKind::Identifier, text, start)
    }
}
