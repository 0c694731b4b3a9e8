use crate::cursor::Cursor;
use crate::error::Error;
use crate::token::{Token, TokenKind};

/// Tokenize a source string into every token up to and including the
/// first end-of-input token.
///
/// # Errors
///
/// Returns a syntax error on unterminated strings or malformed numbers.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

/// Scanner producing tokens on demand.
///
/// Once the input is consumed every call returns an end-of-input token.
pub struct Lexer {
    cursor: Cursor,
}

impl Lexer {
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Produce the next token, skipping whitespace and `//` comments.
    ///
    /// # Errors
    ///
    /// Returns a syntax error on unterminated strings or malformed numbers.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        while !self.cursor.is_exhausted() {
            let start = self.cursor.span();
            let next = self.cursor.peek_next();

            match self.cursor.current() {
                None | Some(' ' | '\t' | '\r' | '\n') => {
                    self.cursor.advance_column(1);
                }
                Some('/') if next == Some('/') => {
                    self.cursor.advance_line(1);
                }
                Some('"') => return self.cursor.scan_string().map_err(Error::from),
                Some(ch) if ch.is_ascii_alphabetic() => {
                    return Ok(self.cursor.scan_identifier());
                }
                Some(ch) if ch.is_ascii_digit() || ch == '.' => {
                    return self.cursor.scan_number(ch == '.').map_err(Error::from);
                }
                Some('<') if next == Some('<') => {
                    self.cursor.advance_column(2);
                    return Token::fixed(TokenKind::Output, start);
                }
                Some('>') if next == Some('>') => {
                    self.cursor.advance_column(2);
                    return Token::fixed(TokenKind::Input, start);
                }
                Some(ch) => {
                    self.cursor.advance_column(1);
                    return match TokenKind::from_char(ch) {
                        Some(kind) => Token::fixed(kind, start),
                        None => Ok(Token::new(TokenKind::Unknown, ch.to_string(), start)),
                    };
                }
            }
        }

        Token::fixed(TokenKind::Eof, self.cursor.span())
    }
}
