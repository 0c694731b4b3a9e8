use std::mem;

use crate::emit::{self, Expression};
use crate::error::{Error, SemanticError, SemanticErrorKind, SyntaxError, SyntaxErrorKind};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Translate a source program into C++ text.
///
/// Grammar (one token of lookahead):
///
/// ```text
/// program    := { statement }
/// statement  := input ';' | output ';' | assignment ';'
/// input      := '>>' IDENT { '>>' IDENT }
/// output     := '<<' value { '<<' value }
/// value      := IDENT | NUMBER | STRING
/// assignment := IDENT '=' expr
/// expr       := term { ('+'|'-') term }
/// term       := power { ('*'|'/') power }
/// power      := atom [ '^' power ]
/// atom       := '(' expr ')' | IDENT | NUMBER
/// ```
///
/// # Errors
///
/// Returns the first syntax or semantic error found. Nothing is emitted
/// for a failed translation.
pub fn translate(input: &str) -> Result<String, Error> {
    Parser::new(input)?.program()
}

struct Parser {
    lexer: Lexer,
    current: Token,
    declared: Vec<String>,
    expression: Expression,
    out: String,
}

impl Parser {
    fn new(input: &str) -> Result<Self, Error> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            declared: Vec::new(),
            expression: Expression::new(),
            out: String::new(),
        })
    }

    fn program(mut self) -> Result<String, Error> {
        self.out.push_str(emit::PROLOGUE);
        while self.current.kind != TokenKind::Eof {
            self.statement()?;
        }
        self.out.push_str(emit::EPILOGUE);
        Ok(self.out)
    }

    fn statement(&mut self) -> Result<(), Error> {
        match self.current.kind {
            TokenKind::Input => self.input()?,
            TokenKind::Output => self.output()?,
            TokenKind::Identifier => self.assignment()?,
            _ => {
                return Err(self.syntax_error(SyntaxErrorKind::ExpectingStatement));
            }
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }

    fn input(&mut self) -> Result<(), Error> {
        loop {
            self.expect(TokenKind::Input)?;
            let name = self.expect(TokenKind::Identifier)?.text;
            self.declare(&name);
            emit::read(&mut self.out, &name);
            if self.current.kind != TokenKind::Input {
                return Ok(());
            }
        }
    }

    fn output(&mut self) -> Result<(), Error> {
        loop {
            self.expect(TokenKind::Output)?;
            let value = self.value()?;
            emit::write(&mut self.out, &value);
            if self.current.kind != TokenKind::Output {
                return Ok(());
            }
        }
    }

    fn value(&mut self) -> Result<String, Error> {
        match self.current.kind {
            TokenKind::Identifier => {
                self.check_declared()?;
                Ok(self.advance()?.text)
            }
            TokenKind::NumericLiteral | TokenKind::StringLiteral => Ok(self.advance()?.text),
            _ => Err(self.syntax_error(SyntaxErrorKind::ExpectingValue)),
        }
    }

    fn assignment(&mut self) -> Result<(), Error> {
        let target = self.expect(TokenKind::Identifier)?.text;
        self.declare(&target);
        self.expect(TokenKind::Equal)?;
        self.expression.clear();
        self.expr()?;
        emit::assignment(&mut self.out, &target, &self.expression);
        Ok(())
    }

    fn expr(&mut self) -> Result<(), Error> {
        let mark = self.expression.mark();
        self.term()?;
        while let Some(op) = self.binary_operator(&[TokenKind::Add, TokenKind::Subtract]) {
            self.advance()?;
            self.expression.open_group(mark, "(");
            self.expression.push_str(op);
            self.term()?;
            self.expression.close_group();
        }
        Ok(())
    }

    fn term(&mut self) -> Result<(), Error> {
        let mark = self.expression.mark();
        self.power()?;
        while let Some(op) = self.binary_operator(&[TokenKind::Multiply, TokenKind::Divide]) {
            self.advance()?;
            self.expression.open_group(mark, "(");
            self.expression.push_str(op);
            self.power()?;
            self.expression.close_group();
        }
        Ok(())
    }

    // Right-associative: the exponent is itself a full `power`.
    fn power(&mut self) -> Result<(), Error> {
        let mark = self.expression.mark();
        self.atom()?;
        if self.current.kind == TokenKind::Power {
            self.advance()?;
            self.expression.open_group(mark, "pow(");
            self.expression.push_str(",");
            self.power()?;
            self.expression.close_group();
        }
        Ok(())
    }

    fn atom(&mut self) -> Result<(), Error> {
        match self.current.kind {
            TokenKind::LeftParen => {
                self.advance()?;
                self.expression.push_str("(");
                self.expr()?;
                self.expect(TokenKind::RightParen)?;
                self.expression.push_str(")");
            }
            TokenKind::Identifier => {
                self.check_declared()?;
                let name = self.advance()?.text;
                self.expression.push_str(&name);
            }
            TokenKind::NumericLiteral => {
                let number = self.advance()?.text;
                self.expression.push_str(&number);
            }
            _ => return Err(self.syntax_error(SyntaxErrorKind::ExpectingOperand)),
        }
        Ok(())
    }

    fn binary_operator(&self, kinds: &[TokenKind]) -> Option<&'static str> {
        if kinds.contains(&self.current.kind) {
            self.current.kind.symbol()
        } else {
            None
        }
    }

    /// Consume the lookahead if it has the expected kind.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(self.syntax_error(SyntaxErrorKind::Expecting(kind)))
        }
    }

    fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    fn is_declared(&self, name: &str) -> bool {
        self.declared.iter().any(|declared| declared == name)
    }

    fn declare(&mut self, name: &str) {
        if !self.is_declared(name) {
            self.declared.push(name.to_string());
            emit::declaration(&mut self.out, name);
        }
    }

    fn check_declared(&self) -> Result<(), Error> {
        if self.is_declared(&self.current.text) {
            Ok(())
        } else {
            Err(SemanticError {
                kind: SemanticErrorKind::UndefinedVariable(self.current.text.clone()),
                span: self.current.span,
            }
            .into())
        }
    }

    fn syntax_error(&self, kind: SyntaxErrorKind) -> Error {
        SyntaxError::new(kind, self.current.span).into()
    }
}
