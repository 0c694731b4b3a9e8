//! C++ text generation.
//!
//! Statement helpers append complete, tab-indented lines. Expressions are
//! built in an [`Expression`] buffer that can wrap already-emitted text in
//! a group once an operator shows up.

/// Fixed text before the first statement.
pub const PROLOGUE: &str = "\
#include <iostream>
#include <cmath>

using namespace std;

int main()
{
";

/// Fixed text after the last statement.
pub const EPILOGUE: &str = "}\n";

/// Conventional extension of generated files.
pub const TARGET_EXTENSION: &str = "cpp";

pub fn declaration(out: &mut String, name: &str) {
    out.push_str("\tdouble ");
    out.push_str(name);
    out.push_str(";\n");
}

pub fn read(out: &mut String, name: &str) {
    out.push_str("\tcin >> ");
    out.push_str(name);
    out.push_str(";\n");
}

/// One write per output operand. Line breaks kept from a multi-line
/// string literal are written as the `\n` escape.
pub fn write(out: &mut String, value: &str) {
    out.push_str("\tcout << ");
    for ch in value.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            ch => out.push(ch),
        }
    }
    out.push_str(";\n");
}

pub fn assignment(out: &mut String, target: &str, expression: &Expression) {
    out.push('\t');
    out.push_str(target);
    out.push_str(" = ");
    out.push_str(expression.as_str());
    out.push_str(";\n");
}

/// Scratch buffer for one assignment's right-hand side.
///
/// A caller records [`Expression::mark`] before descending into an operand.
/// When an operator follows, [`Expression::open_group`] inserts the opening
/// marker at that offset so the operand already emitted ends up inside the
/// group; [`Expression::close_group`] appends the matching `)` after the
/// right operand.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Expression {
    text: String,
}

impl Expression {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Offset where the next operand will start.
    #[must_use]
    pub const fn mark(&self) -> usize {
        self.text.len()
    }

    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Insert `marker` at a previously recorded offset.
    pub fn open_group(&mut self, mark: usize, marker: &str) {
        self.text.insert_str(mark, marker);
    }

    pub fn close_group(&mut self) {
        self.text.push(')');
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}
