//! Expression Language to C++ translator.
//!
//! A single pass turns a small expression-oriented language (input and
//! output statements, numeric variables, arithmetic with `+ - * / ^`)
//! into an equivalent C++ program. The scanner feeds a recursive-descent
//! parser one token at a time, and the parser emits C++ as it matches,
//! checking that every variable is assigned or read before it is used.
//!
//! # Quick start
//!
//! ```
//! let cpp = elc_rs::translate_str(">> x;\ny = x * 2 + 1;\n<< y;\n").unwrap();
//! assert!(cpp.contains("\tcin >> x;\n"));
//! assert!(cpp.contains("\ty = ((x*2)+1);\n"));
//! assert!(cpp.contains("\tcout << y;\n"));
//! ```
//!
//! Errors carry their position and render the way the CLI reports them:
//!
//! ```
//! let err = elc_rs::translate_str("<< z;").unwrap_err();
//! assert_eq!(err.to_string(), "semantic error @ (1,4): variable 'z' undefined");
//! ```

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cursor;
pub mod emit;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

use std::fs;
use std::path::{Path, PathBuf};

pub use cursor::Cursor;
pub use emit::Expression;
pub use error::{Error, SemanticError, SemanticErrorKind, SyntaxError, SyntaxErrorKind};
pub use lexer::{Lexer, tokenize};
pub use parser::translate;
pub use token::{Span, Token, TokenKind};

/// Usage line shown for malformed invocations.
pub const USAGE: &str = "elc sourcefile.el";

/// Translate a source string in one step.
pub fn translate_str(input: &str) -> Result<String, Error> {
    translate(input)
}

/// Read a source file and translate it.
///
/// An unreadable file is reported as a usage error.
pub fn translate_file(path: &Path) -> Result<String, Error> {
    translate(&read_source(path)?)
}

/// Read a source file fully into memory.
pub fn read_source(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path)
        .map_err(|_| Error::Usage(format!("unable to open '{}'", path.display())))
}

/// Derive the generated file's path: the source's final extension is
/// replaced with `cpp`, and the file goes into `dir` when one is given.
pub fn output_path(source: &Path, dir: Option<&Path>) -> Result<PathBuf, Error> {
    if source.extension().is_none() {
        return Err(Error::Usage(USAGE.to_string()));
    }
    let renamed = source.with_extension(emit::TARGET_EXTENSION);
    match dir {
        Some(dir) => {
            let name = renamed
                .file_name()
                .ok_or_else(|| Error::Usage(USAGE.to_string()))?;
            Ok(dir.join(name))
        }
        None => Ok(renamed),
    }
}
