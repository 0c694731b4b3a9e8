#![allow(dead_code)]

use elc_rs::{emit, translate_str};

/// Translate and strip the fixed prologue and epilogue.
pub fn body(input: &str) -> String {
    let output = translate_str(input).unwrap_or_else(|e| {
        panic!("translation failed: {e}\n--- input ---\n{input}");
    });
    output
        .strip_prefix(emit::PROLOGUE)
        .and_then(|rest| rest.strip_suffix(emit::EPILOGUE))
        .unwrap_or_else(|| panic!("missing prologue/epilogue:\n{output}"))
        .to_string()
}

/// Right-hand side emitted for the last assignment in `input`.
pub fn emitted_rhs(input: &str) -> String {
    let body = body(input);
    let line = body
        .lines()
        .rev()
        .find(|line| line.contains(" = "))
        .unwrap_or_else(|| panic!("no assignment emitted:\n{body}"));
    let (_, rhs) = line.split_once(" = ").expect("assignment line");
    rhs.strip_suffix(';').unwrap_or(rhs).to_string()
}

/// Error display message for an input that must fail.
pub fn error_message(input: &str) -> String {
    match translate_str(input) {
        Ok(output) => panic!("expected an error, got:\n{output}"),
        Err(e) => e.to_string(),
    }
}
