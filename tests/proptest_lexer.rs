//! Property-based tests with proptest.
//!
//! Generate random numeric literals, identifiers, and expressions and
//! check the scanner and translator invariants that must hold for all of
//! them.

mod common;

use common::emitted_rhs;
use elc_rs::{Lexer, TokenKind, tokenize};
use proptest::prelude::*;

// -- Leaf strategies --

/// Numeric literal accepted by the language: digits with an optional
/// non-empty fraction.
fn number() -> impl Strategy<Value = String> {
    "[0-9]{1,6}(\\.[0-9]{1,4})?".prop_map(|s| s)
}

/// Identifier: ASCII letter start, then alphanumerics and underscores.
fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,12}".prop_map(|s| s)
}

/// Text made of characters the scanner never fails on.
fn safe_source() -> impl Strategy<Value = String> {
    "[a-z0-9 ;=+*/^()<>\\-\t\n]{0,60}".prop_map(|s| s)
}

/// Operand-operator chain over declared names and integer literals.
fn expression() -> impl Strategy<Value = Vec<(String, char)>> {
    let operand = prop_oneof![Just("v".to_string()), "[1-9][0-9]{0,2}".prop_map(|s| s)];
    let operator = prop_oneof![Just('+'), Just('-'), Just('*'), Just('/'), Just('^')];
    prop::collection::vec((operand, operator), 1..=6)
}

fn render_source(chain: &[(String, char)]) -> String {
    let mut source = String::from("v = 1;\nr = ");
    for (i, (operand, operator)) in chain.iter().enumerate() {
        if i > 0 {
            source.push(' ');
            source.push(*operator);
            source.push(' ');
        }
        source.push_str(operand);
    }
    source.push(';');
    source
}

// -- Property tests --

proptest! {
    /// The scanner returns exactly the longest numeric match.
    #[test]
    fn numeric_literal_is_longest_match(n in number(), tail in "[ ;+*)]?") {
        let input = format!("{n}{tail}");
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::NumericLiteral);
        prop_assert_eq!(&tokens[0].text, &n);
    }

    /// Identifiers come back verbatim with their starting column.
    #[test]
    fn identifier_verbatim(pad in 0usize..8, name in identifier()) {
        let input = format!("{}{name}", " ".repeat(pad));
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        prop_assert_eq!(&tokens[0].text, &name);
        prop_assert_eq!(tokens[0].span.column, pad + 1);
    }

    /// Scanning always terminates in end-of-input and stays there.
    #[test]
    fn scanner_terminates_idempotently(source in safe_source()) {
        let mut lexer = Lexer::new(&source);
        let mut eof = None;
        for _ in 0..=source.len() + 1 {
            let token = lexer.next_token().unwrap();
            if token.kind == TokenKind::Eof {
                eof = Some(token);
                break;
            }
        }
        let eof = eof.expect("scanner never reached end of input");
        for _ in 0..3 {
            prop_assert_eq!(lexer.next_token().unwrap(), eof.clone());
        }
    }

    /// Every token starts on a position that holds its first character.
    #[test]
    fn token_positions_point_at_text(source in safe_source()) {
        let lines: Vec<Vec<char>> = source.lines().map(|l| l.chars().collect()).collect();
        for token in tokenize(&source).unwrap() {
            if token.kind == TokenKind::Eof {
                continue;
            }
            let line = &lines[token.span.line - 1];
            let first = token.text.chars().next().unwrap();
            prop_assert_eq!(line[token.span.column - 1], first);
        }
    }

    /// Emitted expressions are balanced and never lose an operand.
    #[test]
    fn emitted_expression_is_balanced(chain in expression()) {
        let rhs = emitted_rhs(&render_source(&chain));
        let mut depth = 0i32;
        for ch in rhs.chars() {
            match ch {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            prop_assert!(depth >= 0, "unbalanced: {}", rhs);
        }
        prop_assert_eq!(depth, 0, "unbalanced: {}", rhs);
        for (operand, _) in &chain {
            prop_assert!(rhs.contains(operand.as_str()));
        }
        prop_assert!(!rhs.contains('^'));
    }

    /// Every binary operator in the source gets its own group.
    #[test]
    fn one_group_per_operator(chain in expression()) {
        let rhs = emitted_rhs(&render_source(&chain));
        let operators = chain.len() - 1;
        prop_assert_eq!(rhs.matches('(').count(), operators);
    }
}
