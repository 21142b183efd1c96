//! # calq
//!
//! calq is an integer arithmetic expression evaluator written in Rust.
//! It tokenizes, parses, and evaluates expressions built from integer
//! literals, the four arithmetic operators, and parentheses, with standard
//! precedence and left-to-right associativity.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{evaluator::eval, parser::core::Parser},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` tag that
/// together represent an expression as an immutable tree. The AST is built
/// by the parser and read by the evaluator.
///
/// # Responsibilities
/// - Defines the two expression node shapes: literals and binary operations.
/// - Attaches byte offsets to nodes for error reporting.
/// - Renders trees as fully parenthesized infix or Lisp-style prefix text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression. Every error carries the byte offset of the
/// offending input so the driver can point at it.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Implements the standard error traits for each of them.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline from one line of text to one integer. Each call is
/// self-contained; no state survives between invocations.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses one line of input into an expression tree.
///
/// Lexing is fused into parsing: tokens are pulled on demand, so errors
/// surface in source order. The whole input must form exactly one
/// expression.
///
/// # Errors
/// Returns a [`ParseError`] for invalid characters, syntax errors,
/// unbalanced parentheses, trailing tokens, and unrepresentable literals.
///
/// # Examples
/// ```
/// let expr = calq::parse("(2 + 3) * 4").unwrap();
/// assert_eq!(expr.to_string(), "((2 + 3) * 4)");
///
/// assert!(calq::parse("(1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source)?.parse()
}

/// Evaluates one line of input and returns the resulting integer.
///
/// This is the full pipeline — tokenize, parse, evaluate — behind a single
/// call. The input is one self-contained expression; nothing is shared
/// between calls, and a failing input never affects a later one.
///
/// # Errors
/// Returns an error if parsing fails, if a division by zero occurs, or if
/// an arithmetic operation overflows.
///
/// # Examples
/// ```
/// assert_eq!(calq::evaluate("2 + 3 * 4").unwrap(), 14);
/// assert_eq!(calq::evaluate("8 - 3 - 2").unwrap(), 3);
///
/// // Parses fine, fails at evaluation time.
/// assert!(calq::evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let expr = parse(source)?;
    Ok(eval(&expr)?)
}
