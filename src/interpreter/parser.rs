/// Core parser state and entry points.
///
/// Contains the `Parser` struct, its single token of lookahead, and the
/// `expect`/`advance` primitives shared by all grammar rules.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative grammar
/// levels and the token-to-operator mapping.
pub mod binary;

/// Primary (atomic) expression parsing.
///
/// Handles integer literals and parenthesized sub-expressions, the leaves
/// of the grammar.
pub mod primary;
