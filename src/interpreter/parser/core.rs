use std::mem;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Lexer, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser with one token of lookahead.
///
/// The parser owns a [`Lexer`] and pulls tokens from it on demand, so a
/// lexical error surfaces exactly when the grammar reaches the offending
/// character. `current` always holds the next unconsumed token (`None` once
/// the input is exhausted).
///
/// Grammar, from loosest to tightest binding:
/// ```text
///     expression     := additive
///     additive       := multiplicative (("+" | "-") multiplicative)*
///     multiplicative := primary (("*" | "/") primary)*
///     primary        := NUMBER | "(" expression ")"
/// ```
pub struct Parser<'src> {
    pub(in crate::interpreter::parser) lexer:   Lexer<'src>,
    pub(in crate::interpreter::parser) current: Option<(Token, usize)>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and primes the lookahead token.
    ///
    /// # Errors
    /// Returns a `ParseError` if the first token fails to lex.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses one complete expression, consuming the entire token stream.
    ///
    /// This is the single entry point for parsing. The whole input must form
    /// exactly one expression; anything left over after the expression is a
    /// parse error.
    ///
    /// # Returns
    /// The root of the parsed expression tree.
    ///
    /// # Errors
    /// Returns a `ParseError` if a grammar rule cannot match the lookahead
    /// token, or if tokens trail a complete expression.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;

        match self.current {
            None => Ok(expr),
            Some((token, offset)) => {
                Err(ParseError::TrailingTokens { token: format!("{token:?}"),
                                                 offset })
            },
        }
    }

    /// Parses a full expression.
    ///
    /// Begins at the lowest-precedence level, additive, and recursively
    /// descends through the precedence hierarchy.
    ///
    /// Grammar: `expression := additive`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_additive()
    }

    /// Consumes the lookahead token and pulls the next one from the lexer.
    ///
    /// # Returns
    /// The consumed token and its offset, or `None` at end of input.
    pub(in crate::interpreter::parser) fn advance(&mut self)
                                                 -> ParseResult<Option<(Token, usize)>> {
        let consumed = self.current.take();
        self.current = self.lexer.next_token()?;
        Ok(consumed)
    }

    /// Verifies that the lookahead token has the expected kind, consumes it,
    /// and pulls the next token from the lexer.
    ///
    /// Kinds are compared structurally, ignoring any payload; passing
    /// `Token::Number(String::new())` matches every number token.
    ///
    /// # Returns
    /// The consumed token and its offset.
    ///
    /// # Errors
    /// Returns a `ParseError` stating the expected and actual kinds on
    /// mismatch, or an unexpected-end-of-input error if no token remains.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 expected: &Token)
                                                 -> ParseResult<(Token, usize)> {
        match self.current.take() {
            Some((token, offset)) if mem::discriminant(&token) == mem::discriminant(expected) => {
                self.current = self.lexer.next_token()?;
                Ok((token, offset))
            },
            Some((token, offset)) => {
                Err(ParseError::UnexpectedToken { expected: format!("{expected:?}"),
                                                  found: format!("{token:?}"),
                                                  offset })
            },
            None => Err(self.unexpected_end()),
        }
    }

    /// Builds the error for input that ended mid-rule.
    pub(in crate::interpreter::parser) fn unexpected_end(&self) -> ParseError {
        ParseError::UnexpectedEndOfInput { offset: self.lexer.end_offset() }
    }
}
