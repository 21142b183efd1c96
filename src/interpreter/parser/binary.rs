use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`. Folding is
    /// left-leaning, so `8 - 3 - 2` parses as `(8 - 3) - 2`, matching
    /// left-to-right evaluation order for operators of equal precedence.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree representing the parsed expression.
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;

        while let Some((op, offset)) = self.peek_operator() {
            if !matches!(op, BinaryOperator::Add | BinaryOperator::Sub) {
                break;
            }
            self.advance()?;

            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    offset };
        }

        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Handles left-associative binary operators: `*` and `/`. Because this
    /// level binds tighter than [`parse_additive`](Parser::parse_additive),
    /// `*` and `/` nodes only ever appear as children of `+`/`-` nodes,
    /// unless parentheses force them higher.
    ///
    /// The rule is: `multiplicative := primary (("*" | "/") primary)*`
    ///
    /// # Returns
    /// A binary expression tree combining primary-level nodes.
    pub(in crate::interpreter::parser) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_primary()?;

        while let Some((op, offset)) = self.peek_operator() {
            if !matches!(op, BinaryOperator::Mul | BinaryOperator::Div) {
                break;
            }
            self.advance()?;

            let right = self.parse_primary()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    offset };
        }

        Ok(left)
    }

    /// Inspects the lookahead token without consuming it.
    ///
    /// # Returns
    /// `Some((operator, offset))` if the lookahead maps to a binary
    /// operator, otherwise `None`.
    fn peek_operator(&self) -> Option<(BinaryOperator, usize)> {
        match &self.current {
            Some((token, offset)) => token_to_binary_operator(token).map(|op| (op, *offset)),
            None => None,
        }
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the four
/// arithmetic operators, and `None` for all other tokens.
///
/// # Example
/// ```
/// use calq::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
