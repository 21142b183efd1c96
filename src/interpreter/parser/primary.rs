use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a primary (atomic) expression.
    ///
    /// Primary expressions form the base of the expression grammar:
    /// - integer literals
    /// - parenthesized expressions
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | "(" expression ")"
    /// ```
    /// # Returns
    /// The parsed primary [`Expr`] or a `ParseError` on failure.
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> ParseResult<Expr> {
        match &self.current {
            Some((Token::Number(_), _)) => self.parse_literal(),
            Some((Token::LParen, _)) => self.parse_grouping(),
            Some((token, offset)) => {
                Err(ParseError::UnexpectedToken { expected: "a number or '('".to_owned(),
                                                  found: format!("{token:?}"),
                                                  offset: *offset, })
            },
            None => Err(self.unexpected_end()),
        }
    }

    /// Parses an integer literal.
    ///
    /// The number token's lexeme is converted to an `i64` here rather than
    /// in the lexer, so an unrepresentable literal is reported with its
    /// original spelling.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidNumber` if the lexeme does not fit in an
    /// `i64`.
    fn parse_literal(&mut self) -> ParseResult<Expr> {
        match self.advance()? {
            Some((Token::Number(lexeme), offset)) => match lexeme.parse() {
                Ok(value) => Ok(Expr::Literal { value, offset }),
                Err(_) => Err(ParseError::InvalidNumber { literal: lexeme,
                                                          offset }),
            },
            Some((token, offset)) => {
                Err(ParseError::UnexpectedToken { expected: "a number".to_owned(),
                                                  found: format!("{token:?}"),
                                                  offset })
            },
            None => Err(self.unexpected_end()),
        }
    }

    /// Parses a parenthesized sub-expression: `"(" expression ")"`.
    ///
    /// The parentheses contribute no node of their own; the inner expression
    /// is returned directly, already bound tighter than any surrounding
    /// operator.
    ///
    /// # Errors
    /// Returns `ParseError::ExpectedClosingParen` if the matching `)` is
    /// missing.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::LParen)?;
        let expr = self.parse_expression()?;

        match self.current {
            Some((Token::RParen, _)) => {
                self.advance()?;
                Ok(expr)
            },
            Some((_, offset)) => Err(ParseError::ExpectedClosingParen { offset }),
            None => {
                Err(ParseError::ExpectedClosingParen { offset: self.lexer.end_offset() })
            },
        }
    }
}
