use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    ///
    /// The token carries its exact lexeme; conversion to an integer happens
    /// in the parser so that unrepresentable literals are reported as parse
    /// errors with their original spelling.
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, ParseError>;

/// A lazy tokenizer over one line of input.
///
/// Tokens are pulled one at a time via [`next_token`](Lexer::next_token),
/// each paired with the byte offset it starts at. The stream ends with a
/// permanent `Ok(None)`: once the input is exhausted, every further call
/// keeps returning `Ok(None)` without raising an error.
///
/// # Example
/// ```
/// use calq::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("1 + 2");
///
/// assert_eq!(lexer.next_token().unwrap(),
///            Some((Token::Number("1".to_owned()), 0)));
/// assert_eq!(lexer.next_token().unwrap(), Some((Token::Plus, 2)));
/// assert_eq!(lexer.next_token().unwrap(),
///            Some((Token::Number("2".to_owned()), 4)));
/// assert_eq!(lexer.next_token().unwrap(), None);
/// assert_eq!(lexer.next_token().unwrap(), None);
/// ```
pub struct Lexer<'src> {
    inner:     logos::Lexer<'src, Token>,
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:     Token::lexer(source),
               exhausted: false, }
    }

    /// Returns the byte offset just past the last character of the input.
    ///
    /// Used as the reported position for unexpected-end-of-input errors.
    #[must_use]
    pub fn end_offset(&self) -> usize {
        self.inner.source().len()
    }

    /// Produces the next token and its starting byte offset.
    ///
    /// Whitespace is skipped and never emitted. Digit runs lex greedily into
    /// a single [`Token::Number`]; operators and parentheses are one
    /// character each.
    ///
    /// # Returns
    /// - `Ok(Some((token, offset)))` while input remains.
    /// - `Ok(None)` once the input is exhausted, permanently.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidCharacter`] when the character under the
    /// cursor is not whitespace, a digit, an operator, or a parenthesis.
    pub fn next_token(&mut self) -> LexResult<Option<(Token, usize)>> {
        if self.exhausted {
            return Ok(None);
        }

        match self.inner.next() {
            Some(Ok(token)) => Ok(Some((token, self.inner.span().start))),
            Some(Err(())) => {
                let character = self.inner
                                    .slice()
                                    .chars()
                                    .next()
                                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(ParseError::InvalidCharacter { character,
                                                   offset: self.inner.span().start, })
            },
            None => {
                self.exhausted = true;
                Ok(None)
            },
        }
    }
}
