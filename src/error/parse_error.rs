#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer hit a character that is not part of the language.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The byte offset where the character was found.
        offset:    usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Description of what the grammar required here.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// The byte offset where the error occurred.
        offset:   usize,
    },
    /// Reached the end of input while a grammar rule was still incomplete.
    UnexpectedEndOfInput {
        /// The byte offset where the error occurred.
        offset: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The byte offset where the error occurred.
        offset: usize,
    },
    /// Found extra tokens after a complete expression.
    TrailingTokens {
        /// The first extra token.
        token:  String,
        /// The byte offset where the error occurred.
        offset: usize,
    },
    /// A number token's lexeme could not be converted to an integer.
    ///
    /// The lexer only ever emits digit runs as number tokens, so in practice
    /// this fires for literals exceeding the `i64` range.
    InvalidNumber {
        /// The lexeme that failed to convert.
        literal: String,
        /// The byte offset where the error occurred.
        offset:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, offset } => {
                write!(f, "Error at offset {offset}: Invalid character '{character}'.")
            },

            Self::UnexpectedToken { expected,
                                    found,
                                    offset, } => {
                write!(f, "Error at offset {offset}: Expected {expected}, found {found}.")
            },

            Self::UnexpectedEndOfInput { offset } => {
                write!(f, "Error at offset {offset}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { offset } => write!(f,
                                                            "Error at offset {offset}: Expected closing parenthesis ')' but none found."),

            Self::TrailingTokens { token, offset } => write!(f,
                                                             "Error at offset {offset}: Extra tokens after expression. Check your input: {token}"),

            Self::InvalidNumber { literal, offset } => write!(f,
                                                              "Error at offset {offset}: '{literal}' is not a representable integer."),
        }
    }
}

impl std::error::Error for ParseError {}
