/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the expression tree and produces a single integer.
/// It depends only on the AST model, not on the lexer or parser.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing the four arithmetic operations.
/// - Reports runtime errors: division by zero and integer overflow.
pub mod evaluator;
/// The lexer module tokenizes one line of input for further parsing.
///
/// The lexer (tokenizer) reads the raw input text and produces a stream of
/// tokens: integer literals, the four arithmetic operators, and parentheses.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte offsets.
/// - Skips whitespace; it is never emitted as a token.
/// - Reports lexical errors for characters outside the language.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer on demand and constructs an AST
/// that encodes precedence and associativity structurally: multiplication
/// and division bind tighter than addition and subtraction, and operators of
/// equal precedence group from the left.
///
/// # Responsibilities
/// - Converts tokens into expression nodes via recursive descent.
/// - Validates the grammar, reporting errors with byte offsets.
/// - Rejects trailing tokens after a complete expression.
pub mod parser;
