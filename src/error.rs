/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include invalid characters, unexpected tokens,
/// unbalanced parentheses, and unconvertible numeric literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression: division by zero and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
