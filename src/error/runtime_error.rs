#[derive(Debug)]
/// Represents all errors that can occur while evaluating an expression.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte offset of the offending division operator.
        offset: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The byte offset of the offending operator.
        offset: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { offset } => {
                write!(f, "Error at offset {offset}: Division by zero.")
            },
            Self::Overflow { offset } => write!(f,
                                                "Error at offset {offset}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
