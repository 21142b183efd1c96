/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a strict tree: every `BinaryOp` node exclusively owns its two
/// children, and a tree is never mutated after the parser returns it. Each
/// node records the byte offset of the token it was built from, which error
/// messages use to point at the offending spot in the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The literal's value.
        value:  i64,
        /// Byte offset in the source line.
        offset: usize,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator in the source line.
        offset: usize,
    },
}

impl Expr {
    /// Gets the source byte offset from `self`.
    /// ## Example
    /// ```
    /// use calq::ast::Expr;
    ///
    /// let expr = Expr::Literal { value:  7,
    ///                            offset: 3, };
    ///
    /// assert_eq!(expr.offset(), 3);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Literal { offset, .. } | Self::BinaryOp { offset, .. } => *offset,
        }
    }

    /// Renders the expression in Lisp-style prefix notation.
    ///
    /// Every operation becomes a parenthesized `(op left right)` form, so
    /// `(1+2)*3` renders as `(* (+ 1 2) 3)`.
    ///
    /// # Example
    /// ```
    /// let expr = calq::parse("(1+2)*3").unwrap();
    ///
    /// assert_eq!(expr.to_lisp(), "(* (+ 1 2) 3)");
    /// ```
    #[must_use]
    pub fn to_lisp(&self) -> String {
        match self {
            Self::Literal { value, .. } => value.to_string(),
            Self::BinaryOp { left, op, right, .. } => {
                format!("({op} {} {})", left.to_lisp(), right.to_lisp())
            },
        }
    }
}

/// Renders the expression in fully parenthesized infix notation.
///
/// Every binary operation is wrapped in parentheses, making precedence and
/// associativity explicit: `2+3*4` renders as `(2 + (3 * 4))`. Feeding the
/// rendered text back into the parser yields a tree that evaluates to the
/// same integer.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Represents a binary operator.
///
/// The four arithmetic operators are the only operators in the language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        };
        write!(f, "{operator}")
    }
}
