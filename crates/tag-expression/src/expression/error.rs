//! Error types for the tag expression parser.

use std::fmt;

use thiserror::Error;

/// A specialized Result type for tag expression parsing.
pub type ExpressionResult<T> = Result<T, ParseError>;

/// The operand (or operands) an operator was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandSide {
    /// The left-hand operand.
    Lhs,
    /// The right-hand operand.
    Rhs,
    /// Both operands of a binary operator.
    Both,
}

impl fmt::Display for OperandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandSide::Lhs => write!(f, "lhs"),
            OperandSide::Rhs => write!(f, "rhs"),
            OperandSide::Both => write!(f, "lhs and rhs"),
        }
    }
}

/// Errors that can occur while parsing a tag expression.
///
/// Positions are 0-based indices into the token sequence, not byte offsets.
/// The first error encountered aborts the parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The expression contained no tags at all.
    #[error("empty tag expression")]
    EmptyExpression,

    /// An operator lacked a required operand.
    #[error("{operator} at <{position}> missing {side} operand")]
    MissingOperand {
        /// Which operand is absent.
        side: OperandSide,
        /// The operator symbol.
        operator: String,
        /// Token position of the operator.
        position: usize,
    },

    /// A `)` had no matching `(` to its left.
    #[error(") at <{position}> missing opening parenthesis")]
    MissingOpeningParenthesis {
        /// Token position of the `)`.
        position: usize,
    },

    /// A `(` was never closed.
    #[error("( at <{position}> missing closing parenthesis")]
    MissingClosingParenthesis {
        /// Token position of the `(`.
        position: usize,
    },

    /// Two complete expressions are adjacent with no operator between them.
    #[error(
        "missing operator between {left} <{left_position}> and {right} <{right_position}>"
    )]
    MissingOperatorBetween {
        /// Canonical form of the left expression.
        left: String,
        /// Token position of the left expression.
        left_position: usize,
        /// Canonical form of the right expression.
        right: String,
        /// Token position of the right expression.
        right_position: usize,
    },

    /// More than one expression remained with no more specific cause.
    #[error("missing operator")]
    MissingOperator,

    /// An operator's operands were in an order no other error describes.
    #[error("{operator} at <{position}> problem parsing")]
    ProblemParsing {
        /// Token position of the operator.
        position: usize,
        /// The operator symbol.
        operator: String,
    },
}

/// The kind of a [`ParseError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    EmptyExpression,
    MissingOperand(OperandSide),
    MissingOpeningParenthesis,
    MissingClosingParenthesis,
    MissingOperatorBetween,
    MissingOperator,
    ProblemParsing,
}

impl ParseError {
    /// Creates a missing operand error.
    pub fn missing_operand(side: OperandSide, operator: impl Into<String>, position: usize) -> Self {
        ParseError::MissingOperand {
            side,
            operator: operator.into(),
            position,
        }
    }

    /// Creates a missing operator error for two adjacent expressions.
    pub fn missing_operator_between(
        left: impl Into<String>,
        left_position: usize,
        right: impl Into<String>,
        right_position: usize,
    ) -> Self {
        ParseError::MissingOperatorBetween {
            left: left.into(),
            left_position,
            right: right.into(),
            right_position,
        }
    }

    /// Creates a problem parsing error.
    pub fn problem_parsing(position: usize, operator: impl Into<String>) -> Self {
        ParseError::ProblemParsing {
            position,
            operator: operator.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::EmptyExpression => ParseErrorKind::EmptyExpression,
            ParseError::MissingOperand { side, .. } => ParseErrorKind::MissingOperand(*side),
            ParseError::MissingOpeningParenthesis { .. } => {
                ParseErrorKind::MissingOpeningParenthesis
            }
            ParseError::MissingClosingParenthesis { .. } => {
                ParseErrorKind::MissingClosingParenthesis
            }
            ParseError::MissingOperatorBetween { .. } => ParseErrorKind::MissingOperatorBetween,
            ParseError::MissingOperator => ParseErrorKind::MissingOperator,
            ParseError::ProblemParsing { .. } => ParseErrorKind::ProblemParsing,
        }
    }

    /// Returns the token position the error refers to, if any.
    ///
    /// For [`ParseError::MissingOperatorBetween`] this is the position of the
    /// right-hand expression, where the operator was expected.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::MissingOperand { position, .. }
            | ParseError::MissingOpeningParenthesis { position }
            | ParseError::MissingClosingParenthesis { position }
            | ParseError::ProblemParsing { position, .. } => Some(*position),
            ParseError::MissingOperatorBetween { right_position, .. } => Some(*right_position),
            ParseError::EmptyExpression | ParseError::MissingOperator => None,
        }
    }

    /// Returns the offending symbol, if any.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            ParseError::MissingOperand { operator, .. }
            | ParseError::ProblemParsing { operator, .. } => Some(operator),
            ParseError::MissingOpeningParenthesis { .. } => Some(")"),
            ParseError::MissingClosingParenthesis { .. } => Some("("),
            ParseError::MissingOperatorBetween { right, .. } => Some(right),
            ParseError::EmptyExpression | ParseError::MissingOperator => None,
        }
    }
}
