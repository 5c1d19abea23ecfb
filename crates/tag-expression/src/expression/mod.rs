//! Tag expression parser and evaluator.
//!
//! This module turns infix tag expressions into an [`Expression`] tree and
//! evaluates that tree against the tags carried by an item.
//!
//! # Supported Syntax
//!
//! ## Tags
//! - Any run of text that is not whitespace or a reserved symbol, e.g.
//!   `integration`, `db-heavy`, `v2.1`
//!
//! ## Boolean Operators
//! - `!` - NOT (binds tightest, right-associative)
//! - `&` - AND (left-associative)
//! - `|` - OR (binds loosest, left-associative)
//! - `()` - Grouping
//!
//! # Example
//!
//! ```
//! use tag_expression_rs::expression::{Expression, ExpressionParser};
//!
//! let result = ExpressionParser::parse("smoke | api & !slow");
//! let expression = result.into_result().unwrap();
//! assert_eq!(expression.to_canonical_string(), "(smoke | (api & !slow))");
//!
//! assert!(expression.evaluate(&["api"]));
//! assert!(!expression.evaluate(&["api", "slow"]));
//!
//! let error = ExpressionParser::parse("smoke &").into_result().unwrap_err();
//! assert_eq!(error.to_string(), "& at <1> missing rhs operand");
//! ```

mod ast;
mod error;
mod evaluator;
mod operator;
mod parser;
mod shunting_yard;
mod tokenizer;

pub use ast::Expression;
pub use error::{ExpressionResult, OperandSide, ParseError, ParseErrorKind};
pub use evaluator::TagSet;
pub use operator::{is_operator, operator_for, Associativity, Operator};
pub use parser::{parse, ExpressionParser, ParseResult};
pub use tokenizer::{tokenize, Tokenizer, RESERVED_SYMBOLS};
