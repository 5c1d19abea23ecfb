//! Boolean tag expressions.
//!
//! This crate parses infix expressions over named tags, such as
//! `"fast & !(flaky | slow)"`, into an [`Expression`] tree that can be
//! evaluated against any [`TagSet`]. Malformed input is reported through a
//! [`ParseResult`] carrying a position-aware [`ParseError`].
//!
//! ```
//! use std::collections::HashSet;
//! use tag_expression_rs::ExpressionParser;
//!
//! let expression = ExpressionParser::parse("fast & !flaky").into_result().unwrap();
//! assert_eq!(expression.to_string(), "(fast & !flaky)");
//!
//! let tags: HashSet<&str> = ["fast"].into_iter().collect();
//! assert!(expression.evaluate(&tags));
//! ```

pub mod expression;

pub use expression::{
    parse, Expression, ExpressionParser, ExpressionResult, OperandSide, ParseError,
    ParseErrorKind, ParseResult, TagSet,
};
