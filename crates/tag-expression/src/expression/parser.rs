//! Entry points for parsing tag expressions.

use std::str::FromStr;

use tracing::{debug, trace};

use super::ast::Expression;
use super::error::{ExpressionResult, ParseError};
use super::shunting_yard::ShuntingYard;
use super::tokenizer::tokenize;

/// The outcome of parsing a tag expression.
///
/// Holds either the parsed [`Expression`] or the [`ParseError`] that stopped
/// the parse, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ParseResult {
    outcome: ExpressionResult<Expression>,
}

impl ParseResult {
    fn new(outcome: ExpressionResult<Expression>) -> Self {
        Self { outcome }
    }

    /// Returns true if parsing succeeded.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Returns true if parsing failed.
    pub fn is_err(&self) -> bool {
        self.outcome.is_err()
    }

    /// Returns the parsed expression, if parsing succeeded.
    pub fn expression(&self) -> Option<&Expression> {
        self.outcome.as_ref().ok()
    }

    /// Returns the parse error, if parsing failed.
    pub fn parse_error(&self) -> Option<&ParseError> {
        self.outcome.as_ref().err()
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> ExpressionResult<Expression> {
        self.outcome
    }

    /// Returns the expression, or an error built from the failure message.
    ///
    /// This is the adapter for callers that want their own error type at the
    /// boundary, e.g. a configuration error naming the offending input.
    ///
    /// # Example
    ///
    /// ```
    /// use tag_expression_rs::ExpressionParser;
    ///
    /// let input = "fast &";
    /// let error = ExpressionParser::parse(input)
    ///     .expression_or_else(|message| format!("unable to parse [{input}]: {message}"))
    ///     .unwrap_err();
    /// assert_eq!(error, "unable to parse [fast &]: & at <1> missing rhs operand");
    /// ```
    pub fn expression_or_else<E, F>(self, error: F) -> Result<Expression, E>
    where
        F: FnOnce(String) -> E,
    {
        self.outcome.map_err(|e| error(e.to_string()))
    }
}

impl From<ParseResult> for ExpressionResult<Expression> {
    fn from(result: ParseResult) -> Self {
        result.into_result()
    }
}

/// Parser for tag expressions.
///
/// Uses a modified shunting-yard algorithm: a single left-to-right pass over
/// the tokens with an operand stack and an operator stack. Every stack entry
/// remembers its token position, which is what lets errors like
/// `missing operator between foo <0> and bar <1>` point at the right place.
///
/// # Operator Precedence (highest to lowest)
///
/// 1. `!` (NOT) - unary, right-associative
/// 2. `&` (AND) - binary, left-associative
/// 3. `|` (OR) - binary, left-associative
///
/// # Example
///
/// ```
/// use tag_expression_rs::{Expression, ExpressionParser};
///
/// let result = ExpressionParser::parse("! foo & bar");
/// assert_eq!(result.expression().map(Expression::to_string).as_deref(), Some("(!foo & bar)"));
///
/// let result = ExpressionParser::parse("foo bar");
/// assert_eq!(
///     result.parse_error().map(ToString::to_string).as_deref(),
///     Some("missing operator between foo <0> and bar <1>")
/// );
/// ```
pub struct ExpressionParser;

impl ExpressionParser {
    /// Parses a tag expression string.
    ///
    /// Never panics on malformed input; failures are reported through the
    /// returned [`ParseResult`].
    pub fn parse(input: &str) -> ParseResult {
        Self::parse_optional(Some(input))
    }

    /// Parses an optional tag expression; `None` is an empty expression.
    pub fn parse_optional(input: Option<&str>) -> ParseResult {
        let tokens = tokenize(input);
        trace!(?tokens, "tokenized tag expression");

        let outcome = ShuntingYard::new(&tokens).execute();
        match &outcome {
            Ok(expression) => debug!(%expression, "parsed tag expression"),
            Err(error) => debug!(
                %error,
                input = input.unwrap_or_default(),
                "unable to parse tag expression"
            ),
        }
        ParseResult::new(outcome)
    }
}

/// Parses a tag expression string. Shorthand for [`ExpressionParser::parse`].
pub fn parse(input: &str) -> ParseResult {
    ExpressionParser::parse(input)
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpressionParser::parse(s).into_result()
    }
}
