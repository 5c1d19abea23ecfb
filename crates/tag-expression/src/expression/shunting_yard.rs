//! Shunting-yard parser over a token sequence.
//!
//! Operands and operators are kept on two stacks, each element tagged with
//! the token position at which it was pushed. A reduced expression takes
//! the position of the operator that built it, so later reductions can tell
//! whether an operand really sits on the expected side of its operator.

use super::ast::Expression;
use super::error::{ExpressionResult, ParseError};
use super::operator::{
    operator_for, Operands, Operator, LEFT_PARENTHESIS, RIGHT_PARENTHESIS, SENTINEL,
};

/// A stack element paired with its token position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Positioned<T> {
    pub(crate) position: isize,
    pub(crate) element: T,
}

impl<T> Positioned<T> {
    pub(crate) fn new(position: isize, element: T) -> Self {
        Self { position, element }
    }

    /// The position as a token index.
    pub(crate) fn index(&self) -> usize {
        token_index(self.position)
    }
}

/// Converts a stack position to a token index. Only the sentinel sits below
/// zero, and it never appears in an error.
pub(crate) fn token_index(position: isize) -> usize {
    usize::try_from(position).unwrap_or_default()
}

pub(crate) struct ShuntingYard<'a> {
    tokens: &'a [&'a str],
    expressions: Operands,
    operators: Vec<Positioned<&'static Operator>>,
}

impl<'a> ShuntingYard<'a> {
    pub(crate) fn new(tokens: &'a [&'a str]) -> Self {
        Self {
            tokens,
            expressions: Vec::new(),
            operators: vec![Positioned::new(-1, &SENTINEL)],
        }
    }

    /// Runs the parse to completion, stopping at the first error.
    pub(crate) fn execute(mut self) -> ExpressionResult<Expression> {
        self.process_tokens()?;
        self.consume_remaining_operators()?;
        self.ensure_single_expression_remains()
    }

    fn process_tokens(&mut self) -> ExpressionResult<()> {
        let tokens = self.tokens;
        for (index, &token) in tokens.iter().enumerate() {
            // Slice lengths never exceed isize::MAX.
            let position = index as isize;
            if LEFT_PARENTHESIS.represents(token) {
                self.operators.push(Positioned::new(position, &LEFT_PARENTHESIS));
            } else if RIGHT_PARENTHESIS.represents(token) {
                self.find_matching_left_parenthesis(position)?;
            } else if let Some(operator) = operator_for(token) {
                self.find_operands(position, operator)?;
            } else {
                self.expressions
                    .push(Positioned::new(position, Expression::tag(token)));
            }
        }
        Ok(())
    }

    fn find_matching_left_parenthesis(&mut self, position: isize) -> ExpressionResult<()> {
        while let Some(top) = self.operators.pop() {
            if LEFT_PARENTHESIS.represents(top.element.representation()) {
                return Ok(());
            }
            top.element.reduce(&mut self.expressions, top.position)?;
        }
        Err(ParseError::MissingOpeningParenthesis {
            position: token_index(position),
        })
    }

    fn find_operands(
        &mut self,
        position: isize,
        current: &'static Operator,
    ) -> ExpressionResult<()> {
        while current.yields_to(self.previous_operator()) {
            let Some(top) = self.operators.pop() else {
                break;
            };
            top.element.reduce(&mut self.expressions, top.position)?;
        }
        self.operators.push(Positioned::new(position, current));
        Ok(())
    }

    fn previous_operator(&self) -> &'static Operator {
        self.operators.last().map_or(&SENTINEL, |top| top.element)
    }

    fn consume_remaining_operators(&mut self) -> ExpressionResult<()> {
        while let Some(top) = self.operators.pop() {
            if LEFT_PARENTHESIS.represents(top.element.representation()) {
                return Err(ParseError::MissingClosingParenthesis {
                    position: top.index(),
                });
            }
            top.element.reduce(&mut self.expressions, top.position)?;
        }
        Ok(())
    }

    fn ensure_single_expression_remains(&mut self) -> ExpressionResult<Expression> {
        match (self.expressions.pop(), self.expressions.pop()) {
            (Some(root), None) => Ok(root.element),
            (None, _) => Err(ParseError::EmptyExpression),
            (Some(rhs), Some(lhs)) if lhs.position < rhs.position => {
                Err(ParseError::missing_operator_between(
                    lhs.element.to_string(),
                    lhs.index(),
                    rhs.element.to_string(),
                    rhs.index(),
                ))
            }
            (Some(_), Some(_)) => Err(ParseError::MissingOperator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::error::OperandSide;

    fn run(tokens: &[&str]) -> ExpressionResult<Expression> {
        ShuntingYard::new(tokens).execute()
    }

    #[test]
    fn test_starts_with_sentinel() {
        let yard = ShuntingYard::new(&[]);
        assert_eq!(yard.operators.len(), 1);
        assert_eq!(yard.operators[0].position, -1);
        assert_eq!(yard.previous_operator().precedence(), i32::MIN);
    }

    #[test]
    fn test_no_tokens_is_empty_expression() {
        assert_eq!(run(&[]), Err(ParseError::EmptyExpression));
    }

    #[test]
    fn test_only_parentheses_is_empty_expression() {
        assert_eq!(run(&["(", ")"]), Err(ParseError::EmptyExpression));
    }

    #[test]
    fn test_single_tag() {
        assert_eq!(run(&["foo"]), Ok(Expression::tag("foo")));
    }

    #[test]
    fn test_reduced_expression_takes_operator_position() {
        let mut yard = ShuntingYard::new(&["a", "&", "b"]);
        yard.process_tokens().unwrap();
        yard.consume_remaining_operators().unwrap();
        assert_eq!(yard.expressions.len(), 1);
        assert_eq!(yard.expressions[0].position, 1);
    }

    #[test]
    fn test_unmatched_closing_parenthesis_stops_scan() {
        // The scan stops at `)`; the trailing `&` is never examined.
        assert_eq!(
            run(&["a", ")", "&"]),
            Err(ParseError::MissingOpeningParenthesis { position: 1 })
        );
    }

    #[test]
    fn test_error_inside_parentheses() {
        assert_eq!(
            run(&["(", "a", "|", ")"]),
            Err(ParseError::missing_operand(OperandSide::Rhs, "|", 2))
        );
    }

    #[test]
    fn test_adjacent_expressions_at_end() {
        assert_eq!(
            run(&["(", "a", "&", "b", ")", "c"]),
            Err(ParseError::missing_operator_between("(a & b)", 2, "c", 5))
        );
    }
}
