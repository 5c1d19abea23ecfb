//! Operator table for tag expressions.
//!
//! The table is a `static`, shared read-only by every parse.

use std::fmt;

use super::ast::Expression;
use super::error::{ExpressionResult, OperandSide, ParseError};
use super::shunting_yard::{token_index, Positioned};

/// Stack of completed expressions, tagged with the token position at which
/// each was completed.
pub(crate) type Operands = Vec<Positioned<Expression>>;

/// Builds an expression from the operands on top of the stack.
///
/// Only called once the stack is known to hold at least `arity` operands.
type Reduction = fn(&mut Operands, isize) -> ExpressionResult<()>;

/// Operator associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// Chains group from the left: `a & b & c` is `(a & b) & c`.
    Left,
    /// Chains group from the right: `! ! a` is `!(!a)`.
    Right,
}

/// An operator known to the parser.
#[derive(Clone, Copy)]
pub struct Operator {
    representation: &'static str,
    precedence: i32,
    arity: usize,
    associativity: Associativity,
    reduction: Reduction,
}

pub(crate) static NOT: Operator = Operator::unary("!", 3, Associativity::Right, reduce_not);
pub(crate) static AND: Operator = Operator::binary("&", 2, Associativity::Left, reduce_and);
pub(crate) static OR: Operator = Operator::binary("|", 1, Associativity::Left, reduce_or);

pub(crate) static RIGHT_PARENTHESIS: Operator = Operator::nullary(")", -1);
pub(crate) static LEFT_PARENTHESIS: Operator = Operator::nullary("(", -2);

/// Bottom of the operator stack; every real operator binds tighter.
pub(crate) static SENTINEL: Operator = Operator::nullary("sentinel", i32::MIN);

static OPERATORS: [&Operator; 3] = [&NOT, &AND, &OR];

/// Returns true if the token is one of `!`, `&` or `|`.
pub fn is_operator(token: &str) -> bool {
    operator_for(token).is_some()
}

/// Looks up the operator represented by a token.
pub fn operator_for(token: &str) -> Option<&'static Operator> {
    OPERATORS.iter().copied().find(|op| op.represents(token))
}

impl Operator {
    const fn nullary(representation: &'static str, precedence: i32) -> Self {
        Self {
            representation,
            precedence,
            arity: 0,
            associativity: Associativity::Left,
            reduction: reduce_nothing,
        }
    }

    const fn unary(
        representation: &'static str,
        precedence: i32,
        associativity: Associativity,
        reduction: Reduction,
    ) -> Self {
        Self {
            representation,
            precedence,
            arity: 1,
            associativity,
            reduction,
        }
    }

    const fn binary(
        representation: &'static str,
        precedence: i32,
        associativity: Associativity,
        reduction: Reduction,
    ) -> Self {
        Self {
            representation,
            precedence,
            arity: 2,
            associativity,
            reduction,
        }
    }

    /// The symbol this operator is written as.
    pub fn representation(&self) -> &'static str {
        self.representation
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(&self) -> i32 {
        self.precedence
    }

    /// Number of operands consumed.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn associativity(&self) -> Associativity {
        self.associativity
    }

    pub fn is_left_associative(&self) -> bool {
        self.associativity == Associativity::Left
    }

    pub(crate) fn represents(&self, token: &str) -> bool {
        self.representation == token
    }

    /// Returns true if `previous`, sitting on top of the operator stack, must
    /// be reduced before this operator is pushed.
    pub(crate) fn yields_to(&self, previous: &Operator) -> bool {
        self.precedence < previous.precedence
            || (self.precedence == previous.precedence && self.is_left_associative())
    }

    /// Pops this operator's operands and pushes the combined expression at
    /// `position`.
    pub(crate) fn reduce(&self, operands: &mut Operands, position: isize) -> ExpressionResult<()> {
        if operands.len() < self.arity {
            return Err(ParseError::missing_operand(
                self.missing_side(operands, position),
                self.representation,
                token_index(position),
            ));
        }
        (self.reduction)(operands, position)
    }

    fn missing_side(&self, operands: &Operands, position: isize) -> OperandSide {
        if self.arity == 1 {
            return match self.associativity {
                Associativity::Left => OperandSide::Lhs,
                Associativity::Right => OperandSide::Rhs,
            };
        }
        match operands.last() {
            Some(operand) if position < operand.position => OperandSide::Lhs,
            Some(_) => OperandSide::Rhs,
            None => OperandSide::Both,
        }
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("representation", &self.representation)
            .field("precedence", &self.precedence)
            .field("arity", &self.arity)
            .field("associativity", &self.associativity)
            .finish()
    }
}

fn reduce_nothing(_operands: &mut Operands, _position: isize) -> ExpressionResult<()> {
    Ok(())
}

fn reduce_not(operands: &mut Operands, position: isize) -> ExpressionResult<()> {
    match operands.pop() {
        Some(rhs) if position < rhs.position => {
            operands.push(Positioned::new(position, Expression::not(rhs.element)));
            Ok(())
        }
        _ => Err(ParseError::missing_operand(
            OperandSide::Rhs,
            NOT.representation,
            token_index(position),
        )),
    }
}

fn reduce_and(operands: &mut Operands, position: isize) -> ExpressionResult<()> {
    reduce_binary(operands, position, AND.representation, Expression::and)
}

fn reduce_or(operands: &mut Operands, position: isize) -> ExpressionResult<()> {
    reduce_binary(operands, position, OR.representation, Expression::or)
}

fn reduce_binary(
    operands: &mut Operands,
    position: isize,
    representation: &str,
    combine: fn(Expression, Expression) -> Expression,
) -> ExpressionResult<()> {
    let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
        return Err(ParseError::missing_operand(
            OperandSide::Both,
            representation,
            token_index(position),
        ));
    };

    if lhs.position < position && position < rhs.position {
        operands.push(Positioned::new(position, combine(lhs.element, rhs.element)));
        return Ok(());
    }

    if position > rhs.position {
        return Err(ParseError::missing_operand(
            OperandSide::Rhs,
            representation,
            token_index(position),
        ));
    }
    if position < lhs.position {
        return Err(ParseError::missing_operator_between(
            lhs.element.to_string(),
            lhs.index(),
            rhs.element.to_string(),
            rhs.index(),
        ));
    }
    Err(ParseError::problem_parsing(token_index(position), representation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_lookup() {
        assert!(is_operator("!"));
        assert!(is_operator("&"));
        assert!(is_operator("|"));
        assert!(!is_operator("("));
        assert!(!is_operator(")"));
        assert!(!is_operator("foo"));
        assert!(!is_operator("&&"));
    }

    #[test]
    fn test_operator_table() {
        let not = operator_for("!").unwrap();
        assert_eq!(not.representation(), "!");
        assert_eq!(not.arity(), 1);
        assert_eq!(not.precedence(), 3);
        assert_eq!(not.associativity(), Associativity::Right);

        let and = operator_for("&").unwrap();
        assert_eq!(and.arity(), 2);
        assert_eq!(and.precedence(), 2);
        assert!(and.is_left_associative());

        let or = operator_for("|").unwrap();
        assert_eq!(or.arity(), 2);
        assert_eq!(or.precedence(), 1);
        assert!(or.is_left_associative());
    }

    #[test]
    fn test_pseudo_operators_rank_below_real_operators() {
        for op in OPERATORS {
            assert!(op.precedence() > RIGHT_PARENTHESIS.precedence());
            assert!(op.precedence() > LEFT_PARENTHESIS.precedence());
            assert!(op.precedence() > SENTINEL.precedence());
        }
        assert_eq!(LEFT_PARENTHESIS.arity(), 0);
        assert_eq!(RIGHT_PARENTHESIS.arity(), 0);
        assert_eq!(SENTINEL.arity(), 0);
    }

    #[test]
    fn test_yields_to() {
        // & on the stack is reduced before | is pushed
        assert!(OR.yields_to(&AND));
        // left-associative: equal precedence reduces
        assert!(AND.yields_to(&AND));
        // right-associative: equal precedence does not
        assert!(!NOT.yields_to(&NOT));
        assert!(!AND.yields_to(&OR));
        assert!(!NOT.yields_to(&LEFT_PARENTHESIS));
        assert!(!OR.yields_to(&SENTINEL));
    }

    #[test]
    fn test_reduce_binary() {
        let mut operands = vec![
            Positioned::new(0, Expression::tag("a")),
            Positioned::new(2, Expression::tag("b")),
        ];
        AND.reduce(&mut operands, 1).unwrap();
        assert_eq!(operands.len(), 1);
        assert_eq!(operands[0].position, 1);
        assert_eq!(operands[0].element.to_string(), "(a & b)");
    }

    #[test]
    fn test_reduce_missing_operands() {
        let mut operands = Vec::new();
        assert_eq!(
            OR.reduce(&mut operands, 0),
            Err(ParseError::missing_operand(OperandSide::Both, "|", 0))
        );
        assert_eq!(
            NOT.reduce(&mut operands, 0),
            Err(ParseError::missing_operand(OperandSide::Rhs, "!", 0))
        );

        let mut operands = vec![Positioned::new(1, Expression::tag("a"))];
        assert_eq!(
            AND.reduce(&mut operands, 0),
            Err(ParseError::missing_operand(OperandSide::Lhs, "&", 0))
        );

        let mut operands = vec![Positioned::new(0, Expression::tag("a"))];
        assert_eq!(
            AND.reduce(&mut operands, 1),
            Err(ParseError::missing_operand(OperandSide::Rhs, "&", 1))
        );
    }

    #[test]
    fn test_reduce_out_of_order_operands() {
        // operator precedes both operands
        let mut operands = vec![
            Positioned::new(2, Expression::tag("a")),
            Positioned::new(3, Expression::tag("b")),
        ];
        assert_eq!(
            OR.reduce(&mut operands, 1),
            Err(ParseError::missing_operator_between("a", 2, "b", 3))
        );

        // operator follows both operands
        let mut operands = vec![
            Positioned::new(0, Expression::tag("a")),
            Positioned::new(1, Expression::tag("b")),
        ];
        assert_eq!(
            OR.reduce(&mut operands, 2),
            Err(ParseError::missing_operand(OperandSide::Rhs, "|", 2))
        );

        // operand to the left of a NOT
        let mut operands = vec![Positioned::new(0, Expression::tag("a"))];
        assert_eq!(
            NOT.reduce(&mut operands, 1),
            Err(ParseError::missing_operand(OperandSide::Rhs, "!", 1))
        );
    }

    #[test]
    fn test_reduce_nullary_is_noop() {
        let mut operands = vec![Positioned::new(0, Expression::tag("a"))];
        SENTINEL.reduce(&mut operands, -1).unwrap();
        assert_eq!(operands.len(), 1);
    }
}
