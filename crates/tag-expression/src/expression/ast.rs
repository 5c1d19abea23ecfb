//! Abstract Syntax Tree (AST) for tag expressions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents a parsed tag expression.
///
/// Each composite node owns its operands. Trees are immutable once built and
/// can be shared freely between threads.
///
/// The [`Display`](fmt::Display) implementation renders the canonical form:
/// binary nodes are fully parenthesized, negation is written as `!` directly
/// followed by its operand.
///
/// Rendering, [`evaluate`](Expression::evaluate), [`tags`](Expression::tags)
/// and dropping walk the tree with an explicit stack, so arbitrarily deep
/// trees are safe. The derived `Clone`, `PartialEq`, `Hash`, `Debug` and
/// serde impls recurse and are meant for trees of ordinary depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    /// Matches items carrying the named tag.
    Tag(String),

    /// Logical NOT of an expression.
    Not(Box<Expression>),

    /// Logical AND of two expressions.
    And(Box<Expression>, Box<Expression>),

    /// Logical OR of two expressions.
    Or(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Creates a tag leaf.
    ///
    /// # Example
    ///
    /// ```
    /// use tag_expression_rs::Expression;
    ///
    /// let expression = Expression::tag("smoke");
    /// assert_eq!(expression, Expression::Tag("smoke".to_string()));
    /// ```
    pub fn tag(name: impl Into<String>) -> Self {
        Expression::Tag(name.into())
    }

    /// Creates a NOT expression from another expression.
    pub fn not(operand: Expression) -> Self {
        Expression::Not(Box::new(operand))
    }

    /// Creates an AND expression from two expressions.
    ///
    /// # Example
    ///
    /// ```
    /// use tag_expression_rs::Expression;
    ///
    /// let expression = Expression::and(Expression::tag("a"), Expression::tag("b"));
    /// assert_eq!(expression.to_string(), "(a & b)");
    /// ```
    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    /// Creates an OR expression from two expressions.
    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    /// Returns the canonical string form of this expression.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Returns the distinct tag names referenced, in order of first occurrence.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags = Vec::new();
        self.collect_tags(&mut tags);
        tags
    }

    fn collect_tags<'a>(&'a self, tags: &mut Vec<&'a str>) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Expression::Tag(name) => {
                    if !tags.contains(&name.as_str()) {
                        tags.push(name);
                    }
                }
                Expression::Not(operand) => pending.push(operand),
                Expression::And(left, right) | Expression::Or(left, right) => {
                    pending.push(right);
                    pending.push(left);
                }
            }
        }
    }
}

/// A pending step while rendering the canonical form.
enum Render<'a> {
    Node(&'a Expression),
    Text(&'static str),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Render::Node(self)];
        while let Some(step) = pending.pop() {
            match step {
                Render::Text(text) => f.write_str(text)?,
                Render::Node(Expression::Tag(name)) => f.write_str(name)?,
                Render::Node(Expression::Not(operand)) => {
                    f.write_str("!")?;
                    pending.push(Render::Node(operand));
                }
                Render::Node(Expression::And(left, right)) => {
                    f.write_str("(")?;
                    pending.extend([
                        Render::Text(")"),
                        Render::Node(right),
                        Render::Text(" & "),
                        Render::Node(left),
                    ]);
                }
                Render::Node(Expression::Or(left, right)) => {
                    f.write_str("(")?;
                    pending.extend([
                        Render::Text(")"),
                        Render::Node(right),
                        Render::Text(" | "),
                        Render::Node(left),
                    ]);
                }
            }
        }
        Ok(())
    }
}

impl Drop for Expression {
    /// Unlinks children onto a heap stack so deep trees drop in bounded
    /// stack space.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

impl Expression {
    /// Moves composite children into `pending`, leaving empty leaves behind.
    fn take_children(&mut self, pending: &mut Vec<Expression>) {
        let leaf = || Expression::Tag(String::new());
        match self {
            Expression::Tag(_) => {}
            Expression::Not(operand) => {
                if !matches!(**operand, Expression::Tag(_)) {
                    pending.push(std::mem::replace(&mut **operand, leaf()));
                }
            }
            Expression::And(left, right) | Expression::Or(left, right) => {
                for child in [left, right] {
                    if !matches!(**child, Expression::Tag(_)) {
                        pending.push(std::mem::replace(&mut **child, leaf()));
                    }
                }
            }
        }
    }
}
