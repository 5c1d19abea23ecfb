//! Evaluation of tag expressions against an item's tags.
//!
//! Anything that can answer "does this item carry tag T" implements
//! [`TagSet`]. Implementations are provided for the standard sets and for
//! slices, vectors and arrays of tag names.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use tag_expression_rs::ExpressionParser;
//!
//! let expression = ExpressionParser::parse("db & !slow").into_result().unwrap();
//!
//! let tags: BTreeSet<String> = ["db".to_string()].into_iter().collect();
//! assert!(expression.evaluate(&tags));
//! assert!(!expression.evaluate(&["db", "slow"]));
//! ```

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use super::ast::Expression;

/// A collection of tag names that can be queried for membership.
///
/// Matching is exact and case-sensitive.
pub trait TagSet {
    /// Returns true if the collection contains the named tag.
    fn contains_tag(&self, name: &str) -> bool;
}

impl<T: TagSet + ?Sized> TagSet for &T {
    fn contains_tag(&self, name: &str) -> bool {
        (**self).contains_tag(name)
    }
}

impl<S: BuildHasher> TagSet for HashSet<String, S> {
    fn contains_tag(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<S: BuildHasher> TagSet for HashSet<&str, S> {
    fn contains_tag(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl TagSet for BTreeSet<String> {
    fn contains_tag(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl TagSet for BTreeSet<&str> {
    fn contains_tag(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl TagSet for [String] {
    fn contains_tag(&self, name: &str) -> bool {
        self.iter().any(|tag| tag == name)
    }
}

impl TagSet for [&str] {
    fn contains_tag(&self, name: &str) -> bool {
        self.iter().any(|tag| *tag == name)
    }
}

impl TagSet for Vec<String> {
    fn contains_tag(&self, name: &str) -> bool {
        self.as_slice().contains_tag(name)
    }
}

impl TagSet for Vec<&str> {
    fn contains_tag(&self, name: &str) -> bool {
        self.as_slice().contains_tag(name)
    }
}

impl<const N: usize> TagSet for [&str; N] {
    fn contains_tag(&self, name: &str) -> bool {
        self.as_slice().contains_tag(name)
    }
}

/// A pending step while evaluating.
enum Step<'a> {
    Node(&'a Expression),
    Negate,
    AndThen(&'a Expression),
    OrElse(&'a Expression),
}

impl Expression {
    /// Returns true if the given tags satisfy this expression.
    ///
    /// `&` and `|` short-circuit: the right operand is only looked at when
    /// the left one does not decide the result.
    pub fn evaluate<T: TagSet + ?Sized>(&self, tags: &T) -> bool {
        let mut pending = vec![Step::Node(self)];
        let mut values: Vec<bool> = Vec::new();

        while let Some(step) = pending.pop() {
            match step {
                Step::Node(Expression::Tag(name)) => values.push(tags.contains_tag(name)),
                Step::Node(Expression::Not(operand)) => {
                    pending.push(Step::Negate);
                    pending.push(Step::Node(operand));
                }
                Step::Node(Expression::And(left, right)) => {
                    pending.push(Step::AndThen(right));
                    pending.push(Step::Node(left));
                }
                Step::Node(Expression::Or(left, right)) => {
                    pending.push(Step::OrElse(right));
                    pending.push(Step::Node(left));
                }
                Step::Negate => {
                    if let Some(value) = values.pop() {
                        values.push(!value);
                    }
                }
                Step::AndThen(right) => match values.pop() {
                    Some(true) => pending.push(Step::Node(right)),
                    _ => values.push(false),
                },
                Step::OrElse(right) => match values.pop() {
                    Some(false) => pending.push(Step::Node(right)),
                    _ => values.push(true),
                },
            }
        }

        values.pop().unwrap_or(false)
    }
}
