//! The restricted predicate tree and its evaluator.

use crate::items::Items;

/// Compiled form of a filter expression.
///
/// Successful compilation produces only these six variants; arithmetic,
/// comparisons and unrestricted calls never survive the rewrite. The tree
/// is immutable and carries no evaluation state, so one predicate may be
/// evaluated from many threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// True iff the key is contained in the evaluated collection.
    Membership(String),
    /// True iff the child is false.
    Not(Box<Predicate>),
    /// True iff all children are true; compiled from `and`.
    All(Vec<Predicate>),
    /// True iff any child is true; compiled from `or`.
    Any(Vec<Predicate>),
    /// True iff the collection has no elements; compiled from `empty()`.
    Empty,
    /// Constant true; compiled from `anything()`.
    Anything,
}

impl Predicate {
    /// Evaluate the predicate against a collection of string-like items.
    ///
    /// Total for any compiled tree: there is no failure path at
    /// evaluation time.
    ///
    /// # Examples
    /// ```
    /// use matchexpr::compile;
    /// let predicate = compile("foo or empty()").expect("expression is valid");
    /// assert!(predicate.evaluate(&["foo"]));
    /// assert!(predicate.evaluate(&Vec::<String>::new()));
    /// assert!(!predicate.evaluate(&["bar"]));
    /// ```
    #[must_use]
    pub fn evaluate<I: Items + ?Sized>(&self, items: &I) -> bool {
        match self {
            Self::Membership(key) => items.contains_item(key),
            Self::Not(child) => !child.evaluate(items),
            Self::All(children) => children.iter().all(|child| child.evaluate(items)),
            Self::Any(children) => children.iter().any(|child| child.evaluate(items)),
            Self::Empty => items.is_empty(),
            Self::Anything => true,
        }
    }
}
