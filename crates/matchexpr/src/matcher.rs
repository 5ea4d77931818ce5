//! The compiled-expression value object.

use std::fmt;

use crate::compile::compile;
use crate::errors::CompileError;
use crate::items::Items;
use crate::predicate::Predicate;

/// A filter expression compiled into a reusable membership predicate.
///
/// Compile once, evaluate many times. The matcher is immutable after
/// construction and holds no interior state, so sharing one across
/// threads requires no synchronization.
///
/// # Examples
/// ```
/// use matchexpr::Matcher;
///
/// let matcher = Matcher::new(Some("foo and bar")).expect("expression is valid");
/// assert!(!matcher.matches(&Vec::<String>::new()));
/// assert!(!matcher.matches(&["foo"]));
/// assert!(matcher.matches(&["foo", "bar"]));
/// assert!(matcher.matches("foobarbaz"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    expression: String,
    predicate: Predicate,
}

impl Matcher {
    /// Compile an expression into a matcher.
    ///
    /// `None` and the empty string both normalize to `"anything()"`:
    /// supplying no expression means matching everything.
    ///
    /// # Errors
    /// Returns [`CompileError`] when the expression is malformed or uses
    /// constructs outside the restricted grammar.
    ///
    /// # Examples
    /// ```
    /// use matchexpr::Matcher;
    /// let matcher = Matcher::new(None).expect("normalized expression is valid");
    /// assert_eq!(matcher.source(), "anything()");
    /// assert!(matcher.matches(&Vec::<String>::new()));
    /// ```
    pub fn new(expression: Option<&str>) -> Result<Self, CompileError> {
        let expression = match expression {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => "anything()".to_string(),
        };
        let predicate = compile(&expression)?;
        Ok(Self {
            expression,
            predicate,
        })
    }

    /// Test whether the expression matches the given item collection.
    #[must_use]
    pub fn matches<I: Items + ?Sized>(&self, items: &I) -> bool {
        self.predicate.evaluate(items)
    }

    /// The (possibly normalized) expression text this matcher compiled.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.expression
    }

    /// The compiled predicate tree.
    #[must_use]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matcher('{}')", self.expression)
    }
}
