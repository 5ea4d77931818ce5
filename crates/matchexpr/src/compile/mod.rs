//! Expression compilation: lexing, parsing and grammar restriction.

mod ast;
mod lexer;
mod parser;
mod rewrite;

use crate::errors::CompileError;
use crate::predicate::Predicate;

/// Compile an expression into its predicate tree.
///
/// The input is parsed with a general boolean-expression grammar and then
/// restricted node-by-node; anything outside the predicate language fails
/// here rather than at evaluation time.
///
/// # Errors
/// Returns [`CompileError`] when the expression is malformed or uses
/// constructs outside the restricted subset.
///
/// # Examples
/// ```
/// use matchexpr::compile;
/// let predicate = compile("foo and not bar").expect("expression is valid");
/// assert!(predicate.evaluate(&["foo"]));
/// assert!(!predicate.evaluate(&["foo", "bar"]));
/// ```
pub fn compile(expression: &str) -> Result<Predicate, CompileError> {
    let tokens = lexer::lex(expression)?;
    let tree = parser::parse(expression, tokens)?;
    rewrite::rewrite(expression, &tree)
}
