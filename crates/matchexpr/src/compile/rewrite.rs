//! Grammar restrictor rewriting the generic tree into a predicate tree.
//!
//! Each node either maps onto one of the six predicate variants or is
//! rejected with a diagnostic pointing at the most specific sub-span the
//! parser recorded for it.

use crate::errors::{CompileError, syntax_error};
use crate::predicate::Predicate;

use super::ast::Expr;

/// Rewrite the parsed tree, restricting it to the predicate language.
pub(crate) fn rewrite(expression: &str, expr: &Expr) -> Result<Predicate, CompileError> {
    match expr {
        Expr::Ident { name, .. } => Ok(Predicate::Membership(name.clone())),
        Expr::StringLit { value, .. } => Ok(Predicate::Membership(value.clone())),
        // Numbers coerce to their textual form: `42` matches the item "42".
        Expr::NumberLit { text, .. } => Ok(Predicate::Membership(text.clone())),
        Expr::Call { name, args, .. } if name.as_str() == "empty" && args.is_empty() => {
            Ok(Predicate::Empty)
        }
        Expr::Call { name, args, .. } if name.as_str() == "anything" && args.is_empty() => {
            Ok(Predicate::Anything)
        }
        Expr::Not { operand, .. } => {
            Ok(Predicate::Not(Box::new(rewrite(expression, operand)?)))
        }
        Expr::And { operands } => Ok(Predicate::All(rewrite_all(expression, operands)?)),
        Expr::Or { operands } => Ok(Predicate::Any(rewrite_all(expression, operands)?)),
        Expr::Call {
            name, paren_span, ..
        } if matches!(name.as_str(), "empty" | "anything") => Err(syntax_error(
            format!("invalid syntax, {name}() does not accept any argument"),
            paren_span.line,
            paren_span.column,
            expression,
        )),
        Expr::Call { name_span, .. } => Err(syntax_error(
            "invalid syntax, unknown function",
            name_span.line,
            name_span.column,
            expression,
        )),
        Expr::BinaryOp { op_span, lhs, .. } if matches!(**lhs, Expr::Ident { .. }) => {
            Err(syntax_error(
                "invalid syntax, unsupported operation",
                op_span.line,
                op_span.column,
                expression,
            ))
        }
        // The 1-based convention leaves whole-node diagnostics off by one.
        Expr::BinaryOp { lhs, .. } => {
            let span = lhs.span();
            Err(syntax_error(
                "invalid syntax",
                span.line,
                span.column + 1,
                expression,
            ))
        }
    }
}

fn rewrite_all(expression: &str, operands: &[Expr]) -> Result<Vec<Predicate>, CompileError> {
    operands
        .iter()
        .map(|operand| rewrite(expression, operand))
        .collect()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests exercise rewrite fallibility")]
mod tests {
    use super::*;
    use crate::compile::compile;

    #[test]
    fn identifiers_become_membership_tests() {
        assert_eq!(
            compile("foo").unwrap(),
            Predicate::Membership("foo".into())
        );
    }

    #[test]
    fn literals_become_membership_tests_on_their_text() {
        assert_eq!(
            compile("'foo bar'").unwrap(),
            Predicate::Membership("foo bar".into())
        );
        assert_eq!(compile("42").unwrap(), Predicate::Membership("42".into()));
    }

    #[test]
    fn boolean_structure_is_preserved() {
        assert_eq!(
            compile("foo and not bar or empty()").unwrap(),
            Predicate::Any(vec![
                Predicate::All(vec![
                    Predicate::Membership("foo".into()),
                    Predicate::Not(Box::new(Predicate::Membership("bar".into()))),
                ]),
                Predicate::Empty,
            ])
        );
    }

    #[test]
    fn pseudo_functions_map_to_their_variants() {
        assert_eq!(compile("empty()").unwrap(), Predicate::Empty);
        assert_eq!(compile("anything()").unwrap(), Predicate::Anything);
    }

    #[test]
    fn rejects_arguments_to_empty_at_the_argument_list() {
        let err = compile("empty(1)").unwrap_err();
        assert_eq!(
            err.message,
            "invalid syntax, empty() does not accept any argument"
        );
        assert_eq!((err.line, err.column), (1, 6));
    }

    #[test]
    fn rejects_arguments_to_anything_at_the_argument_list() {
        let err = compile("anything('x', 'y')").unwrap_err();
        assert_eq!(
            err.message,
            "invalid syntax, anything() does not accept any argument"
        );
        assert_eq!((err.line, err.column), (1, 9));
    }

    #[test]
    fn rejects_unknown_functions_at_the_call() {
        let err = compile("foo()").unwrap_err();
        assert_eq!(err.message, "invalid syntax, unknown function");
        assert_eq!((err.line, err.column), (1, 1));
    }

    #[test]
    fn rejects_operators_on_identifiers_at_the_operator() {
        let err = compile("foo + 1").unwrap_err();
        assert_eq!(err.message, "invalid syntax, unsupported operation");
        assert_eq!((err.line, err.column), (1, 5));
    }

    #[test]
    fn rejects_comparisons_like_other_operators() {
        let err = compile("foo <= bar").unwrap_err();
        assert_eq!(err.message, "invalid syntax, unsupported operation");
        assert_eq!((err.line, err.column), (1, 5));
    }

    #[test]
    fn other_binary_operands_fall_back_to_the_shifted_node_start() {
        let err = compile("1 + 2").unwrap_err();
        assert_eq!(err.message, "invalid syntax");
        assert_eq!((err.line, err.column), (1, 2));
    }

    #[test]
    fn rejects_nested_misuse_inside_valid_structure() {
        let err = compile("foo and bar()").unwrap_err();
        assert_eq!(err.message, "invalid syntax, unknown function");
        assert_eq!((err.line, err.column), (1, 9));
    }
}
