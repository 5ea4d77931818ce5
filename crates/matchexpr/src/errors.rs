//! Error type shared by the compilation modules.

use thiserror::Error;

/// Diagnostic raised when an expression violates the restricted grammar.
///
/// Compilation is the only fallible phase; a successfully compiled predicate
/// never fails at evaluation time. Line and column are 1-based and point at
/// the most specific sub-span available (an argument list rather than the
/// whole call, an operator rather than the whole binary expression).
///
/// # Examples
/// ```
/// use matchexpr::Matcher;
/// let err = Matcher::new(Some("foo()")).expect_err("call is rejected");
/// assert_eq!(err.message, "invalid syntax, unknown function");
/// assert_eq!((err.line, err.column), (1, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (line {line}, column {column})")]
pub struct CompileError {
    /// Human-readable description, e.g. `invalid syntax, unknown function`.
    pub message: String,
    /// 1-based line of the offending span.
    pub line: u32,
    /// 1-based column of the offending span.
    pub column: u32,
    /// The (possibly normalized) expression text the error refers to.
    pub expression: String,
}

impl CompileError {
    /// Render a caret-pointer snippet for terminal display.
    ///
    /// The snippet shows the offending source line, a caret under the
    /// reported column and the diagnostic message:
    ///
    /// ```text
    /// empty(1)
    ///      ^
    /// invalid syntax, empty() does not accept any argument
    /// ```
    #[must_use]
    pub fn caret_diagnostic(&self) -> String {
        let line_index = usize::try_from(self.line.saturating_sub(1)).unwrap_or(0);
        let source_line = self.expression.lines().nth(line_index).unwrap_or("");
        let pad = usize::try_from(self.column.saturating_sub(1)).unwrap_or(0);
        format!("{source_line}\n{}^\n{}", " ".repeat(pad), self.message)
    }
}

pub(crate) fn syntax_error(
    message: impl Into<String>,
    line: u32,
    column: u32,
    expression: &str,
) -> CompileError {
    CompileError {
        message: message.into(),
        line,
        column,
        expression: expression.to_string(),
    }
}
