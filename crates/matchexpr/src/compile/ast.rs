//! Generic boolean-expression syntax tree produced by the parser.
//!
//! The grammar deliberately parses more than the restricted language
//! accepts: binary operators and arbitrary calls survive to this stage so
//! the rewriter can reject them with precise, node-specific diagnostics.

use super::lexer::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Expr {
    Ident {
        name: String,
        span: Span,
    },
    StringLit {
        value: String,
        span: Span,
    },
    NumberLit {
        text: String,
        span: Span,
    },
    Call {
        name: String,
        name_span: Span,
        /// Opening parenthesis of the argument list.
        paren_span: Span,
        args: Vec<Expr>,
    },
    Not {
        operand: Box<Expr>,
        span: Span,
    },
    /// N-ary conjunction; `a and b and c` collects into one node with
    /// three children, mirroring how boolean operators associate.
    And {
        operands: Vec<Expr>,
    },
    /// N-ary disjunction, same shape as [`Expr::And`].
    Or {
        operands: Vec<Expr>,
    },
    BinaryOp {
        op: String,
        op_span: Span,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Start position of the node, used for whole-node diagnostics.
    pub(crate) fn span(&self) -> Span {
        match self {
            Self::Ident { span, .. }
            | Self::StringLit { span, .. }
            | Self::NumberLit { span, .. }
            | Self::Not { span, .. } => *span,
            Self::Call { name_span, .. } => *name_span,
            Self::And { operands } | Self::Or { operands } => operands
                .first()
                .map_or(Span { line: 1, column: 1 }, Expr::span),
            Self::BinaryOp { lhs, .. } => lhs.span(),
        }
    }
}
