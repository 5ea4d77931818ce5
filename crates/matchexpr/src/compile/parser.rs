//! Recursive-descent parser for the generic boolean-expression grammar.

use crate::errors::{CompileError, syntax_error};

use super::ast::Expr;
use super::lexer::{Span, Token, TokenKind};

/// Parse a token stream into the generic syntax tree.
///
/// Shape errors (dangling operators, unbalanced parentheses, trailing
/// input) fail here with `invalid syntax` at the offending token; misuse
/// of well-formed constructs is left for the rewriter to diagnose.
pub(crate) fn parse(expression: &str, tokens: Vec<Token>) -> Result<Expr, CompileError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        expression,
    };
    let expr = parser.parse_or()?;
    match parser.peek_kind() {
        TokenKind::Eof => Ok(expr),
        _ => Err(parser.invalid_syntax_here()),
    }
}

struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    expression: &'a str,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> &TokenKind {
        self.peek().map_or(&TokenKind::Eof, |token| &token.kind)
    }

    fn here(&self) -> Span {
        self.peek().map_or(Span { line: 1, column: 1 }, |token| token.span)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn invalid_syntax_here(&self) -> CompileError {
        let span = self.here();
        syntax_error("invalid syntax", span.line, span.column, self.expression)
    }

    fn parse_or(&mut self) -> Result<Expr, CompileError> {
        let first = self.parse_and()?;
        let mut operands = vec![first];
        while matches!(self.peek_kind(), TokenKind::Or) {
            self.advance();
            operands.push(self.parse_and()?);
        }
        if operands.len() == 1 {
            operands.pop().ok_or_else(|| self.invalid_syntax_here())
        } else {
            Ok(Expr::Or { operands })
        }
    }

    fn parse_and(&mut self) -> Result<Expr, CompileError> {
        let first = self.parse_not()?;
        let mut operands = vec![first];
        while matches!(self.peek_kind(), TokenKind::And) {
            self.advance();
            operands.push(self.parse_not()?);
        }
        if operands.len() == 1 {
            operands.pop().ok_or_else(|| self.invalid_syntax_here())
        } else {
            Ok(Expr::And { operands })
        }
    }

    fn parse_not(&mut self) -> Result<Expr, CompileError> {
        if matches!(self.peek_kind(), TokenKind::Not) {
            let span = self.here();
            self.advance();
            let operand = Box::new(self.parse_not()?);
            return Ok(Expr::Not { operand, span });
        }
        self.parse_operand()
    }

    // Parses `primary (OP primary)*` left-associatively. Binary operators
    // never survive the rewrite, but parsing them here lets the rewriter
    // point its diagnostic at the operator instead of the whole input.
    fn parse_operand(&mut self) -> Result<Expr, CompileError> {
        let mut lhs = self.parse_primary()?;
        while let TokenKind::Op(op) = self.peek_kind() {
            let op = op.clone();
            let op_span = self.here();
            self.advance();
            let rhs = self.parse_primary()?;
            lhs = Expr::BinaryOp {
                op,
                op_span,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn parse_primary(&mut self) -> Result<Expr, CompileError> {
        let span = self.here();
        match self.peek_kind().clone() {
            TokenKind::Ident(name) => {
                self.advance();
                if matches!(self.peek_kind(), TokenKind::LParen) {
                    let paren_span = self.here();
                    self.advance();
                    let args = self.parse_args()?;
                    return Ok(Expr::Call {
                        name,
                        name_span: span,
                        paren_span,
                        args,
                    });
                }
                Ok(Expr::Ident { name, span })
            }
            TokenKind::Str(value) => {
                self.advance();
                Ok(Expr::StringLit { value, span })
            }
            TokenKind::Number(text) => {
                self.advance();
                Ok(Expr::NumberLit { text, span })
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_or()?;
                if !matches!(self.peek_kind(), TokenKind::RParen) {
                    return Err(self.invalid_syntax_here());
                }
                self.advance();
                Ok(expr)
            }
            _ => Err(self.invalid_syntax_here()),
        }
    }

    fn parse_args(&mut self) -> Result<Vec<Expr>, CompileError> {
        let mut args = Vec::new();
        if matches!(self.peek_kind(), TokenKind::RParen) {
            self.advance();
            return Ok(args);
        }
        loop {
            args.push(self.parse_or()?);
            match self.peek_kind() {
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::RParen => {
                    self.advance();
                    return Ok(args);
                }
                _ => return Err(self.invalid_syntax_here()),
            }
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests exercise parsing fallibility")]
mod tests {
    use super::*;
    use crate::compile::lexer::lex;

    fn parse_text(expression: &str) -> Result<Expr, CompileError> {
        parse(expression, lex(expression).unwrap())
    }

    #[test]
    fn collects_chained_and_into_one_node() {
        let Expr::And { operands } = parse_text("a and b and c").unwrap() else {
            panic!("expected conjunction");
        };
        assert_eq!(operands.len(), 3);
    }

    #[test]
    fn keeps_or_above_and_in_precedence() {
        let Expr::Or { operands } = parse_text("a or b and c").unwrap() else {
            panic!("expected disjunction at the root");
        };
        assert_eq!(operands.len(), 2);
        assert!(matches!(operands.last(), Some(Expr::And { .. })));
    }

    #[test]
    fn parses_nested_not() {
        let Expr::Not { operand, .. } = parse_text("not not foo").unwrap() else {
            panic!("expected negation");
        };
        assert!(matches!(*operand, Expr::Not { .. }));
    }

    #[test]
    fn parentheses_override_precedence() {
        let Expr::And { operands } = parse_text("(a or b) and c").unwrap() else {
            panic!("expected conjunction at the root");
        };
        assert!(matches!(operands.first(), Some(Expr::Or { .. })));
    }

    #[test]
    fn parses_zero_argument_call_with_paren_span() {
        let Expr::Call {
            name,
            paren_span,
            args,
            ..
        } = parse_text("empty()").unwrap()
        else {
            panic!("expected call");
        };
        assert_eq!(name, "empty");
        assert!(args.is_empty());
        assert_eq!((paren_span.line, paren_span.column), (1, 6));
    }

    #[test]
    fn parses_binary_operator_with_operator_span() {
        let Expr::BinaryOp { op, op_span, .. } = parse_text("foo + 1").unwrap() else {
            panic!("expected binary operator");
        };
        assert_eq!(op, "+");
        assert_eq!((op_span.line, op_span.column), (1, 5));
    }

    #[test]
    fn rejects_empty_input_at_column_one() {
        let err = parse_text("").unwrap_err();
        assert_eq!(err.message, "invalid syntax");
        assert_eq!((err.line, err.column), (1, 1));
    }

    #[test]
    fn rejects_dangling_operator_at_end_of_input() {
        let err = parse_text("foo and").unwrap_err();
        assert_eq!(err.message, "invalid syntax");
        assert_eq!((err.line, err.column), (1, 8));
    }

    #[test]
    fn rejects_unbalanced_parenthesis() {
        let err = parse_text("(foo or bar").unwrap_err();
        assert_eq!((err.line, err.column), (1, 12));
    }

    #[test]
    fn rejects_trailing_garbage() {
        let err = parse_text("foo bar").unwrap_err();
        assert_eq!((err.line, err.column), (1, 5));
    }
}
