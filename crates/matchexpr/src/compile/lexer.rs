//! Expression lexer converting source text into positioned tokens.

use crate::errors::{CompileError, syntax_error};

/// 1-based source position of a token or AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Ident(String),
    Number(String),
    Str(String),
    And,
    Or,
    Not,
    LParen,
    RParen,
    Comma,
    /// Binary operator recognized by the grammar but rejected by the
    /// rewriter. Kept textual so diagnostics can echo it.
    Op(String),
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

struct Cursor {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Cursor {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.column,
        }
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Tokenize an expression, failing on characters outside the grammar.
pub(crate) fn lex(expression: &str) -> Result<Vec<Token>, CompileError> {
    let mut cursor = Cursor {
        chars: expression.chars().collect(),
        pos: 0,
        line: 1,
        column: 1,
    };
    let mut tokens = Vec::new();

    while let Some(ch) = cursor.peek() {
        let span = cursor.span();
        match ch {
            ' ' | '\t' | '\r' | '\n' => {
                cursor.bump();
            }
            '(' => {
                cursor.bump();
                tokens.push(Token {
                    kind: TokenKind::LParen,
                    span,
                });
            }
            ')' => {
                cursor.bump();
                tokens.push(Token {
                    kind: TokenKind::RParen,
                    span,
                });
            }
            ',' => {
                cursor.bump();
                tokens.push(Token {
                    kind: TokenKind::Comma,
                    span,
                });
            }
            '\'' | '"' => {
                let text = lex_string(&mut cursor, expression, span)?;
                tokens.push(Token {
                    kind: TokenKind::Str(text),
                    span,
                });
            }
            _ if ch.is_ascii_digit() => {
                let text = lex_number(&mut cursor);
                tokens.push(Token {
                    kind: TokenKind::Number(text),
                    span,
                });
            }
            _ if is_ident_start(ch) => {
                let word = lex_word(&mut cursor);
                let kind = match word.as_str() {
                    "and" => TokenKind::And,
                    "or" => TokenKind::Or,
                    "not" => TokenKind::Not,
                    _ => TokenKind::Ident(word),
                };
                tokens.push(Token { kind, span });
            }
            _ => {
                let op = lex_operator(&mut cursor)
                    .ok_or_else(|| syntax_error("invalid syntax", span.line, span.column, expression))?;
                tokens.push(Token {
                    kind: TokenKind::Op(op),
                    span,
                });
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: cursor.span(),
    });
    Ok(tokens)
}

fn lex_word(cursor: &mut Cursor) -> String {
    let mut word = String::new();
    while let Some(ch) = cursor.peek() {
        if !is_ident_continue(ch) {
            break;
        }
        word.push(ch);
        cursor.bump();
    }
    word
}

fn lex_number(cursor: &mut Cursor) -> String {
    let mut text = String::new();
    while let Some(ch) = cursor.peek() {
        if !ch.is_ascii_digit() {
            break;
        }
        text.push(ch);
        cursor.bump();
    }
    if cursor.peek() == Some('.') && cursor.peek_next().is_some_and(|ch| ch.is_ascii_digit()) {
        text.push('.');
        cursor.bump();
        while let Some(ch) = cursor.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            text.push(ch);
            cursor.bump();
        }
    }
    text
}

fn lex_string(
    cursor: &mut Cursor,
    expression: &str,
    open: Span,
) -> Result<String, CompileError> {
    let Some(quote) = cursor.bump() else {
        return Err(syntax_error("invalid syntax", open.line, open.column, expression));
    };
    let mut text = String::new();
    loop {
        match cursor.bump() {
            Some(ch) if ch == quote => return Ok(text),
            Some('\\') => {
                // Backslash escapes the next character verbatim.
                match cursor.bump() {
                    Some(escaped) => text.push(escaped),
                    None => {
                        return Err(syntax_error(
                            "invalid syntax",
                            open.line,
                            open.column,
                            expression,
                        ));
                    }
                }
            }
            Some(ch) => text.push(ch),
            None => {
                return Err(syntax_error(
                    "invalid syntax",
                    open.line,
                    open.column,
                    expression,
                ));
            }
        }
    }
}

fn lex_operator(cursor: &mut Cursor) -> Option<String> {
    let first = cursor.peek()?;
    let second = cursor.peek_next();
    let two: Option<&str> = match (first, second) {
        ('*', Some('*')) => Some("**"),
        ('/', Some('/')) => Some("//"),
        ('=', Some('=')) => Some("=="),
        ('!', Some('=')) => Some("!="),
        ('<', Some('=')) => Some("<="),
        ('>', Some('=')) => Some(">="),
        _ => None,
    };
    if let Some(op) = two {
        cursor.bump();
        cursor.bump();
        return Some(op.to_string());
    }
    if matches!(first, '+' | '-' | '*' | '/' | '%' | '<' | '>') {
        cursor.bump();
        return Some(first.to_string());
    }
    None
}
