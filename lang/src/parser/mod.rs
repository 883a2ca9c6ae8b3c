pub mod ast;
#[cfg(test)]
mod tests;

use crate::lexer::{Position, Token, TokenKind};
use ast::{Declaration, Expr, Program, Type};
use std::fmt;

/// The closed set of parse failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnexpectedEOF,
    FailedToFindToken,
    ExpectedTypeToken,
    ExpectedIdentifier,
    UnexpectedToken,
    ExpectedFloatLit,
    ExpectedIntLit,
    ExpectedStringLit,
    ExpectedBoolLit,
    ExpectedExpr,
}

impl ParseErrorKind {
    /// Stable, human-readable name for diagnostics. Exhaustive over the enum.
    pub fn name(&self) -> &'static str {
        match self {
            ParseErrorKind::UnexpectedEOF => "UnexpectedEOF",
            ParseErrorKind::FailedToFindToken => "FailedToFindToken",
            ParseErrorKind::ExpectedTypeToken => "ExpectedTypeToken",
            ParseErrorKind::ExpectedIdentifier => "ExpectedIdentifier",
            ParseErrorKind::UnexpectedToken => "UnexpectedToken",
            ParseErrorKind::ExpectedFloatLit => "ExpectedFloatLit",
            ParseErrorKind::ExpectedIntLit => "ExpectedIntLit",
            ParseErrorKind::ExpectedStringLit => "ExpectedStringLit",
            ParseErrorKind::ExpectedBoolLit => "ExpectedBoolLit",
            ParseErrorKind::ExpectedExpr => "ExpectedExpr",
        }
    }
}

/// Parse failure: the first nonconforming token aborts the whole parse.
///
/// Carries the offending token by value, position included, so callers can
/// pinpoint the source location without the token sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub token: Token,
    pub message: String,
}

impl ParseError {
    fn new(kind: ParseErrorKind, token: &Token, message: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.clone(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}:{}: {} (found {} {:?})",
            self.kind.name(),
            self.token.position.line,
            self.token.position.column,
            self.message,
            self.token.kind.name(),
            self.token.text,
        )
    }
}

impl std::error::Error for ParseError {}

/// Recursive-descent parser over a borrowed token sequence.
///
/// State is a single cursor index; every rule commits to its branch once the
/// leading token is classified, with no backtracking.
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    eof: Token,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            eof: Token::new(TokenKind::Eof, "", Position::new(1, 1)),
        }
    }

    /// program := statement* end-of-input
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut declarations = Vec::new();

        while !self.is_at_end() {
            declarations.push(self.parse_statement()?);
        }

        Ok(declarations)
    }

    /// statement := varDecl
    fn parse_statement(&mut self) -> Result<Declaration, ParseError> {
        match self.current_token().kind.as_type() {
            Some(ty) => self.parse_var_decl(ty),
            None => Err(ParseError::new(
                ParseErrorKind::ExpectedTypeToken,
                self.current_token(),
                "Expected a type at start of statement",
            )),
        }
    }

    /// varDecl := typeKeyword identifier ('=' expression)? ';'
    ///
    /// The leading type keyword has already been classified by
    /// `parse_statement`.
    fn parse_var_decl(&mut self, ty: Type) -> Result<Declaration, ParseError> {
        self.advance(); // type keyword

        if self.current_token().kind != TokenKind::Identifier {
            return Err(ParseError::new(
                ParseErrorKind::ExpectedIdentifier,
                self.current_token(),
                "Expected variable name after type",
            ));
        }
        let name = self.current_token().text.clone();
        self.advance();

        let init = if self.matches(TokenKind::Assign) {
            Some(self.parse_expression(ty)?)
        } else {
            None
        };

        self.expect(
            TokenKind::Semicolon,
            ParseErrorKind::FailedToFindToken,
            "Expected ';' after variable declaration",
        )?;

        Ok(Declaration { ty, name, init })
    }

    /// expression := literalMatchingType | identifier
    ///
    /// Literals must match the declared type. Identifier initializers are
    /// accepted for any declared type: there is no symbol table, so
    /// identifier references are never type-checked.
    fn parse_expression(&mut self, expected: Type) -> Result<Expr, ParseError> {
        let token = self.current_token();

        let expr = match token.kind {
            TokenKind::IntLit => {
                if expected != Type::Int {
                    return Err(ParseError::new(
                        ParseErrorKind::ExpectedIntLit,
                        token,
                        "Expected integer literal",
                    ));
                }
                Expr::Literal {
                    value: token.text.clone(),
                    ty: Type::Int,
                }
            }
            TokenKind::FloatLit => {
                if expected != Type::Float {
                    return Err(ParseError::new(
                        ParseErrorKind::ExpectedFloatLit,
                        token,
                        "Expected float literal",
                    ));
                }
                Expr::Literal {
                    value: token.text.clone(),
                    ty: Type::Float,
                }
            }
            TokenKind::StringLit => {
                if expected != Type::String {
                    return Err(ParseError::new(
                        ParseErrorKind::ExpectedStringLit,
                        token,
                        "Expected string literal",
                    ));
                }
                Expr::Literal {
                    value: token.text.clone(),
                    ty: Type::String,
                }
            }
            TokenKind::BoolLit => {
                if expected != Type::Bool {
                    return Err(ParseError::new(
                        ParseErrorKind::ExpectedBoolLit,
                        token,
                        "Expected boolean literal",
                    ));
                }
                Expr::Literal {
                    value: token.text.clone(),
                    ty: Type::Bool,
                }
            }
            TokenKind::Identifier => Expr::Identifier(token.text.clone()),
            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedExpr,
                    token,
                    "Expected an expression after '='",
                ))
            }
        };

        self.advance();
        Ok(expr)
    }

    /// Current token, or a synthetic end-of-input token if the cursor ran
    /// past a truncated sequence.
    fn current_token(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.eof)
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        if self.current_token().kind == kind {
            self.advance();
            return true;
        }
        false
    }

    fn expect(
        &mut self,
        kind: TokenKind,
        error: ParseErrorKind,
        message: &str,
    ) -> Result<(), ParseError> {
        if self.current_token().kind != kind {
            return Err(ParseError::new(error, self.current_token(), message));
        }
        self.advance();
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len() || self.tokens[self.current].kind == TokenKind::Eof
    }
}

/// Parse a token sequence into a program, failing at the first
/// nonconforming token.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}
