//! CLI output formatting for the token listing, the AST tree, and the JSON
//! output mode.

use mini_lang::lexer::Token;
use mini_lang::parser::ast::{Declaration, Expr};
use mini_lang::parser::ParseError;
use serde::Serialize;
use std::fmt::Write;

/// Output mode for CLI execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable output (default)
    Text,
    /// Single JSON object after execution completes
    Json,
}

/// Offending token detail for JSON error output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonToken {
    pub kind: &'static str,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl JsonToken {
    fn from_token(token: &Token) -> Self {
        Self {
            kind: token.kind.name(),
            text: token.text.clone(),
            line: token.position.line,
            column: token.position.column,
        }
    }
}

/// Initializer expression for JSON program output.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum JsonExpr {
    Literal {
        #[serde(rename = "type")]
        ty: String,
        value: String,
    },
    Identifier {
        name: String,
    },
}

/// Declaration for JSON program output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDeclaration {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init: Option<JsonExpr>,
}

/// JSON output for a successfully parsed program.
#[derive(Debug, Clone, Serialize)]
pub struct JsonProgramOutput {
    #[serde(rename = "type")]
    pub output_type: &'static str,
    pub declarations: Vec<JsonDeclaration>,
}

/// JSON output for a token listing.
#[derive(Debug, Clone, Serialize)]
pub struct JsonTokensOutput {
    #[serde(rename = "type")]
    pub output_type: &'static str,
    pub tokens: Vec<JsonToken>,
}

/// JSON output for parse errors.
#[derive(Debug, Clone, Serialize)]
pub struct JsonErrorOutput {
    #[serde(rename = "type")]
    pub output_type: &'static str,
    pub kind: &'static str,
    pub message: String,
    pub token: JsonToken,
}

/// Format a parsed program as JSON.
pub fn format_program_json(program: &[Declaration]) -> String {
    let declarations = program
        .iter()
        .map(|decl| JsonDeclaration {
            ty: decl.ty.to_string(),
            name: decl.name.clone(),
            init: decl.init.as_ref().map(|init| match init {
                Expr::Literal { value, ty } => JsonExpr::Literal {
                    ty: ty.to_string(),
                    value: value.clone(),
                },
                Expr::Identifier(name) => JsonExpr::Identifier { name: name.clone() },
            }),
        })
        .collect();

    let output = JsonProgramOutput {
        output_type: "program",
        declarations,
    };
    serde_json::to_string(&output).unwrap()
}

/// Format a token listing as JSON.
pub fn format_tokens_json(tokens: &[Token]) -> String {
    let output = JsonTokensOutput {
        output_type: "tokens",
        tokens: tokens.iter().map(JsonToken::from_token).collect(),
    };
    serde_json::to_string(&output).unwrap()
}

/// Format a parse error as JSON.
pub fn format_error_json(error: &ParseError) -> String {
    let output = JsonErrorOutput {
        output_type: "error",
        kind: error.kind.name(),
        message: error.message.clone(),
        token: JsonToken::from_token(&error.token),
    };
    serde_json::to_string(&output).unwrap()
}

/// Format the token listing for text mode, one token per line.
pub fn format_tokens_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(
            out,
            "{}\t{:?}\tline {}, col {}",
            token.kind.name(),
            token.text,
            token.position.line,
            token.position.column
        );
    }
    out
}

/// Format the declaration list as an indented tree for text mode.
pub fn format_program_text(program: &[Declaration]) -> String {
    let mut out = String::new();
    for decl in program {
        let _ = writeln!(out, "VarDecl({} {})", decl.ty, decl.name);
        if let Some(init) = &decl.init {
            let _ = writeln!(out, "  Initializer:");
            match init {
                Expr::Literal { value, ty } => {
                    let _ = writeln!(out, "    Literal({}: {})", ty, value);
                }
                Expr::Identifier(name) => {
                    let _ = writeln!(out, "    Identifier({})", name);
                }
            }
        }
    }
    out
}
