use crate::parser::ast::Type;

/// Position in source code (line and column, both 1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// The closed set of token kinds.
///
/// Every kind the scanner can classify is here, plus the compound operator
/// kinds (`Lte`, `Gte`, `Neq`, `AndAnd`, `OrOr`, `LeftShift`, `RightShift`)
/// that are reserved for the full operator grammar and never produced by the
/// current scanner. `name` covers all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Fn,
    Int,
    Float,
    String,
    Bool,
    Return,
    If,
    Else,
    For,
    While,
    Break,
    Continue,

    // Identifiers and literals
    Identifier,
    IntLit,
    FloatLit,
    StringLit,
    BoolLit,

    // Operators
    Assign,        // =
    EqualEqual,    // ==
    Plus,          // +
    Minus,         // -
    Star,          // *
    Slash,         // /
    Percent,       // %
    Less,          // <
    Greater,       // >
    Lte,           // <=
    Gte,           // >=
    Neq,           // !=
    AndAnd,        // &&
    OrOr,          // ||
    Bang,          // !
    BitAnd,        // &
    BitOr,         // |
    BitXor,        // ^
    BitNot,        // ~
    LeftShift,     // <<
    RightShift,    // >>
    Increment,     // ++
    PlusAssign,    // +=

    // Delimiters
    LeftParen,     // (
    RightParen,    // )
    LeftBrace,     // {
    RightBrace,    // }
    LeftBracket,   // [
    RightBracket,  // ]
    Comma,         // ,
    Semicolon,     // ;
    Colon,         // :
    Question,      // ?
    Dot,           // .

    // Comments (lexed as tokens; callers filter at the boundary)
    Comment,

    // Anomalies encoded as tokens rather than errors
    InvalidIdentifier,
    Unknown,

    // End of input
    Eof,
}

impl TokenKind {
    /// Stable, human-readable name for diagnostics. Exhaustive over the enum.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Fn => "T_FUNCTION",
            TokenKind::Int => "T_INT",
            TokenKind::Float => "T_FLOAT",
            TokenKind::String => "T_STRING",
            TokenKind::Bool => "T_BOOL",
            TokenKind::Return => "T_RETURN",
            TokenKind::If => "T_IF",
            TokenKind::Else => "T_ELSE",
            TokenKind::For => "T_FOR",
            TokenKind::While => "T_WHILE",
            TokenKind::Break => "T_BREAK",
            TokenKind::Continue => "T_CONTINUE",
            TokenKind::Identifier => "T_IDENTIFIER",
            TokenKind::IntLit => "T_INTLIT",
            TokenKind::FloatLit => "T_FLOATLIT",
            TokenKind::StringLit => "T_STRINGLIT",
            TokenKind::BoolLit => "T_BOOLLIT",
            TokenKind::Assign => "T_ASSIGNOP",
            TokenKind::EqualEqual => "T_EQUALSOP",
            TokenKind::Plus => "T_PLUS",
            TokenKind::Minus => "T_MINUS",
            TokenKind::Star => "T_MULT",
            TokenKind::Slash => "T_DIV",
            TokenKind::Percent => "T_MOD",
            TokenKind::Less => "T_LT",
            TokenKind::Greater => "T_GT",
            TokenKind::Lte => "T_LTE",
            TokenKind::Gte => "T_GTE",
            TokenKind::Neq => "T_NEQ",
            TokenKind::AndAnd => "T_AND",
            TokenKind::OrOr => "T_OR",
            TokenKind::Bang => "T_NOT",
            TokenKind::BitAnd => "T_BITAND",
            TokenKind::BitOr => "T_BITOR",
            TokenKind::BitXor => "T_BITXOR",
            TokenKind::BitNot => "T_BITNOT",
            TokenKind::LeftShift => "T_LEFTSHIFT",
            TokenKind::RightShift => "T_RIGHTSHIFT",
            TokenKind::Increment => "T_INCREMENT",
            TokenKind::PlusAssign => "T_PLUS_ASSIGN",
            TokenKind::LeftParen => "T_PARENL",
            TokenKind::RightParen => "T_PARENR",
            TokenKind::LeftBrace => "T_BRACEL",
            TokenKind::RightBrace => "T_BRACER",
            TokenKind::LeftBracket => "T_BRACKL",
            TokenKind::RightBracket => "T_BRACKR",
            TokenKind::Comma => "T_COMMA",
            TokenKind::Semicolon => "T_SEMICOLON",
            TokenKind::Colon => "T_COLON",
            TokenKind::Question => "T_QUESTION",
            TokenKind::Dot => "T_DOT",
            TokenKind::Comment => "T_COMMENT",
            TokenKind::InvalidIdentifier => "T_INVALID_IDENTIFIER",
            TokenKind::Unknown => "T_UNKNOWN",
            TokenKind::Eof => "T_EOF",
        }
    }

    /// The declared type a type keyword names, if this kind is one.
    pub fn as_type(&self) -> Option<Type> {
        match self {
            TokenKind::Int => Some(Type::Int),
            TokenKind::Float => Some(Type::Float),
            TokenKind::String => Some(Type::String),
            TokenKind::Bool => Some(Type::Bool),
            _ => None,
        }
    }
}

/// Token with its verbatim text and start position
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }
}
