use std::fmt;

/// Declared-type tag for declarations and literal expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Int,
    Float,
    String,
    Bool,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Int => "int",
            Type::Float => "float",
            Type::String => "string",
            Type::Bool => "bool",
        };
        write!(f, "{}", name)
    }
}

/// Abstract Syntax Tree node types for mini-lang expressions.
///
/// The expression grammar is a single literal or identifier; there are no
/// other forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal { value: String, ty: Type },
    Identifier(String),
}

/// A `type name [= expr];` statement, the sole statement form
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub ty: Type,
    pub name: String,
    pub init: Option<Expr>,
}

/// Declarations in source order
pub type Program = Vec<Declaration>;
