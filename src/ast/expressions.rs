use super::{ast::Expr, types::DataType};

// LITERALS

/// A literal value. The lexeme is kept as scanned (strings keep their quotes).
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: String,
    pub data_type: DataType,
}

/// A reference to a variable by name.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub name: String,
}

// COMPLEX

/// `target = value`, or a compound form such as `target += value`.
///
/// The target is an expression so that the analyzer, not the parser, decides
/// which targets are assignable.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub target: Box<Expr>,
    pub operator: String,
    pub value: Box<Expr>,
}

impl AssignmentExpr {
    pub fn is_compound(&self) -> bool {
        self.operator != "="
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    Prefix,
    Postfix,
}

/// `++x`, `x++`, `--x` or `x--`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: String,
    pub fixity: Fixity,
    pub operand: Box<Expr>,
}

impl UnaryExpr {
    pub fn is_increment(&self) -> bool {
        self.operator == "++" || self.operator == "--"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
}
