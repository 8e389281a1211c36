use super::{
    ast::{Expr, Stmt},
    types::DataType,
};

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub data_type: DataType,
    pub identifier: String,
    pub initializer: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub data_type: DataType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub return_type: DataType,
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

/// `return value;`, or `return;` in a `void` function.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseIfBranch {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub else_if_branches: Vec<ElseIfBranch>,
    pub else_body: Option<Vec<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

/// `for (initializer condition; increment) { body }`.
///
/// The initializer is any statement so that a non-declaration initializer
/// is reported by the analyzer rather than the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub initializer: Box<Stmt>,
    pub condition: Expr,
    pub increment: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Break,
    Continue,
}
