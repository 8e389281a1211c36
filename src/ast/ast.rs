use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, FunctionCallExpr, IdentifierExpr, LiteralExpr, UnaryExpr,
    },
    statements::{
        ControlFlow, ExpressionStmt, FnDeclStmt, ForStmt, IfStmt, ReturnStmt, VarDeclStmt,
        WhileStmt,
    },
};

/// Root of the tree: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    /// Kind names of the top-level statements, in order.
    pub fn statement_kinds(&self) -> Vec<StmtType> {
        self.body.iter().map(Stmt::get_stmt_type).collect()
    }
}

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    VariableDeclaration,
    FunctionDeclaration,
    ExpressionStatement,
    ReturnStatement,
    IfStatement,
    WhileLoop,
    ForLoop,
    ControlFlowStatement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    FnDecl(FnDeclStmt),
    Expression(ExpressionStmt),
    Return(ReturnStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    ControlFlow(ControlFlow),
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::VarDecl(_) => StmtType::VariableDeclaration,
            Stmt::FnDecl(_) => StmtType::FunctionDeclaration,
            Stmt::Expression(_) => StmtType::ExpressionStatement,
            Stmt::Return(_) => StmtType::ReturnStatement,
            Stmt::If(_) => StmtType::IfStatement,
            Stmt::While(_) => StmtType::WhileLoop,
            Stmt::For(_) => StmtType::ForLoop,
            Stmt::ControlFlow(_) => StmtType::ControlFlowStatement,
        }
    }
}

/// Expression Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Literal,
    Identifier,
    Assignment,
    Binary,
    Unary,
    FunctionCall,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Identifier(IdentifierExpr),
    Assignment(AssignmentExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    FunctionCall(FunctionCallExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Literal(_) => ExprType::Literal,
            Expr::Identifier(_) => ExprType::Identifier,
            Expr::Assignment(_) => ExprType::Assignment,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Unary(_) => ExprType::Unary,
            Expr::FunctionCall(_) => ExprType::FunctionCall,
        }
    }
}
