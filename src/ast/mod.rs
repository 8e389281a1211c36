/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: the `Program` root and the `Stmt`/`Expr` sum types
/// - expressions: one struct per expression variant
/// - statements: one struct per statement variant
/// - types: primitive data types and operator categories
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
