//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module turns a token sequence into a `Program`. Statements use
//! recursive descent; expressions use a Pratt parser:
//!
//! - Statement parsing (declarations, control flow, expression statements)
//! - Expression parsing (binary ops, increments, calls, literals)
//! - Type keyword parsing for declarations and parameters
//!
//! The parser uses NUD (null denotation) handlers for expression heads and
//! the binding power table for infix operators and precedence climbing.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
