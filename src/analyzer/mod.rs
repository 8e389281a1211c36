//! Semantic analysis module.
//!
//! Validates a parsed program without annotating it, in two passes:
//!
//! - Pass 1 walks statements in source order, declaring variables and
//!   functions in a tree of lexical scopes and type-checking every expression
//!   whose type is already known
//! - Expressions that depend on a function call are queued with the scope
//!   they appeared in and the rule their type has to satisfy
//! - Pass 2 drains the queue once every signature is declared, so functions
//!   may be called before their declaration
//!
//! `break` and `continue` are validated against a stack of loop frames.

pub mod analyzer;
pub mod check;
pub mod config;
pub mod context;
pub mod pending;
pub mod resolve;
pub mod scope;
