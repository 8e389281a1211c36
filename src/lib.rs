#![allow(clippy::module_inception)]

use std::fmt::Display;

use tracing::debug;

use crate::{
    analyzer::analyzer::analyze, ast::ast::Program, errors::errors::Error,
    lexer::lexer::tokenize, parser::parser::parse,
};

pub mod analyzer;
pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// 1-based line and column of a character in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Runs the whole front end over `source`: scan, parse, then analyze.
///
/// Returns the parsed program once it has been validated, or the first error
/// reported by whichever stage failed.
pub fn analyze_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "scanned source");

    let program = parse(&tokens)?;

    analyze(&program)?;
    debug!("analysis succeeded");

    Ok(program)
}
