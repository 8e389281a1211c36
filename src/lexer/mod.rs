//! Lexical analysis module.
//!
//! Converts source text into the flat token list the parser consumes:
//!
//! - Regex pattern table, first match wins, anchored at the cursor
//! - Keywords, type keywords and boolean literals via a reserved-word lookup
//! - `else if` fused into one keyword token
//! - 1-based line and column on every token

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
