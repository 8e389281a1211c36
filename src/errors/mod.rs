//! Error types for every front end stage.
//!
//! - `ScanError` for characters the scanner cannot classify
//! - `ParseError` with the expected and found lexemes and their position
//! - `SemanticError` for scope and type violations, with suggestions
//! - `Error` wrapping all three for the whole pipeline

pub mod errors;

#[cfg(test)]
mod tests;
