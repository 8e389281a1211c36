//! Type parsing.
//!
//! Types are single type-keyword tokens (`int`, `string`, `boolean`, `float`,
//! `char`, `void`, `null`).

use crate::{ast::types::DataType, errors::errors::ParseError, lexer::tokens::TokenKind};

use super::parser::Parser;

/// Consumes a type keyword. `expected` names the slot being parsed, e.g.
/// "return type", and is reported if the current token is not a type.
pub fn parse_type(parser: &mut Parser, expected: &str) -> Result<DataType, ParseError> {
    let token = parser.current_token_or(expected)?;

    match token.lexeme.parse::<DataType>() {
        Ok(data_type) if token.kind == TokenKind::Type => {
            parser.advance();
            Ok(data_type)
        }
        _ => Err(parser.unexpected(expected)),
    }
}
