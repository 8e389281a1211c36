//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the Parser cursor and the `parse` entry point.
//! Statements are dispatched through a keyword lookup table and expressions
//! through a NUD (null denotation) table keyed by token kind, with infix
//! operators driven by the binding power table in `lookups`.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// Found-lexeme used in errors raised after the last token.
pub const END_OF_INPUT: &str = "end of input";

/// Parsing state for one `parse` call.
///
/// Holds the borrowed token slice, the cursor into it and the handler
/// lookup tables.
pub struct Parser<'a> {
    /// The tokens being parsed
    tokens: &'a [Token],
    /// Index of the current token
    pos: usize,
    /// Statement handlers keyed by leading keyword
    stmt_lookup: StmtLookup,
    /// Null denotation (prefix) expression handlers keyed by token kind
    nud_lookup: NUDLookup,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the token `n` places after the current one.
    pub fn peek(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + n)
    }

    /// Returns the current token, or an error naming what was expected if
    /// the tokens have run out.
    pub fn current_token_or(&self, expected: &str) -> Result<&'a Token, ParseError> {
        self.current_token()
            .ok_or_else(|| ParseError::new(expected, END_OF_INPUT, self.get_position()))
    }

    /// Whether the current token has the given lexeme.
    pub fn current_is(&self, lexeme: &str) -> bool {
        self.current_token().map_or(false, |token| token.is(lexeme))
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if its lexeme is `lexeme`.
    pub fn expect(&mut self, lexeme: &str) -> Result<&'a Token, ParseError> {
        let expected = format!("`{}`", lexeme);
        let token = self.current_token_or(&expected)?;

        if token.is(lexeme) {
            self.pos += 1;
            Ok(token)
        } else {
            Err(self.unexpected(&expected))
        }
    }

    /// Consumes the current token if it is of kind `kind`.
    pub fn expect_kind(&mut self, kind: TokenKind, expected: &str) -> Result<&'a Token, ParseError> {
        let token = self.current_token_or(expected)?;

        if token.kind == kind {
            self.pos += 1;
            Ok(token)
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Builds an error for the current token.
    pub fn unexpected(&self, expected: &str) -> ParseError {
        let found = self
            .current_token()
            .map_or(END_OF_INPUT, |token| token.lexeme.as_str());
        ParseError::new(expected, found, self.get_position())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Position of the current token, or of the last token once the input
    /// is exhausted.
    pub fn get_position(&self) -> Position {
        self.current_token()
            .or_else(|| self.tokens.last())
            .map_or(Position::new(1, 1), Token::position)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a null denotation (prefix) handler for a token kind.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a leading keyword.
    pub fn stmt(&mut self, keyword: &'static str, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }
}

/// Parses a token sequence into a `Program`.
///
/// Statements are parsed until the tokens run out. The first structural
/// violation aborts the parse.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    debug!(statements = body.len(), "parsed program");
    Ok(Program { body })
}
