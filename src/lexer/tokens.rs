use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("function", TokenKind::Keyword);
        map.insert("if", TokenKind::Keyword);
        map.insert("else", TokenKind::Keyword);
        map.insert("while", TokenKind::Keyword);
        map.insert("for", TokenKind::Keyword);
        map.insert("return", TokenKind::Keyword);
        map.insert("break", TokenKind::Keyword);
        map.insert("continue", TokenKind::Keyword);

        map.insert("int", TokenKind::Type);
        map.insert("string", TokenKind::Type);
        map.insert("boolean", TokenKind::Type);
        map.insert("float", TokenKind::Type);
        map.insert("char", TokenKind::Type);
        map.insert("void", TokenKind::Type);
        map.insert("null", TokenKind::Type);

        map.insert("true", TokenKind::Boolean);
        map.insert("false", TokenKind::Boolean);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Type,
    Identifier,
    Operator,
    Parenthesis,
    Punctuation,
    Brackets,

    // Literals
    String,
    Int,
    Float,
    Boolean,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}` at {}:{}", self.kind, self.lexeme, self.line, self.column)
    }
}

impl Token {
    pub fn new(lexeme: impl Into<String>, kind: TokenKind, line: u32, column: u32) -> Self {
        Token {
            lexeme: lexeme.into(),
            kind,
            line,
            column,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Compares the lexeme, ignoring the kind.
    pub fn is(&self, lexeme: &str) -> bool {
        self.lexeme == lexeme
    }
}
