use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{errors::errors::ScanError, Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            // Patterns are literals below; a bad one is a bug in this table.
            regex: Regex::new(pattern).expect("invalid scanner pattern"),
            handler,
        }
    }
}

lazy_static! {
    // Every pattern is anchored at the cursor. Order matters: earlier
    // patterns win, so longer operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(r"^\s+", skip_handler),
        RegexPattern::new(r"^//[^\n]*", skip_handler),
        RegexPattern::new(r#"^"(\\.|[^"\\])*""#, string_handler),
        RegexPattern::new(r"^[0-9]+\.[0-9]+", number_handler),
        RegexPattern::new(r"^[0-9]+", number_handler),
        RegexPattern::new(r"^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new(r"^(==|!=|<=|>=|\+=|-=|\*=|/=|&&|\|\||\+\+|--|[-+*/%^<>=!])", operator_handler),
        RegexPattern::new(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::Parenthesis, "(")),
        RegexPattern::new(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::Parenthesis, ")")),
        RegexPattern::new(r"^\{", MK_DEFAULT_HANDLER!(TokenKind::Brackets, "{")),
        RegexPattern::new(r"^\}", MK_DEFAULT_HANDLER!(TokenKind::Brackets, "}")),
        RegexPattern::new(r"^\[", MK_DEFAULT_HANDLER!(TokenKind::Brackets, "[")),
        RegexPattern::new(r"^\]", MK_DEFAULT_HANDLER!(TokenKind::Brackets, "]")),
        RegexPattern::new(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Punctuation, ";")),
        RegexPattern::new(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Punctuation, ",")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves the cursor `n` bytes forward, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let consumed = &self.source[self.pos..self.pos + n];
        for ch in consumed.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(lexeme = %token.lexeme, kind = %token.kind, "token");
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    // The lexeme keeps its quotes.
    let matched = lexer.matched(regex);
    lexer.push(MK_TOKEN!(TokenKind::String, matched.clone(), lexer.position()));
    lexer.advance_n(matched.len());
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    let kind = if matched.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Int
    };

    lexer.push(MK_TOKEN!(kind, matched.clone(), lexer.position()));
    lexer.advance_n(matched.len());
}

fn operator_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    lexer.push(MK_TOKEN!(TokenKind::Operator, matched.clone(), lexer.position()));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let value = lexer.matched(regex);
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    // `else` directly followed by `if` becomes a single `else if` keyword.
    let fuses_else = value == "if"
        && lexer
            .tokens
            .last()
            .map_or(false, |last| last.kind == TokenKind::Keyword && last.is("else"));

    if fuses_else {
        if let Some(last) = lexer.tokens.last_mut() {
            last.lexeme = String::from("else if");
        }
    } else {
        lexer.push(MK_TOKEN!(kind, value.clone(), lexer.position()));
    }

    lexer.advance_n(value.len());
}

/// Splits `source` into tokens. Whitespace and `//` comments are dropped and
/// no end-of-input sentinel is appended.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ScanError> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                let character = lex.remainder().chars().next().unwrap_or_default();
                return Err(ScanError {
                    character,
                    line: lex.line,
                    column: lex.column,
                });
            }
        }
    }

    Ok(lex.tokens)
}
