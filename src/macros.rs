//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance at a position
//! - `MK_DEFAULT_HANDLER!` - Creates a scanner handler for a fixed lexeme
//!
//! These macros reduce boilerplate in the pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's text
/// * `$position` - The `Position` of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), Position::new(1, 1));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr) => {{
        let position: $crate::Position = $position;
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: $lexeme,
            line: position.line,
            column: position.column,
        }
    }};
}

/// Creates a scanner handler for a pattern that always matches one fixed lexeme.
///
/// The handler pushes a token of the given kind at the cursor and advances
/// the cursor past the lexeme.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\{").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Brackets, "{"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut $crate::lexer::lexer::Lexer, _regex: &::regex::Regex| {
            let token = $crate::MK_TOKEN!($kind, String::from($value), lexer.position());
            lexer.push(token);
            lexer.advance_n($value.len());
        }
    };
}
