//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored classification rule

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a classification rule whose pattern must match a whole lexeme.
///
/// The pattern is wrapped in `^(?:...)$`, so alternations inside it are
/// anchored as a group.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(TokenKind::Integer, "[0-9]+")
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $pattern:literal) => {
        RegexPattern {
            kind: $kind,
            regex: Regex::new(concat!("^(?:", $pattern, ")$")).unwrap(),
        }
    };
}
