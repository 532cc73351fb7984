use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InputUnavailable { .. } => "InputUnavailable",
            ErrorImpl::NonAsciiInput { .. } => "NonAsciiInput",
            ErrorImpl::UnrecognizedLexeme { .. } => "UnrecognizedLexeme",
            ErrorImpl::MaxLengthExceeded { .. } => "MaxLengthExceeded",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InputUnavailable { path, reason } => {
                ErrorTip::Suggestion(format!("Could not read `{}`: {}", path, reason))
            }
            ErrorImpl::NonAsciiInput { character } => ErrorTip::Suggestion(format!(
                "Character `{}` is outside the ASCII range",
                character.escape_default()
            )),
            ErrorImpl::UnrecognizedLexeme { .. } => ErrorTip::None,
            ErrorImpl::MaxLengthExceeded { max, .. } => ErrorTip::Suggestion(format!(
                "Tokens are limited to {} characters, is a literal left unterminated?",
                max
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("input unavailable: {path:?} ({reason})")]
    InputUnavailable { path: String, reason: String },
    #[error("non-ASCII character in input: {character:?}")]
    NonAsciiInput { character: char },
    #[error("unrecognized lexeme: {lexeme:?}")]
    UnrecognizedLexeme { lexeme: String },
    #[error("lexeme exceeds {max} characters: {lexeme:?}")]
    MaxLengthExceeded { lexeme: String, max: usize },
}
