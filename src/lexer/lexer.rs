use std::{path::Path, rc::Rc};

use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    preprocessor::preprocessor::{is_whitespace, load_source, preprocess},
    Position, Span, MK_TOKEN,
};

use super::{
    rules::{ClassificationTable, DEFAULT_TABLE},
    tokens::Token,
};

pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Longest lexeme accepted before the session fails.
    pub max_token_length: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }
}

#[derive(Debug, Clone)]
enum State {
    Scanning,
    Exhausted,
    Failed(Error),
}

/// One lexing session over one sanitized source buffer.
///
/// Tokens are pulled one at a time with [`Lexer::next_token`], or through the
/// [`Iterator`] impl. The cursor only ever moves forward.
#[derive(Debug, Clone)]
pub struct Lexer {
    table: &'static ClassificationTable,
    config: LexerConfig,
    source: String,
    pos: usize,
    file: Rc<String>,
    state: State,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Result<Lexer, Error> {
        Lexer::with_config(source, file, LexerConfig::default())
    }

    pub fn with_config(
        source: String,
        file: Option<String>,
        config: LexerConfig,
    ) -> Result<Lexer, Error> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let source = preprocess(&source, Rc::clone(&file_name))?;

        Ok(Lexer {
            table: &DEFAULT_TABLE,
            config,
            source,
            pos: 0,
            file: file_name,
            state: State::Scanning,
        })
    }

    pub fn from_file(path: &Path, config: LexerConfig) -> Result<Lexer, Error> {
        let source = load_source(path)?;
        Lexer::with_config(source, Some(path.to_string_lossy().to_string()), config)
    }

    /// The sanitized buffer the session reads from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn at(&self) -> char {
        self.source.as_bytes()[self.pos] as char
    }

    fn peek(&self) -> Option<char> {
        self.source.as_bytes().get(self.pos).map(|byte| *byte as char)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn position_at(&self, pos: usize) -> Position {
        Position(pos as u32, Rc::clone(&self.file))
    }

    /// Produces the next token, `Ok(None)` once the buffer is exhausted.
    ///
    /// Errors are fatal: after the first one every call returns it again.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        match &self.state {
            State::Scanning => {}
            State::Exhausted => return Ok(None),
            State::Failed(error) => return Err(error.clone()),
        }

        match self.scan() {
            Ok(Some(token)) => Ok(Some(token)),
            Ok(None) => {
                debug!("End of {} reached", self.file);
                self.state = State::Exhausted;
                Ok(None)
            }
            Err(error) => {
                self.state = State::Failed(error.clone());
                Err(error)
            }
        }
    }

    fn scan(&mut self) -> Result<Option<Token>, Error> {
        while !self.at_eof() && is_whitespace(self.at()) {
            self.advance();
        }

        if self.at_eof() {
            return Ok(None);
        }

        let start = self.pos;
        let mut lexeme = String::new();

        while let Some(next) = self.peek() {
            if is_whitespace(next) {
                break;
            }

            lexeme.push(next);
            self.advance();

            if lexeme.len() > self.config.max_token_length {
                return Err(Error::new(
                    ErrorImpl::MaxLengthExceeded {
                        lexeme,
                        max: self.config.max_token_length,
                    },
                    self.position_at(start),
                ));
            }
        }

        let Some(kind) = self.table.classify(&lexeme) else {
            return Err(Error::new(
                ErrorImpl::UnrecognizedLexeme { lexeme },
                self.position_at(start),
            ));
        };

        trace!("{} ({}) at {}", kind, lexeme, start);

        Ok(Some(MK_TOKEN!(
            kind,
            lexeme,
            Span {
                start: self.position_at(start),
                end: self.position_at(self.pos),
            }
        )))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    /// Yields tokens until end of input, or a single error and then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if let State::Failed(_) = self.state {
            return None;
        }

        self.next_token().transpose()
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(source, file)?.collect()
}
