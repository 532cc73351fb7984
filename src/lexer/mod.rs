//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that turns a preprocessed
//! source buffer into a stream of tokens, one per request. It handles:
//!
//! - Splitting the buffer into whitespace-separated lexemes
//! - Classifying each lexeme against a priority-ordered regex table
//! - Token position tracking for error reporting

pub mod lexer;
pub mod rules;
pub mod tokens;
