//! Source preprocessing for the lexer.
//!
//! Loads a source file in full and removes everything that can never become
//! a token:
//!
//! - Line comments (`// ...`)
//! - Block comments (`/* ... */`, not nested)
//! - Empty and whitespace-only lines

pub mod preprocessor;

#[cfg(test)]
mod tests;
