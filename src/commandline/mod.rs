use clap::{ArgAction, Parser, Subcommand};
use vultus::lexer::lexer::{LexerConfig, DEFAULT_MAX_TOKEN_LENGTH};

#[derive(Debug, Parser)]
#[clap(about = "Lexical front end for the Vultus language")]
pub struct Options {
    #[clap(subcommand)]
    pub operation: Operation,
    /// Increase log output (repeat for more)
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Longest lexeme accepted before lexing fails
    #[clap(long, default_value_t = DEFAULT_MAX_TOKEN_LENGTH, global = true)]
    pub max_token_length: usize,
}

#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Print every token of a source file
    Tokens { file: String },
    /// Print a source file with comments and blank lines removed
    Preprocess { file: String },
}

impl Options {
    pub fn lexer_config(&self) -> LexerConfig {
        LexerConfig {
            max_token_length: self.max_token_length,
        }
    }
}
