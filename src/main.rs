use std::{path::Path, rc::Rc, time::Instant};

use anyhow::{bail, Result};
use clap::Parser;
use log::info;
use vultus::{
    errors::errors::Error,
    format_error,
    lexer::lexer::{Lexer, LexerConfig},
    preprocessor::preprocessor::{load_source, preprocess},
};

use crate::commandline::{Operation, Options};

mod commandline;

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module("vultus")
        .verbosity(options.verbose as usize + 1)
        .init()?;

    let config = options.lexer_config();
    match &options.operation {
        Operation::Tokens { file } => print_tokens(file, config),
        Operation::Preprocess { file } => print_preprocessed(file),
    }
}

fn print_tokens(file: &str, config: LexerConfig) -> Result<()> {
    let start = Instant::now();
    let raw = load(file)?;

    let mut lexer = match Lexer::with_config(raw.clone(), Some(file.to_string()), config) {
        Ok(lexer) => lexer,
        Err(error) => return report(&error, &raw, file),
    };

    let mut count = 0;
    loop {
        match lexer.next_token() {
            Ok(Some(token)) => {
                println!("{}", token);
                count += 1;
            }
            Ok(None) => break,
            Err(error) => return report(&error, lexer.source(), file),
        }
    }

    info!(
        "Tokenized {} tokens from {} in {:?}",
        count,
        lexer.file(),
        start.elapsed()
    );
    Ok(())
}

fn print_preprocessed(file: &str) -> Result<()> {
    let raw = load(file)?;

    match preprocess(&raw, Rc::new(file.to_string())) {
        Ok(sanitized) => {
            print!("{}", sanitized);
            Ok(())
        }
        Err(error) => report(&error, &raw, file),
    }
}

fn load(file: &str) -> Result<String> {
    match load_source(Path::new(file)) {
        Ok(raw) => Ok(raw),
        Err(error) => report(&error, "", file),
    }
}

fn report<T>(error: &Error, source: &str, file: &str) -> Result<T> {
    eprint!("{}", format_error(error, source));
    bail!("lexing {} failed", file)
}
