use std::{fs::File, io::Read, path::Path, rc::Rc};

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

lazy_static! {
    /// Runs up to and including the line terminator, or to the end of input.
    static ref LINE_COMMENT: Regex = Regex::new(r"//[^\n]*(?:\n|$)").unwrap();
    /// Stops at the first `*/`; block comments do not nest.
    static ref BLOCK_COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
}

/// Characters that separate lexemes and make a line blank.
pub fn is_whitespace(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0B'
}

/// Reads the whole file at `path` into memory.
///
/// The handle is closed before returning, whether the read succeeded or not.
pub fn load_source(path: &Path) -> Result<String, Error> {
    let display = path.to_string_lossy().to_string();
    let unavailable = |reason: std::io::Error| {
        Error::new(
            ErrorImpl::InputUnavailable {
                path: display.clone(),
                reason: reason.to_string(),
            },
            Position(0, Rc::new(display.clone())),
        )
    };

    let mut contents = String::new();
    {
        let mut file = File::open(path).map_err(unavailable)?;
        file.read_to_string(&mut contents).map_err(unavailable)?;
    }

    debug!("Loaded {} bytes from {}", contents.len(), display);
    Ok(contents)
}

/// Strips comments and blank lines from `text`.
///
/// Every kept line ends with `\n`. Input outside the ASCII range is rejected
/// rather than passed through.
pub fn preprocess(text: &str, file: Rc<String>) -> Result<String, Error> {
    if let Some((offset, character)) = text.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(Error::new(
            ErrorImpl::NonAsciiInput { character },
            Position(offset as u32, file),
        ));
    }

    // Line comments go first, so a `//` inside a block comment eats its closer.
    let without_lines = LINE_COMMENT.replace_all(text, "");
    let uncommented = BLOCK_COMMENT.replace_all(&without_lines, "");
    trace!(
        "Removed {} bytes of comments from {}",
        text.len() - uncommented.len(),
        file
    );

    let mut sanitized = String::with_capacity(uncommented.len());
    let mut dropped = 0;
    for line in uncommented.lines() {
        if line.chars().all(is_whitespace) {
            dropped += 1;
            continue;
        }

        sanitized.push_str(line);
        sanitized.push('\n');
    }

    debug!(
        "Preprocessed {}: {} bytes in, {} bytes out, {} blank lines dropped",
        file,
        text.len(),
        sanitized.len(),
        dropped
    );
    Ok(sanitized)
}
