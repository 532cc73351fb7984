#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod preprocessor;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding byte `position` of `content`.
///
/// Returns the 1-based line number, the line itself and the offset of
/// `position` within it.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

/// Renders `error` against the sanitized `source` it was raised on.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: UnrecognizedLexeme
        -> main.vt
           |
        20 | if x @@@ y
           | -----^
    */

    let position = error.get_position();
    let mut output = if let ErrorTip::None = error.get_tip() {
        format!("Error: {} ({})\n", error.get_error_name(), error.kind())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };
    output.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};
    use crate::Position;

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nif x\n  elif y\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 36).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);

        assert!(super::get_line_at_position(content, 500).is_none());
    }

    #[test]
    fn test_format_error_points_at_lexeme() {
        let source = "if\n  x @@@ y\n";
        let error = Error::new(
            ErrorImpl::UnrecognizedLexeme {
                lexeme: "@@@".to_string(),
            },
            Position(7, Rc::new("main.vt".to_string())),
        );

        let rendered = super::format_error(&error, source);
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnrecognizedLexeme (unrecognized lexeme: \"@@@\")");
        assert_eq!(lines[1], "-> main.vt");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | x @@@ y");
        assert_eq!(lines[4], "  | --^");
    }

    #[test]
    fn test_format_error_without_source_line() {
        let error = Error::new(
            ErrorImpl::InputUnavailable {
                path: "missing.vt".to_string(),
                reason: "not found".to_string(),
            },
            Position(0, Rc::new("missing.vt".to_string())),
        );

        let rendered = super::format_error(&error, "");
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.starts_with("Error: InputUnavailable"));
    }
}
