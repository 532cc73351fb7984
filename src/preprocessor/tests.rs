//! Unit tests for comment and blank line removal.

use std::rc::Rc;

use super::preprocessor::preprocess;
use crate::errors::errors::ErrorImpl;

fn run(source: &str) -> String {
    preprocess(source, Rc::new("test.vt".to_string())).unwrap()
}

#[test]
fn test_line_comment_removed_with_terminator() {
    assert_eq!(run("// comment\nif\n"), "if\n");
    assert_eq!(run("x // trailing\ny\n"), "x y\n");
}

#[test]
fn test_line_comment_at_end_of_input() {
    assert_eq!(run("if\n// no newline"), "if\n");
}

#[test]
fn test_block_comment_spanning_lines() {
    assert_eq!(run("/* multi\nline */type\n"), "type\n");
}

#[test]
fn test_block_comments_are_not_nested() {
    // The first closer ends the comment, leaving the outer closer behind.
    assert_eq!(run("/* a /* b */ c */\n"), " c */\n");
}

#[test]
fn test_block_comment_is_shortest_span() {
    assert_eq!(run("x /* one */ y /* two */ z\n"), "x  y  z\n");
}

#[test]
fn test_line_comments_stripped_before_block_comments() {
    // The `//` swallows the block closer, leaving the opener unterminated.
    assert_eq!(run("/* a // b */ if\nelse\n"), "/* a else\n");
    assert_eq!(run("// has /* inside\nelse\n"), "else\n");
    assert_eq!(run("/* x */ // y\nif\n"), " if\n");
}

#[test]
fn test_unterminated_block_comment_is_kept() {
    assert_eq!(run("/* open\nif\n"), "/* open\nif\n");
}

#[test]
fn test_blank_lines_removed() {
    assert_eq!(run("if\n\n   \n\t\nelse\n\n"), "if\nelse\n");
    assert_eq!(run("if\r\n  \r\nelse"), "if\nelse\n");
}

#[test]
fn test_vertical_tab_only_line_is_blank() {
    assert_eq!(run("if\n\x0B\n \x0B\t\nelse\n"), "if\nelse\n");
}

#[test]
fn test_comment_only_source_is_empty() {
    assert_eq!(run("// one\n/* two\n*/\n\n"), "");
    assert_eq!(run(""), "");
}

#[test]
fn test_preprocessing_is_idempotent() {
    let sources = [
        "if x == 10\n",
        "// header\n\nf   /* inline */ x\n\n  \nelif y <= 2 // tail\n",
        "/* a\n\nb */\n\ntype t\n   \n'abc' 3.14\n",
        "no newline at end",
    ];

    for source in sources {
        let once = run(source);
        assert_eq!(run(&once), once, "source: {:?}", source);
    }
}

#[test]
fn test_non_ascii_rejected() {
    let error = preprocess("if\nx = é\n", Rc::new("test.vt".to_string())).unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::NonAsciiInput { character: 'é' });
    assert_eq!(error.get_position().0, 7);
}
