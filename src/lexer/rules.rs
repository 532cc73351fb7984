use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_PATTERN;

use super::tokens::TokenKind;

lazy_static! {
    /// The language's classification table, shared read-only by every session.
    pub static ref DEFAULT_TABLE: ClassificationTable = ClassificationTable::new(vec![
        MK_PATTERN!(TokenKind::Keyword, "f|if|else|elif|type|operator"),
        MK_PATTERN!(TokenKind::Identifier, "[A-Za-z][A-Za-z0-9]*"),
        // Unreachable behind Identifier, kept so the order stays as declared.
        MK_PATTERN!(TokenKind::Character, "[A-Za-z]"),
        MK_PATTERN!(TokenKind::String, "\"[A-Za-z]+\"|'[A-Za-z]+'"),
        MK_PATTERN!(TokenKind::Integer, "[0-9]+"),
        MK_PATTERN!(TokenKind::Decimal, "[0-9]+\\.[0-9]+"),
        MK_PATTERN!(TokenKind::Operator, "==|<=|>=|<>|<|>|\\|\\||&&|!"),
    ]);
}

#[derive(Clone, Debug)]
pub struct RegexPattern {
    pub kind: TokenKind,
    pub regex: Regex,
}

/// An ordered list of rules. Earlier rules win over later ones.
#[derive(Clone, Debug)]
pub struct ClassificationTable {
    patterns: Vec<RegexPattern>,
}

impl ClassificationTable {
    pub fn new(patterns: Vec<RegexPattern>) -> Self {
        ClassificationTable { patterns }
    }

    /// Kinds in the order they are tried.
    #[cfg(test)]
    pub(crate) fn order(&self) -> Vec<TokenKind> {
        self.patterns.iter().map(|pattern| pattern.kind).collect()
    }

    pub fn classify(&self, lexeme: &str) -> Option<TokenKind> {
        self.patterns
            .iter()
            .find(|pattern| pattern.regex.is_match(lexeme))
            .map(|pattern| pattern.kind)
    }

    /// Every kind whose rule accepts `lexeme`, in table order.
    #[cfg(test)]
    pub(crate) fn matching_kinds(&self, lexeme: &str) -> Vec<TokenKind> {
        self.patterns
            .iter()
            .filter(|pattern| pattern.regex.is_match(lexeme))
            .map(|pattern| pattern.kind)
            .collect()
    }
}
