use std::fmt::Display;

use crate::Position;

pub static KEYWORDS: &[&str] = &[
    "function", "return", "if", "for", "const", "let", "continue", "break",
];

pub static SYMBOLS: &[&str] = &["[", "]", ",", "{", "}", "(", ")", ":", ";"];

pub static OPERATORS: &[&str] = &[
    "=", "==", "!=", "===", "!==", ">=", ">", "<", "<=", "-", "+", "!",
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Symbol,
    Operator,
    Identifier,
    Number,
    String,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Matched text; for strings, the decoded contents without quotes.
    pub value: String,
    pub start: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\nvalue: {},\nstart: {}}}",
            self.kind, self.value, self.start
        )
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[TokenKind::String, TokenKind::Identifier, TokenKind::Number]) {
            println!("{} {} ({:?})", self.start, self.kind, self.value);
        } else {
            println!("{} {} ({})", self.start, self.kind, self.value);
        }
    }
}
