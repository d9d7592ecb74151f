//! Token matchers.
//!
//! Every matcher has the shape `(source, position) -> MatchResult` and never
//! touches the lexer's cursor. `Ok(None)` means the matcher does not apply at
//! this position and the driver should try the next one; `Err` is reserved for
//! input that can never lex, such as a string literal that runs off the end.

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    chars::{is_digit, is_identifier_continue, is_identifier_start},
    tokens::{Token, TokenKind, KEYWORDS, OPERATORS, SYMBOLS},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub token: Token,
    pub next: Position,
}

pub type MatchResult = Result<Option<Match>, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherKind {
    Keyword,
    Symbol,
    Operator,
    Identifier,
    Number,
    String,
}

impl MatcherKind {
    /// Order the driver tries matchers in. The first success wins.
    pub const PRIORITY: [MatcherKind; 6] = [
        MatcherKind::Keyword,
        MatcherKind::Symbol,
        MatcherKind::Operator,
        MatcherKind::Identifier,
        MatcherKind::Number,
        MatcherKind::String,
    ];

    pub fn apply(&self, source: &str, position: &Position) -> MatchResult {
        match self {
            MatcherKind::Keyword => match_keyword(source, position),
            MatcherKind::Symbol => match_symbol(source, position),
            MatcherKind::Operator => match_operator(source, position),
            MatcherKind::Identifier => match_identifier(source, position),
            MatcherKind::Number => match_number(source, position),
            MatcherKind::String => match_string(source, position),
        }
    }
}

/// Finds the longest candidate that `source` contains at `position`.
///
/// Ties go to the candidate declared first.
pub fn longest_literal(
    source: &str,
    position: &Position,
    candidates: &[&'static str],
) -> Option<&'static str> {
    let rest = source.get(position.index..)?;
    let mut longest: Option<&'static str> = None;

    for &candidate in candidates {
        if !rest.starts_with(candidate) {
            continue;
        }

        if longest.map_or(true, |current| candidate.len() > current.len()) {
            longest = Some(candidate);
        }
    }

    longest
}

fn literal_match(text: &str, kind: TokenKind, position: &Position) -> Match {
    Match {
        token: MK_TOKEN!(kind, text.to_string(), *position),
        next: position.advance(text),
    }
}

pub fn match_keyword(source: &str, position: &Position) -> MatchResult {
    let Some(keyword) = longest_literal(source, position, KEYWORDS) else {
        return Ok(None);
    };

    // `forever` is an identifier, not `for` followed by `ever`.
    let after = source[position.index + keyword.len()..].chars().next();
    if after.is_some_and(is_identifier_continue) {
        return Ok(None);
    }

    Ok(Some(literal_match(keyword, TokenKind::Keyword, position)))
}

pub fn match_symbol(source: &str, position: &Position) -> MatchResult {
    Ok(longest_literal(source, position, SYMBOLS)
        .map(|symbol| literal_match(symbol, TokenKind::Symbol, position)))
}

pub fn match_operator(source: &str, position: &Position) -> MatchResult {
    Ok(longest_literal(source, position, OPERATORS)
        .map(|operator| literal_match(operator, TokenKind::Operator, position)))
}

/// Consumes the longest run that opens with `start` and continues with `continue_`.
fn match_run(
    source: &str,
    position: &Position,
    kind: TokenKind,
    start: fn(char) -> bool,
    continue_: fn(char) -> bool,
) -> MatchResult {
    let Some(rest) = source.get(position.index..) else {
        return Ok(None);
    };

    match rest.chars().next() {
        Some(c) if start(c) => {}
        _ => return Ok(None),
    }

    let end = rest.find(|c: char| !continue_(c)).unwrap_or(rest.len());
    Ok(Some(literal_match(&rest[..end], kind, position)))
}

pub fn match_identifier(source: &str, position: &Position) -> MatchResult {
    match_run(
        source,
        position,
        TokenKind::Identifier,
        is_identifier_start,
        is_identifier_continue,
    )
}

pub fn match_number(source: &str, position: &Position) -> MatchResult {
    match_run(source, position, TokenKind::Number, is_digit, is_digit)
}

fn unescape(escaped: char) -> Option<char> {
    match escaped {
        '\'' => Some('\''),
        '\\' => Some('\\'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Matches a single-quoted string literal, decoding its escapes.
///
/// Fails with `UnterminatedString` at the opening quote when the source ends
/// before the closing quote.
pub fn match_string(source: &str, position: &Position) -> MatchResult {
    let Some(rest) = source.get(position.index..) else {
        return Ok(None);
    };

    let mut chars = rest.char_indices();
    if !matches!(chars.next(), Some((_, '\''))) {
        return Ok(None);
    }

    let mut value = String::new();

    while let Some((i, c)) = chars.next() {
        match c {
            '\'' => {
                let consumed = &rest[..i + c.len_utf8()];
                return Ok(Some(Match {
                    token: MK_TOKEN!(TokenKind::String, value, *position),
                    next: position.advance(consumed),
                }));
            }
            '\\' => match chars.next() {
                Some((_, escaped)) => match unescape(escaped) {
                    Some(decoded) => value.push(decoded),
                    None => {
                        // Unknown escape, keep it as written
                        value.push(c);
                        value.push(escaped);
                    }
                },
                None => break,
            },
            _ => value.push(c),
        }
    }

    Err(Error::new(ErrorImpl::UnterminatedString, *position))
}
