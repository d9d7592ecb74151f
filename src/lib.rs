#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use lexer::lexer::tokenize;

/// A location in the source text.
///
/// `index` is a byte offset, `line` and `column` are 0-based. The column
/// counts characters and resets at every newline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub index: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position::default()
    }

    /// Returns the position reached after consuming `consumed` from here.
    pub fn advance(&self, consumed: &str) -> Position {
        let mut next = *self;
        next.index += consumed.len();

        for c in consumed.chars() {
            if c == '\n' {
                next.line += 1;
                next.column = 0;
            } else {
                next.column += 1;
            }
        }

        next
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Finds the line holding byte `index`, returning its 1-based number and text.
pub fn get_line_at_position(source: &str, index: usize) -> Option<(usize, String)> {
    if index > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&index) {
            return Some((line_number, line.to_string()));
        }

        start = end;
        line_number += 1;
    }

    // Index sits at the very end of the source.
    match source.split_inclusive('\n').last() {
        Some(last) if !last.ends_with('\n') => Some((line_number - 1, last.to_string())),
        _ => Some((line_number, String::new())),
    }
}

pub fn format_error(error: &Error, source: &str, file_name: &str) -> String {
    /*
        Error: message
        -> main.js
           |
        20 | let a = #;
           | --------^
    */

    let position = error.get_position();
    let (line, line_text) = get_line_at_position(source, position.index)
        .unwrap_or((position.line + 1, String::new()));

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file_name));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = position.column.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    out
}

pub fn display_error(error: &Error, source: &str, file_name: &str) {
    println!("{}", format_error(error, source, file_name));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
