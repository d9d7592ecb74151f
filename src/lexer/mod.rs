//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Recognition of keywords, symbols, operators, identifiers, numbers and strings
//! - Longest-match resolution inside each fixed token set
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod chars;
pub mod lexer;
pub mod matchers;
pub mod tokens;
