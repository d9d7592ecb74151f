use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

/// A lexing error: what went wrong, where, and the last token produced
/// before it (if any).
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    context: Option<Token>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            context: None,
        }
    }

    pub fn with_context(mut self, context: Option<Token>) -> Self {
        self.context = context;
        self
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_context(&self) -> Option<&Token> {
        self.context.as_ref()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match (&self.internal_error, &self.context) {
            (ErrorImpl::UnrecognisedToken { token }, Some(previous)) => ErrorTip::Suggestion(
                format!("Unrecognised token: `{}` after `{}`", token, previous.value),
            ),
            (ErrorImpl::UnrecognisedToken { .. }, None) => ErrorTip::None,
            (ErrorImpl::UnterminatedString, _) => ErrorTip::Suggestion(String::from(
                "String literal is never closed, did you miss a `'`?",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
}
