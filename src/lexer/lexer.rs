use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{matchers::MatcherKind, tokens::Token};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\A\s+").expect("whitespace pattern is valid");
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: Position,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: Position::start(),
        }
    }

    pub fn advance_to(&mut self, next: Position) {
        self.pos = next;
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, value = %token.value, at = %token.start, "token");
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos.index..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos.index >= self.source.len()
    }

    /// Moves past any whitespace at the cursor without producing a token.
    pub fn skip_whitespace(&mut self) {
        if let Some(found) = WHITESPACE.find(self.remainder()) {
            self.pos = self.pos.advance(found.as_str());
        }
    }

    fn fail(&self, error: Error) -> Error {
        let error = error.with_context(self.tokens.last().cloned());
        debug!(%error, "lexing failed");
        error
    }

    /// Runs the matchers in priority order at the cursor and commits to the
    /// first that matches.
    pub fn step(&mut self) -> Result<(), Error> {
        for matcher in MatcherKind::PRIORITY {
            let matched = matcher
                .apply(self.source, &self.pos)
                .map_err(|error| self.fail(error))?;

            if let Some(matched) = matched {
                self.push(matched.token);
                self.advance_to(matched.next);
                return Ok(());
            }
        }

        let token = self
            .remainder()
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();

        Err(self.fail(Error::new(ErrorImpl::UnrecognisedToken { token }, self.pos)))
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    loop {
        lex.skip_whitespace();

        if lex.at_eof() {
            break;
        }

        lex.step()?;
    }

    debug!(count = lex.tokens.len(), "tokenized");
    Ok(lex.into_tokens())
}
