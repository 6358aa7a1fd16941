//! Token cursor with a single token of pushback
//!
//! Sits between the [`Scanner`] and the parser: whitespace tokens are read
//! through, and the most recently scanned token can be handed back once with
//! [`TokenCursor::unscan`] so the parser can probe one token ahead.

use super::lexer::{Scanner, Token, TokenKind};

pub struct TokenCursor {
    scanner: Scanner,
    /// Last token returned by `scan`
    last: Option<Token>,
    pushed_back: bool,
}

impl TokenCursor {
    pub fn new(scanner: Scanner) -> Self {
        Self {
            scanner,
            last: None,
            pushed_back: false,
        }
    }

    /// Next non-whitespace token, or the pushed-back one if there is one
    pub fn scan(&mut self) -> Token {
        if self.pushed_back {
            self.pushed_back = false;
            if let Some(token) = &self.last {
                return token.clone();
            }
        }

        let token = loop {
            let token = self.scanner.scan();
            if !token.is(TokenKind::Whitespace) {
                break token;
            }
        };

        self.last = Some(token.clone());
        token
    }

    /// Push the last scanned token back; the next `scan` returns it again.
    pub fn unscan(&mut self) {
        debug_assert!(
            self.last.is_some() && !self.pushed_back,
            "unscan requires a scanned token that has not been pushed back"
        );
        self.pushed_back = self.last.is_some();
    }

    /// Look at the next token without consuming it
    pub fn peek(&mut self) -> Token {
        let token = self.scan();
        self.unscan();
        token
    }
}
