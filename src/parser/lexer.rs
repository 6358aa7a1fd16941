//! Scanner (tokenizer) for source text
//!
//! Converts raw source text into positioned [`Token`]s, one per call to
//! [`Scanner::scan`]. Whitespace runs are returned as [`TokenKind::Whitespace`]
//! tokens rather than skipped; the parser reads through them. Characters the
//! language does not know become [`TokenKind::Illegal`] tokens, so scanning
//! itself never fails and rejection is left to the parser.

use super::ast::Position;
use log::trace;
use std::fmt;

/// All token kinds produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    Illegal,
    Eof,
    Whitespace,

    // Literals
    Ident,
    Number,
    StringLiteral,

    // Punctuation and operators
    Asterisk,  // *
    Comma,     // ,
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Assign,    // =
    Semicolon, // ;
    Plus,      // +
    Minus,     // -
    EqEq,      // ==
    Lt,        // <
    Le,        // <=
    Gt,        // >
    Ge,        // >=

    // Keywords
    Void,
    Int,
    String,
    Boolean,
    True,
    False,
}

impl TokenKind {
    /// Keyword lookup; matching is exact and case-sensitive
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        match ident {
            "void" => Some(TokenKind::Void),
            "int" => Some(TokenKind::Int),
            "string" => Some(TokenKind::String),
            "boolean" => Some(TokenKind::Boolean),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Illegal => write!(f, "illegal character"),
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Whitespace => write!(f, "whitespace"),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::Asterisk => write!(f, "'*'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::EqEq => write!(f, "'=='"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Le => write!(f, "'<='"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::Ge => write!(f, "'>='"),
            TokenKind::Void => write!(f, "'void'"),
            TokenKind::Int => write!(f, "'int'"),
            TokenKind::String => write!(f, "'string'"),
            TokenKind::Boolean => write!(f, "'boolean'"),
            TokenKind::True => write!(f, "'true'"),
            TokenKind::False => write!(f, "'false'"),
        }
    }
}

/// A token with its literal text and the position of its first character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token. String literals exclude their quotes.
    pub literal: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            literal: literal.into(),
            position,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Ident => write!(f, "identifier '{}'", self.literal),
            TokenKind::Number => write!(f, "number {}", self.literal),
            TokenKind::StringLiteral => write!(f, "string literal \"{}\"", self.literal),
            TokenKind::Whitespace => write!(f, "whitespace"),
            _ => write!(f, "'{}'", self.literal),
        }
    }
}

/// Scanner over an in-memory source string
pub struct Scanner {
    input: Vec<char>,
    /// Position of the next character to read
    cursor: Position,
    /// Cursor before the most recent read; cleared by `unread`
    last: Option<Position>,
}

impl Scanner {
    /// Create a new scanner for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            cursor: Position::start(),
            last: None,
        }
    }

    /// Return the next token.
    ///
    /// Once the input is exhausted every call returns an `Eof` token at the
    /// end position.
    pub fn scan(&mut self) -> Token {
        let pos = self.cursor;
        let token = match self.read() {
            None => Token::new(TokenKind::Eof, "", pos),
            Some(ch) if is_whitespace(ch) => {
                let text = self.scan_run(ch, is_whitespace);
                Token::new(TokenKind::Whitespace, text, pos)
            }
            Some(ch) if ch.is_ascii_alphabetic() => {
                let text = self.scan_run(ch, |c| c.is_ascii_alphanumeric() || c == '_');
                let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Ident);
                Token::new(kind, text, pos)
            }
            Some(ch) if ch.is_ascii_digit() => {
                let text = self.scan_run(ch, |c| c.is_ascii_digit());
                Token::new(TokenKind::Number, text, pos)
            }
            Some('"') => Token::new(TokenKind::StringLiteral, self.scan_string(), pos),
            Some('=') => self.scan_pair(pos, TokenKind::Assign, "=", TokenKind::EqEq, "=="),
            Some('<') => self.scan_pair(pos, TokenKind::Lt, "<", TokenKind::Le, "<="),
            Some('>') => self.scan_pair(pos, TokenKind::Gt, ">", TokenKind::Ge, ">="),
            Some(ch) => {
                let kind = match ch {
                    '*' => TokenKind::Asterisk,
                    ',' => TokenKind::Comma,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    ';' => TokenKind::Semicolon,
                    '+' => TokenKind::Plus,
                    '-' => TokenKind::Minus,
                    _ => TokenKind::Illegal,
                };
                Token::new(kind, ch.to_string(), pos)
            }
        };

        trace!("scanned {:?} {:?} at {}", token.kind, token.literal, token.position);
        token
    }

    /// Scan the whole input, including whitespace tokens and the final `Eof`
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    /// Accumulate `first` and every following character accepted by `accept`
    fn scan_run(&mut self, first: char, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        text.push(first);

        while let Some(ch) = self.read() {
            if accept(ch) {
                text.push(ch);
            } else {
                self.unread();
                break;
            }
        }

        text
    }

    /// String literal body after the opening quote. No escape processing; an
    /// unterminated literal runs to the end of input.
    fn scan_string(&mut self) -> String {
        let mut text = String::new();
        while let Some(ch) = self.read() {
            if ch == '"' {
                break;
            }
            text.push(ch);
        }
        text
    }

    /// One-character operator, or its two-character form when followed by `=`
    fn scan_pair(
        &mut self,
        pos: Position,
        single: TokenKind,
        single_text: &str,
        double: TokenKind,
        double_text: &str,
    ) -> Token {
        match self.read() {
            Some('=') => Token::new(double, double_text, pos),
            Some(_) => {
                self.unread();
                Token::new(single, single_text, pos)
            }
            None => Token::new(single, single_text, pos),
        }
    }

    /// Consume the next character
    fn read(&mut self) -> Option<char> {
        let Some(&ch) = self.input.get(self.cursor.offset) else {
            self.last = None;
            return None;
        };

        self.last = Some(self.cursor);
        self.cursor.offset += 1;
        if ch == '\n' {
            self.cursor.line += 1;
            self.cursor.column = 1;
        } else {
            self.cursor.column += 1;
        }

        Some(ch)
    }

    /// Step back over the character returned by the last `read`.
    ///
    /// Only one character can be pushed back; calling this twice without a
    /// read in between is a bug in the scanner.
    fn unread(&mut self) {
        debug_assert!(
            self.last.is_some(),
            "unread called without a preceding read"
        );
        if let Some(previous) = self.last.take() {
            self.cursor = previous;
        }
    }
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}
