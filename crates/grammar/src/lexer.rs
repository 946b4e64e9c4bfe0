// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Lexer
//!
//! Turns query text into a [`TokenStream`]. Keywords are matched
//! case-insensitively while token text keeps the original spelling.
//! The lexer never fails: characters it cannot classify become
//! [`TokenKind::Unknown`] tokens and the stream always ends with `Eof`.

use crate::token::{Channel, Token, TokenKind, TokenStream};

/// Tokenize the full text of a query
///
/// # Examples
///
/// ```
/// use soql_grammar::{tokenize, TokenKind};
///
/// let tokens = tokenize("SELECT Id FROM Account");
/// assert_eq!(tokens[0].kind, TokenKind::Select);
/// assert_eq!(tokens[2].text, "Id");
/// assert_eq!(tokens[tokens.len() - 1].kind, TokenKind::Eof);
/// ```
pub fn tokenize(text: &str) -> TokenStream {
    Lexer::new(text).run()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            line: 1,
            column: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> TokenStream {
        while let Some(c) = self.peek(0) {
            let start = self.pos;
            let kind = self.scan(c);
            self.push(kind, start);
        }
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            text: String::new(),
            index: self.tokens.len(),
            line: self.line,
            column: self.column,
            channel: Channel::Default,
        });
        TokenStream::new(self.tokens)
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek(0).is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Consume one token starting at `c` and return its kind
    fn scan(&mut self, c: char) -> TokenKind {
        match c {
            c if c.is_whitespace() => {
                self.bump_while(char::is_whitespace);
                TokenKind::Whitespace
            }
            '-' if self.peek(1) == Some('-') => {
                self.bump_while(|c| c != '\n' && c != '\r');
                TokenKind::Comment
            }
            '/' if self.peek(1) == Some('*') => {
                self.pos += 2;
                while let Some(c) = self.peek(0) {
                    if c == '*' && self.peek(1) == Some('/') {
                        self.pos += 2;
                        break;
                    }
                    self.pos += 1;
                }
                TokenKind::Comment
            }
            '\'' => {
                self.scan_string();
                TokenKind::StringLiteral
            }
            c if c.is_ascii_digit() => self.scan_number_or_date(),
            c if is_identifier_start(c) => {
                let start = self.pos;
                self.bump_while(is_identifier_part);
                let word: String = self.chars[start..self.pos].iter().collect();
                TokenKind::keyword(&word).unwrap_or(TokenKind::Identifier)
            }
            ':' => {
                self.pos += 1;
                if self.peek(0).is_some_and(is_identifier_start) {
                    self.bump_while(is_identifier_part);
                    TokenKind::Bind
                } else {
                    TokenKind::Colon
                }
            }
            '!' if self.peek(1) == Some('=') => {
                self.pos += 2;
                TokenKind::NotEq
            }
            _ => {
                self.pos += 1;
                match c {
                    '=' => TokenKind::Eq,
                    '<' => TokenKind::Lt,
                    '>' => TokenKind::Gt,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    ',' => TokenKind::Comma,
                    '.' => TokenKind::Dot,
                    '+' => TokenKind::Plus,
                    '-' => TokenKind::Minus,
                    _ => TokenKind::Unknown,
                }
            }
        }
    }

    /// Quoted string with backslash escapes; unterminated strings stop at end of line
    fn scan_string(&mut self) {
        self.pos += 1;
        while let Some(c) = self.peek(0) {
            match c {
                '\\' => self.pos += 2usize.min(self.chars.len() - self.pos),
                '\'' => {
                    self.pos += 1;
                    return;
                }
                '\n' | '\r' => return,
                _ => self.pos += 1,
            }
        }
    }

    fn scan_number_or_date(&mut self) -> TokenKind {
        if self.matches_digits_pattern("dddd-dd-dd") {
            self.pos += 10;
            if self.peek(0) == Some('T') && self.matches_digits_pattern_at(1, "dd:dd:dd") {
                self.pos += 9;
                if self.peek(0) == Some('.') && self.peek(1).is_some_and(|c| c.is_ascii_digit()) {
                    self.pos += 1;
                    self.bump_while(|c| c.is_ascii_digit());
                }
                match self.peek(0) {
                    Some('Z') => self.pos += 1,
                    Some('+') | Some('-') if self.matches_digits_pattern_at(1, "dd:dd") => {
                        self.pos += 6
                    }
                    _ => {}
                }
                return TokenKind::DateTimeLiteral;
            }
            return TokenKind::DateLiteral;
        }

        self.bump_while(|c| c.is_ascii_digit());
        if self.peek(0) == Some('.') && self.peek(1).is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
            self.bump_while(|c| c.is_ascii_digit());
            TokenKind::DecimalLiteral
        } else {
            TokenKind::IntegerLiteral
        }
    }

    fn matches_digits_pattern(&self, pattern: &str) -> bool {
        self.matches_digits_pattern_at(0, pattern)
    }

    /// `d` matches an ASCII digit, any other pattern char matches itself
    fn matches_digits_pattern_at(&self, offset: usize, pattern: &str) -> bool {
        pattern.chars().enumerate().all(|(i, p)| {
            self.peek(offset + i).is_some_and(|c| match p {
                'd' => c.is_ascii_digit(),
                other => c == other,
            })
        })
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        let text: String = self.chars[start..self.pos].iter().collect();
        let channel = if kind.is_hidden() {
            Channel::Hidden
        } else {
            Channel::Default
        };
        let (line, column) = (self.line, self.column);
        self.advance_position(start);
        self.tokens.push(Token {
            kind,
            text,
            index: self.tokens.len(),
            line,
            column,
            channel,
        });
    }

    fn advance_position(&mut self, start: usize) {
        let mut i = start;
        while i < self.pos {
            match self.chars[i] {
                '\r' => {
                    if i + 1 < self.pos && self.chars[i + 1] == '\n' {
                        i += 1;
                    }
                    self.line += 1;
                    self.column = 0;
                }
                '\n' => {
                    self.line += 1;
                    self.column = 0;
                }
                _ => self.column += 1,
            }
            i += 1;
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
