// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Tokens
//!
//! Token taxonomy and the indexable token stream produced by the lexer.
//!
//! Token indices are 0-based and stable for the lifetime of one parse.
//! Lines are 1-based and columns are 0-based character offsets.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Lexical token type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // Keywords
    Select,
    From,
    Where,
    And,
    Or,
    Not,
    In,
    Includes,
    Excludes,
    Like,
    Group,
    By,
    Order,
    Asc,
    Desc,
    Nulls,
    First,
    Last,
    Limit,
    Offset,
    Having,
    Count,
    Using,
    Scope,
    With,
    For,
    View,
    Reference,
    Update,
    Typeof,
    When,
    Then,
    Else,
    End,
    Rollup,
    Cube,
    True,
    False,
    Null,
    Distance,
    Geolocation,

    // Operators and punctuation
    Eq,
    NotEq,
    Lt,
    Gt,
    LParen,
    RParen,
    Comma,
    Dot,
    Colon,
    Plus,
    Minus,
    Bind,

    // Literals and names
    Identifier,
    IntegerLiteral,
    DecimalLiteral,
    StringLiteral,
    DateLiteral,
    DateTimeLiteral,

    // Hidden channel
    Whitespace,
    Comment,

    /// Character the lexer could not classify
    Unknown,
    Eof,
}

/// Keyword spellings, matched case-insensitively
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("select", TokenKind::Select),
    ("from", TokenKind::From),
    ("where", TokenKind::Where),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("not", TokenKind::Not),
    ("in", TokenKind::In),
    ("includes", TokenKind::Includes),
    ("excludes", TokenKind::Excludes),
    ("like", TokenKind::Like),
    ("group", TokenKind::Group),
    ("by", TokenKind::By),
    ("order", TokenKind::Order),
    ("asc", TokenKind::Asc),
    ("desc", TokenKind::Desc),
    ("nulls", TokenKind::Nulls),
    ("first", TokenKind::First),
    ("last", TokenKind::Last),
    ("limit", TokenKind::Limit),
    ("offset", TokenKind::Offset),
    ("having", TokenKind::Having),
    ("count", TokenKind::Count),
    ("using", TokenKind::Using),
    ("scope", TokenKind::Scope),
    ("with", TokenKind::With),
    ("for", TokenKind::For),
    ("view", TokenKind::View),
    ("reference", TokenKind::Reference),
    ("update", TokenKind::Update),
    ("typeof", TokenKind::Typeof),
    ("when", TokenKind::When),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("end", TokenKind::End),
    ("rollup", TokenKind::Rollup),
    ("cube", TokenKind::Cube),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("null", TokenKind::Null),
    ("distance", TokenKind::Distance),
    ("geolocation", TokenKind::Geolocation),
];

impl TokenKind {
    /// Look up a keyword by its spelling (case-insensitive)
    pub fn keyword(word: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(spelling, _)| spelling.eq_ignore_ascii_case(word))
            .map(|(_, kind)| *kind)
    }

    /// The fixed source text of this token type, if it has one
    ///
    /// Keywords report their lowercase spelling, operators their symbol.
    /// Identifiers, literals and hidden tokens have no literal name.
    pub fn literal_name(&self) -> Option<&'static str> {
        if let Some((spelling, _)) = KEYWORDS.iter().find(|(_, kind)| kind == self) {
            return Some(spelling);
        }
        match self {
            TokenKind::Eq => Some("="),
            TokenKind::NotEq => Some("!="),
            TokenKind::Lt => Some("<"),
            TokenKind::Gt => Some(">"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::Comma => Some(","),
            TokenKind::Dot => Some("."),
            TokenKind::Colon => Some(":"),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            _ => None,
        }
    }

    /// Check if tokens of this type are routed to the hidden channel
    pub fn is_hidden(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// Token channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Tokens the parser consumes
    Default,
    /// Whitespace and comments
    Hidden,
}

/// A single lexical unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Original source text (case preserved)
    pub text: String,
    /// Position of this token in the stream
    pub index: usize,
    /// Start line (1-based)
    pub line: usize,
    /// Start column (0-based, in characters)
    pub column: usize,
    pub channel: Channel,
}

impl Token {
    pub fn is_hidden(&self) -> bool {
        self.channel == Channel::Hidden
    }

    /// Column just past the last character of this token, on its end line
    pub fn end_column(&self) -> usize {
        match self.text.rfind(['\n', '\r']) {
            Some(last_break) => self.text[last_break + 1..].chars().count(),
            None => self.column + self.text.chars().count(),
        }
    }

    /// Line on which this token ends
    ///
    /// Only hidden tokens (whitespace, block comments) can span lines.
    pub fn end_line(&self) -> usize {
        if self.kind.is_hidden() {
            self.line + count_line_breaks(&self.text)
        } else {
            self.line
        }
    }

    /// Check if the text ends with a character that can continue an identifier
    pub fn ends_with_word_char(&self) -> bool {
        self.text
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

/// Count line breaks, treating `\r\n` as a single break
pub fn count_line_breaks(text: &str) -> usize {
    let mut count = 0;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => count += 1,
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                count += 1;
            }
            _ => {}
        }
    }
    count
}

/// Ordered tokens for a whole document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Kind of the token at `index`, `Eof` past the end
    pub fn kind_at(&self, index: usize) -> TokenKind {
        self.tokens
            .get(index)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
