// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! YAML completion test cases
//!
//! A case file is a YAML list. Each case scripts the grammar predictor and
//! lists labels the completion result must or must not contain:
//!
//! ```yaml
//! - description: Filter field after WHERE
//!   input: "SELECT Id FROM Account WHERE |"
//!   tokens:
//!     - token: not
//!   rules:
//!     - rule: identifier
//!       path: [where_clause, where_exprs, where_expr]
//!   expected:
//!     contains: [__SOBJECT_FIELDS_PLACEHOLDER]
//! ```
//!
//! Rule candidates start at the cursor unless `start` gives a token index
//! or `before_cursor` a distance from the cursor.

use std::path::Path;

use serde::Deserialize;
use soql_grammar::{RuleKind, TokenKind};
use soql_lsp_context::CursorPosition;
use thiserror::Error;

use crate::fixtures::split_cursor;
use crate::mock_predictor::{MockPredictor, RuleStart};

/// A single test case definition
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub description: String,
    /// Query text with a `|` cursor marker
    pub input: String,
    #[serde(default)]
    pub tokens: Vec<ScriptedToken>,
    #[serde(default)]
    pub rules: Vec<ScriptedRule>,
    #[serde(default)]
    pub expected: Expected,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptedToken {
    pub token: TokenKind,
    #[serde(default)]
    pub following: Vec<TokenKind>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptedRule {
    pub rule: RuleKind,
    #[serde(default)]
    pub path: Vec<RuleKind>,
    pub start: Option<usize>,
    pub before_cursor: Option<usize>,
}

/// Label expectations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Expected {
    #[serde(default)]
    pub contains: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
    pub min_items: Option<usize>,
}

/// Parse errors
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Empty test case file")]
    EmptyFile,

    #[error("Test case '{0}' has no cursor marker")]
    MissingCursor(String),
}

impl TestCase {
    /// Input text without the marker, and the cursor it marked
    pub fn text_and_cursor(&self) -> Result<(String, CursorPosition), ParseError> {
        split_cursor(&self.input).ok_or_else(|| ParseError::MissingCursor(self.description.clone()))
    }

    /// Predictor scripted with this case's candidates
    pub fn predictor(&self) -> MockPredictor {
        let builder = self
            .tokens
            .iter()
            .fold(MockPredictor::builder(), |builder, t| {
                builder.token_with(t.token, &t.following)
            });
        self.rules
            .iter()
            .fold(builder, |builder, r| {
                let start = match (r.start, r.before_cursor) {
                    (Some(index), _) => RuleStart::Index(index),
                    (None, Some(n)) => RuleStart::BeforeCursor(n),
                    (None, None) => RuleStart::Cursor,
                };
                builder.rule(r.rule, &r.path, start)
            })
            .build()
    }
}

/// Parse a test case file
pub fn parse_test_file(path: &Path) -> Result<Vec<TestCase>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_test_content(&content)
}

/// Parse test case content from a string
pub fn parse_test_content(content: &str) -> Result<Vec<TestCase>, ParseError> {
    let cases: Vec<TestCase> = serde_yaml::from_str(content)?;
    if cases.is_empty() {
        return Err(ParseError::EmptyFile);
    }
    for case in &cases {
        case.text_and_cursor()?;
    }
    Ok(cases)
}
