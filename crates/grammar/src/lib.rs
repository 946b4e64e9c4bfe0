// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! SOQL Grammar
//!
//! Lexer, rule taxonomy and error-tolerant parser for SOQL queries.
//!
//! The parse tree is an arena of rule and token nodes with token-index
//! spans, which is what the completion engine needs to map a cursor to
//! its enclosing query, clause and condition.
//!
//! ## Usage
//!
//! ```rust
//! use soql_grammar::{parse, RuleKind, TokenKind};
//!
//! let parsed = parse("SELECT Id FROM Account WHERE Name = ");
//! assert_eq!(parsed.tokens[0].kind, TokenKind::Select);
//! assert!(parsed.tree.rule_nodes().any(|n| parsed.tree.rule(n) == Some(RuleKind::WhereExpr)));
//! ```

pub mod comments;
pub mod lexer;
pub mod parser;
pub mod prediction;
pub mod rule;
pub mod token;
pub mod tree;

pub use comments::{HeaderComments, parse_header_comments};
pub use lexer::tokenize;
pub use parser::{ParsedQuery, SyntaxError, parse, parse_tokens};
pub use prediction::{
    CandidatePredictor, CandidateSet, PredictionRequest, RuleCandidate, TokenCandidate,
};
pub use rule::RuleKind;
pub use token::{Channel, Token, TokenKind, TokenStream, count_line_breaks};
pub use tree::{Node, NodeId, NodeKind, ParseTree, TreeBuilder, TreeListener};
