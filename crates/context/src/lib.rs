// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SOQL LSP - Context Detection Layer
//!
//! This crate provides syntax-level context detection for SOQL completion.
//!
//! ## Overview
//!
//! Context detection works on the token stream and parse tree produced by
//! `soql-grammar` and answers three questions for a cursor:
//!
//! - which token completion targets ([`cursor`])
//! - which (nested) queries enclose that token ([`scope_builder`])
//! - which field and operator the nearest filter condition uses ([`where_field`])
//!
//! ## Examples
//!
//! ```rust
//! use soql_grammar::parse;
//! use soql_lsp_context::{CursorPosition, QueryAnalyzer, find_cursor_token_index};
//!
//! let parsed = parse("SELECT Id FROM Account WHERE Name = ");
//! let index = find_cursor_token_index(&parsed.tokens, CursorPosition::new(1, 37)).unwrap();
//! let analyzer = QueryAnalyzer::new(&parsed);
//!
//! let field = analyzer.extract_where_field(index).unwrap();
//! assert_eq!(field.sobject_name, "Account");
//! assert_eq!(field.field_name, "Name");
//! ```

pub mod analyzer;
pub mod cursor;
pub mod error;
pub mod scope_builder;
pub mod token_utils;
pub mod where_field;

pub use analyzer::QueryAnalyzer;
pub use cursor::{CursorPosition, find_cursor_token_index};
pub use error::ContextError;
pub use scope_builder::{QueryScope, QueryScopeBuilder, QueryScopes};
pub use token_utils::{is_cursor_after, is_cursor_before, search_token_before_cursor};
pub use where_field::{ParsedFieldReference, extract_where_field};
