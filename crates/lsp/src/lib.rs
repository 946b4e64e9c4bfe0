// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SOQL LSP - Completion Engine
//!
//! Context-sensitive completion for SOQL queries.
//!
//! ## Overview
//!
//! Given query text and a cursor, the engine returns suggestions that are
//! valid at that point. Schema-dependent suggestions (objects, fields,
//! relationships, picklist values) are emitted as placeholders carrying a
//! [`SoqlItemContext`]; the client expands them against its live catalog.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            CompletionEngine              │
//! ├──────────────────────────────────────────┤
//! │ soql-grammar      lex / parse / predict  │
//! │ soql-lsp-context  cursor / scopes / where│
//! │ completion::*     refine / post-process  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Grammar prediction is a boundary: any [`CandidatePredictor`] can drive
//! the engine, including a plain closure.
//!
//! ## Usage
//!
//! ```rust
//! use soql_grammar::{CandidateSet, PredictionRequest, RuleCandidate, RuleKind};
//! use soql_lsp::{CompletionEngine, CursorPosition, completions_for};
//!
//! // A predictor that always proposes a filter field at the cursor
//! let engine = CompletionEngine::new(|request: &PredictionRequest<'_>| CandidateSet {
//!     tokens: vec![],
//!     rules: vec![RuleCandidate {
//!         rule: RuleKind::Identifier,
//!         rule_path: vec![RuleKind::WhereClause, RuleKind::WhereExprs, RuleKind::WhereExpr],
//!         start_token_index: request.cursor_index,
//!     }],
//! });
//!
//! let items = completions_for(&engine, "SELECT  FROM Account WHERE ", CursorPosition::new(1, 28));
//! let context = items[0].soql_context.as_ref().unwrap();
//! assert_eq!(context.sobject_name, "Account");
//! ```
//!
//! [`CandidatePredictor`]: soql_grammar::CandidatePredictor

pub mod completion;
pub mod config;
pub mod diagnostic;

pub use completion::error::CompletionError;
pub use completion::item::{CompletionItem, CompletionItemKind, SoqlItemContext};
pub use completion::render::CompletionRenderer;
pub use completion::{CompletionEngine, completions_for};
pub use config::{CompletionConfig, ConfigError};
pub use diagnostic::{SoqlDiagnostic, syntax_diagnostics};
pub use soql_lsp_context::CursorPosition;
