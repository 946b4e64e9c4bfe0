// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion module
//!
//! Context-sensitive SOQL completion.
//!
//! ## Architecture
//!
//! - `candidates`: Asks the grammar predictor what is valid at the cursor
//! - `context`: Per-request view of scopes and the cursor token
//! - `tokens`: Keyword and operator items from token candidates
//! - `rules`: Field, object and literal placeholders from rule candidates
//! - `from_expr` / `literals`: Generators shared by both refiners
//! - `special_cases`: Fallbacks and structural snippets
//! - `render`: Converts items to LSP completion items
//! - `error`: Error types for completion operations
//!
//! ## Flow
//!
//! ```text
//! 1. Strip header comments, lex and parse the document
//!    ↓
//! 2. Resolve the cursor to a token index
//!    ↓
//! 3. Build query scopes (QueryAnalyzer)
//!    ↓
//! 4. Collect raw candidates from the predictor
//!    ↓
//! 5. Refine token and rule candidates into items
//!    ↓
//! 6. Post-process, optionally render to lsp-types
//! ```

pub mod candidates;
pub mod context;
pub mod error;
pub mod from_expr;
pub mod item;
pub mod literals;
pub mod render;
pub mod rules;
pub mod special_cases;
pub mod tokens;

use soql_grammar::{CandidatePredictor, parse, parse_header_comments};
use soql_lsp_context::{CursorPosition, QueryAnalyzer, find_cursor_token_index};
use soql_lsp_function_registry::FunctionRegistry;
use tracing::{debug, error};

use crate::completion::candidates::collect_candidates;
use crate::completion::context::CompletionContext;
use crate::completion::error::CompletionError;
use crate::completion::item::CompletionItem;
use crate::completion::render::CompletionRenderer;
use crate::completion::rules::rule_items;
use crate::completion::special_cases::post_process;
use crate::completion::tokens::token_items;
use crate::config::CompletionConfig;

/// Completion engine
///
/// Holds only read-only state, so one engine can serve concurrent requests.
pub struct CompletionEngine<P> {
    config: CompletionConfig,
    registry: FunctionRegistry,
    predictor: P,
}

impl<P: CandidatePredictor> CompletionEngine<P> {
    /// Create an engine with the default configuration
    pub fn new(predictor: P) -> Self {
        Self::with_config(predictor, CompletionConfig::default())
    }

    pub fn with_config(predictor: P, config: CompletionConfig) -> Self {
        Self {
            config,
            registry: FunctionRegistry::new(),
            predictor,
        }
    }

    /// Compute completion items for `text` at `cursor`
    ///
    /// # Errors
    ///
    /// - [`CompletionError::InvalidPosition`] when line or column is 0
    /// - [`CompletionError::Context`] when the cursor cannot be located in
    ///   the token stream
    ///
    /// # Examples
    ///
    /// ```
    /// use soql_grammar::{CandidateSet, PredictionRequest, TokenCandidate, TokenKind};
    /// use soql_lsp::{CompletionEngine, CursorPosition};
    ///
    /// let engine = CompletionEngine::new(|_: &PredictionRequest<'_>| CandidateSet {
    ///     tokens: vec![TokenCandidate { token_type: TokenKind::Where, following: vec![] }],
    ///     rules: vec![],
    /// });
    /// let items = engine
    ///     .complete("SELECT Id FROM Account ", CursorPosition::new(1, 24))
    ///     .unwrap();
    /// assert_eq!(items[0].label, "WHERE");
    /// ```
    pub fn complete(
        &self,
        text: &str,
        cursor: CursorPosition,
    ) -> Result<Vec<CompletionItem>, CompletionError> {
        if cursor.line == 0 || cursor.column == 0 {
            return Err(CompletionError::InvalidPosition(cursor));
        }

        let document = parse_header_comments(text);
        let parsed = parse(&document.header_padded_text);
        let cursor_index = find_cursor_token_index(&parsed.tokens, cursor).inspect_err(|e| {
            error!(line = cursor.line, column = cursor.column, "{e}");
        })?;

        let analyzer = QueryAnalyzer::new(&parsed);
        let ctx = CompletionContext::new(
            &analyzer,
            &self.registry,
            cursor_index,
            &self.config.default_sobject,
        );

        let candidates = collect_candidates(&self.predictor, &parsed, cursor_index, &self.config);
        let mut items = token_items(&ctx, &candidates.tokens);
        items.extend(rule_items(&ctx, &candidates.rules));
        let items = post_process(&ctx, items);

        debug!(cursor_index, count = items.len(), "completion items");
        Ok(items)
    }

    /// [`complete`](Self::complete) for a 0-based LSP position, rendered to
    /// lsp-types items
    ///
    /// `position.character` is in UTF-16 code units.
    pub fn complete_lsp(
        &self,
        text: &str,
        position: lsp_types::Position,
    ) -> Result<Vec<lsp_types::CompletionItem>, CompletionError> {
        let cursor = CursorPosition::from_lsp_utf16(text, position.line, position.character);
        let items = self.complete(text, cursor)?;
        Ok(CompletionRenderer::render(&items))
    }
}

/// Completion items for `text` at `cursor`, empty when the cursor cannot
/// be resolved
pub fn completions_for<P: CandidatePredictor>(
    engine: &CompletionEngine<P>,
    text: &str,
    cursor: CursorPosition,
) -> Vec<CompletionItem> {
    match engine.complete(text, cursor) {
        Ok(items) => items,
        Err(e) if e.should_return_empty() => {
            debug!("no completions: {e}");
            Vec::new()
        }
        Err(e) => {
            error!("completion failed: {e}");
            Vec::new()
        }
    }
}
