// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion context
//!
//! Everything the refiners need to know about one cursor position, computed
//! once per request and shared by every candidate.

use soql_grammar::{ParsedQuery, TokenKind, TokenStream};
use soql_lsp_context::{ParsedFieldReference, QueryAnalyzer, QueryScope};
use soql_lsp_function_registry::FunctionRegistry;

/// Per-request view of the cursor position
pub struct CompletionContext<'a> {
    pub parsed: &'a ParsedQuery,
    pub analyzer: &'a QueryAnalyzer<'a>,
    pub registry: &'a FunctionRegistry,
    pub cursor_index: usize,
    /// Scopes enclosing the cursor, innermost first
    pub scope_stack: Vec<&'a QueryScope>,
    /// Target object of the innermost scope, or the configured default
    pub sobject_name: String,
}

impl<'a> CompletionContext<'a> {
    pub fn new(
        analyzer: &'a QueryAnalyzer<'a>,
        registry: &'a FunctionRegistry,
        cursor_index: usize,
        default_sobject: &str,
    ) -> Self {
        let scope_stack = analyzer.query_scopes_at(cursor_index);
        let sobject_name = scope_stack
            .first()
            .and_then(|scope| scope.sobject_name.clone())
            .unwrap_or_else(|| default_sobject.to_string());
        Self {
            parsed: analyzer.parsed(),
            analyzer,
            registry,
            cursor_index,
            scope_stack,
            sobject_name,
        }
    }

    pub fn tokens(&self) -> &'a TokenStream {
        &self.parsed.tokens
    }

    /// Kind of the token completion targets
    pub fn cursor_token_kind(&self) -> TokenKind {
        self.tokens().kind_at(self.cursor_index)
    }

    pub fn innermost_scope(&self) -> Option<&'a QueryScope> {
        self.scope_stack.first().copied()
    }

    /// Check if the cursor is inside a sub-query or semi-join
    pub fn is_nested(&self) -> bool {
        self.scope_stack.len() > 1
    }

    /// Object of the enclosing query, when nested
    pub fn parent_sobject(&self) -> Option<&'a str> {
        if !self.is_nested() {
            return None;
        }
        self.scope_stack
            .get(1)
            .and_then(|scope| scope.sobject_name.as_deref())
    }

    /// Name the nested query uses to address its parent, when nested
    pub fn relationship_name(&self) -> Option<&'a str> {
        if !self.is_nested() {
            return None;
        }
        self.innermost_scope()
            .and_then(|scope| scope.sobject_name.as_deref())
    }

    pub fn where_field(&self) -> Option<ParsedFieldReference> {
        self.analyzer.extract_where_field(self.cursor_index)
    }
}
