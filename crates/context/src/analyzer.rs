// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Query analyzer
//!
//! Per-request view over one parse: the scope registry is built once and
//! the where-field search reuses it for every lookup.

use soql_grammar::ParsedQuery;

use crate::scope_builder::{QueryScope, QueryScopes};
use crate::where_field::{ParsedFieldReference, extract_where_field};

pub struct QueryAnalyzer<'a> {
    parsed: &'a ParsedQuery,
    scopes: QueryScopes,
}

impl<'a> QueryAnalyzer<'a> {
    pub fn new(parsed: &'a ParsedQuery) -> Self {
        let scopes = QueryScopes::build(&parsed.tree, &parsed.tokens);
        Self { parsed, scopes }
    }

    pub fn parsed(&self) -> &'a ParsedQuery {
        self.parsed
    }

    pub fn scopes(&self) -> &QueryScopes {
        &self.scopes
    }

    /// Scopes enclosing the token, innermost first
    pub fn query_scopes_at(&self, token_index: usize) -> Vec<&QueryScope> {
        self.scopes.scopes_at(token_index)
    }

    pub fn innermost_scope_at(&self, token_index: usize) -> Option<&QueryScope> {
        self.scopes.innermost_at(token_index)
    }

    pub fn extract_where_field(&self, token_index: usize) -> Option<ParsedFieldReference> {
        extract_where_field(
            &self.parsed.tree,
            &self.parsed.tokens,
            &self.scopes,
            token_index,
        )
    }
}
