// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Query scope tracking
//!
//! A SOQL document can nest queries two ways: child sub-queries in the
//! select list and semi-joins on the right of `IN`. Each of them is a
//! [`QueryScope`] with its own target object:
//!
//! ```sql
//! SELECT Id, (SELECT LastName FROM Contacts)   -- scope 2: relationship Contacts
//! FROM Account                                 -- scope 1: object Account
//! WHERE Id IN (SELECT AccountId FROM Case)     -- scope 3: semi-join on Case
//! ```
//!
//! [`QueryScopeBuilder`] collects the scopes in one tree walk and freezes
//! them into an immutable [`QueryScopes`] registry that answers "which
//! scopes enclose this token?".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use soql_grammar::{NodeId, ParseTree, RuleKind, TokenStream, TreeListener};
use tracing::debug;

/// One `SELECT ... FROM ...` unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryScope {
    /// Index of the first token of the query (normally SELECT)
    pub select_token: usize,
    /// Index of the FROM token, once a target object has been parsed
    pub from_token: Option<usize>,
    /// First component of the FROM target
    pub sobject_name: Option<String>,
    /// Select-list columns that are plain single identifiers
    pub selected_fields: Vec<String>,
    /// Group-by entries that are plain single identifiers
    pub group_by_fields: Vec<String>,
    pub is_semi_join: bool,
    /// Token span of the enclosing node: the parentheses around a nested
    /// query, or the whole document up to EOF for the top-level query
    span_start: usize,
    span_stop: Option<usize>,
}

impl QueryScope {
    /// Check if `index` falls inside this scope's enclosing span
    ///
    /// The start token is excluded so a cursor on the opening `(` of a
    /// sub-query still belongs to the outer query.
    pub fn contains(&self, index: usize) -> bool {
        index > self.span_start && self.span_stop.is_some_and(|stop| index <= stop)
    }
}

/// Immutable registry of the scopes in one parse, keyed by query start token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryScopes {
    scopes: BTreeMap<usize, QueryScope>,
}

impl QueryScopes {
    /// Walk `tree` once and collect every query scope
    pub fn build(tree: &ParseTree, tokens: &TokenStream) -> Self {
        let mut builder = QueryScopeBuilder::new(tokens);
        tree.walk(&mut builder);
        builder.finish()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Scope registered for the query starting at token `start`
    pub fn get(&self, start: usize) -> Option<&QueryScope> {
        self.scopes.get(&start)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryScope> {
        self.scopes.values()
    }

    /// Scopes enclosing `index`, innermost first
    pub fn scopes_at(&self, index: usize) -> Vec<&QueryScope> {
        let mut found: Vec<&QueryScope> = self
            .scopes
            .values()
            .filter(|scope| scope.contains(index))
            .collect();
        found.sort_by(|a, b| b.select_token.cmp(&a.select_token));
        found
    }

    pub fn innermost_at(&self, index: usize) -> Option<&QueryScope> {
        self.scopes_at(index).into_iter().next()
    }
}

/// Tree listener that registers query scopes
pub struct QueryScopeBuilder<'a> {
    tokens: &'a TokenStream,
    scopes: BTreeMap<usize, QueryScope>,
}

impl<'a> QueryScopeBuilder<'a> {
    pub fn new(tokens: &'a TokenStream) -> Self {
        Self {
            tokens,
            scopes: BTreeMap::new(),
        }
    }

    pub fn finish(self) -> QueryScopes {
        debug!(count = self.scopes.len(), "collected query scopes");
        QueryScopes {
            scopes: self.scopes,
        }
    }

    /// Scope owning `node`: the nearest enclosing query or semi-join
    fn owning_scope(&mut self, tree: &ParseTree, node: NodeId) -> Option<&mut QueryScope> {
        let query = tree.find_enclosing(node, |rule| rule.is_query_scope())?;
        self.scopes.get_mut(&tree.node(query).start)
    }

    fn register(&mut self, tree: &ParseTree, node: NodeId, is_semi_join: bool) {
        let start = tree.node(node).start;
        let span_node = tree.node(tree.parent(node).unwrap_or(node));
        self.scopes.insert(
            start,
            QueryScope {
                select_token: start,
                from_token: None,
                sobject_name: None,
                selected_fields: Vec::new(),
                group_by_fields: Vec::new(),
                is_semi_join,
                span_start: span_node.start,
                span_stop: span_node.stop,
            },
        );
    }

    fn record_from(&mut self, tree: &ParseTree, from_exprs: NodeId) {
        let Some(first_expr) = tree.child(from_exprs, 0) else {
            return;
        };
        let from_token = tree.parent(from_exprs).map(|clause| tree.node(clause).start);
        let name = tree
            .child(first_expr, 0)
            .and_then(|field| tree.child(field, 0))
            .map(|ident| tree.text(ident, self.tokens))
            .filter(|name| !name.is_empty());

        let Some(scope) = self.owning_scope(tree, from_exprs) else {
            return;
        };
        scope.from_token = from_token;
        scope.sobject_name = name;
    }

    fn record_selected_field(&mut self, tree: &ParseTree, select_expr: NodeId) {
        let Some(field) = tree.child(select_expr, 0) else {
            return;
        };
        let Some(name) = single_identifier(tree, field, self.tokens) else {
            return;
        };
        if let Some(scope) = self.owning_scope(tree, select_expr) {
            scope.selected_fields.push(name);
        }
    }

    fn record_group_by(&mut self, tree: &ParseTree, group_by_exprs: NodeId) {
        let fields: Vec<String> = tree
            .rule_children(group_by_exprs, RuleKind::Field)
            .filter_map(|field| single_identifier(tree, field, self.tokens))
            .collect();
        if fields.is_empty() {
            return;
        }
        if let Some(scope) = self.owning_scope(tree, group_by_exprs) {
            scope.group_by_fields = fields;
        }
    }
}

impl TreeListener for QueryScopeBuilder<'_> {
    fn enter_rule(&mut self, tree: &ParseTree, node: NodeId, rule: RuleKind) {
        match rule {
            RuleKind::InnerQuery => self.register(tree, node, false),
            RuleKind::SemiJoin => self.register(tree, node, true),
            RuleKind::SelectExpr => self.record_selected_field(tree, node),
            RuleKind::GroupByExprs => self.record_group_by(tree, node),
            _ => {}
        }
    }

    fn exit_rule(&mut self, tree: &ParseTree, node: NodeId, rule: RuleKind) {
        if rule == RuleKind::FromExprs {
            self.record_from(tree, node);
        }
    }
}

/// Text of a field node made of exactly one identifier
fn single_identifier(tree: &ParseTree, field: NodeId, tokens: &TokenStream) -> Option<String> {
    if !tree.node(field).is_rule(RuleKind::Field) || tree.child_count(field) != 1 {
        return None;
    }
    let ident = tree.child(field, 0)?;
    tree.node(ident)
        .is_rule(RuleKind::Identifier)
        .then(|| tree.text(ident, tokens))
        .filter(|name| !name.is_empty())
}
