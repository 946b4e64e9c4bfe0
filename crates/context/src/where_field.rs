// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Filter-field extraction
//!
//! Finds the condition nearest to (at or before) the cursor and reports
//! the field and operator it uses, so value and operator suggestions can
//! be narrowed to that field's type.
//!
//! Aliases are not resolved: a leading `Object.` qualifier is only
//! stripped when it textually equals the current object name.

use serde::{Deserialize, Serialize};
use soql_grammar::{NodeId, ParseTree, RuleKind, TokenStream, TreeListener};

use crate::scope_builder::QueryScopes;

/// A field referenced by a filter condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFieldReference {
    pub sobject_name: String,
    /// Field path relative to `sobject_name`
    pub field_name: String,
    /// Operator source text, when the condition has one
    pub operator: Option<String>,
}

/// Field of the condition nearest to `cursor_index` in the innermost scope
///
/// Returns `None` when the cursor is in no query with a known object, or
/// when no condition starts at or before the cursor.
pub fn extract_where_field(
    tree: &ParseTree,
    tokens: &TokenStream,
    scopes: &QueryScopes,
    cursor_index: usize,
) -> Option<ParsedFieldReference> {
    let sobject = scopes.innermost_at(cursor_index)?.sobject_name.as_deref()?;

    let mut listener = NearestCondition {
        cursor_index,
        best: None,
    };
    tree.walk(&mut listener);
    let (condition, _) = listener.best?;

    let field_node = tree.child(condition, 0)?;
    let field_text = tree.text(field_node, tokens);
    let field_name = match field_text.split_once('.') {
        Some((qualifier, rest)) if qualifier == sobject => rest.to_string(),
        _ => field_text,
    };

    let operator = if tree.child_count(condition) > 2 {
        tree.child(condition, 1)
            .map(|op| operator_text(tree, op, tokens))
    } else {
        None
    };

    Some(ParsedFieldReference {
        sobject_name: sobject.to_string(),
        field_name,
        operator,
    })
}

/// Operator tokens joined with a space between adjacent words (`NOT IN`)
fn operator_text(tree: &ParseTree, op: NodeId, tokens: &TokenStream) -> String {
    let mut text = String::new();
    let mut last_was_word = false;
    for &child in tree.children(op) {
        let Some(token) = tree.node(child).token_index().and_then(|i| tokens.get(i)) else {
            continue;
        };
        let is_word = token.ends_with_word_char();
        if is_word && last_was_word {
            text.push(' ');
        }
        text.push_str(&token.text);
        last_was_word = is_word;
    }
    text
}

struct NearestCondition {
    cursor_index: usize,
    /// Best condition so far and its distance to the cursor
    best: Option<(NodeId, usize)>,
}

impl TreeListener for NearestCondition {
    fn enter_rule(&mut self, tree: &ParseTree, node: NodeId, rule: RuleKind) {
        if rule != RuleKind::WhereExpr {
            return;
        }
        let start = tree.node(node).start;
        if start > self.cursor_index {
            return;
        }
        let distance = self.cursor_index - start;
        if self.best.is_none_or(|(_, best)| distance < best) {
            self.best = Some((node, distance));
        }
    }
}
