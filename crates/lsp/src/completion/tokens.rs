// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Keyword and operator suggestions
//!
//! Turns raw token candidates into keyword items. Multi-word keywords are
//! labelled with their continuation (`GROUP BY`), comparison operators that
//! depend on the compared field carry its context, and a few operators the
//! grammar cannot propose as alternatives are added as siblings.

use soql_grammar::{TokenCandidate, TokenKind};
use soql_lsp_context::is_cursor_after;

use crate::completion::context::CompletionContext;
use crate::completion::item::{CompletionItem, SoqlItemContext};

/// Operators whose valid value types depend on the field they compare
const FIELD_DEPENDENT_OPERATORS: &[TokenKind] = &[
    TokenKind::Lt,
    TokenKind::Gt,
    TokenKind::Includes,
    TokenKind::Excludes,
    TokenKind::Like,
];

/// Keywords that open a parenthesized value list
const LIST_OPERATORS: &[&str] = &["IN", "NOT IN", "INCLUDES", "EXCLUDES"];

/// Keyword items for the raw token candidates
pub fn token_items(
    ctx: &CompletionContext<'_>,
    candidates: &[TokenCandidate],
) -> Vec<CompletionItem> {
    let mut items = Vec::new();
    for candidate in candidates {
        let Some(item) = keyword_item(ctx, candidate) else {
            continue;
        };
        let siblings: &[&str] = match item.label.as_str() {
            "<" => &["<="],
            ">" => &[">="],
            "=" => &["!=", "<>"],
            _ => &[],
        };
        let siblings: Vec<CompletionItem> =
            siblings.iter().map(|label| item.sibling(*label)).collect();
        items.push(item);
        items.extend(siblings);
    }
    items
}

fn keyword_item(ctx: &CompletionContext<'_>, candidate: &TokenCandidate) -> Option<CompletionItem> {
    let tokens = ctx.tokens();
    if candidate.token_type == ctx.cursor_token_kind() {
        return None;
    }
    // `<` and `>` followed by `=` are offered as one operator
    if candidate.token_type == TokenKind::Eq
        && is_cursor_after(tokens, ctx.cursor_index, &[&[TokenKind::Lt, TokenKind::Gt]])
    {
        return None;
    }

    let mut label = candidate.token_type.literal_name()?.to_uppercase();
    for following in &candidate.following {
        if let Some(name) = following.literal_name() {
            label.push(' ');
            label.push_str(&name.to_uppercase());
        }
    }

    // no aggregates inside sub-queries
    if ctx.is_nested() && (label == "COUNT" || label == "GROUP BY") {
        return None;
    }

    let context = if FIELD_DEPENDENT_OPERATORS.contains(&candidate.token_type) {
        ctx.where_field().map(|field| SoqlItemContext {
            only_types: ctx
                .registry
                .get_operator(&label)
                .and_then(|op| op.types.clone()),
            ..SoqlItemContext::for_field(field.sobject_name, field.field_name)
        })
    } else {
        None
    };

    if LIST_OPERATORS.contains(&label.as_str()) {
        label.push_str(" (");
    } else if label == "COUNT" {
        label = "COUNT()".to_string();
    }

    let mut item = CompletionItem::keyword(label);
    if let Some(context) = context {
        item = item.with_context(context);
    }
    if item.label == "WHERE" {
        item.preselect = true;
    }
    Some(item)
}
