// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Post-processing

use soql_grammar::TokenKind;
use soql_lsp_context::{is_cursor_after, is_cursor_before};

use crate::completion::context::CompletionContext;
use crate::completion::from_expr::from_expression_items;
use crate::completion::item::CompletionItem;

/// Fill gaps the grammar predictions leave and add structural snippets
pub fn post_process(
    ctx: &CompletionContext<'_>,
    mut items: Vec<CompletionItem>,
) -> Vec<CompletionItem> {
    let tokens = ctx.tokens();

    // SELECT FROM |
    if items.is_empty()
        && is_cursor_after(tokens, ctx.cursor_index, &[&[TokenKind::Select], &[TokenKind::From]])
    {
        items.extend(from_expression_items(ctx));
    }

    if items.iter().any(|item| item.label == "SELECT")
        && !is_cursor_before(tokens, ctx.cursor_index, &[&[TokenKind::From]])
    {
        items.push(CompletionItem::snippet("SELECT ... FROM ...", "SELECT $2 FROM $1"));
    }
    items
}
