// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion rendering
//!
//! Converts engine items to LSP completion items. The item context travels
//! in `data.soqlContext`, where the client's catalog resolver picks it up.

use lsp_types::{CompletionItemKind as LspKind, InsertTextFormat};
use serde_json::json;

use crate::completion::item::{CompletionItem, CompletionItemKind};

/// Completion renderer
pub struct CompletionRenderer;

impl CompletionRenderer {
    pub fn render(items: &[CompletionItem]) -> Vec<lsp_types::CompletionItem> {
        items.iter().map(Self::render_item).collect()
    }

    pub fn render_item(item: &CompletionItem) -> lsp_types::CompletionItem {
        lsp_types::CompletionItem {
            label: item.label.clone(),
            kind: Some(Self::kind(item.kind)),
            insert_text: item.insert_text.clone(),
            insert_text_format: item.insert_text.as_ref().map(|_| InsertTextFormat::SNIPPET),
            preselect: item.preselect.then_some(true),
            sort_text: item.sort_text.clone(),
            data: item
                .soql_context
                .as_ref()
                .map(|context| json!({ "soqlContext": context })),
            ..Default::default()
        }
    }

    fn kind(kind: CompletionItemKind) -> LspKind {
        match kind {
            CompletionItemKind::Keyword => LspKind::KEYWORD,
            CompletionItemKind::Field => LspKind::FIELD,
            CompletionItemKind::Function => LspKind::FUNCTION,
            CompletionItemKind::Snippet => LspKind::SNIPPET,
            CompletionItemKind::Value => LspKind::VALUE,
            CompletionItemKind::Class => LspKind::CLASS,
            CompletionItemKind::Constant => LspKind::CONSTANT,
        }
    }
}
