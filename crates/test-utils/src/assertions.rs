// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Completion-specific test helpers and custom assertions

use lsp_types::CompletionItem;
use serde::de::DeserializeOwned;

/// Custom assertion helpers for completion results
pub struct CompletionAssertions;

impl CompletionAssertions {
    /// Find the item labelled `label`, panicking with the available labels
    pub fn find<'a>(items: &'a [CompletionItem], label: &str) -> &'a CompletionItem {
        items
            .iter()
            .find(|item| item.label == label)
            .unwrap_or_else(|| panic!("no item '{label}' in {:?}", Self::labels(items)))
    }

    pub fn assert_contains(items: &[CompletionItem], label: &str) {
        Self::find(items, label);
    }

    pub fn assert_not_contains(items: &[CompletionItem], label: &str) {
        assert!(
            items.iter().all(|item| item.label != label),
            "unexpected item '{label}' in {:?}",
            Self::labels(items)
        );
    }

    /// Assert that exactly `count` items are labelled `label`
    pub fn assert_count(items: &[CompletionItem], label: &str, count: usize) {
        let actual = items.iter().filter(|item| item.label == label).count();
        assert_eq!(actual, count, "expected {count} item(s) '{label}', found {actual}");
    }

    /// Decode the `soqlContext` payload of an item
    pub fn soql_context<T: DeserializeOwned>(item: &CompletionItem) -> Option<T> {
        let context = item.data.as_ref()?.get("soqlContext")?.clone();
        serde_json::from_value(context).ok()
    }

    pub fn labels(items: &[CompletionItem]) -> Vec<&str> {
        items.iter().map(|item| item.label.as_str()).collect()
    }
}
