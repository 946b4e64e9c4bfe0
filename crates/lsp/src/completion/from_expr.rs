// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # FROM target suggestions

use crate::completion::context::CompletionContext;
use crate::completion::item::{
    CompletionItem, RELATIONSHIPS_PLACEHOLDER, SOBJECTS_PLACEHOLDER, SoqlItemContext,
};

/// Suggest what may follow FROM at the cursor
///
/// Top-level queries and semi-joins select from any object; a child
/// sub-query selects from a relationship of its parent's object.
pub fn from_expression_items(ctx: &CompletionContext<'_>) -> Vec<CompletionItem> {
    let stack = &ctx.scope_stack;
    let innermost_is_semi_join = stack.first().is_some_and(|scope| scope.is_semi_join);

    if stack.len() == 1 || (stack.len() > 1 && innermost_is_semi_join) {
        return vec![CompletionItem::object(SOBJECTS_PLACEHOLDER)];
    }
    match ctx.parent_sobject() {
        Some(parent) => vec![
            CompletionItem::object(RELATIONSHIPS_PLACEHOLDER)
                .with_context(SoqlItemContext::for_object(parent)),
        ],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soql_grammar::parse;
    use soql_lsp_context::QueryAnalyzer;
    use soql_lsp_function_registry::FunctionRegistry;

    /// Items with the cursor right after the `nth` FROM keyword
    fn items_after_from(text: &str, nth: usize) -> Vec<CompletionItem> {
        let parsed = parse(text);
        let analyzer = QueryAnalyzer::new(&parsed);
        let registry = FunctionRegistry::new();
        let at = parsed
            .tokens
            .iter()
            .filter(|t| t.text == "FROM")
            .nth(nth)
            .map(|t| t.index + 1)
            .unwrap();
        let ctx = CompletionContext::new(&analyzer, &registry, at, "Object");
        from_expression_items(&ctx)
    }

    #[test]
    fn test_top_level_objects() {
        let items = items_after_from("SELECT Id FROM ", 0);
        assert_eq!(items, vec![CompletionItem::object(SOBJECTS_PLACEHOLDER)]);
    }

    #[test]
    fn test_child_query_relationships() {
        let text = "SELECT Id, (SELECT Id FROM ) FROM Account";
        assert_eq!(
            items_after_from(text, 0),
            vec![
                CompletionItem::object(RELATIONSHIPS_PLACEHOLDER)
                    .with_context(SoqlItemContext::for_object("Account"))
            ]
        );
        // the outer FROM only sees the top-level scope
        assert_eq!(
            items_after_from(text, 1),
            vec![CompletionItem::object(SOBJECTS_PLACEHOLDER)]
        );
    }

    #[test]
    fn test_semi_join_objects() {
        let items = items_after_from(
            "SELECT Id FROM Account WHERE Id IN (SELECT AccountId FROM )",
            1,
        );
        assert_eq!(items, vec![CompletionItem::object(SOBJECTS_PLACEHOLDER)]);
    }

    #[test]
    fn test_outside_any_query() {
        let parsed = parse("SELECT Id FROM Account");
        let analyzer = QueryAnalyzer::new(&parsed);
        let registry = FunctionRegistry::new();
        let ctx = CompletionContext::new(&analyzer, &registry, 0, "Object");
        assert!(from_expression_items(&ctx).is_empty());
    }
}
