// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Rule-based suggestions
//!
//! Rule candidates stand for open-ended positions (a field, an object, a
//! literal) the grammar cannot enumerate. Each candidate is first classified
//! into a [`RuleSite`] from its rule, the rule that invoked it and the cursor
//! position, then every site emits placeholder items with the context the
//! client needs to expand them.

use soql_grammar::{RuleCandidate, RuleKind, TokenKind};
use soql_lsp_context::{is_cursor_after, search_token_before_cursor};
use soql_lsp_function_registry::FieldType;

use crate::completion::context::CompletionContext;
use crate::completion::from_expr::from_expression_items;
use crate::completion::item::{
    CompletionItem, RELATIONSHIP_FIELDS_PLACEHOLDER, SOBJECT_FIELDS_PLACEHOLDER, SoqlItemContext,
    UPDATE_TRACKING, UPDATE_VIEWSTAT,
};
use crate::completion::literals::literal_items;

/// Where a rule candidate sits, as far as suggestions are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSite {
    /// `UPDATE |` at the end of a query
    UpdateStats,
    /// `FROM |`
    FromExprs,
    /// Selected field of a semi-join: `WHERE Id IN (SELECT |`
    SemiJoinField,
    /// Start of a select-list column: `SELECT |`
    SelectColumnStart,
    /// Argument of a function column: `SELECT AVG(|`
    SelectFunctionArgument,
    /// `GROUP BY |`
    GroupByField,
    /// `ORDER BY |`
    OrderByField,
    /// Left side of a filter condition: `WHERE |`
    FilterIdentifier,
    /// Right side of a filter condition: `WHERE Name = |`
    Literal,
}

impl RuleSite {
    /// Classify `candidate`, `None` when it has nothing to suggest
    pub fn classify(ctx: &CompletionContext<'_>, candidate: &RuleCandidate) -> Option<Self> {
        let at_start = candidate.start_token_index == ctx.cursor_index;
        let parent = candidate.parent_rule();
        let in_having = candidate.is_inside(RuleKind::HavingClause);

        match candidate.rule {
            RuleKind::UpdateStatsClause if at_start => Some(Self::UpdateStats),
            RuleKind::FromExprs if at_start => Some(Self::FromExprs),
            RuleKind::Field => match parent? {
                RuleKind::SemiJoin => Some(Self::SemiJoinField),
                RuleKind::SelectExpr if at_start => Some(Self::SelectColumnStart),
                RuleKind::SelectExpr
                    if is_cursor_after(
                        ctx.tokens(),
                        ctx.cursor_index,
                        &[&[TokenKind::Identifier, TokenKind::Count], &[TokenKind::LParen]],
                    ) =>
                {
                    Some(Self::SelectFunctionArgument)
                }
                RuleKind::GroupByExprs if at_start => Some(Self::GroupByField),
                RuleKind::OrderByField => Some(Self::OrderByField),
                _ => None,
            },
            RuleKind::Identifier
                if at_start
                    && matches!(parent, Some(RuleKind::WhereExpr | RuleKind::DistanceExpr))
                    && !in_having =>
            {
                Some(Self::FilterIdentifier)
            }
            RuleKind::LiteralValue | RuleKind::LikeLiteral if !in_having => Some(Self::Literal),
            _ => None,
        }
    }

    /// Items suggested at this site
    pub fn items(self, ctx: &CompletionContext<'_>) -> Vec<CompletionItem> {
        let fields = || {
            CompletionItem::field(SOBJECT_FIELDS_PLACEHOLDER)
                .with_context(SoqlItemContext::for_object(&ctx.sobject_name))
        };
        let relationship_fields = || {
            CompletionItem::field(RELATIONSHIP_FIELDS_PLACEHOLDER).with_context(SoqlItemContext {
                relationship_name: ctx.relationship_name().map(str::to_string),
                ..SoqlItemContext::for_object(ctx.parent_sobject().unwrap_or_default())
            })
        };

        match self {
            Self::UpdateStats => vec![
                CompletionItem::keyword(UPDATE_TRACKING),
                CompletionItem::keyword(UPDATE_VIEWSTAT),
            ],
            Self::FromExprs => from_expression_items(ctx),
            Self::SemiJoinField => {
                let context = SoqlItemContext {
                    only_types: Some(vec![FieldType::Id, FieldType::Reference]),
                    dont_show_relationship_field: Some(true),
                    ..SoqlItemContext::for_object(&ctx.sobject_name)
                };
                vec![CompletionItem::field(SOBJECT_FIELDS_PLACEHOLDER).with_context(context)]
            }
            Self::SelectColumnStart if ctx.is_nested() => vec![relationship_fields()],
            Self::SelectColumnStart => {
                let mut items = vec![fields()];
                items.extend(
                    ctx.registry
                        .functions()
                        .iter()
                        .map(|function| CompletionItem::function(function.name)),
                );
                items.push(CompletionItem::snippet(
                    "(SELECT ... FROM ...)",
                    "(SELECT $2 FROM $1)",
                ));
                items
            }
            Self::SelectFunctionArgument => {
                let mut context = SoqlItemContext::for_object(&ctx.sobject_name);
                let function = search_token_before_cursor(
                    ctx.tokens(),
                    ctx.cursor_index,
                    &[TokenKind::Identifier, TokenKind::Count],
                )
                .and_then(|token| ctx.registry.get_function(&token.text));
                if let Some(function) = function {
                    context.only_aggregatable = Some(function.is_aggregate);
                    context.only_types = function.types.clone();
                }
                vec![CompletionItem::field(SOBJECT_FIELDS_PLACEHOLDER).with_context(context)]
            }
            Self::GroupByField => {
                let (selected, grouped) = ctx
                    .innermost_scope()
                    .map(|scope| {
                        (
                            scope.selected_fields.as_slice(),
                            scope.group_by_fields.as_slice(),
                        )
                    })
                    .unwrap_or_default();
                let missing: Vec<String> = selected
                    .iter()
                    .filter(|field| !grouped.iter().any(|g| g.eq_ignore_ascii_case(field)))
                    .cloned()
                    .collect();
                vec![CompletionItem::field(SOBJECT_FIELDS_PLACEHOLDER).with_context(
                    SoqlItemContext {
                        only_groupable: Some(true),
                        most_likely_items: (!missing.is_empty()).then_some(missing),
                        ..SoqlItemContext::for_object(&ctx.sobject_name)
                    },
                )]
            }
            Self::OrderByField => {
                let mut item = if ctx.is_nested() {
                    relationship_fields()
                } else {
                    fields()
                };
                if let Some(context) = item.soql_context.as_mut() {
                    context.only_sortable = Some(true);
                }
                vec![item]
            }
            Self::FilterIdentifier => vec![fields()],
            Self::Literal => ctx
                .where_field()
                .map(|field| literal_items(&field, ctx.registry))
                .unwrap_or_default(),
        }
    }
}

/// Placeholder items for the raw rule candidates
pub fn rule_items(
    ctx: &CompletionContext<'_>,
    candidates: &[RuleCandidate],
) -> Vec<CompletionItem> {
    candidates
        .iter()
        .filter_map(|candidate| RuleSite::classify(ctx, candidate))
        .flat_map(|site| site.items(ctx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soql_grammar::parse;
    use soql_lsp_context::QueryAnalyzer;
    use soql_lsp_function_registry::FunctionRegistry;

    use crate::completion::item::CompletionItemKind;

    const SELECT_EXPR: &[RuleKind] = &[
        RuleKind::InnerQuery,
        RuleKind::SelectExprs,
        RuleKind::SelectExpr,
    ];

    const WHERE_EXPR: &[RuleKind] = &[
        RuleKind::WhereClause,
        RuleKind::WhereExprs,
        RuleKind::WhereExpr,
    ];

    fn rule_at(rule: RuleKind, path: &[RuleKind], start: usize) -> RuleCandidate {
        RuleCandidate {
            rule,
            rule_path: path.to_vec(),
            start_token_index: start,
        }
    }

    /// Run `check` with a context whose cursor is at the end of `text`
    fn with_context_at_end(text: &str, check: impl FnOnce(&CompletionContext<'_>, usize)) {
        let parsed = parse(text);
        let analyzer = QueryAnalyzer::new(&parsed);
        let registry = FunctionRegistry::new();
        let eof = parsed.tokens.len() - 1;
        let ctx = CompletionContext::new(&analyzer, &registry, eof, "Object");
        check(&ctx, eof);
    }

    #[test]
    fn test_update_stats_only_at_rule_start() {
        with_context_at_end("SELECT Id FROM Account UPDATE ", |ctx, at| {
            let update =
                |start| rule_at(RuleKind::UpdateStatsClause, &[RuleKind::InnerQuery], start);

            let items = rule_items(ctx, &[update(at)]);
            let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
            assert_eq!(labels, vec!["UPDATE TRACKING", "UPDATE VIEWSTAT"]);

            assert!(rule_items(ctx, &[update(at - 2)]).is_empty());
        });
    }

    #[test]
    fn test_select_column_start_top_level() {
        with_context_at_end("SELECT ", |ctx, at| {
            let candidate = rule_at(RuleKind::Field, SELECT_EXPR, at);
            assert_eq!(
                RuleSite::classify(ctx, &candidate),
                Some(RuleSite::SelectColumnStart)
            );

            let items = rule_items(ctx, &[candidate]);
            assert_eq!(items[0].label, SOBJECT_FIELDS_PLACEHOLDER);
            assert_eq!(items[0].soql_context.as_ref().unwrap().sobject_name, "Object");
            assert!(items.iter().any(|i| i.label == "COUNT(...)"));
            let subquery = items.last().unwrap();
            assert_eq!(subquery.kind, CompletionItemKind::Snippet);
            assert_eq!(subquery.insert_text.as_deref(), Some("(SELECT $2 FROM $1)"));
        });
    }

    #[test]
    fn test_function_argument_restricted_by_function() {
        with_context_at_end("SELECT AVG(", |ctx, at| {
            // the column started at the function name
            let candidate = rule_at(RuleKind::Field, &[RuleKind::SelectExpr], at - 2);
            assert_eq!(
                RuleSite::classify(ctx, &candidate),
                Some(RuleSite::SelectFunctionArgument)
            );
            let items = rule_items(ctx, &[candidate]);
            let context = items[0].soql_context.as_ref().unwrap();
            assert_eq!(context.only_aggregatable, Some(true));
            assert!(context.only_types.as_ref().unwrap().contains(&FieldType::Double));
        });
    }

    #[test]
    fn test_function_argument_unknown_function() {
        with_context_at_end("SELECT FOO(", |ctx, at| {
            let candidate = rule_at(RuleKind::Field, &[RuleKind::SelectExpr], at - 2);
            let items = rule_items(ctx, &[candidate]);
            assert_eq!(items[0].soql_context, Some(SoqlItemContext::for_object("Object")));
        });
    }

    #[test]
    fn test_semi_join_field() {
        with_context_at_end("SELECT Id FROM Account WHERE Id IN (SELECT ", |ctx, at| {
            let candidate = rule_at(
                RuleKind::Field,
                &[RuleKind::InList, RuleKind::SemiJoin],
                at,
            );
            let items = rule_items(ctx, &[candidate]);
            let context = items[0].soql_context.as_ref().unwrap();
            assert_eq!(context.only_types, Some(vec![FieldType::Id, FieldType::Reference]));
            assert_eq!(context.dont_show_relationship_field, Some(true));
        });
    }

    #[test]
    fn test_group_by_ranks_missing_selected_fields() {
        let text = "SELECT Name, Industry, Type FROM Account GROUP BY industry, ";
        with_context_at_end(text, |ctx, at| {
            let candidate = rule_at(
                RuleKind::Field,
                &[RuleKind::GroupByClause, RuleKind::GroupByExprs],
                at,
            );
            let items = rule_items(ctx, &[candidate]);
            let context = items[0].soql_context.as_ref().unwrap();
            assert_eq!(context.sobject_name, "Account");
            assert_eq!(context.only_groupable, Some(true));
            assert_eq!(
                context.most_likely_items,
                Some(vec!["Name".to_string(), "Type".to_string()])
            );
        });
    }

    #[test]
    fn test_order_by_in_child_query_uses_relationship() {
        let parsed = parse("SELECT Id, (SELECT Id FROM Contacts ORDER BY ) FROM Account");
        let analyzer = QueryAnalyzer::new(&parsed);
        let registry = FunctionRegistry::new();
        let at = parsed
            .tokens
            .iter()
            .find(|t| t.kind == TokenKind::By)
            .map(|t| t.index + 1)
            .unwrap();
        let ctx = CompletionContext::new(&analyzer, &registry, at, "Object");
        let candidate = rule_at(
            RuleKind::Field,
            &[RuleKind::OrderByExpr, RuleKind::OrderByField],
            at,
        );
        let items = rule_items(&ctx, &[candidate]);

        assert_eq!(items[0].label, RELATIONSHIP_FIELDS_PLACEHOLDER);
        let context = items[0].soql_context.as_ref().unwrap();
        assert_eq!(context.sobject_name, "Account");
        assert_eq!(context.relationship_name.as_deref(), Some("Contacts"));
        assert_eq!(context.only_sortable, Some(true));
    }

    #[test]
    fn test_filter_identifier_outside_having() {
        with_context_at_end("SELECT Id FROM Account WHERE ", |ctx, at| {
            let candidate = rule_at(RuleKind::Identifier, WHERE_EXPR, at);
            let items = rule_items(ctx, &[candidate]);
            assert_eq!(
                items,
                vec![
                    CompletionItem::field(SOBJECT_FIELDS_PLACEHOLDER)
                        .with_context(SoqlItemContext::for_object("Account"))
                ]
            );

            let in_having = rule_at(
                RuleKind::Identifier,
                &[RuleKind::HavingClause, RuleKind::WhereExpr],
                at,
            );
            assert_eq!(RuleSite::classify(ctx, &in_having), None);
        });
    }

    #[test]
    fn test_identifier_in_distance_expression() {
        with_context_at_end("SELECT Id FROM Warehouse__c WHERE DISTANCE(", |ctx, at| {
            let distance = [RuleKind::WhereExpr, RuleKind::DistanceExpr];
            let candidate = rule_at(RuleKind::Identifier, &distance, at);
            assert_eq!(
                RuleSite::classify(ctx, &candidate),
                Some(RuleSite::FilterIdentifier)
            );
            assert_eq!(
                rule_items(ctx, &[candidate]),
                vec![
                    CompletionItem::field(SOBJECT_FIELDS_PLACEHOLDER)
                        .with_context(SoqlItemContext::for_object("Warehouse__c"))
                ]
            );

            let in_having = rule_at(
                RuleKind::Identifier,
                &[RuleKind::HavingClause, RuleKind::WhereExpr, RuleKind::DistanceExpr],
                at,
            );
            assert_eq!(RuleSite::classify(ctx, &in_having), None);

            // only where the distance expression starts
            let inside = rule_at(RuleKind::Identifier, &distance, at - 2);
            assert_eq!(RuleSite::classify(ctx, &inside), None);
        });
    }

    #[test]
    fn test_literal_site() {
        with_context_at_end("SELECT Id FROM Account WHERE Name = ", |ctx, at| {
            let candidate = rule_at(RuleKind::LiteralValue, &[RuleKind::WhereExpr], at);
            let items = rule_items(ctx, &[candidate]);
            assert!(items.iter().any(|i| i.label == "NULL"));
            assert!(items.iter().all(|i| {
                i.soql_context.as_ref().and_then(|c| c.field_name.as_deref()) == Some("Name")
            }));
        });
    }

    #[test]
    fn test_literal_in_having_ignored() {
        let text = "SELECT Name FROM Account GROUP BY Name HAVING COUNT(Id) > ";
        with_context_at_end(text, |ctx, at| {
            let candidate = rule_at(
                RuleKind::LiteralValue,
                &[RuleKind::HavingClause, RuleKind::WhereExpr],
                at,
            );
            assert!(rule_items(ctx, &[candidate]).is_empty());
        });
    }
}
