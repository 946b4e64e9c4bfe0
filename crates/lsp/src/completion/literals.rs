// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Literal value templates
//!
//! One template per literal family, each tagged with the field type it
//! suits. The whole set is emitted for every field: picking the relevant
//! entries is up to the client, which knows the field's real type.

use soql_lsp_context::ParsedFieldReference;
use soql_lsp_function_registry::{
    DATE_RANGE_LITERALS, FieldType, FunctionRegistry, PARAMETRIC_DATE_RANGE_LITERALS,
};

use crate::completion::item::{CompletionItem, LITERAL_VALUES_FOR_FIELD, SoqlItemContext};

const DATE_TEMPLATE: &str = "${1:${CURRENT_YEAR}}-${2:${CURRENT_MONTH}}-${3:${CURRENT_DATE}}$0";
const DATETIME_TEMPLATE: &str = concat!(
    "${1:${CURRENT_YEAR}}-${2:${CURRENT_MONTH}}-${3:${CURRENT_DATE}}",
    "T${4:${CURRENT_HOUR}}:${5:${CURRENT_MINUTE}}:${6:${CURRENT_SECOND}}Z$0",
);

/// Literal suggestions for the value compared against `field`
pub fn literal_items(
    field: &ParsedFieldReference,
    registry: &FunctionRegistry,
) -> Vec<CompletionItem> {
    let base = SoqlItemContext::for_field(&field.sobject_name, &field.field_name);
    let typed = |types: &[FieldType]| base.clone().with_only_types(types);
    let temporal = [FieldType::Date, FieldType::DateTime];

    let mut items = vec![
        CompletionItem::value("TRUE").with_context(typed(&[FieldType::Boolean])),
        CompletionItem::value("FALSE").with_context(typed(&[FieldType::Boolean])),
        CompletionItem::snippet("nnn", "${1:123}").with_context(typed(&[FieldType::Int])),
        CompletionItem::snippet("nnn.nnn", "${1:123.456}")
            .with_context(typed(&[FieldType::Double])),
        CompletionItem::snippet("ISOCODEnnn.nn", "${1|USD,EUR,JPY,CNY,CHF|}${2:999.99}")
            .with_context(typed(&[FieldType::Currency])),
        CompletionItem::snippet("abc123", "'${1:abc123}'")
            .with_context(typed(&[FieldType::String])),
        CompletionItem::snippet("YYYY-MM-DD", DATE_TEMPLATE)
            .preselected_first()
            .with_context(typed(&[FieldType::Date])),
        CompletionItem::snippet("YYYY-MM-DDThh:mm:ssZ", DATETIME_TEMPLATE)
            .preselected_first()
            .with_context(typed(&[FieldType::DateTime])),
    ];

    items.extend(
        DATE_RANGE_LITERALS
            .iter()
            .map(|literal| CompletionItem::value(*literal).with_context(typed(&temporal))),
    );
    items.extend(PARAMETRIC_DATE_RANGE_LITERALS.iter().map(|literal| {
        let template = format!("{}$0", literal.replacen(":n", ":${1:nn}", 1));
        CompletionItem::snippet(*literal, template).with_context(typed(&temporal))
    }));

    items.push(CompletionItem::constant(LITERAL_VALUES_FOR_FIELD).with_context(base.clone()));

    let forbids_null = field
        .operator
        .as_deref()
        .and_then(|op| registry.get_operator(op))
        .is_some_and(|op| op.not_nullable);
    if !forbids_null {
        items.push(CompletionItem::keyword("NULL").with_context(SoqlItemContext {
            only_nillable: Some(true),
            ..base
        }));
    }
    items
}
