// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion items
//!
//! Engine-level suggestion model. Items whose concrete values come from the
//! live schema (object names, field names, picklist values) are emitted as
//! placeholders: a reserved label plus a [`SoqlItemContext`] telling the
//! client what to expand them into.

use serde::{Deserialize, Serialize};
use soql_lsp_function_registry::FieldType;

/// Expands to the object names of the org
pub const SOBJECTS_PLACEHOLDER: &str = "__SOBJECTS_PLACEHOLDER";
/// Expands to the fields of `sobjectName`
pub const SOBJECT_FIELDS_PLACEHOLDER: &str = "__SOBJECT_FIELDS_PLACEHOLDER";
/// Expands to the child relationships of `sobjectName`
pub const RELATIONSHIPS_PLACEHOLDER: &str = "__RELATIONSHIPS_PLACEHOLDER";
/// Expands to the fields reachable through `relationshipName` of `sobjectName`
pub const RELATIONSHIP_FIELDS_PLACEHOLDER: &str = "__RELATIONSHIP_FIELDS_PLACEHOLDER";
/// Expands to known values of `fieldName` (e.g. picklist entries)
pub const LITERAL_VALUES_FOR_FIELD: &str = "__LITERAL_VALUES_FOR_FIELD";

pub const UPDATE_TRACKING: &str = "UPDATE TRACKING";
pub const UPDATE_VIEWSTAT: &str = "UPDATE VIEWSTAT";

/// Semantic kind of a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionItemKind {
    Keyword,
    /// Field placeholder
    Field,
    Function,
    Snippet,
    /// Literal value
    Value,
    /// Object or relationship placeholder
    Class,
    Constant,
}

/// Hints for the client-side catalog resolver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoqlItemContext {
    pub sobject_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_types: Option<Vec<FieldType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_aggregatable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_groupable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_sortable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_nillable: Option<bool>,
    /// Field names to rank first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_likely_items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dont_show_relationship_field: Option<bool>,
}

impl SoqlItemContext {
    pub fn for_object(sobject_name: impl Into<String>) -> Self {
        Self {
            sobject_name: sobject_name.into(),
            ..Default::default()
        }
    }

    pub fn for_field(sobject_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            sobject_name: sobject_name.into(),
            field_name: Some(field_name.into()),
            ..Default::default()
        }
    }

    pub fn with_only_types(mut self, types: &[FieldType]) -> Self {
        self.only_types = Some(types.to_vec());
        self
    }
}

/// One finished suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionItemKind,
    /// Snippet template with numbered tab stops (`$1`, `${1:default}`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
    #[serde(default)]
    pub preselect: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soql_context: Option<SoqlItemContext>,
}

impl CompletionItem {
    pub fn new(label: impl Into<String>, kind: CompletionItemKind) -> Self {
        Self {
            label: label.into(),
            kind,
            insert_text: None,
            preselect: false,
            sort_text: None,
            soql_context: None,
        }
    }

    pub fn keyword(label: impl Into<String>) -> Self {
        Self::new(label, CompletionItemKind::Keyword)
    }

    pub fn field(label: impl Into<String>) -> Self {
        Self::new(label, CompletionItemKind::Field)
    }

    pub fn object(label: impl Into<String>) -> Self {
        Self::new(label, CompletionItemKind::Class)
    }

    pub fn value(label: impl Into<String>) -> Self {
        Self::new(label, CompletionItemKind::Value)
    }

    pub fn constant(label: impl Into<String>) -> Self {
        Self::new(label, CompletionItemKind::Constant)
    }

    pub fn snippet(label: impl Into<String>, template: impl Into<String>) -> Self {
        Self::new(label, CompletionItemKind::Snippet).with_insert_text(template)
    }

    /// Function call item: `NAME(...)` inserting `NAME($1)`
    pub fn function(name: &str) -> Self {
        Self::new(format!("{name}(...)"), CompletionItemKind::Function)
            .with_insert_text(format!("{name}($1)"))
    }

    pub fn with_insert_text(mut self, template: impl Into<String>) -> Self {
        self.insert_text = Some(template.into());
        self
    }

    pub fn with_context(mut self, context: SoqlItemContext) -> Self {
        self.soql_context = Some(context);
        self
    }

    /// Pre-select the item and sort it ahead of everything else
    pub fn preselected_first(mut self) -> Self {
        self.sort_text = Some(format!(" {}", self.label));
        self.preselect = true;
        self
    }

    /// Copy of this item under another label, keeping its context
    pub fn sibling(&self, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: CompletionItemKind::Keyword,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_serializes_client_keys() {
        let context = SoqlItemContext {
            only_types: Some(vec![FieldType::Id, FieldType::Reference]),
            dont_show_relationship_field: Some(true),
            ..SoqlItemContext::for_object("Account")
        };
        assert_eq!(
            serde_json::to_value(&context).unwrap(),
            json!({
                "sobjectName": "Account",
                "onlyTypes": ["id", "reference"],
                "dontShowRelationshipField": true
            })
        );
    }

    #[test]
    fn test_function_item() {
        let item = CompletionItem::function("AVG");
        assert_eq!(item.label, "AVG(...)");
        assert_eq!(item.insert_text.as_deref(), Some("AVG($1)"));
        assert_eq!(item.kind, CompletionItemKind::Function);
    }

    #[test]
    fn test_sibling_keeps_context() {
        let item = CompletionItem::keyword("<")
            .with_context(SoqlItemContext::for_field("Account", "AnnualRevenue"));
        let sibling = item.sibling("<=");
        assert_eq!(sibling.label, "<=");
        assert_eq!(sibling.soql_context, item.soql_context);
    }

    #[test]
    fn test_preselected_first_sort_text() {
        let item = CompletionItem::snippet("YYYY-MM-DD", "$0").preselected_first();
        assert!(item.preselect);
        assert_eq!(item.sort_text.as_deref(), Some(" YYYY-MM-DD"));
    }
}
