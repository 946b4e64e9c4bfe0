// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use crate::catalog::{functions, operators};
use crate::{SoqlFunction, SoqlOperator};

/// Registry of builtin SOQL functions and comparison operators
///
/// Built once and shared read-only by every completion request.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    functions: Vec<SoqlFunction>,
    operators: Vec<SoqlOperator>,
}

impl FunctionRegistry {
    /// Create a new registry with all builtin functions and operators loaded
    ///
    /// # Examples
    ///
    /// ```rust
    /// use soql_lsp_function_registry::FunctionRegistry;
    ///
    /// let registry = FunctionRegistry::new();
    /// assert!(registry.has_function("COUNT"));
    /// ```
    pub fn new() -> Self {
        Self {
            functions: functions::all_functions(),
            operators: operators::all_operators(),
        }
    }

    /// All builtin functions, in catalog order
    pub fn functions(&self) -> &[SoqlFunction] {
        &self.functions
    }

    /// Lookup a function by name (case-insensitive)
    pub fn get_function(&self, name: &str) -> Option<&SoqlFunction> {
        self.functions
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.get_function(name).is_some()
    }

    pub fn operators(&self) -> &[SoqlOperator] {
        &self.operators
    }

    /// Lookup an operator by its source text
    ///
    /// Keywords match case-insensitively and runs of whitespace inside
    /// multi-word operators are ignored, so `not   in` finds `NOT IN`.
    pub fn get_operator(&self, text: &str) -> Option<&SoqlOperator> {
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        self.operators
            .iter()
            .find(|op| op.name.eq_ignore_ascii_case(&normalized))
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldType;

    #[test]
    fn test_get_function_case_insensitive() {
        let registry = FunctionRegistry::new();

        let upper = registry.get_function("COUNT");
        let lower = registry.get_function("count");
        let mixed = registry.get_function("ConvertCurrency");

        assert!(upper.is_some());
        assert_eq!(upper, lower);
        assert_eq!(mixed.map(|f| f.name), Some("convertCurrency"));
    }

    #[test]
    fn test_has_function() {
        let registry = FunctionRegistry::new();

        assert!(registry.has_function("CALENDAR_YEAR"));
        assert!(!registry.has_function("NONEXISTENT"));
    }

    #[test]
    fn test_get_operator_normalizes_text() {
        let registry = FunctionRegistry::new();

        assert_eq!(registry.get_operator("like").map(|o| o.name), Some("LIKE"));
        assert_eq!(
            registry.get_operator("not  in").map(|o| o.name),
            Some("NOT IN")
        );
        assert!(registry.get_operator("<=").unwrap().not_nullable);
        assert!(registry.get_operator("~").is_none());
    }

    #[test]
    fn test_operator_types() {
        let registry = FunctionRegistry::new();
        let lt = registry.get_operator("<").unwrap();
        let types = lt.types.as_ref().unwrap();
        assert!(types.contains(&FieldType::Date));
        assert!(!types.contains(&FieldType::Boolean));
    }
}
