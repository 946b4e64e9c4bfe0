// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! SOQL comparison operators

use crate::FieldType;

/// A comparison operator usable in WHERE and HAVING conditions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoqlOperator {
    /// Canonical spelling (keywords uppercase, multi-word joined by one space)
    pub name: &'static str,
    /// Field types that may appear on the left of this operator, `None` for any
    pub types: Option<Vec<FieldType>>,
    /// Comparisons with this operator never match null values
    pub not_nullable: bool,
}

impl SoqlOperator {
    fn new(name: &'static str, types: Option<Vec<FieldType>>, not_nullable: bool) -> Self {
        Self {
            name,
            types,
            not_nullable,
        }
    }
}

/// Get all comparison operators
pub fn all_operators() -> Vec<SoqlOperator> {
    let ordered: Vec<FieldType> = [
        FieldType::NUMERIC,
        FieldType::TEXT,
        FieldType::TEMPORAL,
        &[FieldType::Id, FieldType::Reference],
    ]
    .concat();
    let like: Vec<FieldType> = [FieldType::TEXT, &[FieldType::Id, FieldType::Reference]].concat();
    let multi = vec![FieldType::MultiPicklist];

    vec![
        SoqlOperator::new("=", None, false),
        SoqlOperator::new("!=", None, false),
        SoqlOperator::new("<>", None, false),
        SoqlOperator::new("<", Some(ordered.clone()), true),
        SoqlOperator::new("<=", Some(ordered.clone()), true),
        SoqlOperator::new(">", Some(ordered.clone()), true),
        SoqlOperator::new(">=", Some(ordered), true),
        SoqlOperator::new("LIKE", Some(like), true),
        SoqlOperator::new("IN", None, false),
        SoqlOperator::new("NOT IN", None, false),
        SoqlOperator::new("INCLUDES", Some(multi.clone()), true),
        SoqlOperator::new("EXCLUDES", Some(multi), true),
    ]
}
