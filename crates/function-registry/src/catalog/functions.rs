// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! SOQL builtin function definitions

use crate::FieldType;

/// A builtin SOQL function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoqlFunction {
    pub name: &'static str,
    /// Accepted argument field types, `None` when any field is accepted
    pub types: Option<Vec<FieldType>>,
    pub is_aggregate: bool,
    pub description: Option<&'static str>,
}

impl SoqlFunction {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            types: None,
            is_aggregate: false,
            description: None,
        }
    }

    pub fn aggregate(mut self) -> Self {
        self.is_aggregate = true;
        self
    }

    pub fn with_types(mut self, types: &[FieldType]) -> Self {
        self.types = Some(types.to_vec());
        self
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Check if a field of type `ty` can be passed to this function
    pub fn accepts(&self, ty: FieldType) -> bool {
        self.types.as_ref().is_none_or(|types| types.contains(&ty))
    }
}

/// Get all builtin SOQL functions, aggregates first
pub fn all_functions() -> Vec<SoqlFunction> {
    let numeric = FieldType::NUMERIC;
    let comparable: Vec<FieldType> = [
        FieldType::NUMERIC,
        FieldType::TEXT,
        FieldType::TEMPORAL,
        &[FieldType::Id, FieldType::Reference],
    ]
    .concat();
    let temporal = &[FieldType::Date, FieldType::DateTime];

    vec![
        // Aggregate functions
        SoqlFunction::new("AVG")
            .aggregate()
            .with_types(numeric)
            .with_description("Average value of a numeric field"),
        SoqlFunction::new("COUNT")
            .aggregate()
            .with_description("Number of rows matching the query"),
        SoqlFunction::new("COUNT_DISTINCT")
            .aggregate()
            .with_description("Number of distinct non-null field values"),
        SoqlFunction::new("MIN")
            .aggregate()
            .with_types(&comparable)
            .with_description("Minimum value of a field"),
        SoqlFunction::new("MAX")
            .aggregate()
            .with_types(&comparable)
            .with_description("Maximum value of a field"),
        SoqlFunction::new("SUM")
            .aggregate()
            .with_types(numeric)
            .with_description("Total sum of a numeric field"),
        // Date functions
        SoqlFunction::new("CALENDAR_MONTH").with_types(temporal),
        SoqlFunction::new("CALENDAR_QUARTER").with_types(temporal),
        SoqlFunction::new("CALENDAR_YEAR").with_types(temporal),
        SoqlFunction::new("DAY_IN_MONTH").with_types(temporal),
        SoqlFunction::new("DAY_IN_WEEK").with_types(temporal),
        SoqlFunction::new("DAY_IN_YEAR").with_types(temporal),
        SoqlFunction::new("DAY_ONLY").with_types(&[FieldType::DateTime]),
        SoqlFunction::new("FISCAL_MONTH").with_types(temporal),
        SoqlFunction::new("FISCAL_QUARTER").with_types(temporal),
        SoqlFunction::new("FISCAL_YEAR").with_types(temporal),
        SoqlFunction::new("HOUR_IN_DAY").with_types(&[FieldType::DateTime]),
        SoqlFunction::new("WEEK_IN_MONTH").with_types(temporal),
        SoqlFunction::new("WEEK_IN_YEAR").with_types(temporal),
        // Formatting and conversion
        SoqlFunction::new("FORMAT")
            .with_types(&[numeric, temporal, &[FieldType::Time]].concat())
            .with_description("Localized formatting of number and date fields"),
        SoqlFunction::new("convertCurrency")
            .with_types(&[FieldType::Currency])
            .with_description("Currency amount in the user's currency"),
        SoqlFunction::new("toLabel")
            .with_types(&[FieldType::Picklist, FieldType::MultiPicklist])
            .with_description("Translated picklist label"),
        SoqlFunction::new("GROUPING")
            .with_description("Whether a row is a ROLLUP or CUBE subtotal"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_names_are_unique() {
        let functions = all_functions();
        for (i, f) in functions.iter().enumerate() {
            assert!(
                functions[i + 1..]
                    .iter()
                    .all(|other| !other.name.eq_ignore_ascii_case(f.name)),
                "duplicate function {}",
                f.name
            );
        }
    }

    #[test]
    fn test_aggregates() {
        let aggregates: Vec<_> = all_functions()
            .into_iter()
            .filter(|f| f.is_aggregate)
            .map(|f| f.name)
            .collect();
        assert_eq!(
            aggregates,
            vec!["AVG", "COUNT", "COUNT_DISTINCT", "MIN", "MAX", "SUM"]
        );
    }

    #[test]
    fn test_untyped_function_accepts_anything() {
        let count = SoqlFunction::new("COUNT").aggregate();
        assert!(count.accepts(FieldType::Base64));
        let sum = SoqlFunction::new("SUM").with_types(FieldType::NUMERIC);
        assert!(sum.accepts(FieldType::Percent));
        assert!(!sum.accepts(FieldType::String));
    }
}
