// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Test case validation logic
//!
//! Checks rendered completion items against a case's label expectations.

use thiserror::Error;

use crate::test_case_parser::TestCase;

/// Validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Too few completion items: expected at least {expected}, got {actual}")]
    TooFewItems { expected: usize, actual: usize },

    #[error("Missing required item: {0}")]
    MissingItem(String),

    #[error("Unexpected item: {0}")]
    UnexpectedItem(String),
}

/// Validate completion results against a test case
pub fn validate_completion(
    actual: &[lsp_types::CompletionItem],
    case: &TestCase,
) -> Result<(), ValidationError> {
    let expected = &case.expected;
    if let Some(min) = expected.min_items.filter(|min| actual.len() < *min) {
        return Err(ValidationError::TooFewItems {
            expected: min,
            actual: actual.len(),
        });
    }

    let has_label = |label: &str| actual.iter().any(|item| item.label == label);
    if let Some(missing) = expected.contains.iter().find(|label| !has_label(label)) {
        return Err(ValidationError::MissingItem(missing.clone()));
    }
    if let Some(unexpected) = expected.excludes.iter().find(|label| has_label(label)) {
        return Err(ValidationError::UnexpectedItem(unexpected.clone()));
    }
    Ok(())
}
