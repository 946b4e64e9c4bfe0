// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for the SOQL completion engine
//!
//! This crate provides common testing components including:
//! - A scripted grammar predictor
//! - Cursor-marker fixtures and sample queries
//! - YAML completion cases and their validation
//! - Assertions over rendered completion items

pub mod assertions;
pub mod fixtures;
pub mod mock_predictor;
pub mod test_case_parser;
pub mod test_case_validator;

// Re-exports for convenience
pub use assertions::CompletionAssertions;
pub use fixtures::{CURSOR_MARKER, SoqlFixtures, split_cursor};
pub use mock_predictor::{MockPredictor, MockPredictorBuilder, RuleStart};
pub use test_case_parser::{ParseError, TestCase, parse_test_content, parse_test_file};
pub use test_case_validator::{ValidationError, validate_completion};
