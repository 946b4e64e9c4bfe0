// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Runs the scripted YAML completion cases

use std::path::PathBuf;

use soql_lsp::{CompletionEngine, CompletionRenderer};
use soql_lsp_test_utils::{parse_test_file, validate_completion};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn test_completion_cases() {
    let cases = parse_test_file(&fixtures_dir().join("completion_cases.yaml")).unwrap();

    let mut failures = Vec::new();
    for case in &cases {
        let (text, cursor) = case.text_and_cursor().unwrap();
        let engine = CompletionEngine::new(case.predictor());
        let items = match engine.complete(&text, cursor) {
            Ok(items) => CompletionRenderer::render(&items),
            Err(e) => {
                failures.push(format!("{}: {e}", case.description));
                continue;
            }
        };
        if let Err(e) = validate_completion(&items, case) {
            failures.push(format!("{}: {e}", case.description));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}
