// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Syntax diagnostics over whole documents

use lsp_types::DiagnosticSeverity;
use soql_lsp::syntax_diagnostics;
use soql_lsp::diagnostic::DIAGNOSTIC_SOURCE;
use soql_lsp_test_utils::SoqlFixtures;

#[test]
fn test_fixture_queries_are_clean() {
    for query in SoqlFixtures::all() {
        assert!(syntax_diagnostics(query).is_empty(), "{query}");
    }
}

#[test]
fn test_error_on_later_line() {
    let diagnostics = syntax_diagnostics("SELECT Id\nFROM Account\nWHERE Name 'x'");
    assert!(!diagnostics.is_empty());

    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.range.start.line, 2);
    assert_eq!(diagnostic.severity, Some(DiagnosticSeverity::ERROR));
    assert_eq!(diagnostic.source.as_deref(), Some(DIAGNOSTIC_SOURCE));
}

#[test]
fn test_incomplete_query_reports_errors() {
    assert!(!syntax_diagnostics("SELECT Id FROM").is_empty());
}
