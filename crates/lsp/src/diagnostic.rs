// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Syntax diagnostics
//!
//! Reports the parser's collected syntax errors as LSP diagnostics.
//!
//! ```text
//! text → header padding → parse → SyntaxError → SoqlDiagnostic → lsp Diagnostic
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use soql_lsp::diagnostic::syntax_diagnostics;
//!
//! let diagnostics = syntax_diagnostics("SELECT Id FROM Account WHERE");
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].source.as_deref(), Some("soql"));
//! ```

use lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString, Position, Range};
use soql_grammar::{SyntaxError, parse, parse_header_comments};
use tracing::debug;

pub const DIAGNOSTIC_SOURCE: &str = "soql";

/// Diagnostic code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    SyntaxError,
    Custom(String),
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &str {
        match self {
            DiagnosticCode::SyntaxError => "SOQL-SYNTAX",
            DiagnosticCode::Custom(code) => code,
        }
    }
}

impl From<DiagnosticCode> for NumberOrString {
    fn from(code: DiagnosticCode) -> Self {
        NumberOrString::String(code.as_str().to_string())
    }
}

/// Internal diagnostic before conversion to LSP format
#[derive(Debug, Clone, PartialEq)]
pub struct SoqlDiagnostic {
    pub message: String,
    pub severity: DiagnosticSeverity,
    pub range: Range,
    pub code: Option<DiagnosticCode>,
}

impl SoqlDiagnostic {
    pub fn new(message: impl Into<String>, severity: DiagnosticSeverity, range: Range) -> Self {
        Self {
            message: message.into(),
            severity,
            range,
            code: None,
        }
    }

    pub fn error(message: impl Into<String>, range: Range) -> Self {
        Self::new(message, DiagnosticSeverity::ERROR, range)
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Diagnostic for a syntax error; the range covers the offending token
    pub fn from_syntax_error(error: &SyntaxError) -> Self {
        let line = error.line.saturating_sub(1) as u32;
        let start = error.column as u32;
        let range = Range::new(
            Position::new(line, start),
            Position::new(line, start + error.length as u32),
        );
        Self::error(error.message.clone(), range).with_code(DiagnosticCode::SyntaxError)
    }

    pub fn to_lsp(self) -> Diagnostic {
        Diagnostic {
            range: self.range,
            severity: Some(self.severity),
            code: self.code.map(Into::into),
            source: Some(DIAGNOSTIC_SOURCE.to_string()),
            message: self.message,
            ..Default::default()
        }
    }
}

/// Syntax errors of a query document
///
/// Header comment lines are blanked before parsing, so reported lines match
/// the editor.
pub fn syntax_diagnostics(text: &str) -> Vec<Diagnostic> {
    let document = parse_header_comments(text);
    let parsed = parse(&document.header_padded_text);
    debug!(errors = parsed.errors.len(), "syntax diagnostics");
    parsed
        .errors
        .iter()
        .map(|error| SoqlDiagnostic::from_syntax_error(error).to_lsp())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_query_has_no_diagnostics() {
        assert!(syntax_diagnostics("SELECT Id, Name FROM Account WHERE Name = 'x'").is_empty());
    }

    #[test]
    fn test_error_range_covers_token() {
        let diagnostics = syntax_diagnostics("SELECT Id FROM Account WHERE Name 'x'");
        let diagnostic = &diagnostics[0];
        assert_eq!(diagnostic.severity, Some(DiagnosticSeverity::ERROR));
        assert_eq!(diagnostic.range.start, Position::new(0, 34));
        assert_eq!(diagnostic.range.end, Position::new(0, 37));
        assert_eq!(
            diagnostic.code,
            Some(NumberOrString::String("SOQL-SYNTAX".to_string()))
        );
    }

    #[test]
    fn test_header_comments_shift_lines() {
        let diagnostics = syntax_diagnostics("// saved\n// query\nSELECT FROM Account");
        assert_eq!(diagnostics[0].range.start.line, 2);
        assert_eq!(diagnostics[0].range.start.character, 7);
    }
}
