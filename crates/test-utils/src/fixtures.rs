// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Test fixtures and sample SOQL queries

use soql_lsp_context::CursorPosition;

/// Marks the cursor in test inputs
pub const CURSOR_MARKER: char = '|';

/// Remove the cursor marker and return the text with the 1-based cursor
///
/// Returns `None` when the text has no marker.
///
/// ```
/// use soql_lsp_test_utils::split_cursor;
///
/// let (text, cursor) = split_cursor("SELECT Id\nFROM |").unwrap();
/// assert_eq!(text, "SELECT Id\nFROM ");
/// assert_eq!((cursor.line, cursor.column), (2, 6));
/// ```
pub fn split_cursor(marked: &str) -> Option<(String, CursorPosition)> {
    let offset = marked.find(CURSOR_MARKER)?;
    let before = &marked[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;

    let mut text = String::with_capacity(marked.len());
    text.push_str(before);
    text.push_str(&marked[offset + CURSOR_MARKER.len_utf8()..]);
    Some((text, CursorPosition::new(line, column)))
}

/// Sample SOQL queries for testing
pub struct SoqlFixtures;

impl SoqlFixtures {
    pub const fn simple_select() -> &'static str {
        "SELECT Id, Name FROM Account"
    }

    pub const fn select_with_where() -> &'static str {
        "SELECT Id, Name FROM Account WHERE Name LIKE 'Acme%' AND AnnualRevenue > 1000"
    }

    pub const fn child_subquery() -> &'static str {
        "SELECT Id, (SELECT LastName FROM Contacts) FROM Account"
    }

    pub const fn semi_join() -> &'static str {
        "SELECT Id FROM Account \
         WHERE Id IN (SELECT AccountId FROM Opportunity WHERE IsClosed = false)"
    }

    pub const fn aggregate() -> &'static str {
        "SELECT Industry, COUNT(Id) FROM Account GROUP BY Industry HAVING COUNT(Id) > 1"
    }

    pub const fn date_filter() -> &'static str {
        "SELECT Id FROM Opportunity WHERE CloseDate = LAST_N_DAYS:30 \
         ORDER BY CloseDate DESC LIMIT 10"
    }

    /// A larger query mixing every clause, for benchmarks
    pub const fn complex() -> &'static str {
        "SELECT Id, Name, Owner.Name, (SELECT LastName, Email FROM Contacts ORDER BY LastName) \
         FROM Account \
         WHERE Industry IN ('Energy', 'Media') AND Id NOT IN (SELECT AccountId FROM Case) \
         AND CreatedDate > 2024-01-01T00:00:00Z \
         ORDER BY Name ASC NULLS LAST LIMIT 100 OFFSET 10"
    }

    pub fn all() -> Vec<&'static str> {
        vec![
            Self::simple_select(),
            Self::select_with_where(),
            Self::child_subquery(),
            Self::semi_join(),
            Self::aggregate(),
            Self::date_filter(),
            Self::complex(),
        ]
    }
}
