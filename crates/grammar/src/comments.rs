// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Header comments
//!
//! Query documents may start with `//` comment lines (editor metadata).
//! The lexer does not understand them, so they are blanked out before
//! parsing while keeping line numbers aligned with the editor.

/// A query document split into its header comments and query text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderComments {
    /// Header comment lines, including their line breaks
    pub header_comments: String,
    /// Query text following the header
    pub soql_text: String,
    /// Full text with every header comment line replaced by an empty line
    pub header_padded_text: String,
    pub comment_line_count: usize,
}

/// Split leading `//` comment lines off the document
///
/// Blank lines between header comments belong to the header. Parsing stops
/// at the first line that is neither blank nor a comment.
///
/// # Examples
///
/// ```
/// use soql_grammar::parse_header_comments;
///
/// let doc = parse_header_comments("// saved query\nSELECT Id FROM Account");
/// assert_eq!(doc.comment_line_count, 1);
/// assert_eq!(doc.soql_text, "SELECT Id FROM Account");
/// assert_eq!(doc.header_padded_text, "\nSELECT Id FROM Account");
/// ```
pub fn parse_header_comments(text: &str) -> HeaderComments {
    let mut header_end = 0;
    let mut comment_line_count = 0;
    let mut padded = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches(['\r', '\n']);
        let trimmed = content.trim_start();
        if trimmed.starts_with("//") {
            comment_line_count += 1;
        } else if !trimmed.is_empty() {
            break;
        }
        padded.push_str(&line[content.len()..]);
        header_end += line.len();
    }

    // Only count a header when it actually contains a comment
    if comment_line_count == 0 {
        return HeaderComments {
            header_comments: String::new(),
            soql_text: text.to_string(),
            header_padded_text: text.to_string(),
            comment_line_count: 0,
        };
    }

    padded.push_str(&text[header_end..]);
    HeaderComments {
        header_comments: text[..header_end].to_string(),
        soql_text: text[header_end..].to_string(),
        header_padded_text: padded,
        comment_line_count,
    }
}
