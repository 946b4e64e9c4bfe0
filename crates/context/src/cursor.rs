// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Cursor token resolution
//!
//! Maps an editor cursor to the index of the token completion should be
//! computed for:
//!
//! ```text
//! SELECT id| FROM x    -> `id`   (cursor touches the identifier: keep completing it)
//! SELECT id |FROM x    -> `FROM` (cursor starts a new position)
//! SELECT id   | FROM x -> `FROM` (inside whitespace: the token after the run)
//! ```

use serde::{Deserialize, Serialize};
use soql_grammar::{TokenKind, TokenStream};

use crate::ContextError;

/// Cursor position, 1-based line and 1-based column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Convert a 0-based LSP position into `text`
    ///
    /// LSP counts `character` in UTF-16 code units while token columns count
    /// characters, so the offset is re-measured against the cursor's line.
    /// An offset inside a surrogate pair lands after that character.
    pub fn from_lsp_utf16(text: &str, line: u32, character: u32) -> Self {
        let units = character as usize;
        let column = line_text(text, line as usize).map_or(units, |content| {
            let mut consumed = 0;
            content
                .chars()
                .take_while(|c| {
                    let inside = consumed < units;
                    consumed += c.len_utf16();
                    inside
                })
                .count()
        });
        Self {
            line: line as usize + 1,
            column: column + 1,
        }
    }
}

/// Text of the 0-based `line`, without its line break
///
/// `\r\n`, `\n` and a lone `\r` each end a line, as in the lexer.
fn line_text(text: &str, line: usize) -> Option<&str> {
    let mut rest = text;
    for _ in 0..line {
        let end = rest.find(['\n', '\r'])?;
        let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + width..];
    }
    Some(rest.find(['\n', '\r']).map_or(rest, |end| &rest[..end]))
}

/// Find the token index completion should target for `cursor`
///
/// # Errors
///
/// Returns [`ContextError::CursorNotFound`] when no token covers the cursor,
/// which means the token stream does not describe the document the cursor
/// belongs to.
///
/// # Examples
///
/// ```
/// use soql_grammar::tokenize;
/// use soql_lsp_context::{CursorPosition, find_cursor_token_index};
///
/// let tokens = tokenize("SELECT id FROM x");
/// // cursor right after `id`
/// let index = find_cursor_token_index(&tokens, CursorPosition::new(1, 10)).unwrap();
/// assert_eq!(tokens[index].text, "id");
/// ```
pub fn find_cursor_token_index(
    tokens: &TokenStream,
    cursor: CursorPosition,
) -> Result<usize, ContextError> {
    if tokens.is_empty() {
        return Err(ContextError::EmptyTokenStream);
    }

    let cursor_col = cursor.column.saturating_sub(1);
    for (i, token) in tokens.iter().enumerate() {
        let covers = if token.kind == TokenKind::Eof {
            // EOF has no text: it covers everything from its column onwards
            token.line == cursor.line && token.column <= cursor_col
        } else {
            let end_line = token.end_line();
            end_line > cursor.line || (end_line == cursor.line && token.end_column() > cursor_col)
        };
        if !covers {
            continue;
        }

        let at_token_start = token.line == cursor.line && token.column == cursor_col;
        if i > 0 && at_token_start && tokens[i - 1].ends_with_word_char() {
            return Ok(i - 1);
        }
        if token.kind == TokenKind::Whitespace {
            return Ok(i + 1);
        }
        return Ok(i);
    }

    Err(ContextError::CursorNotFound {
        line: cursor.line,
        column: cursor.column,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use soql_grammar::tokenize;

    fn resolve(text: &str, line: usize, column: usize) -> Result<usize, ContextError> {
        find_cursor_token_index(&tokenize(text), CursorPosition::new(line, column))
    }

    #[test]
    fn test_cursor_touching_identifier() {
        // SELECT id|
        let tokens = tokenize("SELECT id");
        let index = find_cursor_token_index(&tokens, CursorPosition::new(1, 10)).unwrap();
        assert_eq!(tokens[index].text, "id");
    }

    #[test]
    fn test_cursor_after_space() {
        // SELECT id |
        let tokens = tokenize("SELECT id ");
        let index = find_cursor_token_index(&tokens, CursorPosition::new(1, 11)).unwrap();
        assert_eq!(index, 4);
        assert_eq!(tokens[index].kind, TokenKind::Eof);
    }

    #[test]
    fn test_cursor_inside_token() {
        let tokens = tokenize("SELECT Name FROM Account");
        for column in 9..=11 {
            let index = find_cursor_token_index(&tokens, CursorPosition::new(1, column)).unwrap();
            assert_eq!(tokens[index].text, "Name", "column {column}");
        }
    }

    #[test]
    fn test_cursor_in_whitespace_run() {
        let tokens = tokenize("SELECT id     FROM x");
        for column in 11..=14 {
            let index = find_cursor_token_index(&tokens, CursorPosition::new(1, column)).unwrap();
            assert_eq!(tokens[index].kind, TokenKind::From, "column {column}");
        }
    }

    #[test]
    fn test_cursor_at_start_of_keyword_after_space() {
        // SELECT id |FROM x
        let tokens = tokenize("SELECT id FROM x");
        let index = find_cursor_token_index(&tokens, CursorPosition::new(1, 11)).unwrap();
        assert_eq!(tokens[index].kind, TokenKind::From);
    }

    #[test]
    fn test_cursor_after_operator_does_not_extend_it() {
        // WHERE a =|
        let tokens = tokenize("SELECT Id FROM A WHERE a =");
        let index = find_cursor_token_index(&tokens, CursorPosition::new(1, 27)).unwrap();
        assert_eq!(tokens[index].kind, TokenKind::Eof);
    }

    #[test]
    fn test_multiline_whitespace() {
        let tokens = tokenize("SELECT Id\n\n  FROM Account");
        // empty second line
        let index = find_cursor_token_index(&tokens, CursorPosition::new(2, 1)).unwrap();
        assert_eq!(tokens[index].kind, TokenKind::From);
        let index = find_cursor_token_index(&tokens, CursorPosition::new(3, 3)).unwrap();
        assert_eq!(tokens[index].kind, TokenKind::From);
    }

    #[test]
    fn test_cursor_on_new_line_at_end() {
        let tokens = tokenize("SELECT Id FROM Account\n");
        let index = find_cursor_token_index(&tokens, CursorPosition::new(2, 1)).unwrap();
        assert_eq!(tokens[index].kind, TokenKind::Eof);
    }

    #[test]
    fn test_cursor_inside_block_comment() {
        let text = "SELECT Id /* first\nsecond\nthird */ FROM Account";
        let tokens = tokenize(text);
        let comment = tokens
            .iter()
            .position(|t| t.kind == TokenKind::Comment)
            .unwrap();
        for (line, column) in [(2, 3), (3, 2)] {
            let cursor = CursorPosition::new(line, column);
            let index = find_cursor_token_index(&tokens, cursor).unwrap();
            assert_eq!(index, comment, "{line}:{column}");
        }
        // past the closing `*/`
        let index = find_cursor_token_index(&tokens, CursorPosition::new(3, 11)).unwrap();
        assert_eq!(tokens[index].kind, TokenKind::From);
    }

    #[test]
    fn test_cursor_past_document() {
        assert_eq!(
            resolve("SELECT Id", 5, 1),
            Err(ContextError::CursorNotFound { line: 5, column: 1 })
        );
    }

    #[test]
    fn test_lsp_position_counts_utf16_units() {
        let text = "SELECT Id FROM Account WHERE Name = '😀' AND Name = 1";
        let prefix = "SELECT Id FROM Account WHERE Name = '😀' AND Name";
        let units = prefix.encode_utf16().count() as u32;

        let cursor = CursorPosition::from_lsp_utf16(text, 0, units);
        assert_eq!(cursor, CursorPosition::new(1, prefix.chars().count() + 1));

        let tokens = tokenize(text);
        let index = find_cursor_token_index(&tokens, cursor).unwrap();
        assert_eq!(tokens[index].text, "Name");
        assert_eq!(tokens[index - 2].text, "AND");
    }

    #[test]
    fn test_lsp_position_on_later_line() {
        let text = "SELECT Id\r\nFROM Account\r\nWHERE Name = '😀😀' AND ";
        let cursor = CursorPosition::from_lsp_utf16(text, 2, 24);
        assert_eq!(cursor, CursorPosition::new(3, 23));
        let tokens = tokenize(text);
        let index = find_cursor_token_index(&tokens, cursor).unwrap();
        assert_eq!(tokens[index].kind, TokenKind::Eof);
    }

    #[test]
    fn test_lsp_position_past_last_line() {
        let cursor = CursorPosition::from_lsp_utf16("SELECT Id", 4, 2);
        assert_eq!(cursor, CursorPosition::new(5, 3));
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(
            find_cursor_token_index(&TokenStream::default(), CursorPosition::new(1, 1)),
            Err(ContextError::EmptyTokenStream)
        );
    }
}
