// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Token-stream lookaround
//!
//! Pattern checks around the cursor token, skipping hidden tokens. A
//! pattern is a sequence of alternatives: `&[&[Identifier, Count], &[LParen]]`
//! matches an identifier or COUNT followed by `(`.

use soql_grammar::{Token, TokenKind, TokenStream};

/// Check if the non-hidden tokens right before `index` match `pattern`
///
/// The last alternative must match the token immediately preceding the
/// cursor, the one before it the token before that, and so on.
pub fn is_cursor_after(tokens: &TokenStream, index: usize, pattern: &[&[TokenKind]]) -> bool {
    if pattern.is_empty() {
        return true;
    }
    let preceding = tokens.as_slice()[..index.min(tokens.len())]
        .iter()
        .rev()
        .filter(|t| !t.is_hidden());
    let mut remaining = pattern.iter().rev();
    let mut expected = remaining.next();
    for token in preceding {
        let Some(alternatives) = expected else {
            break;
        };
        if !alternatives.contains(&token.kind) {
            return false;
        }
        expected = remaining.next();
        if expected.is_none() {
            return true;
        }
    }
    false
}

/// Check if the non-hidden tokens starting at `index` match `pattern`
pub fn is_cursor_before(tokens: &TokenStream, index: usize, pattern: &[&[TokenKind]]) -> bool {
    if pattern.is_empty() {
        return true;
    }
    let following = tokens
        .iter()
        .skip(index)
        .filter(|t| !t.is_hidden());
    let mut matched = 0;
    for token in following {
        if !pattern[matched].contains(&token.kind) {
            return false;
        }
        matched += 1;
        if matched == pattern.len() {
            return true;
        }
    }
    false
}

/// Nearest non-hidden token before `index` whose kind is one of `kinds`
pub fn search_token_before_cursor<'a>(
    tokens: &'a TokenStream,
    index: usize,
    kinds: &[TokenKind],
) -> Option<&'a Token> {
    tokens.as_slice()[..index.min(tokens.len())]
        .iter()
        .rev()
        .filter(|t| !t.is_hidden())
        .find(|t| kinds.contains(&t.kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use soql_grammar::tokenize;

    fn eof_index(tokens: &TokenStream) -> usize {
        tokens.len() - 1
    }

    #[test]
    fn test_is_cursor_after() {
        let tokens = tokenize("SELECT Id FROM ");
        let at = eof_index(&tokens);
        assert!(is_cursor_after(&tokens, at, &[&[TokenKind::From]]));
        assert!(!is_cursor_after(
            &tokens,
            at,
            &[&[TokenKind::Select], &[TokenKind::From]]
        ));
        assert!(is_cursor_after(
            &tokens,
            at,
            &[&[TokenKind::Identifier], &[TokenKind::From]]
        ));
    }

    #[test]
    fn test_is_cursor_after_function_open() {
        let tokens = tokenize("SELECT AVG( ");
        let at = eof_index(&tokens);
        assert!(is_cursor_after(
            &tokens,
            at,
            &[&[TokenKind::Identifier, TokenKind::Count], &[TokenKind::LParen]]
        ));

        let tokens = tokenize("SELECT COUNT(");
        let at = eof_index(&tokens);
        assert!(is_cursor_after(
            &tokens,
            at,
            &[&[TokenKind::Identifier, TokenKind::Count], &[TokenKind::LParen]]
        ));
    }

    #[test]
    fn test_is_cursor_after_at_stream_start() {
        let tokens = tokenize("FROM");
        assert!(!is_cursor_after(&tokens, 0, &[&[TokenKind::Select]]));
    }

    #[test]
    fn test_is_cursor_before() {
        let tokens = tokenize("SELECT   FROM Account");
        // index of the whitespace run right after SELECT
        assert!(is_cursor_before(&tokens, 1, &[&[TokenKind::From]]));
        assert!(is_cursor_before(
            &tokens,
            1,
            &[&[TokenKind::From], &[TokenKind::Identifier]]
        ));
        assert!(!is_cursor_before(&tokens, 0, &[&[TokenKind::From]]));
    }

    #[test]
    fn test_search_token_before_cursor() {
        let tokens = tokenize("SELECT MAX(Amount), SUM(");
        let at = eof_index(&tokens);
        let found = search_token_before_cursor(&tokens, at, &[TokenKind::Identifier]).unwrap();
        assert_eq!(found.text, "SUM");
        assert!(search_token_before_cursor(&tokens, at, &[TokenKind::Where]).is_none());
    }
}
