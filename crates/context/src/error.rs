// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

/// Context detection error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// No token covers the cursor; the lexer output and the document disagree
    #[error("Cursor position {line}:{column} not found in token stream")]
    CursorNotFound { line: usize, column: usize },

    #[error("Token stream is empty")]
    EmptyTokenStream,
}
