// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Errors raised while resolving a completion request

use soql_lsp_context::{ContextError, CursorPosition};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    /// Cursor position is not a valid 1-based position
    #[error("Invalid position: {0:?}")]
    InvalidPosition(CursorPosition),

    /// The cursor could not be placed in the token stream
    #[error("Context detection error: {0}")]
    Context(#[from] ContextError),
}

impl CompletionError {
    /// Whether the request should simply yield no items
    pub fn should_return_empty(&self) -> bool {
        matches!(
            self,
            CompletionError::InvalidPosition(_)
                | CompletionError::Context(ContextError::CursorNotFound { .. })
                | CompletionError::Context(ContextError::EmptyTokenStream)
        )
    }
}
