// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Candidate prediction boundary
//!
//! The completion engine asks a grammar-driven predictor which token types
//! and which rules are valid at the cursor token. This module defines that
//! contract; implementations live outside the engine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::parser::ParsedQuery;
use crate::rule::RuleKind;
use crate::token::TokenKind;

/// A token type valid at the cursor, with the tokens that must follow it
///
/// `following` lets multi-word keywords surface as one suggestion
/// (`GROUP` followed by `BY`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCandidate {
    pub token_type: TokenKind,
    #[serde(default)]
    pub following: Vec<TokenKind>,
}

/// A grammar rule that could start or continue at the cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCandidate {
    pub rule: RuleKind,
    /// Enclosing rule invocations, outermost first; the last entry is the
    /// rule that invoked `rule`
    pub rule_path: Vec<RuleKind>,
    /// Token index where `rule` starts
    pub start_token_index: usize,
}

impl RuleCandidate {
    /// Rule that directly encloses this candidate
    pub fn parent_rule(&self) -> Option<RuleKind> {
        self.rule_path.last().copied()
    }

    pub fn is_inside(&self, rule: RuleKind) -> bool {
        self.rule_path.contains(&rule)
    }
}

/// Raw predictions for one cursor position, in predictor order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSet {
    pub tokens: Vec<TokenCandidate>,
    pub rules: Vec<RuleCandidate>,
}

impl CandidateSet {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.rules.is_empty()
    }
}

/// Inputs for one prediction
#[derive(Debug, Clone, Copy)]
pub struct PredictionRequest<'a> {
    pub query: &'a ParsedQuery,
    pub cursor_index: usize,
    /// Token types that must never be reported as token candidates
    pub ignored_tokens: &'a BTreeSet<TokenKind>,
    /// Rules to report as rule candidates instead of expanding them into tokens
    pub preferred_rules: &'a BTreeSet<RuleKind>,
}

/// Grammar-driven prediction of what may appear at a token index
///
/// Prediction never fails: an empty [`CandidateSet`] is a valid answer.
pub trait CandidatePredictor {
    fn predict(&self, request: &PredictionRequest<'_>) -> CandidateSet;
}

impl<F> CandidatePredictor for F
where
    F: Fn(&PredictionRequest<'_>) -> CandidateSet,
{
    fn predict(&self, request: &PredictionRequest<'_>) -> CandidateSet {
        self(request)
    }
}
