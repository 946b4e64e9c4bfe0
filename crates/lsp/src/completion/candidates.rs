// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Raw candidate collection
//!
//! Boundary call into the grammar predictor. The configured suppression and
//! preference sets are passed along and enforced again on the answer, so a
//! predictor that ignores them cannot leak punctuation tokens or unwanted
//! rules into the refiners.

use std::collections::HashSet;

use soql_grammar::{
    CandidatePredictor, CandidateSet, ParsedQuery, PredictionRequest, RuleKind, TokenKind,
};
use tracing::debug;

use crate::config::CompletionConfig;

/// Ask `predictor` for the candidates at `cursor_index`
pub fn collect_candidates<P: CandidatePredictor + ?Sized>(
    predictor: &P,
    query: &ParsedQuery,
    cursor_index: usize,
    config: &CompletionConfig,
) -> CandidateSet {
    let request = PredictionRequest {
        query,
        cursor_index,
        ignored_tokens: &config.ignored_tokens,
        preferred_rules: &config.preferred_rules,
    };
    let raw = predictor.predict(&request);

    let mut seen_tokens: HashSet<TokenKind> = HashSet::new();
    let tokens: Vec<_> = raw
        .tokens
        .into_iter()
        .filter(|c| !config.ignored_tokens.contains(&c.token_type))
        .filter(|c| seen_tokens.insert(c.token_type))
        .collect();

    let mut seen_rules: HashSet<RuleKind> = HashSet::new();
    let rules: Vec<_> = raw
        .rules
        .into_iter()
        .filter(|c| config.preferred_rules.contains(&c.rule))
        .filter(|c| seen_rules.insert(c.rule))
        .collect();

    debug!(
        cursor_index,
        tokens = tokens.len(),
        rules = rules.len(),
        "collected raw candidates"
    );
    CandidateSet { tokens, rules }
}
