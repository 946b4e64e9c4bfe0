// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Scripted grammar predictor for testing
//!
//! Returns a fixed candidate set for every request. Rule candidates can be
//! anchored to the cursor so one script works for any input text.

use soql_grammar::{
    CandidatePredictor, CandidateSet, PredictionRequest, RuleCandidate, RuleKind, TokenCandidate,
    TokenKind,
};

/// Where a scripted rule candidate starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStart {
    /// At the cursor token
    Cursor,
    /// `n` tokens before the cursor token
    BeforeCursor(usize),
    /// At a fixed token index
    Index(usize),
}

impl RuleStart {
    fn resolve(self, cursor_index: usize) -> usize {
        match self {
            RuleStart::Cursor => cursor_index,
            RuleStart::BeforeCursor(n) => cursor_index.saturating_sub(n),
            RuleStart::Index(index) => index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScriptedRule {
    rule: RuleKind,
    path: Vec<RuleKind>,
    start: RuleStart,
}

/// Predictor answering every request with the same candidates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockPredictor {
    tokens: Vec<TokenCandidate>,
    rules: Vec<ScriptedRule>,
}

impl MockPredictor {
    /// Predictor that never proposes anything
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> MockPredictorBuilder {
        MockPredictorBuilder::new()
    }
}

impl CandidatePredictor for MockPredictor {
    fn predict(&self, request: &PredictionRequest<'_>) -> CandidateSet {
        CandidateSet {
            tokens: self.tokens.clone(),
            rules: self
                .rules
                .iter()
                .map(|scripted| RuleCandidate {
                    rule: scripted.rule,
                    rule_path: scripted.path.clone(),
                    start_token_index: scripted.start.resolve(request.cursor_index),
                })
                .collect(),
        }
    }
}

/// Builder for creating mock predictors with a fluent API
#[derive(Debug, Default)]
pub struct MockPredictorBuilder {
    predictor: MockPredictor,
}

impl MockPredictorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Propose a single token
    pub fn token(self, kind: TokenKind) -> Self {
        self.token_with(kind, &[])
    }

    /// Propose a token followed by the tokens that must come after it
    pub fn token_with(mut self, kind: TokenKind, following: &[TokenKind]) -> Self {
        self.predictor.tokens.push(TokenCandidate {
            token_type: kind,
            following: following.to_vec(),
        });
        self
    }

    /// Propose several single tokens
    pub fn tokens(self, kinds: &[TokenKind]) -> Self {
        kinds.iter().fold(self, |builder, kind| builder.token(*kind))
    }

    /// Propose `rule`, invoked through `path`, starting at the cursor
    pub fn rule_at_cursor(self, rule: RuleKind, path: &[RuleKind]) -> Self {
        self.rule(rule, path, RuleStart::Cursor)
    }

    pub fn rule(mut self, rule: RuleKind, path: &[RuleKind], start: RuleStart) -> Self {
        self.predictor.rules.push(ScriptedRule {
            rule,
            path: path.to_vec(),
            start,
        });
        self
    }

    pub fn build(self) -> MockPredictor {
        self.predictor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soql_grammar::parse;
    use std::collections::BTreeSet;

    #[test]
    fn test_rules_anchor_to_cursor() {
        let predictor = MockPredictor::builder()
            .token_with(TokenKind::Group, &[TokenKind::By])
            .rule_at_cursor(RuleKind::Field, &[RuleKind::SelectExpr])
            .rule(RuleKind::Field, &[RuleKind::SelectExpr], RuleStart::BeforeCursor(2))
            .rule(RuleKind::FromExprs, &[RuleKind::FromClause], RuleStart::Index(1))
            .build();

        let parsed = parse("SELECT ");
        let empty = BTreeSet::new();
        let empty_rules = BTreeSet::new();
        let request = PredictionRequest {
            query: &parsed,
            cursor_index: 5,
            ignored_tokens: &empty,
            preferred_rules: &empty_rules,
        };
        let set = predictor.predict(&request);

        assert_eq!(set.tokens[0].following, vec![TokenKind::By]);
        let starts: Vec<_> = set.rules.iter().map(|r| r.start_token_index).collect();
        assert_eq!(starts, vec![5, 3, 1]);
    }

    #[test]
    fn test_empty_predictor() {
        let parsed = parse("");
        let empty = BTreeSet::new();
        let empty_rules = BTreeSet::new();
        let request = PredictionRequest {
            query: &parsed,
            cursor_index: 0,
            ignored_tokens: &empty,
            preferred_rules: &empty_rules,
        };
        assert!(MockPredictor::empty().predict(&request).is_empty());
    }
}
