// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Completion configuration
//!
//! Settings forwarded to the grammar predictor and the refiners.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use soql_lsp::CompletionConfig;
//!
//! let settings = json!({ "soql": { "defaultSobject": "Account" } });
//! let config = CompletionConfig::from_lsp_settings(&settings).unwrap();
//! assert_eq!(config.default_sobject, "Account");
//! assert!(!config.ignored_tokens.is_empty());
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use soql_grammar::{RuleKind, TokenKind};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Settings could not be decoded (unknown token or rule names, wrong types)
    #[error("Invalid completion settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Completion engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompletionConfig {
    /// Token types never reported as raw token candidates
    pub ignored_tokens: BTreeSet<TokenKind>,
    /// Rules reported as rule candidates rather than expanded into tokens
    pub preferred_rules: BTreeSet<RuleKind>,
    /// Object name used when the enclosing query has no FROM target yet
    pub default_sobject: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            ignored_tokens: BTreeSet::from([
                TokenKind::Bind,
                TokenKind::LParen,
                TokenKind::Distance,
                TokenKind::Comma,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Colon,
            ]),
            preferred_rules: BTreeSet::from([
                RuleKind::FromExprs,
                RuleKind::FromExpr,
                RuleKind::Field,
                RuleKind::UpdateStatsClause,
                RuleKind::Identifier,
                RuleKind::LiteralValue,
                RuleKind::LikeLiteral,
            ]),
            default_sobject: "Object".to_string(),
        }
    }
}

impl CompletionConfig {
    /// Read the `soql` section of client settings
    ///
    /// Missing section or missing keys fall back to the defaults.
    pub fn from_lsp_settings(settings: &Value) -> Result<Self, ConfigError> {
        let config = match settings.get("soql") {
            Some(section) if !section.is_null() => serde_json::from_value(section.clone())?,
            _ => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_sobject.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "defaultSobject cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_without_section() {
        let config = CompletionConfig::from_lsp_settings(&json!({})).unwrap();
        assert_eq!(config, CompletionConfig::default());
        assert!(config.ignored_tokens.contains(&TokenKind::Comma));
        assert!(config.preferred_rules.contains(&RuleKind::LiteralValue));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings = json!({ "soql": { "ignoredTokens": ["comma"] } });
        let config = CompletionConfig::from_lsp_settings(&settings).unwrap();
        assert_eq!(config.ignored_tokens, BTreeSet::from([TokenKind::Comma]));
        assert_eq!(config.default_sobject, "Object");
        assert_eq!(
            config.preferred_rules,
            CompletionConfig::default().preferred_rules
        );
    }

    #[test]
    fn test_unknown_rule_name_rejected() {
        let settings = json!({ "soql": { "preferredRules": ["no_such_rule"] } });
        let err = CompletionConfig::from_lsp_settings(&settings).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSettings(_)));
    }

    #[test]
    fn test_empty_default_object_rejected() {
        let settings = json!({ "soql": { "defaultSobject": "  " } });
        let err = CompletionConfig::from_lsp_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("defaultSobject"));
    }
}
