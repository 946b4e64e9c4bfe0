// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Grammar rules
//!
//! Stable identifiers for the grammar rules that appear as parse-tree
//! nodes and in rule-level completion candidates.

use serde::{Deserialize, Serialize};

/// Grammar rule identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Whole document: one query followed by EOF
    Query,
    /// `SELECT ... FROM ...` unit, top-level or nested in the select list
    InnerQuery,
    /// `SELECT field FROM ...` used as the operand of IN / NOT IN
    SemiJoin,
    SelectExprs,
    /// One select-list entry: column, aggregate call or parenthesized sub-query
    SelectExpr,
    FromClause,
    FromExprs,
    FromExpr,
    UsingScope,
    WhereClause,
    /// Condition list joined by AND / OR, possibly parenthesized
    WhereExprs,
    /// A single filter condition: `field operator value`
    WhereExpr,
    ComparisonOperator,
    /// Parenthesized value list or semi-join after IN / INCLUDES
    InList,
    DistanceExpr,
    FunctionCall,
    LiteralValue,
    LikeLiteral,
    WithClause,
    GroupByClause,
    GroupByExprs,
    HavingClause,
    OrderByClause,
    OrderByExpr,
    OrderByField,
    LimitClause,
    OffsetClause,
    ForClause,
    /// `UPDATE TRACKING` / `UPDATE VIEWSTAT`
    UpdateStatsClause,
    /// Dotted path of identifiers
    Field,
    Identifier,
}

impl RuleKind {
    /// Rules that open a new query scope
    pub fn is_query_scope(&self) -> bool {
        matches!(self, RuleKind::InnerQuery | RuleKind::SemiJoin)
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
