// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Parser
//!
//! Error-tolerant recursive-descent parser for SOQL queries.
//!
//! The parser never aborts: a missing or unexpected token is recorded as a
//! [`SyntaxError`] and parsing resumes at the next clause, so half-typed
//! queries such as `SELECT  FROM Account WHERE ` still produce query and
//! condition nodes with correct token spans.

use tracing::debug;

use crate::lexer::tokenize;
use crate::rule::RuleKind;
use crate::token::{TokenKind, TokenStream};
use crate::tree::{ParseTree, TreeBuilder};

/// A syntax error recorded while parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}:{column} {message}")]
pub struct SyntaxError {
    pub message: String,
    /// Index of the offending token
    pub token_index: usize,
    pub line: usize,
    pub column: usize,
    /// Length in characters of the offending token's text
    pub length: usize,
}

/// Token stream plus the parse tree built over it
#[derive(Debug, Clone)]
pub struct ParsedQuery {
    pub tokens: TokenStream,
    pub tree: ParseTree,
    pub errors: Vec<SyntaxError>,
}

impl ParsedQuery {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex and parse query text
///
/// # Examples
///
/// ```
/// use soql_grammar::{parse, RuleKind};
///
/// let parsed = parse("SELECT Id FROM Account");
/// assert!(!parsed.has_errors());
/// assert_eq!(parsed.tree.rule(parsed.tree.root()), Some(RuleKind::Query));
/// ```
pub fn parse(text: &str) -> ParsedQuery {
    parse_tokens(tokenize(text))
}

/// Parse an already lexed token stream
pub fn parse_tokens(tokens: TokenStream) -> ParsedQuery {
    let (tree, errors) = {
        let mut parser = Parser::new(&tokens);
        parser.query();
        (parser.builder.finish(), parser.errors)
    };
    if !errors.is_empty() {
        debug!(count = errors.len(), "query parsed with syntax errors");
    }
    ParsedQuery {
        tokens,
        tree,
        errors,
    }
}

/// Keywords that double as object or field names when not followed by BY
const SOFT_KEYWORDS: &[TokenKind] = &[
    TokenKind::Group,
    TokenKind::Order,
    TokenKind::Scope,
    TokenKind::View,
    TokenKind::Reference,
];

struct Parser<'a> {
    tokens: &'a TokenStream,
    pos: usize,
    builder: TreeBuilder,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a TokenStream) -> Self {
        let mut parser = Self {
            tokens,
            pos: 0,
            builder: TreeBuilder::new(),
            errors: Vec::new(),
        };
        parser.skip_hidden();
        parser
    }

    // ---- token cursor ----

    fn skip_hidden(&mut self) {
        while self.tokens.get(self.pos).is_some_and(|t| t.is_hidden()) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> TokenKind {
        self.tokens.kind_at(self.pos)
    }

    /// Kind of the `n`-th non-hidden token after the current one
    fn peek_nth(&self, n: usize) -> TokenKind {
        self.tokens
            .iter()
            .skip(self.pos + 1)
            .filter(|t| !t.is_hidden())
            .nth(n.saturating_sub(1))
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.peek())
    }

    fn at_identifier(&self) -> bool {
        let kind = self.peek();
        kind == TokenKind::Identifier
            || (SOFT_KEYWORDS.contains(&kind) && self.peek_nth(1) != TokenKind::By)
    }

    fn at_function_call(&self) -> bool {
        (self.at_identifier() || self.at(TokenKind::Count)) && self.peek_nth(1) == TokenKind::LParen
    }

    /// Consume the current token into the innermost open rule
    fn bump(&mut self) {
        if self.pos >= self.tokens.len() {
            return;
        }
        self.builder.token(self.pos);
        if !self.at(TokenKind::Eof) {
            self.pos += 1;
            self.skip_hidden();
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {what}"));
            false
        }
    }

    fn error(&mut self, message: String) {
        if self.errors.last().is_some_and(|e| e.token_index == self.pos) {
            return;
        }
        let (line, column, length, found) = match self.tokens.get(self.pos) {
            Some(token) if token.kind == TokenKind::Eof => {
                (token.line, token.column, 0, "<EOF>".to_string())
            }
            Some(token) => (
                token.line,
                token.column,
                token.text.chars().count(),
                format!("'{}'", token.text),
            ),
            None => (1, 0, 0, "<EOF>".to_string()),
        };
        self.errors.push(SyntaxError {
            message: format!("{message}, found {found}"),
            token_index: self.pos,
            line,
            column,
            length,
        });
    }

    fn start(&mut self, rule: RuleKind) {
        self.builder.start_rule(rule, self.pos);
    }

    fn finish(&mut self) {
        self.builder.finish_rule();
    }

    // ---- query structure ----

    fn query(&mut self) {
        self.start(RuleKind::Query);
        self.inner_query();
        if !self.at(TokenKind::Eof) {
            self.error("unexpected input after query".to_string());
            while !self.at(TokenKind::Eof) {
                self.bump();
            }
        }
        self.bump();
        self.finish();
    }

    fn inner_query(&mut self) {
        self.start(RuleKind::InnerQuery);
        self.expect(TokenKind::Select, "SELECT");
        self.select_exprs();
        if self.at(TokenKind::From) {
            self.from_clause();
        } else {
            self.error("expected FROM".to_string());
        }
        loop {
            match self.peek() {
                TokenKind::Using => self.using_scope(),
                TokenKind::Where => self.where_clause(),
                TokenKind::With => self.with_clause(),
                TokenKind::Group => self.group_by_clause(),
                TokenKind::Having => self.having_clause(),
                TokenKind::Order => self.order_by_clause(),
                TokenKind::Limit => self.limit_clause(),
                TokenKind::Offset => self.offset_clause(),
                TokenKind::For => self.for_clause(),
                TokenKind::Update => self.update_stats_clause(),
                _ => break,
            }
        }
        self.finish();
    }

    fn select_exprs(&mut self) {
        self.start(RuleKind::SelectExprs);
        if self.at_identifier() || self.at_any(&[TokenKind::Count, TokenKind::LParen]) {
            self.select_expr();
            while self.eat(TokenKind::Comma) {
                self.select_expr();
            }
        } else {
            self.error("expected field".to_string());
        }
        self.finish();
    }

    fn select_expr(&mut self) {
        self.start(RuleKind::SelectExpr);
        if self.eat(TokenKind::LParen) {
            if self.at(TokenKind::Select) {
                self.inner_query();
            } else {
                self.error("expected SELECT".to_string());
            }
            self.expect(TokenKind::RParen, "')'");
        } else if self.at_function_call() {
            // Aggregate and function columns keep their argument inline so the
            // argument field is a direct child of the select expression.
            self.bump();
            self.bump();
            self.function_argument();
            self.expect(TokenKind::RParen, "')'");
            self.alias();
        } else if self.at_identifier() {
            self.field();
            self.alias();
        } else {
            self.error("expected field".to_string());
        }
        self.finish();
    }

    fn function_call(&mut self) {
        self.start(RuleKind::FunctionCall);
        self.bump();
        self.bump();
        self.function_argument();
        self.expect(TokenKind::RParen, "')'");
        self.finish();
    }

    fn function_argument(&mut self) {
        if self.at_function_call() {
            self.function_call();
        } else if self.at_identifier() {
            self.field();
        }
    }

    fn alias(&mut self) {
        if self.at(TokenKind::Identifier) {
            self.identifier();
        }
    }

    fn field(&mut self) {
        self.start(RuleKind::Field);
        self.identifier();
        while self.eat(TokenKind::Dot) {
            if self.at_identifier() {
                self.identifier();
            } else {
                self.error("expected field name".to_string());
                break;
            }
        }
        self.finish();
    }

    fn identifier(&mut self) {
        self.start(RuleKind::Identifier);
        if self.at_identifier() {
            self.bump();
        } else {
            self.error("expected identifier".to_string());
        }
        self.finish();
    }

    // ---- FROM ----

    fn from_clause(&mut self) {
        self.start(RuleKind::FromClause);
        self.bump();
        self.from_exprs();
        self.finish();
    }

    fn from_exprs(&mut self) {
        self.start(RuleKind::FromExprs);
        if self.at_identifier() {
            self.from_expr();
            while self.eat(TokenKind::Comma) {
                self.from_expr();
            }
        } else {
            self.error("expected object name".to_string());
        }
        self.finish();
    }

    fn from_expr(&mut self) {
        self.start(RuleKind::FromExpr);
        self.field();
        self.alias();
        self.finish();
    }

    fn using_scope(&mut self) {
        self.start(RuleKind::UsingScope);
        self.bump();
        self.expect(TokenKind::Scope, "SCOPE");
        self.identifier();
        self.finish();
    }

    // ---- WHERE / HAVING ----

    fn where_clause(&mut self) {
        self.start(RuleKind::WhereClause);
        self.bump();
        self.where_exprs();
        self.finish();
    }

    fn having_clause(&mut self) {
        self.start(RuleKind::HavingClause);
        self.bump();
        self.where_exprs();
        self.finish();
    }

    fn where_exprs(&mut self) {
        self.start(RuleKind::WhereExprs);
        self.condition();
        while self.at_any(&[TokenKind::And, TokenKind::Or]) {
            self.bump();
            self.condition();
        }
        self.finish();
    }

    fn condition(&mut self) {
        if self.eat(TokenKind::Not) {
            self.condition();
        } else if self.eat(TokenKind::LParen) {
            self.where_exprs();
            self.expect(TokenKind::RParen, "')'");
        } else {
            self.where_expr();
        }
    }

    fn where_expr(&mut self) {
        self.start(RuleKind::WhereExpr);
        if self.at(TokenKind::Distance) {
            self.distance_expr();
        } else if self.at_function_call() {
            self.function_call();
        } else if self.at_identifier() {
            self.field();
        } else {
            self.error("expected field".to_string());
            self.finish();
            return;
        }

        match self.peek() {
            TokenKind::Eq | TokenKind::NotEq | TokenKind::Lt | TokenKind::Gt => {
                self.comparison_operator();
                self.literal_value();
            }
            TokenKind::Like => {
                self.comparison_operator();
                self.like_literal();
            }
            TokenKind::In | TokenKind::Includes | TokenKind::Excludes => {
                self.comparison_operator();
                self.in_list();
            }
            TokenKind::Not if self.peek_nth(1) == TokenKind::In => {
                self.comparison_operator();
                self.in_list();
            }
            _ => self.error("expected operator".to_string()),
        }
        self.finish();
    }

    fn comparison_operator(&mut self) {
        self.start(RuleKind::ComparisonOperator);
        match self.peek() {
            TokenKind::Lt => {
                self.bump();
                if self.at_any(&[TokenKind::Eq, TokenKind::Gt]) {
                    self.bump();
                }
            }
            TokenKind::Gt => {
                self.bump();
                self.eat(TokenKind::Eq);
            }
            TokenKind::Not => {
                self.bump();
                self.expect(TokenKind::In, "IN");
            }
            _ => self.bump(),
        }
        self.finish();
    }

    fn literal_value(&mut self) {
        self.start(RuleKind::LiteralValue);
        match self.peek() {
            TokenKind::StringLiteral
            | TokenKind::IntegerLiteral
            | TokenKind::DecimalLiteral
            | TokenKind::DateLiteral
            | TokenKind::DateTimeLiteral
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null
            | TokenKind::Bind => self.bump(),
            TokenKind::Plus | TokenKind::Minus => {
                self.bump();
                if self.at_any(&[TokenKind::IntegerLiteral, TokenKind::DecimalLiteral]) {
                    self.bump();
                } else {
                    self.error("expected number".to_string());
                }
            }
            TokenKind::Identifier => {
                // Date-range literal, optionally parametric (LAST_N_DAYS:30),
                // or a currency-prefixed amount (USD100)
                self.bump();
                if self.eat(TokenKind::Colon) {
                    self.expect(TokenKind::IntegerLiteral, "number");
                }
            }
            _ => self.error("expected value".to_string()),
        }
        self.finish();
    }

    fn like_literal(&mut self) {
        self.start(RuleKind::LikeLiteral);
        if !self.eat(TokenKind::StringLiteral) && !self.eat(TokenKind::Bind) {
            self.error("expected pattern string".to_string());
        }
        self.finish();
    }

    fn in_list(&mut self) {
        self.start(RuleKind::InList);
        if self.expect(TokenKind::LParen, "'('") {
            if self.at(TokenKind::Select) {
                self.semi_join();
            } else {
                self.literal_value();
                while self.eat(TokenKind::Comma) {
                    self.literal_value();
                }
            }
            self.expect(TokenKind::RParen, "')'");
        }
        self.finish();
    }

    fn semi_join(&mut self) {
        self.start(RuleKind::SemiJoin);
        self.bump();
        if self.at_identifier() {
            self.field();
        } else {
            self.error("expected field".to_string());
        }
        if self.at(TokenKind::From) {
            self.from_clause();
        } else {
            self.error("expected FROM".to_string());
        }
        if self.at(TokenKind::Where) {
            self.where_clause();
        }
        self.finish();
    }

    fn distance_expr(&mut self) {
        self.start(RuleKind::DistanceExpr);
        self.bump();
        self.expect(TokenKind::LParen, "'('");
        self.field();
        self.expect(TokenKind::Comma, "','");
        if self.eat(TokenKind::Geolocation) {
            self.expect(TokenKind::LParen, "'('");
            self.signed_number();
            self.expect(TokenKind::Comma, "','");
            self.signed_number();
            self.expect(TokenKind::RParen, "')'");
        } else {
            self.error("expected GEOLOCATION".to_string());
        }
        self.expect(TokenKind::Comma, "','");
        self.expect(TokenKind::StringLiteral, "distance unit");
        self.expect(TokenKind::RParen, "')'");
        self.finish();
    }

    fn signed_number(&mut self) {
        self.eat(TokenKind::Minus);
        if !self.eat(TokenKind::IntegerLiteral) && !self.eat(TokenKind::DecimalLiteral) {
            self.error("expected number".to_string());
        }
    }

    // ---- trailing clauses ----

    fn with_clause(&mut self) {
        self.start(RuleKind::WithClause);
        self.bump();
        let mut depth = 0usize;
        loop {
            match self.peek() {
                TokenKind::Identifier
                | TokenKind::Comma
                | TokenKind::Eq
                | TokenKind::StringLiteral => self.bump(),
                TokenKind::LParen => {
                    depth += 1;
                    self.bump();
                }
                TokenKind::RParen if depth > 0 => {
                    depth -= 1;
                    self.bump();
                }
                _ => break,
            }
        }
        self.finish();
    }

    fn group_by_clause(&mut self) {
        self.start(RuleKind::GroupByClause);
        self.bump();
        self.expect(TokenKind::By, "BY");
        if self.at_any(&[TokenKind::Rollup, TokenKind::Cube]) {
            self.bump();
            self.expect(TokenKind::LParen, "'('");
            self.group_by_exprs();
            self.expect(TokenKind::RParen, "')'");
        } else {
            self.group_by_exprs();
        }
        self.finish();
    }

    fn group_by_exprs(&mut self) {
        self.start(RuleKind::GroupByExprs);
        self.group_by_item();
        while self.eat(TokenKind::Comma) {
            self.group_by_item();
        }
        self.finish();
    }

    fn group_by_item(&mut self) {
        if self.at_function_call() {
            self.function_call();
        } else if self.at_identifier() {
            self.field();
        } else {
            self.error("expected field".to_string());
        }
    }

    fn order_by_clause(&mut self) {
        self.start(RuleKind::OrderByClause);
        self.bump();
        self.expect(TokenKind::By, "BY");
        self.order_by_expr();
        while self.eat(TokenKind::Comma) {
            self.order_by_expr();
        }
        self.finish();
    }

    fn order_by_expr(&mut self) {
        self.start(RuleKind::OrderByExpr);
        self.start(RuleKind::OrderByField);
        if self.at_function_call() {
            self.function_call();
        } else if self.at_identifier() {
            self.field();
        } else {
            self.error("expected field".to_string());
        }
        self.finish();
        if !self.eat(TokenKind::Asc) {
            self.eat(TokenKind::Desc);
        }
        if self.eat(TokenKind::Nulls) && !self.eat(TokenKind::First) && !self.eat(TokenKind::Last)
        {
            self.error("expected FIRST or LAST".to_string());
        }
        self.finish();
    }

    fn limit_clause(&mut self) {
        self.start(RuleKind::LimitClause);
        self.bump();
        if !self.eat(TokenKind::IntegerLiteral) && !self.eat(TokenKind::Bind) {
            self.error("expected row count".to_string());
        }
        self.finish();
    }

    fn offset_clause(&mut self) {
        self.start(RuleKind::OffsetClause);
        self.bump();
        if !self.eat(TokenKind::IntegerLiteral) && !self.eat(TokenKind::Bind) {
            self.error("expected row count".to_string());
        }
        self.finish();
    }

    fn for_clause(&mut self) {
        self.start(RuleKind::ForClause);
        self.bump();
        loop {
            if !self.at_any(&[TokenKind::View, TokenKind::Reference, TokenKind::Update]) {
                self.error("expected VIEW, REFERENCE or UPDATE".to_string());
                break;
            }
            self.bump();
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.finish();
    }

    fn update_stats_clause(&mut self) {
        self.start(RuleKind::UpdateStatsClause);
        self.bump();
        self.identifier();
        while self.eat(TokenKind::Comma) {
            self.identifier();
        }
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeId;

    fn rules_of(parsed: &ParsedQuery, rule: RuleKind) -> Vec<NodeId> {
        parsed
            .tree
            .rule_nodes()
            .filter(|&id| parsed.tree.rule(id) == Some(rule))
            .collect()
    }

    fn texts_of(parsed: &ParsedQuery, rule: RuleKind) -> Vec<String> {
        rules_of(parsed, rule)
            .into_iter()
            .map(|id| parsed.tree.text(id, &parsed.tokens))
            .collect()
    }

    #[test]
    fn test_complete_query_has_no_errors() {
        let parsed = parse(
            "SELECT Id, Name, COUNT(Id) cnt FROM Account \
             WHERE Name LIKE 'A%' AND (Industry = 'Tech' OR Rating != null) \
             GROUP BY Name HAVING COUNT(Id) > 1 ORDER BY Name DESC NULLS LAST LIMIT 10 OFFSET 5",
        );
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
    }

    #[test]
    fn test_query_spans_to_eof() {
        let parsed = parse("SELECT Id FROM Account");
        let root = parsed.tree.root();
        let eof = parsed.tokens.len() - 1;
        assert_eq!(parsed.tree.node(root).start, 0);
        assert_eq!(parsed.tree.node(root).stop, Some(eof));
    }

    #[test]
    fn test_nested_query_is_wrapped_in_parentheses() {
        let parsed = parse("SELECT Id, (SELECT Id FROM Contacts) FROM Account");
        assert!(!parsed.has_errors(), "{:?}", parsed.errors);
        let inner = rules_of(&parsed, RuleKind::InnerQuery);
        assert_eq!(inner.len(), 2);

        let nested = inner[1];
        let parent = parsed.tree.parent(nested).unwrap();
        assert_eq!(parsed.tree.rule(parent), Some(RuleKind::SelectExpr));
        assert_eq!(parsed.tokens[parsed.tree.node(parent).start].kind, TokenKind::LParen);
        assert_eq!(
            parsed.tokens[parsed.tree.node(parent).stop.unwrap()].kind,
            TokenKind::RParen
        );
    }

    #[test]
    fn test_semi_join() {
        let parsed =
            parse("SELECT Id FROM Account WHERE Id IN (SELECT AccountId FROM Contact)");
        assert!(!parsed.has_errors(), "{:?}", parsed.errors);
        let semi = rules_of(&parsed, RuleKind::SemiJoin);
        assert_eq!(semi.len(), 1);
        let parent = parsed.tree.parent(semi[0]).unwrap();
        assert_eq!(parsed.tree.rule(parent), Some(RuleKind::InList));
    }

    #[test]
    fn test_where_expr_shape() {
        let parsed = parse("SELECT Id FROM Account WHERE Amount <= 100");
        let exprs = rules_of(&parsed, RuleKind::WhereExpr);
        assert_eq!(exprs.len(), 1);
        let tree = &parsed.tree;
        assert_eq!(tree.child_count(exprs[0]), 3);
        let op = tree.child(exprs[0], 1).unwrap();
        assert_eq!(tree.rule(op), Some(RuleKind::ComparisonOperator));
        assert_eq!(tree.text(op, &parsed.tokens), "<=");
    }

    #[test]
    fn test_partial_where_clause() {
        let parsed = parse("SELECT  FROM Account WHERE ");
        assert!(parsed.has_errors());
        assert_eq!(texts_of(&parsed, RuleKind::FromExprs), vec!["Account"]);
        assert_eq!(rules_of(&parsed, RuleKind::WhereClause).len(), 1);
    }

    #[test]
    fn test_partial_comparison_keeps_field_and_operator() {
        let parsed = parse("SELECT Id FROM Account WHERE Name = ");
        let exprs = rules_of(&parsed, RuleKind::WhereExpr);
        assert_eq!(exprs.len(), 1);
        let tree = &parsed.tree;
        let field = tree.child(exprs[0], 0).unwrap();
        assert_eq!(tree.text(field, &parsed.tokens), "Name");
        let op = tree.child(exprs[0], 1).unwrap();
        assert_eq!(tree.text(op, &parsed.tokens), "=");
    }

    #[test]
    fn test_unclosed_nested_query() {
        let parsed = parse("SELECT Id, (SELECT Id FROM Contacts FROM Account");
        assert!(parsed.has_errors());
        assert_eq!(rules_of(&parsed, RuleKind::InnerQuery).len(), 2);
    }

    #[test]
    fn test_soft_keyword_object_name() {
        let parsed = parse("SELECT Id FROM Order ORDER BY Id");
        assert!(!parsed.has_errors(), "{:?}", parsed.errors);
        assert_eq!(texts_of(&parsed, RuleKind::FromExprs), vec!["Order"]);
        assert_eq!(texts_of(&parsed, RuleKind::OrderByField), vec!["Id"]);
    }

    #[test]
    fn test_group_by_rollup() {
        let parsed = parse("SELECT Type, COUNT(Id) FROM Account GROUP BY ROLLUP(Type)");
        assert!(!parsed.has_errors(), "{:?}", parsed.errors);
        assert_eq!(texts_of(&parsed, RuleKind::GroupByExprs), vec!["Type"]);
    }

    #[test]
    fn test_update_and_for_clauses() {
        let parsed = parse("SELECT Id FROM KnowledgeArticleVersion UPDATE VIEWSTAT");
        assert!(!parsed.has_errors(), "{:?}", parsed.errors);
        assert_eq!(rules_of(&parsed, RuleKind::UpdateStatsClause).len(), 1);

        let parsed = parse("SELECT Id FROM Account FOR VIEW, UPDATE");
        assert!(!parsed.has_errors(), "{:?}", parsed.errors);
    }

    #[test]
    fn test_distance_expression() {
        let parsed = parse(
            "SELECT Name FROM Account \
             WHERE DISTANCE(Location__c, GEOLOCATION(37.77, -122.41), 'mi') < 20",
        );
        assert!(!parsed.has_errors(), "{:?}", parsed.errors);
        assert_eq!(rules_of(&parsed, RuleKind::DistanceExpr).len(), 1);
    }

    #[test]
    fn test_trailing_garbage_is_reported_not_fatal() {
        let parsed = parse("SELECT Id FROM Account )");
        assert_eq!(parsed.errors.len(), 1);
        assert!(parsed.errors[0].message.contains("unexpected input"));
        let root = parsed.tree.root();
        assert_eq!(parsed.tree.node(root).stop, Some(parsed.tokens.len() - 1));
    }

    #[test]
    fn test_empty_text() {
        let parsed = parse("");
        assert_eq!(parsed.tokens.len(), 1);
        assert!(parsed.has_errors());
        assert_eq!(parsed.tree.rule(parsed.tree.root()), Some(RuleKind::Query));
    }
}
