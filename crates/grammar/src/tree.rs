// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Parse tree
//!
//! Arena-backed parse tree. The arena owns every node; children are owned
//! by index and the parent link is a plain index used only for ancestor
//! lookups, so there is exactly one ownership path.
//!
//! Nodes record the token-index span they cover: `start` is the first
//! non-hidden token at rule entry, `stop` the last token the rule consumed
//! (`None` when the rule matched nothing).

use crate::rule::RuleKind;
use crate::token::TokenStream;

/// Index of a node inside its [`ParseTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A grammar-rule activation
    Rule(RuleKind),
    /// A consumed token, by stream index
    Token(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub start: usize,
    pub stop: Option<usize>,
}

impl Node {
    pub fn rule(&self) -> Option<RuleKind> {
        match self.kind {
            NodeKind::Rule(rule) => Some(rule),
            NodeKind::Token(_) => None,
        }
    }

    pub fn token_index(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Token(index) => Some(index),
            NodeKind::Rule(_) => None,
        }
    }

    pub fn is_rule(&self, rule: RuleKind) -> bool {
        self.kind == NodeKind::Rule(rule)
    }
}

/// Callbacks for a depth-first walk over rule nodes
pub trait TreeListener {
    fn enter_rule(&mut self, _tree: &ParseTree, _node: NodeId, _rule: RuleKind) {}
    fn exit_rule(&mut self, _tree: &ParseTree, _node: NodeId, _rule: RuleKind) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    nodes: Vec<Node>,
}

impl ParseTree {
    /// The root node (the whole-query rule)
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn rule(&self, id: NodeId) -> Option<RuleKind> {
        self.node(id).rule()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn child(&self, id: NodeId, i: usize) -> Option<NodeId> {
        self.node(id).children.get(i).copied()
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).children.len()
    }

    /// Child rule nodes of the given kind, in order
    pub fn rule_children(&self, id: NodeId, rule: RuleKind) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(move |&child| self.node(child).is_rule(rule))
    }

    /// Ancestors from the parent up to the root
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Nearest node (including `id` itself) whose rule satisfies `pred`
    pub fn find_enclosing(&self, id: NodeId, pred: impl Fn(RuleKind) -> bool) -> Option<NodeId> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|&n| self.rule(n).is_some_and(&pred))
    }

    /// Node ids of every rule node in pre-order
    pub fn rule_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut out = Vec::new();
        self.walk(&mut CollectRules(&mut out));
        out.into_iter()
    }

    /// Concatenated text of the non-hidden tokens under `id`
    pub fn text(&self, id: NodeId, tokens: &TokenStream) -> String {
        let mut text = String::new();
        self.collect_tokens(id, &mut |index| {
            if let Some(token) = tokens.get(index) {
                text.push_str(&token.text);
            }
        });
        text
    }

    fn collect_tokens(&self, id: NodeId, sink: &mut impl FnMut(usize)) {
        match self.node(id).kind {
            NodeKind::Token(index) => sink(index),
            NodeKind::Rule(_) => {
                for &child in self.children(id) {
                    self.collect_tokens(child, sink);
                }
            }
        }
    }

    /// Depth-first walk firing enter/exit callbacks for every rule node
    pub fn walk<L: TreeListener + ?Sized>(&self, listener: &mut L) {
        if self.nodes.is_empty() {
            return;
        }
        let mut stack = vec![(self.root(), false)];
        while let Some((id, exiting)) = stack.pop() {
            let Some(rule) = self.rule(id) else {
                continue;
            };
            if exiting {
                listener.exit_rule(self, id, rule);
                continue;
            }
            listener.enter_rule(self, id, rule);
            stack.push((id, true));
            for &child in self.children(id).iter().rev() {
                stack.push((child, false));
            }
        }
    }
}

struct CollectRules<'a>(&'a mut Vec<NodeId>);

impl TreeListener for CollectRules<'_> {
    fn enter_rule(&mut self, _tree: &ParseTree, node: NodeId, _rule: RuleKind) {
        self.0.push(node);
    }
}

pub struct Ancestors<'a> {
    tree: &'a ParseTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Incremental builder used by the parser
///
/// Rules are opened and closed in stack order; a rule's `stop` is derived
/// from its last child that covers any token.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    stack: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a rule node starting at token `start`
    pub fn start_rule(&mut self, rule: RuleKind, start: usize) -> NodeId {
        self.push_node(NodeKind::Rule(rule), start, None)
    }

    /// Attach a consumed token to the innermost open rule
    pub fn token(&mut self, index: usize) -> NodeId {
        let id = self.push_node(NodeKind::Token(index), index, Some(index));
        self.stack.pop();
        id
    }

    /// Close the innermost open rule
    pub fn finish_rule(&mut self) {
        if let Some(id) = self.stack.pop() {
            let stop = self.nodes[id.0]
                .children
                .iter()
                .rev()
                .find_map(|child| self.nodes[child.0].stop);
            self.nodes[id.0].stop = stop;
        }
    }

    /// Close any rules left open and return the tree
    pub fn finish(mut self) -> ParseTree {
        while !self.stack.is_empty() {
            self.finish_rule();
        }
        ParseTree { nodes: self.nodes }
    }

    fn push_node(&mut self, kind: NodeKind, start: usize, stop: Option<usize>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = self.stack.last().copied();
        self.nodes.push(Node {
            kind,
            parent,
            children: Vec::new(),
            start,
            stop,
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        self.stack.push(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn sample() -> ParseTree {
        // Field(Identifier(0) Dot(1) Identifier(2))
        let mut builder = TreeBuilder::new();
        builder.start_rule(RuleKind::Field, 0);
        builder.start_rule(RuleKind::Identifier, 0);
        builder.token(0);
        builder.finish_rule();
        builder.token(1);
        builder.start_rule(RuleKind::Identifier, 2);
        builder.token(2);
        builder.finish_rule();
        builder.finish()
    }

    #[test]
    fn test_builder_spans() {
        let tree = sample();
        let root = tree.root();
        assert_eq!(tree.node(root).start, 0);
        assert_eq!(tree.node(root).stop, Some(2));
        assert_eq!(tree.child_count(root), 3);
    }

    #[test]
    fn test_empty_rule_has_no_stop() {
        let mut builder = TreeBuilder::new();
        builder.start_rule(RuleKind::Query, 0);
        builder.start_rule(RuleKind::SelectExprs, 1);
        builder.finish_rule();
        let tree = builder.finish();
        let exprs = tree.child(tree.root(), 0).unwrap();
        assert_eq!(tree.node(exprs).stop, None);
        assert_eq!(tree.node(tree.root()).stop, None);
    }

    #[test]
    fn test_parent_links_and_ancestors() {
        let tree = sample();
        let ident = tree.child(tree.root(), 2).unwrap();
        let token = tree.child(ident, 0).unwrap();
        let ancestors: Vec<_> = tree.ancestors(token).collect();
        assert_eq!(ancestors, vec![ident, tree.root()]);
        assert_eq!(
            tree.find_enclosing(token, |r| r == RuleKind::Field),
            Some(tree.root())
        );
    }

    #[test]
    fn test_text() {
        let tokens = tokenize("Account.Name");
        let tree = sample();
        assert_eq!(tree.text(tree.root(), &tokens), "Account.Name");
    }

    #[test]
    fn test_walk_order() {
        struct Recorder(Vec<String>);
        impl TreeListener for Recorder {
            fn enter_rule(&mut self, _: &ParseTree, _: NodeId, rule: RuleKind) {
                self.0.push(format!("enter {rule}"));
            }
            fn exit_rule(&mut self, _: &ParseTree, _: NodeId, rule: RuleKind) {
                self.0.push(format!("exit {rule}"));
            }
        }

        let tree = sample();
        let mut recorder = Recorder(Vec::new());
        tree.walk(&mut recorder);
        assert_eq!(
            recorder.0,
            vec![
                "enter Field",
                "enter Identifier",
                "exit Identifier",
                "enter Identifier",
                "exit Identifier",
                "exit Field"
            ]
        );
    }
}
