//! Backtracking primitives: `sequence`, `choice`, `optional`.
//!
//! These three are the whole backtracking engine. Each one either succeeds with the
//! elements it consumed, or fails with the lexer exactly where it was before the
//! call. `choice` relies on `sequence` for that guarantee, so it never resets the
//! lexer between alternatives itself.

use rowan::TextRange;

use super::core::Parser;
use super::cst::SyntaxKind;
use super::lexer::Token;
use super::trace::Tracer;

/// One step of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Designator {
    /// Matches one token of this kind.
    Terminal(SyntaxKind),
    /// Runs the production of this node kind.
    Rule(SyntaxKind),
    /// Matches the inner sequence, or nothing. Always succeeds.
    Optional(&'static [Designator]),
}

/// A consumed token, or the result of a nested production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element<'src> {
    Token(Token<'src>),
    Node(Node<'src>),
}

impl<'src> Element<'src> {
    fn collect_tokens(&self, out: &mut Vec<Token<'src>>) {
        match self {
            Element::Token(token) => out.push(*token),
            Element::Node(node) => node.collect_tokens(out),
        }
    }
}

/// Derivation of one successful production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'src> {
    kind: SyntaxKind,
    children: Vec<Element<'src>>,
}

impl<'src> Node<'src> {
    pub(super) fn new(kind: SyntaxKind, children: Vec<Element<'src>>) -> Self {
        debug_assert!(kind.is_node(), "Node::new: {kind:?} is not a node kind");
        Self { kind, children }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn children(&self) -> &[Element<'src>] {
        &self.children
    }

    /// Consumed tokens in input order, including those of nested productions.
    pub fn tokens(&self) -> Vec<Token<'src>> {
        let mut out = Vec::new();
        self.collect_tokens(&mut out);
        out
    }

    /// Covering range of the consumed tokens; `None` when nothing was consumed.
    pub fn text_range(&self) -> Option<TextRange> {
        let tokens = self.tokens();
        let first = tokens.first()?;
        let last = tokens.last()?;
        Some(first.span.cover(last.span))
    }

    /// Child nodes of the given kind, in order.
    pub fn child_nodes(&self, kind: SyntaxKind) -> impl Iterator<Item = &Node<'src>> {
        self.children.iter().filter_map(move |el| match el {
            Element::Node(node) if node.kind == kind => Some(node),
            _ => None,
        })
    }

    fn collect_tokens(&self, out: &mut Vec<Token<'src>>) {
        for child in &self.children {
            child.collect_tokens(out);
        }
    }
}

pub(super) fn flatten_tokens<'src>(elements: &[Element<'src>]) -> Vec<Token<'src>> {
    let mut out = Vec::new();
    for el in elements {
        el.collect_tokens(&mut out);
    }
    out
}

impl<'src, T: Tracer> Parser<'src, '_, T> {
    /// Matches every designator in order, or consumes nothing.
    pub(super) fn sequence(&mut self, designators: &[Designator]) -> Option<Vec<Element<'src>>> {
        let mut consumed = Vec::with_capacity(designators.len());

        for designator in designators {
            let matched = match *designator {
                Designator::Terminal(kind) => match self.terminal(kind) {
                    Some(token) => {
                        consumed.push(Element::Token(token));
                        true
                    }
                    None => false,
                },
                Designator::Rule(kind) => match self.parse_rule(kind) {
                    Some(node) => {
                        consumed.push(Element::Node(node));
                        true
                    }
                    None => false,
                },
                Designator::Optional(inner) => {
                    consumed.extend(self.optional(inner));
                    true
                }
            };

            if !matched {
                self.unread(consumed);
                return None;
            }
        }

        Some(consumed)
    }

    /// First alternative that matches, tried in order.
    pub(super) fn choice(
        &mut self,
        alternatives: &[&[Designator]],
    ) -> Option<Vec<Element<'src>>> {
        alternatives.iter().find_map(|alt| self.sequence(alt))
    }

    /// `choice([designators, []])`: the inner sequence, or nothing.
    pub(super) fn optional(&mut self, designators: &[Designator]) -> Vec<Element<'src>> {
        let alternatives: [&[Designator]; 2] = [designators, &[]];
        self.choice(&alternatives)
            .expect("the empty alternative always matches")
    }
}
