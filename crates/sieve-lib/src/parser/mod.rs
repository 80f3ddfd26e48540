//! Parser infrastructure for the search query language.
//!
//! # Architecture
//!
//! A hand-written, fully backtracking recognizer:
//!
//! - Lazy lexer with a pushback stack (`lexer`)
//! - Three combinators that either succeed or leave the lexer untouched (`combinators`)
//! - One table of designators per production, dispatched through `parse_rule` (`grammar`)
//!
//! Failure is an ordinary `None` all the way up. The recognizer never builds a tree
//! while it runs; a successful production returns the tokens it consumed, grouped by
//! the sub-productions that consumed them. After the whole line is accepted, that
//! derivation is replayed into a Rowan green tree for inspection.
//!
//! # Restoration
//!
//! Every production, after failing, leaves the lexer in the state it found it in.
//! `sequence` is the only place that enforces this: on the first miss it pushes back
//! all tokens consumed so far, nested productions included, last token first.

pub mod cst;
pub mod lexer;
pub mod trace;

mod combinators;
mod core;
mod grammar;
mod invariants;
mod printer;

#[cfg(test)]
mod tests;

pub use combinators::{Designator, Element, Node};
pub use self::core::Parser;
pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};
pub use lexer::{Lexer, Token, lex};
pub use printer::ParsePrinter;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

use rowan::{GreenNode, GreenNodeBuilder};

use crate::Result;

/// An accepted line: the derivation rooted at `Query`.
#[derive(Debug, Clone)]
pub struct Parse<'src> {
    source: &'src str,
    root: Node<'src>,
}

impl<'src> Parse<'src> {
    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn root(&self) -> &Node<'src> {
        &self.root
    }

    /// Every consumed token in input order. Always ends right before `Eof`.
    pub fn tokens(&self) -> Vec<Token<'src>> {
        self.root.tokens()
    }

    /// Replays the derivation into an immutable green tree.
    pub fn green(&self) -> GreenNode {
        let mut builder = GreenNodeBuilder::new();
        replay(&self.root, &mut builder);
        builder.finish()
    }

    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green())
    }

    pub fn printer(&self) -> ParsePrinter<'_, 'src> {
        ParsePrinter::new(self)
    }
}

fn replay(node: &Node<'_>, builder: &mut GreenNodeBuilder<'static>) {
    builder.start_node(node.kind().into());
    for child in node.children() {
        match child {
            Element::Token(token) => builder.token(token.kind.into(), token.text),
            Element::Node(child) => replay(child, builder),
        }
    }
    builder.finish_node();
}

/// Recognition settings. Cheap to build; one instance can serve any number of lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recognizer {
    recursion_limit: Option<u32>,
}

impl Recognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum production nesting. `None` (the default) means unbounded.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn recognize<'src>(&self, source: &'src str) -> Result<Parse<'src>> {
        self.recognize_traced(source, &mut NoopTracer)
    }

    pub fn recognize_traced<'src, T: Tracer>(
        &self,
        source: &'src str,
        tracer: &mut T,
    ) -> Result<Parse<'src>> {
        let root = Parser::new(source, tracer)
            .with_recursion_limit(self.recursion_limit)
            .parse()?;
        Ok(Parse { source, root })
    }
}

/// Main entry point with default settings.
pub fn recognize(source: &str) -> Result<Parse<'_>> {
    Recognizer::new().recognize(source)
}
