//! Parser state and low-level token operations.

use super::combinators::{Element, Node, flatten_tokens};
use super::cst::SyntaxKind;
use super::lexer::{Lexer, Token};
use super::trace::Tracer;
use crate::Error;

/// One recognition attempt over one line.
///
/// Owns the lexer exclusively. Productions never touch it directly; they go through
/// the combinators, which go through [`terminal`](Self::terminal) and
/// [`unread`](Self::unread).
pub struct Parser<'src, 't, T: Tracer> {
    pub(super) lexer: Lexer<'src>,
    pub(super) tracer: &'t mut T,
    depth: u32,
    recursion_limit: Option<u32>,
    furthest_mismatch: Option<Token<'src>>,
    fatal_error: Option<Error>,
}

impl<'src, 't, T: Tracer> Parser<'src, 't, T> {
    pub fn new(source: &'src str, tracer: &'t mut T) -> Self {
        Self {
            lexer: Lexer::new(source),
            tracer,
            depth: 0,
            recursion_limit: None,
            furthest_mismatch: None,
            fatal_error: None,
        }
    }

    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Runs `Query` and checks that nothing but `Eof` follows it.
    pub fn parse(mut self) -> Result<Node<'src>, Error> {
        let root = self.parse_rule(SyntaxKind::Query);

        if let Some(err) = self.fatal_error.take() {
            return Err(err);
        }

        let Some(root) = root else {
            let found = match self.furthest_mismatch {
                Some(token) => token,
                None => self.lexer.next_token(),
            };
            return Err(Error::NoMatch {
                found: found.kind,
                span: found.span,
            });
        };

        let next = self.lexer.next_token();
        if next.kind != SyntaxKind::Eof {
            return Err(Error::TrailingInput {
                found: next.kind,
                text: next.text.to_owned(),
                span: next.span,
            });
        }

        Ok(root)
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    /// Reads one token; keeps it if it is `kind`, otherwise pushes it straight back.
    pub(super) fn terminal(&mut self, kind: SyntaxKind) -> Option<Token<'src>> {
        self.assert_terminal(kind);
        let token = self.lexer.next_token();
        if token.kind == kind {
            return Some(token);
        }
        self.record_mismatch(token);
        self.lexer.push(token);
        None
    }

    /// Returns every token in `consumed` to the lexer, last token first.
    pub(super) fn unread(&mut self, consumed: Vec<Element<'src>>) {
        if consumed.is_empty() {
            return;
        }
        let tokens = flatten_tokens(&consumed);
        self.tracer.trace_backtrack(&tokens);
        for token in tokens.into_iter().rev() {
            self.lexer.push(token);
        }
    }

    fn record_mismatch(&mut self, token: Token<'src>) {
        let further = match self.furthest_mismatch {
            Some(prev) => token.span.start() > prev.span.start(),
            None => true,
        };
        if further {
            self.furthest_mismatch = Some(token);
        }
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.fatal_error.is_some() {
            return false;
        }
        if let Some(limit) = self.recursion_limit
            && self.depth >= limit
        {
            self.fatal_error = Some(Error::RecursionLimitExceeded);
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
