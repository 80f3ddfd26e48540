//! Tracing infrastructure for debugging recognition.
//!
//! # Design: Zero-Cost Abstraction
//!
//! When `NoopTracer` is used every hook is an `#[inline(always)]` empty function and
//! the compiler removes the calls along with their arguments. No tracing state lives
//! in the parser itself; `PrintTracer` keeps its own nesting depth.

use super::combinators::Node;
use super::cst::SyntaxKind;
use super::lexer::Token;
use crate::Colors;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Production entry, match and failure.
    #[default]
    Default,
    /// Also matched token text and every pushback.
    Verbose,
}

/// Hooks called by the parser while it runs the grammar.
///
/// - `trace_enter` - before a production runs
/// - `trace_match` - after a production succeeds
/// - `trace_fail` - after a production fails (the lexer is already restored)
/// - `trace_backtrack` - when a failed sequence returns tokens to the lexer
pub trait Tracer {
    fn trace_enter(&mut self, rule: SyntaxKind);

    fn trace_match(&mut self, node: &Node<'_>);

    fn trace_fail(&mut self, rule: SyntaxKind);

    /// `tokens` are in input order; they are pushed back last-first.
    fn trace_backtrack(&mut self, tokens: &[Token<'_>]);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _rule: SyntaxKind) {}

    #[inline(always)]
    fn trace_match(&mut self, _node: &Node<'_>) {}

    #[inline(always)]
    fn trace_fail(&mut self, _rule: SyntaxKind) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _tokens: &[Token<'_>]) {}
}

/// Tracer that collects an indented log of production calls.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    depth: usize,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            depth: 0,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn push_line(&mut self, line: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{line}"));
    }
}

fn joined_text(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, rule: SyntaxKind) {
        let c = self.colors;
        self.push_line(format!("Parsing {}{:?}{}", c.blue, rule, c.reset));
        self.depth += 1;
    }

    fn trace_match(&mut self, node: &Node<'_>) {
        self.depth = self.depth.saturating_sub(1);
        let c = self.colors;
        let mut line = format!("{}{:?}{} matched", c.blue, node.kind(), c.reset);
        if self.verbosity == Verbosity::Verbose {
            let text = joined_text(&node.tokens());
            line.push_str(&format!(" {}{:?}{}", c.green, text, c.reset));
        }
        self.push_line(line);
    }

    fn trace_fail(&mut self, rule: SyntaxKind) {
        self.depth = self.depth.saturating_sub(1);
        let c = self.colors;
        self.push_line(format!("{}{:?}{} {}failed{}", c.blue, rule, c.reset, c.red, c.reset));
    }

    fn trace_backtrack(&mut self, tokens: &[Token<'_>]) {
        if self.verbosity != Verbosity::Verbose {
            return;
        }
        let c = self.colors;
        let noun = if tokens.len() == 1 { "token" } else { "tokens" };
        self.push_line(format!(
            "{}pushed back {} {} {:?}{}",
            c.dim,
            tokens.len(),
            noun,
            joined_text(tokens),
            c.reset
        ));
    }
}
