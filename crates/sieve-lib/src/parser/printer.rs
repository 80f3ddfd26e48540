use std::fmt::Write;

use rowan::NodeOrToken;

use super::Parse;
use super::cst::{SyntaxNode, SyntaxToken};

/// Builder for dumping an accepted line as an indented derivation tree.
pub struct ParsePrinter<'p, 'src> {
    parse: &'p Parse<'src>,
    trivia: bool,
    spans: bool,
}

impl<'p, 'src> ParsePrinter<'p, 'src> {
    pub fn new(parse: &'p Parse<'src>) -> Self {
        Self {
            parse,
            trivia: false,
            spans: false,
        }
    }

    /// Include whitespace tokens.
    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_cst(&self.parse.syntax(), 0, w)
    }

    fn format_cst(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());

        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => self.format_token(&t, indent + 1, w)?,
            }
        }
        Ok(())
    }

    fn format_token(&self, token: &SyntaxToken, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        if !self.trivia && token.kind().is_trivia() {
            return Ok(());
        }
        let prefix = "  ".repeat(indent);
        let span = self.span_str(token.text_range());
        writeln!(w, "{}{:?}{} {:?}", prefix, token.kind(), span, token.text())
    }

    fn span_str(&self, range: rowan::TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}
