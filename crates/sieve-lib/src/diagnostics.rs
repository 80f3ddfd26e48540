//! Rendering of rejections against the line they came from.

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use rowan::TextRange;

use crate::Error;
use crate::parser::SyntaxKind;

impl Error {
    /// Renders the error as an annotated snippet of `source`.
    ///
    /// Errors without a location render as their plain message.
    pub fn render(&self, source: &str, colored: bool) -> String {
        let Some(span) = self.span() else {
            return format!("error: {}", self);
        };

        let renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let title = self.to_string();
        let label = self.label();
        let snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(span, source))
                .label(&label),
        );

        let report = vec![Level::ERROR.primary_title(&title).element(snippet)];
        renderer.render(&report).to_string()
    }

    fn label(&self) -> String {
        match self {
            Error::NoMatch { found, .. } => format!("{} not expected here", describe(*found)),
            Error::TrailingInput { found, .. } => {
                format!("{} follows a complete query", describe(*found))
            }
            Error::RecursionLimitExceeded => "nested too deeply".to_owned(),
        }
    }
}

/// Human-readable token name.
pub fn describe(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::IncludeOp => "`+`",
        SyntaxKind::ExcludeOp => "`-`",
        SyntaxKind::ParenOpen => "`(`",
        SyntaxKind::ParenClose => "`)`",
        SyntaxKind::Phrase => "phrase",
        SyntaxKind::StarOp => "`*`",
        SyntaxKind::Whitespace => "whitespace",
        SyntaxKind::KwAnd => "`AND`",
        SyntaxKind::KwOr => "`OR`",
        SyntaxKind::Word => "word",
        SyntaxKind::Eof => "end of input",
        SyntaxKind::Unknown => "unrecognized character",
        _ => "syntax node",
    }
}

/// Zero-width spans point at the next character when there is one.
fn adjust_range(range: TextRange, source: &str) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        let width = source[start..].chars().next().map_or(0, char::len_utf8);
        return start..start + width;
    }

    start..end
}
