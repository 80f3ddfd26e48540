//! Lexer for the search query language.
//!
//! Tokens are produced lazily from the unconsumed suffix of the line, one Logos match
//! at a time. A pushback stack sits in front of the live input so the combinators can
//! unread tokens after a failed attempt:
//!
//! ```text
//! logical stream = pushback (top first) ++ tokens scanned from `remainder()`
//! ```
//!
//! ## Keywords
//!
//! `AND` and `OR` are keywords only when whitespace follows them. Logos has no
//! lookahead, so they are lexed as `Word` and promoted afterwards by peeking at the
//! first character past the match. The peeked character is never consumed.
//!
//! ## Error handling
//!
//! Unrecognized input yields a zero-width `Unknown` token and the lexer stays where
//! it is. No terminal matches `Unknown`, so the caller sees an ordinary mismatch.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::cst::SyntaxKind;

/// A lexed token: kind, the exact text it consumed, and where that text sits in the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: SyntaxKind,
    pub text: &'src str,
    pub span: TextRange,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: SyntaxKind, text: &'src str, span: TextRange) -> Self {
        Self { kind, text, span }
    }
}

/// Offsets must fit in `u32`, so a line is limited to 4 GiB.
pub(super) fn range_to_text_range(range: Range<usize>) -> TextRange {
    let start = u32::try_from(range.start).expect("line offset exceeds u32::MAX");
    let end = u32::try_from(range.end).expect("line offset exceeds u32::MAX");
    TextRange::new(start.into(), end.into())
}

/// Token stream over one input line with unbounded pushback.
///
/// Exclusively owned by a single recognition attempt.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    offset: usize,
    pushback: Vec<Token<'src>>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            pushback: Vec::with_capacity(8),
        }
    }

    /// Next token of the logical stream. Never fails: running off the end yields `Eof`,
    /// unlexable input yields `Unknown`.
    pub fn next_token(&mut self) -> Token<'src> {
        match self.pushback.pop() {
            Some(token) => token,
            None => self.scan(),
        }
    }

    /// Makes `token` the next result of [`next_token`](Self::next_token).
    pub fn push(&mut self, token: Token<'src>) {
        self.pushback.push(token);
    }

    /// Unconsumed input, not counting tokens waiting in the pushback stack.
    pub fn remainder(&self) -> &'src str {
        &self.source[self.offset..]
    }

    /// Number of tokens waiting to be re-delivered.
    pub fn pending(&self) -> usize {
        self.pushback.len()
    }

    fn scan(&mut self) -> Token<'src> {
        let rest = self.remainder();
        let mut logos = SyntaxKind::lexer(rest);

        let kind = match logos.next() {
            Some(Ok(kind)) => kind,
            Some(Err(())) => return self.zero_width(SyntaxKind::Unknown),
            None => return self.zero_width(SyntaxKind::Eof),
        };

        let span = logos.span();
        debug_assert_eq!(span.start, 0, "no lexical rule skips input");
        let text = &rest[span.clone()];
        let kind = promote_keyword(kind, text, &rest[span.end..]);

        let start = self.offset;
        self.offset += text.len();
        Token::new(kind, text, range_to_text_range(start..self.offset))
    }

    fn zero_width(&self, kind: SyntaxKind) -> Token<'src> {
        Token::new(kind, "", range_to_text_range(self.offset..self.offset))
    }
}

fn promote_keyword(kind: SyntaxKind, text: &str, after: &str) -> SyntaxKind {
    if kind != SyntaxKind::Word || !after.starts_with(is_whitespace) {
        return kind;
    }
    match text {
        "AND" => SyntaxKind::KwAnd,
        "OR" => SyntaxKind::KwOr,
        _ => kind,
    }
}

/// Same character set as the `Whitespace` rule.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0B' | '\x0C')
}

/// Tokenizes a whole line, up to and including the first `Eof` or `Unknown` token.
pub fn lex(source: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.kind.is_zero_width() {
            return tokens;
        }
    }
}
