//! Syntax kinds for the search query language.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (one per
//! grammar production). Logos derives token recognition; node kinds lack token/regex
//! attributes. `SieveLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("+")]
    IncludeOp = 0,

    #[token("-")]
    ExcludeOp,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    /// Double-quoted, non-empty, no escapes.
    #[regex(r#""[^"]+""#)]
    Phrase,

    #[token("*")]
    StarOp,

    #[regex(r"[ \t\r\n\x0B\x0C]+")]
    Whitespace,

    /// `AND` followed by whitespace. Promoted from `Word` by the lexer.
    KwAnd,

    /// `OR` followed by whitespace. Promoted from `Word` by the lexer.
    KwOr,

    #[regex(r"[\p{Alphabetic}\p{Nd}@%$&]+")]
    Word,

    /// End of input (zero-width).
    Eof,

    /// No lexical rule matches (zero-width, the lexer does not advance).
    Unknown,

    // --- Node kinds (productions) ---
    WordSequence,
    PhraseOrWords,
    Exclusion,
    Inclusion,
    PrefixTerm,
    Term,
    AndTerm,
    OrTerm,
    Query,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    /// Kinds produced by the lexer, including `Eof` and `Unknown`.
    #[inline]
    pub fn is_token(self) -> bool {
        self <= Unknown
    }

    /// Kinds produced by grammar productions.
    #[inline]
    pub fn is_node(self) -> bool {
        self > Unknown && self < __LAST
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        self == Whitespace
    }

    /// Zero-width kinds that never consume input.
    #[inline]
    pub fn is_zero_width(self) -> bool {
        matches!(self, Eof | Unknown)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SieveLang {}

impl Language for SieveLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<SieveLang>;
pub type SyntaxToken = rowan::SyntaxToken<SieveLang>;
