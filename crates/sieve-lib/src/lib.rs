//! Sieve: backtracking recognizer for boolean search queries.
//!
//! Accepts terms, quoted phrases, `+`/`-` prefixes, `word*` prefix terms, parenthesized
//! groups and `AND`/`OR` connectives, with `AND` binding tighter than `OR`.
//!
//! # Example
//!
//! ```
//! use sieve_lib::recognize;
//!
//! let parse = recognize("(rust AND \"borrow checker\") OR +lifetimes").expect("valid query");
//! print!("{}", parse.printer().dump());
//!
//! let err = recognize("a AND AND b").unwrap_err();
//! eprintln!("{}", err.render("a AND AND b", false));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod colors;
pub mod diagnostics;
pub mod parser;

pub use colors::Colors;
pub use parser::{Parse, Recognizer, SyntaxKind, recognize};

use rowan::TextRange;

/// Why a line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The grammar does not match the start of the line.
    ///
    /// `found` is the token furthest into the line that no terminal accepted.
    #[error("recognizer failed")]
    NoMatch { found: SyntaxKind, span: TextRange },

    /// The grammar matched a strict prefix of the line.
    #[error("unexpected tokens at end of input")]
    TrailingInput {
        found: SyntaxKind,
        text: String,
        span: TextRange,
    },

    /// Recursion fuel exhausted (groups nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

impl Error {
    /// Location of the offending token, if the error has one.
    pub fn span(&self) -> Option<TextRange> {
        match self {
            Error::NoMatch { span, .. } | Error::TrailingInput { span, .. } => Some(*span),
            Error::RecursionLimitExceeded => None,
        }
    }
}

/// Result type for recognition.
pub type Result<T> = std::result::Result<T, Error>;
