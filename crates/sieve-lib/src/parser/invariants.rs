//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::combinators::Designator;
use super::core::Parser;
use super::cst::SyntaxKind;
use super::trace::Tracer;

impl<T: Tracer> Parser<'_, '_, T> {
    #[inline]
    pub(super) fn assert_terminal(&self, kind: SyntaxKind) {
        if !kind.is_token() {
            Self::unsupported_designator(Designator::Terminal(kind));
        }
    }

    /// Grammar tables are static, so a bad designator is a bug in the grammar itself.
    #[cold]
    pub(super) fn unsupported_designator(designator: Designator) -> ! {
        panic!(
            "unsupported designator: {:?} (terminals take token kinds, rules take node kinds)",
            designator
        )
    }
}
