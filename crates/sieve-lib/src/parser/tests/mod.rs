mod grammar;

use crate::Error;
use crate::parser::recognize;

/// Derivation tree of an accepted line, whitespace hidden.
pub(crate) fn expect_valid_tree(input: &str) -> String {
    match recognize(input) {
        Ok(parse) => parse.printer().dump(),
        Err(err) => panic!(
            "expected {input:?} to be accepted, got:\n{}",
            err.render(input, false)
        ),
    }
}

/// Derivation tree of an accepted line, whitespace included.
pub(crate) fn expect_valid_tree_raw(input: &str) -> String {
    match recognize(input) {
        Ok(parse) => parse.printer().with_trivia(true).dump(),
        Err(err) => panic!(
            "expected {input:?} to be accepted, got:\n{}",
            err.render(input, false)
        ),
    }
}

pub(crate) fn expect_rejected(input: &str) -> Error {
    match recognize(input) {
        Ok(parse) => panic!(
            "expected {input:?} to be rejected, got:\n{}",
            parse.printer().dump()
        ),
        Err(err) => err,
    }
}
