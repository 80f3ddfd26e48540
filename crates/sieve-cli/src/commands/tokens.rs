use std::fmt::Write;

use serde::Serialize;
use sieve_lib::parser::{Token, lex};

use super::input::Input;

pub struct TokensArgs {
    pub input: Input,
    pub json: bool,
}

#[derive(Serialize)]
struct TokenRecord<'src> {
    kind: String,
    text: &'src str,
    start: u32,
    end: u32,
}

impl<'src> From<&Token<'src>> for TokenRecord<'src> {
    fn from(token: &Token<'src>) -> Self {
        Self {
            kind: format!("{:?}", token.kind),
            text: token.text,
            start: token.span.start().into(),
            end: token.span.end().into(),
        }
    }
}

pub fn run(args: TokensArgs) {
    for line in args.input.lines() {
        if args.json {
            println!("{}", format_json(line));
        } else {
            print!("{}", format_text(line));
        }
    }
}

/// One `Kind "text"` line per token, whitespace included.
pub fn format_text(line: &str) -> String {
    let mut out = String::new();
    for token in lex(line) {
        writeln!(out, "{:?} {:?}", token.kind, token.text).expect("String write never fails");
    }
    out
}

/// The token stream as a single JSON array.
pub fn format_json(line: &str) -> String {
    let records: Vec<TokenRecord<'_>> = lex(line).iter().map(TokenRecord::from).collect();
    serde_json::to_string(&records).expect("token records are plain data")
}
