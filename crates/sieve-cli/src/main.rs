mod cli;
mod commands;


use std::io;

use clap::Parser;
use sieve_lib::parser::Verbosity;

use cli::{Cli, Command};
use commands::check::CheckArgs;
use commands::input::load_or_exit;
use commands::tokens::TokensArgs;
use commands::trace::TraceArgs;
use commands::tree::TreeArgs;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            input,
            explain,
            common,
        } => commands::check::run(CheckArgs {
            input: load_or_exit(&input),
            explain,
            recursion_limit: common.recursion_limit,
            color: common.color.should_colorize(io::stderr()),
        }),
        Command::Tokens { input, json } => commands::tokens::run(TokensArgs {
            input: load_or_exit(&input),
            json,
        }),
        Command::Tree {
            input,
            raw,
            spans,
            common,
        } => commands::tree::run(TreeArgs {
            input: load_or_exit(&input),
            raw,
            spans,
            recursion_limit: common.recursion_limit,
            color: common.color.should_colorize(io::stderr()),
        }),
        Command::Trace {
            input,
            verbose,
            common,
        } => commands::trace::run(TraceArgs {
            input: load_or_exit(&input),
            verbosity: if verbose {
                Verbosity::Verbose
            } else {
                Verbosity::Default
            },
            recursion_limit: common.recursion_limit,
            color: common.color.should_colorize(io::stdout()),
        }),
    }
}
