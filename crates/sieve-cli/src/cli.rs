use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `Auto` colors only when `stream` is a terminal.
    pub fn should_colorize(self, stream: impl IsTerminal) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => stream.is_terminal(),
        }
    }
}

#[derive(Parser)]
#[command(name = "sieve", bin_name = "sieve")]
#[command(about = "Backtracking recognizer for boolean search queries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a verdict for every input line
    #[command(after_help = r#"EXAMPLES:
  sieve check -q 'rust AND (async OR tokio)'
  sieve check queries.txt --explain
  cat queries.txt | sieve check"#)]
    Check {
        #[command(flatten)]
        input: InputArgs,

        /// Render the reason for each rejected line to stderr
        #[arg(long)]
        explain: bool,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Print the token stream of every input line
    #[command(after_help = r#"EXAMPLES:
  sieve tokens -q '"exact phrase" OR pre*'
  sieve tokens queries.txt --json"#)]
    Tokens {
        #[command(flatten)]
        input: InputArgs,

        /// One JSON array per line instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the derivation tree of every accepted line
    #[command(after_help = r#"EXAMPLES:
  sieve tree -q 'a AND b OR c'
  sieve tree -q '( a )' --raw --spans"#)]
    Tree {
        #[command(flatten)]
        input: InputArgs,

        /// Include whitespace tokens
        #[arg(long)]
        raw: bool,

        /// Show byte ranges
        #[arg(long)]
        spans: bool,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Trace production calls while recognizing every input line
    #[command(after_help = r#"EXAMPLES:
  sieve trace -q 'abc*'
  sieve trace -q 'a AND AND b' -v"#)]
    Trace {
        #[command(flatten)]
        input: InputArgs,

        /// Also show matched text and pushed-back tokens
        #[arg(short = 'v', long)]
        verbose: bool,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug)]
#[group(id = "input", multiple = false)]
pub struct InputArgs {
    /// Single query as inline text
    #[arg(short = 'q', long = "query", value_name = "QUERY")]
    pub query_text: Option<String>,

    /// File with one query per line (use "-" or omit for stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Colorize output (auto-detected by default)
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorChoice,

    /// Maximum production nesting (unbounded by default)
    #[arg(long, value_name = "N")]
    pub recursion_limit: Option<u32>,
}
