//! Trace production calls for debugging.

use sieve_lib::Colors;
use sieve_lib::Recognizer;
use sieve_lib::parser::{PrintTracer, Verbosity};

use super::check::verdict;
use super::input::Input;

pub struct TraceArgs {
    pub input: Input,
    pub verbosity: Verbosity,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let recognizer = Recognizer::new().with_recursion_limit(args.recursion_limit);
    let colors = Colors::new(args.color);
    let mut all_accepted = true;

    for line in args.input.lines() {
        let mut tracer = PrintTracer::new(args.verbosity, colors);
        let result = recognizer.recognize_traced(line, &mut tracer);

        print!("{}", tracer.dump());
        println!("{}---{}", colors.dim, colors.reset);
        println!("{}", verdict(&result));

        all_accepted &= result.is_ok();
    }

    if !all_accepted {
        std::process::exit(1);
    }
}
