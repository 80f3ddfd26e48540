use sieve_lib::Recognizer;

use super::input::Input;

pub struct TreeArgs {
    pub input: Input,
    pub raw: bool,
    pub spans: bool,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    let recognizer = Recognizer::new().with_recursion_limit(args.recursion_limit);
    let mut all_accepted = true;

    for line in args.input.lines() {
        match recognizer.recognize(line) {
            Ok(parse) => print!(
                "{}",
                parse
                    .printer()
                    .with_trivia(args.raw)
                    .with_spans(args.spans)
                    .dump()
            ),
            Err(err) => {
                all_accepted = false;
                eprintln!("{}", err.render(line, args.color));
            }
        }
    }

    if !all_accepted {
        std::process::exit(1);
    }
}
