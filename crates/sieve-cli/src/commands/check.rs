use sieve_lib::{Parse, Recognizer};

use super::input::Input;

pub struct CheckArgs {
    pub input: Input,
    pub explain: bool,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let recognizer = Recognizer::new().with_recursion_limit(args.recursion_limit);
    let mut all_accepted = true;

    for line in args.input.lines() {
        let result = recognizer.recognize(line);
        println!("{}", verdict(&result));

        if let Err(err) = result {
            all_accepted = false;
            if args.explain {
                eprintln!("{}", err.render(line, args.color));
            }
        }
    }

    if !all_accepted {
        std::process::exit(1);
    }
}

/// `true`, or `false: ` followed by the rejection reason.
pub fn verdict(result: &sieve_lib::Result<Parse<'_>>) -> String {
    match result {
        Ok(_) => "true".to_owned(),
        Err(err) => format!("false: {}", err),
    }
}
