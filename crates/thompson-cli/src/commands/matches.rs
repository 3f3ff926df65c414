//! Whole-string match with the verdict on stdout and in the exit status.

use thompson_lib::{Colors, Matcher};

use super::run_common;

pub struct MatchArgs {
    pub pattern: String,
    pub input: String,
    pub color: bool,
}

pub fn run(args: MatchArgs) {
    let automaton = run_common::or_exit(
        thompson_lib::compile(&args.pattern),
        &args.pattern,
        args.color,
    );
    let matched = Matcher::new(&automaton).is_match(&args.input);
    run_common::finish_with_verdict(matched, Colors::new(args.color));
}
