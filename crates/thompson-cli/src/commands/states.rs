//! Print the state table of the compiled automaton.

use thompson_lib::Colors;

use super::run_common;

pub struct StatesArgs {
    pub pattern: String,
    pub color: bool,
}

pub fn run(args: StatesArgs) {
    let automaton = run_common::or_exit(
        thompson_lib::compile(&args.pattern),
        &args.pattern,
        args.color,
    );
    println!("{}", automaton.dump_with(Colors::new(args.color)));
}
