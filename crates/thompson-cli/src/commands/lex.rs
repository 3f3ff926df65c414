//! Print the tokens of a pattern.

use super::run_common;

pub struct LexArgs {
    pub pattern: String,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: LexArgs) {
    let tokens = run_common::or_exit(thompson_lib::lex(&args.pattern), &args.pattern, args.color);
    run_common::print_json(&tokens, args.compact);
}
