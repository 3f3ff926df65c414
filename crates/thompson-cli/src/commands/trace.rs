//! Trace matcher execution for debugging.

use thompson_lib::{Colors, Matcher, PrintTracer};

use super::run_common;

pub struct TraceArgs {
    pub pattern: String,
    pub input: String,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let automaton = run_common::or_exit(
        thompson_lib::compile(&args.pattern),
        &args.pattern,
        args.color,
    );
    let colors = Colors::new(args.color);
    let mut tracer = PrintTracer::new(colors);

    let matched = Matcher::new(&automaton).is_match_with(&args.input, &mut tracer);
    tracer.print();

    println!("{}---{}", colors.dim, colors.reset);
    run_common::finish_with_verdict(matched, colors);
}
