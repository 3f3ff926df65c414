//! Print the syntax tree of a pattern, then its canonical rendering.

use thompson_lib::Colors;

use super::run_common;

pub struct AstArgs {
    pub pattern: String,
    pub normalized: bool,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let result = if args.normalized {
        thompson_lib::normalize(&args.pattern)
    } else {
        thompson_lib::parse(&args.pattern)
    };
    let expr = run_common::or_exit(result, &args.pattern, args.color);

    run_common::print_json(&expr, args.compact);

    let colors = Colors::new(args.color);
    println!("{}---{}", colors.dim, colors.reset);
    match expr {
        Some(expr) => println!("{expr}"),
        // The empty pattern renders as nothing.
        None => println!(),
    }
}
