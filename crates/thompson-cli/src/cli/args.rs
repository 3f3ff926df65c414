//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction};

/// Pattern text (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .allow_hyphen_values(true)
        .help("Regular expression pattern")
}

/// Candidate string (positional). May be empty.
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .required(true)
        .allow_hyphen_values(true)
        .help("String to match as a whole")
}

/// Show the tree after normalization (--normalized).
pub fn normalized_arg() -> Arg {
    Arg::new("normalized")
        .long("normalized")
        .short('n')
        .action(ArgAction::SetTrue)
        .help("Expand meta characters as the compiler sees them")
}

/// Single-line JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Print JSON on one line")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
