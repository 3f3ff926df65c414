//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("thompson")
        .about("Backtracking NFA regular expressions")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(lex_command())
        .subcommand(ast_command())
        .subcommand(states_command())
        .subcommand(match_command())
        .subcommand(trace_command())
}

/// Print lexer tokens.
pub fn lex_command() -> Command {
    Command::new("lex")
        .about("Print the tokens of a pattern as JSON")
        .after_help(
            r#"EXAMPLES:
  thompson lex 'a[b-d]*'
  thompson lex --compact '(ab)+?'"#,
        )
        .arg(pattern_arg())
        .arg(compact_arg())
        .arg(color_arg())
}

/// Print the syntax tree and its canonical rendering.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Print the syntax tree of a pattern")
        .after_help(
            r#"EXAMPLES:
  thompson ast 'a|b+'               # parser output
  thompson ast --normalized '\w+'   # after meta-char expansion"#,
        )
        .arg(pattern_arg())
        .arg(normalized_arg())
        .arg(compact_arg())
        .arg(color_arg())
}

/// Print the compiled automaton.
pub fn states_command() -> Command {
    Command::new("states")
        .about("Print the state table of the compiled automaton")
        .arg(pattern_arg())
        .arg(color_arg())
}

/// Whole-string match.
///
/// Exit status is 0 on match, 1 on no match and 2 on a pattern error.
pub fn match_command() -> Command {
    Command::new("match")
        .about("Test whether INPUT matches PATTERN as a whole")
        .after_help(
            r#"EXAMPLES:
  thompson match '(ab)*' abab       # true
  thompson match 'a*' ''            # true

EXIT STATUS:
  0 match, 1 no match, 2 invalid pattern"#,
        )
        .arg(pattern_arg())
        .arg(input_arg())
        .arg(color_arg())
}

/// Whole-string match with every matcher step printed.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Trace the matcher on INPUT, then print the result")
        .arg(pattern_arg())
        .arg(input_arg())
        .arg(color_arg())
}
