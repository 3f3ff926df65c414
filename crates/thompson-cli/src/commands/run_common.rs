//! Pieces shared by the command handlers.

use serde::Serialize;
use thompson_lib::{Colors, Error, Result};

/// Unwraps a pass result, or renders the error against the pattern on stderr
/// and exits with status 2.
pub fn or_exit<T>(result: Result<T>, pattern: &str, color: bool) -> T {
    match result {
        Ok(value) => value,
        Err(error) => exit_with_error(&error, pattern, color),
    }
}

pub fn exit_with_error(error: &Error, pattern: &str, color: bool) -> ! {
    let rendered = error.printer().source(pattern).colored(color).render();
    eprintln!("{rendered}");
    std::process::exit(2);
}

pub fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }
}

/// `true` in green or `false` in red, then exit 1 on `false`.
pub fn finish_with_verdict(matched: bool, colors: Colors) {
    if matched {
        println!("{}true{}", colors.green, colors.reset);
    } else {
        println!("{}false{}", colors.red, colors.reset);
        std::process::exit(1);
    }
}
