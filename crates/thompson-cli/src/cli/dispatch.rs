//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror the command `*Args` but are populated from clap
//! - `from_matches()` pulls the fields each command declares
//! - `Into<*Args>` impls resolve the color choice for the command handlers

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::lex::LexArgs;
use crate::commands::matches::MatchArgs;
use crate::commands::states::StatesArgs;
use crate::commands::trace::TraceArgs;

pub struct LexParams {
    pub pattern: String,
    pub compact: bool,
    pub color: ColorChoice,
}

impl LexParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: pattern(m),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<LexParams> for LexArgs {
    fn from(p: LexParams) -> Self {
        Self {
            pattern: p.pattern,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub pattern: String,
    pub normalized: bool,
    pub compact: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: pattern(m),
            normalized: m.get_flag("normalized"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            pattern: p.pattern,
            normalized: p.normalized,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct StatesParams {
    pub pattern: String,
    pub color: ColorChoice,
}

impl StatesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: pattern(m),
            color: parse_color(m),
        }
    }
}

impl From<StatesParams> for StatesArgs {
    fn from(p: StatesParams) -> Self {
        Self {
            pattern: p.pattern,
            color: p.color.should_colorize(),
        }
    }
}

pub struct MatchParams {
    pub pattern: String,
    pub input: String,
    pub color: ColorChoice,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: pattern(m),
            input: input(m),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            pattern: p.pattern,
            input: p.input,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern: String,
    pub input: String,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: pattern(m),
            input: input(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            pattern: p.pattern,
            input: p.input,
            color: p.color.should_colorize(),
        }
    }
}

fn pattern(m: &ArgMatches) -> String {
    m.get_one::<String>("pattern").cloned().unwrap_or_default()
}

fn input(m: &ArgMatches) -> String {
    m.get_one::<String>("input").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
