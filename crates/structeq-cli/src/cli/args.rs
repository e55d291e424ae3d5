//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Graph description file (positional, `-` for stdin).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Graph description (JSON), or - for stdin")
}

/// Left-hand definition name (positional).
pub fn left_arg() -> Arg {
    Arg::new("left")
        .value_name("A")
        .required(true)
        .help("First definition to compare")
}

/// Right-hand definition name (positional).
pub fn right_arg() -> Arg {
    Arg::new("right")
        .value_name("B")
        .required(true)
        .help("Second definition to compare")
}

/// Report where the types diverge (--explain).
pub fn explain_arg() -> Arg {
    Arg::new("explain")
        .long("explain")
        .action(ArgAction::SetTrue)
        .help("Show the first difference when incompatible")
}

/// Skip the struct tag comparison (--ignore-tags).
pub fn ignore_tags_arg() -> Arg {
    Arg::new("ignore_tags")
        .long("ignore-tags")
        .action(ArgAction::SetTrue)
        .help("Compare struct shapes without their tags")
}

/// Skip the member name comparison (--ignore-names).
pub fn ignore_names_arg() -> Arg {
    Arg::new("ignore_names")
        .long("ignore-names")
        .action(ArgAction::SetTrue)
        .help("Match members by position and type only")
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

/// Log verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v info, -vv debug, -vvv trace)")
}
