//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("structeq")
        .about("Structural equivalence of possibly cyclic type graphs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(classes_command())
        .subcommand(dump_command())
}

/// Compare two definitions.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Check whether two definitions are structurally equivalent")
        .after_help(
            r#"EXAMPLES:
  structeq check types.json str1 str2
  structeq check types.json str1 str2 --explain
  structeq check types.json a b --ignore-tags
  cat types.json | structeq check - a b

EXIT STATUS:
  0 compatible, 1 incompatible, 2 error"#,
        )
        .arg(file_arg())
        .arg(left_arg())
        .arg(right_arg())
        .arg(explain_arg())
        .arg(ignore_tags_arg())
        .arg(ignore_names_arg())
        .arg(verbose_arg())
}

/// Group all definitions into equivalence classes.
pub fn classes_command() -> Command {
    Command::new("classes")
        .about("Group definitions into equivalence classes")
        .after_help(
            r#"EXAMPLES:
  structeq classes types.json
  structeq classes types.json --ignore-tags"#,
        )
        .arg(file_arg())
        .arg(ignore_tags_arg())
        .arg(ignore_names_arg())
        .arg(verbose_arg())
}

/// Print the graph as C-like declarations.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Print the graph as C-like declarations")
        .after_help(
            r#"EXAMPLES:
  structeq dump types.json
  structeq dump types.json --color always"#,
        )
        .arg(file_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}
