//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use structeq_lib::{Config, NamePolicy, TagPolicy};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::classes::ClassesArgs;
use crate::commands::dump::DumpArgs;

pub struct CheckParams {
    pub file: PathBuf,
    pub left: String,
    pub right: String,
    pub explain: bool,
    pub ignore_tags: bool,
    pub ignore_names: bool,
    pub verbose: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: parse_file(m),
            left: m.get_one::<String>("left").cloned().unwrap_or_default(),
            right: m.get_one::<String>("right").cloned().unwrap_or_default(),
            explain: m.get_flag("explain"),
            ignore_tags: m.get_flag("ignore_tags"),
            ignore_names: m.get_flag("ignore_names"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            file: p.file,
            left: p.left,
            right: p.right,
            explain: p.explain,
            config: build_config(p.ignore_tags, p.ignore_names),
        }
    }
}

pub struct ClassesParams {
    pub file: PathBuf,
    pub ignore_tags: bool,
    pub ignore_names: bool,
    pub verbose: u8,
}

impl ClassesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: parse_file(m),
            ignore_tags: m.get_flag("ignore_tags"),
            ignore_names: m.get_flag("ignore_names"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<ClassesParams> for ClassesArgs {
    fn from(p: ClassesParams) -> Self {
        Self {
            file: p.file,
            config: build_config(p.ignore_tags, p.ignore_names),
        }
    }
}

pub struct DumpParams {
    pub file: PathBuf,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: parse_file(m),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            file: p.file,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_file(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("file").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

pub(super) fn build_config(ignore_tags: bool, ignore_names: bool) -> Config {
    let mut config = Config::new();
    if ignore_tags {
        config = config.tags(TagPolicy::Ignore);
    }
    if ignore_names {
        config = config.member_names(NamePolicy::Ignore);
    }
    config
}
