use std::collections::HashMap;
use std::path::PathBuf;

use structeq_core::NamedGraph;
use structeq_lib::{Checker, Config};

use super::loader::{exit_with, load_graph};

pub struct ClassesArgs {
    pub file: PathBuf,
    pub config: Config,
}

pub fn run(args: ClassesArgs) {
    let named = load_graph(&args.file).unwrap_or_else(|e| exit_with(e));
    print!("{}", render(&named, args.config));
}

/// One line per equivalence class, definitions in document order.
pub fn render(named: &NamedGraph, config: Config) -> String {
    let names: HashMap<_, _> = named.definitions().map(|(name, id)| (id, name)).collect();
    let checker = Checker::new(named.graph()).with_config(config);

    let mut out = String::new();
    for class in checker.partition(named.definitions().map(|(_, id)| id)) {
        let line: Vec<&str> = class.iter().map(|id| names[id]).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
