use std::path::PathBuf;

use structeq_core::Colors;
use structeq_core::dump::dump_named;

use super::loader::{exit_with, load_graph};

pub struct DumpArgs {
    pub file: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let named = load_graph(&args.file).unwrap_or_else(|e| exit_with(e));
    print!("{}", dump_named(&named, Colors::new(args.color)));
}
