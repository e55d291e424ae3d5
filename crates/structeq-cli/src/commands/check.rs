use std::path::PathBuf;

use structeq_core::NamedGraph;
use structeq_lib::{Checker, Config};

use super::loader::{LoadError, exit_with, load_graph, lookup};

pub struct CheckArgs {
    pub file: PathBuf,
    pub left: String,
    pub right: String,
    pub explain: bool,
    pub config: Config,
}

/// Outcome of a check: the verdict and the text to print.
pub struct Verdict {
    pub compatible: bool,
    pub output: String,
}

pub fn run(args: CheckArgs) {
    let verdict = load_graph(&args.file)
        .and_then(|named| render(&named, &args))
        .unwrap_or_else(|e| exit_with(e));

    print!("{}", verdict.output);
    if !verdict.compatible {
        std::process::exit(1);
    }
}

pub fn render(named: &NamedGraph, args: &CheckArgs) -> Result<Verdict, LoadError> {
    let left = lookup(named, &args.left)?;
    let right = lookup(named, &args.right)?;
    let checker = Checker::new(named.graph()).with_config(args.config);

    let verdict = match checker.explain(left, right) {
        Ok(()) => Verdict {
            compatible: true,
            output: "compatible\n".to_owned(),
        },
        Err(mismatch) if args.explain => Verdict {
            compatible: false,
            output: format!("incompatible: {}\n", mismatch),
        },
        Err(_) => Verdict {
            compatible: false,
            output: "incompatible\n".to_owned(),
        },
    };
    Ok(verdict)
}
