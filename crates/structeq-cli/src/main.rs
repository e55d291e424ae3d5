mod cli;
mod commands;

use cli::{CheckParams, ClassesParams, DumpParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::init_logging(params.verbose);
            commands::check::run(params.into());
        }
        Some(("classes", m)) => {
            let params = ClassesParams::from_matches(m);
            commands::init_logging(params.verbose);
            commands::classes::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::init_logging(params.verbose);
            commands::dump::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
