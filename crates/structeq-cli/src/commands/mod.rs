pub mod check;
pub mod classes;
pub mod dump;
pub mod loader;

#[cfg(test)]
mod test_utils;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Map the `-v` count to a log level; warnings are always shown.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the stderr log subscriber.
pub fn init_logging(verbose: u8) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_for(verbose))
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: {}", e);
    }
}
