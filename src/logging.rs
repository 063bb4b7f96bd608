#![cfg(feature = "std")]

use log::{Level, LevelFilter, Metadata, Record};
use std::env;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "GRIDBATTLE_LOG";

const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Writes to stderr so stdout stays free for boards and JSON reports.
/// Records from other crates are only shown at `warn` and above.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > log::max_level() {
            return false;
        }
        metadata.target().starts_with(CRATE_TARGET) || metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger with the level taken from `GRIDBATTLE_LOG`.
/// Defaults to `info` if the variable is unset or invalid. Calling it twice
/// keeps the first logger.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
