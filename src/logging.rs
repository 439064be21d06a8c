#![cfg(feature = "std")]

//! Stderr logger for the game binaries. Lines read `LEVEL [module] message`,
//! where `module` is the log target with the crate prefix removed.

use log::{LevelFilter, Log, Metadata, Record};
use std::env;
use std::fmt;

/// Environment variable holding the log level (`error` .. `trace`).
pub const LOG_ENV: &str = "TWENTY48_LOG";

const CRATE_PREFIX: &str = "twenty48::";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        // stdout carries the board and the sim JSON
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_line(record.level(), record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn format_line(level: log::Level, target: &str, args: &fmt::Arguments<'_>) -> String {
    let module = target.strip_prefix(CRATE_PREFIX).unwrap_or(target);
    format!("{:<5} [{}] {}", level, module, args)
}

/// Parse a level name, falling back to `warn` for missing or unknown values.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger with the level named by `TWENTY48_LOG`.
/// Calling it again after a logger is set only leaves the first one in place.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
