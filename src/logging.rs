//! Stderr logging behind the `log` facade.
//!
//! Lines look like `WARN  minesweeper::user: message` so engine and menu
//! events can be told apart while the board is on stdout.

use std::env;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`off`, `error` .. `trace`).
pub const LOG_ENV: &str = "MINESWEEPER_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Render one record as a log line, prefixed with level and module.
pub fn format_record(record: &Record) -> String {
    let source = record.module_path().unwrap_or_else(|| record.target());
    format!("{:<5} {}: {}", record.level(), source, record.args())
}

/// Level for a raw `MINESWEEPER_LOG` value; unset or unknown means `warn`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Calling it again keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
