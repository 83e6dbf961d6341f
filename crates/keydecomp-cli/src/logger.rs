//! Stderr logger for library diagnostics.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = match record.level() {
            Level::Error => "error".red().bold(),
            Level::Warn => "warn".yellow().bold(),
            Level::Info => "info".cyan(),
            Level::Debug | Level::Trace => "debug".dimmed(),
        };
        eprintln!("{} {}", level, record.args());
    }

    fn flush(&self) {}
}

/// Install the logger. Verbose mode shows reduction steps.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
