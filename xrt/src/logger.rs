//! Stderr logger

use log::{Level, LevelFilter, Log, Metadata, Record};

struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let tag = match record.level() {
                Level::Error => 'E',
                Level::Warn => 'W',
                Level::Info => 'I',
                Level::Debug => 'D',
                Level::Trace => 'T',
            };
            eprintln!("[{tag}] {}", record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: Logger = Logger;

/// Level from the first letter of `LOG_LEVEL`
fn level_filter(var: Option<&str>) -> LevelFilter {
    match var.and_then(|v| v.bytes().next()) {
        Some(b'o') => LevelFilter::Off,
        Some(b'e') => LevelFilter::Error,
        Some(b'w') => LevelFilter::Warn,
        Some(b'i') => LevelFilter::Info,
        Some(b'd') => LevelFilter::Debug,
        Some(b't') => LevelFilter::Trace,
        _ if cfg!(debug_assertions) => LevelFilter::Debug,
        _ => LevelFilter::Warn,
    }
}

/// Install the logger, reading `LOG_LEVEL` from the environment
pub fn init() -> Result<(), log::SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level_filter(std::env::var("LOG_LEVEL").ok().as_deref()));
    Ok(())
}
