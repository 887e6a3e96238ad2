use log::{Level, LevelFilter, Log, Metadata, Record};

/// Forwards `log` records to the browser console, tagged with their component
struct ConsoleLogger {
    level: LevelFilter,
}

static LOGGER: ConsoleLogger = ConsoleLogger { level: LevelFilter::Trace };

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

fn format_line(level: Level, component: &str, message: &str) -> String {
    format!("[{}] {}: {}", level, component, message)
}

/// Install the console logger. Safe to call more than once; only the first
/// call takes effect.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(Level::Warn, "income-section", "update failed"),
            "[WARN] income-section: update failed"
        );
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger { level: LevelFilter::Info };
        let debug = Metadata::builder().level(Level::Debug).target("x").build();
        let error = Metadata::builder().level(Level::Error).target("x").build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }
}
