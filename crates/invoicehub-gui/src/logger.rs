use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Only records from this workspace's crates reach the log panel
const TARGET_PREFIX: &str = "invoicehub";

#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Ring of recent log records shown in the status bar and log panel.
#[derive(Clone)]
pub struct AppLogger {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
    capacity: usize,
    level: LevelFilter,
}

impl AppLogger {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
            level: LevelFilter::Info,
        }
    }

    /// Most verbose level that is kept.
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Install as the global logger.
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_entries(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    pub fn latest_message(&self) -> Option<String> {
        self.lock().back().map(|entry| entry.message.clone())
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }
}

impl log::Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with(TARGET_PREFIX)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.push(LogEntry {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn record(logger: &AppLogger, level: Level, target: &str, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target(target)
                .args(format_args!("{message}"))
                .build(),
        );
    }

    #[test]
    fn test_keeps_most_recent_entries() {
        let logger = AppLogger::new(2);
        for message in ["one", "two", "three"] {
            record(&logger, Level::Info, "invoicehub_gui::app", message);
        }

        let messages: Vec<_> = logger.get_entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert_eq!(logger.latest_message().as_deref(), Some("three"));

        logger.clear();
        assert!(logger.latest_message().is_none());
    }

    #[test]
    fn test_ignores_other_crates() {
        let logger = AppLogger::new(10);
        record(&logger, Level::Info, "winit::event_loop", "noise");
        assert!(logger.get_entries().is_empty());
    }

    #[test]
    fn test_level_is_configurable() {
        let default = AppLogger::new(10);
        record(&default, Level::Debug, "invoicehub_wizard::pdf_task", "stale run");
        record(&default, Level::Warn, "invoicehub_wizard::pdf_task", "rejected");
        assert_eq!(default.get_entries().len(), 1);

        let verbose = AppLogger::new(10).with_level(LevelFilter::Debug);
        record(&verbose, Level::Debug, "invoicehub_wizard::pdf_task", "stale run");
        record(&verbose, Level::Trace, "invoicehub_wizard::pdf_task", "too chatty");
        assert_eq!(verbose.latest_message().as_deref(), Some("stale run"));
        assert_eq!(verbose.get_entries().len(), 1);

        let quiet = AppLogger::new(10).with_level(LevelFilter::Off);
        record(&quiet, Level::Error, "invoicehub_gui::app", "dropped");
        assert!(quiet.get_entries().is_empty());
    }
}
