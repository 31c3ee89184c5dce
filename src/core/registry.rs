//! Logger registry
//!
//! The config loader doesn't keep the loggers it builds; it hands each one to
//! a [`LoggerRegistry`]. [`LoggerSet`] is the registry shipped with the crate,
//! and `Vec<ConfigLogger>` works as a plain collecting registry in tests.

use super::{error::Result, log_entry::LogEntry, logger::ConfigLogger};
use parking_lot::RwLock;

/// Destination for assembled loggers. Ownership moves on `register`.
pub trait LoggerRegistry {
    fn register(&mut self, logger: ConfigLogger);
}

impl LoggerRegistry for Vec<ConfigLogger> {
    fn register(&mut self, logger: ConfigLogger) {
        self.push(logger);
    }
}

/// Thread-safe list of active loggers, kept in registration order
#[derive(Debug, Default)]
pub struct LoggerSet {
    loggers: RwLock<Vec<ConfigLogger>>,
}

impl LoggerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_logger(&self, logger: ConfigLogger) {
        let mut loggers = self.loggers.write();
        loggers.push(logger);
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Run `f` with read access to the registered loggers
    pub fn with_loggers<R>(&self, f: impl FnOnce(&[ConfigLogger]) -> R) -> R {
        let loggers = self.loggers.read();
        f(&loggers)
    }

    /// Write `entry` to every logger whose threshold it meets.
    ///
    /// A failing sink doesn't stop the others; the first error is returned
    /// after every logger has been tried.
    pub fn write(&self, entry: &LogEntry) -> Result<usize> {
        let mut loggers = self.loggers.write();
        let mut written = 0;
        let mut first_err = None;

        for logger in loggers.iter_mut() {
            match logger.write(entry) {
                Ok(true) => written += 1,
                Ok(false) => {}
                Err(e) => {
                    first_err.get_or_insert(e);
                }
            }
        }

        match first_err {
            Some(e) => Err(e),
            None => Ok(written),
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut loggers = self.loggers.write();
        for logger in loggers.iter_mut() {
            logger.flush()?;
        }
        Ok(())
    }
}

impl LoggerRegistry for LoggerSet {
    fn register(&mut self, logger: ConfigLogger) {
        self.add_logger(logger);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Appender, LogLevel, LoggerError, PatternFormatter};
    use std::collections::HashMap;

    struct NullAppender {
        fail: bool,
    }

    impl Appender for NullAppender {
        fn append(&mut self, _level: LogLevel, _line: &str) -> Result<()> {
            if self.fail {
                return Err(LoggerError::writer("sink offline"));
            }
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "null"
        }
    }

    fn logger(level: LogLevel, fail: bool) -> ConfigLogger {
        ConfigLogger::new(
            level,
            PatternFormatter::default(),
            HashMap::new(),
            Box::new(NullAppender { fail }),
        )
    }

    #[test]
    fn test_register_keeps_order() {
        let mut set = LoggerSet::new();
        assert!(set.is_empty());

        set.register(logger(LogLevel::Debug, false));
        set.register(logger(LogLevel::Error, false));

        assert_eq!(set.len(), 2);
        let levels: Vec<LogLevel> = set.with_loggers(|l| l.iter().map(|l| l.level).collect());
        assert_eq!(levels, vec![LogLevel::Debug, LogLevel::Error]);
    }

    #[test]
    fn test_write_counts_loggers_that_accepted() {
        let set = LoggerSet::new();
        set.add_logger(logger(LogLevel::Debug, false));
        set.add_logger(logger(LogLevel::Error, false));

        assert_eq!(set.write(&LogEntry::new(LogLevel::Info, "hello")).unwrap(), 1);
        assert_eq!(set.write(&LogEntry::new(LogLevel::Fatal, "bye")).unwrap(), 2);
        set.flush().unwrap();
    }

    #[test]
    fn test_write_reports_first_error_after_trying_all() {
        let set = LoggerSet::new();
        set.add_logger(logger(LogLevel::Info, true));
        set.add_logger(logger(LogLevel::Info, false));

        let result = set.write(&LogEntry::new(LogLevel::Info, "hello"));
        assert!(matches!(result, Err(LoggerError::WriterError(_))));
    }

    #[test]
    fn test_vec_registry() {
        let mut loggers: Vec<ConfigLogger> = Vec::new();
        loggers.register(logger(LogLevel::Warn, false));
        assert_eq!(loggers.len(), 1);
    }
}
