//! Assembled logger produced from a config filter

use super::{
    appender::Appender, error::Result, log_entry::LogEntry, log_level::LogLevel,
    pattern::PatternFormatter,
};
use std::collections::HashMap;
use std::fmt;

/// A fully resolved logger: threshold, formatter, granular overrides and sink.
///
/// Instances are built by the config loader and handed to a
/// [`LoggerRegistry`](crate::core::LoggerRegistry), which owns them from then on.
pub struct ConfigLogger {
    pub level: LogLevel,
    pub formatter: PatternFormatter,
    /// Level overrides keyed by package path (optionally `path.function`)
    pub granulars: HashMap<String, LogLevel>,
    pub sink: Box<dyn Appender>,
}

impl ConfigLogger {
    #[must_use]
    pub fn new(
        level: LogLevel,
        formatter: PatternFormatter,
        granulars: HashMap<String, LogLevel>,
        sink: Box<dyn Appender>,
    ) -> Self {
        Self {
            level,
            formatter,
            granulars,
            sink,
        }
    }

    /// Threshold for an exact granular path, or the logger's default level.
    ///
    /// Prefix and function matching against call sites belongs to the
    /// dispatcher; this only looks the key up.
    pub fn threshold_for(&self, path: &str) -> LogLevel {
        self.granulars.get(path).copied().unwrap_or(self.level)
    }

    /// Format `entry` and hand it to the sink if it meets the default threshold.
    ///
    /// Returns `Ok(false)` when the entry was filtered out.
    pub fn write(&mut self, entry: &LogEntry) -> Result<bool> {
        if entry.level < self.level {
            return Ok(false);
        }

        let line = self.formatter.format(entry);
        self.sink.append(entry.level, &line)?;
        Ok(true)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()
    }

    /// Name of the sink this logger writes to (`console`, `socket`, `file`, ...)
    pub fn sink_name(&self) -> &str {
        self.sink.name()
    }
}

impl fmt::Debug for ConfigLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLogger")
            .field("level", &self.level)
            .field("formatter", &self.formatter)
            .field("granulars", &self.granulars)
            .field("sink", &self.sink.name())
            .finish()
    }
}
