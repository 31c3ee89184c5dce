//! Appender trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// A sink that receives already formatted log lines.
///
/// The level travels alongside the line so sinks can route by severity
/// (the console sends errors to stderr).
pub trait Appender: Send + Sync {
    fn append(&mut self, level: LogLevel, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
