//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Resolve a level name from a config document.
    ///
    /// Never fails: names that don't parse fall back to [`LogLevel::default`]
    /// so a typo in one filter can't abort a whole config load.
    ///
    /// ```
    /// use timber::LogLevel;
    ///
    /// assert_eq!(LogLevel::resolve("warning"), LogLevel::Warn);
    /// assert_eq!(LogLevel::resolve("finest"), LogLevel::Trace);
    /// assert_eq!(LogLevel::resolve("bogus"), LogLevel::Info);
    /// ```
    pub fn resolve(raw: &str) -> Self {
        raw.trim().parse().unwrap_or_default()
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Trace => BrightBlack,
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" | "FINEST" | "FINE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" | "CRITICAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(LogLevel::resolve("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::resolve("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::resolve("Error"), LogLevel::Error);
    }

    #[test]
    fn test_resolve_aliases() {
        assert_eq!(LogLevel::resolve("FINE"), LogLevel::Trace);
        assert_eq!(LogLevel::resolve("WARNING"), LogLevel::Warn);
        assert_eq!(LogLevel::resolve("critical"), LogLevel::Fatal);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_default() {
        assert_eq!(LogLevel::resolve(""), LogLevel::Info);
        assert_eq!(LogLevel::resolve("LOUD"), LogLevel::Info);
        assert_eq!(LogLevel::resolve("  warn  "), LogLevel::Warn);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("LOUD".parse::<LogLevel>().is_err());
    }
}
