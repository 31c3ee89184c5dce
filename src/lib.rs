//! # Timber
//!
//! Declarative configuration for a pluggable logging system: a JSON document
//! of filters becomes a set of independently configured loggers, each with
//! its own level, pattern formatter, granular level overrides and sink.
//!
//! ## Features
//!
//! - **Filters**: enable/disable per logger, tag, level, pattern
//! - **Granular overrides**: per package path or function thresholds
//! - **Sinks**: console, socket (tcp/udp/unix) and file appenders
//! - **Injectable**: custom document sources, sink builders and registries
//!
//! ```no_run
//! use timber::prelude::*;
//!
//! let mut loggers = LoggerSet::new();
//! load_json_config("timber.json", &mut loggers)?;
//! loggers.write(&LogEntry::new(LogLevel::Info, "configured"))?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod config;
pub mod core;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, SocketAppender};
    pub use crate::config::{load_json_config, ConfigDocument, ConfigLoader, LoadReport};
    pub use crate::core::{
        Appender, ConfigLogger, LogEntry, LogLevel, LoggerError, LoggerRegistry, LoggerSet,
        PatternFormatter, Result,
    };
}

pub use appenders::{ConsoleAppender, FileAppender, SocketAppender};
pub use config::{load_json_config, ConfigDocument, ConfigLoader, LoadReport};
pub use core::{
    Appender, ConfigLogger, LogEntry, LogLevel, LoggerError, LoggerRegistry, LoggerSet,
    PatternFormatter, Result, DEFAULT_PATTERN,
};
