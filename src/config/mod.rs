//! Declarative logger configuration
//!
//! A JSON [`ConfigDocument`] lists filters; [`ConfigLoader`] turns each
//! enabled filter into a [`ConfigLogger`](crate::core::ConfigLogger) and
//! hands it to a [`LoggerRegistry`](crate::core::LoggerRegistry).

pub mod document;
pub mod format;
pub mod loader;
pub mod properties;
pub mod sink;
pub mod source;

pub use document::{ConfigDocument, FilterRecord, FormatSpec, GranularOverride};
pub use format::{resolve_formatter, resolve_pattern, FORMAT_PROPERTY};
pub use loader::{load_json_config, ConfigLoader, LoadReport};
pub use properties::{Property, PropertyBag};
pub use sink::{SinkBuilder, SinkSpec, SinkType, StdSinkBuilder};
pub use source::{DocumentSource, FsSource};
