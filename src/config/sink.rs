//! Sink selection and construction
//!
//! A filter's `Type` picks a [`SinkType`]; its properties are then validated
//! into a [`SinkSpec`], which a [`SinkBuilder`] turns into a live appender.

use super::properties::PropertyBag;
use crate::appenders::{ConsoleAppender, FileAppender, SocketAppender};
use crate::core::{Appender, LoggerError, Result};
use std::fmt;

pub const PROTOCOL_PROPERTY: &str = "protocol";
pub const ENDPOINT_PROPERTY: &str = "endpoint";
pub const FILENAME_PROPERTY: &str = "filename";

/// Sink types a config document can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkType {
    Console,
    Socket,
    File,
}

impl SinkType {
    /// Match a filter's `Type`. Names are exact and lowercase; anything else
    /// is `None` and the filter gets skipped rather than rejected.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "console" => Some(SinkType::Console),
            "socket" => Some(SinkType::Socket),
            "file" => Some(SinkType::File),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SinkType::Console => "console",
            SinkType::Socket => "socket",
            SinkType::File => "file",
        }
    }
}

impl fmt::Display for SinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated sink parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkSpec {
    Console,
    Socket { protocol: String, endpoint: String },
    File { filename: String },
}

impl SinkSpec {
    /// Pull the properties `sink_type` needs out of `properties`.
    ///
    /// Each name uses its last occurrence; an empty value counts as missing.
    pub fn resolve(sink_type: SinkType, properties: &PropertyBag) -> Result<Self> {
        match sink_type {
            SinkType::Console => Ok(SinkSpec::Console),
            SinkType::Socket => {
                let protocol = required(properties, PROTOCOL_PROPERTY);
                let endpoint = required(properties, ENDPOINT_PROPERTY);
                match (protocol, endpoint) {
                    (Some(protocol), Some(endpoint)) => Ok(SinkSpec::Socket {
                        protocol: protocol.to_string(),
                        endpoint: endpoint.to_string(),
                    }),
                    (protocol, endpoint) => {
                        let mut missing = Vec::new();
                        if protocol.is_none() {
                            missing.push(PROTOCOL_PROPERTY);
                        }
                        if endpoint.is_none() {
                            missing.push(ENDPOINT_PROPERTY);
                        }
                        Err(missing_properties(sink_type, &missing))
                    }
                }
            }
            SinkType::File => match required(properties, FILENAME_PROPERTY) {
                Some(filename) => Ok(SinkSpec::File {
                    filename: filename.to_string(),
                }),
                None => Err(missing_properties(sink_type, &[FILENAME_PROPERTY])),
            },
        }
    }

    pub fn sink_type(&self) -> SinkType {
        match self {
            SinkSpec::Console => SinkType::Console,
            SinkSpec::Socket { .. } => SinkType::Socket,
            SinkSpec::File { .. } => SinkType::File,
        }
    }

    /// Construct the appender. Builder errors are returned unchanged.
    pub fn build<B: SinkBuilder + ?Sized>(&self, builder: &B) -> Result<Box<dyn Appender>> {
        match self {
            SinkSpec::Console => Ok(builder.console()),
            SinkSpec::Socket { protocol, endpoint } => builder.socket(protocol, endpoint),
            SinkSpec::File { filename } => builder.file(filename),
        }
    }
}

fn required<'a>(properties: &'a PropertyBag, name: &str) -> Option<&'a str> {
    properties.last_value(name).filter(|value| !value.is_empty())
}

fn missing_properties(sink_type: SinkType, missing: &[&str]) -> LoggerError {
    let noun = if missing.len() == 1 {
        "property"
    } else {
        "properties"
    };
    LoggerError::config(
        format!("{} sink", sink_type),
        format!("missing required {}: {}", noun, missing.join(", ")),
    )
}

/// Constructors for the concrete sinks
pub trait SinkBuilder {
    fn console(&self) -> Box<dyn Appender>;
    fn socket(&self, protocol: &str, endpoint: &str) -> Result<Box<dyn Appender>>;
    fn file(&self, filename: &str) -> Result<Box<dyn Appender>>;
}

/// Builds the crate's own console, socket and file appenders
#[derive(Debug, Clone, Copy, Default)]
pub struct StdSinkBuilder;

impl SinkBuilder for StdSinkBuilder {
    fn console(&self) -> Box<dyn Appender> {
        Box::new(ConsoleAppender::new())
    }

    fn socket(&self, protocol: &str, endpoint: &str) -> Result<Box<dyn Appender>> {
        Ok(Box::new(SocketAppender::new(protocol, endpoint)?))
    }

    fn file(&self, filename: &str) -> Result<Box<dyn Appender>> {
        Ok(Box::new(FileAppender::new(filename)?))
    }
}
