//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Caller supplied an unusable argument (e.g. an empty config identifier)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Config document could not be opened or read
    #[error("Can't load config '{identifier}': {source}")]
    ConfigRead {
        identifier: String,
        #[source]
        source: std::io::Error,
    },

    /// Config document is not valid JSON or does not match the schema
    #[error("Can't parse config '{identifier}': {source}")]
    ConfigParse {
        identifier: String,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        LoggerError::InvalidArgument(message.into())
    }

    /// Create a config read error
    pub fn config_read(identifier: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::ConfigRead {
            identifier: identifier.into(),
            source,
        }
    }

    /// Create a config parse error
    pub fn config_parse(identifier: impl Into<String>, source: serde_json::Error) -> Self {
        LoggerError::ConfigParse {
            identifier: identifier.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}
