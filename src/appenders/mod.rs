//! Appender implementations

pub mod console;
pub mod file;
pub mod socket;

pub use console::ConsoleAppender;
pub use file::FileAppender;
pub use socket::{SocketAppender, SocketProtocol};

// Re-export trait for convenience
pub use crate::core::Appender;
