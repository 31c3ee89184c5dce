//! Pattern-based message formatting
//!
//! A pattern is plain text with `%`-directives that are replaced per entry:
//!
//! | Directive | Output                                   |
//! |-----------|------------------------------------------|
//! | `%T`      | full timestamp `2025-01-08 10:30:45.123` |
//! | `%t`      | time only `10:30:45`                     |
//! | `%L`      | level name (`INFO`)                      |
//! | `%l`      | first letter of the level (`I`)          |
//! | `%S`      | source file and line (`src/net/conn.rs:42`) |
//! | `%s`      | file name and line (`conn.rs:42`)        |
//! | `%x`      | module path                              |
//! | `%M`      | message                                  |
//! | `%%`      | a literal `%`                            |
//!
//! Any other directive is copied to the output unchanged.

use super::log_entry::LogEntry;

/// Pattern used when a filter doesn't configure one: the bare message.
pub const DEFAULT_PATTERN: &str = "%M";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Timestamp,
    Time,
    Level,
    LevelInitial,
    Source,
    ShortSource,
    Module,
    Message,
}

/// Formatter that renders [`LogEntry`] values through a parsed pattern
///
/// # Example
///
/// ```
/// use timber::{LogEntry, LogLevel, PatternFormatter};
///
/// let formatter = PatternFormatter::new("[%L] %M");
/// let entry = LogEntry::new(LogLevel::Warn, "disk almost full");
/// assert_eq!(formatter.format(&entry), "[WARN] disk almost full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFormatter {
    pattern: String,
    tokens: Vec<Token>,
}

impl PatternFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let tokens = Self::parse(&pattern);
        Self { pattern, tokens }
    }

    /// The pattern this formatter was built from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn parse(pattern: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            let directive = match chars.next() {
                Some('T') => Token::Timestamp,
                Some('t') => Token::Time,
                Some('L') => Token::Level,
                Some('l') => Token::LevelInitial,
                Some('S') => Token::Source,
                Some('s') => Token::ShortSource,
                Some('x') => Token::Module,
                Some('M') => Token::Message,
                Some('%') => {
                    literal.push('%');
                    continue;
                }
                Some(other) => {
                    literal.push('%');
                    literal.push(other);
                    continue;
                }
                None => {
                    literal.push('%');
                    break;
                }
            };

            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(directive);
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }
        tokens
    }

    /// Render an entry according to the pattern
    pub fn format(&self, entry: &LogEntry) -> String {
        let mut out = String::with_capacity(self.pattern.len() + entry.message.len());

        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Timestamp => {
                    out.push_str(&entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f").to_string())
                }
                Token::Time => out.push_str(&entry.timestamp.format("%H:%M:%S").to_string()),
                Token::Level => out.push_str(entry.level.to_str()),
                Token::LevelInitial => out.push_str(&entry.level.to_str()[..1]),
                Token::Source => {
                    if let Some(ref file) = entry.file {
                        Self::push_location(&mut out, file, entry.line);
                    }
                }
                Token::ShortSource => {
                    if let Some(ref file) = entry.file {
                        let short = file.rsplit(['/', '\\']).next().unwrap_or(file);
                        Self::push_location(&mut out, short, entry.line);
                    }
                }
                Token::Module => {
                    if let Some(ref module_path) = entry.module_path {
                        out.push_str(module_path);
                    }
                }
                Token::Message => out.push_str(&entry.message),
            }
        }

        out
    }

    fn push_location(out: &mut String, file: &str, line: Option<u32>) {
        out.push_str(file);
        if let Some(line) = line {
            out.push(':');
            out.push_str(&line.to_string());
        }
    }
}

impl Default for PatternFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use chrono::{TimeZone, Utc};

    fn entry() -> LogEntry {
        LogEntry::new(LogLevel::Error, "connection reset")
            .with_location("src/net/conn.rs", 42, "app::net::conn")
            .with_timestamp(Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap())
    }

    #[test]
    fn test_default_pattern_is_message_only() {
        let formatter = PatternFormatter::default();
        assert_eq!(formatter.pattern(), "%M");
        assert_eq!(formatter.format(&entry()), "connection reset");
    }

    #[test]
    fn test_all_directives() {
        let formatter = PatternFormatter::new("%T|%t|%L|%l|%S|%s|%x|%M");
        assert_eq!(
            formatter.format(&entry()),
            "2025-01-08 10:30:45.000|10:30:45|ERROR|E|src/net/conn.rs:42|conn.rs:42|app::net::conn|connection reset"
        );
    }

    #[test]
    fn test_escaped_and_unknown_directives() {
        let formatter = PatternFormatter::new("100%% %q %M %");
        assert_eq!(formatter.format(&entry()), "100% %q connection reset %");
    }

    #[test]
    fn test_missing_location_renders_empty() {
        let formatter = PatternFormatter::new("<%s><%x> %M");
        let entry = LogEntry::new(LogLevel::Info, "started");
        assert_eq!(formatter.format(&entry), "<><> started");
    }

    #[test]
    fn test_empty_pattern_renders_nothing() {
        let formatter = PatternFormatter::new("");
        assert_eq!(formatter.format(&entry()), "");
    }
}
