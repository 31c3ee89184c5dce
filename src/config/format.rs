//! Format resolution for a filter

use super::document::FilterRecord;
use crate::core::{PatternFormatter, DEFAULT_PATTERN};

/// Property name that can carry the pattern when `Format` is unset
pub const FORMAT_PROPERTY: &str = "format";

/// Effective pattern for `filter`.
///
/// A set `Format` field wins outright, even with an empty value. Otherwise
/// the last `format` property is used. An empty result falls back to
/// [`DEFAULT_PATTERN`].
pub fn resolve_pattern(filter: &FilterRecord) -> &str {
    let pattern = match filter.format {
        Some(ref spec) => spec.value.as_str(),
        None => filter.properties.last_value(FORMAT_PROPERTY).unwrap_or(""),
    };

    if pattern.is_empty() {
        DEFAULT_PATTERN
    } else {
        pattern
    }
}

pub fn resolve_formatter(filter: &FilterRecord) -> PatternFormatter {
    PatternFormatter::new(resolve_pattern(filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::document::FormatSpec;
    use crate::config::properties::PropertyBag;

    fn filter(format: Option<FormatSpec>, properties: &[(&str, &str)]) -> FilterRecord {
        FilterRecord {
            format,
            properties: properties.iter().copied().collect::<PropertyBag>(),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_field_beats_properties() {
        let f = filter(
            Some(FormatSpec::new("format", "[%L] %M")),
            &[("format", "%T %M")],
        );
        assert_eq!(resolve_pattern(&f), "[%L] %M");
    }

    #[test]
    fn test_last_format_property_wins() {
        let f = filter(None, &[("format", "first"), ("filename", "x"), ("format", "second")]);
        assert_eq!(resolve_pattern(&f), "second");
    }

    #[test]
    fn test_default_when_nothing_set() {
        let f = filter(None, &[("endpoint", "localhost:514")]);
        assert_eq!(resolve_pattern(&f), DEFAULT_PATTERN);
        assert_eq!(resolve_formatter(&f).pattern(), "%M");
    }

    #[test]
    fn test_set_format_with_empty_value_ignores_properties() {
        let f = filter(Some(FormatSpec::new("format", "")), &[("format", "%L %M")]);
        assert_eq!(resolve_pattern(&f), DEFAULT_PATTERN);
    }

    #[test]
    fn test_empty_last_property_falls_back_to_default() {
        let f = filter(None, &[("format", "%L %M"), ("format", "")]);
        assert_eq!(resolve_pattern(&f), DEFAULT_PATTERN);
    }
}
