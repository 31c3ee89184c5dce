//! Property-based tests for timber using proptest

use proptest::prelude::*;
use timber::config::{
    resolve_pattern, ConfigLoader, FilterRecord, FormatSpec, GranularOverride, PropertyBag,
    SinkSpec, SinkType,
};
use timber::prelude::*;
use timber::DEFAULT_PATTERN;

fn level_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("TRACE"),
        Just("DEBUG"),
        Just("INFO"),
        Just("WARN"),
        Just("ERROR"),
        Just("FATAL"),
    ]
}

fn property() -> impl Strategy<Value = (String, String)> {
    (
        prop_oneof![
            Just("format".to_string()),
            Just("filename".to_string()),
            Just("protocol".to_string()),
            Just("endpoint".to_string()),
            "[a-z]{1,8}",
        ],
        "[ -~]{0,12}",
    )
}

// ============================================================================
// Severity resolution
// ============================================================================

proptest! {
    /// Resolution never fails, whatever the input
    #[test]
    fn test_resolve_is_total(raw in ".*") {
        let _ = LogLevel::resolve(&raw);
    }

    /// Known names resolve regardless of case
    #[test]
    fn test_resolve_case_insensitive(name in level_name(), use_lower in any::<bool>()) {
        let input = if use_lower { name.to_lowercase() } else { name.to_string() };
        prop_assert_eq!(LogLevel::resolve(&input).to_str(), name);
    }
}

// ============================================================================
// Property bag and format resolution
// ============================================================================

proptest! {
    /// last_value agrees with an in-order scan that overwrites on each match
    #[test]
    fn test_last_value_matches_overwriting_scan(
        pairs in prop::collection::vec(property(), 0..12),
        name in prop_oneof![Just("format"), Just("filename"), Just("endpoint")],
    ) {
        let bag: PropertyBag = pairs.iter().cloned().collect();

        let mut expected = None;
        for (n, v) in &pairs {
            if n == name {
                expected = Some(v.as_str());
            }
        }
        prop_assert_eq!(bag.last_value(name), expected);
    }

    /// A non-empty Format field always wins over properties
    #[test]
    fn test_format_field_precedence(
        value in "[ -~]{1,16}",
        pairs in prop::collection::vec(property(), 0..8),
    ) {
        let filter = FilterRecord {
            format: Some(FormatSpec::new("format", value.clone())),
            properties: pairs.into_iter().collect(),
            ..Default::default()
        };
        prop_assert_eq!(resolve_pattern(&filter), value.as_str());
    }

    /// Without a Format field the pattern is the last format property, or the default
    #[test]
    fn test_format_property_fallback(pairs in prop::collection::vec(property(), 0..8)) {
        let filter = FilterRecord {
            properties: pairs.iter().cloned().collect(),
            ..Default::default()
        };

        let expected = pairs
            .iter()
            .rev()
            .find(|(n, _)| n == "format")
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_PATTERN);
        prop_assert_eq!(resolve_pattern(&filter), expected);
    }
}

// ============================================================================
// Sink resolution and granular overrides
// ============================================================================

proptest! {
    /// File sinks resolve exactly when the last filename is non-empty
    #[test]
    fn test_file_sink_requires_filename(pairs in prop::collection::vec(property(), 0..8)) {
        let bag: PropertyBag = pairs.iter().cloned().collect();
        let last = bag.last_value("filename").filter(|v| !v.is_empty()).map(str::to_string);

        match (SinkSpec::resolve(SinkType::File, &bag), last) {
            (Ok(SinkSpec::File { filename }), Some(expected)) => prop_assert_eq!(filename, expected),
            (Err(LoggerError::InvalidConfiguration { .. }), None) => {}
            (result, last) => prop_assert!(false, "unexpected {:?} for {:?}", result, last),
        }
    }

    /// Each path maps to the level of its last occurrence
    #[test]
    fn test_granular_last_occurrence_wins(
        entries in prop::collection::vec((prop_oneof![Just("a"), Just("b"), Just("c")], level_name()), 0..12),
    ) {
        let filter = FilterRecord {
            granulars: entries
                .iter()
                .map(|(path, level)| GranularOverride::new(*path, *level))
                .collect(),
            ..Default::default()
        };
        let levels = filter.granular_levels();

        for path in ["a", "b", "c"] {
            let expected = entries
                .iter()
                .rev()
                .find(|(p, _)| *p == path)
                .map(|(_, level)| LogLevel::resolve(level));
            prop_assert_eq!(levels.get(path).copied(), expected);
        }
    }

    /// Disabled filters never register, even with invalid sink settings
    #[test]
    fn test_disabled_filters_never_register(
        sink_type in prop_oneof![Just("console"), Just("socket"), Just("file"), Just("syslog")],
        count in 1usize..6,
    ) {
        let filter = format!(r#"{{"Enabled": false, "Type": "{}"}}"#, sink_type);
        let json = format!(r#"{{"Filters": [{}]}}"#, vec![filter; count].join(","));

        let mut loggers: Vec<ConfigLogger> = Vec::new();
        let report = ConfigLoader::new().load_str(&json, &mut loggers).unwrap();

        prop_assert_eq!(report, LoadReport::default());
        prop_assert!(loggers.is_empty());
    }
}
