//! JSON configuration document
//!
//! ```json
//! {
//!   "Filters": [
//!     {
//!       "Enabled": true,
//!       "Tag": "stdout",
//!       "Type": "console",
//!       "Level": "INFO",
//!       "Format": { "name": "format", "value": "[%L] %M" },
//!       "Properties": [{ "name": "format", "value": "%M" }],
//!       "Granulars": [{ "level": "DEBUG", "path": "app/net" }]
//!     }
//!   ]
//! }
//! ```
//!
//! Every field is optional, and an absent or `null` field falls back to its
//! zero value. Unknown keys are ignored, as is anything after the first
//! JSON value.

use super::properties::PropertyBag;
use crate::core::LogLevel;
use serde::{Deserialize, Deserializer};
use serde_json::de::{Read as JsonRead, StreamDeserializer};
use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;

/// Top-level document: an ordered list of filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    #[serde(rename = "Filters", alias = "filters", deserialize_with = "null_as_default")]
    pub filters: Vec<FilterRecord>,
}

impl ConfigDocument {
    /// Decodes the first JSON value in `reader`
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        first_document(serde_json::Deserializer::from_reader(reader).into_iter())
    }
}

impl FromStr for ConfigDocument {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        first_document(serde_json::Deserializer::from_str(s).into_iter())
    }
}

fn first_document<'de, R>(
    mut stream: StreamDeserializer<'de, R, ConfigDocument>,
) -> serde_json::Result<ConfigDocument>
where
    R: JsonRead<'de>,
{
    match stream.next() {
        Some(document) => document,
        // Blank input: surface the decoder's own EOF error
        None => serde_json::from_str(""),
    }
}

/// One logger definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterRecord {
    #[serde(rename = "Enabled", alias = "enabled", deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(rename = "Tag", alias = "tag", deserialize_with = "null_as_default")]
    pub tag: String,
    /// Sink type name: `console`, `socket` or `file`
    #[serde(rename = "Type", alias = "type", deserialize_with = "null_as_default")]
    pub sink_type: String,
    /// Raw level name, resolved with [`LogLevel::resolve`]
    #[serde(rename = "Level", alias = "level", deserialize_with = "null_as_default")]
    pub level: String,
    /// `None` when absent, null, or both name and value are empty
    #[serde(rename = "Format", alias = "format", deserialize_with = "format_spec")]
    pub format: Option<FormatSpec>,
    #[serde(rename = "Properties", alias = "properties", deserialize_with = "null_as_default")]
    pub properties: PropertyBag,
    #[serde(rename = "Granulars", alias = "granulars", deserialize_with = "null_as_default")]
    pub granulars: Vec<GranularOverride>,
}

impl FilterRecord {
    pub fn resolved_level(&self) -> LogLevel {
        LogLevel::resolve(&self.level)
    }

    /// Granular overrides keyed by path; a repeated path keeps its last level
    pub fn granular_levels(&self) -> HashMap<String, LogLevel> {
        self.granulars
            .iter()
            .map(|g| (g.path.clone(), LogLevel::resolve(&g.level)))
            .collect()
    }
}

/// The dedicated `Format` field of a filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatSpec {
    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "Value", deserialize_with = "null_as_default")]
    pub value: String,
}

impl FormatSpec {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    fn is_unset(&self) -> bool {
        self.name.is_empty() && self.value.is_empty()
    }
}

/// Level override for a package path, optionally qualified with a function
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GranularOverride {
    #[serde(alias = "Level", deserialize_with = "null_as_default")]
    pub level: String,
    #[serde(alias = "Path", deserialize_with = "null_as_default")]
    pub path: String,
}

impl GranularOverride {
    pub fn new(path: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            path: path.into(),
        }
    }
}

pub(super) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn format_spec<'de, D>(deserializer: D) -> Result<Option<FormatSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    let spec = Option::<FormatSpec>::deserialize(deserializer)?;
    Ok(spec.filter(|spec| !spec.is_unset()))
}
