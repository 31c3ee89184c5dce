//! Ordered property bag attached to a filter

use serde::Deserialize;

/// A single `name`/`value` setting
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Property {
    #[serde(alias = "Name", deserialize_with = "super::document::null_as_default")]
    pub name: String,
    #[serde(alias = "Value", deserialize_with = "super::document::null_as_default")]
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Properties in document order. Names may repeat.
///
/// ```
/// use timber::config::PropertyBag;
///
/// let bag: PropertyBag = [("format", "%M"), ("format", "[%L] %M")].into_iter().collect();
/// assert_eq!(bag.last_value("format"), Some("[%L] %M"));
/// assert_eq!(bag.last_value("filename"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag(Vec<Property>);

impl PropertyBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push(Property::new(name, value));
    }

    /// Value of the last property called `name`, if any.
    ///
    /// Later entries shadow earlier ones, including when the later value
    /// is empty.
    pub fn last_value(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Property>> for PropertyBag {
    fn from(properties: Vec<Property>) -> Self {
        Self(properties)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| Property::new(name, value))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a PropertyBag {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
