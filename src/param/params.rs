//! Ordered parameter maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::ParamValue;

/// An insertion-ordered map of style parameter names to values.
///
/// Names use dotted namespacing (`"axes.labelsize"`). Keys are unique:
/// setting an existing key replaces its value and keeps its position.
///
/// # Example
///
/// ```rust
/// use pubstyle::StyleParams;
///
/// let params = StyleParams::new()
///     .add("font.size", 11)
///     .add("axes.grid", true)
///     .add("font.size", 12);
///
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("font.size").and_then(|v| v.as_f64()), Some(12.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleParams {
    entries: IndexMap<String, ParamValue>,
}

impl StyleParams {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, returning the updated map for chaining.
    pub fn add<V: Into<ParamValue>>(mut self, key: &str, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a parameter, returning the previous value if there was one.
    pub fn insert<V: Into<ParamValue>>(&mut self, key: &str, value: V) -> Option<ParamValue> {
        self.entries.insert(key.to_string(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Overlays `other` onto this map.
    ///
    /// Every entry of `other` wins over an entry with the same key here.
    /// Keys only present here are kept; new keys are appended in `other`'s order.
    pub fn overlay(&mut self, other: &StyleParams) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for StyleParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StyleParams {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = indexmap::map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
