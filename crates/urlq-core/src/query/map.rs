//! Ordered multimap of query parameters

use ahash::AHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Parameter name to every value it was given, in query order.
///
/// Keys iterate in the order of their first appearance. A key that never
/// occurred is absent; it is never stored with an empty value list. There
/// are no public mutators: maps come from the tokenizer or from
/// [`FromIterator`].
#[derive(Debug, Clone, Default)]
pub struct QueryMap {
    entries: Vec<(String, Vec<String>)>,
    index: AHashMap<String, usize>,
}

impl QueryMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to `key`, creating the entry on first sight.
    /// Empty keys are ignored.
    pub(crate) fn push(&mut self, key: String, value: String) {
        if key.is_empty() {
            return;
        }

        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1.push(value),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![value]));
            }
        }
    }

    /// Values for `key`, or `None` when the key never occurred
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Values for `key`; empty when the key never occurred
    pub fn get_all(&self, key: &str) -> &[String] {
        self.get(key).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of values across all keys
    pub fn pair_count(&self) -> usize {
        self.entries.iter().map(|(_, values)| values.len()).sum()
    }

    /// Keys in order of first appearance
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// `(key, values)` in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }
}

// The index is derived from `entries`, so only entries take part in equality.
impl PartialEq for QueryMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for QueryMap {}

impl<K, V> FromIterator<(K, V)> for QueryMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = QueryMap::new();
        for (key, value) in iter {
            map.push(key.into(), value.into());
        }
        map
    }
}

impl Serialize for QueryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            out.serialize_entry(key, values)?;
        }
        out.end()
    }
}
