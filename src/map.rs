//! Insertion-ordered string map.
//!
//! [`Map`] is the key/value carrier used throughout the crate, most notably
//! by [`Template::interpolate`](crate::Template::interpolate) and the
//! code-tag parser. Iteration order is insertion order, which makes
//! substitution deterministic and lets "first write wins" double as the
//! merge policy between inline pairs and handler defaults.

use crate::error::Error;
use indexmap::IndexMap;

/// Policy applied by [`Map::add_with_mode`] when a key already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateMode {
    /// Keep the existing value (the default behavior of [`Map::add`]).
    Ignore,
    /// Overwrite the existing value, keeping the key's original position.
    Replace,
    /// Fail with [`Error::DuplicateKey`].
    Error,
}

/// A single key/value pair, convenient for bulk map construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    pub key: String,
    pub value: String,
}

impl MapEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        MapEntry { key: key.into(), value: value.into() }
    }
}

impl From<(&str, &str)> for MapEntry {
    fn from((key, value): (&str, &str)) -> Self {
        MapEntry::new(key, value)
    }
}

/// A mapping from string keys to string values preserving insertion order.
///
/// Keys are case-sensitive and unique. [`Map::add`] is first-write-wins:
/// adding a key that already exists is a no-op, so ownership of a key is
/// decided by insertion order, not by whoever writes last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    data: IndexMap<String, String>,
}

impl Map {
    /// Create an empty `Map`.
    pub fn new() -> Self {
        Map::default()
    }

    /// Create a `Map` from a slice of entries (first occurrence of a key wins).
    pub fn from_entries(entries: &[MapEntry]) -> Self {
        let mut map = Map::new();
        for entry in entries {
            map.add_entry(entry);
        }
        map
    }

    /// Add a pair; a no-op when the key is already present.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Add a pair under an explicit duplicate policy.
    pub fn add_with_mode(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        mode: DuplicateMode,
    ) -> Result<(), Error> {
        let key = key.into();
        match mode {
            DuplicateMode::Ignore => self.add(key, value),
            DuplicateMode::Replace => {
                self.data.insert(key, value.into());
            }
            DuplicateMode::Error => {
                if self.data.contains_key(&key) {
                    return Err(Error::DuplicateKey(key));
                }
                self.data.insert(key, value.into());
            }
        }
        Ok(())
    }

    /// Add a pair, reporting whether it was actually inserted.
    pub fn add_if_missing(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.data.contains_key(&key) {
            return false;
        }
        self.data.insert(key, value.into());
        true
    }

    /// Add a single entry (first-write-wins).
    pub fn add_entry(&mut self, entry: &MapEntry) {
        self.add(entry.key.clone(), entry.value.clone());
    }

    /// Append another map to this one; existing keys keep their values.
    pub fn import(&mut self, other: &Map) {
        for (key, value) in other.iter() {
            self.add(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Remove a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> bool {
        self.data.shift_remove(key).is_some()
    }

    /// Remove a key and hand back its value.
    pub fn pull(&mut self, key: &str) -> Option<String> {
        self.data.shift_remove(key)
    }

    /// The key at `index` in insertion order.
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.data.get_index(index).map(|(key, _)| key.as_str())
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.data.values().map(String::as_str)
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// A snapshot of the map as an entry list, in insertion order.
    pub fn entries(&self) -> Vec<MapEntry> {
        self.iter().map(|(key, value)| MapEntry::new(key, value)).collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl FromIterator<(String, String)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.add(key, value);
        }
        map
    }
}
