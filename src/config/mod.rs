//! Key/value configuration
//!
//! This module provides:
//! - ConfigMap, the ordered key/value view of a config file
//! - Loading and parsing of `key = value` files
//! - Writing the default config file

mod loader;

pub use loader::{load_config, parse_config, write_default_config, DEFAULT_CONFIG};

/// Default config file name used when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Local directory holding the manifest
pub const REPOSITORY_PATH: &str = "repository_path";
/// Base URL or direct manifest URL
pub const REPOSITORY_URL: &str = "repository_url";
/// Package name shown in the report
pub const PACKAGE_NAME: &str = "package_name";
/// Package version shown in the report
pub const PACKAGE_VERSION: &str = "package_version";

/// Keys the rest of the program reads
pub const RECOGNIZED_KEYS: [&str; 4] = [REPOSITORY_PATH, REPOSITORY_URL, PACKAGE_NAME, PACKAGE_VERSION];

/// Ordered mapping from config key to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMap {
    entries: Vec<(String, String)>,
}

impl ConfigMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key, replacing the value in place if it already exists
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Looks up a value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Looks up a value, treating a missing key as empty
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, value)` pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if any key the program reads is present
    pub fn has_recognized_keys(&self) -> bool {
        RECOGNIZED_KEYS.iter().any(|key| self.get(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut map = ConfigMap::new();
        map.insert(PACKAGE_NAME, "demo");
        assert_eq!(map.get(PACKAGE_NAME), Some("demo"));
        assert_eq!(map.get(REPOSITORY_URL), None);
        assert_eq!(map.get_or_empty(REPOSITORY_URL), "");
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut map = ConfigMap::new();
        map.insert("a", "1");
        map.insert("b", "2");
        map.insert("a", "3");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_has_recognized_keys() {
        let mut map = ConfigMap::new();
        assert!(!map.has_recognized_keys());

        map.insert("test_mode", "false");
        assert!(!map.has_recognized_keys());

        map.insert(REPOSITORY_PATH, ".");
        assert!(map.has_recognized_keys());
    }
}
