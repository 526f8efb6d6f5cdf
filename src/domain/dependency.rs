//! Dependency entries and the ordered dependency table

use serde::Serialize;
use std::fmt;

/// Version descriptor recorded for an inline table without a `version` key
pub const NO_EXPLICIT_VERSION: &str = "(no explicit version)";

/// A single declared dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    /// Dependency name (left-hand side of the declaration)
    pub name: String,
    /// Free-form version descriptor
    pub version: String,
}

impl Dependency {
    /// Creates a new dependency entry
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Returns true if the manifest gave no explicit version
    pub fn has_explicit_version(&self) -> bool {
        self.version != NO_EXPLICIT_VERSION
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.name, self.version)
    }
}

/// Ordered mapping from dependency name to version descriptor
///
/// Iteration follows declaration order. Inserting a name that is already
/// present replaces its version but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyTable {
    entries: Vec<Dependency>,
}

impl DependencyTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a dependency, overwriting the version of an existing name
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        let name = name.into();
        let version = version.into();
        match self.entries.iter_mut().find(|d| d.name == name) {
            Some(existing) => existing.version = version,
            None => self.entries.push(Dependency::new(name, version)),
        }
    }

    /// Looks up the version descriptor for a name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.version.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Dependency> {
        self.entries.iter()
    }

    /// Dependency names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|d| d.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a DependencyTable {
    type Item = &'a Dependency;
    type IntoIter = std::slice::Iter<'a, Dependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
