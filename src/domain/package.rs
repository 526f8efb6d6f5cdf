//! Package display metadata

use serde::Serialize;
use std::fmt;

/// Placeholder shown when neither the config nor the manifest names the package
pub const UNKNOWN: &str = "unknown";

/// Name and version shown in the report header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    /// Package name
    pub name: String,
    /// Package version
    pub version: String,
}

impl PackageInfo {
    /// Creates package info from explicit values
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Picks the first available value for each field, falling back to `unknown`
    ///
    /// Empty strings count as missing.
    pub fn resolve(
        configured_name: Option<&str>,
        configured_version: Option<&str>,
        manifest_name: Option<&str>,
        manifest_version: Option<&str>,
    ) -> Self {
        let pick = |first: Option<&str>, second: Option<&str>| {
            first
                .filter(|s| !s.is_empty())
                .or(second.filter(|s| !s.is_empty()))
                .unwrap_or(UNKNOWN)
                .to_string()
        };

        Self {
            name: pick(configured_name, manifest_name),
            version: pick(configured_version, manifest_version),
        }
    }
}

impl fmt::Display for PackageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
