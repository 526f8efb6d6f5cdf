//! `key = value` config file reader and writer
//!
//! Only single-level assignments are read. Section headers are skipped and
//! do not scope the keys below them.

use super::ConfigMap;
use crate::error::ConfigError;
use std::fs;
use std::path::Path;

/// Contents written by `write_default_config`
pub const DEFAULT_CONFIG: &str = "\
package_name = example-package
repository_url = https://example.com/repo
test_mode = false
package_version = 1.0.0
output_file = graph.png
ascii_tree = false
";

/// Load a config file from disk
pub fn load_config(path: &Path) -> Result<ConfigMap, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::from_read(path, e))?;
    Ok(parse_config(&content))
}

/// Parse config text into a ConfigMap
pub fn parse_config(content: &str) -> ConfigMap {
    let mut map = ConfigMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim(), unquote(value.trim()));
        }
    }

    map
}

/// Strip one pair of surrounding double quotes
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Write the default config file
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
