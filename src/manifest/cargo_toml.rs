//! Line scanner for Cargo.toml-shaped manifests
//!
//! Handles the three declaration shapes found in a `[dependencies]` table:
//! - Quoted version: `serde = "1.0"`
//! - Inline table: `tokio = { version = "1", features = ["full"] }`
//! - Inline table without a version: `mylib = { git = "..." }`
//!
//! Anything else on the right-hand side is kept verbatim with quotes removed.
//! This is not a TOML parser: only the first matching section is read and
//! scanning stops at the next `[` header.

use crate::domain::{DependencyTable, NO_EXPLICIT_VERSION};

const DEPENDENCIES_SECTION: &str = "dependencies";
const PACKAGE_SECTION: &str = "package";

/// Scanner position relative to the section being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Before the section header
    Outside,
    /// Between the section header and the next header
    InsideSection,
}

/// What the scanner does with one trimmed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction<'a> {
    /// The wanted section header; start reading entries
    Enter,
    /// Nothing to record
    Ignore,
    /// A `name = rhs` entry, both sides trimmed
    Entry { name: &'a str, rhs: &'a str },
    /// A new section header; stop scanning for good
    Stop,
}

impl ScanState {
    /// Classifies a trimmed line given the current state
    pub fn classify<'a>(self, line: &'a str, header: &str) -> LineAction<'a> {
        match self {
            ScanState::Outside => {
                if is_header(line, header) {
                    LineAction::Enter
                } else {
                    LineAction::Ignore
                }
            }
            ScanState::InsideSection => {
                if line.starts_with('[') {
                    LineAction::Stop
                } else if line.is_empty() || line.starts_with('#') {
                    LineAction::Ignore
                } else if let Some((name, rhs)) = line.split_once('=') {
                    LineAction::Entry {
                        name: name.trim(),
                        rhs: rhs.trim(),
                    }
                } else {
                    LineAction::Ignore
                }
            }
        }
    }
}

fn is_header(line: &str, header: &str) -> bool {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(|name| name == header)
        .unwrap_or(false)
}

/// Collects the raw `name = rhs` pairs of the first `[header]` section
fn section_entries<'a>(content: &'a str, header: &str) -> Vec<(&'a str, &'a str)> {
    let mut state = ScanState::Outside;
    let mut entries = Vec::new();

    for line in content.split('\n') {
        match state.classify(line.trim(), header) {
            LineAction::Enter => state = ScanState::InsideSection,
            LineAction::Ignore => {}
            LineAction::Entry { name, rhs } => entries.push((name, rhs)),
            LineAction::Stop => break,
        }
    }

    entries
}

/// Extracts the `[dependencies]` table from manifest text
///
/// Never fails: a missing section gives an empty table and unreadable lines
/// are skipped. A name declared twice keeps its first position and takes the
/// last version.
pub fn extract_dependencies(content: &str) -> DependencyTable {
    let mut table = DependencyTable::new();
    for (name, rhs) in section_entries(content, DEPENDENCIES_SECTION) {
        table.insert(name, version_descriptor(rhs));
    }
    table
}

/// Turns the right-hand side of a dependency line into a version descriptor
pub fn version_descriptor(rhs: &str) -> String {
    if let Some(literal) = strip_quotes(rhs) {
        return literal.to_string();
    }

    if let Some(inner) = rhs.strip_prefix('{').and_then(|r| r.strip_suffix('}')) {
        return inline_table_version(inner).unwrap_or_else(|| NO_EXPLICIT_VERSION.to_string());
    }

    rhs.replace('"', "").trim().to_string()
}

/// Finds the version inside the text between an inline table's braces
///
/// This is a plain substring search for `version`, so it also hits the word
/// inside other values, e.g. `features = ["version-info"]`. The value is then
/// whatever follows the next `=`. Returns `None` when the token is absent or
/// no `=` follows it.
pub fn inline_table_version(inner: &str) -> Option<String> {
    let token_at = inner.find("version")?;
    let after_token = &inner[token_at + "version".len()..];
    let (_, value) = after_token.split_once('=')?;

    let value = value.trim();
    let value = value.strip_suffix(',').unwrap_or(value).trim();

    if let Some(literal) = strip_quotes(value) {
        return Some(literal.to_string());
    }

    let end = value.find([',', '}']).unwrap_or(value.len());
    Some(value[..end].replace('"', "").trim().to_string())
}

/// Returns the text between a surrounding pair of double quotes
fn strip_quotes(value: &str) -> Option<&str> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Some(&value[1..value.len() - 1])
    } else {
        None
    }
}

/// Name and version declared in the `[package]` section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Reads `name` and `version` from the manifest's `[package]` section
///
/// Values that are not plain strings (e.g. `version.workspace = true` or an
/// inline table) are ignored.
pub fn extract_package_metadata(content: &str) -> PackageMetadata {
    let mut metadata = PackageMetadata::default();

    for (key, rhs) in section_entries(content, PACKAGE_SECTION) {
        let value = match strip_quotes(rhs) {
            Some(v) => v.to_string(),
            None => continue,
        };
        match key {
            "name" => metadata.name = Some(value),
            "version" => metadata.version = Some(value),
            _ => {}
        }
    }

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[dependencies]
serde = "1.0"
tokio = { version = "1.28", features = ["full"] }
mylib = { git = "https://x", branch = "main" }
[dev-dependencies]
mock = "0.1"
"#;

    fn pairs(table: &DependencyTable) -> Vec<(&str, &str)> {
        table
            .iter()
            .map(|d| (d.name.as_str(), d.version.as_str()))
            .collect()
    }

    #[test]
    fn test_extract_sample_manifest() {
        let table = extract_dependencies(SAMPLE);
        assert_eq!(
            pairs(&table),
            vec![
                ("serde", "1.0"),
                ("tokio", "1.28"),
                ("mylib", NO_EXPLICIT_VERSION),
            ]
        );
        assert_eq!(table.get("mock"), None);
    }

    #[test]
    fn test_extract_no_dependencies_section() {
        let content = r#"
[package]
name = "test"
version = "0.1.0"
"#;
        assert!(extract_dependencies(content).is_empty());
        assert!(extract_dependencies("").is_empty());
    }

    #[test]
    fn test_extract_after_package_section() {
        let content = r#"
[package]
name = "test"
version = "0.1.0"

[dependencies]
anyhow = "1"
"#;
        let table = extract_dependencies(content);
        assert_eq!(pairs(&table), vec![("anyhow", "1")]);
    }

    #[test]
    fn test_line_without_equals_is_skipped() {
        let content = r#"[dependencies]
serde = "1.0"
broken-line-no-equals
regex = "1.9"
"#;
        let table = extract_dependencies(content);
        assert_eq!(pairs(&table), vec![("serde", "1.0"), ("regex", "1.9")]);
    }

    #[test]
    fn test_blank_lines_and_comments_are_skipped() {
        let content = r#"[dependencies]
# serialization
serde = "1.0"

   # indented comment
regex = "1.9"
"#;
        let table = extract_dependencies(content);
        assert_eq!(table.names(), vec!["serde", "regex"]);
    }

    #[test]
    fn test_scan_stops_at_next_header() {
        let content = r#"[dependencies]
serde = "1.0"

[features]
default = []

[dependencies]
late = "9.9"
"#;
        let table = extract_dependencies(content);
        assert_eq!(table.names(), vec!["serde"]);
    }

    #[test]
    fn test_dotted_dependency_header_ends_section() {
        let content = r#"[dependencies]
serde = "1.0"
[dependencies.tokio]
version = "1"
"#;
        let table = extract_dependencies(content);
        assert_eq!(pairs(&table), vec![("serde", "1.0")]);
    }

    #[test]
    fn test_header_must_match_exactly() {
        let content = r#"[dev-dependencies]
mock = "0.1"
"#;
        assert!(extract_dependencies(content).is_empty());
    }

    #[test]
    fn test_header_with_surrounding_whitespace() {
        let content = "  [dependencies]  \nserde = \"1.0\"\n";
        assert_eq!(extract_dependencies(content).get("serde"), Some("1.0"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "[dependencies]\r\nserde = \"1.0\"\r\ntokio = { version = \"1\" }\r\n";
        let table = extract_dependencies(content);
        assert_eq!(pairs(&table), vec![("serde", "1.0"), ("tokio", "1")]);
    }

    #[test]
    fn test_inline_table_version_not_first() {
        let content = r#"[dependencies]
clap = { features = ["derive"], version = "4.5" }
"#;
        assert_eq!(extract_dependencies(content).get("clap"), Some("4.5"));
    }

    #[test]
    fn test_inline_table_without_version() {
        let content = r#"[dependencies]
local = { path = "../local" }
shared = { workspace = true }
"#;
        let table = extract_dependencies(content);
        assert_eq!(table.get("local"), Some(NO_EXPLICIT_VERSION));
        assert_eq!(table.get("shared"), Some(NO_EXPLICIT_VERSION));
    }

    #[test]
    fn test_unquoted_rhs_kept_verbatim() {
        let content = r#"[dependencies]
odd = 1.2.3
"#;
        assert_eq!(extract_dependencies(content).get("odd"), Some("1.2.3"));
    }

    #[test]
    fn test_only_first_equals_splits() {
        let content = r#"[dependencies]
weird = ">=1.0, <2.0"
"#;
        assert_eq!(extract_dependencies(content).get("weird"), Some(">=1.0, <2.0"));

        let content = "[dependencies]\nraw = a=b\n";
        assert_eq!(extract_dependencies(content).get("raw"), Some("a=b"));
    }

    #[test]
    fn test_empty_name_is_recorded() {
        let content = "[dependencies]\n= \"1.0\"\n";
        let table = extract_dependencies(content);
        assert_eq!(pairs(&table), vec![("", "1.0")]);
    }

    #[test]
    fn test_duplicate_last_version_first_position() {
        let content = r#"[dependencies]
serde = "1.0"
tokio = "1"
serde = "2.0"
"#;
        let table = extract_dependencies(content);
        assert_eq!(pairs(&table), vec![("serde", "2.0"), ("tokio", "1")]);
    }

    #[test]
    fn test_extract_is_idempotent() {
        assert_eq!(extract_dependencies(SAMPLE), extract_dependencies(SAMPLE));
    }

    #[test]
    fn test_version_descriptor_shapes() {
        assert_eq!(version_descriptor(r#""1.0""#), "1.0");
        assert_eq!(version_descriptor(r#"{ version = "1" }"#), "1");
        assert_eq!(version_descriptor(r#"{ git = "x" }"#), NO_EXPLICIT_VERSION);
        assert_eq!(version_descriptor(r#"some"thing"#), "something");
        assert_eq!(version_descriptor(r#"""#), "");
    }

    #[test]
    fn test_version_descriptor_empty_inline_table() {
        assert_eq!(version_descriptor("{}"), NO_EXPLICIT_VERSION);
    }

    #[test]
    fn test_inline_table_version_quoted() {
        assert_eq!(
            inline_table_version(r#" version = "1.28", features = ["full"] "#),
            Some("1.28".to_string())
        );
    }

    #[test]
    fn test_inline_table_version_trailing_comma() {
        assert_eq!(
            inline_table_version(r#" version = "0.3", "#),
            Some("0.3".to_string())
        );
    }

    #[test]
    fn test_inline_table_version_unquoted() {
        assert_eq!(
            inline_table_version(" version = 1.2, optional = true "),
            Some("1.2".to_string())
        );
    }

    #[test]
    fn test_inline_table_version_absent() {
        assert_eq!(inline_table_version(r#" git = "https://x" "#), None);
        assert_eq!(inline_table_version(""), None);
    }

    #[test]
    fn test_inline_table_version_token_without_equals() {
        assert_eq!(inline_table_version(r#" features = ["version"] "#), None);
    }

    #[test]
    fn test_inline_table_version_matches_inside_other_values() {
        // The token search is a raw substring match: "version-info" is hit
        // first and the next `=` belongs to the git key.
        assert_eq!(
            inline_table_version(r#" features = ["version-info"], git = "https://x" "#),
            Some("https://x".to_string())
        );
    }

    #[test]
    fn test_scan_state_outside() {
        let state = ScanState::Outside;
        assert_eq!(state.classify("[dependencies]", "dependencies"), LineAction::Enter);
        assert_eq!(state.classify("[package]", "dependencies"), LineAction::Ignore);
        assert_eq!(state.classify("serde = \"1\"", "dependencies"), LineAction::Ignore);
    }

    #[test]
    fn test_scan_state_inside() {
        let state = ScanState::InsideSection;
        assert_eq!(state.classify("[features]", "dependencies"), LineAction::Stop);
        assert_eq!(state.classify("[dependencies]", "dependencies"), LineAction::Stop);
        assert_eq!(state.classify("", "dependencies"), LineAction::Ignore);
        assert_eq!(state.classify("# note", "dependencies"), LineAction::Ignore);
        assert_eq!(state.classify("no-equals", "dependencies"), LineAction::Ignore);
        assert_eq!(
            state.classify("a = b = c", "dependencies"),
            LineAction::Entry { name: "a", rhs: "b = c" }
        );
    }

    #[test]
    fn test_extract_package_metadata() {
        let content = r#"
[package]
name = "demo"
version = "0.3.1"
edition = "2021"

[dependencies]
serde = "1.0"
"#;
        let metadata = extract_package_metadata(content);
        assert_eq!(metadata.name.as_deref(), Some("demo"));
        assert_eq!(metadata.version.as_deref(), Some("0.3.1"));
    }

    #[test]
    fn test_extract_package_metadata_workspace_version() {
        let content = r#"
[package]
name = "member"
version.workspace = true
"#;
        let metadata = extract_package_metadata(content);
        assert_eq!(metadata.name.as_deref(), Some("member"));
        assert_eq!(metadata.version, None);
    }

    #[test]
    fn test_extract_package_metadata_missing() {
        assert_eq!(extract_package_metadata(SAMPLE), PackageMetadata::default());
    }
}
