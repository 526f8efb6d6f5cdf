//! Text output formatter for human-readable display
//!
//! Prints a header naming the package, then one `name => version` line per
//! dependency in declaration order.

use crate::config::ConfigMap;
use crate::domain::{DependencyTable, PackageInfo};
use crate::output::Reporter;
use colored::Colorize;
use std::io::Write;

/// Message printed when the table is empty
const NO_DEPENDENCIES: &str = "No dependencies found.";

/// Text reporter for human-readable output
pub struct TextReporter {
    /// Whether to use colors
    color: bool,
}

impl TextReporter {
    /// Create a new text reporter
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn write_header(&self, package: &PackageInfo, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(
                writer,
                "Dependencies of {} {}:",
                package.name.bold(),
                package.version.dimmed()
            )
        } else {
            writeln!(
                writer,
                "Dependencies of {} {}:",
                package.name, package.version
            )
        }
    }
}

impl Reporter for TextReporter {
    fn report(
        &self,
        package: &PackageInfo,
        dependencies: &DependencyTable,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.write_header(package, writer)?;

        if dependencies.is_empty() {
            if self.color {
                writeln!(writer, "  {}", NO_DEPENDENCIES.dimmed())?;
            } else {
                writeln!(writer, "  {}", NO_DEPENDENCIES)?;
            }
            return Ok(());
        }

        for dep in dependencies {
            if self.color {
                let version = if dep.has_explicit_version() {
                    dep.version.green().to_string()
                } else {
                    dep.version.dimmed().to_string()
                };
                writeln!(writer, "  {} {} {}", dep.name.bold(), "=>".dimmed(), version)?;
            } else {
                writeln!(writer, "  {}", dep)?;
            }
        }

        Ok(())
    }
}

/// Print the loaded configuration as `key: value` lines
pub fn report_config(config: &ConfigMap, writer: &mut dyn Write) -> std::io::Result<()> {
    writeln!(writer, "Configuration parameters:")?;
    writeln!(writer, "-------------------------")?;
    for (key, value) in config.iter() {
        writeln!(writer, "{}: {}", key, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NO_EXPLICIT_VERSION;

    fn render(table: &DependencyTable) -> String {
        let mut out = Vec::new();
        TextReporter::new(false)
            .report(&PackageInfo::new("demo", "1.0.0"), table, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_lists_dependencies_in_order() {
        let mut table = DependencyTable::new();
        table.insert("serde", "1.0");
        table.insert("tokio", "1.28");
        table.insert("mylib", NO_EXPLICIT_VERSION);

        assert_eq!(
            render(&table),
            "Dependencies of demo 1.0.0:\n  serde => 1.0\n  tokio => 1.28\n  mylib => (no explicit version)\n"
        );
    }

    #[test]
    fn test_report_empty_table() {
        let output = render(&DependencyTable::new());
        assert_eq!(output, "Dependencies of demo 1.0.0:\n  No dependencies found.\n");
    }

    #[test]
    fn test_report_with_color_keeps_names() {
        colored::control::set_override(true);
        let mut table = DependencyTable::new();
        table.insert("serde", "1.0");
        let mut out = Vec::new();
        TextReporter::new(true)
            .report(&PackageInfo::new("demo", "1.0.0"), &table, &mut out)
            .unwrap();
        colored::control::unset_override();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("serde"));
        assert!(output.contains("1.0"));
    }

    #[test]
    fn test_report_config() {
        let mut config = ConfigMap::new();
        config.insert("package_name", "demo");
        config.insert("test_mode", "false");

        let mut out = Vec::new();
        report_config(&config, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Configuration parameters:\n"));
        assert!(output.ends_with("package_name: demo\ntest_mode: false\n"));
    }
}
