//! JSON output formatter for machine processing

use crate::domain::{DependencyTable, PackageInfo};
use crate::output::Reporter;
use serde::Serialize;
use std::io::Write;

/// JSON reporter for machine-readable output
pub struct JsonReporter;

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Package metadata
    package: &'a PackageInfo,
    /// Dependencies in declaration order
    dependencies: &'a DependencyTable,
}

impl Reporter for JsonReporter {
    fn report(
        &self,
        package: &PackageInfo,
        dependencies: &DependencyTable,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            package,
            dependencies,
        };
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}
