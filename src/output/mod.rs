//! Output formatting for extracted dependencies
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonReporter;
pub use text::{report_config, TextReporter};

use crate::domain::{DependencyTable, PackageInfo};
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// No progress display
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Diagnostics and the loaded config on stderr
    Verbose,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Whether to use colors
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            verbosity: Verbosity::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, verbose: bool, quiet: bool, color: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Self {
            format,
            verbosity,
            color,
        }
    }

    /// Returns true if diagnostics should be printed
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }
}

/// Trait for dependency reporters
pub trait Reporter {
    /// Write the package header and every dependency in table order
    fn report(
        &self,
        package: &PackageInfo,
        dependencies: &DependencyTable,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;
}

/// Create a reporter based on configuration
pub fn create_reporter(config: &OutputConfig) -> Box<dyn Reporter> {
    match config.format {
        OutputFormat::Text => Box::new(TextReporter::new(config.color)),
        OutputFormat::Json => Box::new(JsonReporter),
    }
}
