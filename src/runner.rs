//! Pipeline for a single `config` command
//!
//! load config → resolve source → read manifest → extract → report
//!
//! Every stage finishes before the next one starts. The first error ends
//! the run; whatever was already written stays written.

use crate::config::{load_config, ConfigMap, PACKAGE_NAME, PACKAGE_VERSION};
use crate::domain::{DependencyTable, PackageInfo};
use crate::error::AppError;
use crate::manifest::{extract_dependencies, extract_package_metadata};
use crate::output::{create_reporter, report_config, OutputConfig, Verbosity};
use crate::progress::Progress;
use crate::source::{load_manifest, resolve_source, HttpFetcher, ManifestFetcher, ManifestSource};
use std::io::Write;
use std::path::Path;

/// Runs the config → report pipeline
pub struct Runner {
    /// Output settings
    output: OutputConfig,
    /// Fetcher for remote manifests
    fetcher: Box<dyn ManifestFetcher>,
}

/// What a successful run extracted
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Where the manifest was read from
    pub source: ManifestSource,
    /// Header metadata
    pub package: PackageInfo,
    /// Extracted dependencies
    pub dependencies: DependencyTable,
}

impl Runner {
    /// Create a runner using the HTTP fetcher
    pub fn new(output: OutputConfig) -> Result<Self, AppError> {
        let fetcher = HttpFetcher::new()?;
        Ok(Self::with_fetcher(output, Box::new(fetcher)))
    }

    /// Create a runner with a custom fetcher
    pub fn with_fetcher(output: OutputConfig, fetcher: Box<dyn ManifestFetcher>) -> Self {
        Self { output, fetcher }
    }

    /// Run the pipeline for one config file, writing the report to `writer`
    pub async fn run(
        &self,
        config_path: &Path,
        writer: &mut dyn Write,
    ) -> Result<RunOutcome, AppError> {
        let config = load_config(config_path)?;
        if !config.has_recognized_keys() {
            return Err(AppError::EmptyConfig {
                path: config_path.to_path_buf(),
            });
        }

        if self.output.is_verbose() {
            eprintln!("Config: {}", config_path.display());
            let mut stderr = std::io::stderr().lock();
            report_config(&config, &mut stderr)?;
            writeln!(stderr)?;
        }

        let source = resolve_source(&config)?;
        if self.output.is_verbose() {
            eprintln!("Manifest: {}", source);
        }

        let content = self.read_manifest(&source).await?;
        if self.output.is_verbose() {
            eprintln!("Read {} bytes", content.len());
        }

        let dependencies = extract_dependencies(&content);
        let package = package_info(&config, &content);

        let reporter = create_reporter(&self.output);
        reporter.report(&package, &dependencies, writer)?;
        writer.flush()?;

        Ok(RunOutcome {
            source,
            package,
            dependencies,
        })
    }

    async fn read_manifest(&self, source: &ManifestSource) -> Result<String, AppError> {
        let mut progress = Progress::new(
            source.is_remote() && self.output.verbosity != Verbosity::Quiet,
        );
        progress.spinner(&format!("Fetching {}", source));
        let result = load_manifest(source, self.fetcher.as_ref()).await;
        progress.finish_and_clear();
        Ok(result?)
    }
}

/// Header metadata: config values first, then the manifest's `[package]`
fn package_info(config: &ConfigMap, content: &str) -> PackageInfo {
    let metadata = extract_package_metadata(content);
    PackageInfo::resolve(
        config.get(PACKAGE_NAME),
        config.get(PACKAGE_VERSION),
        metadata.name.as_deref(),
        metadata.version.as_deref(),
    )
}
