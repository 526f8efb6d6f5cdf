//! Manifest source resolution
//!
//! This module provides:
//! - Choosing between a local repository path and a remote URL
//! - URL normalization to the manifest file
//! - Reading the manifest text from disk or over HTTP

mod client;

pub use client::HttpFetcher;

use crate::config::{ConfigMap, REPOSITORY_PATH, REPOSITORY_URL};
use crate::error::SourceError;
use crate::manifest::MANIFEST_FILENAME;
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the manifest text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// Manifest file on the local filesystem
    Local(PathBuf),
    /// Manifest URL fetched over HTTP(S)
    Remote(String),
}

impl ManifestSource {
    /// Returns true for a remote source
    pub fn is_remote(&self) -> bool {
        matches!(self, ManifestSource::Remote(_))
    }
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestSource::Local(path) => write!(f, "{}", path.display()),
            ManifestSource::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Trait for fetching remote manifest text
#[async_trait]
pub trait ManifestFetcher: Send + Sync {
    /// GET the URL and return the response body
    async fn fetch_text(&self, url: &str) -> Result<String, SourceError>;
}

/// Decide where to read the manifest from
///
/// `repository_path` wins over `repository_url`. A local manifest must
/// already exist; a URL is only normalized here.
pub fn resolve_source(config: &ConfigMap) -> Result<ManifestSource, SourceError> {
    let repository_path = config.get_or_empty(REPOSITORY_PATH);
    let repository_url = config.get_or_empty(REPOSITORY_URL);

    if !repository_path.is_empty() {
        let manifest = Path::new(repository_path).join(MANIFEST_FILENAME);
        if !manifest.is_file() {
            return Err(SourceError::not_found(manifest.display().to_string()));
        }
        return Ok(ManifestSource::Local(manifest));
    }

    if !repository_url.is_empty() {
        return Ok(ManifestSource::Remote(normalize_manifest_url(repository_url)));
    }

    Err(SourceError::MissingSource)
}

/// Point a repository URL at its manifest file
///
/// `https://host/repo` becomes `https://host/repo/Cargo.toml`; a URL already
/// ending in `Cargo.toml` is returned unchanged.
pub fn normalize_manifest_url(url: &str) -> String {
    if url.ends_with(MANIFEST_FILENAME) {
        return url.to_string();
    }

    let mut normalized = url.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized.push_str(MANIFEST_FILENAME);
    normalized
}

/// Read the manifest text for a resolved source
pub async fn load_manifest(
    source: &ManifestSource,
    fetcher: &dyn ManifestFetcher,
) -> Result<String, SourceError> {
    match source {
        ManifestSource::Local(path) => {
            std::fs::read_to_string(path).map_err(|e| SourceError::from_read(path, e))
        }
        ManifestSource::Remote(url) => fetcher.fetch_text(url).await,
    }
}
