//! Manifest dependency extraction
//!
//! This module provides:
//! - The `[dependencies]` line scanner for Cargo.toml-shaped text
//! - `[package]` name/version lookup used as report fallback

mod cargo_toml;

pub use cargo_toml::{
    extract_dependencies, extract_package_metadata, inline_table_version, version_descriptor,
    LineAction, PackageMetadata, ScanState,
};

/// Filename the source resolver looks for
pub const MANIFEST_FILENAME: &str = "Cargo.toml";
