//! depview - Cargo.toml dependency viewer library
//!
//! This library provides the pieces behind the `depview` binary:
//! - A `key = value` config loader
//! - Manifest source resolution (local directory or URL)
//! - A line scanner extracting the `[dependencies]` table
//! - Text and JSON reporters

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod progress;
pub mod runner;
pub mod source;
