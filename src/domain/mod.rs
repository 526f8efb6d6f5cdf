//! Core domain models for depview
//!
//! This module contains the types passed between the pipeline stages:
//! - Dependency entries and the ordered dependency table
//! - Package display metadata

mod dependency;
mod package;

pub use dependency::{Dependency, DependencyTable, NO_EXPLICIT_VERSION};
pub use package::{PackageInfo, UNKNOWN};
