//! Domain models for package-updater
//!
//! This module contains the core types:
//! - Dependencies: name to declaration (or concrete version) mapping
//! - Scope: project manifest or globally installed packages
//! - UpgradeReport: outdated dependencies with their proposed declarations

mod report;
mod scope;

pub use report::{UpgradeEntry, UpgradeReport};
pub use scope::Scope;

use std::collections::BTreeMap;

/// Mapping from dependency name to a version declaration or concrete version
pub type Dependencies = BTreeMap<String, String>;
