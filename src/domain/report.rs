//! Upgrade report types

use super::{Dependencies, Scope};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A dependency whose declaration is outdated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeEntry {
    /// Package name
    pub name: String,
    /// Declaration as currently written
    pub current: String,
    /// Proposed declaration
    pub upgraded: String,
    /// Latest published version
    pub latest: String,
    /// Installed version, if any
    pub installed: Option<String>,
}

impl fmt::Display for UpgradeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' can be updated from {} to {} (Installed: {}, Latest: {})",
            self.name,
            self.current,
            self.upgraded,
            self.installed.as_deref().unwrap_or("none"),
            self.latest
        )
    }
}

/// Outcome of one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeReport {
    /// Analyzed scope
    pub scope: Scope,
    /// Manifest that was analyzed (project scope only)
    pub manifest: Option<PathBuf>,
    /// Outdated dependencies, sorted by name
    pub entries: Vec<UpgradeEntry>,
    /// Whether the manifest was rewritten
    pub written: bool,
}

impl UpgradeReport {
    /// Build a report from the mappings produced by one run
    ///
    /// Every name in `upgraded` must have an entry in `current` and `latest`;
    /// names missing from either are left out.
    pub fn from_upgrades(
        scope: Scope,
        manifest: Option<PathBuf>,
        current: &Dependencies,
        upgraded: &Dependencies,
        latest: &Dependencies,
        installed: &Dependencies,
    ) -> Self {
        let entries = upgraded
            .iter()
            .filter_map(|(name, upgraded)| {
                Some(UpgradeEntry {
                    name: name.clone(),
                    current: current.get(name)?.clone(),
                    upgraded: upgraded.clone(),
                    latest: latest.get(name)?.clone(),
                    installed: installed.get(name).cloned(),
                })
            })
            .collect();

        Self {
            scope,
            manifest,
            entries,
            written: false,
        }
    }

    /// Returns true if nothing needs upgrading
    pub fn is_up_to_date(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of outdated dependencies
    pub fn upgrade_count(&self) -> usize {
        self.entries.len()
    }

    /// Mark the manifest as rewritten
    pub fn mark_written(&mut self) {
        self.written = true;
    }
}
