//! Installed package listing through the npm CLI
//!
//! This module provides:
//! - A runner abstraction over `npm ls --json --depth=0`
//! - Parsing of the listing into name → installed version

use crate::domain::{Dependencies, Scope};
use crate::error::InstalledError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Raw output of a package listing command
#[derive(Debug, Clone, Default)]
pub struct ListOutput {
    /// The command that was executed
    pub command: String,
    /// Standard output from the command
    pub stdout: String,
    /// Standard error from the command
    pub stderr: String,
}

/// Trait for running the package listing command
pub trait PackageLister {
    /// List the packages installed for a scope, from the specified directory
    fn list(&self, scope: Scope, working_dir: &Path) -> Result<ListOutput, InstalledError>;
}

/// Default lister that executes the real npm CLI
#[derive(Debug, Default)]
pub struct SystemNpm;

impl SystemNpm {
    /// Create a new system npm lister
    pub fn new() -> Self {
        Self
    }

    /// Get the list command for a scope
    fn list_command(&self, scope: Scope) -> Vec<&'static str> {
        let mut command = vec!["npm", "ls", "--json", "--depth=0"];
        if scope.is_global() {
            command.push("--global");
        }
        command
    }
}

impl PackageLister for SystemNpm {
    fn list(&self, scope: Scope, working_dir: &Path) -> Result<ListOutput, InstalledError> {
        let command_parts = self.list_command(scope);
        let command_str = command_parts.join(" ");
        debug!(command = %command_str, dir = %working_dir.display(), "Listing installed packages");

        // npm ls exits non-zero for missing or extraneous packages but still
        // prints the listing, so the exit status is not checked here
        let output = Command::new(command_parts[0])
            .args(&command_parts[1..])
            .current_dir(working_dir)
            .output()
            .map_err(|e| InstalledError::CommandFailed {
                command: command_str.clone(),
                source: e,
            })?;

        Ok(ListOutput {
            command: command_str,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// `npm ls --json` document
#[derive(Debug, Deserialize)]
struct NpmListing {
    #[serde(default)]
    dependencies: BTreeMap<String, NpmListedPackage>,
}

/// One entry of an `npm ls --json` document
#[derive(Debug, Deserialize)]
struct NpmListedPackage {
    /// Absent for packages that are declared but missing
    version: Option<String>,
}

/// Installed packages and their versions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledPackages {
    packages: Dependencies,
}

impl InstalledPackages {
    /// No packages installed
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the output of `npm ls --json`
    pub fn from_list_output(output: &ListOutput) -> Result<Self, InstalledError> {
        let listing: NpmListing =
            serde_json::from_str(&output.stdout).map_err(|e| InstalledError::InvalidOutput {
                command: output.command.clone(),
                message: if output.stderr.trim().is_empty() {
                    e.to_string()
                } else {
                    format!("{} ({})", e, output.stderr.trim())
                },
            })?;

        let packages = listing
            .dependencies
            .into_iter()
            .filter_map(|(name, package)| Some((name, package.version?)))
            .collect();

        Ok(Self { packages })
    }

    /// Get the installed version of a package
    pub fn installed_version(&self, name: &str) -> Option<&str> {
        self.packages.get(name).map(String::as_str)
    }

    /// Installed packages as a name → version mapping
    pub fn as_dependencies(&self) -> &Dependencies {
        &self.packages
    }

    /// Returns true if nothing is installed
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// List the installed packages for a scope
pub fn installed_packages(
    lister: &dyn PackageLister,
    scope: Scope,
    working_dir: &Path,
) -> Result<InstalledPackages, InstalledError> {
    let output = lister.list(scope, working_dir)?;
    InstalledPackages::from_list_output(&output)
}
