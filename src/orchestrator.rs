//! Upgrade orchestrator for coordinating one analysis run
//!
//! This module provides:
//! - Workflow coordination: locate → read → list → fetch → upgrade → write
//! - Project and global scopes
//! - Read-only and write modes
//! - Fail-fast error handling: the first failure ends the run

use crate::cli::CliArgs;
use crate::domain::{Dependencies, Scope, UpgradeReport};
use crate::error::AppError;
use crate::manifest::{locate_manifest, read_current_dependencies, upgrade_manifest};
use crate::package_manager::{installed_packages, InstalledPackages, PackageLister, SystemNpm};
use crate::progress::Progress;
use crate::registry::RegistrySession;
use crate::update::{remove_packages_without_valid_versions, upgrade_dependencies};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Orchestrator for coordinating the upgrade workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
    /// Initialized registry session
    session: RegistrySession,
    /// Installed package source
    lister: Box<dyn PackageLister + Send + Sync>,
}

/// Dependencies gathered before the registry is queried
struct Collected {
    manifest: Option<PathBuf>,
    current: Dependencies,
    installed: InstalledPackages,
}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    ///
    /// Option conflicts are rejected here, before any file or network access.
    pub fn new(args: CliArgs) -> Result<Self, AppError> {
        args.validate()?;
        let session = RegistrySession::init(&args.registry_config())?;
        Ok(Self::with_collaborators(
            args,
            session,
            Box::new(SystemNpm::new()),
        ))
    }

    /// Create an orchestrator over explicit collaborators (for testing)
    pub fn with_collaborators(
        args: CliArgs,
        session: RegistrySession,
        lister: Box<dyn PackageLister + Send + Sync>,
    ) -> Self {
        Self {
            args,
            session,
            lister,
        }
    }

    /// Run the upgrade workflow
    pub async fn run(&self) -> Result<UpgradeReport, AppError> {
        self.run_with_progress(self.args.show_progress()).await
    }

    /// Run the upgrade workflow with optional progress display
    pub async fn run_with_progress(&self, show_progress: bool) -> Result<UpgradeReport, AppError> {
        self.args.validate()?;
        let scope = self.args.scope();
        let mut progress = Progress::new(show_progress);

        // Step 1: Gather current declarations and installed versions
        progress.reading("Reading dependencies...");
        let collected = match scope {
            Scope::Project => self.collect_project(),
            Scope::Global => self.collect_global(),
        };
        progress.clear();
        let Collected {
            manifest,
            current,
            installed,
        } = collected?;
        debug!(%scope, dependencies = current.len(), "Collected current dependencies");

        // Step 2: Fetch the latest version of every dependency
        let latest = if current.is_empty() {
            Dependencies::new()
        } else {
            progress.lookups(current.len());
            let fetched = self
                .session
                .latest_versions(current.keys().cloned(), |name| progress.package_fetched(name))
                .await;
            progress.clear();
            fetched?
        };
        debug!(
            registry = self.session.registry_name(),
            packages = latest.len(),
            "Fetched latest versions"
        );

        // Step 3: Upgrade unsatisfied declarations
        let upgraded = upgrade_dependencies(&current, &latest)?;
        debug!(upgrades = upgraded.len(), "Computed upgraded declarations");

        let mut report = UpgradeReport::from_upgrades(
            scope,
            manifest,
            &current,
            &upgraded,
            &latest,
            installed.as_dependencies(),
        );

        // Step 4: Write the manifest in upgrade mode
        if self.args.upgrade && !upgraded.is_empty() {
            if let Some(path) = report.manifest.clone() {
                let result = upgrade_manifest(&path, &current, &upgraded)?;
                debug!(
                    path = %result.path.display(),
                    modified = result.file_modified,
                    "Wrote upgraded manifest"
                );
                if result.file_modified {
                    report.mark_written();
                }
            }
        }

        Ok(report)
    }

    /// Read the project manifest and the packages installed next to it
    fn collect_project(&self) -> Result<Collected, AppError> {
        let manifest = locate_manifest(self.args.path.as_deref())?;
        debug!(path = %manifest.display(), "Located manifest");

        let declared = read_current_dependencies(&manifest)?;
        let current = remove_packages_without_valid_versions(&declared);
        if current.len() < declared.len() {
            debug!(
                skipped = declared.len() - current.len(),
                "Ignoring declarations that are not versions"
            );
        }

        let working_dir = manifest_dir(&manifest);
        let installed = match installed_packages(self.lister.as_ref(), Scope::Project, working_dir)
        {
            Ok(installed) => installed,
            Err(e) => {
                warn!(error = %e, "Could not list installed packages");
                InstalledPackages::empty()
            }
        };

        Ok(Collected {
            manifest: Some(manifest),
            current,
            installed,
        })
    }

    /// Use the globally installed packages as the current declarations
    fn collect_global(&self) -> Result<Collected, AppError> {
        let installed = installed_packages(self.lister.as_ref(), Scope::Global, Path::new("."))?;
        let current = remove_packages_without_valid_versions(installed.as_dependencies());

        Ok(Collected {
            manifest: None,
            current,
            installed,
        })
    }
}

/// Directory holding the manifest, for running the package manager
fn manifest_dir(manifest: &Path) -> &Path {
    match manifest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
