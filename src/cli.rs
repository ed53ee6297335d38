//! CLI argument parsing module for package-updater

use crate::domain::Scope;
use crate::error::ConfigError;
use crate::registry::{RegistryConfig, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT, NPM_REGISTRY_URL};
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use std::path::PathBuf;

/// Checks package.json for dependencies that are not satisfied by the latest
/// published versions, and optionally upgrades them while keeping the
/// existing versioning policy
#[derive(Parser, Debug, Clone)]
#[command(
    name = "package-updater",
    version,
    about = "Upgrade package.json dependencies while maintaining your versioning policy"
)]
pub struct CliArgs {
    /// package.json or the directory containing it (default: current directory)
    pub path: Option<PathBuf>,

    /// Check global packages instead of the current project
    #[arg(short, long)]
    pub global: bool,

    /// Don't output anything
    #[arg(short, long)]
    pub silent: bool,

    /// Upgrade package.json dependencies to match latest versions (maintaining existing policy)
    #[arg(short, long)]
    pub upgrade: bool,

    /// Output the report in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose diagnostic logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Registry to query for latest versions
    #[arg(long, env = "NPM_CONFIG_REGISTRY", default_value = NPM_REGISTRY_URL)]
    pub registry: String,

    /// Maximum number of registry requests in flight
    #[arg(
        long,
        default_value_t = DEFAULT_CONCURRENCY,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub concurrency: usize,
}

impl CliArgs {
    /// Reject option combinations that cannot be honored
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.global && self.upgrade {
            return Err(ConfigError::conflicting(
                "package-updater cannot update global packages. \
                 Run 'npm install -g [package]' to upgrade a global package.",
            ));
        }
        Ok(())
    }

    /// The analyzed scope
    pub fn scope(&self) -> Scope {
        Scope::from_global_flag(self.global)
    }

    /// Registry session settings
    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            url: self.registry.clone(),
            timeout: DEFAULT_TIMEOUT,
            concurrency: self.concurrency,
        }
    }

    /// Whether progress display should be shown
    pub fn show_progress(&self) -> bool {
        !self.silent && !self.json
    }
}
