//! Registry access for latest published versions
//!
//! This module provides:
//! - HTTP client shared foundation
//! - npm Registry adapter
//! - RegistrySession: the initialized handle every query goes through
//! - Concurrent batch lookup with an all-or-nothing result

mod client;
mod npm;

pub use client::{HttpClient, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use npm::{NpmAdapter, NPM_REGISTRY_URL};

use crate::domain::Dependencies;
use crate::error::RegistryError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Default concurrency limit for registry requests
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Trait for registry adapters
#[async_trait]
pub trait RegistryAdapter: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the latest published version of a package
    async fn latest_version(&self, package: &str) -> Result<String, RegistryError>;
}

/// Settings used to open a registry session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Registry base URL
    pub url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum number of requests in flight
    pub concurrency: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: NPM_REGISTRY_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// An initialized registry connection
///
/// Queries are only possible through a session, so no lookup can run
/// before the client is ready.
#[derive(Clone)]
pub struct RegistrySession {
    adapter: Arc<dyn RegistryAdapter>,
    concurrency: usize,
}

impl RegistrySession {
    /// Initialize a session against an npm registry
    pub fn init(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let client = HttpClient::with_config(config.timeout, DEFAULT_USER_AGENT)?;
        let adapter = NpmAdapter::with_registry(client, config.url.as_str());
        Ok(Self::with_adapter(Arc::new(adapter), config.concurrency))
    }

    /// Create a session over an existing adapter
    pub fn with_adapter(adapter: Arc<dyn RegistryAdapter>, concurrency: usize) -> Self {
        Self {
            adapter,
            concurrency: concurrency.max(1),
        }
    }

    /// Get the registry name
    pub fn registry_name(&self) -> &'static str {
        self.adapter.registry_name()
    }

    /// Fetch the latest published version of one package
    pub async fn latest_version(&self, package: &str) -> Result<String, RegistryError> {
        self.adapter.latest_version(package).await
    }

    /// Fetch the latest published versions of many packages
    ///
    /// Lookups run concurrently, bounded by the session's concurrency limit.
    /// The first failure aborts the outstanding lookups and is returned;
    /// on success every requested package has an entry. `on_fetched` is
    /// called once per completed lookup.
    pub async fn latest_versions<I>(
        &self,
        packages: I,
        mut on_fetched: impl FnMut(&str),
    ) -> Result<Dependencies, RegistryError>
    where
        I: IntoIterator<Item = String>,
    {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        for package in packages {
            let adapter = Arc::clone(&self.adapter);
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.map_err(|e| {
                    RegistryError::network_error(&package, adapter.registry_name(), e.to_string())
                })?;
                let version = adapter.latest_version(&package).await?;
                Ok::<_, RegistryError>((package, version))
            });
        }

        let mut latest_versions = Dependencies::new();
        while let Some(joined) = tasks.join_next().await {
            let lookup = joined.map_err(|e| {
                RegistryError::network_error("", self.registry_name(), e.to_string())
            });

            match lookup.and_then(|result| result) {
                Ok((package, version)) => {
                    on_fetched(&package);
                    latest_versions.insert(package, version);
                }
                Err(e) => {
                    tasks.abort_all();
                    return Err(e);
                }
            }
        }

        Ok(latest_versions)
    }
}
