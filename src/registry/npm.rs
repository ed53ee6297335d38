//! npm Registry adapter
//!
//! Fetches the `latest` dist-tag of a package from the npm registry.
//! API endpoint: {registry}/-/package/{package}/dist-tags

use crate::error::RegistryError;
use crate::registry::{HttpClient, RegistryAdapter};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// npm registry base URL
pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// npm Registry adapter
pub struct NpmAdapter {
    client: HttpClient,
    registry_url: String,
}

/// dist-tags response: tag name to version
type DistTags = HashMap<String, String>;

impl NpmAdapter {
    /// Create a new npm adapter for the public registry
    pub fn new(client: HttpClient) -> Self {
        Self::with_registry(client, NPM_REGISTRY_URL)
    }

    /// Create a new npm adapter for a custom registry
    pub fn with_registry(client: HttpClient, registry_url: impl Into<String>) -> Self {
        let registry_url = registry_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            registry_url,
        }
    }

    /// Build the dist-tags URL for a package
    ///
    /// The slash of a scoped name is encoded (`@types%2Fnode`).
    fn build_url(&self, package: &str) -> String {
        format!(
            "{}/-/package/{}/dist-tags",
            self.registry_url,
            package.replace('/', "%2F")
        )
    }

    /// Pick and validate the `latest` tag
    fn latest_from_tags(&self, package: &str, tags: &DistTags) -> Result<String, RegistryError> {
        let latest = tags.get("latest").ok_or_else(|| {
            RegistryError::invalid_response(package, self.registry_name(), "no 'latest' dist-tag")
        })?;

        semver::Version::parse(latest).map_err(|e| {
            RegistryError::invalid_response(
                package,
                self.registry_name(),
                format!("'{}' is not a version: {}", latest, e),
            )
        })?;

        Ok(latest.clone())
    }
}

#[async_trait]
impl RegistryAdapter for NpmAdapter {
    fn registry_name(&self) -> &'static str {
        "npm"
    }

    async fn latest_version(&self, package: &str) -> Result<String, RegistryError> {
        let url = self.build_url(package);
        debug!(%url, "Fetching dist-tags");
        let tags: DistTags = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;

        self.latest_from_tags(package, &tags)
    }
}
