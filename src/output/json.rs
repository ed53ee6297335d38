//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of an upgrade report
//! - A generation timestamp for each document

use crate::domain::{Scope, UpgradeEntry, UpgradeReport};
use crate::output::OutputFormatter;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter {
    /// Fixed timestamp; the current time is used when unset
    generated_at: Option<DateTime<Utc>>,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON formatter that stamps documents with a fixed time
    pub fn with_timestamp(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: Some(generated_at),
        }
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Analyzed scope
    scope: Scope,
    /// Manifest path (project scope only)
    manifest: Option<String>,
    /// Whether the manifest was rewritten
    upgraded: bool,
    /// Outdated dependencies
    dependencies: &'a [UpgradeEntry],
    /// When this document was produced
    generated_at: DateTime<Utc>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &UpgradeReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            scope: report.scope,
            manifest: report
                .manifest
                .as_ref()
                .map(|path| path.display().to_string()),
            upgraded: report.written,
            dependencies: &report.entries,
            generated_at: self.generated_at.unwrap_or_else(Utc::now),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
