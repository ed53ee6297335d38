//! Output formatting for upgrade reports
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing
//! - Silent output that writes nothing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::UpgradeReport;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
    /// No output at all
    Silent,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
    /// Whether the run was allowed to write the manifest
    pub upgrade: bool,
    /// Whether to use colors (when supported)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            upgrade: false,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    ///
    /// `silent` wins over `json`.
    pub fn from_cli(json: bool, silent: bool, upgrade: bool) -> Self {
        let format = if silent {
            OutputFormat::Silent
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Self {
            format,
            upgrade,
            color: true,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write an upgrade report
    fn format(&self, report: &UpgradeReport, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Formatter used with `--silent`
pub struct SilentFormatter;

impl OutputFormatter for SilentFormatter {
    fn format(&self, _report: &UpgradeReport, _writer: &mut dyn Write) -> std::io::Result<()> {
        Ok(())
    }
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(config.upgrade, config.color)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::Silent => Box::new(SilentFormatter),
    }
}
