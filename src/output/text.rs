//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One line per outdated dependency
//! - Up-to-date messages per scope
//! - A closing hint or confirmation depending on the write mode

use crate::domain::{Scope, UpgradeEntry, UpgradeReport};
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether the run was allowed to write the manifest
    upgrade: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(upgrade: bool) -> Self {
        Self {
            upgrade,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(upgrade: bool, color: bool) -> Self {
        Self { upgrade, color }
    }

    /// Message printed when nothing is outdated
    fn up_to_date_message(scope: Scope) -> &'static str {
        match scope {
            Scope::Project => "All dependencies match the latest package versions :)",
            Scope::Global => "All global packages are up to date :)",
        }
    }

    /// Format a single upgrade line
    fn format_entry(&self, entry: &UpgradeEntry, writer: &mut dyn Write) -> std::io::Result<()> {
        if !self.color {
            return writeln!(writer, "{}", entry);
        }

        let installed = entry.installed.as_deref().unwrap_or("none");
        writeln!(
            writer,
            "{} can be updated from {} to {} (Installed: {}, Latest: {})",
            format!("'{}'", entry.name).bold(),
            entry.current.dimmed(),
            entry.upgraded.bright_white().bold(),
            installed,
            entry.latest.green()
        )
    }

    /// Format the closing line after the upgrade list
    fn format_footer(&self, report: &UpgradeReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let Some(manifest) = report.manifest.as_ref() else {
            return Ok(());
        };

        writeln!(writer)?;
        if report.written {
            let path_display = manifest.display().to_string();
            if self.color {
                writeln!(writer, "{} upgraded", path_display.bold())
            } else {
                writeln!(writer, "{} upgraded", path_display)
            }
        } else if self.upgrade {
            Ok(())
        } else if self.color {
            writeln!(
                writer,
                "Run '{}' to upgrade your package.json automatically",
                "package-updater -u".cyan()
            )
        } else {
            writeln!(
                writer,
                "Run 'package-updater -u' to upgrade your package.json automatically"
            )
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &UpgradeReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if report.is_up_to_date() {
            let message = Self::up_to_date_message(report.scope);
            return if self.color {
                writeln!(writer, "{}", message.green())
            } else {
                writeln!(writer, "{}", message)
            };
        }

        for entry in &report.entries {
            self.format_entry(entry, writer)?;
        }

        self.format_footer(report, writer)
    }
}
