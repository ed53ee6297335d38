//! Progress display while dependencies are checked
//!
//! Two phases are shown on stderr: a spinner while the current declarations
//! are read, then a bar advanced once per registry lookup. Silent and JSON
//! runs draw nothing.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const READING_TEMPLATE: &str = "{spinner:.cyan} {msg}";
const LOOKUP_TEMPLATE: &str =
    "{spinner:.cyan} Checking latest versions [{bar:30.cyan/blue}] {pos}/{len} {msg}";
const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Progress of one analysis run
pub struct Progress {
    enabled: bool,
    current: Option<ProgressBar>,
}

impl Progress {
    /// Create a progress display; nothing is drawn when `enabled` is false
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            current: None,
        }
    }

    /// Create a progress display that never draws
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Returns true if anything will be drawn
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Show that dependency declarations are being read
    pub fn reading(&mut self, what: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style(READING_TEMPLATE));
        spinner.set_message(what.to_string());
        self.show(spinner, 80);
    }

    /// Start counting registry lookups
    pub fn lookups(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(style(LOOKUP_TEMPLATE).progress_chars("█▓▒░"));
        self.show(bar, 100);
    }

    /// Record a finished lookup; matches the registry's `on_fetched` callback
    pub fn package_fetched(&self, package: &str) {
        if let Some(bar) = &self.current {
            bar.set_message(package.to_string());
            bar.inc(1);
        }
    }

    /// Number of lookups recorded in the current phase
    pub fn fetched(&self) -> u64 {
        self.current.as_ref().map_or(0, ProgressBar::position)
    }

    /// Remove whatever is currently drawn
    pub fn clear(&mut self) {
        if let Some(bar) = self.current.take() {
            bar.finish_and_clear();
        }
    }

    fn show(&mut self, bar: ProgressBar, tick_ms: u64) {
        self.clear();
        if self.enabled {
            bar.enable_steady_tick(Duration::from_millis(tick_ms));
            self.current = Some(bar);
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Style with the shared tick characters; falls back to the plain default
fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_chars(TICK_CHARS)
}
