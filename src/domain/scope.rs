//! Analysis scope

use serde::{Deserialize, Serialize};
use std::fmt;

/// What set of dependencies is analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Dependencies declared in a project's package.json
    Project,
    /// Packages installed globally
    Global,
}

impl Scope {
    /// Select the scope from the `--global` flag
    pub fn from_global_flag(global: bool) -> Self {
        if global {
            Scope::Global
        } else {
            Scope::Project
        }
    }

    /// Returns true for the global scope
    pub fn is_global(&self) -> bool {
        matches!(self, Scope::Global)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Project => write!(f, "project"),
            Scope::Global => write!(f, "global"),
        }
    }
}
