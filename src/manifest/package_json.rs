//! package.json reading for Node.js projects
//!
//! Handles:
//! - dependencies
//! - devDependencies
//!
//! Both sections are merged into one working set; a direct dependency wins
//! over a development dependency of the same name.

use crate::domain::Dependencies;
use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::path::Path;

/// Sections merged into the working dependency set, lowest precedence first
const DEPENDENCY_SECTIONS: [&str; 2] = ["devDependencies", "dependencies"];

/// Get the current dependencies declared in package.json content
///
/// Only string-valued entries are taken; missing sections are empty.
pub fn current_dependencies(content: &str, path: &Path) -> Result<Dependencies, ManifestError> {
    let json: Value = serde_json::from_str(content)
        .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

    let root = json
        .as_object()
        .ok_or_else(|| ManifestError::json_parse_error(path, "top-level value is not an object"))?;

    let mut dependencies = Dependencies::new();
    for section in DEPENDENCY_SECTIONS {
        if let Some(deps) = root.get(section).and_then(|v| v.as_object()) {
            merge_dependency_object(deps, &mut dependencies);
        }
    }

    Ok(dependencies)
}

fn merge_dependency_object(deps: &Map<String, Value>, output: &mut Dependencies) {
    for (name, version_value) in deps {
        if let Some(version_str) = version_value.as_str() {
            output.insert(name.clone(), version_str.to_string());
        }
    }
}
