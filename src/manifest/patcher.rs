//! Targeted rewriting of dependency declarations inside package.json text
//!
//! The document is never re-serialized: only the matched
//! `"name": "old-declaration"` pairs change, so formatting, key order and
//! whitespace elsewhere stay byte-for-byte identical.

use crate::domain::Dependencies;
use crate::error::VersionError;
use regex::{Captures, Regex};

/// Build the matcher for one `"name": "old"` pair
///
/// Both the name and the old declaration are matched literally and as whole
/// quoted strings, so `"grunt"` never matches inside `"grunt-contrib-clean"`.
fn dependency_pattern(name: &str, old_declaration: &str) -> Regex {
    let pattern = format!(
        r#"("{}"\s*:\s*)"{}""#,
        regex::escape(name),
        regex::escape(old_declaration)
    );
    // Both parts are escaped, so the pattern is always valid
    Regex::new(&pattern).unwrap()
}

/// Upgrade the dependency declarations in the package data
///
/// For every dependency in `new_dependencies`, all occurrences of its name
/// paired with its declaration from `old_dependencies` are replaced with the
/// new declaration. The separator between name and value is kept as written.
///
/// Every upgraded dependency must match at least once; a pair that is not
/// found verbatim (e.g. an escaped `"\u007e1.3.7"`) fails the whole patch.
pub fn update_package_data(
    data: &str,
    old_dependencies: &Dependencies,
    new_dependencies: &Dependencies,
) -> Result<String, VersionError> {
    let mut data = data.to_string();

    for (dependency, new_declaration) in new_dependencies {
        let old_declaration =
            old_dependencies
                .get(dependency)
                .ok_or_else(|| VersionError::MissingCurrentDeclaration {
                    package: dependency.clone(),
                })?;

        let re = dependency_pattern(dependency, old_declaration);
        if !re.is_match(&data) {
            return Err(VersionError::UnmatchedDeclaration {
                package: dependency.clone(),
                declaration: old_declaration.clone(),
            });
        }
        data = re
            .replace_all(&data, |caps: &Captures| {
                format!(r#"{}"{}""#, &caps[1], new_declaration)
            })
            .into_owned();
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(entries: &[(&str, &str)]) -> Dependencies {
        entries
            .iter()
            .map(|(name, version)| (name.to_string(), version.to_string()))
            .collect()
    }

    #[test]
    fn test_prefix_named_packages_do_not_collide() {
        let data = r#"{"dependencies": {"csso": "~1.3.7","grunt-lib-contrib": "~0.6.1"},"devDependencies": {"grunt-contrib-clean": "~0.4.0","grunt-contrib-nodeunit": "~0.1.2","grunt": "~0.4.1"}}"#;
        let old = deps(&[
            ("csso", "~1.3.7"),
            ("grunt-lib-contrib", "~0.6.1"),
            ("grunt-contrib-clean", "~0.4.0"),
            ("grunt-contrib-nodeunit", "~0.1.2"),
            ("grunt", "~0.4.1"),
        ]);
        let new = deps(&[
            ("csso", "~1.3.11"),
            ("grunt-lib-contrib", "~0.7.1"),
            ("grunt-contrib-clean", "~0.6.0"),
            ("grunt-contrib-nodeunit", "~0.4.1"),
            ("grunt", "~0.4.5"),
        ]);

        let result = update_package_data(data, &old, &new).unwrap();
        assert_eq!(
            result,
            r#"{"dependencies": {"csso": "~1.3.11","grunt-lib-contrib": "~0.7.1"},"devDependencies": {"grunt-contrib-clean": "~0.6.0","grunt-contrib-nodeunit": "~0.4.1","grunt": "~0.4.5"}}"#
        );
    }

    #[test]
    fn test_only_targeted_dependency_changes() {
        let data = r#"{
  "devDependencies": {
    "grunt": "~0.4.1",
    "grunt-contrib-nodeunit": "~0.4.1"
  }
}"#;
        let old = deps(&[("grunt", "~0.4.1"), ("grunt-contrib-nodeunit", "~0.4.1")]);
        let new = deps(&[("grunt", "~0.4.5")]);

        let result = update_package_data(data, &old, &new).unwrap();
        assert_eq!(result, data.replacen("\"grunt\": \"~0.4.1\"", "\"grunt\": \"~0.4.5\"", 1));
        assert!(result.contains(r#""grunt-contrib-nodeunit": "~0.4.1""#));
    }

    #[test]
    fn test_old_declaration_matched_literally() {
        // `.` would match any character if the declaration were a pattern
        let data = r#"{"dependencies": {"a": "^1x2x3"}}"#;
        let old = deps(&[("a", "^1.2.3")]);
        let new = deps(&[("a", "^2.0.0")]);

        let err = update_package_data(data, &old, &new).unwrap_err();
        assert!(matches!(err, VersionError::UnmatchedDeclaration { .. }));
    }

    #[test]
    fn test_requires_matching_old_declaration() {
        let data = r#"{"dependencies": {"lodash": "^4.17.20"}}"#;
        let old = deps(&[("lodash", "^4.17.21")]);
        let new = deps(&[("lodash", "^4.18.0")]);

        let err = update_package_data(data, &old, &new).unwrap_err();
        assert_eq!(
            err,
            VersionError::UnmatchedDeclaration {
                package: "lodash".to_string(),
                declaration: "^4.17.21".to_string(),
            }
        );
    }

    #[test]
    fn test_escaped_declaration_is_error() {
        // serde reads this as `~1.3.7`, but the raw text differs
        let data = r#"{"dependencies": {"csso": "\u007e1.3.7"}}"#;
        let old = deps(&[("csso", "~1.3.7")]);
        let new = deps(&[("csso", "~1.3.11")]);

        let err = update_package_data(data, &old, &new).unwrap_err();
        assert!(matches!(
            err,
            VersionError::UnmatchedDeclaration { ref package, .. } if package == "csso"
        ));
    }

    #[test]
    fn test_partial_match_fails_whole_patch() {
        let data = r#"{"dependencies": {"csso": "~1.3.7", "grunt": "\u007e0.4.1"}}"#;
        let old = deps(&[("csso", "~1.3.7"), ("grunt", "~0.4.1")]);
        let new = deps(&[("csso", "~1.3.11"), ("grunt", "~0.4.5")]);

        assert!(update_package_data(data, &old, &new).is_err());
    }

    #[test]
    fn test_preserves_separator_whitespace() {
        let data = "{\"dependencies\": { \"lodash\"  :\t\"^4.17.21\" }}";
        let old = deps(&[("lodash", "^4.17.21")]);
        let new = deps(&[("lodash", "^4.18.0")]);

        let result = update_package_data(data, &old, &new).unwrap();
        assert_eq!(result, "{\"dependencies\": { \"lodash\"  :\t\"^4.18.0\" }}");
    }

    #[test]
    fn test_replaces_every_occurrence_of_pair() {
        let data = r#"{"dependencies": {"react": "^17.0.0"}, "peerDependencies": {"react": "^17.0.0"}}"#;
        let old = deps(&[("react", "^17.0.0")]);
        let new = deps(&[("react", "^18.2.0")]);

        let result = update_package_data(data, &old, &new).unwrap();
        assert_eq!(result.matches("^18.2.0").count(), 2);
        assert!(!result.contains("^17.0.0"));
    }

    #[test]
    fn test_scoped_package_name() {
        let data = r#"{"devDependencies": {"@types/node": "^20.0.0"}}"#;
        let old = deps(&[("@types/node", "^20.0.0")]);
        let new = deps(&[("@types/node", "^22.1.0")]);

        let result = update_package_data(data, &old, &new).unwrap();
        assert_eq!(result, r#"{"devDependencies": {"@types/node": "^22.1.0"}}"#);
    }

    #[test]
    fn test_replacement_text_taken_literally() {
        let data = r#"{"dependencies": {"odd": "1.0.0"}}"#;
        let old = deps(&[("odd", "1.0.0")]);
        let new = deps(&[("odd", "$1.1.0")]);

        let result = update_package_data(data, &old, &new).unwrap();
        assert_eq!(result, r#"{"dependencies": {"odd": "$1.1.0"}}"#);
    }

    #[test]
    fn test_missing_old_declaration_is_error() {
        let old = Dependencies::new();
        let new = deps(&[("lodash", "^4.18.0")]);

        let err = update_package_data("{}", &old, &new).unwrap_err();
        assert_eq!(
            err,
            VersionError::MissingCurrentDeclaration {
                package: "lodash".to_string()
            }
        );
    }
}
