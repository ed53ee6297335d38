//! End-to-end tests for the package-updater CLI
//!
//! These tests verify:
//! - Conflicting options are rejected before any I/O
//! - Manifest location errors and exit codes
//! - Report output for projects that need no registry lookup
//! - Registry failures leave package.json untouched

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Registry address nothing listens on
const UNREACHABLE_REGISTRY: &str = "http://127.0.0.1:1";

/// Build a command for the compiled binary, isolated from the user's registry
fn package_updater() -> Command {
    let mut cmd = Command::cargo_bin("package-updater").expect("binary should be built");
    cmd.env("NPM_CONFIG_REGISTRY", UNREACHABLE_REGISTRY)
        .env_remove("RUST_LOG");
    cmd
}

/// Create a project whose dependencies are all non-registry references
fn create_local_only_project() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let package_json = r#"{
  "name": "local-only",
  "version": "1.0.0",
  "dependencies": {
    "shared": "file:../shared",
    "forked": "git+https://example.com/forked.git"
  }
}
"#;
    fs::write(temp_dir.path().join("package.json"), package_json).unwrap();
    temp_dir
}

mod options {
    use super::*;

    #[test]
    fn test_help() {
        package_updater()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--upgrade"))
            .stdout(predicate::str::contains("--global"))
            .stdout(predicate::str::contains("--silent"));
    }

    #[test]
    fn test_version() {
        package_updater()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("package-updater"));
    }

    #[test]
    fn test_global_and_upgrade_conflict() {
        package_updater()
            .args(["-g", "-u"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::starts_with("Error: "))
            .stderr(predicate::str::contains("cannot update global packages"));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        package_updater()
            .args(["--concurrency", "0"])
            .assert()
            .failure();
    }
}

mod manifest_errors {
    use super::*;

    #[test]
    fn test_directory_without_manifest() {
        let temp_dir = tempfile::tempdir().unwrap();

        package_updater()
            .arg(temp_dir.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("package.json not found"));
    }

    #[test]
    fn test_nonexistent_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("nowhere");

        package_updater()
            .arg(&missing)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("is not a valid file or directory"));
    }

    #[test]
    fn test_invalid_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("package.json"), "{ not json").unwrap();

        package_updater()
            .arg(temp_dir.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("failed to parse JSON"));
    }
}

mod reports {
    use super::*;

    #[test]
    fn test_nothing_to_check() {
        let project = create_local_only_project();

        package_updater()
            .arg(project.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "All dependencies match the latest package versions :)",
            ));
    }

    #[test]
    fn test_manifest_file_argument() {
        let project = create_local_only_project();

        package_updater()
            .arg(project.path().join("package.json"))
            .assert()
            .success();
    }

    #[test]
    fn test_json_report() {
        let project = create_local_only_project();

        let output = package_updater()
            .arg("--json")
            .arg(project.path())
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["scope"], "project");
        assert_eq!(json["upgraded"], false);
        assert_eq!(json["dependencies"].as_array().unwrap().len(), 0);
        assert!(json["manifest"]
            .as_str()
            .unwrap()
            .ends_with("package.json"));
    }

    #[test]
    fn test_silent_prints_nothing() {
        let project = create_local_only_project();

        package_updater()
            .arg("-s")
            .arg(project.path())
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
}

mod registry_failures {
    use super::*;

    #[test]
    fn test_unreachable_registry_leaves_manifest_unchanged() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manifest = r#"{
  "dependencies": {
    "lodash": "^4.0.0"
  }
}
"#;
        let path = temp_dir.path().join("package.json");
        fs::write(&path, manifest).unwrap();

        package_updater()
            .arg("-u")
            .arg(temp_dir.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error: "));

        assert_eq!(fs::read_to_string(&path).unwrap(), manifest);
    }
}
