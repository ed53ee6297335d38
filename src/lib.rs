//! package-updater - npm dependency upgrade library
//!
//! This library provides the core functionality for keeping package.json
//! declarations current while preserving their versioning policy:
//! - Version declaration classification and upgrade (`update`)
//! - Surgical package.json rewriting (`manifest`)
//! - Latest-version lookup against an npm registry (`registry`)
//! - Installed package listing through npm (`package_manager`)

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod package_manager;
pub mod progress;
pub mod registry;
pub mod update;
