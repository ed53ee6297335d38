//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionError: Issues inside the declaration upgrade engine
//! - ManifestError: Issues locating, parsing or writing package.json
//! - RegistryError: Issues with package registry communication
//! - InstalledError: Issues listing installed packages
//! - ConfigError: Issues with CLI configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version declaration related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Package registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Installed package listing errors
    #[error(transparent)]
    Installed(#[from] InstalledError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by the declaration upgrade engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// A declaration component is neither numeric nor a wildcard
    #[error("malformed version declaration '{declaration}': component '{component}' is not a number")]
    MalformedDeclaration {
        declaration: String,
        component: String,
    },

    /// A single version component is neither numeric nor a wildcard
    #[error("version component '{digit}' is not a number")]
    MalformedDigit { digit: String },

    /// No latest version is known for a dependency being upgraded
    #[error("no latest version known for '{package}'")]
    MissingLatestVersion { package: String },

    /// An upgraded dependency has no matching current declaration
    #[error("no current declaration known for '{package}'")]
    MissingCurrentDeclaration { package: String },

    /// The current declaration does not appear verbatim in the package data
    #[error("declaration \"{package}\": \"{declaration}\" not found in package data")]
    UnmatchedDeclaration {
        package: String,
        declaration: String,
    },
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("package.json not found: {path}")]
    NotFound { path: PathBuf },

    /// Path given on the command line is neither a file nor a directory
    #[error("{path} is not a valid file or directory")]
    InvalidPath { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in registry
    #[error("package '{package}' not found in {registry} registry")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },

    /// HTTP client could not be built
    #[error("failed to create HTTP client: {message}")]
    ClientError { message: String },
}

/// Errors related to listing installed packages
#[derive(Error, Debug)]
pub enum InstalledError {
    /// The package manager could not be run
    #[error("failed to run '{command}': {source}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The package manager produced output that could not be understood
    #[error("unable to read package list from '{command}': {message}")]
    InvalidOutput { command: String, message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

impl VersionError {
    /// Creates a new MalformedDeclaration error
    pub fn malformed(declaration: impl Into<String>, component: impl Into<String>) -> Self {
        VersionError::MalformedDeclaration {
            declaration: declaration.into(),
            component: component.into(),
        }
    }

    /// Creates a new MalformedDigit error
    pub fn malformed_digit(digit: impl Into<String>) -> Self {
        VersionError::MalformedDigit {
            digit: digit.into(),
        }
    }

    /// Creates a new MissingLatestVersion error
    pub fn missing_latest(package: impl Into<String>) -> Self {
        VersionError::MissingLatestVersion {
            package: package.into(),
        }
    }
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new ConflictingOptions error
    pub fn conflicting(message: impl Into<String>) -> Self {
        ConfigError::ConflictingOptions {
            message: message.into(),
        }
    }
}
