//! # Hullpack Errors
//!
//! Error types for configuration loading and validation.
//!
//! Exactly two public kinds exist, mirroring the two failure phases of the
//! configuration lifecycle:
//!
//! - [`MalformedConfigError`]: the source record is structurally invalid
//!   (missing file, unparseable syntax, wrong primitive type, missing
//!   required field). Raised by `load()`.
//! - [`ValidationError`]: the record parsed but is semantically
//!   inconsistent (partial signing credentials, unknown URI scheme, bad
//!   color literal). Raised by `validate()`.
//!
//! Both are synchronous and non-retryable: the source record must be
//! corrected before packaging can proceed. Every variant names the
//! offending field path.

use thiserror::Error;

/// Structural errors raised while reading and parsing the configuration
/// source.
#[derive(Debug, Error)]
pub enum MalformedConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file has no extension: {path}")]
    NoExtension { path: String },

    #[error("Unsupported config file format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Failed to parse {format} config: {reason}")]
    Parse { format: String, reason: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("No config file found in {dir} (tried {tried:?})")]
    NotDiscovered { dir: String, tried: Vec<String> },
}

/// Semantic errors raised while checking a parsed record against the
/// cross-field invariants of the packaging contract.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("appId: {app_id:?} does not match reverse-DNS package naming")]
    InvalidAppId { app_id: String },

    #[error("server.androidScheme: {scheme:?} is not an accepted scheme")]
    UnsupportedAndroidScheme { scheme: String },

    #[error("{field}: {value:?} is not a valid hex color")]
    InvalidHexColor { field: String, value: String },

    #[error("ios.contentInset: {value:?} is not an accepted content inset")]
    UnsupportedContentInset { value: String },

    #[error("ios.preferredContentMode: {value:?} is not an accepted content mode")]
    UnsupportedContentMode { value: String },

    #[error("android.buildOptions.releaseType: {value:?} is not an accepted release artifact type")]
    UnsupportedReleaseType { value: String },

    #[error(
        "android.buildOptions: release signing must be fully present or fully absent (missing: {missing:?})"
    )]
    PartialSigningConfig { missing: Vec<String> },

    #[error("{field}: development server settings are not allowed in release packaging")]
    DevServerInRelease { field: String },

    #[error("{field}: {invariant}")]
    Invariant { field: String, invariant: String },
}

impl ValidationError {
    /// Dotted path of the field that violated its invariant.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidAppId { .. } => "appId",
            Self::UnsupportedAndroidScheme { .. } => "server.androidScheme",
            Self::InvalidHexColor { field, .. } => field,
            Self::UnsupportedContentInset { .. } => "ios.contentInset",
            Self::UnsupportedContentMode { .. } => "ios.preferredContentMode",
            Self::UnsupportedReleaseType { .. } => "android.buildOptions.releaseType",
            Self::PartialSigningConfig { .. } => "android.buildOptions",
            Self::DevServerInRelease { field } => field,
            Self::Invariant { field, .. } => field,
        }
    }
}
