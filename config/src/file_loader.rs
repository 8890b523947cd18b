//! # Configuration File Loading
//!
//! Loads the configuration record from JSON, TOML, or YAML files.
//!
//! Supports automatic format detection based on file extension, plus
//! discovery of the default config file names in a project directory.

use crate::config::AppConfig;
use errors::MalformedConfigError;
use std::path::{Path, PathBuf};

/// File names probed, in order, when no explicit path is given.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &[
    "hullpack.config.json",
    "hullpack.config.toml",
    "hullpack.config.yaml",
];

/// Load configuration from a JSON file.
pub fn load_from_json(path: &Path) -> Result<AppConfig, MalformedConfigError> {
    let contents = read_source(path)?;
    let config: AppConfig =
        serde_json::from_str(&contents).map_err(|e| MalformedConfigError::Parse {
            format: "JSON".to_string(),
            reason: e.to_string(),
        })?;
    require_core_fields(&config)?;
    Ok(config)
}

/// Load configuration from a TOML file.
pub fn load_from_toml(path: &Path) -> Result<AppConfig, MalformedConfigError> {
    let contents = read_source(path)?;
    let config: AppConfig = toml::from_str(&contents).map_err(|e| MalformedConfigError::Parse {
        format: "TOML".to_string(),
        reason: e.to_string(),
    })?;
    require_core_fields(&config)?;
    Ok(config)
}

/// Load configuration from a YAML file.
pub fn load_from_yaml(path: &Path) -> Result<AppConfig, MalformedConfigError> {
    let contents = read_source(path)?;
    let config: AppConfig =
        serde_yaml::from_str(&contents).map_err(|e| MalformedConfigError::Parse {
            format: "YAML".to_string(),
            reason: e.to_string(),
        })?;
    require_core_fields(&config)?;
    Ok(config)
}

/// Load configuration from a file with format auto-detection.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Loads the configuration record, selecting the parser from the file
/// extension.
///
/// ## Supported Formats
/// - `.json`: JSON format
/// - `.toml`: TOML format
/// - `.yaml` / `.yml`: YAML format
///
/// ## Error Handling
/// Returns `MalformedConfigError` for:
/// - File not found
/// - Missing or unsupported file extension
/// - Parse errors for the detected format
/// - Missing or empty `appId`, `appName`, or `webDir`
pub fn load_from_file(path: &Path) -> Result<AppConfig, MalformedConfigError> {
    let extension =
        path.extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| MalformedConfigError::NoExtension {
                path: path.display().to_string(),
            })?;

    match extension.to_lowercase().as_str() {
        "json" => load_from_json(path),
        "toml" => load_from_toml(path),
        "yaml" | "yml" => load_from_yaml(path),
        other => Err(MalformedConfigError::UnsupportedFormat {
            format: other.to_string(),
        }),
    }
}

/// Locate the config file in a project directory.
///
/// Probes [`DEFAULT_CONFIG_NAMES`] in order and returns the first match.
pub fn find_config(dir: &Path) -> Result<PathBuf, MalformedConfigError> {
    for name in DEFAULT_CONFIG_NAMES {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(MalformedConfigError::NotDiscovered {
        dir: dir.display().to_string(),
        tried: DEFAULT_CONFIG_NAMES
            .iter()
            .map(|n| (*n).to_string())
            .collect(),
    })
}

fn read_source(path: &Path) -> Result<String, MalformedConfigError> {
    if !path.is_file() {
        return Err(MalformedConfigError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Check the three required fields of the packaging contract.
///
/// A required field that is absent from the source parses as an empty
/// string; absent and empty are the same defect and both name the field.
pub(crate) fn require_core_fields(config: &AppConfig) -> Result<(), MalformedConfigError> {
    for (field, value) in [
        ("appId", &config.app_id),
        ("appName", &config.app_name),
        ("webDir", &config.web_dir),
    ] {
        if value.is_empty() {
            return Err(MalformedConfigError::MissingField {
                field: field.to_string(),
            });
        }
    }
    Ok(())
}
