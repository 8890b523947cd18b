//! # Configuration Lifecycle
//!
//! The configuration record has exactly two states, unvalidated and
//! validated, with a single one-way transition between them. This module
//! expresses that transition in the type system: [`ConfigModel`] is the
//! unvalidated record and the only way to obtain a [`ValidatedConfig`]
//! is to consume the model through [`ConfigModel::validate`].

use crate::config::{AppConfig, PackagingMode};
use crate::file_loader;
use crate::validator;
use errors::{MalformedConfigError, ValidationError};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// An unvalidated configuration record.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigModel {
    config: AppConfig,
    source: Option<PathBuf>,
}

impl ConfigModel {
    /// Load the record from a config file (format by extension).
    pub fn load(path: &Path) -> Result<Self, MalformedConfigError> {
        let config = file_loader::load_from_file(path)?;
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// Locate and load the record from a project directory.
    pub fn discover(dir: &Path) -> Result<Self, MalformedConfigError> {
        let path = file_loader::find_config(dir)?;
        Self::load(&path)
    }

    /// Wrap an in-memory record.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// Path the record was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Mutable access to the record, for pre-validation overlays.
    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    /// Validate for development packaging, consuming the model.
    pub fn validate(self) -> Result<ValidatedConfig, ValidationError> {
        self.validate_for(PackagingMode::Debug)
    }

    /// Validate for the given packaging mode, consuming the model.
    pub fn validate_for(self, mode: PackagingMode) -> Result<ValidatedConfig, ValidationError> {
        validator::validate_for(&self.config, mode)?;
        Ok(ValidatedConfig {
            config: self.config,
        })
    }
}

/// A validated, immutable configuration record.
///
/// Reading it has no side effects; there is no way back to the
/// unvalidated state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidatedConfig {
    config: AppConfig,
}

impl ValidatedConfig {
    /// The validated record.
    #[must_use]
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Unwrap the record, handing ownership to the packaging process.
    #[must_use]
    pub fn into_inner(self) -> AppConfig {
        self.config
    }
}
