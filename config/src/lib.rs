//! # Configuration System
//!
//! Configuration model for the hullpack native packaging tool.
//!
//! This crate provides:
//! - Typed configuration structures for the packaging contract
//! - Configuration file loading (JSON/TOML/YAML)
//! - Environment variable overrides for the development server
//! - Configuration validation (field invariants and cross-field rules)
//! - The one-way unvalidated → validated lifecycle
//!
//! # Best Practices
//!
//! - Uses `validator` crate for field-level validation
//! - Preserves plugin options verbatim in insertion order
//! - Provides clear error messages naming the offending field path
//! - The validated record is immutable and side-effect free to read

pub mod config;
pub mod file_loader;
pub mod loader;
pub mod model;
pub mod validator;

pub use config::{
    AndroidBuildOptions, AndroidConfig, AppConfig, IosConfig, KNOWN_PLUGINS, PackagingMode,
    ServerConfig,
};
pub use file_loader::{
    DEFAULT_CONFIG_NAMES, find_config, load_from_file, load_from_json, load_from_toml,
    load_from_yaml,
};
pub use loader::apply_env_overrides;
pub use model::{ConfigModel, ValidatedConfig};
pub use validator::{validate, validate_for};
