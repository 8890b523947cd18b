//! # Configuration Structures
//!
//! This module defines the typed configuration record consumed by the
//! native packaging pipeline.
//!
//! All configuration structures:
//! - Use `serde` with camelCase field names matching the on-disk record
//! - Use `validator` for field-level validation
//! - Are immutable after validation (see [`crate::model`])

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Plugin names the packaging tool ships native bridges for.
///
/// Entries under `plugins` with other names are preserved and forwarded
/// unmodified (forward compatibility), with a warning-level diagnostic
/// emitted during validation.
pub const KNOWN_PLUGINS: &[&str] = &[
    "SplashScreen",
    "PushNotifications",
    "Keyboard",
    "StatusBar",
    "LocalNotifications",
    "Camera",
    "Microphone",
    "SpeechRecognition",
    "TextToSpeech",
    "Haptics",
    "ScreenReader",
];

/// Top-level configuration record for a packaged application.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Holds the build-time and runtime parameters for packaging a built web
/// application into native iOS and Android containers. Constructed once
/// per tool invocation, never mutated after validation, and discarded
/// when the packaging process exits.
///
/// ## Usage
/// ```rust,no_run
/// use config::ConfigModel;
/// use std::path::Path;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let model = ConfigModel::load(Path::new("hullpack.config.json"))?;
///     let validated = model.validate()?;
///     println!("Packaging {}", validated.get().app_id);
///     Ok(())
/// }
/// ```
///
/// ## Fields
/// - `app_id`: reverse-DNS application identifier, stable across builds
/// - `app_name`: human-readable display name
/// - `web_dir`: directory containing the built web application
/// - `server`: WebView serving configuration and development overrides
/// - `plugins`: opaque per-plugin options, preserved in insertion order
/// - `ios` / `android`: platform-specific overrides
///
/// ## Validation
/// `app_id`, `app_name`, and `web_dir` must be present and non-empty at
/// load time; everything else defaults. Cross-field invariants are
/// checked by [`crate::validator::validate_for`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Reverse-DNS application identifier
    #[serde(default)]
    #[validate(custom(function = "validate_app_id"))]
    pub app_id: String,

    /// Application display name
    #[serde(default)]
    #[validate(length(min = 1))]
    pub app_name: String,

    /// Directory containing the built web application
    #[serde(default)]
    #[validate(length(min = 1))]
    pub web_dir: String,

    /// WebView serving configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Per-plugin options, opaque to this component
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub plugins: serde_json::Map<String, serde_json::Value>,

    /// iOS container overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<IosConfig>,

    /// Android container overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<AndroidConfig>,
}

impl AppConfig {
    /// Plugin names configured here that this tool ships no bridge for.
    ///
    /// Returned in insertion order.
    #[must_use]
    pub fn unknown_plugins(&self) -> Vec<&str> {
        self.plugins
            .keys()
            .map(String::as_str)
            .filter(|name| !KNOWN_PLUGINS.contains(name))
            .collect()
    }
}

/// WebView serving configuration.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Controls how the native container serves the bundled web application,
/// plus the live-reload overrides used during development.
///
/// ## Fields
/// - `android_scheme`: URI scheme for the Android WebView origin
///   (default: "https")
/// - `url`: development override, serve from an external dev server
/// - `cleartext`: development override, allow cleartext traffic
///
/// ## Validation
/// `url` and `cleartext` are rejected under release packaging; they are
/// development-only settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// URI scheme for the Android WebView origin
    #[serde(default = "default_android_scheme")]
    #[validate(custom(function = "validate_android_scheme"))]
    pub android_scheme: String,

    /// Development override: external dev server URL (live reload)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Development override: allow cleartext traffic to the dev server
    #[serde(default)]
    pub cleartext: bool,
}

fn default_android_scheme() -> String {
    "https".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            android_scheme: default_android_scheme(),
            url: None,
            cleartext: false,
        }
    }
}

impl ServerConfig {
    /// True when any development-only override is set.
    #[must_use]
    pub fn has_dev_overrides(&self) -> bool {
        self.url.is_some() || self.cleartext
    }
}

/// iOS container overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IosConfig {
    /// WebView content inset behavior
    #[serde(default = "default_content_inset")]
    #[validate(custom(function = "validate_content_inset"))]
    pub content_inset: String,

    /// Preferred WebView content mode
    #[serde(default = "default_content_mode")]
    #[validate(custom(function = "validate_content_mode"))]
    pub preferred_content_mode: String,

    /// Custom URL scheme registered by the iOS container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// Background color behind the WebView
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_hex_color"))]
    pub background_color: Option<String>,

    /// Enable link previews on long press
    #[serde(default = "default_true")]
    pub allows_link_preview: bool,

    /// Enable WebView scrolling
    #[serde(default = "default_true")]
    pub scroll_enabled: bool,
}

fn default_content_inset() -> String {
    "automatic".to_string()
}

fn default_content_mode() -> String {
    "recommended".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for IosConfig {
    fn default() -> Self {
        Self {
            content_inset: default_content_inset(),
            preferred_content_mode: default_content_mode(),
            scheme: None,
            background_color: None,
            allows_link_preview: default_true(),
            scroll_enabled: default_true(),
        }
    }
}

/// Android container overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AndroidConfig {
    /// Allow mixed HTTP/HTTPS content in the WebView
    #[serde(default)]
    pub allow_mixed_content: bool,

    /// Capture keyboard input in the WebView
    #[serde(default)]
    pub capture_input: bool,

    /// Enable Chrome DevTools debugging of the WebView
    #[serde(default)]
    pub web_contents_debugging_enabled: bool,

    /// Background color behind the WebView
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_hex_color"))]
    pub background_color: Option<String>,

    /// Release build configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_options: Option<AndroidBuildOptions>,
}

/// Android build options.
///
/// The four keystore fields form the release signing credential set and
/// must be fully present or fully absent: absent means an unsigned debug
/// artifact, present means a signed release artifact. A partial set is an
/// invalid state and fails validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AndroidBuildOptions {
    /// Path to the release keystore
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystore_path: Option<String>,

    /// Keystore password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystore_password: Option<String>,

    /// Alias of the signing key inside the keystore
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystore_alias: Option<String>,

    /// Password of the signing key alias
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystore_alias_password: Option<String>,

    /// Release artifact type
    #[serde(default = "default_release_type")]
    #[validate(custom(function = "validate_release_type"))]
    pub release_type: String,
}

fn default_release_type() -> String {
    "AAB".to_string()
}

impl Default for AndroidBuildOptions {
    fn default() -> Self {
        Self {
            keystore_path: None,
            keystore_password: None,
            keystore_alias: None,
            keystore_alias_password: None,
            release_type: default_release_type(),
        }
    }
}

impl AndroidBuildOptions {
    fn signing_fields(&self) -> [(&'static str, bool); 4] {
        [
            ("keystorePath", self.keystore_path.is_some()),
            ("keystorePassword", self.keystore_password.is_some()),
            ("keystoreAlias", self.keystore_alias.is_some()),
            (
                "keystoreAliasPassword",
                self.keystore_alias_password.is_some(),
            ),
        ]
    }

    /// True when at least one signing credential is set.
    #[must_use]
    pub fn has_signing_fields(&self) -> bool {
        self.signing_fields().iter().any(|(_, present)| *present)
    }

    /// True when the full credential set is present (signed release build).
    #[must_use]
    pub fn is_release_signing(&self) -> bool {
        self.signing_fields().iter().all(|(_, present)| *present)
    }

    /// Names of the signing credentials still absent, in wire naming.
    #[must_use]
    pub fn missing_signing_fields(&self) -> Vec<String> {
        self.signing_fields()
            .iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| (*name).to_string())
            .collect()
    }
}

/// Packaging mode the configuration is validated against.
///
/// The record itself carries no mode; whether a build is a development
/// or a release packaging run is decided by the invoking tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PackagingMode {
    #[default]
    Debug,
    Release,
}

impl PackagingMode {
    #[must_use]
    pub fn is_release(self) -> bool {
        matches!(self, Self::Release)
    }
}

fn validate_app_id(value: &str) -> Result<(), validator::ValidationError> {
    if utils::is_valid_app_id(value) {
        Ok(())
    } else {
        Err(validator::ValidationError::new(
            "does not match reverse-DNS package naming",
        ))
    }
}

fn validate_android_scheme(value: &str) -> Result<(), validator::ValidationError> {
    if utils::is_supported_android_scheme(value) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("is not an accepted scheme"))
    }
}

fn validate_hex_color(value: &str) -> Result<(), validator::ValidationError> {
    if utils::is_valid_hex_color(value) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("is not a valid hex color"))
    }
}

fn validate_content_inset(value: &str) -> Result<(), validator::ValidationError> {
    if utils::is_valid_content_inset(value) {
        Ok(())
    } else {
        Err(validator::ValidationError::new(
            "is not an accepted content inset",
        ))
    }
}

fn validate_content_mode(value: &str) -> Result<(), validator::ValidationError> {
    if utils::is_valid_content_mode(value) {
        Ok(())
    } else {
        Err(validator::ValidationError::new(
            "is not an accepted content mode",
        ))
    }
}

fn validate_release_type(value: &str) -> Result<(), validator::ValidationError> {
    if utils::is_valid_release_type(value) {
        Ok(())
    } else {
        Err(validator::ValidationError::new(
            "is not an accepted release artifact type",
        ))
    }
}
