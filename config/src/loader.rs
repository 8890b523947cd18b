//! # Environment Variable Overrides
//!
//! Overlays development-time settings from the environment onto a loaded
//! configuration record, following 12-factor app principles.
//!
//! # Naming Convention
//! - `HULLPACK_SERVER_URL`: external dev server URL (live reload)
//! - `HULLPACK_SERVER_CLEARTEXT`: allow cleartext traffic (true/false)
//! - `HULLPACK_ANDROID_SCHEME`: Android WebView serving scheme
//! - `HULLPACK_WEB_DIR`: web asset directory
//!
//! The overlay runs before validation, so an override that breaks an
//! invariant is still caught.

use crate::config::AppConfig;
use errors::MalformedConfigError;
use std::env;

pub const ENV_SERVER_URL: &str = "HULLPACK_SERVER_URL";
pub const ENV_SERVER_CLEARTEXT: &str = "HULLPACK_SERVER_CLEARTEXT";
pub const ENV_ANDROID_SCHEME: &str = "HULLPACK_ANDROID_SCHEME";
pub const ENV_WEB_DIR: &str = "HULLPACK_WEB_DIR";

/// Apply environment overrides to a loaded record.
///
/// Returns the list of applied overrides (`field = value` form, also
/// logged at info level) so the invoking tool can surface what changed
/// relative to the source file.
pub fn apply_env_overrides(config: &mut AppConfig) -> Result<Vec<String>, MalformedConfigError> {
    let mut changes = Vec::new();

    if let Ok(url) = env::var(ENV_SERVER_URL) {
        changes.push(format!("server.url = {url}"));
        config.server.url = Some(url);
    }

    if let Ok(raw) = env::var(ENV_SERVER_CLEARTEXT) {
        let cleartext: bool = raw
            .parse()
            .map_err(|_| MalformedConfigError::Parse {
                format: "environment".to_string(),
                reason: format!("{ENV_SERVER_CLEARTEXT} must be \"true\" or \"false\", got {raw:?}"),
            })?;
        changes.push(format!("server.cleartext = {cleartext}"));
        config.server.cleartext = cleartext;
    }

    if let Ok(scheme) = env::var(ENV_ANDROID_SCHEME) {
        changes.push(format!("server.androidScheme = {scheme}"));
        config.server.android_scheme = scheme;
    }

    if let Ok(web_dir) = env::var(ENV_WEB_DIR) {
        changes.push(format!("webDir = {web_dir}"));
        config.web_dir = web_dir;
    }

    if !changes.is_empty() {
        tracing::info!("Configuration overrides from environment: {:?}", changes);
    }

    Ok(changes)
}
