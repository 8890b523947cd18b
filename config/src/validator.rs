//! # Configuration Validation
//!
//! Checks a parsed record against the semantic invariants of the
//! packaging contract.
//!
//! Field-level rules live on the structures as `validator` derives (see
//! [`crate::config`]); this module adds the cross-field rules the derive
//! cannot express (all-or-nothing release signing, the
//! development/release exclusions) and translates every violation into
//! [`errors::ValidationError`] with the offending field path.

use crate::config::{AppConfig, PackagingMode};
use errors::ValidationError;
use validator::Validate;

/// Validate a record for development packaging.
pub fn validate(config: &AppConfig) -> Result<(), ValidationError> {
    validate_for(config, PackagingMode::Debug)
}

/// Validate a record for the given packaging mode.
///
/// # M-CANONICAL-DOCS
///
/// ## Purpose
/// Enforces the semantic invariants of the packaging contract on a
/// structurally valid record.
///
/// ## Validation Rules
/// - `appId` matches reverse-DNS package naming
/// - `server.androidScheme` is an accepted scheme
/// - `ios.contentInset` / `ios.preferredContentMode` are accepted values
/// - `ios.backgroundColor` / `android.backgroundColor` are hex colors
/// - `android.buildOptions.releaseType` is an accepted artifact type
/// - the four keystore fields are all present or all absent
/// - under [`PackagingMode::Release`], `server.url` and
///   `server.cleartext` are rejected
///
/// ## Diagnostics
/// Plugin entries with unrecognized names are valid (options are opaque
/// and forwarded verbatim) but emit a warning-level diagnostic.
pub fn validate_for(config: &AppConfig, mode: PackagingMode) -> Result<(), ValidationError> {
    if !utils::is_valid_app_id(&config.app_id) {
        return Err(ValidationError::InvalidAppId {
            app_id: config.app_id.clone(),
        });
    }

    if !utils::is_supported_android_scheme(&config.server.android_scheme) {
        return Err(ValidationError::UnsupportedAndroidScheme {
            scheme: config.server.android_scheme.clone(),
        });
    }

    if let Some(ios) = &config.ios {
        if !utils::is_valid_content_inset(&ios.content_inset) {
            return Err(ValidationError::UnsupportedContentInset {
                value: ios.content_inset.clone(),
            });
        }
        if !utils::is_valid_content_mode(&ios.preferred_content_mode) {
            return Err(ValidationError::UnsupportedContentMode {
                value: ios.preferred_content_mode.clone(),
            });
        }
        if let Some(color) = &ios.background_color {
            if !utils::is_valid_hex_color(color) {
                return Err(ValidationError::InvalidHexColor {
                    field: "ios.backgroundColor".to_string(),
                    value: color.clone(),
                });
            }
        }
    }

    if let Some(android) = &config.android {
        if let Some(color) = &android.background_color {
            if !utils::is_valid_hex_color(color) {
                return Err(ValidationError::InvalidHexColor {
                    field: "android.backgroundColor".to_string(),
                    value: color.clone(),
                });
            }
        }
        if let Some(build) = &android.build_options {
            if !utils::is_valid_release_type(&build.release_type) {
                return Err(ValidationError::UnsupportedReleaseType {
                    value: build.release_type.clone(),
                });
            }
            if build.has_signing_fields() && !build.is_release_signing() {
                return Err(ValidationError::PartialSigningConfig {
                    missing: build.missing_signing_fields(),
                });
            }
        }
    }

    // Derive-level net for anything the explicit checks above don't cover
    check_derived(config, "")?;
    check_derived(&config.server, "server")?;
    if let Some(ios) = &config.ios {
        check_derived(ios, "ios")?;
    }
    if let Some(android) = &config.android {
        check_derived(android, "android")?;
        if let Some(build) = &android.build_options {
            check_derived(build, "android.buildOptions")?;
        }
    }

    if mode.is_release() {
        if config.server.url.is_some() {
            return Err(ValidationError::DevServerInRelease {
                field: "server.url".to_string(),
            });
        }
        if config.server.cleartext {
            return Err(ValidationError::DevServerInRelease {
                field: "server.cleartext".to_string(),
            });
        }
    }

    for name in config.unknown_plugins() {
        tracing::warn!(
            plugin = %name,
            "Unrecognized plugin entry; options are forwarded unmodified"
        );
    }

    Ok(())
}

fn check_derived<T: Validate>(section: &T, prefix: &str) -> Result<(), ValidationError> {
    section
        .validate()
        .map_err(|errors| first_violation(&errors, prefix))
}

/// Translate `validator` output into a [`ValidationError`] with a dotted
/// wire-name field path. Deterministic: the lowest field name wins.
fn first_violation(errors: &validator::ValidationErrors, prefix: &str) -> ValidationError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (field, violations) in fields {
        if let Some(violation) = violations.first() {
            let wire_name = snake_to_camel(field.as_ref());
            let path = if prefix.is_empty() {
                wire_name
            } else {
                format!("{prefix}.{wire_name}")
            };
            return ValidationError::Invariant {
                field: path,
                invariant: describe(violation),
            };
        }
    }

    ValidationError::Invariant {
        field: prefix.to_string(),
        invariant: "invalid value".to_string(),
    }
}

fn describe(violation: &validator::ValidationError) -> String {
    if let Some(message) = &violation.message {
        return message.to_string();
    }
    match violation.code.as_ref() {
        "length" => "must not be empty".to_string(),
        code => code.to_string(),
    }
}

fn snake_to_camel(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AndroidBuildOptions, AndroidConfig, IosConfig};

    fn minimal_config() -> AppConfig {
        AppConfig {
            app_id: "com.example.app".to_string(),
            app_name: "Example".to_string(),
            web_dir: "dist".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_config_is_valid() {
        assert!(validate(&minimal_config()).is_ok());
    }

    #[test]
    fn test_invalid_app_id() {
        let mut config = minimal_config();
        config.app_id = "justaname".to_string();
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidAppId { .. }));
        assert_eq!(err.field(), "appId");
    }

    #[test]
    fn test_unsupported_android_scheme() {
        let mut config = minimal_config();
        config.server.android_scheme = "ftp".to_string();
        let err = validate(&config).unwrap_err();
        assert!(
            matches!(err, ValidationError::UnsupportedAndroidScheme { scheme } if scheme == "ftp")
        );
    }

    #[test]
    fn test_partial_signing_fails() {
        let mut config = minimal_config();
        config.android = Some(AndroidConfig {
            build_options: Some(AndroidBuildOptions {
                keystore_alias: Some("release".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let err = validate(&config).unwrap_err();
        match err {
            ValidationError::PartialSigningConfig { missing } => {
                assert_eq!(missing.len(), 3);
                assert!(missing.contains(&"keystorePath".to_string()));
            }
            other => panic!("expected PartialSigningConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_full_signing_passes() {
        let mut config = minimal_config();
        config.android = Some(AndroidConfig {
            build_options: Some(AndroidBuildOptions {
                keystore_path: Some("release.keystore".to_string()),
                keystore_password: Some("secret".to_string()),
                keystore_alias: Some("release".to_string()),
                keystore_alias_password: Some("secret".to_string()),
                release_type: "AAB".to_string(),
            }),
            ..Default::default()
        });
        assert!(validate(&config).is_ok());
        assert!(validate_for(&config, PackagingMode::Release).is_ok());
    }

    #[test]
    fn test_absent_signing_passes() {
        let mut config = minimal_config();
        config.android = Some(AndroidConfig {
            build_options: Some(AndroidBuildOptions::default()),
            ..Default::default()
        });
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_bad_release_type() {
        let mut config = minimal_config();
        config.android = Some(AndroidConfig {
            build_options: Some(AndroidBuildOptions {
                release_type: "IPA".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        });
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedReleaseType { .. }));
        assert_eq!(err.field(), "android.buildOptions.releaseType");
    }

    #[test]
    fn test_bad_hex_colors() {
        let mut config = minimal_config();
        config.ios = Some(IosConfig {
            background_color: Some("navy".to_string()),
            ..Default::default()
        });
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidHexColor { ref field, .. } if field == "ios.backgroundColor"));

        let mut config = minimal_config();
        config.android = Some(AndroidConfig {
            background_color: Some("#12345".to_string()),
            ..Default::default()
        });
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidHexColor { ref field, .. } if field == "android.backgroundColor"));
    }

    #[test]
    fn test_bad_content_inset_and_mode() {
        let mut config = minimal_config();
        config.ios = Some(IosConfig {
            content_inset: "auto".to_string(),
            ..Default::default()
        });
        assert!(matches!(
            validate(&config),
            Err(ValidationError::UnsupportedContentInset { .. })
        ));

        let mut config = minimal_config();
        config.ios = Some(IosConfig {
            preferred_content_mode: "tablet".to_string(),
            ..Default::default()
        });
        assert!(matches!(
            validate(&config),
            Err(ValidationError::UnsupportedContentMode { .. })
        ));
    }

    #[test]
    fn test_dev_server_rejected_in_release() {
        let mut config = minimal_config();
        config.server.url = Some("http://192.168.1.20:5173".to_string());
        assert!(validate(&config).is_ok());

        let err = validate_for(&config, PackagingMode::Release).unwrap_err();
        assert!(matches!(err, ValidationError::DevServerInRelease { ref field } if field == "server.url"));

        let mut config = minimal_config();
        config.server.cleartext = true;
        let err = validate_for(&config, PackagingMode::Release).unwrap_err();
        assert!(matches!(err, ValidationError::DevServerInRelease { ref field } if field == "server.cleartext"));
    }

    #[test]
    fn test_unknown_plugin_is_valid() {
        let mut config = minimal_config();
        config.plugins.insert(
            "CustomBridge".to_string(),
            serde_json::json!({ "token": "abc" }),
        );
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_options_for_known_plugin_is_valid() {
        let mut config = minimal_config();
        config
            .plugins
            .insert("Camera".to_string(), serde_json::json!({}));
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_derived_length_violation_path() {
        let config = AppConfig {
            app_id: "com.example.app".to_string(),
            app_name: String::new(),
            web_dir: "dist".to_string(),
            ..Default::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ValidationError::Invariant { ref field, .. } if field == "appName"));
    }

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("app_name"), "appName");
        assert_eq!(snake_to_camel("android_scheme"), "androidScheme");
        assert_eq!(snake_to_camel("url"), "url");
    }
}
