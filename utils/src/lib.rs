//! # Hullpack Utilities
//!
//! Value-level validation helpers shared by the configuration model.
//!
//! These functions check a single value in isolation; cross-field
//! invariants (all-or-nothing signing, release-mode exclusions) live in
//! the `config` crate.

/// URI schemes the Android WebView container accepts for serving the
/// bundled web application.
pub const ANDROID_SCHEMES: &[&str] = &["http", "https"];

/// Release artifact types the Android packaging step can produce.
pub const RELEASE_TYPES: &[&str] = &["AAB", "APK"];

/// Accepted values for the iOS `contentInset` behavior.
pub const CONTENT_INSETS: &[&str] = &["automatic", "scrollableAxes", "never", "always"];

/// Accepted values for the iOS `preferredContentMode` setting.
pub const CONTENT_MODES: &[&str] = &["recommended", "desktop", "mobile"];

/// Validate a reverse-DNS application identifier
///
/// At least two dot-separated segments, each starting with an ASCII
/// letter and continuing with letters, digits, or underscores. This is
/// the intersection of the Android package-name and iOS bundle-id rules,
/// so an id that passes here is stable across both platforms.
///
/// # Examples
///
/// ```
/// use utils::is_valid_app_id;
///
/// assert!(is_valid_app_id("com.example.app"));
/// assert!(!is_valid_app_id("example"));
/// assert!(!is_valid_app_id("com.1app"));
/// ```
#[must_use]
pub fn is_valid_app_id(app_id: &str) -> bool {
    let segments: Vec<&str> = app_id.split('.').collect();
    if segments.len() < 2 {
        return false;
    }
    segments.iter().all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    })
}

/// Validate a hex color literal
///
/// Accepts `#RRGGBB` and `#RRGGBBAA`, the two forms native splash and
/// status-bar surfaces understand.
///
/// # Examples
///
/// ```
/// use utils::is_valid_hex_color;
///
/// assert!(is_valid_hex_color("#0f172a"));
/// assert!(is_valid_hex_color("#0F172AFF"));
/// assert!(!is_valid_hex_color("0f172a"));
/// assert!(!is_valid_hex_color("#0f172"));
/// ```
#[must_use]
pub fn is_valid_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Validate an Android serving scheme string
#[must_use]
pub fn is_supported_android_scheme(scheme: &str) -> bool {
    ANDROID_SCHEMES.contains(&scheme)
}

/// Validate an Android release artifact type string
#[must_use]
pub fn is_valid_release_type(release_type: &str) -> bool {
    RELEASE_TYPES.contains(&release_type)
}

/// Validate an iOS content inset string
#[must_use]
pub fn is_valid_content_inset(inset: &str) -> bool {
    CONTENT_INSETS.contains(&inset)
}

/// Validate an iOS content mode string
#[must_use]
pub fn is_valid_content_mode(mode: &str) -> bool {
    CONTENT_MODES.contains(&mode)
}
