use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use config::{PackagingMode, apply_env_overrides};
use errors::ValidationError;

use crate::commands::load_model;
use crate::output;

#[derive(Args)]
pub struct ValidateArgs {
    #[arg(
        short,
        long,
        help = "Path to the config file (discovered in the current directory when omitted)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Validate for release packaging")]
    pub release: bool,

    #[arg(long, help = "Skip HULLPACK_* environment overrides")]
    pub no_env: bool,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let mut model = load_model(args.config.as_deref())?;

    if !args.no_env {
        for change in apply_env_overrides(model.config_mut())? {
            output::info(&format!("override: {change}"));
        }
    }

    let mode = if args.release {
        PackagingMode::Release
    } else {
        PackagingMode::Debug
    };

    let source = model
        .source()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<memory>".to_string());

    match model.validate_for(mode) {
        Ok(validated) => {
            for name in validated.get().unknown_plugins() {
                output::warn(&format!(
                    "unknown plugin {name:?}; options are forwarded unmodified"
                ));
            }
            output::success(&format!(
                "{source} is valid ({} plugin entries)",
                validated.get().plugins.len()
            ));
            Ok(())
        }
        Err(err) => {
            output::error(&err.to_string());
            hint_for(&err);
            anyhow::bail!("configuration is invalid: {}", err.field())
        }
    }
}

fn hint_for(err: &ValidationError) {
    match err {
        ValidationError::UnsupportedAndroidScheme { .. } => output::hint(&format!(
            "accepted schemes: {}",
            utils::ANDROID_SCHEMES.join(", ")
        )),
        ValidationError::UnsupportedReleaseType { .. } => output::hint(&format!(
            "accepted release types: {}",
            utils::RELEASE_TYPES.join(", ")
        )),
        ValidationError::PartialSigningConfig { .. } => output::hint(
            "set all four keystore fields for a signed release build, or none for a debug build",
        ),
        ValidationError::DevServerInRelease { .. } => output::hint(
            "remove server.url and server.cleartext (or unset the HULLPACK_SERVER_* variables) before packaging a release",
        ),
        _ => {}
    }
}
