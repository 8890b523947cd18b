use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use config::{PackagingMode, apply_env_overrides};

use crate::commands::load_model;
use crate::output;

#[derive(Args)]
pub struct ShowArgs {
    #[arg(
        short,
        long,
        help = "Path to the config file (discovered in the current directory when omitted)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json, help = "Output format")]
    pub format: OutputFormat,

    #[arg(long, help = "Validate for release packaging")]
    pub release: bool,

    #[arg(long, help = "Skip HULLPACK_* environment overrides")]
    pub no_env: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
    Yaml,
}

pub fn run(args: ShowArgs) -> Result<()> {
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

    let validated = match model.validate_for(mode) {
        Ok(validated) => validated,
        Err(err) => {
            output::error(&err.to_string());
            anyhow::bail!("configuration is invalid: {}", err.field())
        }
    };

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(validated.get())
            .context("Failed to render config as JSON")?,
        OutputFormat::Toml => {
            toml::to_string_pretty(validated.get()).context("Failed to render config as TOML")?
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(validated.get()).context("Failed to render config as YAML")?
        }
    };

    println!("{rendered}");
    Ok(())
}
