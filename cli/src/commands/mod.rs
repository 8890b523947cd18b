use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::ConfigModel;

pub mod init;
pub mod show;
pub mod validate;

#[derive(Parser)]
#[command(
    name = "hullpack",
    version,
    about = "Package web applications into native iOS and Android shells"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter configuration file
    Init(init::InitArgs),
    /// Load and validate the configuration
    Validate(validate::ValidateArgs),
    /// Print the effective, validated configuration
    Show(show::ShowArgs),
}

/// Load the config from an explicit path, or discover it in the current
/// directory when none is given.
pub(crate) fn load_model(path: Option<&Path>) -> Result<ConfigModel> {
    match path {
        Some(path) => ConfigModel::load(path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
            ConfigModel::discover(&cwd).context("Failed to discover a config file")
        }
    }
}
